//! Rule-based suffix stripper.
//!
//! A cut-down relative of Porter's algorithm: plural rules, the -eed/-ed/-ing
//! step with `e` restoration, then a single pass over derivational suffixes.
//! Only ASCII input is expected (the tokenizer guarantees it).

/// Derivational suffixes tried in priority order; the first hit is applied.
const DERIVATIONAL_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("ation", "ate"),
    ("ness", ""),
    ("ment", ""),
    ("able", ""),
    ("ible", ""),
    ("ful", ""),
    ("ous", ""),
    ("ive", ""),
    ("ly", ""),
];

#[inline]
fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

#[inline]
fn contains_vowel(s: &str) -> bool {
    s.chars().any(is_vowel)
}

fn replace_suffix(word: &str, suffix: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(word.len());
    out.push_str(&word[..word.len() - suffix.len()]);
    out.push_str(replacement);
    out
}

/// sses -> ss, ies -> i, trailing s dropped (but not ss)
fn strip_plural(word: String) -> String {
    if word.ends_with("sses") {
        replace_suffix(&word, "sses", "ss")
    } else if word.ends_with("ies") {
        replace_suffix(&word, "ies", "i")
    } else if word.ends_with('s') && !word.ends_with("ss") {
        replace_suffix(&word, "s", "")
    } else {
        word
    }
}

fn restore_e(stem: String) -> String {
    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        let mut stem = stem;
        stem.push('e');
        stem
    } else {
        stem
    }
}

fn strip_verbal(word: String) -> String {
    if word.ends_with("eed") {
        let base = &word[..word.len() - 3];
        if contains_vowel(base) {
            return replace_suffix(&word, "eed", "ee");
        }
        return word;
    }
    for suffix in ["ed", "ing"] {
        if word.ends_with(suffix) {
            let base = &word[..word.len() - suffix.len()];
            if contains_vowel(base) {
                return restore_e(base.to_string());
            }
            return word;
        }
    }
    word
}

fn strip_derivational(word: String) -> String {
    DERIVATIONAL_RULES
        .iter()
        .find(|(suffix, _)| word.ends_with(suffix))
        .map(|(suffix, replacement)| replace_suffix(&word, suffix, replacement))
        .unwrap_or(word)
}

/// Stem a single lowercase token.
///
/// Words of three characters or fewer and underscore compounds are returned
/// untouched. A stem shorter than two characters falls back to the input.
pub fn stem(word: &str) -> String {
    if word.len() <= 3 || word.contains('_') {
        return word.to_string();
    }
    let stemmed = strip_derivational(strip_verbal(strip_plural(word.to_string())));
    if stemmed.len() < 2 {
        word.to_string()
    } else {
        stemmed
    }
}
