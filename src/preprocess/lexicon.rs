/// Multi-word automotive phrases collapsed into one token before splitting.
///
/// Applied in this order as plain substring replacement over the lowercased
/// text, so an earlier phrase wins over a later overlapping one
/// ("check engine light" must stay ahead of "check engine",
/// "engine oil" ahead of "oil change").
pub const COMPOUND_PHRASES: &[(&str, &str)] = &[
    ("check engine light", "check_engine_light"),
    ("check engine", "check_engine"),
    ("engine oil", "engine_oil"),
    ("oil change", "oil_change"),
    ("spark plug", "spark_plug"),
    ("brake pad", "brake_pad"),
    ("brake fluid", "brake_fluid"),
    ("timing belt", "timing_belt"),
    ("serpentine belt", "serpentine_belt"),
    ("catalytic converter", "catalytic_converter"),
    ("oxygen sensor", "oxygen_sensor"),
    ("o2 sensor", "o2_sensor"),
    ("mass air flow", "mass_air_flow"),
    ("air filter", "air_filter"),
    ("fuel pump", "fuel_pump"),
    ("fuel injector", "fuel_injector"),
    ("head gasket", "head_gasket"),
    ("water pump", "water_pump"),
    ("transmission fluid", "transmission_fluid"),
    ("power steering", "power_steering"),
    ("tire pressure", "tire_pressure"),
    ("wheel bearing", "wheel_bearing"),
    ("battery light", "battery_light"),
];

/// English function words dropped after tokenizing.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

#[inline]
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}
