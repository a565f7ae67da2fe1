use num::Float;

/// `num / den`, or zero when the denominator is not positive.
#[inline]
pub fn safe_ratio<F: Float>(num: F, den: F) -> F {
    if den > F::zero() {
        num / den
    } else {
        F::zero()
    }
}

/// Harmonic mean of two rates; zero when both are zero.
#[inline]
pub fn harmonic_mean<F: Float>(a: F, b: F) -> F {
    let sum = a + b;
    if sum > F::zero() {
        (F::one() + F::one()) * a * b / sum
    } else {
        F::zero()
    }
}

/// Clamp into the closed unit interval.
#[inline]
pub fn clamp_unit<F: Float>(value: F) -> F {
    num::clamp(value, F::zero(), F::one())
}

/// Unweighted mean, zero for an empty slice.
pub fn mean<F: Float>(values: &[F]) -> F {
    match <F as num::NumCast>::from(values.len()) {
        Some(n) if !values.is_empty() => values.iter().fold(F::zero(), |acc, v| acc + *v) / n,
        _ => F::zero(),
    }
}
