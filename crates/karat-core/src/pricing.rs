/// Derived price formula: `(popularity + 1) * weight * quote`.
///
/// Pure arithmetic; negative or non-finite inputs propagate as-is rather
/// than being validated here.
#[must_use]
pub fn price(popularity_score: f64, weight: f64, gold_price_per_gram: f64) -> f64 {
    (popularity_score + 1.0) * weight * gold_price_per_gram
}

/// Round to 2 decimal places, half away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_matches_formula() {
        // quote fixed at 60 across the reference scenario
        assert!((price(0.2, 2.0, 60.0) - 144.0).abs() < 1e-9);
        assert!((price(0.8, 3.0, 60.0) - 324.0).abs() < 1e-9);
        assert!((price(0.5, 1.0, 60.0) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn price_with_zero_weight_is_zero() {
        assert!((price(0.9, 0.0, 75.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn round2_truncates_to_cents() {
        assert!((round2(123.456) - 123.46).abs() < 1e-9);
        assert!((round2(123.454) - 123.45).abs() < 1e-9);
        assert!((round2(75.0) - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn price_then_round_matches_reference() {
        // price(p, w, q) rounded to cents is the value the API serves
        let raw = price(0.41, 2.3, 87.654_3);
        assert!((round2(raw) - 284.26).abs() < 1e-9, "got {}", round2(raw));
    }
}
