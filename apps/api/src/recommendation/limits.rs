//! `limit` query handling. Bad input is clamped, never rejected.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitBounds {
    pub default: usize,
    pub max: usize,
}

pub const RECOMMENDATION_LIMIT: LimitBounds = LimitBounds {
    default: 10,
    max: 20,
};

pub const SIMILAR_JOBS_LIMIT: LimitBounds = LimitBounds { default: 5, max: 10 };

/// Absent, non-numeric, or zero → default. Negative → 1. Above max → max.
pub fn clamp_limit(raw: Option<&str>, bounds: LimitBounds) -> usize {
    let Some(parsed) = raw.and_then(leading_integer) else {
        return bounds.default;
    };
    match parsed {
        0 => bounds.default,
        n if n < 0 => 1,
        n => usize::try_from(n).unwrap_or(usize::MAX).min(bounds.max),
    }
}

/// Parses an optional sign and leading digits, ignoring trailing text ("12abc" → 12).
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_garbage_uses_default() {
        assert_eq!(clamp_limit(None, RECOMMENDATION_LIMIT), 10);
        assert_eq!(clamp_limit(Some("abc"), RECOMMENDATION_LIMIT), 10);
        assert_eq!(clamp_limit(Some(""), SIMILAR_JOBS_LIMIT), 5);
        assert_eq!(clamp_limit(Some("0"), SIMILAR_JOBS_LIMIT), 5);
    }

    #[test]
    fn test_values_clamped_into_range() {
        assert_eq!(clamp_limit(Some("7"), RECOMMENDATION_LIMIT), 7);
        assert_eq!(clamp_limit(Some("500"), RECOMMENDATION_LIMIT), 20);
        assert_eq!(clamp_limit(Some("11"), SIMILAR_JOBS_LIMIT), 10);
        assert_eq!(clamp_limit(Some("-3"), RECOMMENDATION_LIMIT), 1);
        assert_eq!(clamp_limit(Some("99999999999999999999"), SIMILAR_JOBS_LIMIT), 10);
    }

    #[test]
    fn test_trailing_text_ignored() {
        assert_eq!(clamp_limit(Some("12abc"), RECOMMENDATION_LIMIT), 12);
        assert_eq!(clamp_limit(Some(" 3 "), SIMILAR_JOBS_LIMIT), 3);
    }
}
