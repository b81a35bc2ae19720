//! Shrinkage percentage and pass/fail for garment measurements

use super::rows::{PassFail, ShrinkageRow};

/// Allowed shrinkage when the requirement names no number
pub const DEFAULT_SHRINKAGE_LIMIT: f64 = 5.0;

/// Parse a tape-measure value: "42", "42.5", "1/2", "42 1/2", "-1/2".
/// Each number is read up to its first non-numeric character, so "42cm" is 42.
/// Anything unreadable counts as 0.
pub fn parse_fraction(value: &str) -> f64 {
    let value = value.trim();
    if value.is_empty() {
        return 0.0;
    }

    let parts: Vec<&str> = value.split_whitespace().collect();
    let parsed = match parts.as_slice() {
        [whole, fraction] => {
            let whole = parse_number(whole).unwrap_or(0.0);
            match parse_ratio(fraction) {
                Some(ratio) if whole < 0.0 => Some(whole - ratio),
                Some(ratio) => Some(whole + ratio),
                None => Some(whole),
            }
        }
        [single] if single.contains('/') => parse_ratio(single),
        [single] => parse_number(single),
        _ => None,
    };

    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn parse_ratio(value: &str) -> Option<f64> {
    let (numerator, denominator) = value.split_once('/')?;
    Some(parse_number(numerator)? / parse_number(denominator)?)
}

/// Leading decimal number of `value`, ignoring whatever follows it
fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim();
    let bytes = value.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => {}
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    value[..end].parse::<f64>().ok()
}

/// First whole number in a requirement such as "±5%"
pub fn requirement_limit(requirement: &str) -> f64 {
    let digits: String = requirement
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<f64>().unwrap_or(DEFAULT_SHRINKAGE_LIMIT)
}

impl ShrinkageRow {
    /// Recompute `shrinkage` and `pass_fail` from the before/after measurements.
    ///
    /// With one side missing the percentage is cleared and a manual verdict is
    /// kept; with both missing the verdict returns to PASS.
    pub fn recalculate(&mut self) {
        let before_blank = self.before_wash.trim().is_empty();
        let after_blank = self.after_wash.trim().is_empty();
        let before = parse_fraction(&self.before_wash);

        if before != 0.0 && !before_blank && !after_blank {
            let after = parse_fraction(&self.after_wash);
            let shrinkage = (after - before) / before * 100.0;
            self.shrinkage = format!("{:.2}%", shrinkage);
            self.pass_fail = if shrinkage.abs() <= requirement_limit(&self.requirement) {
                PassFail::Pass
            } else {
                PassFail::Fail
            };
        } else {
            self.shrinkage.clear();
            if before_blank && after_blank {
                self.pass_fail = PassFail::Pass;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fraction_forms() {
        assert_eq!(parse_fraction("42"), 42.0);
        assert_eq!(parse_fraction("42.5"), 42.5);
        assert_eq!(parse_fraction("1/2"), 0.5);
        assert_eq!(parse_fraction("1 1/2"), 1.5);
        assert_eq!(parse_fraction("-1/2"), -0.5);
        assert_eq!(parse_fraction(" 20 3/4 "), 20.75);
        assert_eq!(parse_fraction(""), 0.0);
        assert_eq!(parse_fraction("abc"), 0.0);
        assert_eq!(parse_fraction("1/0"), 0.0);
    }

    #[test]
    fn test_parse_fraction_reads_leading_number() {
        assert_eq!(parse_fraction("42cm"), 42.0);
        assert_eq!(parse_fraction("42.5 cm"), 42.5);
        assert_eq!(parse_fraction("3/4in"), 0.75);
        assert_eq!(parse_fraction(".5"), 0.5);
        assert_eq!(parse_fraction("-"), 0.0);
        assert_eq!(parse_fraction("cm42"), 0.0);
        // the fraction moves a negative measurement further from zero
        assert_eq!(parse_fraction("-1 1/2"), -1.5);
    }

    #[test]
    fn test_requirement_limit() {
        assert_eq!(requirement_limit("±5%"), 5.0);
        assert_eq!(requirement_limit("max 3 %"), 3.0);
        assert_eq!(requirement_limit(""), DEFAULT_SHRINKAGE_LIMIT);
    }

    #[test]
    fn test_recalculate_pass_and_fail() {
        let mut row = ShrinkageRow {
            before_wash: "20".to_string(),
            after_wash: "19 1/2".to_string(),
            ..ShrinkageRow::default()
        };
        row.recalculate();
        assert_eq!(row.shrinkage, "-2.50%");
        assert_eq!(row.pass_fail, PassFail::Pass);

        row.after_wash = "18".to_string();
        row.recalculate();
        assert_eq!(row.shrinkage, "-10.00%");
        assert_eq!(row.pass_fail, PassFail::Fail);
    }

    #[test]
    fn test_recalculate_blank_inputs() {
        let mut row = ShrinkageRow {
            before_wash: "20".to_string(),
            after_wash: "18".to_string(),
            ..ShrinkageRow::default()
        };
        row.recalculate();
        assert_eq!(row.pass_fail, PassFail::Fail);

        // one side cleared keeps the verdict
        row.after_wash.clear();
        row.recalculate();
        assert_eq!(row.shrinkage, "");
        assert_eq!(row.pass_fail, PassFail::Fail);

        row.before_wash.clear();
        row.recalculate();
        assert_eq!(row.pass_fail, PassFail::Pass);
    }
}
