use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref YEAR_RE: Regex = Regex::new(r"(?i)(\d+)\s*year").unwrap();
    static ref MONTH_RE: Regex = Regex::new(r"(?i)(\d+)\s*month").unwrap();
}

/// Convert free-text age ("2 years 3 months", "5 months") to total months.
///
/// Either token may appear anywhere in the string; text with neither token
/// yields 0, so an animal with an unreadable age reads as newborn rather
/// than being rejected.
pub fn age_to_months(age_text: &str) -> u32 {
    let years = capture_number(&YEAR_RE, age_text);
    let months = capture_number(&MONTH_RE, age_text);
    years.saturating_mul(12).saturating_add(months)
}

fn capture_number(re: &Regex, text: &str) -> u32 {
    // The capture is all digits, so parsing only fails on overflow;
    // saturate so an absurd count never reads as newborn.
    re.captures(text)
        .map(|caps| caps[1].parse().unwrap_or(u32::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_and_months() {
        assert_eq!(age_to_months("2 years 3 months"), 27);
        assert_eq!(age_to_months("1 year 1 month"), 13);
    }

    #[test]
    fn test_months_only() {
        assert_eq!(age_to_months("5 months"), 5);
        assert_eq!(age_to_months("1 month"), 1);
    }

    #[test]
    fn test_years_only() {
        assert_eq!(age_to_months("3 years"), 36);
    }

    #[test]
    fn test_case_and_whitespace_tolerance() {
        assert_eq!(age_to_months("2 YEARS 3 Months"), 27);
        assert_eq!(age_to_months("10months"), 10);
        assert_eq!(age_to_months("4   years"), 48);
    }

    #[test]
    fn test_huge_ages_saturate_instead_of_wrapping() {
        // Multiplication would overflow u32.
        assert_eq!(age_to_months("400000000 years"), u32::MAX);
        // Count too large for u32 at all.
        assert_eq!(age_to_months("99999999999999999999 months"), u32::MAX);
        assert!(age_to_months("99999999999999999999 years") >= 6);
    }

    #[test]
    fn test_no_tokens_yields_zero() {
        assert_eq!(age_to_months(""), 0);
        assert_eq!(age_to_months("Adult"), 0);
        assert_eq!(age_to_months("unknown"), 0);
    }
}
