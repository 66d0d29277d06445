/// formats an integer with comma thousands separators, e.g. 175550 -> "175,550".
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// a percentage with one decimal place, e.g. 75.55 -> "75.6%".
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// a signed integer change with thousands separators, e.g. "+75,550".
pub fn signed_thousands(value: i64) -> String {
    if value < 0 {
        thousands(value)
    } else {
        format!("+{}", thousands(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(175_550), "175,550");
        assert_eq!(thousands(1_234_567), "1,234,567");
        assert_eq!(thousands(-75_550), "-75,550");
        assert_eq!(thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(75.55000000000001), "75.6%");
        assert_eq!(percent(0.0), "0.0%");
        assert_eq!(percent(24.0), "24.0%");
    }

    #[test]
    fn test_signed_thousands() {
        assert_eq!(signed_thousands(75_550), "+75,550");
        assert_eq!(signed_thousands(0), "+0");
        assert_eq!(signed_thousands(-1_200), "-1,200");
    }
}
