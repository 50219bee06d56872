use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_days_only() {
        assert_eq!(
            parse_date(" 2025-01-05 "),
            NaiveDate::from_ymd_opt(2025, 1, 5)
        );
        assert!(parse_date("2025-13-01").is_none());
        assert!(parse_date("1.5").is_none());
    }
}
