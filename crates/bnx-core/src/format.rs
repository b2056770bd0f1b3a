//! fr-FR presentation helpers shared by the CLI and the PDF export.

use chrono::NaiveDate;

/// Group digits by thousands with a space: `12000` → `12 000`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// `dd/mm/yyyy`.
#[must_use]
pub fn date_fr(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Shortest decimal form of a p-value, as `p = …` expects it (`0.001`).
#[must_use]
pub fn significance(value: f64) -> String {
    value.to_string()
}

/// Percentage without a trailing `.0` (`95` → `95%`).
#[must_use]
pub fn percent(value: f64) -> String {
    format!("{value}%")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "0")]
    #[case(567, "567")]
    #[case(2400, "2 400")]
    #[case(12000, "12 000")]
    #[case(15814, "15 814")]
    #[case(1_234_567, "1 234 567")]
    fn groups_thousands(#[case] value: u64, #[case] expected: &str) {
        assert_eq!(group_thousands(value), expected);
    }

    #[test]
    fn formats_french_date() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
        assert_eq!(date_fr(date), "15/12/2024");
    }

    #[rstest]
    #[case(0.001, "0.001")]
    #[case(0.0001, "0.0001")]
    #[case(0.005, "0.005")]
    fn formats_significance(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(significance(value), expected);
    }

    #[test]
    fn formats_whole_percent() {
        assert_eq!(percent(95.0), "95%");
        assert_eq!(percent(99.5), "99.5%");
    }
}
