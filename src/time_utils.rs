use chrono::{Datelike, NaiveDate};

/// X-axis tick text: zero-padded day of month (`02`).
pub fn format_day_of_month(date: NaiveDate) -> String {
    date.format("%d").to_string()
}

/// Month label text: abbreviated month and two-digit year (`Jan '24`).
pub fn format_month_label(date: NaiveDate) -> String {
    format!("{} '{}", date.format("%b"), date.format("%y"))
}

/// Tooltip date: `MM/DD/YYYY`.
pub fn format_tooltip_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Zero-based month index, as used for month grouping.
pub fn month_index(date: NaiveDate) -> u32 {
    date.month0()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(format_day_of_month(date), "02");
        assert_eq!(format_month_label(date), "Jan '24");
        assert_eq!(format_tooltip_date(date), "01/02/2024");
        assert_eq!(month_index(date), 0);
    }

    #[test]
    fn two_digit_year_keeps_leading_zero() {
        let date = NaiveDate::from_ymd_opt(2009, 12, 31).unwrap();
        assert_eq!(format_month_label(date), "Dec '09");
    }
}
