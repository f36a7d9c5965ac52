//! Date helpers for the form and the cards.

use chrono::NaiveDate;

/// Local calendar date, used as the form default
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Value format of `<input type="date">`
pub fn to_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_input_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Day-first display, e.g. `05/01/2024`
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
