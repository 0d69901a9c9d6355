use time::{Date, Month, Time};

/// Czech month name in the nominative, the form used when the date is
/// displayed as "5. březen 2024".
pub fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "leden",
        Month::February => "únor",
        Month::March => "březen",
        Month::April => "duben",
        Month::May => "květen",
        Month::June => "červen",
        Month::July => "červenec",
        Month::August => "srpen",
        Month::September => "září",
        Month::October => "říjen",
        Month::November => "listopad",
        Month::December => "prosinec",
    }
}

/// Formats a date by Czech conventions: day of month without a leading
/// zero, a dot, the month written out, and the four-digit year.
pub fn format_date(date: Date) -> String {
    format!(
        "{}. {} {}",
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

/// Formats a time of day by Czech conventions: 24-hour clock, hour
/// without a leading zero, minutes always two digits.
pub fn format_time(time: Time) -> String {
    format!("{}:{:02}", time.hour(), time.minute())
}
