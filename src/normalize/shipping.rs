use chrono::{Days, NaiveDate};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// "24 December 2024"
    static ref DAY_MONTH_YEAR: Regex = Regex::new(r"(\d{1,2}) (\w+) (\d{4})").unwrap();

    /// "2024-12-24"
    static ref ISO_DATE: Regex = Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap();

    /// "Tuesday 24th December 2024"
    static ref WEEKDAY_ORDINAL: Regex =
        Regex::new(r"\w+day\s(\d{1,2})(?:st|th|rd|nd)\s(\w+) (\d{4})").unwrap();

    static ref TOMORROW: Regex = Regex::new(r"tomorrow").unwrap();
}

/// Date phrasings recognised in shipping text, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShippingPattern {
    DayMonthYear,
    IsoDate,
    WeekdayOrdinal,
    Tomorrow,
}

impl ShippingPattern {
    const ORDER: [ShippingPattern; 4] = [
        ShippingPattern::DayMonthYear,
        ShippingPattern::IsoDate,
        ShippingPattern::WeekdayOrdinal,
        ShippingPattern::Tomorrow,
    ];

    fn regex(self) -> &'static Regex {
        match self {
            ShippingPattern::DayMonthYear => &*DAY_MONTH_YEAR,
            ShippingPattern::IsoDate => &*ISO_DATE,
            ShippingPattern::WeekdayOrdinal => &*WEEKDAY_ORDINAL,
            ShippingPattern::Tomorrow => &*TOMORROW,
        }
    }

    fn to_date(self, captures: &Captures<'_>, reference_date: NaiveDate) -> Option<NaiveDate> {
        match self {
            ShippingPattern::DayMonthYear | ShippingPattern::WeekdayOrdinal => {
                day_month_year(&captures[1], &captures[2], &captures[3])
            }
            ShippingPattern::IsoDate => NaiveDate::parse_from_str(&captures[0], "%Y-%m-%d").ok(),
            ShippingPattern::Tomorrow => reference_date.checked_add_days(Days::new(1)),
        }
    }
}

/// Extracts a delivery date from free-form shipping text
///
/// Patterns are tried in a fixed order and the first one found anywhere in
/// the text decides the result, even when a later pattern would also match:
///
/// 1. `D Month YYYY`
/// 2. `YYYY-MM-DD`
/// 3. `Weekday Dst Month YYYY`
/// 4. `tomorrow`, resolved against `reference_date`
///
/// Returns `None` for empty text, unrecognised text, or when the winning
/// match is not a real calendar date.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use listing_harvester::normalize::normalize_shipping_date;
///
/// let today = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
/// let date = normalize_shipping_date("Delivery by 24 December 2024", today);
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 12, 24));
/// ```
pub fn normalize_shipping_date(raw: &str, reference_date: NaiveDate) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }

    ShippingPattern::ORDER
        .iter()
        .find_map(|pattern| {
            pattern
                .regex()
                .captures(raw)
                .map(|captures| pattern.to_date(&captures, reference_date))
        })
        .flatten()
}

/// Builds a date from a day number, an English month name and a year
fn day_month_year(day: &str, month: &str, year: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{} {} {}", day, month, year), "%d %B %Y").ok()
}
