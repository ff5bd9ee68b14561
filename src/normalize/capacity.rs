use thiserror::Error;

/// Conversion factor between the listing's gigabytes and megabytes
pub const MEGABYTES_IN_GIGABYTE: u64 = 1000;

const MEGABYTE_UNIT: &str = "MB";
const GIGABYTE_UNIT: &str = "GB";

/// Capacity text that could not be turned into a number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapacityError {
    #[error("no capacity value in '{raw}'")]
    Unparseable { raw: String },

    #[error("capacity value in '{raw}' is too large")]
    Overflow { raw: String },
}

/// Normalizes a capacity label to megabytes
///
/// Text containing `MB` is read as megabytes. Anything else is read as
/// gigabytes and scaled by [`MEGABYTES_IN_GIGABYTE`]. Only the leading run of
/// digits is used once the unit is removed, so `"64 GB"` and `"64GB"` agree.
///
/// # Example
///
/// ```
/// use listing_harvester::normalize::normalize_capacity;
///
/// assert_eq!(normalize_capacity("512MB").unwrap(), 512);
/// assert_eq!(normalize_capacity("256GB").unwrap(), 256_000);
/// assert!(normalize_capacity("unknown").is_err());
/// ```
pub fn normalize_capacity(raw: &str) -> Result<u64, CapacityError> {
    if raw.contains(MEGABYTE_UNIT) {
        return leading_integer(&raw.replace(MEGABYTE_UNIT, ""), raw);
    }

    let gigabytes = leading_integer(&raw.replace(GIGABYTE_UNIT, ""), raw)?;
    gigabytes
        .checked_mul(MEGABYTES_IN_GIGABYTE)
        .ok_or_else(|| CapacityError::Overflow {
            raw: raw.to_string(),
        })
}

/// Parses the digits at the start of the trimmed value
fn leading_integer(value: &str, raw: &str) -> Result<u64, CapacityError> {
    let value = value.trim();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());

    if end == 0 {
        return Err(CapacityError::Unparseable {
            raw: raw.to_string(),
        });
    }

    value[..end].parse().map_err(|_| CapacityError::Overflow {
        raw: raw.to_string(),
    })
}
