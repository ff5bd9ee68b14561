/// Label prefix stripped from availability text
pub const AVAILABILITY_PREFIX: &str = "Availability:";

/// Phrase marking a product as in stock
pub const IN_STOCK_TEXT: &str = "In Stock";

/// Normalized availability of a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    /// Display text without the `Availability:` label
    pub text: String,

    /// Whether the raw text mentions `In Stock`
    pub is_available: bool,
}

/// Normalizes an availability block
///
/// The in-stock check is a case-sensitive substring test on the raw text,
/// so any phrase containing `In Stock` counts as available.
///
/// # Example
///
/// ```
/// use listing_harvester::normalize::normalize_availability;
///
/// let availability = normalize_availability("Availability: In Stock Online");
/// assert_eq!(availability.text, "In Stock Online");
/// assert!(availability.is_available);
/// ```
pub fn normalize_availability(raw: &str) -> Availability {
    Availability {
        text: raw.replace(AVAILABILITY_PREFIX, "").trim().to_string(),
        is_available: raw.contains(IN_STOCK_TEXT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_stock() {
        let availability = normalize_availability("Availability: In Stock");
        assert_eq!(availability.text, "In Stock");
        assert!(availability.is_available);
    }

    #[test]
    fn test_out_of_stock() {
        let availability = normalize_availability("Availability: Out of Stock");
        assert_eq!(availability.text, "Out of Stock");
        assert!(!availability.is_available);
    }

    #[test]
    fn test_case_sensitive_match() {
        assert!(!normalize_availability("Availability: in stock").is_available);
        assert!(!normalize_availability("Availability: IN STOCK").is_available);
    }

    #[test]
    fn test_substring_match_anywhere() {
        assert!(normalize_availability("In Stock").is_available);
        assert!(normalize_availability("Availability: In Stock Online").is_available);
        assert!(normalize_availability("Not In Stock").is_available);
    }

    #[test]
    fn test_prefix_never_survives() {
        let availability = normalize_availability("Availability:Availability: Preorder");
        assert_eq!(availability.text, "Preorder");
        assert!(!availability.text.contains(AVAILABILITY_PREFIX));
    }

    #[test]
    fn test_text_without_prefix_is_trimmed() {
        let availability = normalize_availability("   Limited   ");
        assert_eq!(availability.text, "Limited");
        assert!(!availability.is_available);
    }

    #[test]
    fn test_empty() {
        let availability = normalize_availability("");
        assert_eq!(availability.text, "");
        assert!(!availability.is_available);
    }
}
