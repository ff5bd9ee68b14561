use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One colour variant of a listed product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Product display name
    pub title: String,

    /// Price with the currency symbol stripped
    pub price: f64,

    /// Absolute image URL
    pub image_url: String,

    /// Storage capacity in megabytes
    #[serde(rename = "capacityMB")]
    pub capacity_mb: u64,

    /// Variant colour identifier
    pub colour: String,

    /// Availability label without its `Availability:` prefix
    pub availability_text: String,

    /// Whether the availability label reports the product in stock
    pub is_available: bool,

    /// Raw shipping text, empty when the card has none
    pub shipping_text: String,

    /// Delivery date parsed from the shipping text
    pub shipping_date: Option<NaiveDate>,
}

/// Fields that decide whether two records describe the same product
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    pub title: String,
    pub capacity_mb: u64,
    pub colour: String,
}

impl ProductRecord {
    /// Returns the deduplication key of this record
    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey {
            title: self.title.clone(),
            capacity_mb: self.capacity_mb,
            colour: self.colour.clone(),
        }
    }
}
