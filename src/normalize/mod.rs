//! Field normalization for raw listing text
//!
//! Pure conversions from the text fragments found on a listing page into
//! typed values:
//! - storage capacity in megabytes
//! - availability label and in-stock flag
//! - shipping date as a calendar date
//!
//! Nothing here touches the DOM or the network.

mod availability;
mod capacity;
mod shipping;

pub use availability::{normalize_availability, Availability, AVAILABILITY_PREFIX, IN_STOCK_TEXT};
pub use capacity::{normalize_capacity, CapacityError, MEGABYTES_IN_GIGABYTE};
pub use shipping::normalize_shipping_date;
