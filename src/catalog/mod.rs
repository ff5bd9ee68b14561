//! Product records and the deduplicating catalog they accumulate into

mod accumulator;
mod record;

pub use accumulator::Catalog;
pub use record::{IdentityKey, ProductRecord};
