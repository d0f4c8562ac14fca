use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Weight value (kg) - uses Decimal so capacity sums stay exact
pub type Weight = Decimal;

/// Quantity of whole resource units
pub type Quantity = u32;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Name of a tradeable resource (unique key in the catalog)
pub type ResourceName = String;
