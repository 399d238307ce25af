//! Wire-level reading types.
//!
//! - `reading`: the stored `SensorReading` and its enumerations
//! - `draft`: caller-supplied partial reading used by append

pub mod draft;
pub mod reading;

pub use draft::ReadingDraft;
pub use reading::{FeedingStatus, GeoPoint, ReadingId, SensorReading, SignalStrength};
