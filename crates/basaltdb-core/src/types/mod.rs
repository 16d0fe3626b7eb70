mod date;
mod decimal;
mod duration;
mod float32;
mod float64;
mod timestamp;

pub use date::Date;
pub use decimal::{Decimal, DecimalParts};
pub use duration::Duration;
pub use float32::Float32;
pub use float64::Float64;
pub use timestamp::Timestamp;
