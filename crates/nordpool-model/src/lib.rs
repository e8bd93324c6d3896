//! Wire types of the control-room price API.

mod price;
pub use price::{PriceRecord, PriceResponse};
