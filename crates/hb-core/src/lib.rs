//! hb-core: shared foundation for the Haber–Bosch equation crates.
//!
//! Contains:
//! - numeric (tolerances, float comparison, finiteness checks)
//! - error (shared error types)

pub mod error;
pub mod numeric;

pub use error::HbError;
pub use numeric::*;
