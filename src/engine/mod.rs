//! Exploration engine: classification, filtering and aggregation

pub mod classify;
pub mod correlation;
pub mod distribution;
pub mod error;
pub mod filter;
pub mod loader;
pub mod numeral;
pub mod predicate;
pub mod session;
pub mod unique;

pub use classify::*;
pub use correlation::*;
pub use distribution::*;
pub use error::*;
pub use filter::*;
pub use loader::*;
pub use numeral::*;
pub use predicate::*;
pub use session::*;
pub use unique::*;
