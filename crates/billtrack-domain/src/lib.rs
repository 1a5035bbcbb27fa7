//! billtrack-domain
//!
//! Pure domain models (bill templates, bill instances, frequencies).
//! No I/O, no logging, no storage. Only data types, enums and calendar math.

pub mod bill;
pub mod calendar;
pub mod common;
pub mod frequency;

pub use bill::*;
pub use common::*;
pub use frequency::*;
