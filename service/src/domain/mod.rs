//! Domain definitions.

pub mod lease;
pub mod occupancy;
pub mod section;

pub use self::{lease::Row, occupancy::Occupancy, section::Tenancy};
