//! Correlator math utilities.

pub mod math;

pub use math::beta::*;
pub use math::describe::*;
pub use math::pearson::*;
pub use math::stable::*;
