//! Core math modules.

pub mod beta;
pub mod describe;
pub mod pearson;
pub mod stable;
