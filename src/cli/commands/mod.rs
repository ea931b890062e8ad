//! Command implementations

pub mod check;
pub mod list;
pub mod translate;
