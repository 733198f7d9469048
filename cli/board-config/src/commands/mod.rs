//! Command implementations.

pub mod configure;
pub mod list;
pub mod select;
