//! Data types for the scout library.

pub mod config;
pub mod page;
pub mod record;
pub mod signal;
