//! Utility modules: on-disk locations and logging setup.

pub mod logging;
pub mod persistence;
