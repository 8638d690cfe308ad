//! Application bootstrap: environment selection, configuration loading and
//! storage error classification.

pub mod config;
pub mod storage;
