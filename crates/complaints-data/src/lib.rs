//! Data layer for the complaint report.
//!
//! Reads complaint CSV exports, validates each row, groups accepted
//! complaints by product and year, derives summary statistics and runs the
//! top-level report pipeline.

pub mod aggregator;
pub mod analysis;
pub mod reader;
pub mod stats;
pub mod validator;
pub mod writer;
