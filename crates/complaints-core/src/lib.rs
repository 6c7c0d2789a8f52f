//! Core domain for the consumer complaint report.
//!
//! Record and summary types, the error taxonomy, date handling,
//! concentration math, report formatting and CLI settings.

pub mod calculations;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{ComplaintError, Result};
