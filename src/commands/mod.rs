//! Command implementations

pub mod check;
pub mod generate;

pub use check::{CheckReport, DocStatus, run_check};
pub use generate::{GenerateOutcome, GenerateRequest, run_generate};
