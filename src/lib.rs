//! Eligibility Engine
//!
//! Deterministic loan eligibility decisions from applicant financial data

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod evaluator;
pub mod policy;
pub mod types;

pub use error::{Error, Result};
pub use evaluator::EligibilityEvaluator;
pub use policy::EligibilityPolicy;
pub use types::*;
