//! Eligibility policy thresholds

use crate::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Policy configuration
///
/// Thresholds applied by the evaluator. Defaults match the standard
/// underwriting policy; a wrapping configuration layer may override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityPolicy {
    /// Minimum applicant age
    pub min_age: i32,

    /// Maximum applicant age
    pub max_age: i32,

    /// Lowest valid credit score
    pub min_credit_score: i32,

    /// Highest valid credit score
    pub max_credit_score: i32,

    /// Maximum number of dependents
    pub max_dependents: i32,

    /// Minimum years of employment
    pub min_employment_years: i32,

    /// Maximum debt-to-income ratio
    pub max_dti: Decimal,

    /// Fraction of annual income backing the eligibility cap
    pub income_cap_factor: Decimal,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_age: 70,
            min_credit_score: 300,
            max_credit_score: 850,
            max_dependents: 10,
            min_employment_years: 1,
            max_dti: Decimal::new(40, 2),           // 0.40
            income_cap_factor: Decimal::new(50, 2), // 0.50
        }
    }
}

impl EligibilityPolicy {
    /// Check that the policy is internally consistent
    pub fn validate(&self) -> Result<()> {
        if self.min_age > self.max_age {
            return Err(Error::InvalidPolicy(format!(
                "age range {}-{} is inverted",
                self.min_age, self.max_age
            )));
        }
        if self.min_credit_score > self.max_credit_score {
            return Err(Error::InvalidPolicy(format!(
                "credit score range {}-{} is inverted",
                self.min_credit_score, self.max_credit_score
            )));
        }
        if self.max_dti <= Decimal::ZERO {
            return Err(Error::InvalidPolicy(format!(
                "max debt-to-income ratio {} must be positive",
                self.max_dti
            )));
        }
        if self.income_cap_factor <= Decimal::ZERO {
            return Err(Error::InvalidPolicy(format!(
                "income cap factor {} must be positive",
                self.income_cap_factor
            )));
        }
        Ok(())
    }
}
