//! Core types for the eligibility engine

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Applicant profile submitted for a single evaluation
///
/// Constructed fresh per call; nothing outlives the evaluation. Out-of-range
/// values are accepted here and classified by the evaluator, never rejected
/// at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    /// Annual income, expected positive
    pub annual_income: Decimal,

    /// Credit score, semantically bounded 300-850
    pub credit_score: i32,

    /// Age in years, semantically bounded 18-70
    pub age: i32,

    /// Existing debt, non-negative
    pub existing_debt: Decimal,

    /// Requested loan amount, expected positive
    pub requested_amount: Decimal,

    /// Years of continuous employment, expected at least 1
    pub employment_years: i32,

    /// Currently in bankruptcy proceedings
    pub is_bankrupt: bool,

    /// Holds citizenship
    pub is_citizen: bool,

    /// Has a criminal record
    pub has_criminal_record: bool,

    /// Number of dependents, semantically bounded 0-10
    pub dependents: i32,
}

/// Decision reason attached to every evaluation result
///
/// Serializes to the exact consumer-facing strings; exactly one reason is
/// attached per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reason {
    /// Annual income is zero or negative
    #[serde(rename = "Invalid income.")]
    InvalidIncome,

    /// Age outside the eligible range
    #[serde(rename = "Age not eligible.")]
    AgeNotEligible,

    /// Credit score outside the valid range
    #[serde(rename = "Invalid credit score.")]
    InvalidCreditScore,

    /// Applicant is in bankruptcy
    #[serde(rename = "Applicant is bankrupt.")]
    Bankrupt,

    /// Applicant is not a citizen
    #[serde(rename = "Applicant is not a citizen.")]
    NotCitizen,

    /// Applicant has a criminal record
    #[serde(rename = "Applicant has a criminal record.")]
    CriminalRecord,

    /// Dependent count over the limit
    #[serde(rename = "Too many dependents.")]
    TooManyDependents,

    /// Employment history below the minimum
    #[serde(rename = "Insufficient employment history.")]
    InsufficientEmployment,

    /// Debt-to-income ratio over the limit
    #[serde(rename = "Debt-to-income ratio too high.")]
    DebtToIncomeTooHigh,

    /// Requested amount above the computed cap
    #[serde(rename = "Requested amount exceeds eligibility.")]
    AmountExceedsEligibility,

    /// Requested amount is zero or negative
    #[serde(rename = "Invalid requested amount.")]
    InvalidRequestedAmount,

    /// All checks passed
    #[serde(rename = "Eligible for loan.")]
    Eligible,
}

impl Reason {
    /// Consumer-facing reason string
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::InvalidIncome => "Invalid income.",
            Reason::AgeNotEligible => "Age not eligible.",
            Reason::InvalidCreditScore => "Invalid credit score.",
            Reason::Bankrupt => "Applicant is bankrupt.",
            Reason::NotCitizen => "Applicant is not a citizen.",
            Reason::CriminalRecord => "Applicant has a criminal record.",
            Reason::TooManyDependents => "Too many dependents.",
            Reason::InsufficientEmployment => "Insufficient employment history.",
            Reason::DebtToIncomeTooHigh => "Debt-to-income ratio too high.",
            Reason::AmountExceedsEligibility => "Requested amount exceeds eligibility.",
            Reason::InvalidRequestedAmount => "Invalid requested amount.",
            Reason::Eligible => "Eligible for loan.",
        }
    }

    /// Check if this is the approval reason
    pub fn is_approved(&self) -> bool {
        matches!(self, Reason::Eligible)
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Eligibility evaluation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    /// Approved for the requested amount
    pub is_eligible: bool,

    /// Decision reason
    pub reason: Reason,

    /// Maximum eligible loan amount; zero unless a cap was computed
    pub max_eligible_amount: Decimal,
}

impl EligibilityResult {
    /// Rejection with no computed cap
    pub(crate) fn rejected(reason: Reason) -> Self {
        Self {
            is_eligible: false,
            reason,
            max_eligible_amount: Decimal::ZERO,
        }
    }

    /// Rejection reporting the computed cap
    pub(crate) fn rejected_with_cap(reason: Reason, cap: Decimal) -> Self {
        Self {
            is_eligible: false,
            reason,
            max_eligible_amount: cap,
        }
    }

    /// Approval carrying the computed cap
    pub(crate) fn approved(cap: Decimal) -> Self {
        Self {
            is_eligible: true,
            reason: Reason::Eligible,
            max_eligible_amount: cap,
        }
    }
}
