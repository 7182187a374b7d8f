//! Loan eligibility evaluation

use crate::{ApplicantProfile, EligibilityPolicy, EligibilityResult, Reason};
use rust_decimal::Decimal;
use tracing::debug;

/// Eligibility evaluator
///
/// Applies the policy's rule chain to an applicant profile. Stateless and
/// side-effect free; safe to share across callers.
pub struct EligibilityEvaluator {
    policy: EligibilityPolicy,
}

impl EligibilityEvaluator {
    /// Create new evaluator with the given policy
    pub fn new(policy: EligibilityPolicy) -> Self {
        Self { policy }
    }

    /// Evaluate an applicant profile
    ///
    /// Total function: every input, valid or not, yields a fully-formed
    /// result. Rules run in a fixed order and the first failing rule
    /// decides the outcome, so a bankrupt non-citizen is reported as
    /// bankrupt.
    pub fn evaluate(&self, profile: &ApplicantProfile) -> EligibilityResult {
        let result = self.run_rules(profile);
        debug!(
            reason = %result.reason,
            eligible = result.is_eligible,
            "eligibility decision"
        );
        result
    }

    fn run_rules(&self, p: &ApplicantProfile) -> EligibilityResult {
        if p.annual_income <= Decimal::ZERO {
            return EligibilityResult::rejected(Reason::InvalidIncome);
        }

        if p.age < self.policy.min_age || p.age > self.policy.max_age {
            return EligibilityResult::rejected(Reason::AgeNotEligible);
        }

        if p.credit_score < self.policy.min_credit_score
            || p.credit_score > self.policy.max_credit_score
        {
            return EligibilityResult::rejected(Reason::InvalidCreditScore);
        }

        if p.is_bankrupt {
            return EligibilityResult::rejected(Reason::Bankrupt);
        }

        if !p.is_citizen {
            return EligibilityResult::rejected(Reason::NotCitizen);
        }

        if p.has_criminal_record {
            return EligibilityResult::rejected(Reason::CriminalRecord);
        }

        if p.dependents > self.policy.max_dependents {
            return EligibilityResult::rejected(Reason::TooManyDependents);
        }

        if p.employment_years < self.policy.min_employment_years {
            return EligibilityResult::rejected(Reason::InsufficientEmployment);
        }

        // Income is positive here, so the ratio is always defined.
        let dti = p.existing_debt / p.annual_income;
        if dti > self.policy.max_dti {
            return EligibilityResult::rejected(Reason::DebtToIncomeTooHigh);
        }

        let max_eligible = p.annual_income * self.policy.income_cap_factor - p.existing_debt;
        if p.requested_amount > max_eligible {
            // Never report a negative cap.
            return EligibilityResult::rejected_with_cap(
                Reason::AmountExceedsEligibility,
                max_eligible.max(Decimal::ZERO),
            );
        }

        // Only fires when the cap is positive; a non-positive request
        // against a non-positive cap already failed the check above.
        if p.requested_amount <= Decimal::ZERO {
            return EligibilityResult::rejected(Reason::InvalidRequestedAmount);
        }

        EligibilityResult::approved(max_eligible)
    }
}

impl Default for EligibilityEvaluator {
    fn default() -> Self {
        Self::new(EligibilityPolicy::default())
    }
}
