use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::{AssumptionSet, EligibilityVerdict, HoursInput, RegionRequirement};
use super::evaluation::{evaluate, EligibilityError};
use super::explain::explain;
use super::lookup::{LookupError, RegionLookup};
use super::postal::{InvalidFormat, PostalCode};

/// Facade composing the full check: validate the postal code, resolve the region,
/// evaluate the verdict, and narrate it. Stateless apart from the lookup handle.
pub struct EligibilityService<L> {
    lookup: Arc<L>,
}

/// Everything the presentation layer needs to render one check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityOutcome {
    pub postal_code: PostalCode,
    pub requirement: RegionRequirement,
    pub verdict: EligibilityVerdict,
    pub messages: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum EligibilityServiceError {
    #[error(transparent)]
    PostalCode(#[from] InvalidFormat),
    #[error(transparent)]
    Eligibility(#[from] EligibilityError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl<L> EligibilityService<L>
where
    L: RegionLookup + 'static,
{
    pub fn new(lookup: Arc<L>) -> Self {
        Self { lookup }
    }

    /// Resolve the region record for a raw postal code, validating it first.
    pub fn region_for(&self, raw_postal_code: &str) -> Result<(PostalCode, RegionRequirement), EligibilityServiceError> {
        let postal_code = PostalCode::parse(raw_postal_code)?;
        let requirement = self.lookup.region_for(&postal_code)?;
        Ok((postal_code, requirement))
    }

    /// Run the whole flow for one submission. Validation failures stop the check
    /// before the lookup; lookup failures stop it before evaluation.
    pub fn check(
        &self,
        raw_postal_code: &str,
        hours: &HoursInput,
        assumptions: &AssumptionSet,
    ) -> Result<EligibilityOutcome, EligibilityServiceError> {
        let (postal_code, requirement) = self.region_for(raw_postal_code)?;
        let verdict = evaluate(hours, assumptions, &requirement)?;
        let messages = explain(&verdict, &requirement);

        Ok(EligibilityOutcome {
            postal_code,
            requirement,
            verdict,
            messages,
        })
    }
}
