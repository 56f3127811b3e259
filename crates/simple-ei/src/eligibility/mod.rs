//! EI eligibility core: postal code validation, insurable-hours arithmetic, the
//! assumption-gated verdict, and the human-readable explanation of that verdict.
//!
//! Everything here is a pure function over value types. The remote postal-code to
//! economic-region lookup stays behind the [`RegionLookup`] seam so callers can plug
//! in a live client, a bundled directory, or a test stub.

pub mod domain;
pub mod evaluation;
pub mod explain;
pub mod lookup;
pub mod postal;
pub mod router;
pub mod service;

pub use domain::{
    AssumptionKind, AssumptionSet, EligibilityVerdict, HoursInput, RegionRequirement,
};
pub use evaluation::{evaluate, total_hours_worked, EligibilityError};
pub use explain::explain;
pub use lookup::{LookupError, RegionLookup};
pub use postal::{InvalidFormat, PostalCode};
pub use router::eligibility_router;
pub use service::{EligibilityOutcome, EligibilityService, EligibilityServiceError};
