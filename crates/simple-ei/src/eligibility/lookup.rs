use super::domain::RegionRequirement;
use super::postal::PostalCode;

/// Errors surfaced by a region lookup backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("no economic region found for postal code '{0}'")]
    RegionNotFound(String),
    #[error("region lookup unavailable: {0}")]
    Unavailable(String),
}

/// Seam to the external postal-code-to-region service.
///
/// The engine only consumes the parsed [`RegionRequirement`]; wire format,
/// authentication, and endpoint details belong to the implementation behind this
/// trait. Implementations must be safe to share across request handlers.
pub trait RegionLookup: Send + Sync {
    fn region_for(&self, postal_code: &PostalCode) -> Result<RegionRequirement, LookupError>;
}
