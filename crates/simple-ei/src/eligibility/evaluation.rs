use super::domain::{AssumptionSet, EligibilityVerdict, HoursInput, RegionRequirement};
use chrono::NaiveDate;

/// Hard upper bound on weekly hours: there are only 168 hours in a week.
pub const MAX_WEEKLY_HOURS: f64 = 168.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EligibilityError {
    #[error("total hours worked must be non-negative, got {0}")]
    NegativeHours(i64),
    #[error("weekly hours must be between 0 and {MAX_WEEKLY_HOURS}, got {0}")]
    InvalidWeeklyHours(f64),
    #[error("end date {end} is before start date {start}")]
    ReversedDateRange { start: NaiveDate, end: NaiveDate },
    #[error("the region lookup did not supply an insured-hours requirement")]
    MissingRequirement,
}

impl EligibilityError {
    /// Whether the error is a correctable problem with the caller's input, as
    /// opposed to an unusable region record.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, EligibilityError::MissingRequirement)
    }
}

/// Total insurable hours represented by the input.
///
/// Weekly-range mode counts whole weeks as the ceiling of the day span over 7,
/// with a floor of one week: a partial or zero-length week still counts as a full
/// week of work. A reversed range is rejected rather than silently producing a
/// negative count.
pub fn total_hours_worked(input: &HoursInput) -> Result<f64, EligibilityError> {
    match *input {
        HoursInput::Direct { total_hours } => {
            if total_hours < 0 {
                return Err(EligibilityError::NegativeHours(total_hours));
            }
            Ok(total_hours as f64)
        }
        HoursInput::WeeklyRange {
            hours_per_week,
            start_date,
            end_date,
        } => {
            if !hours_per_week.is_finite()
                || hours_per_week < 0.0
                || hours_per_week > MAX_WEEKLY_HOURS
            {
                return Err(EligibilityError::InvalidWeeklyHours(hours_per_week));
            }
            if end_date < start_date {
                return Err(EligibilityError::ReversedDateRange {
                    start: start_date,
                    end: end_date,
                });
            }

            let days = (end_date - start_date).num_days();
            let weeks = ((days + 6) / 7).max(1);
            Ok(weeks as f64 * hours_per_week)
        }
    }
}

/// Combine the hours figure, the assumption gates, and the region's threshold into
/// a verdict. Pure and stateless; a missing threshold is an error, never zero.
pub fn evaluate(
    hours: &HoursInput,
    assumptions: &AssumptionSet,
    requirement: &RegionRequirement,
) -> Result<EligibilityVerdict, EligibilityError> {
    let required = requirement
        .insured_hours_required
        .filter(|hours| hours.is_finite() && *hours >= 0.0)
        .ok_or(EligibilityError::MissingRequirement)?;

    let worked = total_hours_worked(hours)?;
    let requirement_met = worked >= required;
    let failed_assumptions = assumptions.failed();
    let eligible = requirement_met && failed_assumptions.is_empty();
    let hours_shortfall = (required - worked).max(0.0);

    Ok(EligibilityVerdict {
        eligible,
        total_hours_worked: worked,
        hours_shortfall,
        failed_assumptions,
        requirement_met,
    })
}
