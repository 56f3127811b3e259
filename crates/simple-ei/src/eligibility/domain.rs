use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hours worked during the qualifying period, either as a known total or as a
/// weekly figure spread over a date range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HoursInput {
    Direct {
        total_hours: i64,
    },
    WeeklyRange {
        hours_per_week: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
}

/// The six yes/no preconditions that must all hold for a positive verdict,
/// independent of hours worked.
///
/// Defaults to all-true (the interactive form pre-checks every box); a key absent
/// on the wire deserializes to `false` and therefore fails its gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssumptionSet {
    #[serde(default)]
    pub insurable_employment: bool,
    #[serde(default)]
    pub no_fault_job_loss: bool,
    #[serde(default)]
    pub no_work_seven_days: bool,
    #[serde(default)]
    pub required_hours_worked: bool,
    #[serde(default)]
    pub ready_willing_capable: bool,
    #[serde(default)]
    pub actively_looking_for_work: bool,
}

impl Default for AssumptionSet {
    fn default() -> Self {
        Self {
            insurable_employment: true,
            no_fault_job_loss: true,
            no_work_seven_days: true,
            required_hours_worked: true,
            ready_willing_capable: true,
            actively_looking_for_work: true,
        }
    }
}

impl AssumptionSet {
    /// The all-false set: every gate fails. This is what an entirely absent
    /// assumptions record means on the wire, matching the absent-key rule.
    pub fn unanswered() -> Self {
        Self {
            insurable_employment: false,
            no_fault_job_loss: false,
            no_work_seven_days: false,
            required_hours_worked: false,
            ready_willing_capable: false,
            actively_looking_for_work: false,
        }
    }

    pub fn get(&self, kind: AssumptionKind) -> bool {
        match kind {
            AssumptionKind::InsurableEmployment => self.insurable_employment,
            AssumptionKind::NoFaultJobLoss => self.no_fault_job_loss,
            AssumptionKind::NoWorkSevenDays => self.no_work_seven_days,
            AssumptionKind::RequiredHoursWorked => self.required_hours_worked,
            AssumptionKind::ReadyWillingCapable => self.ready_willing_capable,
            AssumptionKind::ActivelyLookingForWork => self.actively_looking_for_work,
        }
    }

    pub fn all_true(&self) -> bool {
        AssumptionKind::ordered().into_iter().all(|k| self.get(k))
    }

    /// The failed gates, in fixed declaration order.
    pub fn failed(&self) -> Vec<AssumptionKind> {
        AssumptionKind::ordered()
            .into_iter()
            .filter(|&k| !self.get(k))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssumptionKind {
    InsurableEmployment,
    NoFaultJobLoss,
    NoWorkSevenDays,
    RequiredHoursWorked,
    ReadyWillingCapable,
    ActivelyLookingForWork,
}

impl AssumptionKind {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::InsurableEmployment,
            Self::NoFaultJobLoss,
            Self::NoWorkSevenDays,
            Self::RequiredHoursWorked,
            Self::ReadyWillingCapable,
            Self::ActivelyLookingForWork,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InsurableEmployment => "Insurable employment",
            Self::NoFaultJobLoss => "Job loss through no fault of your own",
            Self::NoWorkSevenDays => "Seven consecutive days without work or pay",
            Self::RequiredHoursWorked => "Required insurable hours worked",
            Self::ReadyWillingCapable => "Ready, willing, and capable of working",
            Self::ActivelyLookingForWork => "Actively looking for work",
        }
    }
}

/// Economic-region record supplied by the external lookup. Only
/// `insured_hours_required` feeds the verdict; the remaining fields pass through
/// unmodified for presentation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionRequirement {
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub unemployment_rate_percent: Option<f64>,
    #[serde(default)]
    pub insured_hours_required: Option<f64>,
    #[serde(default)]
    pub min_weeks_payable: Option<u32>,
    #[serde(default)]
    pub max_weeks_payable: Option<u32>,
}

/// Outcome of one evaluation call; constructed fresh each time, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub eligible: bool,
    pub total_hours_worked: f64,
    pub hours_shortfall: f64,
    pub failed_assumptions: Vec<AssumptionKind>,
    pub requirement_met: bool,
}
