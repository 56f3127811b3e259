use crate::infra::default_region_directory;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use simple_ei::eligibility::{
    AssumptionKind, AssumptionSet, EligibilityOutcome, EligibilityService, HoursInput,
};
use simple_ei::error::AppError;
use std::io;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Postal code to resolve against the bundled region directory
    #[arg(long)]
    pub(crate) postal_code: String,
    /// Total insurable hours worked, when the figure is already known
    #[arg(long, conflicts_with_all = ["hours_per_week", "start_date", "end_date"])]
    pub(crate) total_hours: Option<i64>,
    /// Hours worked per week over the employment period
    #[arg(long)]
    pub(crate) hours_per_week: Option<f64>,
    /// Employment start date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) start_date: Option<NaiveDate>,
    /// Employment end date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) end_date: Option<NaiveDate>,
    /// Assumptions that do NOT hold for your situation (repeatable)
    #[arg(long = "failed", value_enum)]
    pub(crate) failed: Vec<AssumptionArg>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Postal code used for the demo scenarios
    #[arg(long, default_value = "K1A 0B1")]
    pub(crate) postal_code: String,
}

/// CLI-facing mirror of [`AssumptionKind`] so clap can parse `--failed` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum AssumptionArg {
    InsurableEmployment,
    NoFaultJobLoss,
    NoWorkSevenDays,
    RequiredHoursWorked,
    ReadyWillingCapable,
    ActivelyLookingForWork,
}

impl From<AssumptionArg> for AssumptionKind {
    fn from(value: AssumptionArg) -> Self {
        match value {
            AssumptionArg::InsurableEmployment => Self::InsurableEmployment,
            AssumptionArg::NoFaultJobLoss => Self::NoFaultJobLoss,
            AssumptionArg::NoWorkSevenDays => Self::NoWorkSevenDays,
            AssumptionArg::RequiredHoursWorked => Self::RequiredHoursWorked,
            AssumptionArg::ReadyWillingCapable => Self::ReadyWillingCapable,
            AssumptionArg::ActivelyLookingForWork => Self::ActivelyLookingForWork,
        }
    }
}

fn assumptions_from_failed(failed: &[AssumptionArg]) -> AssumptionSet {
    let mut assumptions = AssumptionSet::default();
    for &arg in failed {
        match AssumptionKind::from(arg) {
            AssumptionKind::InsurableEmployment => assumptions.insurable_employment = false,
            AssumptionKind::NoFaultJobLoss => assumptions.no_fault_job_loss = false,
            AssumptionKind::NoWorkSevenDays => assumptions.no_work_seven_days = false,
            AssumptionKind::RequiredHoursWorked => assumptions.required_hours_worked = false,
            AssumptionKind::ReadyWillingCapable => assumptions.ready_willing_capable = false,
            AssumptionKind::ActivelyLookingForWork => {
                assumptions.actively_looking_for_work = false
            }
        }
    }
    assumptions
}

fn hours_from_args(args: &CheckArgs) -> Result<HoursInput, AppError> {
    match (
        args.total_hours,
        args.hours_per_week,
        args.start_date,
        args.end_date,
    ) {
        (Some(total_hours), None, None, None) => Ok(HoursInput::Direct { total_hours }),
        (None, Some(hours_per_week), Some(start_date), Some(end_date)) => {
            Ok(HoursInput::WeeklyRange {
                hours_per_week,
                start_date,
                end_date,
            })
        }
        _ => Err(AppError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "provide either --total-hours, or all of --hours-per-week, --start-date, and --end-date",
        ))),
    }
}

fn render_outcome(outcome: &EligibilityOutcome) {
    let headline = if outcome.verdict.eligible {
        "Likely eligible for EI"
    } else {
        "Not eligible for EI"
    };
    println!("{} ({})", headline, outcome.postal_code);
    for message in &outcome.messages {
        println!("  {message}");
    }
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let hours = hours_from_args(&args)?;
    let assumptions = assumptions_from_failed(&args.failed);

    let service = EligibilityService::new(Arc::new(default_region_directory()));
    let outcome = service.check(&args.postal_code, &hours, &assumptions)?;
    render_outcome(&outcome);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = EligibilityService::new(Arc::new(default_region_directory()));

    println!("EI eligibility demo for {}", args.postal_code.trim());

    println!("\nScenario 1: 1200 insurable hours, every assumption holds");
    let outcome = service.check(
        &args.postal_code,
        &HoursInput::Direct { total_hours: 1200 },
        &AssumptionSet::default(),
    )?;
    render_outcome(&outcome);

    println!("\nScenario 2: 400 insurable hours, every assumption holds");
    let outcome = service.check(
        &args.postal_code,
        &HoursInput::Direct { total_hours: 400 },
        &AssumptionSet::default(),
    )?;
    render_outcome(&outcome);

    println!("\nScenario 3: plenty of hours, but the job loss was the worker's fault");
    let outcome = service.check(
        &args.postal_code,
        &HoursInput::Direct { total_hours: 1000 },
        &assumptions_from_failed(&[AssumptionArg::NoFaultJobLoss]),
    )?;
    render_outcome(&outcome);

    Ok(())
}
