use super::domain::{AssumptionKind, EligibilityVerdict, RegionRequirement};
use std::fmt;

const PLACEHOLDER: &str = "N/A";

/// Fixed user-facing message for a failed assumption gate.
fn failure_message(kind: AssumptionKind) -> &'static str {
    match kind {
        AssumptionKind::InsurableEmployment => {
            "Your employment was not insurable, so the hours do not count toward EI."
        }
        AssumptionKind::NoFaultJobLoss => {
            "EI requires that you lost your job through no fault of your own."
        }
        AssumptionKind::NoWorkSevenDays => {
            "You must have been without work and without pay for at least 7 consecutive days."
        }
        AssumptionKind::RequiredHoursWorked => {
            "You indicated you have not worked the required number of insurable hours."
        }
        AssumptionKind::ReadyWillingCapable => {
            "You must be ready, willing, and capable of working each day."
        }
        AssumptionKind::ActivelyLookingForWork => {
            "You must be actively looking for work to receive EI."
        }
    }
}

fn fmt_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{:.0}", hours)
    } else {
        format!("{:.1}", hours)
    }
}

fn fmt_opt<T: fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Narrate an already-computed verdict as an ordered sequence of display lines.
///
/// Nothing here re-derives eligibility; the ordering is fixed so the caller can
/// render the lines verbatim.
pub fn explain(verdict: &EligibilityVerdict, requirement: &RegionRequirement) -> Vec<String> {
    let mut lines = Vec::new();

    for &kind in &verdict.failed_assumptions {
        lines.push(failure_message(kind).to_string());
    }

    let required = match requirement.insured_hours_required {
        Some(hours) => fmt_hours(hours),
        None => PLACEHOLDER.to_string(),
    };
    if verdict.hours_shortfall > 0.0 {
        lines.push(format!(
            "You worked {} insurable hours but your region requires {}; you are {} hours short.",
            fmt_hours(verdict.total_hours_worked),
            required,
            fmt_hours(verdict.hours_shortfall),
        ));
    } else {
        lines.push(format!(
            "You worked {} insurable hours, which meets your region's requirement of {}.",
            fmt_hours(verdict.total_hours_worked),
            required,
        ));
    }

    lines.push(format!("Economic region: {}", fmt_opt(&requirement.region_name)));
    lines.push(format!(
        "Unemployment rate: {}",
        match requirement.unemployment_rate_percent {
            Some(rate) => format!("{rate}%"),
            None => PLACEHOLDER.to_string(),
        }
    ));
    lines.push(format!(
        "Weeks payable: {} to {}",
        fmt_opt(&requirement.min_weeks_payable),
        fmt_opt(&requirement.max_weeks_payable),
    ));
    lines.push(format!("Insured hours required: {}", required));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict() -> EligibilityVerdict {
        EligibilityVerdict {
            eligible: true,
            total_hours_worked: 1200.0,
            hours_shortfall: 0.0,
            failed_assumptions: Vec::new(),
            requirement_met: true,
        }
    }

    fn requirement() -> RegionRequirement {
        RegionRequirement {
            region_name: Some("Ottawa".to_string()),
            unemployment_rate_percent: Some(5.8),
            insured_hours_required: Some(700.0),
            min_weeks_payable: Some(14),
            max_weeks_payable: Some(45),
        }
    }

    #[test]
    fn sufficient_hours_emit_the_sufficiency_line_only() {
        let lines = explain(&verdict(), &requirement());
        assert_eq!(
            lines[0],
            "You worked 1200 insurable hours, which meets your region's requirement of 700."
        );
        assert!(!lines.iter().any(|line| line.contains("hours short")));
    }

    #[test]
    fn shortfall_line_replaces_the_sufficiency_line() {
        let short = EligibilityVerdict {
            eligible: false,
            total_hours_worked: 400.0,
            hours_shortfall: 300.0,
            requirement_met: false,
            ..verdict()
        };
        let lines = explain(&short, &requirement());
        assert_eq!(
            lines[0],
            "You worked 400 insurable hours but your region requires 700; you are 300 hours short."
        );
        assert!(!lines.iter().any(|line| line.contains("meets your region's")));
    }

    #[test]
    fn failed_assumptions_lead_in_declaration_order() {
        let gated = EligibilityVerdict {
            eligible: false,
            failed_assumptions: vec![
                AssumptionKind::NoFaultJobLoss,
                AssumptionKind::ActivelyLookingForWork,
            ],
            ..verdict()
        };
        let lines = explain(&gated, &requirement());
        assert!(lines[0].contains("no fault of your own"));
        assert!(lines[1].contains("actively looking for work"));
        assert!(lines[2].starts_with("You worked"));
    }

    #[test]
    fn region_summary_follows_in_fixed_order() {
        let lines = explain(&verdict(), &requirement());
        assert_eq!(lines[1], "Economic region: Ottawa");
        assert_eq!(lines[2], "Unemployment rate: 5.8%");
        assert_eq!(lines[3], "Weeks payable: 14 to 45");
        assert_eq!(lines[4], "Insured hours required: 700");
    }

    #[test]
    fn missing_display_fields_become_placeholders() {
        let sparse = RegionRequirement {
            insured_hours_required: Some(665.0),
            ..RegionRequirement::default()
        };
        let lines = explain(&verdict(), &sparse);
        assert_eq!(lines[1], "Economic region: N/A");
        assert_eq!(lines[2], "Unemployment rate: N/A");
        assert_eq!(lines[3], "Weeks payable: N/A to N/A");
        assert_eq!(lines[4], "Insured hours required: 665");
    }

    #[test]
    fn fractional_hours_keep_one_decimal() {
        let fractional = EligibilityVerdict {
            total_hours_worked: 437.5,
            hours_shortfall: 262.5,
            requirement_met: false,
            eligible: false,
            ..verdict()
        };
        let lines = explain(&fractional, &requirement());
        assert!(lines[0].contains("437.5"));
        assert!(lines[0].contains("262.5"));
    }
}
