//! Integration specifications for the eligibility check workflow.
//!
//! Scenarios run end to end through the public service facade and the HTTP router
//! so validation, lookup sequencing, evaluation, and narration are exercised
//! together without reaching into private modules.

mod common {
    use std::collections::HashMap;
    use std::sync::Arc;

    use simple_ei::eligibility::{
        EligibilityService, LookupError, PostalCode, RegionLookup, RegionRequirement,
    };

    pub(super) struct DirectoryLookup {
        regions: HashMap<&'static str, RegionRequirement>,
    }

    impl RegionLookup for DirectoryLookup {
        fn region_for(&self, postal_code: &PostalCode) -> Result<RegionRequirement, LookupError> {
            let first_letter = &postal_code.as_str()[..1];
            self.regions
                .get(first_letter)
                .cloned()
                .ok_or_else(|| LookupError::RegionNotFound(postal_code.as_str().to_string()))
        }
    }

    pub(super) fn region(
        name: &str,
        rate: f64,
        hours: Option<f64>,
        weeks: (u32, u32),
    ) -> RegionRequirement {
        RegionRequirement {
            region_name: Some(name.to_string()),
            unemployment_rate_percent: Some(rate),
            insured_hours_required: hours,
            min_weeks_payable: Some(weeks.0),
            max_weeks_payable: Some(weeks.1),
        }
    }

    pub(super) fn build_service() -> Arc<EligibilityService<DirectoryLookup>> {
        let mut regions = HashMap::new();
        regions.insert("K", region("Ottawa", 5.8, Some(700.0), (14, 45)));
        regions.insert("V", region("Vancouver", 5.2, Some(80.0), (14, 45)));
        regions.insert("X", region("Northwest Territories", 9.9, None, (14, 45)));

        Arc::new(EligibilityService::new(Arc::new(DirectoryLookup {
            regions,
        })))
    }
}

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

use simple_ei::eligibility::{
    eligibility_router, AssumptionKind, AssumptionSet, EligibilityServiceError, HoursInput,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn sufficient_direct_hours_produce_an_eligible_outcome() {
    let service = common::build_service();
    let outcome = service
        .check(
            "K1A 0B1",
            &HoursInput::Direct { total_hours: 1200 },
            &AssumptionSet::default(),
        )
        .expect("checks");

    assert!(outcome.verdict.eligible);
    assert_eq!(outcome.verdict.hours_shortfall, 0.0);
    assert_eq!(
        outcome.messages[0],
        "You worked 1200 insurable hours, which meets your region's requirement of 700."
    );
}

#[test]
fn insufficient_hours_report_the_exact_shortfall() {
    let service = common::build_service();
    let outcome = service
        .check(
            "K1A 0B1",
            &HoursInput::Direct { total_hours: 400 },
            &AssumptionSet::default(),
        )
        .expect("checks");

    assert!(!outcome.verdict.eligible);
    assert_eq!(outcome.verdict.hours_shortfall, 300.0);
    assert!(outcome.messages[0].contains("300 hours short"));
}

#[test]
fn weekly_range_counts_whole_weeks_by_the_ceiling_rule() {
    let service = common::build_service();
    let outcome = service
        .check(
            "V6B 4Y8",
            &HoursInput::WeeklyRange {
                hours_per_week: 40.0,
                start_date: date(2024, 1, 1),
                end_date: date(2024, 1, 8),
            },
            &AssumptionSet::default(),
        )
        .expect("checks");

    assert_eq!(outcome.verdict.total_hours_worked, 40.0);
    assert!(!outcome.verdict.requirement_met);
}

#[test]
fn a_failed_assumption_blocks_eligibility_despite_the_hours() {
    let service = common::build_service();
    let assumptions = AssumptionSet {
        no_fault_job_loss: false,
        ..AssumptionSet::default()
    };
    let outcome = service
        .check(
            "K1A 0B1",
            &HoursInput::Direct { total_hours: 1000 },
            &assumptions,
        )
        .expect("checks");

    assert!(!outcome.verdict.eligible);
    assert!(outcome.verdict.requirement_met);
    assert_eq!(
        outcome.verdict.failed_assumptions,
        vec![AssumptionKind::NoFaultJobLoss]
    );
    assert!(outcome.messages[0].contains("no fault of your own"));
}

#[test]
fn postal_code_is_normalized_before_the_lookup() {
    let service = common::build_service();
    let outcome = service
        .check(
            " k1a0b1 ",
            &HoursInput::Direct { total_hours: 1200 },
            &AssumptionSet::default(),
        )
        .expect("checks");
    assert_eq!(outcome.postal_code.as_str(), "K1A 0B1");
}

#[test]
fn invalid_postal_code_never_reaches_the_lookup() {
    let service = common::build_service();
    let err = service
        .check(
            "D1A 0B1",
            &HoursInput::Direct { total_hours: 1200 },
            &AssumptionSet::default(),
        )
        .expect_err("D is not a valid first letter");
    assert!(matches!(err, EligibilityServiceError::PostalCode(_)));
}

#[test]
fn region_without_a_threshold_refuses_to_evaluate() {
    let service = common::build_service();
    let err = service
        .check(
            "X1A 0B1",
            &HoursInput::Direct { total_hours: 1200 },
            &AssumptionSet::default(),
        )
        .expect_err("region record is unusable");
    assert!(matches!(err, EligibilityServiceError::Eligibility(_)));
}

async fn post_check(body: Value) -> (StatusCode, Value) {
    let router = eligibility_router(common::build_service());
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/eligibility/check")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds");

    let response = router.oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let value = serde_json::from_slice(&bytes).expect("body is json");
    (status, value)
}

#[tokio::test]
async fn check_route_returns_the_verdict_and_messages() {
    let (status, body) = post_check(json!({
        "postal_code": "k1a0b1",
        "hours": { "mode": "direct", "total_hours": 1200 },
        "assumptions": {
            "insurable_employment": true,
            "no_fault_job_loss": true,
            "no_work_seven_days": true,
            "required_hours_worked": true,
            "ready_willing_capable": true,
            "actively_looking_for_work": true
        }
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["postal_code"], "K1A 0B1");
    assert_eq!(body["verdict"]["eligible"], true);
    assert_eq!(body["requirement"]["region_name"], "Ottawa");
    assert!(body["messages"].as_array().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn check_route_defaults_absent_assumption_keys_to_false() {
    let (status, body) = post_check(json!({
        "postal_code": "K1A 0B1",
        "hours": { "mode": "direct", "total_hours": 1200 },
        "assumptions": { "insurable_employment": true }
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["verdict"]["eligible"], false);
    let failed = body["verdict"]["failed_assumptions"]
        .as_array()
        .expect("failed set present");
    assert_eq!(failed.len(), 5);
    assert_eq!(failed[0], "no_fault_job_loss");
}

#[tokio::test]
async fn check_route_treats_an_omitted_assumptions_record_as_all_false() {
    let (status, body) = post_check(json!({
        "postal_code": "K1A 0B1",
        "hours": { "mode": "direct", "total_hours": 1200 }
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["verdict"]["eligible"], false);
    assert_eq!(body["verdict"]["requirement_met"], true);
    let failed = body["verdict"]["failed_assumptions"]
        .as_array()
        .expect("failed set present");
    assert_eq!(failed.len(), 6);
}

#[tokio::test]
async fn check_route_rejects_reversed_date_ranges() {
    let (status, body) = post_check(json!({
        "postal_code": "K1A 0B1",
        "hours": {
            "mode": "weekly_range",
            "hours_per_week": 40.0,
            "start_date": "2024-02-01",
            "end_date": "2024-01-01"
        }
    }))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]
        .as_str()
        .is_some_and(|message| message.contains("before start date")));
}

#[tokio::test]
async fn region_route_serves_the_requirement_record() {
    let router = eligibility_router(common::build_service());
    let request = Request::builder()
        .uri("/api/v1/regions/K1A%200B1")
        .body(Body::empty())
        .expect("request builds");

    let response = router.oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let body: Value = serde_json::from_slice(&bytes).expect("body is json");
    assert_eq!(body["requirement"]["insured_hours_required"], 700.0);
}

#[tokio::test]
async fn region_route_reports_unknown_regions_as_not_found() {
    let router = eligibility_router(common::build_service());
    let request = Request::builder()
        .uri("/api/v1/regions/T5W1A1")
        .body(Body::empty())
        .expect("request builds");

    let response = router.oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
