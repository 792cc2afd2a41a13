use crate::helpers::{scenario_context, spawn_api, spawn_registry, unreachable_uri};
use api_checks::oracle::{Scenario, Verdict, run_scenarios};
use wiremock::ResponseTemplate;

fn lines(output: &[u8]) -> Vec<String> {
    String::from_utf8(output.to_vec())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn a_well_behaved_api_passes_every_scenario() {
    // Arrange
    let server = spawn_registry().await;
    let mut ctx = scenario_context(&server.uri());
    let mut output = Vec::new();
    // Act
    let summary = run_scenarios(&mut ctx, &mut output).await.unwrap();
    // Assert
    assert_eq!(summary.failure_count(), 0);
    assert_eq!(summary.reports.len(), 11);
    let lines = lines(&output);
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "Starting API tests...");
    assert_eq!(
        &lines[1..10],
        &[
            "Valid input test passed",
            "Missing required fields test passed",
            "Invalid data types test passed",
            "Duplicate phone number test passed",
            "Duplicate email ID test passed",
            "Missing roll number test passed",
            "Invalid roll number format test passed",
            "Boundary values test passed",
            "Special characters test passed",
        ]
    );
    assert!(lines[10].starts_with("Sent 10 requests in "));
    assert_eq!(
        lines[11],
        "Different HTTP methods test needs to be implemented"
    );
    assert_eq!(lines[12], "All tests completed.");
}

#[tokio::test]
async fn scenarios_run_in_a_fixed_order() {
    // Arrange
    let server = spawn_registry().await;
    let mut ctx = scenario_context(&server.uri());
    // Act
    let summary = run_scenarios(&mut ctx, &mut Vec::new()).await.unwrap();
    // Assert
    let order: Vec<Scenario> = summary.reports.iter().map(|r| r.scenario).collect();
    assert_eq!(order, Scenario::ALL.to_vec());
}

#[tokio::test]
async fn failing_scenarios_do_not_stop_the_run() {
    // Arrange
    let server = spawn_api(ResponseTemplate::new(500)).await;
    let mut ctx = scenario_context(&server.uri());
    let mut output = Vec::new();
    // Act
    let summary = run_scenarios(&mut ctx, &mut output).await.unwrap();
    // Assert
    // Every scenario with an oracle fails, rate limiting only observes
    assert_eq!(summary.failure_count(), 9);
    assert_eq!(summary.reports.len(), 11);
    let lines = lines(&output);
    assert_eq!(lines[1], "Valid input test failed: Expected 201, got 500");
    assert_eq!(lines.last().unwrap(), "All tests completed.");
}

#[tokio::test]
async fn an_unreachable_api_fails_every_scenario_but_still_completes() {
    // Arrange
    let mut ctx = scenario_context(&unreachable_uri());
    let mut output = Vec::new();
    // Act
    let summary = run_scenarios(&mut ctx, &mut output).await.unwrap();
    // Assert
    assert_eq!(summary.failure_count(), 10);
    assert_eq!(
        summary.verdict_of(Scenario::DifferentHttpMethods),
        Some(&Verdict::NotImplemented)
    );
    assert!(matches!(
        summary.verdict_of(Scenario::RateLimiting),
        Some(Verdict::Failed(failures)) if failures[0].starts_with("Request 1 of 10 failed")
    ));
    assert_eq!(lines(&output).last().unwrap(), "All tests completed.");
}
