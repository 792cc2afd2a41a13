//! Scenario runner for the create-user endpoint.
//!
//! Each [`Scenario`] sends one or more requests and compares the returned
//! status codes with what the API contract promises. Failures are reported,
//! never raised, so a single bad scenario does not hide the rest.
mod runner;
mod scenarios;
mod verdict;

pub use runner::{RunSummary, ScenarioReport, run_scenarios};
pub use scenarios::{Scenario, ScenarioContext};
pub use verdict::{Verdict, expect_status};
