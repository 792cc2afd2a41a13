use crate::oracle::scenarios::{Scenario, ScenarioContext};
use crate::oracle::verdict::Verdict;
use std::io::Write;
use tracing::{Span, field::display};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub verdict: Verdict,
}

impl ScenarioReport {
    /// The line printed for this scenario once it has finished.
    pub fn console_line(&self) -> String {
        let label = self.scenario.label();
        match &self.verdict {
            Verdict::Passed => format!("{} test passed", label),
            Verdict::Failed(failures) => {
                format!("{} test failed: {}", label, failures.join("; "))
            }
            Verdict::Observed(observation) => observation.clone(),
            Verdict::NotImplemented => format!("{} test needs to be implemented", label),
        }
    }
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<ScenarioReport>,
}

impl RunSummary {
    pub fn failures(&self) -> impl Iterator<Item = &ScenarioReport> {
        self.reports.iter().filter(|report| report.verdict.is_failure())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn verdict_of(&self, scenario: Scenario) -> Option<&Verdict> {
        self.reports
            .iter()
            .find(|report| report.scenario == scenario)
            .map(|report| &report.verdict)
    }
}

/// Run every scenario in order, writing one line per scenario to `out`.
///
/// Failing scenarios are reported and the run carries on; the completion
/// banner is always written.
#[tracing::instrument(
    name = "Running API scenarios",
    skip_all,
    fields(run_id = tracing::field::Empty, endpoint = %ctx.client.endpoint())
)]
pub async fn run_scenarios<W: Write>(
    ctx: &mut ScenarioContext,
    out: &mut W,
) -> Result<RunSummary, std::io::Error> {
    Span::current().record("run_id", display(Uuid::new_v4()));

    writeln!(out, "Starting API tests...")?;
    let mut summary = RunSummary::default();
    for scenario in Scenario::ALL {
        let verdict = scenario.run(ctx).await;
        if let Verdict::Failed(failures) = &verdict {
            tracing::warn!(
                scenario = scenario.label(),
                failures = ?failures,
                "Scenario failed"
            );
        }
        let report = ScenarioReport { scenario, verdict };
        writeln!(out, "{}", report.console_line())?;
        summary.reports.push(report);
    }
    writeln!(out, "All tests completed.")?;

    tracing::info!(
        failures = summary.failure_count(),
        scenarios = summary.reports.len(),
        "Finished API scenarios"
    );
    Ok(summary)
}
