use anyhow::Context;
use api_checks::configuration::get_configuration;
use api_checks::oracle::{ScenarioContext, run_scenarios};
use api_checks::telemetry::{get_subscriber, init_subscriber};

// Requests are issued one at a time, so a single-threaded runtime is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout carries the scenario report
    let subscriber = get_subscriber("api_oracle".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let mut context = ScenarioContext::from_settings(&configuration)
        .context("Failed to build the HTTP client.")?;

    let mut stdout = std::io::stdout();
    let summary = run_scenarios(&mut context, &mut stdout)
        .await
        .context("Failed to write the scenario report.")?;

    if configuration.runner.strict && summary.failure_count() > 0 {
        anyhow::bail!(
            "{} of {} scenarios failed",
            summary.failure_count(),
            summary.reports.len()
        );
    }
    Ok(())
}
