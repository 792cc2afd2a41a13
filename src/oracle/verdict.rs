use crate::api_client::ApiError;
use reqwest::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed(Vec<String>),
    /// The scenario has no pass/fail oracle, only something to report.
    Observed(String),
    NotImplemented,
}

impl Verdict {
    pub fn from_failures(failures: Vec<String>) -> Self {
        if failures.is_empty() {
            Verdict::Passed
        } else {
            Verdict::Failed(failures)
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Verdict::Failed(_))
    }
}

impl From<Result<(), String>> for Verdict {
    fn from(check: Result<(), String>) -> Self {
        match check {
            Ok(()) => Verdict::Passed,
            Err(failure) => Verdict::Failed(vec![failure]),
        }
    }
}

/// Check a call outcome against the accepted status codes.
///
/// `subject` names what was being exercised and ends up in the failure message,
/// e.g. `Expected 400 for missing emailId, got 201`.
pub fn expect_status(
    outcome: &Result<StatusCode, ApiError>,
    accepted: &[StatusCode],
    subject: Option<&str>,
) -> Result<(), String> {
    let expected = accepted
        .iter()
        .map(|status| status.as_u16().to_string())
        .collect::<Vec<_>>()
        .join(" or ");
    let subject = subject
        .map(|subject| format!(" for {}", subject))
        .unwrap_or_default();
    match outcome {
        Ok(status) if accepted.contains(status) => Ok(()),
        Ok(status) => Err(format!(
            "Expected {}{}, got {}",
            expected,
            subject,
            status.as_u16()
        )),
        Err(e) => Err(format!(
            "Expected {}{}, request failed: {}",
            expected, subject, e
        )),
    }
}
