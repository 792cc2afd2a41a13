use crate::api_client::{ApiError, UserApiClient};
use crate::configuration::Settings;
use crate::domain::{PhoneNumber, TestDataGenerator, UserField, UserPayload};
use crate::oracle::verdict::{Verdict, expect_status};
use reqwest::StatusCode;
use std::time::Instant;

const INVALID_ROLL_NUMBERS: [&str; 4] = ["abc", "123abc", "-123", "0"];
const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
const OVERSIZED_LENGTH: usize = 256;
const OVERSIZED_PHONE_NUMBER: u64 = 99_999_999_999;
const NINE_DIGIT_PHONE_NUMBER: u64 = 999_999_999;

/// Everything a scenario needs: the client, a source of fresh test data
/// and the roll number the API accepts.
pub struct ScenarioContext {
    pub client: UserApiClient,
    pub data: TestDataGenerator,
    pub valid_roll_number: String,
    pub rate_limit_attempts: u32,
}

impl ScenarioContext {
    pub fn from_settings(settings: &Settings) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: settings.api.client()?,
            data: TestDataGenerator::new(settings.runner.seed),
            valid_roll_number: settings.api.valid_roll_number.clone(),
            rate_limit_attempts: settings.runner.rate_limit_attempts,
        })
    }

    async fn submit(&self, payload: &UserPayload) -> Result<StatusCode, ApiError> {
        self.client
            .create_user(payload, Some(&self.valid_roll_number))
            .await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    ValidInput,
    MissingRequiredFields,
    InvalidDataTypes,
    DuplicatePhoneNumbers,
    DuplicateEmailIds,
    MissingRollNumber,
    InvalidRollNumberFormat,
    BoundaryValues,
    SpecialCharacters,
    RateLimiting,
    DifferentHttpMethods,
}

impl Scenario {
    /// Every scenario, in the order a run executes them.
    pub const ALL: [Scenario; 11] = [
        Scenario::ValidInput,
        Scenario::MissingRequiredFields,
        Scenario::InvalidDataTypes,
        Scenario::DuplicatePhoneNumbers,
        Scenario::DuplicateEmailIds,
        Scenario::MissingRollNumber,
        Scenario::InvalidRollNumberFormat,
        Scenario::BoundaryValues,
        Scenario::SpecialCharacters,
        Scenario::RateLimiting,
        Scenario::DifferentHttpMethods,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::ValidInput => "Valid input",
            Scenario::MissingRequiredFields => "Missing required fields",
            Scenario::InvalidDataTypes => "Invalid data types",
            Scenario::DuplicatePhoneNumbers => "Duplicate phone number",
            Scenario::DuplicateEmailIds => "Duplicate email ID",
            Scenario::MissingRollNumber => "Missing roll number",
            Scenario::InvalidRollNumberFormat => "Invalid roll number format",
            Scenario::BoundaryValues => "Boundary values",
            Scenario::SpecialCharacters => "Special characters",
            Scenario::RateLimiting => "Rate limiting",
            Scenario::DifferentHttpMethods => "Different HTTP methods",
        }
    }

    #[tracing::instrument(name = "Running scenario", skip(ctx), fields(scenario = self.label()))]
    pub async fn run(&self, ctx: &mut ScenarioContext) -> Verdict {
        match self {
            Scenario::ValidInput => valid_input(ctx).await,
            Scenario::MissingRequiredFields => missing_required_fields(ctx).await,
            Scenario::InvalidDataTypes => invalid_data_types(ctx).await,
            Scenario::DuplicatePhoneNumbers => duplicate_phone_numbers(ctx).await,
            Scenario::DuplicateEmailIds => duplicate_email_ids(ctx).await,
            Scenario::MissingRollNumber => missing_roll_number(ctx).await,
            Scenario::InvalidRollNumberFormat => invalid_roll_number_format(ctx).await,
            Scenario::BoundaryValues => boundary_values(ctx).await,
            Scenario::SpecialCharacters => special_characters(ctx).await,
            Scenario::RateLimiting => rate_limiting(ctx).await,
            Scenario::DifferentHttpMethods => different_http_methods(),
        }
    }
}

async fn valid_input(ctx: &mut ScenarioContext) -> Verdict {
    let payload = ctx.data.valid_payload();
    let outcome = ctx.submit(&payload).await;
    expect_status(&outcome, &[StatusCode::CREATED], None).into()
}

async fn missing_required_fields(ctx: &mut ScenarioContext) -> Verdict {
    let mut failures = Vec::new();
    for field in UserField::ALL {
        let payload = ctx.data.valid_payload().without(field);
        let outcome = ctx.submit(&payload).await;
        let subject = format!("missing {}", field);
        if let Err(failure) =
            expect_status(&outcome, &[StatusCode::BAD_REQUEST], Some(&subject))
        {
            failures.push(failure);
        }
    }
    Verdict::from_failures(failures)
}

async fn invalid_data_types(ctx: &mut ScenarioContext) -> Verdict {
    let email = ctx.data.email();
    let payload = UserPayload::new("Test", "User", PhoneNumber::from("invalidPhone"), email);
    let outcome = ctx.submit(&payload).await;
    expect_status(
        &outcome,
        &[StatusCode::BAD_REQUEST],
        Some("invalid phoneNumber"),
    )
    .into()
}

// Only the second submission of a duplicate pair is asserted on
async fn submit_duplicate_pair(
    ctx: &ScenarioContext,
    first: UserPayload,
    second: UserPayload,
    subject: &str,
) -> Verdict {
    if let Err(e) = ctx.submit(&first).await {
        tracing::warn!(
            error.cause_chain = ?e,
            "Failed to submit the original of a duplicate pair"
        );
    }
    let outcome = ctx.submit(&second).await;
    expect_status(&outcome, &[StatusCode::BAD_REQUEST], Some(subject)).into()
}

async fn duplicate_phone_numbers(ctx: &mut ScenarioContext) -> Verdict {
    let phone_number = ctx.data.phone_number();
    let first = UserPayload::new("Test1", "User1", phone_number, ctx.data.email());
    let second = UserPayload::new("Test2", "User2", phone_number, ctx.data.email());
    submit_duplicate_pair(ctx, first, second, "duplicate phone number").await
}

async fn duplicate_email_ids(ctx: &mut ScenarioContext) -> Verdict {
    let email = ctx.data.email();
    let first = UserPayload::new("Test1", "User1", ctx.data.phone_number(), email.clone());
    let second = UserPayload::new("Test2", "User2", ctx.data.phone_number(), email);
    submit_duplicate_pair(ctx, first, second, "duplicate emailId").await
}

async fn missing_roll_number(ctx: &mut ScenarioContext) -> Verdict {
    let payload = ctx.data.valid_payload();
    let outcome = ctx.client.create_user(&payload, None).await;
    expect_status(
        &outcome,
        &[StatusCode::UNAUTHORIZED],
        Some("missing roll number"),
    )
    .into()
}

async fn invalid_roll_number_format(ctx: &mut ScenarioContext) -> Verdict {
    let payload = ctx.data.valid_payload();
    let mut failures = Vec::new();
    for roll_number in INVALID_ROLL_NUMBERS {
        let outcome = ctx.client.create_user(&payload, Some(roll_number)).await;
        let subject = format!("invalid roll number {:?}", roll_number);
        if let Err(failure) = expect_status(
            &outcome,
            &[StatusCode::BAD_REQUEST, StatusCode::UNAUTHORIZED],
            Some(&subject),
        ) {
            failures.push(failure);
        }
    }
    Verdict::from_failures(failures)
}

// Either outcome is acceptable here; the scenario only checks that
// oversized values get a well-formed answer.
async fn boundary_values(ctx: &mut ScenarioContext) -> Verdict {
    let oversized = ctx.data.alphanumeric(OVERSIZED_LENGTH);
    let payloads = [
        (
            "oversized firstName",
            UserPayload::new(
                oversized.clone(),
                "User",
                ctx.data.phone_number(),
                ctx.data.email(),
            ),
        ),
        (
            "oversized lastName",
            UserPayload::new(
                "Test",
                oversized.clone(),
                ctx.data.phone_number(),
                ctx.data.email(),
            ),
        ),
        (
            "oversized phoneNumber",
            UserPayload::new("Test", "User", OVERSIZED_PHONE_NUMBER, ctx.data.email()),
        ),
        (
            "oversized emailId",
            UserPayload::new(
                "Test",
                "User",
                NINE_DIGIT_PHONE_NUMBER,
                format!("{}@example.com", oversized),
            ),
        ),
    ];

    let mut failures = Vec::new();
    for (subject, payload) in &payloads {
        let outcome = ctx.submit(payload).await;
        if let Err(failure) = expect_status(
            &outcome,
            &[StatusCode::BAD_REQUEST, StatusCode::CREATED],
            Some(*subject),
        ) {
            failures.push(failure);
        }
    }
    Verdict::from_failures(failures)
}

async fn special_characters(ctx: &mut ScenarioContext) -> Verdict {
    let payload = UserPayload::new(
        format!("Test{}", SPECIAL_CHARACTERS),
        format!("User{}", SPECIAL_CHARACTERS),
        ctx.data.phone_number(),
        format!("test{}@example.com", SPECIAL_CHARACTERS),
    );
    let outcome = ctx.submit(&payload).await;
    expect_status(
        &outcome,
        &[StatusCode::CREATED],
        Some("special characters"),
    )
    .into()
}

async fn rate_limiting(ctx: &mut ScenarioContext) -> Verdict {
    let payload = ctx.data.valid_payload();
    let attempts = ctx.rate_limit_attempts;
    let start = Instant::now();
    for attempt in 1..=attempts {
        match ctx.submit(&payload).await {
            Ok(status) if status == StatusCode::TOO_MANY_REQUESTS => {
                tracing::info!(attempt, "Rate limiting kicked in");
                return Verdict::Observed("Rate limiting detected".into());
            }
            Ok(_) => {}
            Err(e) => {
                return Verdict::Failed(vec![format!(
                    "Request {} of {} failed: {}",
                    attempt, attempts, e
                )]);
            }
        }
    }
    Verdict::Observed(format!(
        "Sent {} requests in {:.3} seconds without rate limiting",
        attempts,
        start.elapsed().as_secs_f64()
    ))
}

// TODO: exercise GET/PUT/DELETE against the endpoint once the expected
// status for each method is known.
fn different_http_methods() -> Verdict {
    Verdict::NotImplemented
}
