use crate::test_data::{ROLL_NUMBER_HEADER, VALID_ROLL_NUMBER};
use api_checks::configuration::ApiSettings;
use api_checks::domain::UserPayload;
use claims::assert_ok;
use reqwest::StatusCode;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_settings(base_url: String) -> ApiSettings {
    ApiSettings {
        base_url,
        create_user_path: "/automation-campus/create/user".into(),
        roll_number_header: ROLL_NUMBER_HEADER.into(),
        valid_roll_number: VALID_ROLL_NUMBER.into(),
        timeout_milliseconds: Some(2_000),
    }
}

#[tokio::test]
async fn a_client_built_from_settings_posts_to_the_configured_endpoint() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/automation-campus/create/user"))
        .and(header(ROLL_NUMBER_HEADER, VALID_ROLL_NUMBER))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    let client = assert_ok!(api_settings(format!("{}/", server.uri())).client());
    let payload = UserPayload::new("Test", "User", 1234567890u64, "test.user1@example.com");
    // Act
    let outcome = client.create_user(&payload, Some(VALID_ROLL_NUMBER)).await;
    // Assert
    assert_eq!(assert_ok!(outcome), StatusCode::CREATED);
}

#[tokio::test]
async fn the_roll_number_header_name_comes_from_settings() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(header("x-roll", "7"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    let mut settings = api_settings(server.uri());
    settings.roll_number_header = "x-roll".into();
    let client = assert_ok!(settings.client());
    let payload = UserPayload::new("Test", "User", 1234567890u64, "test.user2@example.com");
    // Act
    let outcome = client.create_user(&payload, Some("7")).await;
    // Assert
    assert_eq!(assert_ok!(outcome), StatusCode::CREATED);
}
