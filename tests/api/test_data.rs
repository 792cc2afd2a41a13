//! Shared test data constants to avoid magic strings across integration tests

pub const CREATE_USER_PATH: &str = "/create/user";
pub const ROLL_NUMBER_HEADER: &str = "roll-number";
pub const VALID_ROLL_NUMBER: &str = "1";

/// Fixed seed so generated phone numbers and emails are the same on every run
pub const TEST_SEED: u64 = 42;
