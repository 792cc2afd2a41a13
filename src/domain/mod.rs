mod test_data;
mod user_payload;

pub use test_data::TestDataGenerator;
pub use user_payload::{PhoneNumber, UserField, UserPayload};
