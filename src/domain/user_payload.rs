use serde::Serialize;

/// The four fields the create-user endpoint requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    FirstName,
    LastName,
    PhoneNumber,
    EmailId,
}

impl UserField {
    pub const ALL: [UserField; 4] = [
        UserField::FirstName,
        UserField::LastName,
        UserField::PhoneNumber,
        UserField::EmailId,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::FirstName => "firstName",
            UserField::LastName => "lastName",
            UserField::PhoneNumber => "phoneNumber",
            UserField::EmailId => "emailId",
        }
    }
}

impl std::fmt::Display for UserField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A phone number is normally numeric, but the API must also be fed
/// text in that slot to check its type validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PhoneNumber {
    Numeric(u64),
    Text(String),
}

impl From<u64> for PhoneNumber {
    fn from(value: u64) -> Self {
        PhoneNumber::Numeric(value)
    }
}

impl From<&str> for PhoneNumber {
    fn from(value: &str) -> Self {
        PhoneNumber::Text(value.to_string())
    }
}

/// Request body for the create-user endpoint.
///
/// Absent fields are left out of the JSON entirely rather than sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
}

impl UserPayload {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<PhoneNumber>,
        email_id: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            phone_number: Some(phone_number.into()),
            email_id: Some(email_id.into()),
        }
    }

    pub fn without(mut self, field: UserField) -> Self {
        match field {
            UserField::FirstName => self.first_name = None,
            UserField::LastName => self.last_name = None,
            UserField::PhoneNumber => self.phone_number = None,
            UserField::EmailId => self.email_id = None,
        }
        self
    }
}
