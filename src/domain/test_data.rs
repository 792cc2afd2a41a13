use crate::domain::UserPayload;
use crate::utils::random_alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random phone numbers, emails and strings the scenarios
/// use to avoid colliding with users created by earlier runs.
///
/// Seed it to make a run reproducible.
#[derive(Debug)]
pub struct TestDataGenerator {
    rng: StdRng,
}

impl TestDataGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// A ten digit number in `1_000_000_000..1_900_000_000`.
    pub fn phone_number(&mut self) -> u64 {
        1_000_000_000 + self.rng.gen_range(0..900_000_000u64)
    }

    pub fn email(&mut self) -> String {
        format!("test.user{}@example.com", self.rng.gen_range(0..10_000u32))
    }

    pub fn alphanumeric(&mut self, length: usize) -> String {
        random_alphanumeric(&mut self.rng, length)
    }

    pub fn valid_payload(&mut self) -> UserPayload {
        let phone_number = self.phone_number();
        let email = self.email();
        UserPayload::new("Test", "User", phone_number, email)
    }
}
