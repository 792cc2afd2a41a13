pub mod api_client;
pub mod configuration;
pub mod destination;
pub mod domain;
pub mod oracle;
pub mod telemetry;
pub mod utils;
