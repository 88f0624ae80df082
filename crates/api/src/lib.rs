pub mod app;
pub mod config;
pub mod error;
pub mod gql;
pub mod state;
pub mod telemetry;

pub use config::{Config, RunMode};
pub use state::AppState;
