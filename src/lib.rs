//! # edgedict
//!
//! Bulk-update the `Enabled` item in the `Edge_Security` edge dictionary
//! across a set of Fastly services.
//!
//! The crate is a small orchestration core around the Fastly configuration
//! API: for each service ID it resolves the active version, locates the
//! `Edge_Security` dictionary in that version, finds the `Enabled` item,
//! and overwrites its value, recording exactly one success-or-failure
//! outcome per service. One service failing never stops the rest of the
//! batch.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edgedict::{updater, FastlyClient, FastlyConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FastlyConfig::default(); // token from FASTLY_API_TOKEN
//!     config.validate()?;
//!
//!     let client = FastlyClient::new(&config)?;
//!     let service_ids = vec!["SU1Z0isxPaozGVKXdv0eY".to_string()];
//!     let results = updater::run(&client, &service_ids, 100).await;
//!
//!     for (service_id, outcome) in &results {
//!         println!("{}: {}", service_id, outcome.service_name());
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod types;
pub mod updater;

// Re-export main types for external use
pub use client::FastlyClient;
pub use config::FastlyConfig;
pub use error::{Error, Result};
pub use types::{Dictionary, DictionaryItem, ServiceDetails, ServiceVersion, UpdateOutcome};
