//! API — HTTP client for the Knowledge Verificator service.
//!
//! DESIGN
//! ======
//! [`HttpApi`] is a thin reqwest wrapper over the service endpoints. The
//! question-generation exchange sits behind the [`QgApi`] trait so flows
//! can be tested against a mock; the materials endpoints live directly on
//! the concrete client.

pub mod client;
pub mod config;
pub mod types;

pub use client::HttpApi;
pub use config::{ApiConfig, ApiTimeouts};
pub use types::{ApiError, GeneratedQuestion, Material, QgApi};
