//! Quizform — session form state and question-generation client for the
//! Knowledge Verificator service.
//!
//! DESIGN
//! ======
//! Two collaborating halves: a form-state store that keeps one quiz record
//! alive for the duration of a user session, and an API client that asks
//! the remote service to generate a question for a given context passage
//! and merges the reply into the stored record.
//!
//! The store never fails from the caller's perspective (absent or broken
//! storage degrades to the empty record); the network exchange returns a
//! typed [`api::ApiError`] the caller is expected to surface, typically
//! through [`ui::show_error_message`].

pub mod api;
pub mod services;
pub mod ui;

pub use api::{ApiConfig, ApiError, GeneratedQuestion, HttpApi, QgApi};
pub use services::form::{FormData, FormStore, MemoryStore, SessionStore};
pub use services::qg::generate_question;
