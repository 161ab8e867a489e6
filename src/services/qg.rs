//! Question-generation flow — one exchange, merged into the form store.
//!
//! ERROR HANDLING
//! ==============
//! The store is written only after a successful exchange: a transport,
//! status, envelope, or parse failure leaves stored state exactly as it
//! was before the call.

use tracing::{debug, info};

use crate::api::{ApiError, QgApi};
use crate::services::form::{FormData, FormStore};

/// Generate a question for `context` and persist the merged form record.
///
/// Loads the current record, performs the exchange, then sets `context`,
/// `question`, and `correct_answer` from the reply before saving. The
/// user's answer field is carried over untouched.
///
/// # Errors
///
/// Returns the [`ApiError`] from the exchange; stored state is unchanged
/// in that case.
pub async fn generate_question(
    api: &dyn QgApi,
    store: &dyn FormStore,
    context: &str,
) -> Result<FormData, ApiError> {
    debug!(context_len = context.len(), "qg: requesting question");
    let mut data = store.load();
    let generated = api.generate_question(context).await?;
    info!(question_len = generated.question.len(), "qg: question generated");

    data.context = context.to_string();
    data.question = generated.question;
    data.correct_answer = generated.answer;
    store.save(&data);
    Ok(data)
}

#[cfg(test)]
#[path = "qg_test.rs"]
mod tests;
