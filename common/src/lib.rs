pub mod logger;

use validator::ValidationErrors;

/// Joins every field error message into one `;`-separated string, sorted so
/// responses are stable.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>();
    messages.sort();
    messages.join("; ")
}
