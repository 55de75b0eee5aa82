use axum::http::StatusCode;

pub type ApiResult<T> = Result<T, (StatusCode, String)>;

pub fn bad_request(msg: impl Into<String>) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, msg.into())
}

pub fn internal_error(msg: impl Into<String>) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, msg.into())
}

/// Validates a batch request before any upstream call is made.
///
/// `count_field` names the offending field in the rejection message, since
/// the two endpoints bound different fields to the same [1, 10] range.
pub fn validate_batch(task: &str, count: u32, count_field: &str) -> ApiResult<()> {
    if !(1..=10).contains(&count) {
        return Err(bad_request(format!(
            "{count_field} must be between 1 and 10"
        )));
    }
    if task.trim().is_empty() {
        return Err(bad_request("task cannot be empty"));
    }
    Ok(())
}
