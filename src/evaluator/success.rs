/// Checks whether a response satisfies the expected output.
///
/// An empty or whitespace-only expectation always passes; otherwise the
/// expectation must occur as a case-insensitive substring of the response.
pub fn check_success(response_text: &str, expected_output: &str) -> bool {
    if expected_output.trim().is_empty() {
        return true;
    }
    response_text
        .to_lowercase()
        .contains(&expected_output.to_lowercase())
}

#[cfg(test)]
#[path = "success_tests.rs"]
mod tests;
