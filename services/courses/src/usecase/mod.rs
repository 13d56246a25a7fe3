pub mod category;
pub mod comment;
pub mod course;
pub mod lesson;
pub mod user;

#[cfg(test)]
pub(crate) mod mock;

/// Trim user-supplied text, treating blank input as absent.
pub(crate) fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}
