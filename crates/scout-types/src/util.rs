use crate::domain::PROJECT_ID_LEN;

/// Check if string is a well-formed project id (16 lowercase hex characters)
pub fn is_project_id(s: &str) -> bool {
    s.len() == PROJECT_ID_LEN && s.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}
