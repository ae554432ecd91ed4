/// Longest prefix taken from the title
pub const MAX_PREFIX_LEN: usize = 8;

/// Appended to every generated code
pub const CODE_SUFFIX: &str = "-M2";

/// Derives a course code from its title.
///
/// The title is upper-cased, everything outside `A-Z0-9` is dropped, and the
/// result is cut to `min(8, title length)` characters before `-M2` is
/// appended. The length bound uses the *original* title, so a title whose
/// stripped form is shorter simply keeps all of it.
pub fn generate_course_code(title: &str) -> String {
    let limit = title.chars().count().min(MAX_PREFIX_LEN);

    let prefix: String = title
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .take(limit)
        .collect();

    format!("{prefix}{CODE_SUFFIX}")
}
