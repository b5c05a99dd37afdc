use regex::Regex;
use std::sync::LazyLock;

// A fence runs to the next ``` or, if never closed, to the end of the text
static FENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?(?:```|\z)").unwrap());

/// Remove every fenced code block, fences included, so example code can't
/// be mistaken for document structure.
pub fn strip_code_fences(text: &str) -> String {
    FENCE_REGEX.replace_all(text, "").into_owned()
}
