//! Markdown-to-terminal conversion
//!
//! Only two constructs are recognised: `**bold**` spans and `#` headings.
//! Both become terminal bold; the text itself is never changed otherwise.

use colored::Colorize;
use regex::Regex;
use std::sync::LazyLock;

static BOLD_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold pattern"));

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#+\s?(.*)$").expect("valid heading pattern"));

/// Convert one paragraph's markdown emphasis to terminal bold.
///
/// With `color` off the markers are simply removed.
pub fn to_terminal(text: &str, color: bool) -> String {
    let emphasize = |caps: &regex::Captures| {
        if color {
            caps[1].bold().to_string()
        } else {
            caps[1].to_string()
        }
    };
    let text = HEADING.replace_all(text, emphasize);
    BOLD_SPAN.replace_all(&text, emphasize).into_owned()
}
