//! Module for dot-segment removal.

use alloc::string::String;

/// Removes the `"."` and `".."` segments from a path.
///
/// This is the `remove_dot_segments` routine of
/// [Section 5.2.4 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4).
/// A `".."` segment above the root is dropped.
///
/// # Examples
///
/// ```
/// use iri_parts::remove_dot_segments;
///
/// assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
/// assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
/// assert_eq!(remove_dot_segments("/../../g"), "/g");
/// ```
#[must_use]
pub fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::with_capacity(path.len());

    while !input.is_empty() {
        match Step::of(input) {
            Step::DotPrefix(len) => input = &input[len..],
            Step::SingleDotEnd => input = "/",
            Step::SingleDot => input = &input[2..],
            Step::DoubleDot => {
                input = if input.len() == 3 { "/" } else { &input[3..] };
                output.truncate(output.rfind('/').unwrap_or(0));
            }
            Step::DotOnly => input = "",
            Step::Segment => {
                // The first byte is skipped so that a leading '/' moves along with the segment.
                let end = input.as_bytes()[1..]
                    .iter()
                    .position(|&x| x == b'/')
                    .map_or(input.len(), |i| i + 1);
                output.push_str(&input[..end]);
                input = &input[end..];
            }
        }
    }
    output
}

/// What to do with the start of the remaining input.
///
/// The variants are listed in the order they are checked.
enum Step {
    /// Starts with `"../"` or `"./"`; carries the prefix length.
    DotPrefix(usize),
    /// Equals `"/."`.
    SingleDotEnd,
    /// Starts with `"/./"`.
    SingleDot,
    /// Starts with `"/../"` or equals `"/.."`.
    DoubleDot,
    /// Equals `"."` or `".."`.
    DotOnly,
    /// Anything else.
    Segment,
}

impl Step {
    fn of(input: &str) -> Self {
        if input.starts_with("../") {
            Self::DotPrefix(3)
        } else if input.starts_with("./") {
            Self::DotPrefix(2)
        } else if input == "/." {
            Self::SingleDotEnd
        } else if input.starts_with("/./") {
            Self::SingleDot
        } else if input.starts_with("/../") || input == "/.." {
            Self::DoubleDot
        } else if input == "." || input == ".." {
            Self::DotOnly
        } else {
            Self::Segment
        }
    }
}
