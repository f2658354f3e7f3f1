//! Normalize identifiers.

use alloc::string::String;

/// Normalize an identifier, so it can be compared when matching references to
/// definitions.
///
/// This collapses markdown whitespace (`\t`, `\r`, `\n`, and ` `) into one
/// space, trims the result, and then performs unicode case folding twice:
/// first by lowercasing uppercase characters, and then uppercasing lowercase
/// characters.
///
/// Some characters are considered "uppercase", such as U+03F4 (`ϴ`), but if
/// their lowercase counterpart (U+03B8 (`θ`)) is uppercased will result in a
/// different uppercase character (U+0398 (`Θ`)).
/// Hence, to get that form, both folds are performed.
/// The inverse order does not work: `SS` and `ẞ` both lowercase to forms that
/// uppercase to `SS`, but uppercasing `ẞ` first would yield `ß`.
///
/// ## References
///
/// * [*§ 6.3 Links* in `CommonMark`](https://spec.commonmark.org/0.30/#matches)
pub fn normalize_identifier(value: &str) -> String {
    // Note: it’ll grow a bit smaller for consecutive whitespace.
    let mut result = String::with_capacity(value.len());
    let bytes = value.as_bytes();
    let mut in_whitespace = true;
    let mut index = 0;
    let mut start = 0;

    while index < bytes.len() {
        if matches!(bytes[index], b'\t' | b'\n' | b'\r' | b' ') {
            // First whitespace we see after non-whitespace.
            if !in_whitespace {
                result.push_str(&value[start..index]);
                in_whitespace = true;
            }
        }
        // First non-whitespace we see after whitespace.
        else if in_whitespace {
            if start != 0 {
                result.push(' ');
            }

            start = index;
            in_whitespace = false;
        }

        index += 1;
    }

    if !in_whitespace {
        result.push_str(&value[start..]);
    }

    result.to_lowercase().to_uppercase()
}
