//! Constants needed to tokenize media.

/// The number of characters that form a tab stop.
///
/// This relates to the number of whitespace characters needed to form certain
/// constructs in markdown, notably whitespace between a destination and title.
/// `CommonMark` mandates `4`.
pub const TAB_SIZE: usize = 4;

/// The max number of unbalanced opening parens allowed in a raw destination.
///
/// `[a](b(c)` has one unbalanced paren and is fine, but a destination opening
/// more than 32 parens that it does not close is not a destination.
///
/// ## References
///
/// * [*§ 6.3 Links* in `CommonMark`](https://spec.commonmark.org/0.30/#links)
pub const RESOURCE_DESTINATION_BALANCE_MAX: usize = 32;

/// The max number of bytes allowed in a reference label (inclusive), without
/// the brackets.
///
/// ## References
///
/// * [*§ 6.3 Links* in `CommonMark`](https://spec.commonmark.org/0.30/#links)
pub const LINK_REFERENCE_SIZE_MAX: usize = 999;
