//! Character escapes occur in the [string][] and [text][] content types.
//!
//! They’re formed with the following BNF:
//!
//! ```bnf
//! character_escape ::= '\\' ascii_punctuation
//! ```
//!
//! Like much of markdown, there are no “invalid” character escapes: just a
//! slash, or a slash followed by anything other than an ASCII punctuation
//! character, is exactly that: just a slash.
//!
//! Character escapes matter to media because an escaped bracket does not
//! open or close anything: `[a\]b]` has a one-bracket label `a]b`.
//!
//! ## Tokens
//!
//! *   [`CharacterEscape`][Name::CharacterEscape]
//! *   [`CharacterEscapeMarker`][Name::CharacterEscapeMarker]
//! *   [`CharacterEscapeValue`][Name::CharacterEscapeValue]
//!
//! ## References
//!
//! *   [*§ 2.4 Backslash escapes* in `CommonMark`](https://spec.commonmark.org/0.30/#backslash-escapes)
//!
//! [string]: crate::construct::string
//! [text]: crate::construct::text

use crate::event::Name;
use crate::state::{Name as StateName, State};
use crate::tokenizer::Tokenizer;

/// Start of character escape.
///
/// ```markdown
/// > | a\*b
///      ^
/// ```
pub fn start(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.parse_state.options.constructs.character_escape
        && tokenizer.current == Some(b'\\')
    {
        tokenizer.enter(Name::CharacterEscape);
        tokenizer.enter(Name::CharacterEscapeMarker);
        tokenizer.consume();
        tokenizer.exit(Name::CharacterEscapeMarker);
        State::Next(StateName::CharacterEscapeInside)
    } else {
        State::Nok
    }
}

/// After `\`, at punctuation.
///
/// ```markdown
/// > | a\*b
///       ^
/// ```
pub fn inside(tokenizer: &mut Tokenizer) -> State {
    match tokenizer.current {
        Some(byte) if byte.is_ascii_punctuation() => {
            tokenizer.enter(Name::CharacterEscapeValue);
            tokenizer.consume();
            tokenizer.exit(Name::CharacterEscapeValue);
            tokenizer.exit(Name::CharacterEscape);
            State::Ok
        }
        _ => State::Nok,
    }
}
