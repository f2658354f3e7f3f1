//! The string content type.
//!
//! **String** is the raw insides of destinations, titles, and reference
//! strings: only [character escapes][crate::construct::character_escape] and
//! data occur in it.

use crate::state::{Name as StateName, State};
use crate::tokenizer::Tokenizer;

/// Bytes that can start something in string.
const MARKERS: [u8; 1] = [
    b'\\', // `character_escape`
];

/// Start of string.
pub fn start(tokenizer: &mut Tokenizer) -> State {
    tokenizer.tokenize_state.markers = &MARKERS;
    State::Retry(StateName::StringBefore)
}

/// Before string.
///
/// ```markdown
/// > | a
///     ^
/// ```
pub fn before(tokenizer: &mut Tokenizer) -> State {
    match tokenizer.current {
        None => State::Ok,
        Some(b'\\') => {
            tokenizer.attempt(
                State::Next(StateName::StringBefore),
                State::Next(StateName::StringBeforeData),
            );
            State::Retry(StateName::CharacterEscapeStart)
        }
        _ => State::Retry(StateName::StringBeforeData),
    }
}

/// At data.
///
/// ```markdown
/// > | a
///     ^
/// ```
pub fn before_data(tokenizer: &mut Tokenizer) -> State {
    tokenizer.attempt(State::Next(StateName::StringBefore), State::Nok);
    State::Retry(StateName::DataStart)
}
