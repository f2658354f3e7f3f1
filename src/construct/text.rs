//! The text content type.
//!
//! **Text** is the phrasing in a paragraph: media, escapes, and actual text.
//!
//! The constructs found in text are:
//!
//! *   [Character escape][crate::construct::character_escape]
//! *   [Label start (image)][crate::construct::label_start_image]
//! *   [Label start (link)][crate::construct::label_start_link]
//! *   [Label end][crate::construct::label_end]

use crate::state::{Name as StateName, State};
use crate::tokenizer::Tokenizer;

/// Bytes that can start something in text.
const MARKERS: [u8; 4] = [
    b'!',  // `label_start_image`
    b'[',  // `label_start_link`
    b'\\', // `character_escape`
    b']',  // `label_end`
];

/// Start of text.
pub fn start(tokenizer: &mut Tokenizer) -> State {
    tokenizer.tokenize_state.markers = &MARKERS;
    State::Retry(StateName::TextBefore)
}

/// Before text.
///
/// ```markdown
/// > | a ![b](c) d
///     ^
/// ```
pub fn before(tokenizer: &mut Tokenizer) -> State {
    match tokenizer.current {
        None => State::Ok,
        Some(b'!') => {
            tokenizer.attempt(
                State::Next(StateName::TextBefore),
                State::Next(StateName::TextBeforeData),
            );
            State::Retry(StateName::LabelStartImageStart)
        }
        Some(b'[') => {
            tokenizer.attempt(
                State::Next(StateName::TextBefore),
                State::Next(StateName::TextBeforeData),
            );
            State::Retry(StateName::LabelStartLinkStart)
        }
        Some(b'\\') => {
            tokenizer.attempt(
                State::Next(StateName::TextBefore),
                State::Next(StateName::TextBeforeData),
            );
            State::Retry(StateName::CharacterEscapeStart)
        }
        Some(b']') => {
            tokenizer.attempt(
                State::Next(StateName::TextBefore),
                State::Next(StateName::TextBeforeData),
            );
            State::Retry(StateName::LabelEndStart)
        }
        _ => State::Retry(StateName::TextBeforeData),
    }
}

/// At data.
///
/// ```markdown
/// > | a ![b](c) d
///     ^
/// ```
pub fn before_data(tokenizer: &mut Tokenizer) -> State {
    tokenizer.attempt(State::Next(StateName::TextBefore), State::Nok);
    State::Retry(StateName::DataStart)
}
