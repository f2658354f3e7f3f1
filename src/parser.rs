//! Turn a string of markdown text into events.

use crate::event::{Event, Point};
use crate::state::{Name as StateName, State};
use crate::subtokenize::subtokenize;
use crate::tokenizer::Tokenizer;
use crate::util::normalize_identifier::normalize_identifier;
use crate::ParseOptions;
use alloc::{string::String, vec::Vec};

/// Info needed, in all content types, when parsing markdown.
#[derive(Debug)]
pub struct ParseState<'a> {
    /// Configuration.
    pub options: &'a ParseOptions,
    /// The input value as bytes.
    pub bytes: &'a [u8],
    /// Defined identifiers, normalized.
    pub definitions: Vec<String>,
}

/// Turn a string of markdown text into events.
pub fn parse(value: &str, options: &ParseOptions) -> Vec<Event> {
    let mut definitions: Vec<String> = Vec::with_capacity(options.definitions.len());
    let mut index = 0;
    while index < options.definitions.len() {
        let definition = normalize_identifier(&options.definitions[index]);
        if !definitions.contains(&definition) {
            definitions.push(definition);
        }
        index += 1;
    }

    let parse_state = ParseState {
        options,
        bytes: value.as_bytes(),
        definitions,
    };

    let mut tokenizer = Tokenizer::new(
        Point {
            line: 1,
            column: 1,
            index: 0,
            vs: 0,
        },
        &parse_state,
    );

    let state = tokenizer.push(
        (0, 0),
        (parse_state.bytes.len(), 0),
        State::Next(StateName::TextStart),
    );
    tokenizer.flush(state, true);

    let mut events = tokenizer.events;

    while !subtokenize(&mut events, &parse_state) {}

    events
}
