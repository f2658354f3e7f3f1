//! Public API of `mediamark`.
//!
//! `mediamark` tokenizes the media constructs of `CommonMark`, links and
//! images, in a run of inline text, and yields concrete events: enter and
//! exit pairs that label every byte of the input, precise to the marker.
//!
//! This module exposes primarily [`to_events()`][].
//! It also exposes [`to_events_with_options()`][], which lets you provide the
//! set of defined reference identifiers and turn individual constructs on or
//! off.
//!
//! ## Overview
//!
//! Brackets are cheap to open and expensive to close: a `[` or `![` might
//! become a link or an image, but whether it does is only known at a `]`,
//! and what it becomes depends on what follows the `]`: a resource
//! (`(/url "title")`), a full reference (`[known]`), a collapsed reference
//! (`[]`), or nothing at all (a shortcut).
//! The tokenizer tracks pending openers while scanning forward, and a
//! resolver pass afterwards rewrites matched spans into `link`/`image`
//! groups and demotes abandoned openers to plain data.
//!
//! ## Examples
//!
//! ```
//! use mediamark::{to_events, Name};
//!
//! let events = to_events("a [b](/c \"d\") e");
//!
//! assert!(events.iter().any(|event| event.name == Name::Link));
//! ```
//!
//! References only match definitions you provide:
//!
//! ```
//! use mediamark::{to_events_with_options, Name, ParseOptions};
//!
//! let options = ParseOptions {
//!     definitions: vec!["bravo".into()],
//!     ..ParseOptions::default()
//! };
//!
//! let defined = to_events_with_options("[alpha][bravo]", &options);
//! let undefined = to_events_with_options("[alpha][charlie]", &options);
//!
//! assert!(defined.iter().any(|event| event.name == Name::Link));
//! assert!(undefined.iter().all(|event| event.name != Name::Link));
//! ```

#![no_std]
#![deny(clippy::pedantic)]
#![allow(clippy::doc_link_with_quotes)]
#![allow(clippy::too_many_lines)]

extern crate alloc;

mod construct;
mod event;
mod parser;
mod resolve;
mod state;
mod subtokenize;
mod tokenizer;
mod util;

use alloc::{string::String, vec::Vec};
use parser::parse;

pub use event::{Content, Event, Kind, Link, Name, Point};

/// Control which constructs are enabled.
///
/// Not all constructs can be configured individually: markers that occur in
/// several (`]` closing both links and images) are either recognized or not.
/// All constructs are enabled by default.
///
/// ## Examples
///
/// ```
/// use mediamark::Constructs;
/// # fn main() {
///
/// // Media without images:
/// let constructs = Constructs {
///     label_start_image: false,
///     ..Constructs::default()
/// };
/// # }
/// ```
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constructs {
    /// Character escape.
    ///
    /// ```markdown
    /// > | a \[b
    ///       ^^
    /// ```
    pub character_escape: bool,
    /// Label start (image).
    ///
    /// ```markdown
    /// > | a ![b](c) d
    ///       ^^
    /// ```
    pub label_start_image: bool,
    /// Label start (link).
    ///
    /// ```markdown
    /// > | a [b](c) d
    ///       ^
    /// ```
    pub label_start_link: bool,
    /// Label end.
    ///
    /// ```markdown
    /// > | a [b](c) d
    ///         ^^^^
    /// ```
    pub label_end: bool,
}

impl Default for Constructs {
    /// `CommonMark` media.
    fn default() -> Self {
        Self {
            character_escape: true,
            label_start_image: true,
            label_start_link: true,
            label_end: true,
        }
    }
}

/// Configuration that describes how to tokenize.
///
/// ## Examples
///
/// ```
/// use mediamark::ParseOptions;
/// # fn main() {
///
/// // Default options:
/// let options = ParseOptions::default();
/// # }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    /// Which constructs to enable and disable.
    pub constructs: Constructs,
    /// Identifiers of known definitions, as they occur in `[id]: url`
    /// definition blocks elsewhere in a document.
    ///
    /// Identifiers are normalized before matching, so `"Bravo"` and
    /// `"  bravo  "` define the same identifier.
    pub definitions: Vec<String>,
}

/// Turn markdown text into events, with defaults.
///
/// Without definitions, only resources (`[a](b)`) can match.
///
/// ## Examples
///
/// ```
/// use mediamark::{to_events, Kind, Name};
///
/// let events = to_events("![a](b)");
///
/// assert_eq!(events[0].kind, Kind::Enter);
/// assert_eq!(events[0].name, Name::Image);
/// ```
#[must_use]
pub fn to_events(value: &str) -> Vec<Event> {
    to_events_with_options(value, &ParseOptions::default())
}

/// Turn markdown text into events, with configuration.
///
/// ## Examples
///
/// ```
/// use mediamark::{to_events_with_options, Name, ParseOptions};
///
/// let options = ParseOptions {
///     definitions: vec!["a".into()],
///     ..ParseOptions::default()
/// };
///
/// // A shortcut reference:
/// let events = to_events_with_options("[a]", &options);
///
/// assert!(events.iter().any(|event| event.name == Name::Link));
/// ```
#[must_use]
pub fn to_events_with_options(value: &str, options: &ParseOptions) -> Vec<Event> {
    parse(value, options)
}
