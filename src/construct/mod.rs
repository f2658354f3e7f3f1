//! Constructs found in markdown text.
//!
//! Constructs are grammatical structures: something that can be recognized in
//! the input.
//! Some are described by `CommonMark` directly (say, a link), some only exist
//! here as building blocks of others (say, a destination).
//!
//! The constructs recognized in [text content][text] are:
//!
//! *   [character escape][character_escape]
//! *   [label start (image)][label_start_image]
//! *   [label start (link)][label_start_link]
//! *   [label end][label_end]
//!
//! The constructs recognized in [string content][string] are:
//!
//! *   [character escape][character_escape]
//!
//! What remains in either is [data][partial_data].
//!
//! Several helpers are used by the above but are not constructs on their own:
//! they are called *partials* and cannot be turned off:
//!
//! *   [data][partial_data]
//! *   [destination][partial_destination]
//! *   [label][partial_label]
//! *   [space or tab][partial_space_or_tab]
//! *   [space or tab, one optional eol][partial_space_or_tab_eol]
//! *   [title][partial_title]
//!
//! [text]: crate::construct::text
//! [string]: crate::construct::string
//! [character_escape]: crate::construct::character_escape
//! [label_start_image]: crate::construct::label_start_image
//! [label_start_link]: crate::construct::label_start_link
//! [label_end]: crate::construct::label_end
//! [partial_data]: crate::construct::partial_data
//! [partial_destination]: crate::construct::partial_destination
//! [partial_label]: crate::construct::partial_label
//! [partial_space_or_tab]: crate::construct::partial_space_or_tab
//! [partial_space_or_tab_eol]: crate::construct::partial_space_or_tab_eol
//! [partial_title]: crate::construct::partial_title

pub mod character_escape;
pub mod label_end;
pub mod label_start_image;
pub mod label_start_link;
pub mod partial_data;
pub mod partial_destination;
pub mod partial_label;
pub mod partial_space_or_tab;
pub mod partial_space_or_tab_eol;
pub mod partial_title;
pub mod string;
pub mod text;
