//! Resolve events.

use crate::construct;
use crate::tokenizer::Tokenizer;

/// Names of resolvers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Name {
    /// Resolve labels.
    ///
    /// Labels are parsed as starts and ends, and when they match, merged
    /// together to form media (links and images), and otherwise turned into
    /// data.
    Label,
    /// Resolve data.
    ///
    /// Data is parsed as many small bits, due to several punctuation
    /// characters potentially starting something in text content.
    /// It helps performance to merge them together if those markers did not
    /// match anything and hence occur next to each other.
    Data,
}

/// Call the corresponding resolver.
pub fn call(tokenizer: &mut Tokenizer, name: Name) {
    match name {
        Name::Label => construct::label_end::resolve(tokenizer),
        Name::Data => construct::partial_data::resolve(tokenizer),
    }
}
