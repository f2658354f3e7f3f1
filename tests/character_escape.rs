#[allow(dead_code)]
mod shared;

use mediamark::Name;
use pretty_assertions::assert_eq;
use shared::{count, extract, parse, serialize};

#[test]
fn character_escape() {
    let value = "a\\*b";
    let events = parse(value);
    assert_eq!(
        count(&events, &Name::CharacterEscape),
        1,
        "should support escaped punctuation"
    );
    assert_eq!(
        extract(value, &events, &Name::CharacterEscapeValue),
        vec!["*"],
        "should place the escaped character in the value"
    );
    assert_eq!(serialize(value, &events), value, "should round-trip");

    let value = "a\\bc";
    let events = parse(value);
    assert_eq!(
        count(&events, &Name::CharacterEscape),
        0,
        "should not support escaped non-punctuation"
    );
    assert_eq!(
        extract(value, &events, &Name::Data),
        vec!["a\\bc"],
        "should merge the dangling slash into the data"
    );
    assert_eq!(serialize(value, &events), value, "should round-trip");

    let value = "a\\";
    let events = parse(value);
    assert_eq!(
        count(&events, &Name::CharacterEscape),
        0,
        "should not support a trailing slash"
    );
    assert_eq!(serialize(value, &events), value, "should round-trip");

    let value = "[a](b\\)c\\))";
    let events = parse(value);
    assert_eq!(
        count(&events, &Name::Link),
        1,
        "should support escapes in destinations"
    );
    assert_eq!(
        count(&events, &Name::CharacterEscape),
        2,
        "should tokenize escapes in the destination string"
    );
    assert_eq!(serialize(value, &events), value, "should round-trip");
}
