#[allow(dead_code)]
mod shared;

use mediamark::Name;
use pretty_assertions::assert_eq;
use shared::{
    assert_balanced, assert_no_internal_names, count, extract, outline, parse, parse_with,
    serialize,
};

#[test]
fn link_reference() {
    let events = parse_with("[foo][bar]", &["bar"]);
    assert_eq!(
        outline(&events),
        [
            "enter:Link",
            "enter:Label",
            "enter:LabelMarker",
            "exit:LabelMarker",
            "enter:LabelText",
            "enter:Data",
            "exit:Data",
            "exit:LabelText",
            "enter:LabelMarker",
            "exit:LabelMarker",
            "exit:Label",
            "enter:Reference",
            "enter:ReferenceMarker",
            "exit:ReferenceMarker",
            "enter:ReferenceString",
            "enter:Data",
            "exit:Data",
            "exit:ReferenceString",
            "enter:ReferenceMarker",
            "exit:ReferenceMarker",
            "exit:Reference",
            "exit:Link",
        ]
        .join("\n"),
        "should support full references"
    );

    let events = parse_with("[foo][]", &["foo"]);
    assert_eq!(
        outline(&events),
        [
            "enter:Link",
            "enter:Label",
            "enter:LabelMarker",
            "exit:LabelMarker",
            "enter:LabelText",
            "enter:Data",
            "exit:Data",
            "exit:LabelText",
            "enter:LabelMarker",
            "exit:LabelMarker",
            "exit:Label",
            "enter:Reference",
            "enter:ReferenceMarker",
            "exit:ReferenceMarker",
            "enter:ReferenceMarker",
            "exit:ReferenceMarker",
            "exit:Reference",
            "exit:Link",
        ]
        .join("\n"),
        "should support collapsed references"
    );

    let events = parse_with("[foo]", &["foo"]);
    assert_eq!(
        outline(&events),
        [
            "enter:Link",
            "enter:Label",
            "enter:LabelMarker",
            "exit:LabelMarker",
            "enter:LabelText",
            "enter:Data",
            "exit:Data",
            "exit:LabelText",
            "enter:LabelMarker",
            "exit:LabelMarker",
            "exit:Label",
            "exit:Link",
        ]
        .join("\n"),
        "should support shortcut references"
    );

    let value = "[foo]";
    let events = parse(value);
    assert_eq!(
        outline(&events),
        "enter:Data\nexit:Data",
        "should not support an undefined shortcut"
    );
    assert_eq!(
        extract(value, &events, &Name::Data),
        vec!["[foo]"],
        "should turn an undefined shortcut into data"
    );
    assert_eq!(serialize(value, &events), value, "should round-trip");

    let value = "[a][unknown]";
    let events = parse_with(value, &["a"]);
    assert_eq!(
        count(&events, &Name::Link),
        0,
        "should not support an undefined full reference, even w/ the label defined"
    );
    assert_eq!(serialize(value, &events), value, "should round-trip");

    let value = "[a][]";
    let events = parse(value);
    assert_eq!(
        count(&events, &Name::Link),
        0,
        "should not support an undefined collapsed reference"
    );
    assert_eq!(serialize(value, &events), value, "should round-trip");

    assert_eq!(
        count(&parse_with("[A]", &["a"]), &Name::Link),
        1,
        "should match case-insensitively"
    );

    assert_eq!(
        count(&parse_with("[a]", &["  A  "]), &Name::Link),
        1,
        "should trim whitespace when normalizing"
    );

    assert_eq!(
        count(&parse_with("[x][Bar]", &["bar"]), &Name::Link),
        1,
        "should normalize the explicit label of a full reference"
    );

    let value = "[a\nb]";
    let events = parse_with(value, &["a b"]);
    assert_eq!(
        count(&events, &Name::Link),
        1,
        "should collapse whitespace when normalizing"
    );
    assert_eq!(serialize(value, &events), value, "should round-trip");

    let value = "[a][b\\]c]";
    let events = parse_with(value, &["b\\]c"]);
    assert_eq!(
        count(&events, &Name::Link),
        1,
        "should support escapes in reference labels"
    );
    assert_eq!(
        extract(value, &events, &Name::ReferenceString),
        vec!["b\\]c"],
        "should keep the escape in the reference string"
    );
    assert_eq!(
        count(&events, &Name::CharacterEscape),
        1,
        "should tokenize the escape in the reference string"
    );

    let value = "[x][a\nb]";
    let events = parse_with(value, &["a b"]);
    assert_eq!(
        count(&events, &Name::Link),
        1,
        "should support line endings in reference labels"
    );
    assert_eq!(serialize(value, &events), value, "should round-trip");

    // A reference label has an upper size limit.
    // The oversized second label cannot form a full reference, though it can
    // still match on its own as a shortcut.
    let big = "a".repeat(1000);
    let value = format!("[x][{}]", big);
    let events = parse_with(&value, &[&big]);
    assert_eq!(
        count(&events, &Name::Reference),
        0,
        "should not support reference labels over 999 bytes"
    );

    let almost = "a".repeat(999);
    let value = format!("[x][{}]", almost);
    let events = parse_with(&value, &[&almost]);
    assert_eq!(
        count(&events, &Name::Reference),
        1,
        "should support reference labels of 999 bytes"
    );
    assert_eq!(
        count(&events, &Name::Link),
        1,
        "should form one link from a full reference"
    );

    let value = "[foo] (x)";
    let events = parse_with(value, &["foo"]);
    assert_eq!(
        count(&events, &Name::Link),
        1,
        "should not need a suffix for a shortcut, even before a paren"
    );
    assert_eq!(
        count(&events, &Name::Resource),
        0,
        "should not parse a spaced-out paren as a resource"
    );
    assert_eq!(serialize(value, &events), value, "should round-trip");

    for (value, definitions) in [
        ("[foo][bar]", vec!["bar"]),
        ("[foo][]", vec!["foo"]),
        ("[foo]", vec!["foo"]),
        ("[foo]", vec![]),
        ("[a][unknown]", vec!["a"]),
    ] {
        let events = parse_with(value, &definitions);
        assert_balanced(&events);
        assert_no_internal_names(&events);
        assert_eq!(serialize(value, &events), value, "should round-trip");
    }
}
