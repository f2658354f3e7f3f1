#[allow(dead_code)]
mod shared;

use mediamark::{Constructs, Name, ParseOptions};
use pretty_assertions::assert_eq;
use shared::{
    assert_balanced, assert_no_internal_names, count, extract, max_depth, parse, parse_with,
    serialize, setup,
};

#[test]
fn label() {
    // The deepest link wins: a link cannot contain another link.
    let value = "[a [b](c) d](e)";
    let events = parse(value);
    assert_eq!(count(&events, &Name::Link), 1, "should support one link only");
    assert_eq!(
        extract(value, &events, &Name::LabelText),
        vec!["b"],
        "should let the inner link win"
    );
    assert_eq!(
        max_depth(&events, &Name::Link),
        1,
        "should never nest links in links"
    );
    assert_eq!(serialize(value, &events), value, "should round-trip");

    let value = "a [b [c](d) e](f) g";
    let events = parse(value);
    assert_eq!(count(&events, &Name::Link), 1, "should support one link only");
    assert_eq!(
        extract(value, &events, &Name::LabelText),
        vec!["c"],
        "should let the deepest link win"
    );
    assert_eq!(serialize(value, &events), value, "should round-trip");

    // Also via references.
    let value = "[a [b][x] c](d)";
    let events = parse_with(value, &["x"]);
    assert_eq!(count(&events, &Name::Link), 1, "should support one link only");
    assert_eq!(
        extract(value, &events, &Name::LabelText),
        vec!["b"],
        "should let the inner reference win"
    );

    // An opener that took part in a failed close cannot be used again.
    let value = "[a] [a]";
    let events = parse(value);
    assert_eq!(count(&events, &Name::Link), 0, "should not match undefined openers");
    assert_eq!(serialize(value, &events), value, "should round-trip");

    let value = "[a]](b)";
    let events = parse(value);
    assert_eq!(
        count(&events, &Name::Link),
        0,
        "should not reuse a balanced opener for a later `]`"
    );
    assert_eq!(serialize(value, &events), value, "should round-trip");

    // The inner pair balances first, so the outer opener gets the resource.
    let value = "[[a]](b)";
    let events = parse(value);
    assert_eq!(count(&events, &Name::Link), 1, "should match the outer opener");
    assert_eq!(
        extract(value, &events, &Name::LabelText),
        vec!["[a]"],
        "should keep the balanced inner brackets as text"
    );
    assert_eq!(serialize(value, &events), value, "should round-trip");

    // Escaped brackets do not open or close.
    let value = "[a\\]b](c)";
    let events = parse(value);
    assert_eq!(count(&events, &Name::Link), 1, "should not close at an escaped `]`");
    assert_eq!(
        extract(value, &events, &Name::LabelText),
        vec!["a\\]b"],
        "should keep the escape in the label text"
    );
    assert_eq!(
        count(&events, &Name::CharacterEscape),
        1,
        "should tokenize the escape in the label text"
    );
    assert_eq!(serialize(value, &events), value, "should round-trip");

    let value = "\\[a](b)";
    let events = parse(value);
    assert_eq!(count(&events, &Name::Link), 0, "should not open at an escaped `[`");
    assert_eq!(serialize(value, &events), value, "should round-trip");

    // Labels can span line endings.
    let value = "[a\nb](c)";
    let events = parse(value);
    assert_eq!(count(&events, &Name::Link), 1, "should span line endings");
    assert_eq!(
        extract(value, &events, &Name::LabelText),
        vec!["a\nb"],
        "should keep the line ending in the label text"
    );
    assert_eq!(serialize(value, &events), value, "should round-trip");

    // Stable names for downstream consumers.
    assert_eq!(Name::Link.as_str(), "link", "should expose stable names");
    assert_eq!(Name::Image.as_str(), "image", "should expose stable names");
    assert_eq!(Name::Label.as_str(), "label", "should expose stable names");
    assert_eq!(
        Name::LabelText.as_str(),
        "labelText",
        "should expose stable names"
    );
    assert_eq!(
        Name::ResourceDestinationLiteralMarker.as_str(),
        "resourceDestinationLiteralMarker",
        "should expose stable names"
    );
    assert_eq!(
        Name::ReferenceString.as_str(),
        "referenceString",
        "should expose stable names"
    );

    for (value, definitions) in [
        ("[a [b](c) d](e)", vec![]),
        ("[a]", vec!["a"]),
        ("[a][b]", vec!["b"]),
        ("![a](b \"c\")", vec![]),
        ("[a] [a]", vec![]),
        ("[[a]](b)", vec![]),
    ] {
        let events = parse_with(value, &definitions);
        assert_balanced(&events);
        assert_no_internal_names(&events);
        assert_eq!(serialize(value, &events), value, "should round-trip");
    }
}

#[test]
fn label_constructs() {
    setup();

    let options = ParseOptions {
        constructs: Constructs {
            label_start_link: false,
            ..Constructs::default()
        },
        ..ParseOptions::default()
    };
    let events = mediamark::to_events_with_options("[a](b)", &options);
    assert_eq!(
        count(&events, &Name::Link),
        0,
        "should support turning off label starts (link)"
    );

    let options = ParseOptions {
        constructs: Constructs {
            label_start_image: false,
            ..Constructs::default()
        },
        ..ParseOptions::default()
    };
    let events = mediamark::to_events_with_options("![a](b)", &options);
    assert_eq!(
        count(&events, &Name::Image),
        0,
        "should support turning off label starts (image)"
    );
    assert_eq!(
        count(&events, &Name::Link),
        1,
        "should still support the plain `[` when images are off"
    );

    let options = ParseOptions {
        constructs: Constructs {
            label_end: false,
            ..Constructs::default()
        },
        ..ParseOptions::default()
    };
    let value = "[a](b)";
    let events = mediamark::to_events_with_options(value, &options);
    assert_eq!(
        count(&events, &Name::Link),
        0,
        "should support turning off label ends"
    );
    assert_no_internal_names(&events);
    assert_eq!(serialize(value, &events), value, "should round-trip");

    let options = ParseOptions {
        constructs: Constructs {
            character_escape: false,
            ..Constructs::default()
        },
        ..ParseOptions::default()
    };
    let value = "[a\\]b](c)";
    let events = mediamark::to_events_with_options(value, &options);
    assert_eq!(
        count(&events, &Name::Link),
        0,
        "should close at `\\]` when character escapes are off"
    );
    assert_eq!(serialize(value, &events), value, "should round-trip");
}
