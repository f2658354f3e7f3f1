#[allow(dead_code)]
mod shared;

use mediamark::Name;
use pretty_assertions::assert_eq;
use shared::{assert_balanced, count, extract, outline, parse, parse_with, serialize};

#[test]
fn link_resource() {
    let events = parse("[foo](/url)");
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
            "enter:Resource",
            "enter:ResourceMarker",
            "exit:ResourceMarker",
            "enter:ResourceDestination",
            "enter:ResourceDestinationRaw",
            "enter:ResourceDestinationString",
            "enter:Data",
            "exit:Data",
            "exit:ResourceDestinationString",
            "exit:ResourceDestinationRaw",
            "exit:ResourceDestination",
            "enter:ResourceMarker",
            "exit:ResourceMarker",
            "exit:Resource",
            "exit:Link",
        ]
        .join("\n"),
        "should support links w/ a destination"
    );

    let events = parse("[a](b \"c\")");
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
            "enter:Resource",
            "enter:ResourceMarker",
            "exit:ResourceMarker",
            "enter:ResourceDestination",
            "enter:ResourceDestinationRaw",
            "enter:ResourceDestinationString",
            "enter:Data",
            "exit:Data",
            "exit:ResourceDestinationString",
            "exit:ResourceDestinationRaw",
            "exit:ResourceDestination",
            "enter:SpaceOrTab",
            "exit:SpaceOrTab",
            "enter:ResourceTitle",
            "enter:ResourceTitleMarker",
            "exit:ResourceTitleMarker",
            "enter:ResourceTitleString",
            "enter:Data",
            "exit:Data",
            "exit:ResourceTitleString",
            "enter:ResourceTitleMarker",
            "exit:ResourceTitleMarker",
            "exit:ResourceTitle",
            "enter:ResourceMarker",
            "exit:ResourceMarker",
            "exit:Resource",
            "exit:Link",
        ]
        .join("\n"),
        "should support links w/ a destination and title"
    );

    let events = parse("[](x)");
    assert_eq!(
        count(&events, &Name::Link),
        1,
        "should support links w/ an empty label"
    );
    assert_eq!(
        count(&events, &Name::LabelText),
        0,
        "should not emit label text for an empty label"
    );

    let events = parse("[link]()");
    assert_eq!(
        count(&events, &Name::Link),
        1,
        "should support links w/o destination"
    );
    assert_eq!(
        count(&events, &Name::ResourceDestination),
        0,
        "should not emit a destination when there is none"
    );

    let events = parse("[a](b 'c')");
    assert_eq!(
        count(&events, &Name::ResourceTitle),
        1,
        "should support links w/ single quoted titles"
    );

    let events = parse("[a](b (c))");
    assert_eq!(
        count(&events, &Name::ResourceTitle),
        1,
        "should support links w/ parenthesized titles"
    );
    assert_eq!(
        extract("[a](b (c))", &events, &Name::ResourceTitleString),
        vec!["c"],
        "should place the title between the markers"
    );

    let value = "[a](b \"c\" )";
    let events = parse(value);
    assert_eq!(
        count(&events, &Name::Link),
        1,
        "should support whitespace after the title"
    );

    let value = "[a](b \"c\nd\")";
    let events = parse(value);
    assert_eq!(
        count(&events, &Name::Link),
        1,
        "should support line endings in titles"
    );
    assert_eq!(
        extract(value, &events, &Name::ResourceTitleString),
        vec!["c\nd"],
        "should keep the line ending in the title"
    );

    let value = "[a](b \"c\\\"d\")";
    let events = parse(value);
    assert_eq!(
        count(&events, &Name::CharacterEscape),
        1,
        "should support character escapes in titles"
    );
    assert_eq!(
        extract(value, &events, &Name::ResourceTitleString),
        vec!["c\\\"d"],
        "should keep the escape in the title"
    );

    let value = "[a](<b c>)";
    let events = parse(value);
    assert_eq!(
        count(&events, &Name::ResourceDestinationLiteral),
        1,
        "should support links w/ enclosed destinations"
    );
    assert_eq!(
        extract(value, &events, &Name::ResourceDestinationString),
        vec!["b c"],
        "should support spaces in enclosed destinations"
    );

    let value = "[a](<b)c>)";
    let events = parse(value);
    assert_eq!(
        extract(value, &events, &Name::ResourceDestinationString),
        vec!["b)c"],
        "should support closing parens in enclosed destinations"
    );

    let events = parse("[a](<>)");
    assert_eq!(
        count(&events, &Name::Link),
        1,
        "should support links w/ empty enclosed destinations"
    );

    let value = "[a](b(c)d)";
    let events = parse(value);
    assert_eq!(
        extract(value, &events, &Name::ResourceDestinationString),
        vec!["b(c)d"],
        "should support balanced parens in raw destinations"
    );

    let value = "[a](b\\)c)";
    let events = parse(value);
    assert_eq!(
        extract(value, &events, &Name::ResourceDestinationString),
        vec!["b\\)c"],
        "should support escaped parens in raw destinations"
    );

    assert_eq!(
        count(&parse("[a](b c"), &Name::Link),
        0,
        "should not support an unclosed resource"
    );

    assert_eq!(
        count(&parse("[a](b \"c\" d)"), &Name::Link),
        0,
        "should not support content after the title"
    );

    assert_eq!(
        count(&parse("[a](b\nc)"), &Name::Link),
        0,
        "should not support line endings in raw destinations"
    );

    assert_eq!(
        count(&parse("[a](<b\nc>)"), &Name::Link),
        0,
        "should not support line endings in enclosed destinations"
    );

    assert_eq!(
        count(&parse("[a](<b>c)"), &Name::Link),
        0,
        "should not support content after an enclosed destination"
    );

    // Whitespace between a destination and title is required.
    let value = "[a](b\"c\")";
    let events = parse(value);
    assert_eq!(
        count(&events, &Name::Link),
        1,
        "should support a quote in a raw destination"
    );
    assert_eq!(
        count(&events, &Name::ResourceTitle),
        0,
        "should not parse a title w/o whitespace before it"
    );
    assert_eq!(
        extract(value, &events, &Name::ResourceDestinationString),
        vec!["b\"c\""],
        "should make the quoted part destination, not title"
    );

    let value = format!("[a]({}b{})", "(".repeat(32), ")".repeat(32));
    let events = parse(&value);
    assert_eq!(
        count(&events, &Name::Link),
        1,
        "should support 32 nested parens in a destination"
    );
    assert_eq!(serialize(&value, &events), value, "should round-trip");

    let value = format!("[a]({}b{})", "(".repeat(33), ")".repeat(33));
    let events = parse(&value);
    assert_eq!(
        count(&events, &Name::Link),
        0,
        "should not support 33 nested parens in a destination"
    );
    assert_eq!(serialize(&value, &events), value, "should round-trip");

    // A failed resource still matches as a shortcut when defined.
    let value = "[foo](x";
    let events = parse_with(value, &["foo"]);
    assert_eq!(
        count(&events, &Name::Link),
        1,
        "should fall back to a shortcut when a resource fails"
    );
    assert_eq!(
        extract(value, &events, &Name::LabelText),
        vec!["foo"],
        "should keep the label when falling back"
    );
    assert_eq!(serialize(value, &events), value, "should round-trip");

    let value = "a [b](c) d [e](f) g";
    let events = parse(value);
    assert_eq!(count(&events, &Name::Link), 2, "should support two links");
    assert_eq!(
        extract(value, &events, &Name::LabelText),
        vec!["b", "e"],
        "should keep both labels"
    );
    assert_balanced(&events);
    assert_eq!(serialize(value, &events), value, "should round-trip");
}
