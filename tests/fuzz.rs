//! Inputs that once looked scary, or still do.
//!
//! Every input must tokenize without panicking, produce balanced events with
//! no internal label events left over, and round-trip byte-for-byte.

#[allow(dead_code)]
mod shared;

use pretty_assertions::assert_eq;
use shared::{assert_balanced, assert_no_internal_names, parse_with, serialize};

#[test]
fn fuzz() {
    let cases = [
        "",
        "[",
        "]",
        "[]",
        "![",
        "!",
        "![]",
        "[](",
        "![](",
        "[a](b",
        "[a](b ",
        "[a](b \"",
        "[a](b \"c",
        "[a](<",
        "[a](<b",
        "[a](<b>",
        "[a][",
        "[a][b",
        "[a][]",
        "[[[[[[",
        "]]]]]]",
        "[[a]](b)",
        "[a](())",
        "[a](overwritten)))",
        "\\",
        "\\[",
        "[\\]]",
        "[a](b\u{0}c)",
        "[a\r\nb](c)",
        "[a](b)\r\n[c](d)",
        "[a](\tb\t)",
        "[a](b \"c\nd\")",
        "[a](b\n\n\"c\")",
        "[x][a\n\nb]",
        "![![![a](1)](2)](3)",
        "[![a](1)](2)",
        "a ![b [c](d) e](f) g",
        "[a [b [c](d) e](f) g](h)",
    ];

    for value in cases {
        let events = parse_with(value, &["a", "b", "x"]);
        assert_balanced(&events);
        assert_no_internal_names(&events);
        assert_eq!(serialize(value, &events), value, "should round-trip: {:?}", value);
    }
}
