//! Shared helpers for the integration tests.

use mediamark::{Event, Kind, Name, ParseOptions};

/// Initialize logging once per test binary.
pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse with default options.
pub fn parse(value: &str) -> Vec<Event> {
    setup();
    mediamark::to_events(value)
}

/// Parse with the given definition identifiers.
pub fn parse_with(value: &str, definitions: &[&str]) -> Vec<Event> {
    setup();
    let options = ParseOptions {
        definitions: definitions.iter().map(|d| (*d).to_string()).collect(),
        ..ParseOptions::default()
    };
    mediamark::to_events_with_options(value, &options)
}

/// Turn events into a compact outline, one `kind:name` per line.
pub fn outline(events: &[Event]) -> String {
    let mut lines = Vec::with_capacity(events.len());
    let mut index = 0;
    while index < events.len() {
        let event = &events[index];
        let kind = if event.kind == Kind::Enter {
            "enter"
        } else {
            "exit"
        };
        lines.push(format!("{}:{:?}", kind, event.name));
        index += 1;
    }
    lines.join("\n")
}

/// Count enter events with the given name.
pub fn count(events: &[Event], name: &Name) -> usize {
    events
        .iter()
        .filter(|event| event.kind == Kind::Enter && &event.name == name)
        .count()
}

/// Slice the input covered by each event with the given name.
pub fn extract(value: &str, events: &[Event], name: &Name) -> Vec<String> {
    let mut result = vec![];
    let mut index = 0;

    while index < events.len() {
        let event = &events[index];

        if event.kind == Kind::Enter && &event.name == name {
            // Find the matching exit.
            let mut balance = 0;
            let mut end = index;
            loop {
                if &events[end].name == name {
                    if events[end].kind == Kind::Enter {
                        balance += 1;
                    } else {
                        balance -= 1;
                        if balance == 0 {
                            break;
                        }
                    }
                }
                end += 1;
            }
            result.push(value[event.point.index..events[end].point.index].to_string());
        }

        index += 1;
    }

    result
}

/// Concatenate the input slices of all leaf tokens, in order.
///
/// For any input, this must reproduce the input exactly.
pub fn serialize(value: &str, events: &[Event]) -> String {
    let mut result = String::new();
    let mut index = 0;

    while index < events.len() {
        let event = &events[index];

        if event.kind == Kind::Enter
            && matches!(
                event.name,
                Name::CharacterEscapeMarker
                    | Name::CharacterEscapeValue
                    | Name::Data
                    | Name::LabelImageMarker
                    | Name::LabelMarker
                    | Name::LineEnding
                    | Name::ReferenceMarker
                    | Name::ResourceDestinationLiteralMarker
                    | Name::ResourceMarker
                    | Name::ResourceTitleMarker
                    | Name::SpaceOrTab
            )
        {
            result.push_str(&value[event.point.index..events[index + 1].point.index]);
        }

        index += 1;
    }

    result
}

/// Check that every enter has a matching exit, properly nested.
pub fn assert_balanced(events: &[Event]) {
    let mut stack: Vec<Name> = vec![];
    for event in events {
        if event.kind == Kind::Enter {
            stack.push(event.name.clone());
        } else {
            assert_eq!(
                stack.pop().as_ref(),
                Some(&event.name),
                "expected balanced events"
            );
        }
    }
    assert!(stack.is_empty(), "expected every event closed");
}

/// Check that internal-only labels do not escape into the final events.
pub fn assert_no_internal_names(events: &[Event]) {
    for event in events {
        assert!(
            !matches!(
                event.name,
                Name::LabelImage | Name::LabelLink | Name::LabelEnd
            ),
            "expected no label start or label end events, found `{:?}`",
            event.name
        );
    }
}

/// The deepest nesting of events with the given name.
pub fn max_depth(events: &[Event], name: &Name) -> usize {
    let mut depth = 0_usize;
    let mut max = 0;
    for event in events {
        if &event.name == name {
            if event.kind == Kind::Enter {
                depth += 1;
                if depth > max {
                    max = depth;
                }
            } else {
                depth -= 1;
            }
        }
    }
    max
}
