//! Move across lists of events.

use crate::event::{Event, Name};

/// Skip from `index` backwards to the nearest event with one of `names`.
pub fn to_back(events: &[Event], mut index: usize, names: &[Name]) -> usize {
    while index < events.len() {
        let current = &events[index].name;

        if names.contains(current) {
            break;
        }

        index -= 1;
    }

    index
}
