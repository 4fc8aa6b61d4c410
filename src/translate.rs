//! Turn one line of `cec-client` output into a front-end control.
//!
//! Only the release edge of a remote button produces a click; press lines are
//! ignored so held buttons do not flood the front-end with repeats. Matching is
//! plain case-sensitive substring search in a fixed order, first match wins.

use evdevil::event::Key;

use crate::keylist::{Control, KeyList};

const RELEASE_MARKER: &str = "released";

/// Tested top to bottom. "Fast forward" is capitalised as cec-client prints it.
const RULES: &[(&[&str], Control)] = &[
    (&["rewind", "yellow"], Control::Select),
    (&["Fast forward", "blue"], Control::Start),
    (&["left"], Control::Left),
    (&["right"], Control::Right),
    (&["up"], Control::Up),
    (&["down"], Control::Down),
    (&["select", "red"], Control::A),
    (&["exit", "green"], Control::B),
];

/// Control triggered by an adapter line, if any.
pub fn classify(line: &str) -> Option<Control> {
    if !line.contains(RELEASE_MARKER) {
        return None;
    }
    RULES
        .iter()
        .find(|(patterns, _)| patterns.iter().any(|p| line.contains(p)))
        .map(|(_, control)| *control)
}

/// Key to click for an adapter line, if any.
pub fn translate(line: &str, keys: &KeyList) -> Option<Key> {
    classify(line).map(|control| keys.key(control))
}
