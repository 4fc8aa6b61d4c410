//! Resolve bindings to key codes and name the slots the translator reads.

use std::fmt;

use evdevil::event::Key;

use crate::bindings::Binding;
use crate::keymap::KeyCatalog;

/// Bindings needed so that every [`Control`] slot exists.
pub const MIN_BINDINGS: usize = 12;

/// Front-end controls a remote button can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    A,
    B,
    Start,
    Select,
    Left,
    Right,
    Up,
    Down,
}

impl Control {
    pub const ALL: [Control; 8] = [
        Control::A,
        Control::B,
        Control::Start,
        Control::Select,
        Control::Left,
        Control::Right,
        Control::Up,
        Control::Down,
    ];

    /// Position of this control in the RetroArch binding order
    /// (a, b, y, x, start, select, l, r, left, right, up, down, ...).
    pub fn slot(self) -> usize {
        match self {
            Control::A => 0,
            Control::B => 1,
            Control::Start => 4,
            Control::Select => 5,
            Control::Left => 8,
            Control::Right => 9,
            Control::Up => 10,
            Control::Down => 11,
        }
    }

    /// Name RetroArch uses after `input_player1_`.
    pub fn config_name(self) -> &'static str {
        match self {
            Control::A => "a",
            Control::B => "b",
            Control::Start => "start",
            Control::Select => "select",
            Control::Left => "left",
            Control::Right => "right",
            Control::Up => "up",
            Control::Down => "down",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.config_name())
    }
}

/// Resolved key codes, in binding order, with the translated controls pulled out.
#[derive(Debug, Clone)]
pub struct KeyList {
    codes: Vec<Key>,
    controls: [Key; 8],
}

impl KeyList {
    /// Checks that every control slot is present.
    pub fn from_codes(codes: Vec<Key>) -> Result<Self, ShapeError> {
        if codes.len() < MIN_BINDINGS {
            return Err(ShapeError {
                found: codes.len(),
                required: MIN_BINDINGS,
            });
        }
        let controls = Control::ALL.map(|c| codes[c.slot()]);
        Ok(Self { codes, controls })
    }

    pub fn key(&self, control: Control) -> Key {
        self.controls[control as usize]
    }

    pub fn codes(&self) -> &[Key] {
        &self.codes
    }

    /// Distinct key codes for the virtual device, first occurrence order.
    pub fn capabilities(&self) -> Vec<Key> {
        let mut keys = Vec::with_capacity(self.codes.len());
        for key in &self.codes {
            if !keys.contains(key) {
                keys.push(*key);
            }
        }
        keys
    }
}

/// Binding names the catalog does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedKeys {
    pub names: Vec<String>,
}

impl fmt::Display for UnsupportedKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The {} keys in your retroarch.cfg are unsupported",
            self.names.join(", ")
        )
    }
}

impl std::error::Error for UnsupportedKeys {}

/// Too few bindings to cover every control slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeError {
    pub found: usize,
    pub required: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found {} player one bindings, need at least {} (a, b, y, x, start, select, l, r, left, right, up, down)",
            self.found, self.required
        )
    }
}

impl std::error::Error for ShapeError {}

#[derive(Debug)]
pub enum BuildError {
    Unsupported(UnsupportedKeys),
    Shape(ShapeError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Unsupported(e) => e.fmt(f),
            BuildError::Shape(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for BuildError {}

/// Map every binding through the catalog, collecting all unknown names in one pass.
pub fn build(bindings: &[Binding], catalog: &KeyCatalog) -> Result<KeyList, BuildError> {
    let mut codes = Vec::with_capacity(bindings.len());
    let mut unsupported = Vec::new();

    for binding in bindings {
        match catalog.lookup(&binding.symbol) {
            Some(key) => codes.push(key),
            None => unsupported.push(binding.symbol.clone()),
        }
    }

    if !unsupported.is_empty() {
        return Err(BuildError::Unsupported(UnsupportedKeys { names: unsupported }));
    }

    let keys = KeyList::from_codes(codes).map_err(BuildError::Shape)?;
    check_slots(bindings);
    Ok(keys)
}

/// Slots are positional; warn when the config lists controls in another order.
fn check_slots(bindings: &[Binding]) {
    for control in Control::ALL {
        let Some(binding) = bindings.get(control.slot()) else {
            continue;
        };
        if binding.control != control.config_name() {
            log::warn!(
                "Binding #{} is input_player1_{}, expected input_player1_{}; remote {} will send '{}'",
                control.slot(),
                binding.control,
                control.config_name(),
                control,
                binding.symbol
            );
        }
    }
}
