//! Symbolic key names used in retroarch.cfg, mapped to Linux key codes.

use evdevil::event::Key;

/// Every key name a RetroArch keyboard binding may use that we know how to emit.
const RETROARCH_KEYS: &[(&str, Key)] = &[
    ("left", Key::KEY_LEFT),
    ("right", Key::KEY_RIGHT),
    ("up", Key::KEY_UP),
    ("down", Key::KEY_DOWN),
    ("enter", Key::KEY_ENTER),
    ("kp_enter", Key::KEY_KPENTER),
    ("tab", Key::KEY_TAB),
    ("insert", Key::KEY_INSERT),
    ("del", Key::KEY_DELETE),
    ("end", Key::KEY_END),
    ("home", Key::KEY_HOME),
    ("rshift", Key::KEY_RIGHTSHIFT),
    ("shift", Key::KEY_LEFTSHIFT),
    ("rctrl", Key::KEY_RIGHTCTRL),
    ("ctrl", Key::KEY_LEFTCTRL),
    ("ralt", Key::KEY_RIGHTALT),
    ("alt", Key::KEY_LEFTALT),
    ("space", Key::KEY_SPACE),
    ("escape", Key::KEY_ESC),
    ("kp_minus", Key::KEY_KPMINUS),
    ("kp_plus", Key::KEY_KPPLUS),
    ("f1", Key::KEY_F1),
    ("f2", Key::KEY_F2),
    ("f3", Key::KEY_F3),
    ("f4", Key::KEY_F4),
    ("f5", Key::KEY_F5),
    ("f6", Key::KEY_F6),
    ("f7", Key::KEY_F7),
    ("f8", Key::KEY_F8),
    ("f9", Key::KEY_F9),
    ("f10", Key::KEY_F10),
    ("f11", Key::KEY_F11),
    ("f12", Key::KEY_F12),
    ("num1", Key::KEY_1),
    ("num2", Key::KEY_2),
    ("num3", Key::KEY_3),
    ("num4", Key::KEY_4),
    ("num5", Key::KEY_5),
    ("num6", Key::KEY_6),
    ("num7", Key::KEY_7),
    ("num8", Key::KEY_8),
    ("num9", Key::KEY_9),
    ("num0", Key::KEY_0),
    ("pageup", Key::KEY_PAGEUP),
    ("pagedown", Key::KEY_PAGEDOWN),
    ("keypad1", Key::KEY_KP1),
    ("keypad2", Key::KEY_KP2),
    ("keypad3", Key::KEY_KP3),
    ("keypad4", Key::KEY_KP4),
    ("keypad5", Key::KEY_KP5),
    ("keypad6", Key::KEY_KP6),
    ("keypad7", Key::KEY_KP7),
    ("keypad8", Key::KEY_KP8),
    ("keypad9", Key::KEY_KP9),
    ("keypad0", Key::KEY_KP0),
    ("period", Key::KEY_DOT),
    ("capslock", Key::KEY_CAPSLOCK),
    ("numlock", Key::KEY_NUMLOCK),
    ("backspace", Key::KEY_BACKSPACE),
    ("pause", Key::KEY_PAUSE),
    ("scrolllock", Key::KEY_SCROLLLOCK),
    ("backquote", Key::KEY_GRAVE),
    ("comma", Key::KEY_COMMA),
    ("minus", Key::KEY_MINUS),
    ("slash", Key::KEY_SLASH),
    ("semicolon", Key::KEY_SEMICOLON),
    ("equals", Key::KEY_EQUAL),
    ("backslash", Key::KEY_BACKSLASH),
    ("kp_period", Key::KEY_KPDOT),
    ("kp_equals", Key::KEY_KPEQUAL),
    ("a", Key::KEY_A),
    ("b", Key::KEY_B),
    ("c", Key::KEY_C),
    ("d", Key::KEY_D),
    ("e", Key::KEY_E),
    ("f", Key::KEY_F),
    ("g", Key::KEY_G),
    ("h", Key::KEY_H),
    ("i", Key::KEY_I),
    ("j", Key::KEY_J),
    ("k", Key::KEY_K),
    ("l", Key::KEY_L),
    ("m", Key::KEY_M),
    ("n", Key::KEY_N),
    ("o", Key::KEY_O),
    ("p", Key::KEY_P),
    ("q", Key::KEY_Q),
    ("r", Key::KEY_R),
    ("s", Key::KEY_S),
    ("t", Key::KEY_T),
    ("u", Key::KEY_U),
    ("v", Key::KEY_V),
    ("w", Key::KEY_W),
    ("x", Key::KEY_X),
    ("y", Key::KEY_Y),
    ("z", Key::KEY_Z),
];

/// Read-only lookup from symbolic key name to key code.
#[derive(Debug, Clone, Copy)]
pub struct KeyCatalog {
    entries: &'static [(&'static str, Key)],
}

impl KeyCatalog {
    /// The catalog of names RetroArch writes into `input_player1_*` bindings.
    pub fn retroarch() -> Self {
        Self { entries: RETROARCH_KEYS }
    }

    pub fn lookup(&self, name: &str) -> Option<Key> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, key)| *key)
    }

    /// All supported names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_names() {
        let catalog = KeyCatalog::retroarch();
        assert_eq!(catalog.lookup("left"), Some(Key::KEY_LEFT));
        assert_eq!(catalog.lookup("escape"), Some(Key::KEY_ESC));
        assert_eq!(catalog.lookup("num0"), Some(Key::KEY_0));
        assert_eq!(catalog.lookup("period"), Some(Key::KEY_DOT));
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = KeyCatalog::retroarch();
        assert_eq!(catalog.lookup("Left"), None);
        assert_eq!(catalog.lookup(" left"), None);
        assert_eq!(catalog.lookup("nul"), None);
    }

    #[test]
    fn test_every_name_resolves() {
        let catalog = KeyCatalog::retroarch();
        for name in catalog.names() {
            assert!(catalog.lookup(name).is_some(), "{} did not resolve", name);
        }
        assert_eq!(catalog.names().len(), catalog.len());
    }

    #[test]
    fn test_names_unique_and_sorted() {
        let names = KeyCatalog::retroarch().names();
        for pair in names.windows(2) {
            assert!(pair[0] < pair[1], "{} / {}", pair[0], pair[1]);
        }
    }
}
