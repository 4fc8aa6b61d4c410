//! Read adapter lines, translate, check suppression, click.

use std::fmt;
use std::io::BufRead;

use evdevil::event::Key;

use crate::keylist::KeyList;
use crate::suppress::Suppression;
use crate::translate;

/// Something that can press and release a key.
pub trait KeySink {
    fn click(&mut self, key: Key) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// The adapter stopped producing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterClosed;

impl fmt::Display for AdapterClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CEC adapter closed its output")
    }
}

impl std::error::Error for AdapterClosed {}

/// Process adapter lines in order until the stream ends or fails.
///
/// Never returns `Ok`: end of stream is reported as [`AdapterClosed`].
pub fn run(
    lines: &mut impl BufRead,
    keys: &KeyList,
    sink: &mut impl KeySink,
    guard: &impl Suppression,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut buf = Vec::with_capacity(256);
    let mut clicks: u64 = 0;

    loop {
        buf.clear();
        if lines.read_until(b'\n', &mut buf)? == 0 {
            return Err(AdapterClosed.into());
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end();

        let Some(key) = translate::translate(line, keys) else {
            continue;
        };
        log::debug!("'{}' -> {:?}", line, key);

        if guard.is_suppressed() {
            log::debug!("Dropped {:?}", key);
            continue;
        }

        sink.click(key)?;
        clicks += 1;
        log::info!("Clicked {:?} ({} total)", key, clicks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::Cursor;

    #[derive(Default)]
    struct Recorder {
        clicks: Vec<Key>,
    }

    impl KeySink for Recorder {
        fn click(&mut self, key: Key) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            self.clicks.push(key);
            Ok(())
        }
    }

    struct Fixed {
        suppressed: bool,
        checks: Cell<usize>,
    }

    impl Fixed {
        fn new(suppressed: bool) -> Self {
            Self { suppressed, checks: Cell::new(0) }
        }
    }

    impl Suppression for Fixed {
        fn is_suppressed(&self) -> bool {
            self.checks.set(self.checks.get() + 1);
            self.suppressed
        }
    }

    fn placeholders() -> KeyList {
        KeyList::from_codes(vec![
            Key::KEY_A, Key::KEY_B, Key::KEY_C, Key::KEY_D, Key::KEY_E, Key::KEY_F,
            Key::KEY_G, Key::KEY_H, Key::KEY_I, Key::KEY_J, Key::KEY_K, Key::KEY_L,
        ])
        .unwrap()
    }

    const SESSION: &str = "NOTICE: connection opened\n\
                           key pressed: left (3)\n\
                           key released: left (3)\n\
                           key pressed: yellow (74)\n\
                           key released: yellow (74)\n\
                           TRAFFIC: >> 01:44:41\n\
                           key released: green (73)\n";

    #[test]
    fn test_clicks_in_adapter_order() {
        let mut recorder = Recorder::default();
        let guard = Fixed::new(false);
        let err = run(&mut Cursor::new(SESSION), &placeholders(), &mut recorder, &guard).unwrap_err();

        assert!(err.downcast_ref::<AdapterClosed>().is_some());
        assert_eq!(recorder.clicks, vec![Key::KEY_I, Key::KEY_F, Key::KEY_B]);
    }

    #[test]
    fn test_suppressed_never_clicks() {
        let mut recorder = Recorder::default();
        let guard = Fixed::new(true);
        let _ = run(&mut Cursor::new(SESSION), &placeholders(), &mut recorder, &guard);

        assert!(recorder.clicks.is_empty());
        assert_eq!(guard.checks.get(), 3);
    }

    #[test]
    fn test_guard_only_consulted_for_candidates() {
        let mut recorder = Recorder::default();
        let guard = Fixed::new(false);
        let input = "key pressed: up\nkey released nothing-matches\n";
        let _ = run(&mut Cursor::new(input), &placeholders(), &mut recorder, &guard);

        assert_eq!(guard.checks.get(), 0);
        assert!(recorder.clicks.is_empty());
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut recorder = Recorder::default();
        let guard = Fixed::new(false);
        let _ = run(&mut Cursor::new("key released: down"), &placeholders(), &mut recorder, &guard);

        assert_eq!(recorder.clicks, vec![Key::KEY_L]);
    }

    #[test]
    fn test_invalid_utf8_tolerated() {
        let mut recorder = Recorder::default();
        let guard = Fixed::new(false);
        let input: &[u8] = b"\xff\xfe garbage\nkey released: up (1)\n";
        let _ = run(&mut Cursor::new(input), &placeholders(), &mut recorder, &guard);

        assert_eq!(recorder.clicks, vec![Key::KEY_K]);
    }

    #[test]
    fn test_empty_stream_is_closed() {
        let mut recorder = Recorder::default();
        let guard = Fixed::new(false);
        let err = run(&mut Cursor::new(""), &placeholders(), &mut recorder, &guard).unwrap_err();
        assert_eq!(err.to_string(), "CEC adapter closed its output");
    }
}
