//! Read player one keyboard bindings out of a RetroArch config file.

use std::path::Path;

/// Lines carrying a player one binding contain this.
const PLAYER1_MARKER: &str = "input_player1_";
/// Commented lines are skipped wherever the marker sits.
const COMMENT_MARKER: &str = "#";
/// Matches the player one marker but holds a mode number, not a key.
const ANALOG_DPAD_MODE: &str = "_analog_dpad_mode";

/// One `input_player1_<control> = "<symbol>"` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Control name with the `input_player1_` prefix removed (e.g. `left`).
    pub control: String,
    /// Symbolic key name (e.g. `enter`).
    pub symbol: String,
}

/// Load bindings from `path` in file order.
pub fn load(path: &Path) -> std::io::Result<Vec<Binding>> {
    let content = std::fs::read_to_string(path)?;
    let bindings = parse(&content);
    log::debug!("Read {} player one bindings from {}", bindings.len(), path.display());
    Ok(bindings)
}

/// Extract bindings from config text in file order.
pub fn parse(content: &str) -> Vec<Binding> {
    content
        .lines()
        .filter(|line| is_binding_line(line))
        .filter_map(parse_line)
        .collect()
}

fn is_binding_line(line: &str) -> bool {
    line.contains(PLAYER1_MARKER)
        && !line.contains(COMMENT_MARKER)
        && !line.contains(ANALOG_DPAD_MODE)
}

fn parse_line(line: &str) -> Option<Binding> {
    let mut parts = line.split('=');
    let (Some(lhs), Some(rhs)) = (parts.next(), parts.next()) else {
        log::warn!("Ignoring binding line without a value: {}", line.trim());
        return None;
    };

    let lhs = lhs.trim();
    let control = match lhs.find(PLAYER1_MARKER) {
        Some(at) => &lhs[at + PLAYER1_MARKER.len()..],
        None => lhs,
    };

    let value = rhs.trim();
    let symbol = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);

    Some(Binding {
        control: control.to_string(),
        symbol: symbol.to_string(),
    })
}
