// A single named clip and its display name
use std::borrow::Cow;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AudioAsset {
    key: Cow<'static, str>,
    #[serde(skip)]
    payload: Cow<'static, str>,
    display_name: String,
    #[serde(skip)]
    search_key: String,
}

impl AudioAsset {
    pub(crate) fn new(key: Cow<'static, str>, payload: Cow<'static, str>) -> Self {
        let display_name = display_name(&key);
        let search_key = display_name.to_lowercase();
        Self {
            key,
            payload,
            display_name,
            search_key,
        }
    }

    /// Raw catalog key, e.g. `Rocket_shot-01.wav`
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Transport-encoded clip bytes
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Human-readable name, e.g. `Rocket Shot 01`
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Lowercased display name, used for case-insensitive matching
    pub(crate) fn search_key(&self) -> &str {
        &self.search_key
    }
}

/// Normalize a catalog key into a display name.
///
/// Drops the extension (everything from the last `.`), turns `_`, `-` and
/// any remaining `.` into spaces, then title-cases each word. Applying it to
/// its own output returns the same string.
pub fn display_name(key: &str) -> String {
    let stem = match key.rfind('.') {
        Some(idx) => &key[..idx],
        None => key,
    };

    let mut out = String::with_capacity(stem.len());
    let mut prev_alpha = false;
    for c in stem.chars() {
        let c = match c {
            '_' | '-' | '.' => ' ',
            c => c,
        };
        if c.is_alphabetic() {
            out.push(if prev_alpha { single_lower(c) } else { single_upper(c) });
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

// Case mappings that expand to several chars (e.g. 'ß' -> "SS") would break
// idempotence, so those chars are left alone.
fn single_upper(c: char) -> char {
    let mut it = c.to_uppercase();
    match (it.next(), it.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn single_lower(c: char) -> char {
    let mut it = c.to_lowercase();
    match (it.next(), it.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
