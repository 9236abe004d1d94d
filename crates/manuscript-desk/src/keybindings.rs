//! Keybinding system
//!
//! Maps keyboard input to commands.
//!
//! - `KeyBinding`: a textual key pattern plus the command it triggers
//! - `Keymap`: the parsed bindings with matching logic
//!
//! Patterns are textual ("ctrl+r", "shift+tab", "Q") so they stay readable
//! in the help panel and could be loaded from a file later.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::command_id::CommandId;

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key - e.g., "ctrl+r", "enter", "Q"
    pub keys: String,
    /// Display hint for the UI - e.g., "Ctrl+R"
    pub hint: String,
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Parse a textual key pattern
///
/// Supported formats:
/// - Single char: "q", "G" (case-sensitive; uppercase implies SHIFT)
/// - With modifiers: "ctrl+r", "shift+tab"
/// - Special keys: "tab", "enter", "esc", "backspace", "up", "down", "left", "right", "space"
pub fn parse_key_pattern(pattern: &str) -> Option<KeyPattern> {
    let pattern = pattern.trim();

    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(KeyPattern {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
        key_part = rest;
    }

    let code = parse_key_code(key_part)?;
    Some(KeyPattern { code, modifiers })
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" => Some(KeyCode::PageUp),
        "pagedown" => Some(KeyCode::PageDown),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),
        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),
        _ => None,
    }
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, KeyPattern)>,
}

impl Keymap {
    /// Create a keymap; bindings with unparseable patterns are dropped
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring invalid key pattern: {:?}", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// All commands bound to this key, in binding order
    pub fn match_key(&self, key: &KeyEvent) -> Vec<CommandId> {
        self.bindings
            .iter()
            .filter(|(_, pattern)| matches(pattern, key))
            .map(|(binding, _)| binding.command)
            .collect()
    }

    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(binding, _)| binding)
    }

    /// All hints for a command joined with "/" (e.g. "j/↓"), deduplicated
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut hints: Vec<&str> = Vec::new();
        for binding in self.bindings().filter(|b| b.command == command) {
            if !hints.contains(&binding.hint.as_str()) {
                hints.push(&binding.hint);
            }
        }
        (!hints.is_empty()).then(|| hints.join("/"))
    }
}

fn matches(pattern: &KeyPattern, key: &KeyEvent) -> bool {
    if pattern.code != key.code {
        return false;
    }
    match key.code {
        // Terminals disagree on whether SHIFT accompanies uppercase/symbol chars,
        // so only CONTROL and ALT are significant for characters.
        KeyCode::Char(_) => {
            let significant = KeyModifiers::CONTROL | KeyModifiers::ALT;
            (key.modifiers & significant) == (pattern.modifiers & significant)
        }
        _ => key.modifiers == pattern.modifiers,
    }
}
