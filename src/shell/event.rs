// Copyright 2025-present Capitalyx Wiki Contributors
// SPDX-License-Identifier: Apache-2.0

//! Keyboard mapping: DOM key presses to shell events.
//!
//! The host forwards every `keydown` as a [`KeyPress`] built from
//! `KeyboardEvent.key`, `ctrlKey` and `metaKey`. [`to_shell_event`] decides
//! whether the shell cares; when it returns `Some`, the host should call
//! `preventDefault()` so the browser does not also act on the key.
//!
//! | Key(s)                    | Open? | Event                  |
//! |---------------------------|-------|------------------------|
//! | `Ctrl+K`, `Cmd+K`         | any   | `Open`                 |
//! | `Escape`                  | yes   | `Close`                |
//! | `ArrowDown`               | yes   | `Move(Down)`           |
//! | `ArrowUp`                 | yes   | `Move(Up)`             |
//! | `Enter`                   | yes   | `Select`               |
//!
//! Everything else is left to the text input, which reports its value
//! through [`ShellEvent::Input`](super::ShellEvent::Input).

use super::{Direction, ShellEvent};

/// A raw key press as seen by the browser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPress {
    /// `KeyboardEvent.key`, e.g. `"k"`, `"Escape"`, `"ArrowDown"`.
    pub key: String,
    pub ctrl: bool,
    /// Cmd on macOS.
    pub meta: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: true,
            meta: false,
        }
    }

    pub fn with_meta(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            meta: true,
        }
    }

    fn is_shortcut(&self, letter: char) -> bool {
        if !(self.ctrl || self.meta) {
            return false;
        }
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_lowercase().eq(letter.to_lowercase()),
            _ => false,
        }
    }
}

/// Map a key press to a shell event, given whether the shell is open.
pub fn to_shell_event(key: &KeyPress, open: bool, shortcut: char) -> Option<ShellEvent> {
    if key.is_shortcut(shortcut) {
        return Some(ShellEvent::Open);
    }
    if !open {
        return None;
    }
    match key.key.as_str() {
        "Escape" | "Esc" => Some(ShellEvent::Close),
        "ArrowDown" | "Down" => Some(ShellEvent::Move(Direction::Down)),
        "ArrowUp" | "Up" => Some(ShellEvent::Move(Direction::Up)),
        "Enter" => Some(ShellEvent::Select),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
