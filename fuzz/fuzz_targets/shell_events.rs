// Copyright 2025-present Capitalyx Wiki Contributors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the search shell.
//!
//! Random event sequences must keep the state, the result count and the
//! selection consistent, and every navigation must point at a shown result.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::rc::Rc;
use wikisearch::{
    Category, Direction, Effect, Filter, KeyPress, SearchConfig, SearchIndex, SearchShell,
    ShellEvent, ShellState,
};

#[derive(Debug, Arbitrary)]
enum Action {
    Open,
    Close,
    Clear,
    Input(String),
    Filter(u8),
    Up,
    Down,
    Enter,
    Choose(u8),
    Key { key: String, ctrl: bool, meta: bool },
}

fuzz_target!(|actions: Vec<Action>| {
    let index = Rc::new(SearchIndex::builtin());
    let mut shell = SearchShell::new(index, SearchConfig::default());

    for action in actions.into_iter().take(64) {
        let effect = match action {
            Action::Open => Some(shell.handle(ShellEvent::Open)),
            Action::Close => Some(shell.handle(ShellEvent::Close)),
            Action::Clear => Some(shell.handle(ShellEvent::Clear)),
            Action::Input(text) => Some(shell.handle(ShellEvent::Input(text))),
            Action::Filter(n) => {
                let filter = match n as usize % (Category::ALL.len() + 1) {
                    0 => Filter::All,
                    i => Filter::Only(Category::ALL[i - 1]),
                };
                Some(shell.handle(ShellEvent::SetFilter(filter)))
            }
            Action::Up => Some(shell.handle(ShellEvent::Move(Direction::Up))),
            Action::Down => Some(shell.handle(ShellEvent::Move(Direction::Down))),
            Action::Enter => Some(shell.handle(ShellEvent::Select)),
            Action::Choose(i) => Some(shell.handle(ShellEvent::Choose(i as usize))),
            Action::Key { key, ctrl, meta } => shell.handle_key(&KeyPress { key, ctrl, meta }),
        };

        let count = shell.result_count();
        match shell.state() {
            ShellState::OpenResults => assert!(count > 0),
            _ => assert_eq!(count, 0),
        }
        if let Some(selected) = shell.selected() {
            assert!(selected < count);
        }
        if let Some(Effect::Navigate(url)) = effect {
            assert!(shell.results().iter().any(|hit| hit.record.url == url));
        }

        // Rendering must never fail either
        let _ = shell.view().to_html();
    }
});
