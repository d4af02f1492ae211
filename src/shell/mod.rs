// Copyright 2025-present Capitalyx Wiki Contributors
// SPDX-License-Identifier: Apache-2.0

//! The search shell: the modal's state machine, without a DOM.
//!
//! The host page owns one [`SearchShell`], feeds it [`ShellEvent`]s (or raw
//! [`KeyPress`]es) and applies the [`Effect`] each call returns: re-render
//! the results panel, focus the input, or navigate to a URL.
//!
//! # States
//!
//! ```text
//!                 Open
//!   Closed ────────────────► OpenEmpty ◄──────────────┐
//!     ▲                        │   ▲                   │ Clear / Input(<2 chars)
//!     │ Close / Escape         │   │                   │
//!     │ (from any open state)  ▼   │                   │
//!     └──────────── OpenResults ◄─►OpenNoResults ──────┘
//!                      Input(≥2 chars), SetFilter
//! ```
//!
//! - `Move(Up|Down)` only acts in `OpenResults` and wraps in both directions.
//! - `Select` navigates to the selected result, if any.
//! - Every search re-run resets the selection.
//! - Closing clears the query; the category filter survives.

pub mod event;

pub use event::{to_shell_event, KeyPress};

use crate::config::SearchConfig;
use crate::index::SearchIndex;
use crate::render::{render_results, ResultsView};
use crate::search::{is_searchable, normalize_query};
use crate::types::{Filter, Hit};
use std::fmt;
use std::rc::Rc;

/// Where the modal is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellState {
    Closed,
    /// Open, nothing (or fewer than two characters) typed.
    OpenEmpty,
    OpenResults,
    OpenNoResults,
}

impl ShellState {
    pub fn is_open(self) -> bool {
        !matches!(self, ShellState::Closed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShellState::Closed => "closed",
            ShellState::OpenEmpty => "openEmpty",
            ShellState::OpenResults => "openResults",
            ShellState::OpenNoResults => "openNoResults",
        }
    }
}

impl fmt::Display for ShellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arrow-key direction through the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Something the user did to the search modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// Ctrl/Cmd+K or the search button.
    Open,
    /// Close button, backdrop click or Escape.
    Close,
    /// The input's current value after a keystroke.
    Input(String),
    /// The clear button.
    Clear,
    /// A category filter button.
    SetFilter(Filter),
    Move(Direction),
    /// Enter.
    Select,
    /// Click on the result row with this index.
    Choose(usize),
}

/// What the host must do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Redraw the results panel from [`SearchShell::view`].
    Render,
    /// Redraw and put the caret in the search input.
    FocusInput,
    /// Full page navigation to this URL.
    Navigate(String),
}

/// One search modal instance.
#[derive(Debug, Clone)]
pub struct SearchShell {
    index: Rc<SearchIndex>,
    config: SearchConfig,
    state: ShellState,
    filter: Filter,
    query_text: String,
    /// Index positions of the current hits, in rank order, with their scores.
    results: Vec<(usize, u32)>,
    selected: Option<usize>,
}

impl SearchShell {
    pub fn new(index: Rc<SearchIndex>, config: SearchConfig) -> Self {
        Self {
            index,
            config,
            state: ShellState::Closed,
            filter: Filter::All,
            query_text: String::new(),
            results: Vec::new(),
            selected: None,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Current hits in rank order.
    pub fn results(&self) -> Vec<Hit<'_>> {
        self.results
            .iter()
            .filter_map(|&(position, score)| {
                self.index.get(position).map(|record| Hit {
                    position,
                    score,
                    record,
                })
            })
            .collect()
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// The results panel for the current state.
    pub fn view(&self) -> ResultsView {
        if !self.state.is_open() {
            return ResultsView::Empty;
        }
        let query = normalize_query(&self.query_text);
        render_results(&self.results(), &query, self.config.locale, self.selected)
    }

    /// Apply one event.
    pub fn handle(&mut self, event: ShellEvent) -> Effect {
        let before = self.state;
        let effect = match event {
            ShellEvent::Open => self.open(),
            ShellEvent::Close => self.close(),
            ShellEvent::Input(text) => self.input(text),
            ShellEvent::Clear => self.clear(),
            ShellEvent::SetFilter(filter) => self.set_filter(filter),
            ShellEvent::Move(direction) => self.move_selection(direction),
            ShellEvent::Select => self.select(),
            ShellEvent::Choose(row) => self.choose(row),
        };
        if before != self.state {
            tracing::debug!(from = %before, to = %self.state, "search shell transition");
        }
        effect
    }

    /// Map a raw key press and apply it. Returns `None` when the key is not
    /// for the shell (the host should let the browser handle it).
    pub fn handle_key(&mut self, key: &KeyPress) -> Option<Effect> {
        let event = to_shell_event(key, self.state.is_open(), self.config.shortcut)?;
        Some(self.handle(event))
    }

    fn open(&mut self) -> Effect {
        if self.state == ShellState::Closed {
            self.state = ShellState::OpenEmpty;
        }
        Effect::FocusInput
    }

    fn close(&mut self) -> Effect {
        if !self.state.is_open() {
            return Effect::None;
        }
        self.reset_query();
        self.state = ShellState::Closed;
        Effect::Render
    }

    fn input(&mut self, text: String) -> Effect {
        if !self.state.is_open() {
            tracing::debug!("input ignored while search is closed");
            return Effect::None;
        }
        self.query_text = text;
        self.rerun()
    }

    fn clear(&mut self) -> Effect {
        if !self.state.is_open() {
            return Effect::None;
        }
        self.reset_query();
        self.state = ShellState::OpenEmpty;
        Effect::FocusInput
    }

    fn set_filter(&mut self, filter: Filter) -> Effect {
        self.filter = filter;
        if !self.state.is_open() {
            return Effect::None;
        }
        self.rerun()
    }

    fn move_selection(&mut self, direction: Direction) -> Effect {
        if self.state != ShellState::OpenResults || self.results.is_empty() {
            return Effect::None;
        }
        let count = self.results.len();
        let next = match (self.selected, direction) {
            (None, Direction::Down) => 0,
            (None, Direction::Up) => count - 1,
            (Some(i), Direction::Down) => (i + 1) % count,
            (Some(i), Direction::Up) => (i + count - 1) % count,
        };
        self.selected = Some(next);
        Effect::Render
    }

    fn select(&mut self) -> Effect {
        match self.selected {
            Some(row) if self.state == ShellState::OpenResults => self.navigate_to(row),
            _ => Effect::None,
        }
    }

    fn choose(&mut self, row: usize) -> Effect {
        if self.state != ShellState::OpenResults {
            return Effect::None;
        }
        self.navigate_to(row)
    }

    fn navigate_to(&mut self, row: usize) -> Effect {
        let Some(&(position, _)) = self.results.get(row) else {
            return Effect::None;
        };
        match self.index.get(position) {
            Some(record) => {
                self.selected = Some(row);
                tracing::debug!(url = %record.url, "search result chosen");
                Effect::Navigate(record.url.clone())
            }
            None => Effect::None,
        }
    }

    fn rerun(&mut self) -> Effect {
        let hits = self.index.search_scored(
            &self.query_text,
            self.filter,
            self.config.search_options(),
        );
        self.results = hits.iter().map(|hit| (hit.position, hit.score)).collect();
        self.selected = None;

        self.state = if !is_searchable(&normalize_query(&self.query_text)) {
            ShellState::OpenEmpty
        } else if self.results.is_empty() {
            ShellState::OpenNoResults
        } else {
            ShellState::OpenResults
        };
        Effect::Render
    }

    fn reset_query(&mut self) {
        self.query_text.clear();
        self.results.clear();
        self.selected = None;
    }
}
