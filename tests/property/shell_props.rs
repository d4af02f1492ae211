//! Invariants of the search shell under random event sequences.

use super::strategies::{catalog_strategy, filter_strategy, query_strategy};
use proptest::prelude::*;
use std::rc::Rc;
use wikisearch::{
    Direction, Effect, SearchConfig, SearchIndex, SearchShell, ShellEvent, ShellState,
};

fn event_strategy() -> impl Strategy<Value = ShellEvent> {
    prop_oneof![
        Just(ShellEvent::Open),
        Just(ShellEvent::Close),
        Just(ShellEvent::Clear),
        Just(ShellEvent::Select),
        Just(ShellEvent::Move(Direction::Up)),
        Just(ShellEvent::Move(Direction::Down)),
        query_strategy().prop_map(ShellEvent::Input),
        filter_strategy().prop_map(ShellEvent::SetFilter),
        (0usize..8).prop_map(ShellEvent::Choose),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: after any event sequence, the state agrees with the results
    /// and the selection stays in range.
    #[test]
    fn prop_state_matches_results(
        catalog in catalog_strategy(),
        events in prop::collection::vec(event_strategy(), 0..30),
    ) {
        let mut shell = SearchShell::new(Rc::new(SearchIndex::new(catalog)), SearchConfig::default());
        for event in events {
            let effect = shell.handle(event);

            match shell.state() {
                ShellState::Closed | ShellState::OpenEmpty | ShellState::OpenNoResults => {
                    prop_assert_eq!(shell.result_count(), 0);
                    prop_assert_eq!(shell.selected(), None);
                }
                ShellState::OpenResults => {
                    prop_assert!(shell.result_count() > 0);
                }
            }
            if let Some(selected) = shell.selected() {
                prop_assert!(selected < shell.result_count());
            }
            if let Effect::Navigate(url) = effect {
                prop_assert!(shell.results().iter().any(|hit| hit.record.url == url));
            }
        }
    }

    /// Property: pressing Down `n` times cycles through all rows and lands
    /// back on `(n - 1) mod count`.
    #[test]
    fn prop_arrow_down_wraps(presses in 1usize..40) {
        let mut shell = SearchShell::new(Rc::new(SearchIndex::builtin()), SearchConfig::default());
        shell.handle(ShellEvent::Open);
        shell.handle(ShellEvent::Input("transport".to_string()));
        let count = shell.result_count();
        prop_assume!(count > 0);

        for _ in 0..presses {
            shell.handle(ShellEvent::Move(Direction::Down));
        }
        prop_assert_eq!(shell.selected(), Some((presses - 1) % count));
    }
}
