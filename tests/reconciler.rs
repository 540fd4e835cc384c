//! Property suite for the bounded tab-list reconciler.

use facet_ui::{MAX_TABS, MIN_TABS, Tab, TabListState, reconcile_tab_count, select_tab};
use proptest::prelude::*;

fn arb_tab() -> impl Strategy<Value = Tab> {
    ("[A-Za-z ]{0,12}", any::<bool>())
        .prop_map(|(label, disabled)| Tab::new(label).with_disabled(disabled))
}

fn arb_state() -> impl Strategy<Value = TabListState> {
    prop::collection::vec(arb_tab(), MIN_TABS..=MAX_TABS)
        .prop_flat_map(|tabs| {
            let len = tabs.len();
            (Just(tabs), 0..len)
        })
        .prop_map(|(tabs, active)| TabListState::from_tabs(tabs, active))
}

proptest! {
    // `shrink_preserves_prefix_and_clamps_index` assumes `clamped <
    // state.len()`, which holds for only a small fraction of generated
    // inputs; the default global-reject cap (1024) is too low to collect a
    // full run of accepted cases.
    #![proptest_config(ProptestConfig {
        max_global_rejects: 65536,
        ..ProptestConfig::default()
    })]

    #[test]
    fn reconciled_length_is_clamped_request(state in arb_state(), requested in 0usize..32) {
        let result = reconcile_tab_count(&state, requested);
        prop_assert_eq!(result.len(), requested.clamp(MIN_TABS, MAX_TABS));
    }

    #[test]
    fn reconcile_is_idempotent(state in arb_state(), requested in 0usize..32) {
        let once = reconcile_tab_count(&state, requested);
        let twice = reconcile_tab_count(&once, requested);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn growth_preserves_prefix(state in arb_state(), requested in 0usize..32) {
        let clamped = requested.clamp(MIN_TABS, MAX_TABS);
        prop_assume!(clamped >= state.len());

        let result = reconcile_tab_count(&state, requested);
        prop_assert_eq!(&result.tabs()[..state.len()], state.tabs());
        // Appended slots are enabled defaults.
        for tab in &result.tabs()[state.len()..] {
            prop_assert!(!tab.is_disabled());
            prop_assert!(tab.label().starts_with("Label "));
        }
        prop_assert_eq!(result.active_index(), state.active_index());
    }

    #[test]
    fn shrink_preserves_prefix_and_clamps_index(state in arb_state(), requested in 0usize..32) {
        let clamped = requested.clamp(MIN_TABS, MAX_TABS);
        prop_assume!(clamped < state.len());

        let result = reconcile_tab_count(&state, requested);
        prop_assert_eq!(result.tabs(), &state.tabs()[..clamped]);
        prop_assert_eq!(
            result.active_index(),
            state.active_index().min(clamped - 1)
        );
    }

    #[test]
    fn active_index_always_valid(state in arb_state(), requested in 0usize..32) {
        let result = reconcile_tab_count(&state, requested);
        prop_assert!(result.active_index() < result.len());
    }

    #[test]
    fn reconcile_never_mutates_input(state in arb_state(), requested in 0usize..32) {
        let before = state.clone();
        let _ = reconcile_tab_count(&state, requested);
        prop_assert_eq!(state, before);
    }

    #[test]
    fn select_respects_disabled_flag(state in arb_state(), index in 0usize..16) {
        let result = select_tab(&state, index);
        match state.tabs().get(index) {
            Some(tab) if !tab.is_disabled() => {
                prop_assert_eq!(result.active_index(), index);
                prop_assert_eq!(result.tabs(), state.tabs());
            }
            // Disabled or out of bounds: unchanged.
            _ => prop_assert_eq!(result, state.clone()),
        }
    }

    #[test]
    fn edits_survive_any_count_round_trip(
        state in arb_state(),
        label in "[A-Za-z]{1,8}",
        down in 0usize..32,
        up in 0usize..32,
    ) {
        // Edit the first tab, churn the count twice; position 0 always
        // survives, so the edit must too.
        let mut edited = state.clone();
        edited.set_label(0, label.clone());
        edited.set_disabled(0, true);

        let churned = reconcile_tab_count(&reconcile_tab_count(&edited, down), up);
        prop_assert_eq!(churned.tabs()[0].label(), label.as_str());
        prop_assert!(churned.tabs()[0].is_disabled());
    }
}
