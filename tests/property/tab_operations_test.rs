//! Property-based tests for tab container operations.
//!
//! For any sequence of opens, closes, and activations: the count tracks
//! opens minus successful closes, never drops back to zero once a tab
//! exists, and the active index always stays inside the sequence.

use duskbrowser::engine::scripted::ScriptedEngine;
use duskbrowser::managers::tab_manager::{TabManager, TabManagerTrait};
use proptest::prelude::*;

/// Operations that can be performed on the tab container.
#[derive(Debug, Clone)]
enum TabOp {
    Open,
    Close(usize),
    SetActive(usize),
}

/// Strategy for generating a sequence of tab operations.
/// Biased toward opens so sequences keep interesting state; raw indices are
/// used unclamped so out-of-range handling gets exercised too.
fn arb_tab_ops() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(TabOp::Open),
            2 => (0..12usize).prop_map(TabOp::Close),
            1 => (0..12usize).prop_map(TabOp::SetActive),
        ],
        1..60,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn tab_invariants_hold_for_any_op_sequence(ops in arb_tab_ops()) {
        let mut tabs = TabManager::new(Box::new(ScriptedEngine::new()));
        let mut expected: usize = 0;
        let mut opened_any = false;

        for op in &ops {
            match op {
                TabOp::Open => {
                    tabs.open("https://example.com");
                    expected += 1;
                    opened_any = true;
                }
                TabOp::Close(idx) => {
                    // A close only takes effect on an in-range index when
                    // more than one tab is open.
                    if *idx < expected && expected > 1 {
                        expected -= 1;
                    }
                    tabs.close(*idx);
                }
                TabOp::SetActive(idx) => {
                    tabs.set_active(*idx);
                }
            }

            prop_assert_eq!(tabs.count(), expected);
            if opened_any {
                prop_assert!(tabs.count() >= 1, "count dropped to zero after {:?}", op);
            }
            if tabs.count() > 0 {
                prop_assert!(
                    tabs.active_index() < tabs.count(),
                    "active index {} out of range (count {})",
                    tabs.active_index(),
                    tabs.count()
                );
                prop_assert!(tabs.active().is_some());
            }
        }
    }

    #[test]
    fn open_always_activates_the_new_tab(count in 1..20usize) {
        let mut tabs = TabManager::new(Box::new(ScriptedEngine::new()));
        for i in 0..count {
            let index = tabs.open("https://example.com");
            prop_assert_eq!(index, i);
            prop_assert_eq!(tabs.active_index(), i);
        }
        prop_assert_eq!(tabs.count(), count);
    }
}
