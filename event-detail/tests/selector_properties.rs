//! Property tests for the ticket menu and copy feedback

use event_detail::catalog::TicketTierId;
use event_detail::fixtures::catalog;
use event_detail::selector::TicketMenu;
use event_detail::{
    CopyLabel, DetailAction, DetailEnvironment, DetailReducer, DetailState, SelectorAction,
    SelectorReducer, SelectorState, TicketType,
};
use nikofree_core::reducer::Reducer;
use nikofree_testing::{RecordingBrowser, RecordingNavigator, ScriptedClipboard};
use proptest::prelude::*;
use std::sync::Arc;

fn any_ticket_type() -> impl Strategy<Value = TicketType> {
    proptest::sample::select(TicketType::ALL.to_vec())
}

fn any_id() -> impl Strategy<Value = TicketTierId> {
    prop_oneof![
        proptest::sample::select(vec![
            "standard", "vvip", "vip", "regular", "diehard", "earlybird", "advance", "gate",
            "day1", "day2", "day3", "season", "slot1", "slot4", "slot8",
        ])
        .prop_map(TicketTierId::from),
        "[a-z0-9]{1,8}".prop_map(|id: String| TicketTierId::new(id)),
    ]
}

fn any_selector_action() -> impl Strategy<Value = SelectorAction> {
    prop_oneof![
        any_id().prop_map(SelectorAction::SelectTicket),
        any_id().prop_map(SelectorAction::SelectTimeSlot),
        Just(SelectorAction::BuyTicket),
    ]
}

proptest! {
    #[test]
    fn selections_stay_inside_the_catalog(
        ticket_type in any_ticket_type(),
        actions in proptest::collection::vec(any_selector_action(), 0..30),
    ) {
        let mut state = SelectorState::new(catalog(ticket_type));
        for action in actions {
            SelectorReducer.reduce(&mut state, action, &());
        }

        if let Some(id) = state.selection() {
            prop_assert!(state.catalog.contains(id));
        }
        let menu = TicketMenu::from_state(&state);
        prop_assert!(menu.rows.iter().filter(|r| r.selected).count() <= 1);
        prop_assert_eq!(menu.buy.enabled, state.can_buy());
    }

    #[test]
    fn label_tracks_latest_copy(expiries in proptest::collection::vec(any::<bool>(), 1..20)) {
        let env = DetailEnvironment::new(
            Arc::new(RecordingNavigator::new()),
            Arc::new(RecordingBrowser::new()),
            Arc::new(ScriptedClipboard::working()),
            Arc::new(ScriptedClipboard::working()),
        );
        let mut state = DetailState::new(
            event_detail::fixtures::nairobi_tech_summit(),
            "http://localhost/e",
        );
        let mut scheduled = Vec::new();

        // true: a copy succeeds; false: the oldest pending expiry fires
        for copy in expiries {
            if copy {
                DetailReducer::new().reduce(&mut state, DetailAction::LinkCopied, &env);
                scheduled.push(state.copy_generation);
            } else if !scheduled.is_empty() {
                let generation = scheduled.remove(0);
                DetailReducer::new().reduce(
                    &mut state,
                    DetailAction::CopyLabelExpired { generation },
                    &env,
                );
            }

            let latest_pending = scheduled.last() == Some(&state.copy_generation);
            let expected = if latest_pending { CopyLabel::Copied } else { CopyLabel::Idle };
            prop_assert_eq!(state.copy_label, expected);
        }
    }
}
