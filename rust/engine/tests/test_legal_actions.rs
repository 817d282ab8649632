use holdem_engine::action::{ActionKind, ActionLabel, LegalAction, RaiseRange, NO_RAISE};
use holdem_engine::player::Player;
use holdem_engine::rules::{ActionChecker, BlindStructure};
use serde_json::json;

fn clean_players() -> Vec<Player> {
    (0..2).map(|_| Player::new("uuid", 100)).collect()
}

fn blind_players() -> Vec<Player> {
    [("sb", 5), ("bb", 10)]
        .into_iter()
        .map(|(name, blind)| {
            let mut p = Player::new("uuid", 100).with_name(name);
            p.add_action_history(ActionKind::Raise, blind, 5);
            p.collect_bet(blind);
            p
        })
        .collect()
}

#[test]
fn blind_players_can_call_ten_or_raise_fifteen_to_hundred() {
    let players = blind_players();
    let legal = ActionChecker::default().legal_actions(&players, 0);
    assert_eq!(
        legal,
        [
            LegalAction::Fold,
            LegalAction::Call { amount: 10 },
            LegalAction::Raise(RaiseRange::Available { min: 15, max: 100 }),
        ]
    );
}

#[test]
fn opening_action_offers_check_and_big_blind_raise() {
    let players = clean_players();
    let legal = ActionChecker::default().legal_actions(&players, 0);
    assert_eq!(legal[1], LegalAction::Call { amount: 0 });
    assert_eq!(
        legal[2],
        LegalAction::Raise(RaiseRange::Available { min: 10, max: 100 })
    );
}

#[test]
fn opening_minimum_follows_the_configured_big_blind() {
    let players = clean_players();
    let checker = ActionChecker::new(BlindStructure::new(25, 50).unwrap());
    let legal = checker.legal_actions(&players, 1);
    assert_eq!(
        legal[2],
        LegalAction::Raise(RaiseRange::Available { min: 50, max: 100 })
    );
}

#[test]
fn order_is_always_fold_call_raise() {
    let players = blind_players();
    let checker = ActionChecker::default();
    for pos in 0..players.len() {
        let labels: Vec<_> = checker
            .legal_actions(&players, pos)
            .iter()
            .map(LegalAction::label)
            .collect();
        assert_eq!(
            labels,
            vec![ActionLabel::Fold, ActionLabel::Call, ActionLabel::Raise]
        );
    }
}

#[test]
fn raise_is_unavailable_when_minimum_is_out_of_reach() {
    let mut players = blind_players();
    players[0].add_action_history(ActionKind::Raise, 100, 95);
    players[0].collect_bet(95);
    let legal = ActionChecker::default().legal_actions(&players, 1);
    assert_eq!(legal[1], LegalAction::Call { amount: 100 });
    assert_eq!(legal[2], LegalAction::Raise(RaiseRange::Unavailable));
    if let LegalAction::Raise(range) = legal[2] {
        assert!(!range.is_available());
        assert_eq!(range.bounds(), (NO_RAISE, NO_RAISE));
    }
}

#[test]
fn short_stack_call_is_capped_at_allin_total() {
    let mut players = blind_players();
    players[0].add_action_history(ActionKind::Raise, 100, 95);
    players[1].set_stack(50);
    let legal = ActionChecker::default().legal_actions(&players, 1);
    assert_eq!(legal[1], LegalAction::Call { amount: 60 });
}

#[test]
fn descriptors_serialize_to_controller_shape() {
    let legal = ActionChecker::default().legal_actions(&blind_players(), 0);
    assert_eq!(
        serde_json::to_value(legal).unwrap(),
        json!([
            {"action": "fold", "amount": 0},
            {"action": "call", "amount": 10},
            {"action": "raise", "amount": {"min": 15, "max": 100}},
        ])
    );
}
