use holdem_engine::action::{Action, ActionKind};
use holdem_engine::player::Player;
use holdem_engine::rules::ActionChecker;

fn clean_players() -> Vec<Player> {
    (0..2).map(|_| Player::new("uuid", 100)).collect()
}

/// Player 0 bet 50, player 1 posted a 10 chip big blind and has 30 behind.
fn short_big_blind() -> Vec<Player> {
    let mut players = clean_players();
    players[0].add_action_history(ActionKind::Raise, 50, 50);
    players[0].collect_bet(50);
    players[1].add_action_history(ActionKind::BigBlind, 10, 5);
    players[1].collect_bet(10);
    players[1].set_stack(30);
    players
}

#[test]
fn allin_check_on_call() {
    let player = &clean_players()[0];
    assert!(!ActionChecker::is_allin(player, Action::Call { amount: 99 }));
    assert!(ActionChecker::is_allin(player, Action::Call { amount: 100 }));
    assert!(ActionChecker::is_allin(player, Action::Call { amount: 101 }));
}

#[test]
fn allin_check_on_raise() {
    let player = &clean_players()[0];
    assert!(!ActionChecker::is_allin(player, Action::Raise { amount: 99 }));
    assert!(ActionChecker::is_allin(player, Action::Raise { amount: 100 }));
    assert!(ActionChecker::is_allin(player, Action::Raise { amount: 101 }));
}

#[test]
fn allin_check_on_fold() {
    let player = &clean_players()[0];
    assert!(!ActionChecker::is_allin(player, Action::Fold));
}

#[test]
fn allin_check_counts_what_was_already_paid() {
    let mut player = Player::new("uuid", 100);
    player.collect_bet(10);
    assert!(!ActionChecker::is_allin(&player, Action::Call { amount: 99 }));
    assert!(ActionChecker::is_allin(&player, Action::Call { amount: 100 }));
}

#[test]
fn short_call_is_corrected_to_allin_call() {
    let players = short_big_blind();
    let checker = ActionChecker::default();
    let corrected = checker.correct_action(&players, 1, Action::Call { amount: 50 });
    assert_eq!(corrected, Action::Call { amount: 40 });
}

#[test]
fn short_call_between_stack_and_table_is_folded() {
    let players = short_big_blind();
    let checker = ActionChecker::default();
    let corrected = checker.correct_action(&players, 1, Action::Call { amount: 45 });
    assert_eq!(corrected, Action::Fold);
}

#[test]
fn short_call_for_exact_stack_is_kept() {
    let players = short_big_blind();
    let checker = ActionChecker::default();
    let corrected = checker.correct_action(&players, 1, Action::Call { amount: 40 });
    assert_eq!(corrected, Action::Call { amount: 40 });
}

#[test]
fn allin_raise_is_kept() {
    let players = clean_players();
    let checker = ActionChecker::default();
    let corrected = checker.correct_action(&players, 0, Action::Raise { amount: 100 });
    assert_eq!(corrected, Action::Raise { amount: 100 });
}

#[test]
fn illegal_call_becomes_fold() {
    let players = clean_players();
    let checker = ActionChecker::default();
    assert_eq!(
        checker.correct_action(&players, 0, Action::Call { amount: 10 }),
        Action::Fold
    );
}

#[test]
fn illegal_raise_becomes_fold() {
    let players = clean_players();
    let checker = ActionChecker::default();
    assert_eq!(
        checker.correct_action(&players, 0, Action::Raise { amount: 101 }),
        Action::Fold
    );
    assert_eq!(
        checker.correct_action(&players, 0, Action::Raise { amount: 5 }),
        Action::Fold
    );
}

#[test]
fn legal_actions_pass_through() {
    let players = clean_players();
    let checker = ActionChecker::default();
    assert_eq!(
        checker.correct_action(&players, 0, Action::Call { amount: 0 }),
        Action::Call { amount: 0 }
    );
    assert_eq!(
        checker.correct_action(&players, 0, Action::Raise { amount: 40 }),
        Action::Raise { amount: 40 }
    );
    assert_eq!(
        checker.correct_action(&players, 0, Action::Fold),
        Action::Fold
    );
}
