use tracing::info;

use crate::action::{Action, ActionKind, LegalAction};
use crate::errors::GameError;
use crate::player::Player;
use crate::rules::ActionChecker;

/// Players of one hand plus the rules used to judge their actions.
///
/// Applies decisions to player state: posting blinds, correcting and paying
/// for actions, and resetting histories between streets. Choosing who acts
/// next and when a street is over is left to the caller.
#[derive(Debug, Clone)]
pub struct BettingRound {
    checker: ActionChecker,
    players: Vec<Player>,
    /// Chips carried over from finished streets
    collected: u32,
}

impl BettingRound {
    pub fn new(players: Vec<Player>, checker: ActionChecker) -> Self {
        Self {
            checker,
            players,
            collected: 0,
        }
    }

    pub fn checker(&self) -> &ActionChecker {
        &self.checker
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }
    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    fn seat(&self, pos: usize) -> Result<(), GameError> {
        if pos < self.players.len() {
            Ok(())
        } else {
            Err(GameError::InvalidSeat {
                seat: pos,
                seats: self.players.len(),
            })
        }
    }

    /// Collects both blinds and records them in the players' histories.
    ///
    /// The big blind entry carries the gap to the small blind as its raise
    /// increment.
    pub fn post_blinds(&mut self, sb_pos: usize, bb_pos: usize) -> Result<(), GameError> {
        self.seat(sb_pos)?;
        self.seat(bb_pos)?;
        let blinds = self.checker.blinds();

        let sb = &mut self.players[sb_pos];
        let paid = sb.collect_bet(blinds.small_blind);
        sb.add_action_history(ActionKind::SmallBlind, paid, 0);

        let bb = &mut self.players[bb_pos];
        let paid = bb.collect_bet(blinds.big_blind);
        bb.add_action_history(
            ActionKind::BigBlind,
            paid,
            blinds.big_blind.saturating_sub(blinds.small_blind),
        );
        info!(
            small_blind = blinds.small_blind,
            big_blind = blinds.big_blind,
            sb_pos,
            bb_pos,
            "posted blinds"
        );
        Ok(())
    }

    pub fn legal_actions(&self, pos: usize) -> Result<[LegalAction; 3], GameError> {
        self.seat(pos)?;
        Ok(self.checker.legal_actions(&self.players, pos))
    }

    /// Corrects `action` and applies it to the player at `pos`.
    ///
    /// Returns the action that was actually applied.
    pub fn accept_action(&mut self, pos: usize, action: Action) -> Result<Action, GameError> {
        self.seat(pos)?;
        let applied = self.checker.correct_action(&self.players, pos, action);
        let call_amount = self.checker.call_amount(&self.players);
        let player = &mut self.players[pos];
        match applied {
            Action::Fold => player.fold(),
            Action::Call { amount } => {
                let need = ActionChecker::need_amount_for_action(player, amount);
                player.collect_bet(need);
                player.add_action_history(ActionKind::Call, amount, 0);
            }
            Action::Raise { amount } => {
                let need = ActionChecker::need_amount_for_action(player, amount);
                player.collect_bet(need);
                player.add_action_history(
                    ActionKind::Raise,
                    amount,
                    amount.saturating_sub(call_amount),
                );
            }
        }
        info!(
            player = %player.uuid(),
            action = %applied.label(),
            amount = applied.amount(),
            stack = player.stack(),
            "applied action"
        );
        Ok(applied)
    }

    /// Moves this street's contributions into the pot and resets every
    /// player's round state for the next street.
    pub fn start_street(&mut self) {
        for p in &mut self.players {
            self.collected = self.collected.saturating_add(p.paid_sum());
            p.start_new_round();
        }
    }

    /// Chips put in by all players this hand, folded ones included.
    pub fn pot(&self) -> u32 {
        self.players
            .iter()
            .map(Player::paid_sum)
            .fold(self.collected, u32::saturating_add)
    }
}
