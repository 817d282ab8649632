use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::action::ActionKind;

/// Where a player stands in the current betting round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PayStatus {
    /// Still in the hand and able to act
    Paying,
    /// Whole stack committed
    AllIn,
    /// Out of the hand
    Folded,
}

/// Chips a player has put in this round and their pay status.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PayInfo {
    /// Total chips contributed this round
    pub amount: u32,
    pub status: PayStatus,
}

impl Default for PayInfo {
    fn default() -> Self {
        Self {
            amount: 0,
            status: PayStatus::Paying,
        }
    }
}

impl PayInfo {
    pub fn update_by_pay(&mut self, amount: u32) {
        self.amount = self.amount.saturating_add(amount);
    }

    /// Zeroes the round contribution; status carries over.
    pub fn reset_amount(&mut self) {
        self.amount = 0;
    }

    pub fn update_to_fold(&mut self) {
        self.status = PayStatus::Folded;
    }

    /// Folded players stay folded.
    pub fn update_to_allin(&mut self) {
        if self.status != PayStatus::Folded {
            self.status = PayStatus::AllIn;
        }
    }
}

/// One recorded action of the current betting round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionHistory {
    pub kind: ActionKind,
    /// Cumulative amount the player has put in as of this action
    pub amount: u32,
    /// For raises, the increment over the amount that was being called
    #[serde(default)]
    pub add_amount: u32,
}

/// A seated player: identity, stack, per-round action history and pay info.
///
/// Stacks are unsigned and [`Player::collect_bet`] never takes more than the
/// player has, so a stack can never go negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Opaque stable identifier
    uuid: String,
    /// Display name
    name: String,
    /// Chips still available to bet
    stack: u32,
    /// Actions taken during the current betting round, oldest first
    action_histories: Vec<ActionHistory>,
    pay_info: PayInfo,
}

impl Player {
    pub fn new(uuid: impl Into<String>, stack: u32) -> Self {
        Self {
            uuid: uuid.into(),
            name: String::new(),
            stack,
            action_histories: Vec::new(),
            pay_info: PayInfo::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn pay_info(&self) -> &PayInfo {
        &self.pay_info
    }
    pub fn action_histories(&self) -> &[ActionHistory] {
        &self.action_histories
    }

    /// Overrides the stack, e.g. after an external rebuy or correction.
    pub fn set_stack(&mut self, stack: u32) {
        self.stack = stack;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Takes up to `amount` chips from the stack into this round's pay info
    /// and returns what was actually collected.
    ///
    /// Exhausting the stack marks the player all-in.
    pub fn collect_bet(&mut self, amount: u32) -> u32 {
        let collected = amount.min(self.stack);
        self.stack -= collected;
        self.pay_info.update_by_pay(collected);
        if amount > 0 && self.stack == 0 {
            self.pay_info.update_to_allin();
        }
        trace!(
            player = %self.uuid,
            requested = amount,
            collected,
            stack = self.stack,
            "collected bet"
        );
        collected
    }

    pub fn add_action_history(&mut self, kind: ActionKind, amount: u32, add_amount: u32) {
        self.action_histories.push(ActionHistory {
            kind,
            amount,
            add_amount,
        });
    }

    /// Folds for the rest of the hand. The fold is recorded with the amount
    /// already paid so pot accounting keeps the contribution.
    pub fn fold(&mut self) {
        self.pay_info.update_to_fold();
        let paid = self.pay_info.amount;
        self.add_action_history(ActionKind::Fold, paid, 0);
    }

    pub fn last_action(&self) -> Option<&ActionHistory> {
        self.action_histories.last()
    }

    /// Chips put in this round.
    pub fn paid_sum(&self) -> u32 {
        self.pay_info.amount
    }

    /// Round total the player reaches by pushing the whole stack.
    pub fn allin_amount(&self) -> u32 {
        self.pay_info.amount.saturating_add(self.stack)
    }

    pub fn is_active(&self) -> bool {
        self.pay_info.status != PayStatus::Folded
    }

    /// True while the player can still be asked for a decision.
    pub fn is_waiting_ask(&self) -> bool {
        self.pay_info.status == PayStatus::Paying
    }

    pub fn clear_action_histories(&mut self) {
        self.action_histories.clear();
    }

    /// Starts a new betting round: history and round contribution are
    /// cleared, folded and all-in status is kept.
    pub fn start_new_round(&mut self) {
        self.clear_action_histories();
        self.pay_info.reset_amount();
    }

    /// Starts a new hand.
    pub fn clear_pay_info(&mut self) {
        self.pay_info = PayInfo::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_collection_is_allin() {
        let mut p = Player::new("uuid", 30);
        assert_eq!(p.collect_bet(30), 30);
        assert_eq!(p.pay_info().status, PayStatus::AllIn);
    }

    #[test]
    fn zero_collection_on_empty_stack_keeps_status() {
        let mut p = Player::new("uuid", 0);
        assert_eq!(p.collect_bet(0), 0);
        assert_eq!(p.pay_info().status, PayStatus::Paying);
    }

    #[test]
    fn folded_player_is_not_revived_by_collection() {
        let mut p = Player::new("uuid", 10);
        p.fold();
        p.collect_bet(20);
        assert_eq!(p.pay_info().status, PayStatus::Folded);
        assert_eq!(p.stack(), 0);
    }
}
