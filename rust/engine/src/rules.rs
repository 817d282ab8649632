use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::action::{Action, ActionKind, LegalAction, RaiseRange};
use crate::errors::GameError;
use crate::player::Player;

/// Blind sizes of the table. The big blind is also the minimum raise
/// increment until somebody raises.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BlindStructure {
    pub small_blind: u32,
    pub big_blind: u32,
}

impl BlindStructure {
    pub fn new(small_blind: u32, big_blind: u32) -> Result<Self, GameError> {
        let blinds = Self {
            small_blind,
            big_blind,
        };
        blinds.validate()?;
        Ok(blinds)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.small_blind == 0 || self.big_blind < self.small_blind {
            return Err(GameError::InvalidBlinds {
                small: self.small_blind,
                big: self.big_blind,
            });
        }
        Ok(())
    }
}

impl Default for BlindStructure {
    fn default() -> Self {
        Self {
            small_blind: 5,
            big_blind: 10,
        }
    }
}

/// Stateless no-limit betting rules over a slice of players.
///
/// Table state (amount to call, minimum raise) is rebuilt from the players'
/// action histories on every call, so the checker holds nothing but the blind
/// sizes. Seat indexes must be in range; an out-of-range `player_pos` panics.
///
/// # Examples
///
/// ```
/// use holdem_engine::action::{Action, ActionKind, LegalAction, RaiseRange};
/// use holdem_engine::player::Player;
/// use holdem_engine::rules::ActionChecker;
///
/// let checker = ActionChecker::default();
/// let mut players = vec![Player::new("sb", 100), Player::new("bb", 100)];
/// for (p, blind) in players.iter_mut().zip([5, 10]) {
///     p.add_action_history(ActionKind::Raise, blind, 5);
///     p.collect_bet(blind);
/// }
///
/// assert!(checker.is_illegal(&players, 0, Action::Raise { amount: 14 }));
/// assert!(!checker.is_illegal(&players, 0, Action::Raise { amount: 15 }));
/// assert_eq!(
///     checker.legal_actions(&players, 0),
///     [
///         LegalAction::Fold,
///         LegalAction::Call { amount: 10 },
///         LegalAction::Raise(RaiseRange::Available { min: 15, max: 100 }),
///     ]
/// );
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ActionChecker {
    blinds: BlindStructure,
}

impl ActionChecker {
    pub fn new(blinds: BlindStructure) -> Self {
        Self { blinds }
    }

    pub fn blinds(&self) -> BlindStructure {
        self.blinds
    }

    /// Highest round total among players still in the hand, taken from each
    /// player's latest action. Zero when nobody has acted.
    pub fn call_amount(&self, players: &[Player]) -> u32 {
        players
            .iter()
            .filter(|p| p.is_active())
            .filter_map(|p| p.last_action())
            .filter(|h| h.kind != ActionKind::Fold)
            .map(|h| h.amount)
            .max()
            .unwrap_or(0)
    }

    /// Largest raise increment posted this round, or the big blind if there
    /// has been no raise yet.
    pub fn min_raise_increment(&self, players: &[Player]) -> u32 {
        players
            .iter()
            .flat_map(|p| p.action_histories())
            .filter(|h| h.kind == ActionKind::Raise)
            .map(|h| h.add_amount)
            .max()
            .unwrap_or(self.blinds.big_blind)
    }

    /// Smallest round total that is a full raise.
    pub fn min_raise_amount(&self, players: &[Player]) -> u32 {
        self.call_amount(players)
            .saturating_add(self.min_raise_increment(players))
    }

    /// Chips `player` still has to put in to reach a round total of `amount`.
    pub fn need_amount_for_action(player: &Player, amount: u32) -> u32 {
        amount.saturating_sub(player.paid_sum())
    }

    /// Whether `action` commits the player's whole remaining stack.
    pub fn is_allin(player: &Player, action: Action) -> bool {
        match action {
            Action::Fold => false,
            Action::Call { amount } | Action::Raise { amount } => {
                Self::need_amount_for_action(player, amount) >= player.stack()
            }
        }
    }

    pub fn is_legal(&self, players: &[Player], player_pos: usize, action: Action) -> bool {
        !self.is_illegal(players, player_pos, action)
    }

    /// Whether `action` breaks the betting rules for the player at
    /// `player_pos`.
    ///
    /// A call must match the table exactly; a player who cannot reach the
    /// table amount may only call for the whole stack. A raise must exceed
    /// the table amount by at least the minimum increment, except that going
    /// all-in above the table amount is always allowed.
    pub fn is_illegal(&self, players: &[Player], player_pos: usize, action: Action) -> bool {
        let player = &players[player_pos];
        match action {
            Action::Fold => false,
            Action::Call { amount } => {
                let call_amount = self.call_amount(players);
                if Self::is_short_of_money(player, call_amount) {
                    amount != player.allin_amount()
                } else {
                    amount != call_amount
                }
            }
            Action::Raise { amount } => {
                if Self::is_short_of_money(player, amount) {
                    return true;
                }
                if amount <= self.call_amount(players) {
                    return true;
                }
                amount < self.min_raise_amount(players) && amount != player.allin_amount()
            }
        }
    }

    fn is_short_of_money(player: &Player, amount: u32) -> bool {
        Self::need_amount_for_action(player, amount) > player.stack()
    }

    /// Turns any proposed action into one that can be applied as is.
    ///
    /// Calling the table amount without the chips to cover it becomes an
    /// all-in call. Any other illegal action becomes a fold. Legal all-in
    /// actions are pinned to the player's exact all-in total.
    pub fn correct_action(&self, players: &[Player], player_pos: usize, action: Action) -> Action {
        let player = &players[player_pos];
        if let Action::Call { amount } = action {
            let call_amount = self.call_amount(players);
            if amount == call_amount && Self::is_short_of_money(player, call_amount) {
                debug!(
                    player = %player.uuid(),
                    call_amount,
                    allin = player.allin_amount(),
                    "short call becomes all-in call"
                );
                return Action::Call {
                    amount: player.allin_amount(),
                };
            }
        }
        if self.is_illegal(players, player_pos, action) {
            warn!(
                player = %player.uuid(),
                action = %action.label(),
                amount = action.amount(),
                "illegal action corrected to fold"
            );
            return Action::Fold;
        }
        if Self::is_allin(player, action) {
            let amount = player.allin_amount();
            return match action {
                Action::Raise { .. } => Action::Raise { amount },
                _ => Action::Call { amount },
            };
        }
        action
    }

    /// The three options open to the player at `player_pos`, always in the
    /// order fold, call, raise.
    pub fn legal_actions(&self, players: &[Player], player_pos: usize) -> [LegalAction; 3] {
        let player = &players[player_pos];
        let call_amount = self.call_amount(players);
        let min_raise = self.min_raise_amount(players);
        let max_raise = player.allin_amount();
        debug!(
            player = %player.uuid(),
            call_amount,
            min_raise,
            max_raise,
            "computed legal actions"
        );
        let raise = if max_raise < min_raise {
            RaiseRange::Unavailable
        } else {
            RaiseRange::Available {
                min: min_raise,
                max: max_raise,
            }
        };
        [
            LegalAction::Fold,
            LegalAction::Call {
                amount: call_amount.min(max_raise),
            },
            LegalAction::Raise(raise),
        ]
    }
}
