//! # holdem-engine: No-Limit Hold'em Betting Rules
//!
//! Decides whether a betting action is legal, how many chips a player still
//! owes, whether an action puts a player all-in and what a misbehaving action
//! should be corrected to. All table state is rebuilt from the players' action
//! histories on every call.
//!
//! ## Core Modules
//!
//! - [`action`] - Action labels, proposed actions and legal-action descriptors
//! - [`player`] - Player stack, per-round action history and pay info
//! - [`rules`] - [`rules::ActionChecker`] and the blind structure
//! - [`game`] - Applying corrected actions to a table of players
//! - [`config`] - Blind configuration from TOML and environment
//! - [`errors`] - Error types for malformed input
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::action::{Action, LegalAction, RaiseRange};
//! use holdem_engine::game::BettingRound;
//! use holdem_engine::player::Player;
//! use holdem_engine::rules::ActionChecker;
//!
//! let players = vec![Player::new("alice", 1_000), Player::new("bob", 1_000)];
//! let mut round = BettingRound::new(players, ActionChecker::default());
//! round.post_blinds(0, 1).unwrap();
//!
//! let legal = round.legal_actions(0).unwrap();
//! assert_eq!(legal[1], LegalAction::Call { amount: 10 });
//! assert_eq!(legal[2], LegalAction::Raise(RaiseRange::Available { min: 20, max: 1_000 }));
//!
//! // Raising past the stack is illegal and gets folded
//! let applied = round.accept_action(0, Action::Raise { amount: 5_000 }).unwrap();
//! assert_eq!(applied, Action::Fold);
//! assert_eq!(round.pot(), 15);
//! ```

pub mod action;
pub mod config;
pub mod errors;
pub mod game;
pub mod player;
pub mod rules;
