use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Sentinel reported for both raise bounds when no raise can be offered.
pub const NO_RAISE: i64 = -1;

/// Kind of an entry in a player's per-round action history.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionKind {
    Fold,
    Call,
    Raise,
    SmallBlind,
    BigBlind,
}

/// Client-facing label of a betting decision.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionLabel {
    Fold,
    Call,
    Raise,
}

impl ActionLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionLabel::Fold => "fold",
            ActionLabel::Call => "call",
            ActionLabel::Raise => "raise",
        }
    }
}

impl fmt::Display for ActionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionLabel {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fold" => Ok(ActionLabel::Fold),
            "call" => Ok(ActionLabel::Call),
            "raise" => Ok(ActionLabel::Raise),
            _ => Err(GameError::UnknownAction(s.to_string())),
        }
    }
}

/// A betting decision proposed by a player or produced by
/// [`crate::rules::ActionChecker::correct_action`].
///
/// `amount` is always the absolute total the player intends to have put in
/// during the current betting round, never an increment.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "ActionDescriptor", try_from = "ActionDescriptor")]
pub enum Action {
    Fold,
    Call { amount: u32 },
    Raise { amount: u32 },
}

impl Action {
    /// Builds an action from a client label such as `"raise"`.
    ///
    /// The amount is ignored for folds.
    ///
    /// ```
    /// use holdem_engine::action::Action;
    ///
    /// assert_eq!(Action::from_label("call", 10).unwrap(), Action::Call { amount: 10 });
    /// assert_eq!(Action::from_label("FOLD", 99).unwrap(), Action::Fold);
    /// assert!(Action::from_label("check", 0).is_err());
    /// ```
    pub fn from_label(label: &str, amount: u32) -> Result<Self, GameError> {
        let label: ActionLabel = label.parse()?;
        Ok(Self::with_label(label, amount))
    }

    pub fn with_label(label: ActionLabel, amount: u32) -> Self {
        match label {
            ActionLabel::Fold => Action::Fold,
            ActionLabel::Call => Action::Call { amount },
            ActionLabel::Raise => Action::Raise { amount },
        }
    }

    pub fn label(&self) -> ActionLabel {
        match self {
            Action::Fold => ActionLabel::Fold,
            Action::Call { .. } => ActionLabel::Call,
            Action::Raise { .. } => ActionLabel::Raise,
        }
    }

    /// Total amount carried by the action; zero for a fold.
    pub fn amount(&self) -> u32 {
        match *self {
            Action::Fold => 0,
            Action::Call { amount } | Action::Raise { amount } => amount,
        }
    }
}

/// Bounds of the raise currently open to a player.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RaiseRange {
    /// Any total in `min..=max` is a legal raise.
    Available { min: u32, max: u32 },
    /// The player cannot meet the minimum raise.
    Unavailable,
}

impl RaiseRange {
    /// Bounds as reported to clients, `(-1, -1)` when unavailable.
    pub fn bounds(&self) -> (i64, i64) {
        match *self {
            RaiseRange::Available { min, max } => (i64::from(min), i64::from(max)),
            RaiseRange::Unavailable => (NO_RAISE, NO_RAISE),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, RaiseRange::Available { .. })
    }
}

/// One of the three descriptors returned by
/// [`crate::rules::ActionChecker::legal_actions`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "ActionDescriptor", try_from = "ActionDescriptor")]
pub enum LegalAction {
    Fold,
    Call { amount: u32 },
    Raise(RaiseRange),
}

impl LegalAction {
    pub fn label(&self) -> ActionLabel {
        match self {
            LegalAction::Fold => ActionLabel::Fold,
            LegalAction::Call { .. } => ActionLabel::Call,
            LegalAction::Raise(_) => ActionLabel::Raise,
        }
    }
}

/// Wire shape shared by actions and legal-action descriptors:
/// `{"action": "raise", "amount": {"min": 15, "max": 100}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ActionDescriptor {
    action: ActionLabel,
    #[serde(default)]
    amount: DescriptorAmount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum DescriptorAmount {
    Chips(u32),
    Range { min: i64, max: i64 },
}

impl Default for DescriptorAmount {
    fn default() -> Self {
        DescriptorAmount::Chips(0)
    }
}

impl From<Action> for ActionDescriptor {
    fn from(action: Action) -> Self {
        Self {
            action: action.label(),
            amount: DescriptorAmount::Chips(action.amount()),
        }
    }
}

impl TryFrom<ActionDescriptor> for Action {
    type Error = GameError;

    fn try_from(d: ActionDescriptor) -> Result<Self, Self::Error> {
        match d.amount {
            DescriptorAmount::Chips(amount) => Ok(Action::with_label(d.action, amount)),
            DescriptorAmount::Range { .. } => Err(GameError::MalformedAction {
                action: d.action.as_str(),
            }),
        }
    }
}

impl From<LegalAction> for ActionDescriptor {
    fn from(legal: LegalAction) -> Self {
        let amount = match legal {
            LegalAction::Fold => DescriptorAmount::Chips(0),
            LegalAction::Call { amount } => DescriptorAmount::Chips(amount),
            LegalAction::Raise(range) => {
                let (min, max) = range.bounds();
                DescriptorAmount::Range { min, max }
            }
        };
        Self {
            action: legal.label(),
            amount,
        }
    }
}

impl TryFrom<ActionDescriptor> for LegalAction {
    type Error = GameError;

    fn try_from(d: ActionDescriptor) -> Result<Self, Self::Error> {
        let malformed = GameError::MalformedAction {
            action: d.action.as_str(),
        };
        match (d.action, d.amount) {
            (ActionLabel::Fold, _) => Ok(LegalAction::Fold),
            (ActionLabel::Call, DescriptorAmount::Chips(amount)) => Ok(LegalAction::Call { amount }),
            (ActionLabel::Raise, DescriptorAmount::Range { min, max }) => {
                if min == NO_RAISE && max == NO_RAISE {
                    return Ok(LegalAction::Raise(RaiseRange::Unavailable));
                }
                let min = u32::try_from(min).map_err(|_| malformed.clone())?;
                let max = u32::try_from(max).map_err(|_| malformed.clone())?;
                Ok(LegalAction::Raise(RaiseRange::Available { min, max }))
            }
            _ => Err(malformed),
        }
    }
}
