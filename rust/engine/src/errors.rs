use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown action label: {0}")]
    UnknownAction(String),
    #[error("Malformed {action} descriptor")]
    MalformedAction { action: &'static str },
    #[error("Seat {seat} is out of range (table has {seats} players)")]
    InvalidSeat { seat: usize, seats: usize },
    #[error("Invalid blinds: small {small}, big {big}")]
    InvalidBlinds { small: u32, big: u32 },
}
