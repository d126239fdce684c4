use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Battle is already finished")]
    BattleFinished,

    #[error("Battle unit not found: {0}")]
    UnitNotFound(usize),

    #[error("Hero not found: {0:?}")]
    HeroNotFound(crate::core::types::HeroId),

    #[error("Unknown creature: {0}")]
    UnknownCreature(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
