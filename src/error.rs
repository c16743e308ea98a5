//! Error types

use thiserror::Error;

use crate::entities::MonsterId;
use crate::items::ItemId;
use crate::progression::QuestId;
use crate::world::{Direction, LocationId};

/// Actions the game refuses to carry out.
///
/// These are caller mistakes (acting with nothing to fight, using an item
/// that is not in the pack). No state is changed when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("there is no monster here")]
    NoMonster,

    #[error("you have no weapon")]
    NoWeapon,

    #[error("you have no healing potion")]
    NoPotion,

    #[error("you are not carrying item {0}")]
    ItemNotHeld(ItemId),

    #[error("item {0} is not a weapon")]
    NotAWeapon(ItemId),

    #[error("item {0} is not a healing potion")]
    NotAPotion(ItemId),

    #[error("you cannot go {0} from here")]
    NoExit(Direction),

    #[error("unknown location {0}")]
    UnknownLocation(LocationId),

    #[error("unknown item {0}")]
    UnknownItem(ItemId),

    #[error("unknown quest {0}")]
    UnknownQuest(QuestId),

    #[error("unknown monster {0}")]
    UnknownMonster(MonsterId),
}

/// Problems loading world data
#[derive(Debug, Error)]
pub enum DataError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("serialization error: {0}")]
    Serialize(#[from] ron::Error),

    #[error("invalid world data: {0}")]
    Invalid(String),
}
