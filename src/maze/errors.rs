use thiserror::Error;

use crate::maze::types::RoomId;

/// Errors that can arise while constructing or traversing a maze.
///
/// Construction failures leave the target maze, builder, or registry unchanged;
/// callers decide whether to report and continue or abort.
#[derive(Debug, Error)]
pub enum MazeError {
    /// Returned when adding a room whose number is already present.
    #[error("duplicate room: {0}")]
    DuplicateRoom(RoomId),

    /// Returned when adding a door whose unordered endpoint pair already has one.
    #[error("duplicate door: {0}-{1}")]
    DuplicateDoor(RoomId, RoomId),

    /// Returned when an operation names a room the maze does not contain.
    #[error("unknown room: {0}")]
    UnknownRoom(RoomId),

    /// Returned when a door would connect a room to itself.
    #[error("door cannot connect room {0} to itself")]
    SelfLoop(RoomId),

    /// Returned by `finish` when no room was ever built.
    #[error("maze has no rooms")]
    IncompleteMaze,

    /// Returned when cloning a name the prototype registry never saw.
    #[error("unknown exemplar: {0}")]
    UnknownExemplar(String),

    /// Wrapper around IO errors from layout seed loading.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned when a layout seed file fails to parse.
    #[error("layout parse error: {0}")]
    LayoutParse(String),
}
