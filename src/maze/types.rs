use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::maze::errors::MazeError;

/// Room numbers are plain non-negative integers, unique within a maze.
pub type RoomId = u32;

/// Display/behavior tag shared by every component a single factory produces.
///
/// The tag is an uninterpreted string; `"classic"` and `"enchanted"` are just the
/// two families the demo layouts ship with. Callers are free to mint their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme(String);

impl Theme {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Theme {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for Theme {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

/// Identity of a door: the unordered pair of room numbers it connects.
///
/// The pair is normalized on construction (`lo <= hi`), so `new(1, 2)` and
/// `new(2, 1)` compare equal. A door may never connect a room to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DoorKey {
    lo: RoomId,
    hi: RoomId,
}

impl DoorKey {
    pub fn new(a: RoomId, b: RoomId) -> Result<Self, MazeError> {
        if a == b {
            return Err(MazeError::SelfLoop(a));
        }
        Ok(Self {
            lo: a.min(b),
            hi: a.max(b),
        })
    }

    /// Both endpoints, smaller number first.
    pub fn rooms(&self) -> (RoomId, RoomId) {
        (self.lo, self.hi)
    }

    /// Whether `number` is one of the two endpoints.
    pub fn touches(&self, number: RoomId) -> bool {
        self.lo == number || self.hi == number
    }

    /// The endpoint opposite `number`, if `number` is an endpoint at all.
    pub fn other(&self, number: RoomId) -> Option<RoomId> {
        if number == self.lo {
            Some(self.hi)
        } else if number == self.hi {
            Some(self.lo)
        } else {
            None
        }
    }
}

impl fmt::Display for DoorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

/// A node in the maze graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub number: RoomId,
    pub theme: Theme,
    /// Set by [`Maze::enter`](crate::maze::Maze::enter); never set implicitly.
    #[serde(default)]
    pub visited: bool,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn new(number: RoomId, theme: Theme) -> Self {
        Self {
            number,
            theme,
            visited: false,
            created_at: Utc::now(),
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// An edge connecting two distinct rooms.
///
/// Doors start closed and open only as a traversal side effect; see
/// [`Maze::enter`](crate::maze::Maze::enter).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Door {
    pub key: DoorKey,
    pub theme: Theme,
    #[serde(default)]
    pub open: bool,
    pub created_at: DateTime<Utc>,
}

impl Door {
    pub fn new(key: DoorKey, theme: Theme) -> Self {
        Self {
            key,
            theme,
            open: false,
            created_at: Utc::now(),
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// Observable outcome of a traversal step.
///
/// The maze never prints or calls out on its own; callers receive observations
/// and decide what to do with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Observation {
    RoomEntered { room: RoomId },
    DoorOpened { from: RoomId, to: RoomId },
}
