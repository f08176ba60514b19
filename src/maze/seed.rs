//! Data-driven maze layouts.
//!
//! A layout names rooms and door pairs without saying anything about how the
//! components are produced; any [`MazeBuilder`] can realize it. Layouts load
//! from TOML files so operators can swap floor plans without recompiling.
//!
//! ```toml
//! rooms = [1, 2, 3]
//!
//! [[doors]]
//! a = 1
//! b = 2
//!
//! [[doors]]
//! a = 2
//! b = 3
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::maze::builder::MazeBuilder;
use crate::maze::errors::MazeError;
use crate::maze::types::RoomId;

/// One door in a layout, endpoints in either order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoorSeed {
    pub a: RoomId,
    pub b: RoomId,
}

/// A maze floor plan: which rooms exist and which pairs are connected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MazeLayout {
    #[serde(default)]
    pub rooms: Vec<RoomId>,
    #[serde(default)]
    pub doors: Vec<DoorSeed>,
}

impl MazeLayout {
    /// The built-in demo floor plan: a four-room loop.
    ///
    /// Deterministic so tests and the CLI produce identical mazes run to run.
    pub fn canonical() -> Self {
        Self {
            rooms: vec![1, 2, 3, 4],
            doors: vec![
                DoorSeed { a: 1, b: 2 },
                DoorSeed { a: 2, b: 3 },
                DoorSeed { a: 3, b: 4 },
                DoorSeed { a: 4, b: 1 },
            ],
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, MazeError> {
        toml::from_str(text).map_err(|e| MazeError::LayoutParse(e.to_string()))
    }

    /// Load a layout from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, MazeError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| MazeError::LayoutParse(format!("{}: {}", path.display(), e)))
    }

    /// Drive a builder through this layout: rooms first, then doors.
    ///
    /// Stops at the first failure with the builder left exactly as far as it
    /// got; error semantics are the builder's own.
    pub fn apply(&self, builder: &mut dyn MazeBuilder) -> Result<(), MazeError> {
        for &number in &self.rooms {
            builder.build_room(number)?;
        }
        for door in &self.doors {
            builder.build_door(door.a, door.b)?;
        }
        Ok(())
    }
}
