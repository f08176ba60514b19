//! Exemplar registry: hold fully configured components and clone them on demand.
//!
//! An exemplar lives outside any maze and is only ever a template. Clones own
//! all of their data (theme tags included), so mutating a clone can never leak
//! back into the exemplar or a sibling clone. The caller reassigns the identity
//! slot (`number` / key) before inserting a clone into a maze.

use std::collections::HashMap;

use log::debug;

use crate::maze::errors::MazeError;
use crate::maze::types::{Door, Room};

/// A registered template component.
#[derive(Debug, Clone)]
pub enum Exemplar {
    Room(Room),
    Door(Door),
}

impl From<Room> for Exemplar {
    fn from(room: Room) -> Self {
        Self::Room(room)
    }
}

impl From<Door> for Exemplar {
    fn from(door: Door) -> Self {
        Self::Door(door)
    }
}

/// Named exemplars, cloneable on demand.
#[derive(Debug, Clone, Default)]
pub struct PrototypeRegistry {
    exemplars: HashMap<String, Exemplar>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an exemplar under `name`, overwriting any previous entry.
    pub fn register(&mut self, name: impl Into<String>, exemplar: impl Into<Exemplar>) {
        let name = name.into();
        debug!("exemplar '{}' registered", name);
        self.exemplars.insert(name, exemplar.into());
    }

    /// Clone the room exemplar under `name`.
    ///
    /// Fails with `UnknownExemplar` when `name` was never registered or holds a
    /// door; the registry is unchanged either way.
    pub fn clone_room(&self, name: &str) -> Result<Room, MazeError> {
        match self.exemplars.get(name) {
            Some(Exemplar::Room(room)) => Ok(room.clone()),
            _ => Err(MazeError::UnknownExemplar(name.to_string())),
        }
    }

    /// Clone the door exemplar under `name`; same error contract as `clone_room`.
    pub fn clone_door(&self, name: &str) -> Result<Door, MazeError> {
        match self.exemplars.get(name) {
            Some(Exemplar::Door(door)) => Ok(door.clone()),
            _ => Err(MazeError::UnknownExemplar(name.to_string())),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.exemplars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.exemplars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exemplars.is_empty()
    }
}
