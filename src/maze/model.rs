//! The maze aggregate: rooms as nodes, doors as edges, with the graph-closure
//! invariant enforced at every mutation.
//!
//! A `Maze` never invents a room or door to satisfy a request, and a failed
//! operation leaves it untouched. Outside callers get read-only iteration; the
//! only mutation paths are the construction operations below.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;

use crate::maze::errors::MazeError;
use crate::maze::types::{Door, DoorKey, Observation, Room, RoomId};

/// A graph of rooms connected by doors.
///
/// Invariant: every door's two endpoints are present in the room map. The
/// collections stay private so the invariant cannot be broken from outside.
#[derive(Debug, Clone, Serialize)]
pub struct Maze {
    rooms: BTreeMap<RoomId, Room>,
    doors: Vec<Door>,
    created_at: DateTime<Utc>,
}

impl Maze {
    pub fn new() -> Self {
        Self {
            rooms: BTreeMap::new(),
            doors: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Insert a room. Fails with `DuplicateRoom` if the number is taken.
    pub fn add_room(&mut self, room: Room) -> Result<&Room, MazeError> {
        let number = room.number;
        if self.rooms.contains_key(&number) {
            return Err(MazeError::DuplicateRoom(number));
        }
        debug!("room {} added (theme: {})", number, room.theme);
        Ok(self.rooms.entry(number).or_insert(room))
    }

    /// Insert a door. Both endpoints must already exist, and the unordered
    /// endpoint pair must not already have a door.
    pub fn add_door(&mut self, door: Door) -> Result<&Door, MazeError> {
        let (a, b) = door.key.rooms();
        if !self.rooms.contains_key(&a) {
            return Err(MazeError::UnknownRoom(a));
        }
        if !self.rooms.contains_key(&b) {
            return Err(MazeError::UnknownRoom(b));
        }
        if self.door(door.key).is_some() {
            return Err(MazeError::DuplicateDoor(a, b));
        }
        debug!("door {} added (theme: {})", door.key, door.theme);
        let idx = self.doors.len();
        self.doors.push(door);
        Ok(&self.doors[idx])
    }

    /// Enter a room: mark it visited and open every closed door between it and
    /// a previously visited room (the doors the traversal came through).
    ///
    /// Returns the observations in the order they occurred, `RoomEntered` first.
    pub fn enter(&mut self, number: RoomId) -> Result<Vec<Observation>, MazeError> {
        let room = self
            .rooms
            .get_mut(&number)
            .ok_or(MazeError::UnknownRoom(number))?;
        room.visited = true;
        let mut observations = vec![Observation::RoomEntered { room: number }];

        let openable: Vec<usize> = self
            .doors
            .iter()
            .enumerate()
            .filter(|(_, door)| !door.open && door.key.touches(number))
            .filter(|(_, door)| {
                door.key
                    .other(number)
                    .and_then(|far| self.rooms.get(&far))
                    .is_some_and(|far_room| far_room.visited)
            })
            .map(|(idx, _)| idx)
            .collect();
        for idx in openable {
            let door = &mut self.doors[idx];
            door.open = true;
            let (from, to) = door.key.rooms();
            debug!("door {} opened entering room {}", door.key, number);
            observations.push(Observation::DoorOpened { from, to });
        }

        debug!("room {} entered", number);
        Ok(observations)
    }

    pub fn room(&self, number: RoomId) -> Option<&Room> {
        self.rooms.get(&number)
    }

    pub fn door(&self, key: DoorKey) -> Option<&Door> {
        self.doors.iter().find(|door| door.key == key)
    }

    /// Rooms in ascending number order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Doors in insertion order.
    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Re-check the graph-closure invariant: every door endpoint names a room.
    ///
    /// Construction already guarantees this; the check exists so finished mazes
    /// and test fixtures can assert it cheaply.
    pub fn validate(&self) -> Result<(), MazeError> {
        for door in &self.doors {
            let (a, b) = door.key.rooms();
            if !self.rooms.contains_key(&a) {
                return Err(MazeError::UnknownRoom(a));
            }
            if !self.rooms.contains_key(&b) {
                return Err(MazeError::UnknownRoom(b));
            }
        }
        Ok(())
    }
}

impl Default for Maze {
    fn default() -> Self {
        Self::new()
    }
}
