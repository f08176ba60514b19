//! Construction protocol: stage a maze incrementally, decoupled from how its
//! components are produced.
//!
//! All builders share one number/connection contract: the graph rules live in
//! [`Maze`] and are never re-implemented here. What varies is where rooms and
//! doors come from: built directly, drawn from a [`ComponentFactory`], or
//! cloned out of a [`PrototypeRegistry`].

use log::debug;

use crate::maze::errors::MazeError;
use crate::maze::factory::ComponentFactory;
use crate::maze::model::Maze;
use crate::maze::prototype::PrototypeRegistry;
use crate::maze::types::{Door, DoorKey, Room, RoomId, Theme};

/// Incremental maze assembly.
///
/// `build_room` and `build_door` carry the same error semantics as the maze
/// operations they delegate to. `finish` fails with `IncompleteMaze` until at
/// least one room was built, and is idempotent afterwards: repeated calls
/// return the same assembled maze without rebuilding anything.
pub trait MazeBuilder {
    fn build_room(&mut self, number: RoomId) -> Result<(), MazeError>;

    fn build_door(&mut self, a: RoomId, b: RoomId) -> Result<(), MazeError>;

    fn finish(&mut self) -> Result<&Maze, MazeError>;
}

fn finish_assembly<'a>(maze: &'a Maze, finished: &mut bool) -> Result<&'a Maze, MazeError> {
    if maze.is_empty() {
        return Err(MazeError::IncompleteMaze);
    }
    if !*finished {
        debug!(
            "maze assembly finished: {} rooms, {} doors",
            maze.room_count(),
            maze.door_count()
        );
        *finished = true;
    }
    Ok(maze)
}

/// Builds components itself, stamping everything with one fixed theme.
#[derive(Debug)]
pub struct DirectBuilder {
    theme: Theme,
    maze: Maze,
    finished: bool,
}

impl DirectBuilder {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            maze: Maze::new(),
            finished: false,
        }
    }
}

impl MazeBuilder for DirectBuilder {
    fn build_room(&mut self, number: RoomId) -> Result<(), MazeError> {
        self.maze.add_room(Room::new(number, self.theme.clone()))?;
        Ok(())
    }

    fn build_door(&mut self, a: RoomId, b: RoomId) -> Result<(), MazeError> {
        let key = DoorKey::new(a, b)?;
        self.maze.add_door(Door::new(key, self.theme.clone()))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<&Maze, MazeError> {
        finish_assembly(&self.maze, &mut self.finished)
    }
}

/// Delegates component creation to a [`ComponentFactory`].
///
/// Swapping the factory changes which family the maze is built from; the
/// connectivity contract is untouched.
#[derive(Debug)]
pub struct FactoryBuilder<F: ComponentFactory> {
    factory: F,
    maze: Maze,
    finished: bool,
}

impl<F: ComponentFactory> FactoryBuilder<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            maze: Maze::new(),
            finished: false,
        }
    }
}

impl<F: ComponentFactory> MazeBuilder for FactoryBuilder<F> {
    fn build_room(&mut self, number: RoomId) -> Result<(), MazeError> {
        self.maze.add_room(self.factory.create_room(number))?;
        Ok(())
    }

    fn build_door(&mut self, a: RoomId, b: RoomId) -> Result<(), MazeError> {
        let key = DoorKey::new(a, b)?;
        self.maze.add_door(self.factory.create_door(key))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<&Maze, MazeError> {
        finish_assembly(&self.maze, &mut self.finished)
    }
}

/// Clones named exemplars out of a registry, reassigning identity per call.
///
/// Exemplar attributes (theme, open state) come through the clone untouched;
/// only the identity slot is rewritten before insertion.
#[derive(Debug)]
pub struct PrototypeBuilder {
    registry: PrototypeRegistry,
    room_exemplar: String,
    door_exemplar: String,
    maze: Maze,
    finished: bool,
}

impl PrototypeBuilder {
    pub fn new(
        registry: PrototypeRegistry,
        room_exemplar: impl Into<String>,
        door_exemplar: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            room_exemplar: room_exemplar.into(),
            door_exemplar: door_exemplar.into(),
            maze: Maze::new(),
            finished: false,
        }
    }
}

impl MazeBuilder for PrototypeBuilder {
    fn build_room(&mut self, number: RoomId) -> Result<(), MazeError> {
        let mut room = self.registry.clone_room(&self.room_exemplar)?;
        room.number = number;
        self.maze.add_room(room)?;
        Ok(())
    }

    fn build_door(&mut self, a: RoomId, b: RoomId) -> Result<(), MazeError> {
        let key = DoorKey::new(a, b)?;
        let mut door = self.registry.clone_door(&self.door_exemplar)?;
        door.key = key;
        self.maze.add_door(door)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<&Maze, MazeError> {
        finish_assembly(&self.maze, &mut self.finished)
    }
}
