//! Blueprint construction: a fixed assembly walk with overridable component
//! hooks.
//!
//! Where a [`FactoryBuilder`](crate::maze::FactoryBuilder) takes its factory as
//! a value, a blueprint bakes the component constructors into the type itself:
//! implementors override `make_room` / `make_door` and inherit the provided
//! `construct` walk unchanged. Useful when a maze flavor is a compile-time
//! decision rather than a runtime parameter.

use log::debug;

use crate::maze::errors::MazeError;
use crate::maze::model::Maze;
use crate::maze::seed::MazeLayout;
use crate::maze::types::{Door, DoorKey, Room, RoomId, Theme};

/// A self-contained recipe for one maze.
///
/// The provided `construct` realizes [`layout`](Self::layout) through the two
/// hook methods. Overriding a hook changes what the components are, never how
/// the graph is assembled or validated.
pub trait MazeBlueprint {
    /// The family tag for components the default hooks produce.
    fn theme(&self) -> Theme;

    /// The floor plan to realize.
    fn layout(&self) -> MazeLayout {
        MazeLayout::canonical()
    }

    fn make_room(&self, number: RoomId) -> Room {
        Room::new(number, self.theme())
    }

    fn make_door(&self, key: DoorKey) -> Door {
        Door::new(key, self.theme())
    }

    /// Assemble the layout into a maze via the hooks.
    ///
    /// Shares the construction error semantics: `IncompleteMaze` for an empty
    /// layout, and the usual room/door validation failures from [`Maze`].
    fn construct(&self) -> Result<Maze, MazeError> {
        let layout = self.layout();
        let mut maze = Maze::new();
        for &number in &layout.rooms {
            maze.add_room(self.make_room(number))?;
        }
        for seed in &layout.doors {
            let key = DoorKey::new(seed.a, seed.b)?;
            maze.add_door(self.make_door(key))?;
        }
        if maze.is_empty() {
            return Err(MazeError::IncompleteMaze);
        }
        debug!(
            "blueprint constructed: {} rooms, {} doors (theme: {})",
            maze.room_count(),
            maze.door_count(),
            self.theme()
        );
        Ok(maze)
    }
}

/// The stock blueprint: a theme plus a layout, default hooks throughout.
#[derive(Debug, Clone)]
pub struct StandardBlueprint {
    theme: Theme,
    layout: MazeLayout,
}

impl StandardBlueprint {
    pub fn new(theme: Theme, layout: MazeLayout) -> Self {
        Self { theme, layout }
    }
}

impl MazeBlueprint for StandardBlueprint {
    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn layout(&self) -> MazeLayout {
        self.layout.clone()
    }
}
