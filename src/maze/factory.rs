//! Component factories: produce rooms and doors as a matched family.
//!
//! A factory binds its theme once, at construction, and tags every component it
//! produces with it. Swapping the factory handed to a builder changes the
//! maze's flavor without touching connectivity.

use crate::maze::types::{Door, DoorKey, Room, RoomId, Theme};

/// Produces themed rooms and doors.
///
/// Creation is pure: no validation, no side effects, no failure modes. Identity
/// (`number`, `DoorKey`) is supplied by the caller and keys are validated before
/// a factory ever sees them, so the graph rules stay in [`Maze`].
///
/// [`Maze`]: crate::maze::Maze
pub trait ComponentFactory {
    /// The family tag stamped on every component this factory produces.
    fn theme(&self) -> &Theme;

    fn create_room(&self, number: RoomId) -> Room {
        Room::new(number, self.theme().clone())
    }

    fn create_door(&self, key: DoorKey) -> Door {
        Door::new(key, self.theme().clone())
    }
}

/// The stock factory: binds an arbitrary theme tag and nothing else.
///
/// Two `ThemedFactory` instances with different tags are the usual way to get
/// two component families; a custom `ComponentFactory` implementation is only
/// needed when components should differ beyond the tag.
#[derive(Debug, Clone)]
pub struct ThemedFactory {
    theme: Theme,
}

impl ThemedFactory {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl ComponentFactory for ThemedFactory {
    fn theme(&self) -> &Theme {
        &self.theme
    }
}
