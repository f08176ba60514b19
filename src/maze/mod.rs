//! Maze domain model and its interchangeable construction strategies.
//!
//! One graph vocabulary (rooms, doors, the maze aggregate) behind several ways
//! of assembling it: direct building, factory-driven families, blueprint
//! recipes with overridable hooks, and exemplar cloning. Every path funnels
//! through the same validation in [`Maze`], so a finished maze satisfies the
//! same structural invariants no matter which strategy produced it. A
//! process-wide shared instance lives in [`shared`].

pub mod blueprint;
pub mod builder;
pub mod errors;
pub mod factory;
pub mod model;
pub mod prototype;
pub mod seed;
pub mod shared;
pub mod types;

pub use blueprint::{MazeBlueprint, StandardBlueprint};
pub use builder::{DirectBuilder, FactoryBuilder, MazeBuilder, PrototypeBuilder};
pub use errors::MazeError;
pub use factory::{ComponentFactory, ThemedFactory};
pub use model::Maze;
pub use prototype::{Exemplar, PrototypeRegistry};
pub use seed::{DoorSeed, MazeLayout};
pub use shared::{get_instance, reset, SharedMaze};
pub use types::{Door, DoorKey, Observation, Room, RoomId, Theme};
