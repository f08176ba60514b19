//! # Mazekit - A Maze Construction Kit
//!
//! Mazekit models a small world of rooms connected by doors and offers several
//! interchangeable ways to assemble it. Every construction path enforces the
//! same graph invariants, so callers pick a strategy for ergonomics, not
//! correctness.
//!
//! ## Features
//!
//! - **One Domain Model**: Rooms, doors, and the maze aggregate with
//!   graph-closure validation at every mutation.
//! - **Interchangeable Construction**: Direct building, factory-driven
//!   component families, blueprint recipes with overridable hooks, and
//!   exemplar cloning - all behind one builder contract.
//! - **Themed Families**: A factory binds one theme tag and stamps it on every
//!   component it produces; swapping factories reflavors a maze without
//!   touching connectivity.
//! - **Shared Instance**: A process-wide maze handle, created lazily and
//!   replaced only by an explicit reset, safe under concurrent first access.
//! - **Data-Driven Layouts**: Floor plans load from TOML seed files so
//!   operators can swap layouts without recompiling.
//!
//! ## Quick Start
//!
//! ```rust
//! use mazekit::maze::{DirectBuilder, MazeBuilder, Theme};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut builder = DirectBuilder::new(Theme::from("classic"));
//!     builder.build_room(1)?;
//!     builder.build_room(2)?;
//!     builder.build_door(1, 2)?;
//!
//!     let maze = builder.finish()?;
//!     assert_eq!(maze.room_count(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`maze`] - Domain model, construction strategies, prototype registry, and
//!   the shared maze handle
//! - [`config`] - Configuration management and validation
//!
//! See `src/main.rs` for the CLI that sequences these pieces end to end.

pub mod config;
pub mod maze;
