//! Process-wide shared maze handle.
//!
//! At most one maze is ever live here: created lazily on the first
//! [`get_instance`] call and replaced only by an explicit [`reset`]. Both
//! operations run under one lock, so concurrent first callers all observe the
//! same handle and a reset is a clean happens-before edge for everyone after
//! it. The handle is memory-only; it does not outlive the process.

use std::sync::{Arc, Mutex, OnceLock};

use log::{debug, info};
use uuid::Uuid;

use crate::maze::model::Maze;
use crate::maze::types::Theme;

static SHARED_MAZE: OnceLock<Mutex<Option<Arc<SharedMaze>>>> = OnceLock::new();

/// The live shared maze plus the theme it was created with.
///
/// Each instance carries a fresh `Uuid`, so logs and callers can tell a
/// replacement from the original even though both are "the" shared maze.
#[derive(Debug)]
pub struct SharedMaze {
    id: Uuid,
    theme: Theme,
    maze: Mutex<Maze>,
}

impl SharedMaze {
    fn create(theme: Theme) -> Arc<Self> {
        let id = Uuid::new_v4();
        info!("shared maze {} created (theme: {})", id, theme);
        Arc::new(Self {
            id,
            theme,
            maze: Mutex::new(Maze::new()),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The maze itself. Lock it to build or inspect; the shared handle makes
    /// no attempt to order construction steps from different owners.
    pub fn maze(&self) -> &Mutex<Maze> {
        &self.maze
    }
}

fn handle_cell() -> &'static Mutex<Option<Arc<SharedMaze>>> {
    SHARED_MAZE.get_or_init(|| Mutex::new(None))
}

/// Fetch the shared maze, creating an empty one tagged `theme` on first call.
///
/// Once an instance is live, the theme argument is ignored, even when it
/// differs from the live instance's theme. That staleness is intentional and
/// logged; use [`reset`] to actually swap themes.
pub fn get_instance(theme: &Theme) -> Arc<SharedMaze> {
    let mut guard = handle_cell().lock().expect("shared maze mutex poisoned");
    match guard.as_ref() {
        Some(handle) => {
            if handle.theme() != theme {
                debug!(
                    "shared maze {} already live (theme: {}); ignoring requested theme {}",
                    handle.id(),
                    handle.theme(),
                    theme
                );
            }
            Arc::clone(handle)
        }
        None => {
            let handle = SharedMaze::create(theme.clone());
            *guard = Some(Arc::clone(&handle));
            handle
        }
    }
}

/// Unconditionally replace the shared maze with a fresh, empty one.
///
/// The previous instance stays valid for anyone still holding its `Arc`; it is
/// simply no longer what [`get_instance`] hands out.
pub fn reset(theme: &Theme) -> Arc<SharedMaze> {
    let mut guard = handle_cell().lock().expect("shared maze mutex poisoned");
    let handle = SharedMaze::create(theme.clone());
    if let Some(previous) = guard.replace(Arc::clone(&handle)) {
        debug!(
            "shared maze {} replaced by {}",
            previous.id(),
            handle.id()
        );
    }
    handle
}

#[cfg(test)]
pub(crate) fn clear_for_tests() {
    if let Some(cell) = SHARED_MAZE.get() {
        let mut guard = cell.lock().expect("shared maze mutex poisoned");
        *guard = None;
    }
}
