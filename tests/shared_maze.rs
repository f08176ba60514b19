//! Integration test for the process-wide shared maze handle.
//!
//! The handle is global to the test process, so the whole lifecycle runs in a
//! single test: concurrent first access, theme staleness on repeat calls, and
//! replacement via reset.

use std::sync::{Arc, Barrier};
use std::thread;

use mazekit::maze::{shared, Room, Theme};

#[test]
fn shared_maze_lifecycle() {
    // Eight threads race the very first get_instance; exactly one instance
    // may be constructed and every caller must see it.
    let barrier = Arc::new(Barrier::new(8));
    let racers: Vec<_> = (0..8)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                shared::get_instance(&Theme::from("classic"))
            })
        })
        .collect();
    let instances: Vec<_> = racers
        .into_iter()
        .map(|racer| racer.join().expect("racer thread"))
        .collect();

    let first = &instances[0];
    for other in &instances[1..] {
        assert!(Arc::ptr_eq(first, other), "racers saw different instances");
        assert_eq!(other.id(), first.id());
    }
    assert_eq!(first.theme(), &Theme::from("classic"));

    // Construction through the handle is visible to later fetches.
    first
        .maze()
        .lock()
        .expect("maze lock")
        .add_room(Room::new(1, Theme::from("classic")))
        .expect("add room");

    // A repeat call with a different theme returns the same stale instance.
    let still_first = shared::get_instance(&Theme::from("enchanted"));
    assert!(Arc::ptr_eq(first, &still_first));
    assert_eq!(still_first.theme(), &Theme::from("classic"));
    assert_eq!(still_first.maze().lock().expect("maze lock").room_count(), 1);

    // Reset swaps in a fresh, empty instance with the new theme.
    let replacement = shared::reset(&Theme::from("enchanted"));
    assert!(!Arc::ptr_eq(first, &replacement));
    assert_ne!(replacement.id(), first.id());
    assert_eq!(replacement.theme(), &Theme::from("enchanted"));
    assert!(replacement.maze().lock().expect("maze lock").is_empty());

    // Any later fetch returns the replacement, whatever theme it asks for.
    let fetched = shared::get_instance(&Theme::from("classic"));
    assert!(Arc::ptr_eq(&replacement, &fetched));

    // The old handle stays usable for whoever still holds it.
    assert_eq!(first.maze().lock().expect("maze lock").room_count(), 1);
}
