//! Integration tests for the construction strategies.
//!
//! Every strategy realizes the same layout against the same validation rules,
//! so finished mazes must agree on connectivity no matter which path built
//! them; only the component flavor may differ.

use std::collections::BTreeSet;

use mazekit::maze::{
    DirectBuilder, Door, DoorKey, DoorSeed, FactoryBuilder, Maze, MazeBlueprint, MazeBuilder,
    MazeError, MazeLayout, PrototypeBuilder, PrototypeRegistry, Room, RoomId, StandardBlueprint,
    Theme, ThemedFactory,
};

fn test_layout() -> MazeLayout {
    MazeLayout {
        rooms: (1..=12).collect(),
        doors: vec![
            DoorSeed { a: 1, b: 2 },
            DoorSeed { a: 2, b: 3 },
            DoorSeed { a: 3, b: 4 },
            DoorSeed { a: 4, b: 5 },
            DoorSeed { a: 5, b: 6 },
            DoorSeed { a: 6, b: 7 },
            DoorSeed { a: 7, b: 8 },
            DoorSeed { a: 8, b: 9 },
            DoorSeed { a: 9, b: 10 },
            DoorSeed { a: 10, b: 11 },
            DoorSeed { a: 11, b: 12 },
            DoorSeed { a: 12, b: 1 },
            DoorSeed { a: 1, b: 7 },
            DoorSeed { a: 4, b: 10 },
        ],
    }
}

fn prototype_builder(theme: &Theme) -> PrototypeBuilder {
    let mut registry = PrototypeRegistry::new();
    registry.register("room", Room::new(0, theme.clone()));
    registry.register(
        "door",
        Door::new(DoorKey::new(0, 1).expect("key"), theme.clone()),
    );
    PrototypeBuilder::new(registry, "room", "door")
}

fn finish(builder: &mut dyn MazeBuilder, layout: &MazeLayout) -> Maze {
    layout.apply(builder).expect("apply layout");
    builder.finish().expect("finish").clone()
}

fn room_numbers(maze: &Maze) -> BTreeSet<RoomId> {
    maze.rooms().map(|room| room.number).collect()
}

fn door_keys(maze: &Maze) -> BTreeSet<DoorKey> {
    maze.doors().iter().map(|door| door.key).collect()
}

#[test]
fn all_strategies_agree_on_connectivity() {
    let theme = Theme::from("classic");
    let layout = test_layout();

    let direct = finish(&mut DirectBuilder::new(theme.clone()), &layout);
    let factory = finish(
        &mut FactoryBuilder::new(ThemedFactory::new(theme.clone())),
        &layout,
    );
    let prototype = finish(&mut prototype_builder(&theme), &layout);
    let blueprint = StandardBlueprint::new(theme, layout)
        .construct()
        .expect("construct");

    for maze in [&direct, &factory, &prototype, &blueprint] {
        maze.validate().expect("closure invariant");
        assert_eq!(room_numbers(maze), room_numbers(&direct));
        assert_eq!(door_keys(maze), door_keys(&direct));
    }
}

#[test]
fn factory_choice_changes_flavor_only() {
    let layout = test_layout();
    let classic = finish(
        &mut FactoryBuilder::new(ThemedFactory::new(Theme::from("classic"))),
        &layout,
    );
    let enchanted = finish(
        &mut FactoryBuilder::new(ThemedFactory::new(Theme::from("enchanted"))),
        &layout,
    );

    assert_eq!(room_numbers(&classic), room_numbers(&enchanted));
    assert_eq!(door_keys(&classic), door_keys(&enchanted));
    assert!(classic.rooms().all(|r| r.theme == Theme::from("classic")));
    assert!(enchanted.rooms().all(|r| r.theme == Theme::from("enchanted")));
}

#[test]
fn error_semantics_are_shared_across_strategies() {
    let theme = Theme::from("classic");
    let mut builders: Vec<Box<dyn MazeBuilder>> = vec![
        Box::new(DirectBuilder::new(theme.clone())),
        Box::new(FactoryBuilder::new(ThemedFactory::new(theme.clone()))),
        Box::new(prototype_builder(&theme)),
    ];

    for builder in builders.iter_mut() {
        builder.build_room(5).expect("room 5");
        assert!(matches!(
            builder.build_room(5).unwrap_err(),
            MazeError::DuplicateRoom(5)
        ));
        assert!(matches!(
            builder.build_door(5, 5).unwrap_err(),
            MazeError::SelfLoop(5)
        ));
        assert!(matches!(
            builder.build_door(5, 6).unwrap_err(),
            MazeError::UnknownRoom(6)
        ));

        builder.build_room(6).expect("room 6");
        builder.build_door(5, 6).expect("door 5-6");
        assert!(matches!(
            builder.build_door(6, 5).unwrap_err(),
            MazeError::DuplicateDoor(5, 6)
        ));
    }
}

#[test]
fn traversal_behaves_identically_on_any_strategy_output() {
    let theme = Theme::from("classic");
    let layout = test_layout();

    for maze in [
        &mut finish(&mut DirectBuilder::new(theme.clone()), &layout),
        &mut StandardBlueprint::new(theme, layout.clone())
            .construct()
            .expect("construct"),
    ] {
        maze.enter(1).expect("enter 1");
        let observations = maze.enter(2).expect("enter 2");
        assert_eq!(observations.len(), 2, "room entered plus one door opened");
        assert!(maze.door(DoorKey::new(1, 2).expect("key")).expect("door").open);
        assert!(!maze.door(DoorKey::new(2, 3).expect("key")).expect("door").open);
    }
}
