use std::sync::Arc;

use hexmap_core::{
    Direction, EditorCommand, ErrorKind, HexCoordinate, MapConfig, TerrainType, TileChange,
};
use hexmap_runtime::{
    EditorSession, Event, EventBus, InMemoryMapRepository, InputEvent, MapEvent, MapRepository,
    MemoryTextureProvider, RuntimeConfig, RuntimeError, SessionEvent, Topic, ViewEvent,
};
use tokio::sync::broadcast::Receiver;

async fn session_with(repository: Arc<dyn MapRepository>) -> EditorSession<char> {
    let provider = Arc::new(MemoryTextureProvider::from_fn(|terrain: TerrainType| {
        terrain.as_ref().chars().next().unwrap_or('?')
    }));
    EditorSession::start(
        &RuntimeConfig::default(),
        provider,
        EventBus::new(),
        repository,
    )
    .await
    .expect("textures resolve")
}

fn drain(rx: &mut Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn keyboard_session_over_the_handler_registry() {
    let repository = Arc::new(InMemoryMapRepository::new());
    let mut session = session_with(repository.clone()).await;
    let registry = EditorSession::<char>::default_handlers();
    let mut map_rx = session.bus().subscribe(Topic::Map);

    for direction in [
        Direction::Down,
        Direction::Down,
        Direction::Right,
        Direction::Right,
        Direction::Right,
    ] {
        registry
            .dispatch(&mut session, &InputEvent::Move(direction))
            .unwrap();
    }
    assert_eq!(session.engine().cursor(), HexCoordinate::new(3, 2));
    assert!(session.engine().tile_under_cursor().is_none());

    registry
        .dispatch(&mut session, &InputEvent::SelectTerrain(TerrainType::Wood))
        .unwrap();
    registry
        .dispatch(&mut session, &InputEvent::PlaceAtCursor)
        .unwrap();
    assert_eq!(session.engine().info_text(), "Terrain tile of type Wood");

    registry
        .dispatch(&mut session, &InputEvent::SelectTerrain(TerrainType::Sheep))
        .unwrap();
    registry
        .dispatch(&mut session, &InputEvent::PlaceAtCursor)
        .unwrap();
    assert!(session.engine().map().is_empty());

    let events = drain(&mut map_rx);
    let changes: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            Event::Map(MapEvent::TileChanged(change)) => Some(change.is_added()),
            _ => None,
        })
        .collect();
    assert_eq!(changes, vec![true, false]);

    registry
        .dispatch(
            &mut session,
            &InputEvent::Save {
                name: "empty".into(),
            },
        )
        .unwrap();
    assert_eq!(repository.load("empty").unwrap(), "[]");
}

#[tokio::test]
async fn cursor_and_fog_changes_announce_visibility() {
    let mut session = session_with(Arc::new(InMemoryMapRepository::new())).await;
    let mut view_rx = session.bus().subscribe(Topic::View);

    session.apply(EditorCommand::SetFog(true)).unwrap();
    session
        .apply(EditorCommand::Move(Direction::Right))
        .unwrap();
    // Blocked at the top edge: nothing to announce.
    session.apply(EditorCommand::Move(Direction::Up)).unwrap();

    let events = drain(&mut view_rx);
    assert_eq!(
        events,
        vec![
            Event::View(ViewEvent::FogToggled { enabled: true }),
            Event::View(ViewEvent::VisibilityRecomputed {
                generation: 1,
                hidden: session_hidden_after_first_toggle(),
            }),
            Event::View(ViewEvent::CursorMoved {
                position: HexCoordinate::new(1, 0)
            }),
            Event::View(ViewEvent::VisibilityRecomputed {
                generation: 2,
                hidden: session.engine().fog().hidden().count(),
            }),
        ]
    );
}

/// Cells hidden with the cursor at the origin corner.
fn session_hidden_after_first_toggle() -> usize {
    let config = MapConfig::default();
    let visible = hexmap_core::neighbors_in_range(HexCoordinate::ORIGIN, config.fog_radius).len();
    config.cell_count() - visible
}

#[tokio::test]
async fn save_then_load_round_trips_through_the_repository() {
    let repository = Arc::new(InMemoryMapRepository::new());
    let mut session = session_with(repository.clone()).await;

    session
        .apply(EditorCommand::Place(HexCoordinate::new(3, 2)))
        .unwrap();
    session
        .apply(EditorCommand::SelectTerrain(TerrainType::Ore))
        .unwrap();
    session
        .apply(EditorCommand::Place(HexCoordinate::new(0, 0)))
        .unwrap();
    assert_eq!(session.save("island").unwrap(), 2);

    let mut restored = session_with(repository).await;
    let mut map_rx = restored.bus().subscribe(Topic::Map);
    assert_eq!(restored.load("island").unwrap(), 2);
    assert_eq!(restored.engine().map(), session.engine().map());
    assert_eq!(
        drain(&mut map_rx),
        vec![Event::Map(MapEvent::Loaded {
            name: Some("island".into()),
            tiles: 2
        })]
    );
}

#[tokio::test]
async fn saved_maps_are_listed_and_detected() {
    let repository = Arc::new(InMemoryMapRepository::with_map("coast", "[]"));
    let mut session = session_with(repository).await;

    assert!(session.has_saved("coast"));
    assert!(!session.has_saved("island"));

    session.save("island").unwrap();
    assert!(session.has_saved("island"));
    assert_eq!(
        session.saved_maps().unwrap(),
        vec!["coast".to_string(), "island".to_string()]
    );
}

#[tokio::test]
async fn loading_a_tile_outside_the_grid_is_rejected() {
    let repository = Arc::new(InMemoryMapRepository::with_map(
        "wide",
        r#"[{"x":25,"y":3,"terrain":"Ore","label":""}]"#,
    ));
    let mut session = session_with(repository).await;
    session
        .apply(EditorCommand::Place(HexCoordinate::new(1, 1)))
        .unwrap();
    let before = session.engine().map().clone();

    let err = session.load("wide").unwrap_err();
    assert_eq!(
        err.as_map_error().map(|e| e.kind()),
        Some(ErrorKind::MalformedRecord)
    );
    assert_eq!(session.engine().map(), &before);
}

#[tokio::test]
async fn rejected_load_leaves_the_map_untouched() {
    let repository = Arc::new(InMemoryMapRepository::with_map(
        "lava",
        r#"[{"x":1,"y":1,"terrain":"Lava","label":""}]"#,
    ));
    repository.save("garbage", "{not json").unwrap();

    let mut session = session_with(repository).await;
    let mut session_rx = session.bus().subscribe(Topic::Session);
    let change = match session
        .apply(EditorCommand::Place(HexCoordinate::new(5, 5)))
        .unwrap()
    {
        hexmap_core::CommandOutcome::Tile(change) => change,
        other => panic!("unexpected outcome {other:?}"),
    };
    assert!(matches!(change, TileChange::Added(_)));
    let before = session.engine().map().clone();

    let err = session.load("lava").unwrap_err();
    assert_eq!(
        err.as_map_error().map(|e| e.kind()),
        Some(ErrorKind::UnknownTerrain)
    );
    assert_eq!(session.engine().map(), &before);

    let err = session.load("garbage").unwrap_err();
    assert_eq!(
        err.as_map_error().map(|e| e.kind()),
        Some(ErrorKind::ParseFailure)
    );
    assert_eq!(session.engine().map(), &before);

    let err = session.load("missing").unwrap_err();
    assert!(matches!(err, RuntimeError::Repository(_)));

    let failures = drain(&mut session_rx)
        .into_iter()
        .filter(|event| matches!(event, Event::Session(SessionEvent::LoadFailed { .. })))
        .count();
    assert_eq!(failures, 3);
}

#[tokio::test]
async fn handler_failures_are_reported_not_propagated() {
    let mut session = session_with(Arc::new(InMemoryMapRepository::new())).await;
    let registry = EditorSession::<char>::default_handlers();

    // Load handler errors are important, not critical: dispatch succeeds.
    let ran = registry
        .dispatch(
            &mut session,
            &InputEvent::Load {
                name: "missing".into(),
            },
        )
        .unwrap();
    assert_eq!(ran, 0);
}

#[tokio::test]
async fn clicks_place_tiles_at_the_drawn_cell() {
    let mut session = session_with(Arc::new(InMemoryMapRepository::new())).await;
    let registry = EditorSession::<char>::default_handlers();

    let target = HexCoordinate::new(7, 5);
    let center = session.engine().layout().center(target);
    registry
        .dispatch(
            &mut session,
            &InputEvent::Click {
                x: center.x,
                y: center.y,
            },
        )
        .unwrap();
    assert!(session.engine().map().contains(target));

    registry
        .dispatch(&mut session, &InputEvent::Click { x: 1300.0, y: 10.0 })
        .unwrap();
    assert_eq!(session.engine().map().len(), 1);
}
