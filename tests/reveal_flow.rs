use sightline::{
    EntranceSpec, IntersectionEvent, LayoutMap, Millis, RecordingRunner, Rect, RevealDecl,
    RevealEngine, RevealState, RunnerRecord, Scene, Session, Vec2,
};

fn scene() -> Scene {
    let s = include_str!("data/portfolio_scene.json");
    serde_json::from_str(s).unwrap()
}

fn layout() -> LayoutMap {
    [
        ("navbar", Rect::new(0.0, 0.0, 1280.0, 64.0)),
        ("hero-backdrop", Rect::new(0.0, 0.0, 1280.0, 800.0)),
        ("hero-title", Rect::new(200.0, 200.0, 1080.0, 260.0)),
        ("hero-subtitle", Rect::new(200.0, 280.0, 1080.0, 330.0)),
        ("card-0", Rect::new(100.0, 900.0, 500.0, 1100.0)),
        ("card-1", Rect::new(100.0, 1150.0, 500.0, 1350.0)),
        ("card-2", Rect::new(100.0, 1400.0, 500.0, 1600.0)),
        ("skill-rust", Rect::new(100.0, 1900.0, 700.0, 1930.0)),
    ]
    .into_iter()
    .map(|(id, rect)| (id.to_string(), rect))
    .collect()
}

fn drive(script: &[f64]) -> Vec<RunnerRecord> {
    let mut session = Session::mount(&scene(), layout(), RecordingRunner::new()).unwrap();
    for &y in script {
        session.scroll_to(Vec2::new(0.0, y));
    }
    session.complete("skill-rust");
    session.into_runner().into_records()
}

fn entrances(records: &[RunnerRecord]) -> Vec<(&str, Millis)> {
    records
        .iter()
        .filter_map(|r| match r {
            RunnerRecord::Entrance { id, delay, .. } => Some((id.as_str(), *delay)),
            _ => None,
        })
        .collect()
}

const SCRIPT: &[f64] = &[0.0, 500.0, 900.0, 1300.0, 0.0, 1300.0, 600.0];

#[test]
fn every_entrance_fires_exactly_once() {
    let records = drive(SCRIPT);
    let fired = entrances(&records);
    let mut ids: Vec<&str> = fired.iter().map(|(id, _)| *id).collect();
    ids.sort_unstable();
    assert_eq!(
        ids,
        vec![
            "card-0",
            "card-1",
            "card-2",
            "hero-subtitle",
            "hero-title",
            "skill-rust"
        ]
    );
}

#[test]
fn stagger_delays_follow_declaration_order() {
    let records = drive(SCRIPT);
    let fired = entrances(&records);
    let delay_of = |wanted: &str| {
        fired
            .iter()
            .find(|(id, _)| *id == wanted)
            .map(|(_, d)| *d)
            .unwrap()
    };
    assert_eq!(delay_of("card-0"), Millis(0));
    assert_eq!(delay_of("card-1"), Millis(200));
    assert_eq!(delay_of("card-2"), Millis(400));
    // The subtitle's delay is plain, no stagger in its group.
    assert_eq!(delay_of("hero-subtitle"), Millis(150));
}

#[test]
fn navbar_toggles_on_every_crossing() {
    let records = drive(SCRIPT);
    let toggles: Vec<bool> = records
        .iter()
        .filter_map(|r| match r {
            RunnerRecord::Active { id, active } if id == "navbar" => Some(*active),
            _ => None,
        })
        .collect();
    // Down, back to top, down again.
    assert_eq!(toggles, vec![true, false, true]);
}

#[test]
fn backdrop_binding_tracks_scroll_progress() {
    let records = drive(SCRIPT);
    let applies: Vec<f64> = records
        .iter()
        .filter_map(|r| match r {
            RunnerRecord::Apply { id, props } if id == "hero-backdrop" => Some(props.translate.y),
            _ => None,
        })
        .collect();
    assert_eq!(applies.len(), SCRIPT.len());
    assert_eq!(applies[0], 0.0);
    assert_eq!(applies[1], 150.0);
    // Past the region end the value pins.
    assert_eq!(applies[3], 240.0);
    assert_eq!(applies[4], 0.0);
}

#[test]
fn identical_scripts_produce_identical_traces() {
    assert_eq!(drive(SCRIPT), drive(SCRIPT));
}

// The canonical threshold walk, straight against the engine.
#[test]
fn threshold_walk_fires_once_at_crossing() {
    let mut engine = RevealEngine::new();
    let mut decl = RevealDecl::new("el", EntranceSpec::fade_up(24.0));
    decl.threshold = 0.5;
    engine.register(decl);

    let ev = |is_intersecting, ratio| IntersectionEvent {
        id: "el".to_string(),
        is_intersecting,
        ratio,
    };

    assert!(engine.on_intersection(&ev(true, 0.3)).is_empty());
    assert_eq!(engine.state("el"), Some(RevealState::Pending));

    let fired = engine.on_intersection(&ev(true, 0.6));
    assert_eq!(
        fired
            .iter()
            .filter(|a| matches!(a, sightline::Action::StartEntrance { .. }))
            .count(),
        1
    );

    assert!(engine.on_intersection(&ev(false, 0.0)).is_empty());
}
