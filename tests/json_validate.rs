use sightline::Scene;

#[test]
fn json_fixture_validates() {
    let s = include_str!("data/portfolio_scene.json");
    let scene: Scene = serde_json::from_str(s).unwrap();
    scene.validate().unwrap();
}

#[test]
fn json_fixture_round_trips() {
    let s = include_str!("data/portfolio_scene.json");
    let scene: Scene = serde_json::from_str(s).unwrap();
    let re = serde_json::to_string_pretty(&scene).unwrap();
    let back: Scene = serde_json::from_str(&re).unwrap();
    assert_eq!(back.groups.len(), scene.groups.len());
    assert_eq!(back.groups[1].members[2].id, "card-2");
    assert_eq!(back.toggles[0].activate_above_px, 50.0);
}

#[test]
fn duplicated_id_fails_validation() {
    let s = include_str!("data/portfolio_scene.json");
    let mut scene: Scene = serde_json::from_str(s).unwrap();
    let dup = scene.groups[0].members[0].clone();
    scene.groups[1].members.push(dup);
    assert!(scene.validate().is_err());
}
