mod common;

use common::*;
use fnv::FnvHashMap;
use globe_core::constants::*;
use globe_core::resources::ResourceKind;
use globe_core::{Command, GeoCoord, GlobeEvent, SceneSnapshot, StationId, Viewport};
use glam::{Vec2, Vec3};

fn opacity_of(engine: &globe_core::GlobeEngine, s: &str) -> f32 {
    engine
        .markers()
        .find(&id(s))
        .map(|m| m.visual.opacity)
        .expect("marker")
}

#[test]
fn region_focus_dims_outsiders_and_owns_one_region_marker() {
    let mut engine = loaded_engine();
    engine.focus_region_with(&[id("front")], GeoCoord::new(0.0, -90.0), 0xff0000);

    assert_eq!(opacity_of(&engine, "front"), REGION_MEMBER_OPACITY);
    assert_eq!(opacity_of(&engine, "back"), REGION_OUTSIDER_OPACITY);
    assert_eq!(engine.ledger().live_of(ResourceKind::RegionMarker), 1);

    engine.focus_region_with(&[id("back")], GeoCoord::new(0.0, 90.0), 0x00ff00);
    assert_eq!(engine.ledger().live_of(ResourceKind::RegionMarker), 1);
    assert_eq!(opacity_of(&engine, "front"), REGION_OUTSIDER_OPACITY);
    assert_eq!(
        engine.drain_events(),
        vec![GlobeEvent::RegionFocused(None), GlobeEvent::RegionFocused(None)]
    );
}

#[test]
fn region_focus_flies_the_camera_over_the_center() {
    let mut engine = loaded_engine();
    engine.focus_region_with(&[id("front")], GeoCoord::new(0.0, -90.0), 0xff0000);

    run_frames(&mut engine, 0.0, 480.0);
    let mid = engine.camera().eye;
    assert!(mid.z < 15.0 && mid.z > 12.5);

    run_frames(&mut engine, 480.0, 1200.0);
    let eye = engine.camera().eye;
    assert!(approx(eye.length(), 5.0 * REGION_FOCUS_ALTITUDE, 1e-3), "{eye:?}");
    assert!(approx(eye.z, 12.5, 1e-3));
    assert_eq!(engine.globe_yaw(), 0.0);
}

#[test]
fn clearing_region_focus_restores_base_opacity() {
    let mut engine = loaded_engine();
    assert!(engine.focus_region("Oceania"));
    assert_eq!(engine.focused_region(), Some("Oceania"));
    assert_eq!(opacity_of(&engine, "south"), REGION_MEMBER_OPACITY);
    assert_eq!(opacity_of(&engine, "north"), REGION_OUTSIDER_OPACITY);

    assert!(engine.clear_region_focus());
    assert!(!engine.clear_region_focus());
    assert!(engine
        .markers()
        .iter()
        .all(|m| m.visual.opacity == MARKER_BASE_OPACITY));
    assert_eq!(engine.ledger().live_of(ResourceKind::RegionMarker), 0);
    assert!(engine.region_marker().is_none());
    assert!(!engine.focus_region("Atlantis"));
}

#[test]
fn selection_stays_opaque_inside_a_dimmed_globe() {
    let mut engine = loaded_engine();
    engine.select_station(&id("back"));
    engine.focus_region_with(&[id("front")], GeoCoord::new(0.0, -90.0), 0xff0000);
    assert_eq!(opacity_of(&engine, "back"), 1.0);

    engine.select_station(&id("north"));
    assert_eq!(opacity_of(&engine, "back"), REGION_OUTSIDER_OPACITY);
    assert_eq!(opacity_of(&engine, "north"), 1.0);
}

#[test]
fn region_marker_pulses() {
    let mut engine = loaded_engine();
    engine.focus_region("Western Europe");
    for frame in 1..=120 {
        engine.tick(f64::from(frame) * 16.0);
        let marker = engine.region_marker().expect("region marker");
        assert!((0.8 - 1e-5..=1.2 + 1e-5).contains(&marker.scale));
        assert!((0.4 - 1e-5..=0.8 + 1e-5).contains(&marker.opacity));
    }
}

#[test]
fn spin_to_random_returns_a_pool_member_roughly_uniformly() {
    let mut engine = loaded_engine();
    let pool = sample_stations();
    let mut counts: FnvHashMap<StationId, usize> = FnvHashMap::default();
    for _ in 0..5000 {
        let chosen = engine.spin_to_random(&pool).expect("non-empty pool");
        assert!(pool.iter().any(|s| s.id == chosen.id));
        *counts.entry(chosen.id).or_default() += 1;
    }
    assert_eq!(counts.len(), pool.len());
    for (station, n) in counts {
        assert!((850..=1150).contains(&n), "{station} drawn {n} times");
    }
}

#[test]
fn spin_with_an_empty_pool_does_nothing() {
    let mut engine = loaded_engine();
    assert!(engine.spin_to_random(&[]).is_none());
    assert!(!engine.is_spinning());
    assert!(!engine.roulette_pending());
    assert!(engine.drain_events().is_empty());
}

#[test]
fn roulette_counts_down_then_lands_and_selects() {
    let mut engine = loaded_engine();
    let pool = engine.stations().to_vec();
    let chosen = engine.spin_to_random(&pool).expect("station");
    assert_eq!(
        engine.drain_events(),
        vec![GlobeEvent::RouletteStarted(chosen.id.clone())]
    );
    assert!(engine.is_spinning());

    run_frames(&mut engine, 0.0, 1500.0);
    assert!(engine.globe_yaw() > 0.5);
    assert_eq!(engine.selection().current(), None);

    run_frames(&mut engine, 1500.0, 3600.0);
    assert!(!engine.is_spinning());
    assert!(!engine.roulette_pending());
    assert_eq!(
        engine.drain_events(),
        vec![
            GlobeEvent::RouletteCountdown(Some(2)),
            GlobeEvent::RouletteCountdown(Some(1)),
            GlobeEvent::RouletteCountdown(None),
            GlobeEvent::RouletteLanded(chosen.id.clone()),
            GlobeEvent::StationSelected(chosen.id.clone()),
        ]
    );
    assert_eq!(engine.selection().current(), Some(&chosen.id));
    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.history().latest().map(|s| &s.id), Some(&chosen.id));
}

#[test]
fn a_new_spin_supersedes_the_pending_one() {
    let mut engine = loaded_engine();
    let pool = sample_stations();
    engine.spin_to_random(&pool);
    run_frames(&mut engine, 0.0, 1500.0);
    let second = engine.spin_to_random(&pool).expect("station");
    run_frames(&mut engine, 1500.0, 6000.0);

    let landed: Vec<_> = engine
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            GlobeEvent::RouletteLanded(id) => Some(id),
            _ => None,
        })
        .collect();
    assert_eq!(landed, vec![second.id.clone()]);
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn queued_roulette_spins_over_the_catalog() {
    let mut engine = loaded_engine();
    engine.submit(Command::SpinToRandom);
    engine.tick(16.0);
    let events = engine.drain_events();
    assert!(matches!(events.as_slice(), [GlobeEvent::RouletteStarted(_)]));
    assert!(engine.is_spinning());
}

#[test]
fn idle_drift_follows_the_auto_rotate_toggle() {
    let mut engine = loaded_engine();
    engine.tick(16.0);
    assert!(approx(engine.globe_yaw(), AUTO_ROTATE_STEP, 1e-7));

    assert!(!engine.toggle_auto_rotate());
    engine.tick(32.0);
    assert!(approx(engine.globe_yaw(), AUTO_ROTATE_STEP, 1e-7));

    engine.submit(Command::ToggleAutoRotate);
    engine.tick(48.0);
    assert!(engine.auto_rotate());
    assert!(approx(engine.globe_yaw(), 2.0 * AUTO_ROTATE_STEP, 1e-7));

    engine.focus_region("Oceania");
    let before = engine.globe_yaw();
    run_frames(&mut engine, 48.0, 500.0);
    assert_eq!(engine.globe_yaw(), before);
}

#[test]
fn atmosphere_breathes_within_its_band() {
    let mut engine = loaded_engine();
    for frame in 1..=400 {
        engine.tick(f64::from(frame) * 16.0);
        let o = engine.atmosphere_opacity();
        assert!((0.05 - 1e-6..=0.15 + 1e-6).contains(&o));
    }
}

#[test]
fn marker_filter_matches_name_or_country() {
    let mut engine = loaded_engine();
    assert_eq!(engine.filter_markers("Polar"), 1);
    assert_eq!(engine.filter_markers("united"), 1);
    assert_eq!(engine.filter_markers("a"), 5);
    engine.submit(Command::FilterMarkers(String::new()));
    engine.tick(16.0);
    assert!(engine.markers().iter().all(|m| m.visible));
}

#[test]
fn orbit_zoom_and_reset() {
    let mut engine = loaded_engine();
    engine.zoom(0.5);
    engine.tick(16.0);
    assert!(approx(engine.camera().distance_to_target(), 8.0, 1e-4));

    engine.orbit(Vec2::new(120.0, 0.0));
    run_frames(&mut engine, 16.0, 400.0);
    let eye = engine.camera().eye;
    assert!(eye.x.abs() > 0.1);
    assert!(approx(eye.length(), 8.0, 1e-3));

    engine.submit(Command::ResetView);
    engine.tick(416.0);
    engine.reset_view();
    assert_eq!(engine.camera().eye, Vec3::new(0.0, 0.0, 15.0));
}

#[test]
fn resize_updates_the_camera_aspect() {
    let mut engine = loaded_engine();
    engine.submit(Command::Resize(Viewport::new(400.0, 800.0)));
    engine.tick(16.0);
    assert!(approx(engine.camera().aspect, 0.5, 1e-6));
    assert_eq!(engine.viewport(), Viewport::new(400.0, 800.0));
}

#[test]
fn scene_snapshot_mirrors_engine_state() {
    let mut engine = loaded_engine();
    engine.select_station(&id("front"));
    engine.focus_region("South America");
    run_frames(&mut engine, 0.0, 600.0);

    let mut scene = SceneSnapshot::new();
    scene.fill(&engine);
    let effects = engine.selection().effects().expect("effects");
    let particles = effects.trail.particles().len();
    assert!(particles > 0);
    assert_eq!(scene.spheres.len(), 1 + 5 + 1 + particles);
    assert_eq!(scene.rings.len(), effects.halo.rings().len());
    assert_eq!(scene.spheres[0].radius, 5.0);
    assert_eq!(scene.uniforms.params[2], engine.atmosphere_opacity());

    engine.filter_markers("polar");
    scene.fill(&engine);
    assert_eq!(scene.spheres.len(), 1 + 1 + 1 + particles);
}

#[test]
fn long_session_does_not_leak_draw_resources() {
    let mut engine = loaded_engine();
    let mut now = 0.0;
    for round in 0..6 {
        let target = ["front", "back", "north"][round % 3];
        engine.select_station(&id(target));
        engine.focus_region_with(&[id(target)], GeoCoord::new(10.0, 10.0), 0x123456);
        run_frames(&mut engine, now, now + 700.0);
        now += 700.0;
        if round % 2 == 1 {
            engine.clear_selection();
            engine.clear_region_focus();
        }
    }
    engine.clear_selection();
    engine.clear_region_focus();
    assert_eq!(engine.ledger().live_count(), 5);
}
