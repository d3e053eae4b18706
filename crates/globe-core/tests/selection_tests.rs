mod common;

use common::*;
use globe_core::constants::MARKER_BASE_OPACITY;
use globe_core::markers::MarkerRegistry;
use globe_core::resources::{ResourceKind, ResourceLedger};
use globe_core::{Command, GlobeEvent, Genre, PointerEvent, SelectionState};
use glam::Vec2;
use smallvec::smallvec;

fn center_click() -> PointerEvent {
    PointerEvent::Click {
        client: Vec2::new(VIEW_W / 2.0, VIEW_H / 2.0),
    }
}

#[test]
fn rebuild_creates_one_marker_per_station() {
    let mut ledger = ResourceLedger::new();
    let mut registry = MarkerRegistry::new();
    let stations = sample_stations();
    registry.rebuild(&stations, 5.0, &mut ledger);

    assert_eq!(registry.len(), stations.len());
    for (i, station) in stations.iter().enumerate() {
        let marker = registry.find(&station.id).expect("marker per station");
        assert_eq!(registry.index_of(&station.id), Some(i));
        assert!(approx(marker.position().length(), 5.0, 1e-4));
        assert_eq!(marker.visual.opacity, MARKER_BASE_OPACITY);
        assert_eq!(marker.visual.emissive, station.genre.color());
    }

    let mut order = Vec::new();
    registry.for_each(|i, m| order.push((i, m.station_id().clone())));
    assert_eq!(order[0], (0, id("front")));
    assert_eq!(order[4], (4, id("south")));
}

#[test]
fn rebuild_replaces_markers_and_skips_duplicate_ids() {
    let mut ledger = ResourceLedger::new();
    let mut registry = MarkerRegistry::new();
    registry.rebuild(&sample_stations(), 5.0, &mut ledger);
    let old = registry.find(&id("front")).map(|m| m.handle()).expect("front");

    let mut stations = sample_stations();
    stations.push(station("front", "Impostor", "Peru", 1.0, 1.0, Genre::Pop));
    registry.rebuild(&stations, 5.0, &mut ledger);

    assert_eq!(registry.len(), 5);
    assert_eq!(ledger.live_of(ResourceKind::Marker), 5);
    assert!(!ledger.is_live(old));
    let front = registry.find(&id("front")).expect("front");
    assert!(approx(front.position().z, 5.0, 1e-4));
}

#[test]
fn selecting_a_second_station_reverts_the_first() {
    let mut engine = loaded_engine();
    assert!(engine.select_station(&id("front")));
    assert!(engine.select_station(&id("back")));

    assert_eq!(highlighted_ids(&engine), vec![id("back")]);
    let front = engine.markers().find(&id("front")).expect("front");
    assert_eq!(front.visual, front.base_visual());

    let back = engine.markers().find(&id("back")).expect("back");
    let effects = engine.selection().effects().expect("effects for back");
    assert_eq!(effects.halo.anchor(), back.position());
    assert_eq!(effects.trail.origin(), back.position());
    assert_eq!(effects.halo.color(), Genre::News.color());

    assert_eq!(
        engine.drain_events(),
        vec![
            GlobeEvent::StationSelected(id("front")),
            GlobeEvent::StationSelected(id("back")),
        ]
    );
}

#[test]
fn switching_selection_releases_the_old_effects() {
    let mut engine = loaded_engine();
    engine.select_station(&id("front"));
    run_frames(&mut engine, 0.0, 800.0);
    assert!(engine.ledger().live_of(ResourceKind::Ring) > 0);
    assert!(engine.ledger().live_of(ResourceKind::Particle) > 0);

    engine.select_station(&id("north"));
    assert_eq!(engine.ledger().live_of(ResourceKind::Ring), 0);
    assert_eq!(engine.ledger().live_of(ResourceKind::Particle), 0);
}

#[test]
fn clear_releases_everything_and_is_idempotent() {
    let mut engine = loaded_engine();
    engine.select_station(&id("front"));
    run_frames(&mut engine, 0.0, 1000.0);

    assert!(engine.clear_selection());
    assert!(highlighted_ids(&engine).is_empty());
    assert!(engine.selection().effects().is_none());
    assert_eq!(engine.selection().state(), &SelectionState::Idle);
    assert_eq!(engine.ledger().live_of(ResourceKind::Ring), 0);
    assert_eq!(engine.ledger().live_of(ResourceKind::Particle), 0);

    assert!(!engine.clear_selection());
    let cleared = engine
        .drain_events()
        .into_iter()
        .filter(|e| *e == GlobeEvent::SelectionCleared)
        .count();
    assert_eq!(cleared, 1);
    assert_eq!(engine.ledger().live_count(), engine.markers().len());
}

#[test]
fn selecting_an_unknown_station_changes_nothing() {
    let mut engine = loaded_engine();
    engine.select_station(&id("front"));
    assert!(!engine.select_station(&id("ghost")));

    assert_eq!(engine.selection().current(), Some(&id("front")));
    assert_eq!(highlighted_ids(&engine), vec![id("front")]);
    assert_eq!(engine.drain_events().len(), 1);
}

#[test]
fn highlighted_marker_holds_an_enlarged_steady_scale() {
    let mut engine = loaded_engine();
    engine.select_station(&id("front"));
    run_frames(&mut engine, 0.0, 160.0);

    let factor = engine.scale_factor();
    let front = engine.markers().find(&id("front")).expect("front");
    assert!(approx(front.visual.scale, factor * 1.5, 1e-6));
    assert_eq!(front.visual.opacity, 1.0);
}

#[test]
fn rebuild_keeps_the_selection_when_the_station_survives() {
    let mut engine = loaded_engine();
    engine.select_station(&id("front"));
    run_frames(&mut engine, 0.0, 500.0);
    engine.drain_events();

    engine.load_catalog(sample_stations());
    assert_eq!(engine.selection().current(), Some(&id("front")));
    assert_eq!(highlighted_ids(&engine), vec![id("front")]);
    assert_eq!(engine.ledger().live_of(ResourceKind::Ring), 0);
    assert_eq!(engine.ledger().live_of(ResourceKind::Marker), 5);
    assert!(engine.drain_events().is_empty());
}

#[test]
fn rebuild_drops_the_selection_when_the_station_is_gone() {
    let mut engine = loaded_engine();
    engine.select_station(&id("front"));
    let remaining: Vec<_> = sample_stations()
        .into_iter()
        .filter(|s| s.id != id("front"))
        .collect();
    engine.load_catalog(remaining);

    assert_eq!(engine.selection().state(), &SelectionState::Idle);
    assert!(highlighted_ids(&engine).is_empty());
    assert_eq!(engine.ledger().live_count(), 4);
}

#[test]
fn rebuild_with_a_new_catalog_filters_and_resolves_the_new_stations() {
    let mut engine = loaded_engine();
    assert_eq!(engine.filter_markers("radio"), 1);

    engine.rebuild_markers(&[
        station("new1", "New Radio", "Chile", -33.4, -70.6, Genre::Pop),
        station("new2", "Andes Jazz", "Peru", -12.0, -77.0, Genre::Classical),
    ]);

    let visible: Vec<_> = engine
        .markers()
        .iter()
        .filter(|m| m.visible)
        .map(|m| m.station_id().clone())
        .collect();
    assert_eq!(visible, vec![id("new1")]);
    assert_eq!(engine.stations().len(), 2);
    assert!(engine.station(&id("front")).is_none());

    assert!(engine.select_station(&id("new1")));
    assert_eq!(
        engine.selected_station().map(|s| s.name.as_str()),
        Some("New Radio")
    );
    assert_eq!(
        engine.drain_events(),
        vec![GlobeEvent::StationSelected(id("new1"))]
    );
}

#[test]
fn rebuild_with_a_new_catalog_keeps_the_region_focus() {
    use globe_core::constants::{REGION_MEMBER_OPACITY, REGION_OUTSIDER_OPACITY};
    use globe_core::GeoCoord;

    let mut engine = loaded_engine();
    engine.focus_region_with(&[id("front"), id("fresh")], GeoCoord::new(0.0, -80.0), 0xff0000);

    let mut stations = vec![station("fresh", "Fresh FM", "Colombia", 4.7, -74.1, Genre::Pop)];
    stations.extend(
        sample_stations()
            .into_iter()
            .filter(|s| s.id == id("front") || s.id == id("north")),
    );
    engine.rebuild_markers(&stations);

    assert!(engine.is_region_focused());
    let opacity = |s: &str| engine.markers().find(&id(s)).map(|m| m.visual.opacity);
    assert_eq!(opacity("fresh"), Some(REGION_MEMBER_OPACITY));
    assert_eq!(opacity("front"), Some(REGION_MEMBER_OPACITY));
    assert_eq!(opacity("north"), Some(REGION_OUTSIDER_OPACITY));
    assert_eq!(engine.ledger().live_of(ResourceKind::RegionMarker), 1);
    assert_eq!(engine.ledger().live_of(ResourceKind::Marker), 3);
}

#[test]
fn ray_sphere_hits_from_outside_and_inside() {
    use globe_core::picking::ray_sphere;
    use glam::Vec3;

    let center = Vec3::new(0.0, 0.0, 5.0);
    let outside = ray_sphere(Vec3::ZERO, Vec3::Z, center, 2.0).expect("hit from outside");
    assert!(approx(outside, 3.0, 1e-5));

    // camera zoomed into the marker
    let inside = ray_sphere(Vec3::new(0.0, 0.0, 4.5), Vec3::Z, center, 2.0).expect("hit from inside");
    assert!(approx(inside, 2.5, 1e-5));

    assert_eq!(ray_sphere(Vec3::new(0.0, 0.0, 8.0), Vec3::Z, center, 2.0), None);
    assert_eq!(ray_sphere(Vec3::ZERO, Vec3::X, center, 2.0), None);
}

#[test]
fn pick_on_an_empty_globe_finds_nothing() {
    let engine = engine();
    assert_eq!(engine.pick(&center_click()), None);
}

#[test]
fn pick_returns_the_nearest_marker_along_the_ray() {
    let engine = loaded_engine();
    assert_eq!(engine.pick(&center_click()), Some(id("front")));

    let corner = PointerEvent::Click {
        client: Vec2::new(10.0, 10.0),
    };
    assert_eq!(engine.pick(&corner), None);
}

#[test]
fn touch_end_picks_with_the_first_point() {
    let engine = loaded_engine();
    let center = Vec2::new(VIEW_W / 2.0, VIEW_H / 2.0);
    let lifted = PointerEvent::TouchEnd {
        touches: smallvec![],
        changed: smallvec![center, Vec2::new(5.0, 5.0)],
    };
    assert_eq!(engine.pick(&lifted), Some(id("front")));

    let nothing = PointerEvent::TouchEnd {
        touches: smallvec![],
        changed: smallvec![],
    };
    assert_eq!(engine.pick(&nothing), None);
}

#[test]
fn hidden_markers_cannot_be_picked() {
    let mut engine = loaded_engine();
    assert_eq!(engine.filter_markers("zzz"), 0);
    assert_eq!(engine.pick(&center_click()), None);
    assert_eq!(engine.filter_markers(""), 5);
    assert_eq!(engine.pick(&center_click()), Some(id("front")));
}

#[test]
fn queued_pick_selects_on_the_next_tick() {
    let mut engine = loaded_engine();
    engine.submit(Command::Pick(center_click()));
    assert_eq!(engine.selection().current(), None);

    engine.tick(16.0);
    assert_eq!(engine.selection().current(), Some(&id("front")));
    assert_eq!(
        engine.drain_events(),
        vec![
            GlobeEvent::StationPicked(id("front")),
            GlobeEvent::StationSelected(id("front")),
        ]
    );
}
