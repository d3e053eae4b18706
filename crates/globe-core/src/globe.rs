//! The engine context.
//!
//! `GlobeEngine` owns the camera, markers, selection and every transient
//! effect. Callers either invoke operations directly or queue [`Command`]s
//! that are applied at the start of the next [`GlobeEngine::tick`]; outcomes
//! come back as [`GlobeEvent`]s.

use crate::camera::{Camera, OrbitControls};
use crate::catalog::{Station, StationId};
use crate::config::GlobeConfig;
use crate::constants::*;
use crate::easing::Easing;
use crate::flight::{Flight, FlightController};
use crate::geo::{project_coord, GeoCoord};
use crate::highlight::{clear_region_highlight, highlight_region, RegionMarker};
use crate::library::RouletteHistory;
use crate::markers::MarkerRegistry;
use crate::picking::{self, PointerEvent, Viewport};
use crate::regions::RegionTable;
use crate::resources::ResourceLedger;
use crate::scale;
use crate::scene::starfield;
use crate::selection::Selection;
use crate::tasks::{RouletteStep, TaskQueue};
use fnv::{FnvHashMap, FnvHashSet};
use glam::{Mat4, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::VecDeque;

/// Queued input, applied between ticks.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Pick(PointerEvent),
    SelectStation(StationId),
    ClearSelection,
    FocusRegion(String),
    ClearRegionFocus,
    /// Roulette over the whole catalog.
    SpinToRandom,
    FilterMarkers(String),
    ToggleAutoRotate,
    ResetView,
    /// Pointer drag in CSS pixels.
    Orbit(Vec2),
    /// Dolly factor; below 1 moves closer.
    Zoom(f32),
    Resize(Viewport),
}

#[derive(Clone, Debug, PartialEq)]
pub enum GlobeEvent {
    StationPicked(StationId),
    StationSelected(StationId),
    SelectionCleared,
    /// `None` for a focus built from an ad hoc station set.
    RegionFocused(Option<String>),
    RegionCleared,
    RouletteStarted(StationId),
    RouletteCountdown(Option<u8>),
    RouletteLanded(StationId),
}

#[derive(Debug)]
struct RegionFocus {
    name: Option<String>,
    members: FnvHashSet<StationId>,
    marker: RegionMarker,
}

pub struct GlobeEngine {
    config: GlobeConfig,
    viewport: Viewport,
    camera: Camera,
    controls: OrbitControls,
    ledger: ResourceLedger,
    stations: Vec<Station>,
    station_index: FnvHashMap<StationId, usize>,
    regions: RegionTable,
    markers: MarkerRegistry,
    selection: Selection,
    focus: Option<RegionFocus>,
    flights: FlightController,
    roulette: TaskQueue<RouletteStep>,
    history: RouletteHistory,
    filter: String,
    stars: Vec<Vec3>,
    rng: StdRng,
    globe_yaw: f32,
    auto_rotate: bool,
    atmosphere_opacity: f32,
    scale_factor: f32,
    anim_time: f64,
    now_ms: f64,
    commands: VecDeque<Command>,
    events: Vec<GlobeEvent>,
}

impl GlobeEngine {
    pub fn new(config: GlobeConfig, viewport: Viewport, seed: u64) -> Self {
        let camera = Camera::from_config(&config, viewport.aspect());
        let controls = OrbitControls::new(&config, &camera);
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = starfield(config.star_count, &mut rng);
        Self {
            viewport,
            camera,
            controls,
            ledger: ResourceLedger::new(),
            stations: Vec::new(),
            station_index: FnvHashMap::default(),
            regions: RegionTable::default(),
            markers: MarkerRegistry::new(),
            selection: Selection::new(),
            focus: None,
            flights: FlightController::default(),
            roulette: TaskQueue::new(),
            history: RouletteHistory::new(),
            filter: String::new(),
            stars,
            rng,
            globe_yaw: 0.0,
            auto_rotate: true,
            atmosphere_opacity: ATMOSPHERE_BASE_OPACITY,
            scale_factor: MAX_MARKER_SCALE,
            anim_time: 0.0,
            now_ms: 0.0,
            commands: VecDeque::new(),
            events: Vec::new(),
            config,
        }
    }

    // ---- accessors ----

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station(&self, id: &StationId) -> Option<&Station> {
        self.station_index.get(id).map(|&i| &self.stations[i])
    }

    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    pub fn markers(&self) -> &MarkerRegistry {
        &self.markers
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_station(&self) -> Option<&Station> {
        self.selection.current().and_then(|id| self.station(id))
    }

    pub fn focused_region(&self) -> Option<&str> {
        self.focus.as_ref().and_then(|f| f.name.as_deref())
    }

    pub fn is_region_focused(&self) -> bool {
        self.focus.is_some()
    }

    pub fn region_marker(&self) -> Option<&RegionMarker> {
        self.focus.as_ref().map(|f| &f.marker)
    }

    pub fn history(&self) -> &RouletteHistory {
        &self.history
    }

    pub fn set_history(&mut self, history: RouletteHistory) {
        self.history = history;
    }

    pub fn stars(&self) -> &[Vec3] {
        &self.stars
    }

    pub fn globe_yaw(&self) -> f32 {
        self.globe_yaw
    }

    /// Places globe-local positions (markers, effects) in the world.
    pub fn globe_model(&self) -> Mat4 {
        Mat4::from_rotation_y(self.globe_yaw)
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn atmosphere_opacity(&self) -> f32 {
        self.atmosphere_opacity
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    pub fn anim_time(&self) -> f64 {
        self.anim_time
    }

    pub fn roulette_pending(&self) -> bool {
        !self.roulette.is_empty()
    }

    pub fn is_spinning(&self) -> bool {
        self.flights.spin_active()
    }

    // ---- catalog ----

    /// Replace the catalog and regroup it; any region focus is dropped.
    pub fn load_catalog(&mut self, stations: Vec<Station>) {
        self.clear_region_focus();
        self.regions = RegionTable::group(&stations);
        self.replace_stations(stations);
        log::info!(
            "[catalog] {} stations in {} regions",
            self.stations.len(),
            self.regions.non_empty().count()
        );
    }

    /// Replace the station snapshot and recreate every marker; regions are
    /// left as they are. The current selection survives if its station is
    /// still present; the active filter and region dimming are reapplied.
    pub fn rebuild_markers(&mut self, stations: &[Station]) {
        self.replace_stations(stations.to_vec());
    }

    fn replace_stations(&mut self, stations: Vec<Station>) {
        self.station_index.clear();
        for (i, station) in stations.iter().enumerate() {
            self.station_index.entry(station.id.clone()).or_insert(i);
        }
        self.stations = stations;

        let reselect = self.selection.forget(&mut self.ledger);
        self.markers
            .rebuild(&self.stations, self.config.earth_radius, &mut self.ledger);
        self.after_rebuild(reselect);
    }

    fn after_rebuild(&mut self, reselect: Option<StationId>) {
        self.apply_filter();
        if let Some(focus) = &self.focus {
            highlight_region(&mut self.markers, &focus.members);
        }
        if let Some(id) = reselect {
            if self
                .selection
                .select(&id, &mut self.markers, &mut self.ledger, self.config.marker_size)
            {
                self.keep_selection_opaque();
            }
        }
    }

    // ---- selection ----

    pub fn select_station(&mut self, id: &StationId) -> bool {
        let previous = self.selection.previous().cloned();
        if !self
            .selection
            .select(id, &mut self.markers, &mut self.ledger, self.config.marker_size)
        {
            return false;
        }
        if let Some(prev) = previous.filter(|p| p != id) {
            self.restore_focus_opacity(&prev);
        }
        self.events.push(GlobeEvent::StationSelected(id.clone()));
        true
    }

    pub fn clear_selection(&mut self) -> bool {
        let previous = self.selection.previous().cloned();
        if !self.selection.clear(&mut self.markers, &mut self.ledger) {
            return false;
        }
        if let Some(prev) = previous {
            self.restore_focus_opacity(&prev);
        }
        self.events.push(GlobeEvent::SelectionCleared);
        true
    }

    // ---- regions ----

    pub fn focus_region(&mut self, name: &str) -> bool {
        let Some(region) = self.regions.get(name) else {
            log::warn!("[region] unknown region {name}");
            return false;
        };
        let members = region.member_set();
        let (center, color) = (region.center, region.color);
        self.start_focus(Some(name.to_string()), members, center, color);
        true
    }

    /// Focus an arbitrary station set around `center`.
    pub fn focus_region_with(&mut self, station_ids: &[StationId], center: GeoCoord, color: u32) {
        let members = station_ids.iter().cloned().collect();
        self.start_focus(None, members, center, color);
    }

    fn start_focus(
        &mut self,
        name: Option<String>,
        members: FnvHashSet<StationId>,
        center: GeoCoord,
        color: u32,
    ) {
        highlight_region(&mut self.markers, &members);
        self.keep_selection_opaque();

        if let Some(old) = self.focus.take() {
            old.marker.dispose(&mut self.ledger);
        }
        let marker = RegionMarker::new(
            center,
            self.config.earth_radius,
            hex_rgb(color),
            &mut self.ledger,
        );

        let local_eye = project_coord(center, self.config.earth_radius * REGION_FOCUS_ALTITUDE);
        let target = self.globe_model().transform_point3(local_eye);
        self.flights.start_region(Flight::new(
            self.camera.eye,
            target,
            self.now_ms,
            REGION_FLIGHT_MS,
            Easing::InOutCubic,
        ));
        log::debug!(
            "[region] focus {} ({} stations)",
            name.as_deref().unwrap_or("custom"),
            members.len()
        );
        self.events.push(GlobeEvent::RegionFocused(name.clone()));
        self.focus = Some(RegionFocus {
            name,
            members,
            marker,
        });
    }

    pub fn clear_region_focus(&mut self) -> bool {
        let Some(focus) = self.focus.take() else {
            return false;
        };
        focus.marker.dispose(&mut self.ledger);
        clear_region_highlight(&mut self.markers);
        self.keep_selection_opaque();
        log::debug!("[region] cleared");
        self.events.push(GlobeEvent::RegionCleared);
        true
    }

    // ---- roulette ----

    /// Choose a station uniformly from `pool` and start the spin sequence.
    /// The station is selected when the reveal step runs.
    pub fn spin_to_random(&mut self, pool: &[Station]) -> Option<Station> {
        let station = pool.choose(&mut self.rng)?.clone();
        self.start_roulette(station.clone());
        Some(station)
    }

    fn start_roulette(&mut self, station: Station) {
        let cancelled = self.roulette.cancel_where(|_| true);
        if cancelled > 0 {
            log::debug!("[roulette] superseded {cancelled} pending steps");
        }
        let now = self.now_ms;
        self.flights.start_spin(Flight::new(
            self.globe_yaw,
            self.globe_yaw + ROULETTE_SPIN_ANGLE,
            now,
            ROULETTE_SPIN_MS,
            Easing::InOutCubic,
        ));

        for step in 1..=ROULETTE_COUNTDOWN_FROM {
            let remaining = ROULETTE_COUNTDOWN_FROM - step;
            self.roulette.schedule(
                now + ROULETTE_COUNTDOWN_STEP_MS * f64::from(step),
                RouletteStep::Countdown((remaining > 0).then_some(remaining)),
            );
        }
        let reveal_at = now
            + ROULETTE_COUNTDOWN_STEP_MS * f64::from(ROULETTE_COUNTDOWN_FROM)
            + ROULETTE_REVEAL_DELAY_MS;
        log::info!("[roulette] spinning to {}", station.name);
        self.events
            .push(GlobeEvent::RouletteStarted(station.id.clone()));
        self.roulette
            .schedule(reveal_at, RouletteStep::Reveal(Box::new(station)));
    }

    fn run_due_tasks(&mut self) {
        for step in self.roulette.drain_due(self.now_ms) {
            match step {
                RouletteStep::Countdown(n) => {
                    self.events.push(GlobeEvent::RouletteCountdown(n));
                }
                RouletteStep::Reveal(station) => {
                    let id = station.id.clone();
                    self.history.push(*station);
                    self.events.push(GlobeEvent::RouletteLanded(id.clone()));
                    self.select_station(&id);
                }
            }
        }
    }

    // ---- input ----

    pub fn pick(&self, event: &PointerEvent) -> Option<StationId> {
        picking::pick(
            event,
            &self.camera,
            self.viewport,
            self.globe_model(),
            &self.markers,
            self.config.marker_size,
        )
    }

    /// Pick and, on a hit, select the station.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<StationId> {
        let id = self.pick(event)?;
        log::debug!("[pick] {id}");
        self.events.push(GlobeEvent::StationPicked(id.clone()));
        self.select_station(&id);
        Some(id)
    }

    /// Show only markers whose station name or country contains `query`.
    /// Returns the number of visible markers.
    pub fn filter_markers(&mut self, query: &str) -> usize {
        self.filter = query.trim().to_lowercase();
        self.apply_filter()
    }

    fn apply_filter(&mut self) -> usize {
        let mut visible = 0;
        for marker in self.markers.iter_mut() {
            marker.visible = self.filter.is_empty()
                || self
                    .station_index
                    .get(marker.station_id())
                    .is_some_and(|&i| self.stations[i].matches(&self.filter));
            visible += usize::from(marker.visible);
        }
        visible
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        log::debug!("[globe] auto-rotate {}", self.auto_rotate);
        self.auto_rotate
    }

    pub fn reset_view(&mut self) {
        self.flights.cancel_region();
        self.controls.reset(&mut self.camera);
    }

    pub fn orbit(&mut self, delta: Vec2) {
        self.controls.rotate(delta, self.viewport.height);
    }

    pub fn zoom(&mut self, factor: f32) {
        self.controls.dolly(factor);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
    }

    pub fn submit(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    pub fn drain_events(&mut self) -> Vec<GlobeEvent> {
        std::mem::take(&mut self.events)
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Pick(event) => {
                self.handle_pointer(&event);
            }
            Command::SelectStation(id) => {
                self.select_station(&id);
            }
            Command::ClearSelection => {
                self.clear_selection();
            }
            Command::FocusRegion(name) => {
                self.focus_region(&name);
            }
            Command::ClearRegionFocus => {
                self.clear_region_focus();
            }
            Command::SpinToRandom => {
                if let Some(station) = self.stations.choose(&mut self.rng).cloned() {
                    self.start_roulette(station);
                }
            }
            Command::FilterMarkers(query) => {
                self.filter_markers(&query);
            }
            Command::ToggleAutoRotate => {
                self.toggle_auto_rotate();
            }
            Command::ResetView => self.reset_view(),
            Command::Orbit(delta) => self.orbit(delta),
            Command::Zoom(factor) => self.zoom(factor),
            Command::Resize(viewport) => self.resize(viewport),
        }
    }

    // ---- frame ----

    /// Advance one rendered frame. `now_ms` is wall-clock time used for
    /// flights and roulette steps; effects run on the per-frame animation clock.
    pub fn tick(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
        self.anim_time += ANIMATION_TIME_STEP;

        while let Some(command) = self.commands.pop_front() {
            self.apply(command);
        }
        self.run_due_tasks();

        if let Some(yaw) = self.flights.step_spin(now_ms) {
            self.globe_yaw = yaw;
        } else if self.auto_rotate && self.focus.is_none() {
            self.globe_yaw = (self.globe_yaw + AUTO_ROTATE_STEP).rem_euclid(std::f32::consts::TAU);
        }

        self.atmosphere_opacity = ATMOSPHERE_BASE_OPACITY
            + ATMOSPHERE_PULSE_AMPLITUDE
                * (self.anim_time as f32 * ATMOSPHERE_PULSE_FREQUENCY).sin();

        self.selection.tick_trail(&mut self.ledger);

        if let Some(focus) = self.focus.as_mut() {
            focus.marker.pulse(self.anim_time);
        }

        self.selection.tick_halo(self.anim_time, &mut self.ledger);

        self.scale_factor = scale::apply(
            &mut self.markers,
            self.camera.distance_to_target(),
            self.anim_time,
        );

        if let Some(eye) = self.flights.step_region(now_ms) {
            self.camera.eye = eye;
            self.camera.look_at(Vec3::ZERO);
        } else {
            self.controls.update(&mut self.camera);
        }
    }

    fn restore_focus_opacity(&mut self, id: &StationId) {
        let Some(focus) = &self.focus else {
            return;
        };
        if let Some(marker) = self.markers.find_mut(id) {
            marker.visual.opacity = if focus.members.contains(id) {
                REGION_MEMBER_OPACITY
            } else {
                REGION_OUTSIDER_OPACITY
            };
        }
    }

    fn keep_selection_opaque(&mut self) {
        if let Some(marker) = self
            .selection
            .current()
            .and_then(|id| self.markers.find_mut(id))
        {
            marker.visual.opacity = HIGHLIGHT_OPACITY;
        }
    }
}
