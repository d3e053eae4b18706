//! The single current selection and the effects it owns.

use crate::catalog::StationId;
use crate::halo::HaloEmitter;
use crate::markers::MarkerRegistry;
use crate::resources::ResourceLedger;
use crate::trail::TrailEmitter;
use glam::Vec3;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Selected(StationId),
}

#[derive(Debug)]
pub struct SelectionEffects {
    pub halo: HaloEmitter,
    pub trail: TrailEmitter,
}

impl SelectionEffects {
    fn dispose(&mut self, ledger: &mut ResourceLedger) {
        self.halo.dispose(ledger);
        self.trail.dispose(ledger);
    }
}

#[derive(Debug, Default)]
pub struct Selection {
    state: SelectionState,
    /// Marker currently wearing the highlight, if it still exists.
    previous: Option<StationId>,
    effects: Option<SelectionEffects>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn current(&self) -> Option<&StationId> {
        match &self.state {
            SelectionState::Selected(id) => Some(id),
            SelectionState::Idle => None,
        }
    }

    /// Station whose marker was highlighted last, for callers that need to
    /// patch its look after the revert.
    pub fn previous(&self) -> Option<&StationId> {
        self.previous.as_ref()
    }

    pub fn effects(&self) -> Option<&SelectionEffects> {
        self.effects.as_ref()
    }

    /// Move the highlight and effects to `id`. Returns `false`, changing
    /// nothing, when the station has no marker.
    pub fn select(
        &mut self,
        id: &StationId,
        markers: &mut MarkerRegistry,
        ledger: &mut ResourceLedger,
        marker_size: f32,
    ) -> bool {
        if markers.find(id).is_none() {
            log::warn!("[select] no marker for station {id}");
            return false;
        }
        self.revert_previous(markers);

        let Some(marker) = markers.find_mut(id) else {
            return false;
        };
        marker.apply_highlight();
        let anchor = marker.position();
        let color = marker.base_color();
        self.previous = Some(id.clone());

        if let Some(mut old) = self.effects.take() {
            old.dispose(ledger);
        }
        self.effects = Some(SelectionEffects {
            halo: HaloEmitter::new(anchor, color, marker_size),
            trail: TrailEmitter::new(anchor, Vec3::ZERO, color, marker_size),
        });
        self.state = SelectionState::Selected(id.clone());
        log::debug!("[select] {id}");
        true
    }

    /// Back to idle. Returns whether anything was selected.
    pub fn clear(&mut self, markers: &mut MarkerRegistry, ledger: &mut ResourceLedger) -> bool {
        self.revert_previous(markers);
        self.previous = None;
        if let Some(mut effects) = self.effects.take() {
            effects.dispose(ledger);
        }
        let was_selected = self.state != SelectionState::Idle;
        self.state = SelectionState::Idle;
        if was_selected {
            log::debug!("[select] cleared");
        }
        was_selected
    }

    /// Drop effects and the highlight record without touching markers, for
    /// when the registry itself is about to be rebuilt.
    pub fn forget(&mut self, ledger: &mut ResourceLedger) -> Option<StationId> {
        if let Some(mut effects) = self.effects.take() {
            effects.dispose(ledger);
        }
        self.previous = None;
        match std::mem::take(&mut self.state) {
            SelectionState::Selected(id) => Some(id),
            SelectionState::Idle => None,
        }
    }

    pub fn tick_trail(&mut self, ledger: &mut ResourceLedger) {
        if let Some(effects) = self.effects.as_mut() {
            effects.trail.tick(ledger);
        }
    }

    pub fn tick_halo(&mut self, anim_time: f64, ledger: &mut ResourceLedger) {
        if let Some(effects) = self.effects.as_mut() {
            effects.halo.tick(anim_time, ledger);
        }
    }

    fn revert_previous(&mut self, markers: &mut MarkerRegistry) {
        if let Some(marker) = self.previous.as_ref().and_then(|id| markers.find_mut(id)) {
            marker.restore_base();
        }
    }
}
