//! Render/interaction coordinator.
//!
//! Owns the pointer interaction state of one mounted body map and projects everything the host
//! needs to draw a frame: per-region paint in draw order, biometric render parameters, the
//! floating label and the detail panel.
//!
//! Interaction state machine:
//!
//! | Event               | Effect                                                    |
//! |---------------------|-----------------------------------------------------------|
//! | `pointer_enter(id)` | hover becomes `id`, selection untouched                   |
//! | `pointer_leave()`   | hover cleared, selection untouched                        |
//! | `click(id)`         | selection becomes `id` (clicking it again is a no-op)     |
//! | `clear_selection()` | selection cleared (host panel close control)              |
//! | `reset()`           | back to idle (unmount or navigation)                      |
//!
//! Every transition and input change is handled synchronously; [`BodyMapSession::render`]
//! always reflects the latest state.

use std::fmt;
use std::sync::Arc;

use bodymap_types::{Gender, Layer, RegionId};
use serde::Serialize;

use crate::biometrics::{BiometricInputs, ResolvedBiometrics};
use crate::catalog::Catalog;
use crate::constants::VIEW_BOX;
use crate::matcher::ActivationMap;
use crate::records::MedicalRecordRef;
use crate::style::{resolve_style, RegionFlags, RenderStyle};
use crate::BodyMap;

/// Hovered and selected region of a body map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    hovered: Option<RegionId>,
    selected: Option<RegionId>,
}

/// The four shapes [`InteractionState`] can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionPhase {
    Idle,
    Hovering(RegionId),
    Selected(RegionId),
    SelectedAndHovering { selected: RegionId, hovered: RegionId },
}

impl InteractionState {
    pub fn hovered(&self) -> Option<&RegionId> {
        self.hovered.as_ref()
    }

    pub fn selected(&self) -> Option<&RegionId> {
        self.selected.as_ref()
    }

    pub fn phase(&self) -> InteractionPhase {
        match (self.selected.clone(), self.hovered.clone()) {
            (None, None) => InteractionPhase::Idle,
            (None, Some(hovered)) => InteractionPhase::Hovering(hovered),
            (Some(selected), None) => InteractionPhase::Selected(selected),
            (Some(selected), Some(hovered)) => {
                InteractionPhase::SelectedAndHovering { selected, hovered }
            }
        }
    }

    pub fn is_hovered(&self, region_id: &str) -> bool {
        self.hovered.as_ref().is_some_and(|id| id == region_id)
    }

    pub fn is_selected(&self, region_id: &str) -> bool {
        self.selected.as_ref().is_some_and(|id| id == region_id)
    }

    fn pointer_enter(&mut self, id: RegionId) {
        self.hovered = Some(id);
    }

    fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    fn click(&mut self, id: RegionId) {
        self.selected = Some(id);
    }

    fn clear_selection(&mut self) {
        self.selected = None;
    }

    fn reset(&mut self) {
        self.hovered = None;
        self.selected = None;
    }

    /// Drops ids the catalog does not know, so stale ids never reach rendering.
    fn retain_known(&mut self, catalog: &Catalog) {
        if self
            .hovered
            .as_ref()
            .is_some_and(|id| !catalog.contains(id.as_str()))
        {
            self.hovered = None;
        }
        if self
            .selected
            .as_ref()
            .is_some_and(|id| !catalog.contains(id.as_str()))
        {
            self.selected = None;
        }
    }
}

/// One region, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedRegion {
    pub id: &'static str,
    pub display_name: &'static str,
    pub layer: Layer,
    pub outline: &'static str,
    pub style: RenderStyle,
}

/// Detail panel content for the selected region.
///
/// An empty `snippets` list means the region is healthy; the host words that message itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionPanel {
    pub region_id: &'static str,
    pub display_name: &'static str,
    /// 1-based position of the region in the catalog.
    pub zone_number: usize,
    pub condition_count: usize,
    pub snippets: Vec<String>,
}

impl RegionPanel {
    pub fn is_healthy(&self) -> bool {
        self.snippets.is_empty()
    }
}

/// Biometric summary shown above the body map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwinHeader {
    /// BMI rounded to one decimal place.
    pub bmi: f64,
    pub gender_label: &'static str,
    pub heart_rate_bpm: f64,
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyMapRender {
    pub gender: Gender,
    pub view_box: &'static str,
    /// Horizontal scale applied to the outer silhouette.
    pub silhouette_scale: f64,
    pub beat_period_seconds: f64,
    pub header: TwinHeader,
    /// Regions in draw order.
    pub regions: Vec<RenderedRegion>,
    /// Name of the hovered region, else of the selected one.
    pub floating_label: Option<&'static str>,
    pub panel: Option<RegionPanel>,
}

impl BodyMapRender {
    pub fn region(&self, id: &str) -> Option<&RenderedRegion> {
        self.regions.iter().find(|r| r.id == id)
    }
}

/// Projects one frame from its inputs.
///
/// Interaction ids missing from `catalog` are treated as absent.
pub fn render_frame(
    catalog: &Catalog,
    activation: &ActivationMap,
    biometrics: &ResolvedBiometrics,
    interaction: &InteractionState,
) -> BodyMapRender {
    let hovered = interaction
        .hovered()
        .and_then(|id| catalog.get(id.as_str()));
    let selected = interaction
        .selected()
        .and_then(|id| catalog.get(id.as_str()));

    let regions = catalog
        .draw_order()
        .into_iter()
        .map(|region| {
            let flags = RegionFlags {
                active: activation.is_active(region.id),
                hovered: hovered.is_some_and(|h| h.id == region.id),
                selected: selected.is_some_and(|s| s.id == region.id),
            };
            RenderedRegion {
                id: region.id,
                display_name: region.display_name,
                layer: region.layer,
                outline: region.outline,
                style: resolve_style(region, flags),
            }
        })
        .collect();

    let panel = selected.map(|region| {
        let snippets = activation.snippets(region.id).to_vec();
        RegionPanel {
            region_id: region.id,
            display_name: region.display_name,
            zone_number: catalog.position(region.id).map_or(0, |p| p + 1),
            condition_count: snippets.len(),
            snippets,
        }
    });

    BodyMapRender {
        gender: catalog.gender(),
        view_box: VIEW_BOX,
        silhouette_scale: biometrics.silhouette_scale(),
        beat_period_seconds: biometrics.beat_period_seconds(),
        header: TwinHeader {
            bmi: (biometrics.bmi() * 10.0).round() / 10.0,
            gender_label: catalog.gender().label(),
            heart_rate_bpm: biometrics.heart_rate_bpm,
        },
        regions,
        floating_label: hovered.or(selected).map(|r| r.display_name),
        panel,
    }
}

type SelectListener = Box<dyn FnMut(&str) + Send>;

/// A mounted body map: inputs, derived activation, and pointer interaction.
pub struct BodyMapSession {
    engine: Arc<BodyMap>,
    gender: Gender,
    records: Vec<MedicalRecordRef>,
    biometrics: ResolvedBiometrics,
    activation: ActivationMap,
    interaction: InteractionState,
    on_region_select: Option<SelectListener>,
}

impl fmt::Debug for BodyMapSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyMapSession")
            .field("gender", &self.gender)
            .field("records", &self.records.len())
            .field("biometrics", &self.biometrics)
            .field("activation", &self.activation)
            .field("interaction", &self.interaction)
            .field("on_region_select", &self.on_region_select.is_some())
            .finish()
    }
}

impl BodyMapSession {
    /// Creates an idle session with no records and default biometrics.
    pub fn new(engine: Arc<BodyMap>) -> Self {
        let biometrics = BiometricInputs::default().resolve(&engine.config().biometric_defaults());
        Self {
            engine,
            gender: biometrics.gender,
            records: Vec::new(),
            biometrics,
            activation: ActivationMap::new(),
            interaction: InteractionState::default(),
            on_region_select: None,
        }
    }

    /// Registers the callback invoked after every accepted click.
    ///
    /// The callback sees the new selection but cannot veto it.
    pub fn with_select_listener(mut self, listener: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_region_select = Some(Box::new(listener));
        self
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn catalog(&self) -> &Catalog {
        self.engine.catalog(self.gender)
    }

    pub fn records(&self) -> &[MedicalRecordRef] {
        &self.records
    }

    pub fn biometrics(&self) -> &ResolvedBiometrics {
        &self.biometrics
    }

    pub fn activation(&self) -> &ActivationMap {
        &self.activation
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Replaces the record list and rebuilds the activation map.
    pub fn set_records(&mut self, records: Vec<MedicalRecordRef>) {
        self.records = records;
        self.rebuild_activation();
    }

    /// Switches gender from a free-form host value; unrecognised values mean Male.
    pub fn set_gender(&mut self, gender: Option<&str>) {
        self.apply_gender(self.engine.catalogs().for_input(gender).gender());
    }

    /// Replaces biometrics. A gender carried in `inputs` also switches the catalog.
    pub fn set_biometrics(&mut self, inputs: &BiometricInputs) {
        self.biometrics = inputs.resolve(&self.engine.config().biometric_defaults());
        if inputs.gender.is_some() {
            self.apply_gender(self.biometrics.gender);
        } else {
            self.biometrics.gender = self.gender;
        }
    }

    /// Hover enters `region_id`. Returns `false` and changes nothing for unknown ids.
    pub fn pointer_enter(&mut self, region_id: &str) -> bool {
        match self.known_region(region_id) {
            Some(id) => {
                self.interaction.pointer_enter(id);
                true
            }
            None => false,
        }
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.pointer_leave();
    }

    /// Selects `region_id` and then notifies the select listener.
    ///
    /// Returns `false` and changes nothing for unknown ids.
    pub fn click(&mut self, region_id: &str) -> bool {
        let Some(id) = self.known_region(region_id) else {
            return false;
        };

        tracing::debug!(region = %id, "region selected");
        self.interaction.click(id.clone());
        if let Some(listener) = self.on_region_select.as_mut() {
            listener(id.as_str());
        }
        true
    }

    pub fn clear_selection(&mut self) {
        self.interaction.clear_selection();
    }

    pub fn reset(&mut self) {
        self.interaction.reset();
    }

    pub fn render(&self) -> BodyMapRender {
        render_frame(
            self.catalog(),
            &self.activation,
            &self.biometrics,
            &self.interaction,
        )
    }

    /// Detail panel for the current selection, if any.
    pub fn panel(&self) -> Option<RegionPanel> {
        self.render().panel
    }

    pub fn floating_label(&self) -> Option<&'static str> {
        let catalog = self.catalog();
        self.interaction
            .hovered()
            .or(self.interaction.selected())
            .and_then(|id| catalog.get(id.as_str()))
            .map(|r| r.display_name)
    }

    fn apply_gender(&mut self, gender: Gender) {
        self.gender = gender;
        self.biometrics.gender = gender;
        self.interaction.retain_known(self.engine.catalog(gender));
        self.rebuild_activation();
    }

    fn rebuild_activation(&mut self) {
        self.activation = self.engine.activation_map(&self.records, self.gender);
    }

    fn known_region(&self, region_id: &str) -> Option<RegionId> {
        match self.catalog().lookup(region_id) {
            Ok(region) => RegionId::new(region.id).ok(),
            Err(e) => {
                tracing::warn!(region = region_id, "ignoring region: {e}");
                None
            }
        }
    }
}
