//! # Body Map Core
//!
//! Anatomical condition-mapping and visualisation engine behind the interactive body map.
//!
//! This crate contains the four engine components, leaves first:
//! - [`catalog`]: per-gender table of anatomical regions with keywords, layers and outlines
//! - [`biometrics`]: BMI to silhouette scale, heart rate to beat period
//! - [`matcher`]: medical record text to an [`ActivationMap`] of active regions
//! - [`coordinator`]: pointer interaction state and per-frame render projection
//!
//! The engine is synchronous, performs no I/O while rendering and never fails on bad input:
//! unknown genders fall back to Male, missing biometrics take configured defaults, and
//! malformed records simply activate nothing.
//!
//! **No transport concerns**: the REST server and CLI live in the workspace root and
//! `bodymap-cli`.

pub mod biometrics;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod coordinator;
pub mod matcher;
pub mod records;
pub mod style;

mod error;

use std::sync::Arc;

pub use bodymap_types::{Gender, Layer, RegionId};
pub use biometrics::{BiometricInputs, ResolvedBiometrics};
pub use catalog::{Catalog, CatalogSet, Category, Region};
pub use config::{BiometricDefaults, CoreConfig};
pub use coordinator::{
    BodyMapRender, BodyMapSession, InteractionPhase, InteractionState, RegionPanel,
};
pub use error::{BodyMapError, BodyMapResult};
pub use matcher::{ActivationMap, ConditionMatcher};
pub use records::MedicalRecordRef;
pub use style::{Palette, RenderStyle};

/// The body map engine: configuration, both catalogs and the matcher, built once.
///
/// Share it behind an `Arc` and open a [`BodyMapSession`] per mounted body map.
#[derive(Debug, Clone)]
pub struct BodyMap {
    config: Arc<CoreConfig>,
    catalogs: CatalogSet,
    matcher: ConditionMatcher,
}

impl BodyMap {
    pub fn new(config: Arc<CoreConfig>) -> Self {
        let matcher = ConditionMatcher::new(config.snippet_max_chars());
        Self {
            config,
            catalogs: CatalogSet::new(),
            matcher,
        }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn catalogs(&self) -> &CatalogSet {
        &self.catalogs
    }

    pub fn catalog(&self, gender: Gender) -> &Catalog {
        self.catalogs.get(gender)
    }

    /// Builds the activation map for `records` against the `gender` catalog.
    pub fn activation_map(&self, records: &[MedicalRecordRef], gender: Gender) -> ActivationMap {
        self.matcher.match_records(records, self.catalog(gender))
    }

    /// Opens an idle session on a shared engine.
    pub fn session(self: &Arc<Self>) -> BodyMapSession {
        BodyMapSession::new(Arc::clone(self))
    }
}

impl Default for BodyMap {
    fn default() -> Self {
        Self::new(Arc::new(CoreConfig::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_uses_configured_snippet_limit() {
        let config = CoreConfig::new(BiometricDefaults::default(), 10).unwrap();
        let engine = BodyMap::new(Arc::new(config));
        let records = vec![MedicalRecordRef::new("Heart").with_summary("Coronary artery disease")];
        let map = engine.activation_map(&records, Gender::Male);
        assert_eq!(map.snippets("heart"), ["Coronary a...".to_string()]);
    }

    #[test]
    fn test_session_from_shared_engine() {
        let engine = Arc::new(BodyMap::default());
        let mut session = engine.session();
        session.set_records(records::demo_records());
        assert!(session.activation().is_active("heart"));
        assert_eq!(session.render().regions.len(), 20);
    }

    #[test]
    fn test_sessions_are_independent() {
        let engine = Arc::new(BodyMap::default());
        let mut a = engine.session();
        let b = engine.session();
        a.click("heart");
        assert!(a.interaction().is_selected("heart"));
        assert!(b.interaction().selected().is_none());
    }
}
