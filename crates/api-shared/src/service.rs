use std::sync::Arc;

use bodymap_core::{BiometricInputs, BodyMap, MedicalRecordRef};

use crate::dto::{ActivationReq, ActivationRes, BodyMapReq, BodyMapRes, CatalogRes};

/// Request-level facade over a shared [`BodyMap`] engine.
///
/// Every call is stateless: a render request is replayed through a fresh session, so the
/// host remains the owner of hover and selection between requests.
#[derive(Clone, Debug)]
pub struct BodyMapService {
    engine: Arc<BodyMap>,
}

impl BodyMapService {
    pub fn new(engine: Arc<BodyMap>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Arc<BodyMap> {
        &self.engine
    }

    pub fn catalog(&self, gender: Option<&str>) -> CatalogRes {
        CatalogRes::from(self.engine.catalogs().for_input(gender))
    }

    pub fn activation(&self, req: ActivationReq) -> ActivationRes {
        let catalog = self.engine.catalogs().for_input(req.gender.as_deref());
        let records: Vec<MedicalRecordRef> = req.records.into_iter().map(Into::into).collect();
        let map = self.engine.activation_map(&records, catalog.gender());
        ActivationRes::new(catalog.gender().as_str(), &map)
    }

    pub fn render(&self, req: BodyMapReq) -> BodyMapRes {
        let mut session = self.engine.session();
        session.set_biometrics(&BiometricInputs {
            gender: req.gender.clone(),
            weight_kg: req.weight_kg,
            height_cm: req.height_cm,
            resting_heart_rate_bpm: req.heart_rate_bpm,
        });
        session.set_gender(req.gender.as_deref());
        session.set_records(req.records.into_iter().map(Into::into).collect());

        let mut ignored = Vec::new();
        if let Some(id) = req.selected_region_id {
            if !session.click(&id) {
                ignored.push(id);
            }
        }
        if let Some(id) = req.hovered_region_id {
            if !session.pointer_enter(&id) {
                ignored.push(id);
            }
        }
        if !ignored.is_empty() {
            tracing::warn!(?ignored, "render request named unknown regions");
        }

        BodyMapRes::new(&session.render(), ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{ActiveRegionDto, RecordDto};

    fn service() -> BodyMapService {
        BodyMapService::new(Arc::new(BodyMap::default()))
    }

    fn record(title: &str, summary: &str) -> RecordDto {
        RecordDto {
            title: title.into(),
            summary: Some(summary.into()),
            ..RecordDto::default()
        }
    }

    #[test]
    fn test_catalog_defaults_to_male() {
        let res = service().catalog(Some("unknown"));
        assert_eq!(res.gender, "Male");
        assert_eq!(res.regions.len(), 20);
        assert_eq!(res.regions[0].id, "head");
        assert_eq!(res.regions[19].layer, "overlay");
    }

    #[test]
    fn test_activation_for_generic_leg_record() {
        let res = service().activation(ActivationReq {
            records: vec![record("Leg Ache", "General leg soreness.")],
            gender: Some("female".into()),
        });
        assert_eq!(res.gender, "Female");
        let ids: Vec<_> = res.regions.iter().map(|r| r.region_id.as_str()).collect();
        assert_eq!(ids, vec!["calves", "knees", "thighs"]);
        assert!(res.regions.iter().all(|r| r.snippets == vec!["General Leg Issue"]));
    }

    #[test]
    fn test_activation_reads_free_text_body() {
        let req: ActivationReq = serde_json::from_str(
            r#"{"records": [{"title": "Note", "freeText": "Suspected DVT"}]}"#,
        )
        .unwrap();
        let res = service().activation(req);
        assert_eq!(
            res.regions,
            vec![ActiveRegionDto {
                region_id: "veins".into(),
                snippets: vec!["Note".into()],
            }]
        );
    }

    #[test]
    fn test_render_replays_pointer_state() {
        let res = service().render(BodyMapReq {
            records: vec![record("Sore Knee", "Left leg knee pain after running.")],
            weight_kg: Some(90.0),
            height_cm: Some(170.0),
            heart_rate_bpm: Some(0.0),
            hovered_region_id: Some("liver".into()),
            selected_region_id: Some("liver".into()),
            ..BodyMapReq::default()
        });

        assert_eq!(res.beat_period_seconds, 1.5);
        let liver = res.regions.iter().find(|r| r.id == "liver").unwrap();
        assert_eq!(liver.style.fill_opacity, 0.8);
        let knees = res.regions.iter().find(|r| r.id == "knees").unwrap();
        assert_eq!(knees.style.fill_opacity, 0.7);

        let panel = res.panel.unwrap();
        assert_eq!(panel.region_id, "liver");
        assert!(panel.healthy);
        assert_eq!(res.floating_label.as_deref(), Some("Liver & Gut"));
        assert!(res.ignored_region_ids.is_empty());
    }

    #[test]
    fn test_render_reports_unknown_ids() {
        let res = service().render(BodyMapReq {
            selected_region_id: Some("tail".into()),
            hovered_region_id: Some("Heart".into()),
            ..BodyMapReq::default()
        });
        assert_eq!(res.ignored_region_ids, vec!["tail", "Heart"]);
        assert!(res.panel.is_none());
        assert_eq!(res.gender, "Male");
    }

    #[test]
    fn test_render_response_serialises() {
        let res = service().render(BodyMapReq::default());
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["view_box"], "0 0 200 600");
        assert_eq!(json["regions"].as_array().unwrap().len(), 20);
        assert!(json["panel"].is_null());
    }
}
