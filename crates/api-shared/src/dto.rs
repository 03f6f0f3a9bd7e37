//! Request and response bodies for the body map REST API.
//!
//! These are transport types only. Conversions to and from `bodymap-core` types live next to
//! each struct so handlers stay thin.

use bodymap_core::coordinator::{RegionPanel, RenderedRegion, TwinHeader};
use bodymap_core::{ActivationMap, BodyMapRender, Catalog, MedicalRecordRef, Region, RenderStyle};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// A medical record summary as sent by the host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecordDto {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "aiSummary")]
    pub summary: Option<String>,
    #[serde(default, alias = "type")]
    pub category: Option<String>,
    #[serde(default, alias = "contentText", alias = "freeText")]
    pub free_text: Option<String>,
}

impl From<RecordDto> for MedicalRecordRef {
    fn from(dto: RecordDto) -> Self {
        MedicalRecordRef {
            title: dto.title,
            summary: dto.summary,
            category: dto.category,
            free_text: dto.free_text,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogRegionDto {
    pub id: String,
    pub display_name: String,
    pub layer: String,
    pub category: String,
    pub keywords: Vec<String>,
    pub outline: String,
}

impl From<&Region> for CatalogRegionDto {
    fn from(region: &Region) -> Self {
        Self {
            id: region.id.into(),
            display_name: region.display_name.into(),
            layer: region.layer.as_str().into(),
            category: region.category.as_str().into(),
            keywords: region.keywords.iter().map(|k| k.to_string()).collect(),
            outline: region.outline.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogRes {
    pub gender: String,
    pub regions: Vec<CatalogRegionDto>,
}

impl From<&Catalog> for CatalogRes {
    fn from(catalog: &Catalog) -> Self {
        Self {
            gender: catalog.gender().as_str().into(),
            regions: catalog.regions().iter().map(CatalogRegionDto::from).collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActivationReq {
    #[serde(default)]
    pub records: Vec<RecordDto>,
    /// Anything other than "female" (any case) means Male.
    #[serde(default)]
    pub gender: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActiveRegionDto {
    pub region_id: String,
    pub snippets: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActivationRes {
    pub gender: String,
    /// Active regions only, sorted by id. Absent regions are healthy.
    pub regions: Vec<ActiveRegionDto>,
}

impl ActivationRes {
    pub fn new(gender: &str, map: &ActivationMap) -> Self {
        Self {
            gender: gender.into(),
            regions: map
                .iter()
                .map(|(id, snippets)| ActiveRegionDto {
                    region_id: id.into(),
                    snippets: snippets.to_vec(),
                })
                .collect(),
        }
    }
}

/// Stateless render request: inputs plus the host's current pointer state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BodyMapReq {
    #[serde(default)]
    pub records: Vec<RecordDto>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub heart_rate_bpm: Option<f64>,
    #[serde(default)]
    pub hovered_region_id: Option<String>,
    #[serde(default)]
    pub selected_region_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RenderStyleDto {
    pub fill: String,
    pub fill_opacity: f64,
    pub stroke: String,
    pub stroke_width: f64,
    pub glow: bool,
}

impl From<&RenderStyle> for RenderStyleDto {
    fn from(style: &RenderStyle) -> Self {
        Self {
            fill: style.fill.into(),
            fill_opacity: style.fill_opacity,
            stroke: style.stroke.into(),
            stroke_width: style.stroke_width,
            glow: style.glow,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RenderedRegionDto {
    pub id: String,
    pub display_name: String,
    pub layer: String,
    pub outline: String,
    pub style: RenderStyleDto,
}

impl From<&RenderedRegion> for RenderedRegionDto {
    fn from(region: &RenderedRegion) -> Self {
        Self {
            id: region.id.into(),
            display_name: region.display_name.into(),
            layer: region.layer.as_str().into(),
            outline: region.outline.into(),
            style: RenderStyleDto::from(&region.style),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PanelDto {
    pub region_id: String,
    pub display_name: String,
    pub zone_number: usize,
    pub condition_count: usize,
    pub snippets: Vec<String>,
    pub healthy: bool,
}

impl From<&RegionPanel> for PanelDto {
    fn from(panel: &RegionPanel) -> Self {
        Self {
            region_id: panel.region_id.into(),
            display_name: panel.display_name.into(),
            zone_number: panel.zone_number,
            condition_count: panel.condition_count,
            snippets: panel.snippets.clone(),
            healthy: panel.is_healthy(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TwinHeaderDto {
    pub bmi: f64,
    pub gender_label: String,
    pub heart_rate_bpm: f64,
}

impl From<&TwinHeader> for TwinHeaderDto {
    fn from(header: &TwinHeader) -> Self {
        Self {
            bmi: header.bmi,
            gender_label: header.gender_label.into(),
            heart_rate_bpm: header.heart_rate_bpm,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BodyMapRes {
    pub gender: String,
    pub view_box: String,
    pub silhouette_scale: f64,
    pub beat_period_seconds: f64,
    pub header: TwinHeaderDto,
    /// Regions in draw order.
    pub regions: Vec<RenderedRegionDto>,
    pub floating_label: Option<String>,
    pub panel: Option<PanelDto>,
    /// Hover/selection ids from the request that the catalog does not know.
    pub ignored_region_ids: Vec<String>,
}

impl BodyMapRes {
    pub fn new(render: &BodyMapRender, ignored_region_ids: Vec<String>) -> Self {
        Self {
            gender: render.gender.as_str().into(),
            view_box: render.view_box.into(),
            silhouette_scale: render.silhouette_scale,
            beat_period_seconds: render.beat_period_seconds,
            header: TwinHeaderDto::from(&render.header),
            regions: render.regions.iter().map(RenderedRegionDto::from).collect(),
            floating_label: render.floating_label.map(str::to_string),
            panel: render.panel.as_ref().map(PanelDto::from),
            ignored_region_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_dto_accepts_the_same_field_names_as_core() {
        let bodies = [
            r#"{"title": "Note", "freeText": "Suspected DVT"}"#,
            r#"{"title": "Note", "contentText": "Suspected DVT"}"#,
            r#"{"title": "Note", "free_text": "Suspected DVT"}"#,
            r#"{"title": "Scan", "aiSummary": "Clear", "type": "Imaging"}"#,
        ];
        for body in bodies {
            let dto: RecordDto = serde_json::from_str(body).unwrap();
            let core: MedicalRecordRef = serde_json::from_str(body).unwrap();
            assert_eq!(MedicalRecordRef::from(dto), core, "body {body}");
        }
    }
}
