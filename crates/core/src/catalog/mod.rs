//! Region catalog.
//!
//! A catalog is the fixed list of anatomical regions for one [`Gender`]. Ids, names, keywords,
//! layers and categories are the same for both genders; only the outer-silhouette outlines
//! differ. That keeps an [`crate::ActivationMap`] valid across a gender toggle: only geometry has
//! to be redrawn.
//!
//! Catalogs are built once into a [`CatalogSet`] and then only borrowed.

mod geometry;

use bodymap_types::{Gender, Layer, RegionId};
use serde::Serialize;

use crate::{BodyMapError, BodyMapResult};

use geometry::{BaseOutlines, FEMALE, INTERNAL, MALE};

/// Coarse colour class of a region, used to pick its highlight colour when active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Neuro,
    Throat,
    Thoracic,
    Respiratory,
    Cardio,
    Vascular,
    Digestive,
    Hepatic,
    Reproductive,
    Musculoskeletal,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Neuro => "neuro",
            Category::Throat => "throat",
            Category::Thoracic => "thoracic",
            Category::Respiratory => "respiratory",
            Category::Cardio => "cardio",
            Category::Vascular => "vascular",
            Category::Digestive => "digestive",
            Category::Hepatic => "hepatic",
            Category::Reproductive => "reproductive",
            Category::Musculoskeletal => "musculoskeletal",
        }
    }
}

/// One anatomical region of the body model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    /// Stable identifier, unique within a catalog.
    pub id: &'static str,
    pub display_name: &'static str,
    /// Lowercase substrings matched against record text.
    pub keywords: &'static [&'static str],
    pub layer: Layer,
    pub category: Category,
    /// SVG path data in the `0 0 200 600` view box.
    pub outline: &'static str,
}

/// The regions of the body model for one gender, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    gender: Gender,
    regions: Vec<Region>,
}

impl Catalog {
    /// Builds the catalog for `gender`.
    pub fn new(gender: Gender) -> Self {
        let outlines = match gender {
            Gender::Male => &MALE,
            Gender::Female => &FEMALE,
        };
        Self {
            gender,
            regions: regions(outlines),
        }
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Regions in catalog order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn get(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Validates `id` and resolves it to a region of this catalog.
    ///
    /// # Errors
    ///
    /// Returns [`BodyMapError::InvalidRegionId`] for a malformed id and
    /// [`BodyMapError::InvalidInput`] for a well-formed id this catalog does not contain.
    pub fn lookup(&self, id: &str) -> BodyMapResult<&Region> {
        let id = RegionId::new(id)?;
        self.get(id.as_str()).ok_or_else(|| {
            BodyMapError::InvalidInput(format!("no region '{id}' in the {} catalog", self.gender))
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Zero-based catalog position of `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.regions.iter().position(|r| r.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.regions.iter().map(|r| r.id)
    }

    /// Regions sorted into draw order: `Base`, then `Internal`, then `Overlay`.
    ///
    /// The sort is stable, so catalog order is kept within a layer.
    pub fn draw_order(&self) -> Vec<&Region> {
        let mut ordered: Vec<&Region> = self.regions.iter().collect();
        ordered.sort_by_key(|r| r.layer);
        ordered
    }
}

/// Returns the catalog for `gender`.
///
/// Prefer borrowing from a [`CatalogSet`] where one is available.
pub fn get_catalog(gender: Gender) -> Catalog {
    Catalog::new(gender)
}

/// Both gender catalogs, built once.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSet {
    male: Catalog,
    female: Catalog,
}

impl CatalogSet {
    pub fn new() -> Self {
        Self {
            male: Catalog::new(Gender::Male),
            female: Catalog::new(Gender::Female),
        }
    }

    pub fn get(&self, gender: Gender) -> &Catalog {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// Looks up a catalog from a free-form host value, falling back to the male catalog.
    pub fn for_input(&self, gender: Option<&str>) -> &Catalog {
        if Gender::is_defaulted(gender) {
            tracing::debug!(input = ?gender, "unrecognised gender, using Male catalog");
        }
        self.get(Gender::resolve(gender))
    }
}

impl Default for CatalogSet {
    fn default() -> Self {
        Self::new()
    }
}

fn regions(p: &BaseOutlines) -> Vec<Region> {
    use Category::*;
    use Layer::{Base, Internal, Overlay};

    fn region(
        id: &'static str,
        display_name: &'static str,
        keywords: &'static [&'static str],
        layer: Layer,
        category: Category,
        outline: &'static str,
    ) -> Region {
        Region {
            id,
            display_name,
            keywords,
            layer,
            category,
            outline,
        }
    }

    vec![
        region(
            "head",
            "Head & Brain",
            &["brain", "neuro", "head", "migraine", "psych"],
            Base,
            Neuro,
            p.head,
        ),
        region("neck", "Neck & Throat", &["throat", "thyroid", "neck"], Base, Throat, p.neck),
        region(
            "shoulders",
            "Shoulders",
            &["shoulder", "rotator", "clavicle"],
            Base,
            Musculoskeletal,
            p.shoulders,
        ),
        region("chest", "Chest", &["chest", "breast", "pectoral"], Base, Thoracic, p.chest),
        region("abdomen", "Abdomen", &["stomach", "belly", "abdomen"], Base, Digestive, p.abdomen),
        region(
            "genitals",
            "Reproductive & Urinary",
            &["genital", "sex", "urinary", "reproductive", "prostate", "uterine", "bladder"],
            Base,
            Reproductive,
            p.genitals,
        ),
        region("thighs", "Thighs", &["thigh", "femur"], Base, Musculoskeletal, p.thighs),
        region("knees", "Knees", &["knee", "meniscus", "acl"], Base, Musculoskeletal, p.knees),
        region("calves", "Calves & Shins", &["calf", "shin"], Base, Musculoskeletal, p.calves),
        region("ankles", "Ankles", &["ankle"], Base, Musculoskeletal, p.ankles),
        region("feet", "Feet", &["foot", "feet", "toe", "plantar"], Base, Musculoskeletal, p.feet),
        region("arms", "Arms", &["arm", "bicep", "elbow"], Base, Musculoskeletal, p.arms),
        region(
            "hands",
            "Hands & Wrists",
            &["hand", "wrist", "carpal"],
            Base,
            Musculoskeletal,
            p.hands,
        ),
        region("fingers", "Fingers", &["finger", "thumb"], Base, Musculoskeletal, p.fingers),
        region("brain", "Brain", &["brain", "stroke", "seizure"], Internal, Neuro, INTERNAL.brain),
        region(
            "lungs",
            "Lungs",
            &["lung", "respiratory", "asthma", "pneumonia"],
            Internal,
            Respiratory,
            INTERNAL.lungs,
        ),
        region(
            "heart",
            "Heart",
            &["heart", "cardio", "coronary", "atrial"],
            Internal,
            Cardio,
            INTERNAL.heart,
        ),
        region("liver", "Liver & Gut", &["liver", "hepatic"], Internal, Hepatic, INTERNAL.liver),
        region(
            "colon",
            "Colon & Rectum",
            &["colon", "rectum", "bowel", "hemorrhoids", "anal", "digestive"],
            Internal,
            Digestive,
            INTERNAL.colon,
        ),
        region(
            "veins",
            "Circulatory / Veins",
            &["vein", "dvt", "vascular", "blood", "thrombosis"],
            Overlay,
            Vascular,
            INTERNAL.veins,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_region_ids_are_unique() {
        for gender in Gender::ALL {
            let catalog = Catalog::new(gender);
            let ids: HashSet<_> = catalog.ids().collect();
            assert_eq!(ids.len(), catalog.regions().len());
        }
    }

    #[test]
    fn test_catalogs_share_everything_but_outlines() {
        let male = Catalog::new(Gender::Male);
        let female = Catalog::new(Gender::Female);
        assert_eq!(male.regions().len(), female.regions().len());

        for (m, f) in male.regions().iter().zip(female.regions()) {
            assert_eq!(m.id, f.id);
            assert_eq!(m.display_name, f.display_name);
            assert_eq!(m.keywords, f.keywords);
            assert_eq!(m.layer, f.layer);
            assert_eq!(m.category, f.category);
        }

        assert_ne!(male.get("thighs").unwrap().outline, female.get("thighs").unwrap().outline);
        assert_eq!(male.get("heart").unwrap().outline, female.get("heart").unwrap().outline);
    }

    #[test]
    fn test_keywords_are_non_empty_lowercase() {
        for region in Catalog::new(Gender::Male).regions() {
            assert!(!region.keywords.is_empty(), "{} has no keywords", region.id);
            for keyword in region.keywords {
                assert!(!keyword.is_empty());
                assert_eq!(*keyword, keyword.to_lowercase(), "{} keyword {keyword}", region.id);
            }
            assert!(!region.outline.is_empty());
        }
    }

    #[test]
    fn test_keyword_may_belong_to_several_regions() {
        let catalog = Catalog::new(Gender::Male);
        assert!(catalog.get("head").unwrap().keywords.contains(&"brain"));
        assert!(catalog.get("brain").unwrap().keywords.contains(&"brain"));
    }

    #[test]
    fn test_fan_out_regions_exist() {
        let catalog = Catalog::new(Gender::Female);
        for id in crate::constants::LEG_FANOUT_REGIONS {
            assert!(catalog.contains(id), "missing {id}");
        }
    }

    #[test]
    fn test_draw_order_is_layered_and_stable() {
        let catalog = Catalog::new(Gender::Male);
        let ordered = catalog.draw_order();
        assert_eq!(ordered.len(), catalog.regions().len());

        let layers: Vec<Layer> = ordered.iter().map(|r| r.layer).collect();
        let mut sorted = layers.clone();
        sorted.sort();
        assert_eq!(layers, sorted);

        assert_eq!(ordered.first().unwrap().id, "head");
        assert_eq!(ordered.last().unwrap().id, "veins");
        let internal: Vec<_> = ordered
            .iter()
            .filter(|r| r.layer == Layer::Internal)
            .map(|r| r.id)
            .collect();
        assert_eq!(internal, vec!["brain", "lungs", "heart", "liver", "colon"]);
    }

    #[test]
    fn test_lookup_validates_and_resolves() {
        let catalog = get_catalog(Gender::Female);
        assert_eq!(catalog.lookup(" heart ").unwrap().display_name, "Heart");
        assert!(matches!(catalog.lookup("he@rt"), Err(BodyMapError::InvalidRegionId(_))));
        assert!(matches!(
            catalog.lookup("tail"),
            Err(BodyMapError::InvalidInput(msg)) if msg.contains("Female")
        ));
    }

    #[test]
    fn test_position_is_catalog_index() {
        let catalog = Catalog::new(Gender::Male);
        assert_eq!(catalog.position("head"), Some(0));
        assert_eq!(catalog.position("veins"), Some(19));
        assert_eq!(catalog.position("tail"), None);
    }

    #[test]
    fn test_catalog_set_defaults_unknown_gender_to_male() {
        let set = CatalogSet::new();
        assert_eq!(set.for_input(None).gender(), Gender::Male);
        assert_eq!(set.for_input(Some("robot")).gender(), Gender::Male);
        assert_eq!(set.for_input(Some("female")).gender(), Gender::Female);
        assert_eq!(get_catalog(Gender::Female), *set.get(Gender::Female));
    }
}
