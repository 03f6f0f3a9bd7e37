//! # Body Map Types
//!
//! Small vocabulary types shared by every body map crate.
//!
//! - [`Gender`]: selects which of the two geometry sets a catalog draws with.
//! - [`Layer`]: draw-order and visibility class of a region.
//! - [`RegionId`]: a validated region identifier as supplied by a host (CLI, REST, UI shell).

use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing host-supplied vocabulary values.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegionIdError {
    /// The input was empty or contained only whitespace
    #[error("region id cannot be empty")]
    Empty,
    /// The input was longer than [`RegionId::MAX_LEN`]
    #[error("region id exceeds maximum length of {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
    /// The input contained characters outside `a-z`, `0-9`, `_` and `-`
    #[error("region id may only contain lowercase alphanumerics, '_' and '-'")]
    InvalidCharacters,
}

/// Error returned by the strict [`Gender`] parser.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unrecognised gender: {0:?}")]
pub struct GenderError(pub String);

/// Which geometry set a catalog uses.
///
/// Region ids and keywords are identical for both variants; only outlines differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Both variants, in catalog order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Resolve a free-form host value to a gender.
    ///
    /// Anything that is not recognisably "female" (case-insensitive, surrounding whitespace
    /// ignored) resolves to [`Gender::Male`], including `None`. Rendering must never fail on bad
    /// gender input, so this never errors. Use [`Gender::from_str`] for strict parsing.
    pub fn resolve(input: Option<&str>) -> Self {
        match input.map(str::parse::<Gender>) {
            Some(Ok(gender)) => gender,
            _ => Gender::Male,
        }
    }

    /// Returns `true` when [`Gender::resolve`] would have to fall back to the default.
    pub fn is_defaulted(input: Option<&str>) -> bool {
        !matches!(input.map(str::parse::<Gender>), Some(Ok(_)))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Upper-case label used in the twin header.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

impl FromStr for Gender {
    type Err = GenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(GenderError(s.to_owned())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Draw-order and visibility class of a region.
///
/// Variant order is draw order: `Base` first, then `Internal`, then `Overlay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Outer silhouette, always drawn.
    Base,
    /// Organs, invisible until active, hovered or selected.
    Internal,
    /// Stroke-drawn circulatory overlay, always faintly present.
    Overlay,
}

impl Layer {
    pub const DRAW_ORDER: [Layer; 3] = [Layer::Base, Layer::Internal, Layer::Overlay];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Base => "base",
            Layer::Internal => "internal",
            Layer::Overlay => "overlay",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A region identifier supplied from outside the catalog.
///
/// The input is trimmed. Catalog ids are lowercase ASCII words, so anything else is rejected
/// here rather than silently failing to match later.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionId(String);

impl RegionId {
    pub const MAX_LEN: usize = 64;

    pub fn new(input: impl AsRef<str>) -> Result<Self, RegionIdError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(RegionIdError::Empty);
        }

        let len = trimmed.chars().count();
        if len > Self::MAX_LEN {
            return Err(RegionIdError::TooLong {
                max: Self::MAX_LEN,
                actual: len,
            });
        }

        let ok = trimmed
            .bytes()
            .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-'));
        if !ok {
            return Err(RegionIdError::InvalidCharacters);
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RegionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for RegionId {
    type Err = RegionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegionId::new(s)
    }
}

impl PartialEq<str> for RegionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RegionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl serde::Serialize for RegionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for RegionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RegionId::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_resolve_defaults_to_male() {
        assert_eq!(Gender::resolve(None), Gender::Male);
        assert_eq!(Gender::resolve(Some("")), Gender::Male);
        assert_eq!(Gender::resolve(Some("unknown")), Gender::Male);
        assert_eq!(Gender::resolve(Some("Male")), Gender::Male);
    }

    #[test]
    fn test_gender_resolve_accepts_female_variants() {
        assert_eq!(Gender::resolve(Some("Female")), Gender::Female);
        assert_eq!(Gender::resolve(Some("female")), Gender::Female);
        assert_eq!(Gender::resolve(Some("  FEMALE ")), Gender::Female);
    }

    #[test]
    fn test_gender_is_defaulted() {
        assert!(Gender::is_defaulted(None));
        assert!(Gender::is_defaulted(Some("x")));
        assert!(!Gender::is_defaulted(Some("male")));
        assert!(!Gender::is_defaulted(Some("Female")));
    }

    #[test]
    fn test_gender_from_str_is_strict() {
        assert_eq!("male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!(
            "other".parse::<Gender>(),
            Err(GenderError("other".to_string()))
        );
    }

    #[test]
    fn test_gender_labels() {
        assert_eq!(Gender::Female.as_str(), "Female");
        assert_eq!(Gender::Female.label(), "FEMALE");
        assert_eq!(Gender::Male.to_string(), "Male");
    }

    #[test]
    fn test_layer_order_matches_draw_order() {
        let mut layers = vec![Layer::Overlay, Layer::Base, Layer::Internal];
        layers.sort();
        assert_eq!(layers, Layer::DRAW_ORDER.to_vec());
    }

    #[test]
    fn test_layer_serialises_lowercase() {
        let json = serde_json::to_string(&Layer::Internal).unwrap();
        assert_eq!(json, "\"internal\"");
    }

    #[test]
    fn test_region_id_accepts_and_trims() {
        let id = RegionId::new("  knees ").unwrap();
        assert_eq!(id.as_str(), "knees");
        assert_eq!(id, "knees");
    }

    #[test]
    fn test_region_id_rejects_invalid_input() {
        assert_eq!(RegionId::new("   "), Err(RegionIdError::Empty));
        assert_eq!(
            RegionId::new("Knees"),
            Err(RegionIdError::InvalidCharacters)
        );
        assert_eq!(
            RegionId::new("left knee"),
            Err(RegionIdError::InvalidCharacters)
        );
        assert!(matches!(
            RegionId::new("a".repeat(65)),
            Err(RegionIdError::TooLong { max: 64, actual: 65 })
        ));
    }

    #[test]
    fn test_region_id_deserialize_validates() {
        let id: RegionId = serde_json::from_str("\"liver\"").unwrap();
        assert_eq!(id.as_str(), "liver");
        assert!(serde_json::from_str::<RegionId>("\"\"").is_err());
    }
}
