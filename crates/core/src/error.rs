#[derive(Debug, thiserror::Error)]
pub enum BodyMapError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid region id: {0}")]
    InvalidRegionId(#[from] bodymap_types::RegionIdError),
    #[error("failed to read records file: {0}")]
    FileRead(std::io::Error),
    #[error("invalid YAML: {0}")]
    InvalidYaml(serde_yaml::Error),
    #[error("translation error: {0}")]
    Translation(String),
    #[error("failed to serialize output: {0}")]
    Serialization(serde_json::Error),
}

pub type BodyMapResult<T> = std::result::Result<T, BodyMapError>;
