use std::path::Path;

use serde::de::DeserializeOwned;

use crate::ConfigError;

/// Load a YAML (or JSON) document from disk into `T`.
///
/// Used for the caller-supplied inputs that do not fit on a command line:
/// collaborator directories, user profiles, and saved trend records.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or does not deserialize into `T`.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::DocumentIo {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_yaml::from_str(&content).map_err(|e| ConfigError::DocumentParse {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::TrendRecord;

    fn config_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
    }

    #[test]
    fn load_trend_from_real_file() {
        let path = config_dir().join("trend.yaml");
        let trend: TrendRecord = load_document(&path).expect("failed to load trend.yaml");
        assert_eq!(trend.name, "Sustainable Fashion");
        assert_eq!(trend.score, 94);
        assert_eq!(trend.keywords.len(), 3);
        assert!(trend.ai_analysis.is_none());
    }

    #[test]
    fn load_collaborators_from_real_file() {
        let path = config_dir().join("collaborators.yaml");
        let collaborators: Vec<serde_json::Value> =
            load_document(&path).expect("failed to load collaborators.yaml");
        assert!(collaborators.len() > 5, "fixture should exceed the prompt cap");
        assert!(collaborators.iter().all(|c| c.get("id").is_some()));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = config_dir().join("does-not-exist.yaml");
        let err = load_document::<serde_json::Value>(&path).unwrap_err();
        assert!(matches!(err, ConfigError::DocumentIo { .. }));
    }

    #[test]
    fn wrong_shape_is_parse_error() {
        let path = config_dir().join("profile.yaml");
        let err = load_document::<Vec<TrendRecord>>(&path).unwrap_err();
        assert!(matches!(err, ConfigError::DocumentParse { .. }));
    }
}
