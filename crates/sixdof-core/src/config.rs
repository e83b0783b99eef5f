use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Links;

fn default_name() -> String {
    "arm".into()
}

// ---------------------------------------------------------------------------
// ArmConfig
// ---------------------------------------------------------------------------

/// Physical arm definition, typically loaded from TOML.
///
/// ```toml
/// name = "bench_arm"
/// links = [
///     [1.0, 1.0, 0.0],
///     [0.0, 10.0, 0.0],
///     [5.0, 0.0, 0.0],
///     [3.0, 0.0, 0.0],
///     [0.0, -3.0, 0.0],
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmConfig {
    /// Human-readable arm name (default: "arm").
    #[serde(default = "default_name")]
    pub name: String,

    /// Link offsets `[x, y, z]`, base first. Exactly five are required.
    pub links: Vec<[f64; 3]>,
}

impl ArmConfig {
    pub fn new(name: impl Into<String>, links: Vec<[f64; 3]>) -> Self {
        Self {
            name: name.into(),
            links,
        }
    }

    /// Validate the link table. Returns the checked [`Links`] on success.
    pub fn validate(&self) -> Result<Links, ConfigError> {
        Ok(Links::from_slice(&self.links)?)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;

    const BENCH_ARM: &str = r#"
        name = "bench_arm"
        links = [
            [1.0, 1.0, 0.0],
            [0.0, 10.0, 0.0],
            [5.0, 0.0, 0.0],
            [3.0, 0.0, 0.0],
            [0.0, -3.0, 0.0],
        ]
    "#;

    #[test]
    fn arm_config_toml_deserialization() {
        let cfg = ArmConfig::from_toml_str(BENCH_ARM).unwrap();
        assert_eq!(cfg.name, "bench_arm");
        assert_eq!(cfg.links.len(), 5);
        assert!((cfg.links[1][1] - 10.0).abs() < f64::EPSILON);
        assert!((cfg.links[4][1] - (-3.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn arm_config_default_name() {
        let toml_str = r"
            links = [[1, 1, 1], [0, 8, 2], [0, 10, 0], [5, 0, 0], [0, -6, 0]]
        ";
        let cfg = ArmConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(cfg.name, "arm");
        assert!((cfg.links[1][2] - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn arm_config_missing_links() {
        let result = ArmConfig::from_toml_str(r#"name = "empty""#);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn arm_config_wrong_link_count() {
        let toml_str = r"
            links = [[1.0, 1.0, 0.0], [0.0, 10.0, 0.0]]
        ";
        let result = ArmConfig::from_toml_str(toml_str);
        assert!(matches!(
            result,
            Err(ConfigError::Geometry(GeometryError::WrongLinkCount { got: 2 }))
        ));
    }

    #[test]
    fn arm_config_validate_rejects_bent_wrist() {
        let cfg = ArmConfig::new(
            "bent",
            vec![
                [1.0, 1.0, 0.0],
                [0.0, 10.0, 0.0],
                [5.0, 0.0, 0.0],
                [3.0, 0.0, 0.0],
                [1.0, -3.0, 0.0],
            ],
        );
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Geometry(GeometryError::LinkFourNotAxial { .. }))
        ));
    }

    #[test]
    fn arm_config_serialize_roundtrip() {
        let cfg = ArmConfig::from_toml_str(BENCH_ARM).unwrap();
        let text = toml::to_string(&cfg).unwrap();
        let back = ArmConfig::from_toml_str(&text).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn arm_config_from_file() {
        let dir = std::env::temp_dir().join("sixdof_test_arm_config");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bench_arm.toml");
        std::fs::write(&path, BENCH_ARM).unwrap();

        let cfg = ArmConfig::from_file(&path).unwrap();
        assert_eq!(cfg.name, "bench_arm");
        assert!(cfg.validate().is_ok());

        // Cleanup
        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn arm_config_from_file_not_found() {
        let result = ArmConfig::from_file("/nonexistent/path/arm.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
