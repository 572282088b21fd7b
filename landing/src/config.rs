//! Loading a [`PageConfig`] from disk.
//!
//! The format follows the file extension: `.toml` or `.json`. Field names are
//! camelCase in both (`brandName`, `navItems`, `features`).

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::PageConfig;

/// Errors raised while loading a page config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Offending file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The file is not valid TOML for a page config
    #[error("failed to parse {} as TOML: {source}", path.display())]
    Toml {
        /// Offending file
        path: PathBuf,
        /// Underlying parse error
        source: toml::de::Error,
    },
    /// The file is not valid JSON for a page config
    #[error("failed to parse {} as JSON: {source}", path.display())]
    Json {
        /// Offending file
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },
    /// The extension is neither `.toml` nor `.json`
    #[error("unsupported config format for {} (expected .toml or .json)", path.display())]
    UnsupportedFormat {
        /// Offending file
        path: PathBuf,
    },
}

/// On-disk formats a page config can be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML document
    Toml,
    /// JSON object
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension, if it is one we read.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse `content` as a page config in the given format.
///
/// `path` is only used for error messages.
pub fn parse_page_config(
    content: &str,
    format: ConfigFormat,
    path: &Path,
) -> Result<PageConfig, ConfigError> {
    match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        }),
        ConfigFormat::Json => serde_json::from_str(content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load a page config from `path`.
pub fn load_page_config(path: &Path) -> Result<PageConfig, ConfigError> {
    let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_page_config(&content, format, path)?;
    tracing::debug!(
        path = %path.display(),
        nav_items = config.nav_items.as_ref().map(|items| items.len()),
        features = config.features.as_ref().map(|features| features.len()),
        "loaded page config"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create config");
        write!(file, "{content}").expect("write config");
        path
    }

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_path(Path::new("a.JSON")), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn loads_toml_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = write(
            &temp,
            "page.toml",
            r#"
brandName = "Acme"

[[navItems]]
href = "/docs"
label = "Docs"

[[navItems]]
href = "/join"
label = "Join"
style = "nav-link nav-link-primary"
"#,
        );

        let config = load_page_config(&path).expect("valid toml");
        assert_eq!(config.brand_name(), "Acme");
        let items = config.nav_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].class(), "nav-link nav-link-primary");
        assert!(config.features.is_none());
    }

    #[test]
    fn loads_json_config_with_empty_features() {
        let temp = TempDir::new().expect("temp dir");
        let path = write(&temp, "page.json", r#"{ "features": [] }"#);

        let config = load_page_config(&path).expect("valid json");
        assert!(config.features().is_empty());
        assert_eq!(config.brand_name(), "YourApp");
    }

    #[test]
    fn reports_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let err = load_page_config(&temp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let temp = TempDir::new().expect("temp dir");
        let path = write(&temp, "broken.toml", "brandName = [");

        let err = load_page_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = load_page_config(Path::new("page.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
    }
}
