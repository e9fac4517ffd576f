//! Site configuration.
//!
//! Loads optional `.renu/site.toml` from the site root, or an explicit
//! TOML/JSON file given on the command line.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use renu_sections::ClientAssets;
use renu_sections::contact::SubmitAction;
use renu_sections::rich_text::RichTextMode;
use renu_sections::types::{Page, Section};

/// Failure to load an explicitly requested config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML in {}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported config extension for {} (expected .toml or .json)", path.display())]
    UnsupportedExtension { path: PathBuf },
}

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// How editor-authored HTML is treated before rendering
    pub rich_text: RichTextMode,
    pub client: ClientConfig,
    pub contact: ContactConfig,
    /// Document metadata and ordered sections
    pub page: Page,
}

/// Browser client wiring
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// URL of the wasm-bindgen JS glue; empty or missing keeps the page static
    pub wasm_glue: Option<String>,
}

/// Site-wide contact form overrides
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Overrides the submit action of every footer form when set
    pub submit_action: Option<SubmitAction>,
}

impl SiteConfig {
    /// Load config from `.renu/site.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".renu").join("site.toml");
        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %error_chain(&e), "falling back to the default site");
                Self::default()
            }
        }
    }

    /// Load config from a specific `.toml` or `.json` file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let format = match extension.as_deref() {
            Some("toml") => Format::Toml,
            Some("json") => Format::Json,
            _ => {
                return Err(ConfigError::UnsupportedExtension {
                    path: path.to_path_buf(),
                });
            }
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match format {
            Format::Toml => toml::from_str(&content).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            }),
            Format::Json => serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Page ready for rendering: rich text filtered, contact overrides applied.
    pub fn resolved_page(&self) -> Page {
        let mut page = self.page.clone();
        page.filter_rich_text(self.rich_text.filter());

        if let Some(action) = self.contact.submit_action {
            for section in &mut page.sections {
                if let Section::Footer(footer) = section {
                    footer.form.submit_action = action;
                }
            }
        }
        page
    }

    /// Client assets for the renderer; `override_glue` wins over the file.
    pub fn client_assets(&self, override_glue: Option<&str>) -> ClientAssets {
        let glue = override_glue
            .or(self.client.wasm_glue.as_deref())
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string);
        ClientAssets {
            wasm_glue_path: glue,
        }
    }
}

enum Format {
    Toml,
    Json,
}

/// `error: cause: cause` on one line, for log fields.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(file, "{body}").expect("write config");
        path
    }

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.page.sections.len(), 13);
        assert_eq!(config.rich_text, RichTextMode::Verbatim);
        assert_eq!(config.client.wasm_glue, None);
        assert_eq!(config.contact.submit_action, None);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load(temp.path());
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let renu_dir = temp.path().join(".renu");
        std::fs::create_dir_all(&renu_dir).expect("create .renu");
        write_file(
            &renu_dir,
            "site.toml",
            r#"
rich_text = "escape"

[client]
wasm_glue = "/pkg/renu_sections_wasm.js"

[contact]
submit_action = "navigate"

[page]
title = "Renu | Teste"

[[page.sections]]
type = "hero"
chatButtonText = "Fale conosco"

[[page.sections]]
type = "footer"
"#,
        );

        let config = SiteConfig::load(temp.path());
        assert_eq!(config.page.title, "Renu | Teste");
        assert_eq!(config.page.lang, "pt-BR");
        assert_eq!(config.page.sections.len(), 2);
        assert_eq!(config.rich_text, RichTextMode::Escape);
        assert_eq!(config.contact.submit_action, Some(SubmitAction::Navigate));
        match &config.page.sections[0] {
            Section::Hero(hero) => assert_eq!(hero.chat_button_text, "Fale conosco"),
            other => panic!("expected hero, got {}", other.kind()),
        }
    }

    #[test]
    fn test_load_invalid_toml_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        let renu_dir = temp.path().join(".renu");
        std::fs::create_dir_all(&renu_dir).expect("create .renu");
        write_file(&renu_dir, "site.toml", "[page\ntitle = ");

        let config = SiteConfig::load(temp.path());
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_from_path_is_strict() {
        let temp = TempDir::new().expect("temp dir");

        let bad = write_file(temp.path(), "site.toml", "[page\n");
        assert!(matches!(
            SiteConfig::load_from_path(&bad),
            Err(ConfigError::Toml { .. })
        ));

        let yaml = write_file(temp.path(), "site.yaml", "page: {}");
        assert!(matches!(
            SiteConfig::load_from_path(&yaml),
            Err(ConfigError::UnsupportedExtension { .. })
        ));

        let missing = temp.path().join("nope.toml");
        assert!(matches!(
            SiteConfig::load_from_path(&missing),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_load_json_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_file(
            temp.path(),
            "site.json",
            r#"{"page": {"sections": [{"type": "logos", "title": "Parceiros"}]}}"#,
        );

        let config = SiteConfig::load_from_path(&path).expect("valid json");
        assert_eq!(config.page.sections.len(), 1);
        assert_eq!(config.page.sections[0].kind(), "logos");
    }

    #[test]
    fn test_resolved_page_applies_overrides() {
        let config = SiteConfig {
            rich_text: RichTextMode::Escape,
            contact: ContactConfig {
                submit_action: Some(SubmitAction::Navigate),
            },
            ..Default::default()
        };

        let page = config.resolved_page();
        let footer = page
            .sections
            .iter()
            .find_map(|s| match s {
                Section::Footer(f) => Some(f),
                _ => None,
            })
            .expect("default page has a footer");
        assert_eq!(footer.form.submit_action, SubmitAction::Navigate);

        let about = page
            .sections
            .iter()
            .find_map(|s| match s {
                Section::About(a) => Some(a),
                _ => None,
            })
            .expect("default page has an about section");
        assert!(about.content.as_str().starts_with("&lt;p&gt;"));
    }

    #[test]
    fn test_client_assets_override_and_blank() {
        let config = SiteConfig {
            client: ClientConfig {
                wasm_glue: Some("/pkg/a.js".into()),
            },
            ..Default::default()
        };
        assert_eq!(
            config.client_assets(None).wasm_glue_path.as_deref(),
            Some("/pkg/a.js")
        );
        assert_eq!(
            config.client_assets(Some("/pkg/b.js")).wasm_glue_path.as_deref(),
            Some("/pkg/b.js")
        );
        assert_eq!(config.client_assets(Some("  ")).wasm_glue_path, None);
    }
}
