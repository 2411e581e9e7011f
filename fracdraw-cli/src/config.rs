//! Configuration file loading for fracdraw.
//!
//! Discovers and loads `fracdraw.toml` from the working directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fracdraw_types::glyph;
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "fracdraw.toml";

/// Top-level configuration from fracdraw.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FracdrawConfig {
    /// Rendering settings.
    pub render: RenderConfig,

    /// Request file settings.
    pub input: InputConfig,

    /// Where rendered output goes.
    pub output: OutputConfig,
}

/// Render section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Character used for drawn cells. Must be a single non-whitespace character.
    pub drawn_glyph: Option<String>,
}

/// Input section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Only accept request files ending in `.csv`.
    pub require_csv_extension: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            require_csv_extension: true,
        }
    }
}

/// Output section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write output to this file instead of stdout.
    pub path: Option<Utf8PathBuf>,
}

/// Discover the fracdraw.toml config file.
///
/// Searches for `fracdraw.toml` in `dir`.
/// Returns `None` if no config file is found.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a fracdraw.toml config file.
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<FracdrawConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<FracdrawConfig> {
    let config: FracdrawConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `dir`, or return default if not found.
pub fn load_or_default(dir: &Utf8Path) -> anyhow::Result<FracdrawConfig> {
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(FracdrawConfig::default()),
    }
}

/// Parse a glyph setting: exactly one character, not whitespace.
pub fn parse_glyph(value: &str) -> anyhow::Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Ok(c),
        (Some(c), None) => anyhow::bail!("invalid glyph {:?}: whitespace is not drawable", c),
        _ => anyhow::bail!(
            "invalid glyph '{}': expected exactly one character",
            value
        ),
    }
}

/// Merged configuration combining config file and CLI arguments.
///
/// CLI arguments take precedence over config file settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedConfig {
    /// Character for drawn cells.
    pub drawn_glyph: char,

    /// Whether request files must end in `.csv`.
    pub require_csv_extension: bool,

    /// Output file, or `None` for stdout.
    pub output: Option<Utf8PathBuf>,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: FracdrawConfig,
}

impl ConfigMerger {
    /// Create a new merger from a loaded config.
    pub fn new(config: FracdrawConfig) -> Self {
        Self { config }
    }

    /// Merge with draw command CLI arguments.
    ///
    /// `cli_glyph` and `cli_output` replace the config values when given.
    /// `allow_any_extension` switches the extension check off; it can't switch it back on.
    pub fn merge_draw_args(
        self,
        cli_glyph: Option<&str>,
        cli_output: Option<&Utf8Path>,
        allow_any_extension: bool,
    ) -> anyhow::Result<MergedConfig> {
        let drawn_glyph = match cli_glyph.or(self.config.render.drawn_glyph.as_deref()) {
            Some(value) => parse_glyph(value)?,
            None => glyph::DRAWN,
        };

        let output = cli_output
            .map(Utf8Path::to_path_buf)
            .or(self.config.output.path);

        Ok(MergedConfig {
            drawn_glyph,
            require_csv_extension: self.config.input.require_csv_extension
                && !allow_any_extension,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_example_config() {
        let contents = r##"
[render]
drawn_glyph = "*"

[input]
require_csv_extension = false

[output]
path = "out/fractals.txt"
"##;

        let config = parse_config(contents).unwrap();
        assert_eq!(config.render.drawn_glyph.as_deref(), Some("*"));
        assert!(!config.input.require_csv_extension);
        assert_eq!(
            config.output.path,
            Some(Utf8PathBuf::from("out/fractals.txt"))
        );
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert!(config.render.drawn_glyph.is_none());
        assert!(config.input.require_csv_extension);
        assert!(config.output.path.is_none());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_config("[render\n").unwrap_err();
        assert!(err.to_string().contains("invalid TOML"));
    }

    #[test]
    fn test_merge_defaults() {
        let merged = ConfigMerger::new(FracdrawConfig::default())
            .merge_draw_args(None, None, false)
            .unwrap();
        assert_eq!(
            merged,
            MergedConfig {
                drawn_glyph: '#',
                require_csv_extension: true,
                output: None,
            }
        );
    }

    #[test]
    fn test_merge_cli_overrides_config() {
        let config = FracdrawConfig {
            render: RenderConfig {
                drawn_glyph: Some("*".to_string()),
            },
            output: OutputConfig {
                path: Some(Utf8PathBuf::from("config.txt")),
            },
            ..Default::default()
        };

        let merged = ConfigMerger::new(config)
            .merge_draw_args(Some("@"), Some(Utf8Path::new("cli.txt")), false)
            .unwrap();
        assert_eq!(merged.drawn_glyph, '@');
        assert_eq!(merged.output, Some(Utf8PathBuf::from("cli.txt")));
    }

    #[test]
    fn test_merge_config_used_when_cli_absent() {
        let config = FracdrawConfig {
            render: RenderConfig {
                drawn_glyph: Some("*".to_string()),
            },
            input: InputConfig {
                require_csv_extension: false,
            },
            ..Default::default()
        };

        let merged = ConfigMerger::new(config)
            .merge_draw_args(None, None, false)
            .unwrap();
        assert_eq!(merged.drawn_glyph, '*');
        assert!(!merged.require_csv_extension);
    }

    #[test]
    fn test_allow_any_extension_disables_check() {
        let merged = ConfigMerger::new(FracdrawConfig::default())
            .merge_draw_args(None, None, true)
            .unwrap();
        assert!(!merged.require_csv_extension);
    }

    #[test]
    fn test_parse_glyph() {
        assert_eq!(parse_glyph("#").unwrap(), '#');
        assert_eq!(parse_glyph("█").unwrap(), '█');
        assert!(parse_glyph("").unwrap_err().to_string().contains("exactly one"));
        assert!(parse_glyph("ab").unwrap_err().to_string().contains("exactly one"));
        assert!(parse_glyph(" ").unwrap_err().to_string().contains("whitespace"));
    }

    #[test]
    fn test_merge_rejects_bad_config_glyph() {
        let config = FracdrawConfig {
            render: RenderConfig {
                drawn_glyph: Some("##".to_string()),
            },
            ..Default::default()
        };
        assert!(ConfigMerger::new(config)
            .merge_draw_args(None, None, false)
            .is_err());
    }

    #[test]
    fn test_discover_config_some_and_none() {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
        assert!(discover_config(&root).is_none());

        std::fs::write(root.join(CONFIG_FILE_NAME), "").expect("write config");
        assert!(discover_config(&root).is_some());
    }

    #[test]
    fn test_load_or_default_returns_default_when_missing() {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
        let cfg = load_or_default(&root).expect("load default");
        assert!(cfg.render.drawn_glyph.is_none());
        assert!(cfg.input.require_csv_extension);
    }
}
