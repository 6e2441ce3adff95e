use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub channel: ChannelConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChannelConfig {
    /// Upper bound on typed slug length, same limit as the channel name.
    #[serde(default = "default_max_slug_length")]
    pub max_slug_length: usize,
    /// Prefix the slug is appended to when showing the full channel URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            max_slug_length: default_max_slug_length(),
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Delay before the URL tooltip shows. Display-only.
    #[serde(default = "default_tooltip_delay_ms")]
    pub tooltip_delay_ms: u64,
    #[serde(default = "default_display_max_chars")]
    pub display_max_chars: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tooltip_delay_ms: default_tooltip_delay_ms(),
            display_max_chars: default_display_max_chars(),
        }
    }
}

fn default_max_slug_length() -> usize {
    50
}

fn default_base_url() -> String {
    "https://example.com/c/".to_string()
}

fn default_tooltip_delay_ms() -> u64 {
    500
}

fn default_display_max_chars() -> usize {
    40
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Could not read config file '{}': {}", path.display(), e)
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// A missing config file is not an error for the CLI; defaults apply.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.channel.max_slug_length < 2 {
            anyhow::bail!("channel.max_slug_length must be at least 2");
        }
        if Url::parse(&self.channel.base_url).is_err() {
            anyhow::bail!(
                "channel.base_url '{}' must be an absolute URL",
                self.channel.base_url
            );
        }
        if self.ui.display_max_chars < 4 {
            anyhow::bail!("ui.display_max_chars must be at least 4");
        }
        Ok(())
    }
}
