use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub page: PageShellConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Settings for a single paged list instance.
///
/// Every field has a default, so a partial `[list]` table (or none at all)
/// yields a usable configuration. The values are fixed once a list is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Number of items shown per page (must be > 0)
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    /// Id of the element that receives the item list
    #[serde(default = "default_list_id")]
    pub list_id: String,
    /// Id of the element that receives the pager controls
    #[serde(default = "default_pagination_id")]
    pub pagination_id: String,
    /// Prefix joined with each item's path to build the link target
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,
    /// Class of each `<li>` entry
    #[serde(default = "default_list_class")]
    pub list_class: String,
    /// Class of the title link
    #[serde(default = "default_link_class")]
    pub link_class: String,
    /// Class of the date label
    #[serde(default = "default_date_class")]
    pub date_class: String,
    /// Hook classes added to the prev/next buttons, used for listener binding
    #[serde(default)]
    pub button_classes: ButtonClasses,
    /// Button captions
    #[serde(default)]
    pub labels: ButtonLabels,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            list_id: default_list_id(),
            pagination_id: default_pagination_id(),
            path_prefix: default_path_prefix(),
            list_class: default_list_class(),
            link_class: default_link_class(),
            date_class: default_date_class(),
            button_classes: ButtonClasses::default(),
            labels: ButtonLabels::default(),
        }
    }
}

impl ListConfig {
    /// Reject settings no list can be built from
    pub fn validate(&self) -> crate::Result<()> {
        if self.items_per_page == 0 {
            return Err(crate::Error::Config(
                "items_per_page must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Selector matching the "previous" control
    pub fn prev_selector(&self) -> String {
        format!(".{}", self.button_classes.prev)
    }

    /// Selector matching the "next" control
    pub fn next_selector(&self) -> String {
        format!(".{}", self.button_classes.next)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonClasses {
    #[serde(default = "default_prev_class")]
    pub prev: String,
    #[serde(default = "default_next_class")]
    pub next: String,
}

impl Default for ButtonClasses {
    fn default() -> Self {
        Self {
            prev: default_prev_class(),
            next: default_next_class(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonLabels {
    #[serde(default = "default_prev_label")]
    pub prev: String,
    #[serde(default = "default_next_label")]
    pub next: String,
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            prev: default_prev_label(),
            next: default_next_label(),
        }
    }
}

/// Page shell written around the two containers by the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageShellConfig {
    /// Document title
    #[serde(default = "default_page_title")]
    pub title: String,
    /// Optional stylesheet href
    #[serde(default)]
    pub stylesheet: Option<String>,
    /// `lang` attribute of the html element
    #[serde(default = "default_lang")]
    pub lang: String,
}

impl Default for PageShellConfig {
    fn default() -> Self {
        Self {
            title: default_page_title(),
            stylesheet: None,
            lang: default_lang(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_items_per_page() -> usize {
    10
}

fn default_list_id() -> String {
    "js-magazine-list".to_string()
}

fn default_pagination_id() -> String {
    "js-pagination".to_string()
}

fn default_path_prefix() -> String {
    "../images/magazine".to_string()
}

fn default_list_class() -> String {
    "magazine-item".to_string()
}

fn default_link_class() -> String {
    "link".to_string()
}

fn default_date_class() -> String {
    "date".to_string()
}

fn default_prev_class() -> String {
    "js-prev-button".to_string()
}

fn default_next_class() -> String {
    "js-next-button".to_string()
}

fn default_prev_label() -> String {
    "前へ".to_string()
}

fn default_next_label() -> String {
    "次へ".to_string()
}

fn default_page_title() -> String {
    "Magazines".to_string()
}

fn default_lang() -> String {
    "ja".to_string()
}

impl AppConfig {
    /// Load configuration from the default location or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults when it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.list.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/magshelf/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("magshelf")
            .join("config.toml")
    }
}
