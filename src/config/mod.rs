use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Environment variable consulted when no token is configured.
pub const TOKEN_ENV: &str = "TRANSGO_API_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub api_token: String,
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub export_dir: Option<String>,
}

fn default_api_base_url() -> String {
    "https://api.transgo.id/api/v1".to_string()
}
fn default_page_limit() -> u32 {
    10
}
fn default_search_debounce_ms() -> u64 {
    500
}
fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_token: String::new(),
            page_limit: default_page_limit(),
            search_debounce_ms: default_search_debounce_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            export_dir: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("transgo-admin")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".transgo-admin")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("transgo-admin.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Apply command-line overrides, then fill an empty token from the environment.
    pub fn with_overrides(mut self, api_url: Option<&str>, token: Option<&str>) -> Self {
        if let Some(url) = api_url {
            self.api_base_url = url.to_string();
        }
        if let Some(t) = token {
            self.api_token = t.to_string();
        }
        if self.api_token.trim().is_empty()
            && let Ok(t) = env::var(TOKEN_ENV)
        {
            self.api_token = t;
        }
        self
    }

    /// Copy safe to print: the token is reduced to its last four characters.
    pub fn masked(&self) -> Self {
        let mut c = self.clone();
        let t = c.api_token.trim();
        if !t.is_empty() {
            let tail: String = t
                .chars()
                .rev()
                .take(4)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            c.api_token = format!("****{tail}");
        }
        c
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn validate(&self) -> AppResult<()> {
        let url = self.api_base_url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "api_base_url must start with http:// or https:// (got '{url}')"
            )));
        }
        if self.page_limit == 0 {
            return Err(AppError::Config("page_limit must be at least 1".into()));
        }
        Ok(())
    }

    /// Initialize the configuration directory and file.
    ///
    /// An existing file is left alone; in test mode nothing is written.
    pub fn init_all(api_url: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let path = Self::config_file();

        if is_test {
            return Ok(path);
        }

        fs::create_dir_all(Self::config_dir())?;

        if path.exists() {
            return Ok(path);
        }

        let mut config = Config::default();
        if let Some(url) = api_url {
            config.api_base_url = url.to_string();
        }

        let yaml = config.to_yaml()?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }
}
