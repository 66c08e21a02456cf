use crate::errors::{AppError, AppResult};
use crate::export::labels::ReportLabels;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

const APP_DIR: &str = ".horaslite";
const CONFIG_FILE: &str = "horaslite.conf";
const DATABASE_FILE: &str = "horaslite.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_reports_dir")]
    pub reports_dir: String,
    #[serde(default)]
    pub labels: ReportLabels,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_reports_dir() -> String {
    Config::config_dir()
        .join("reports")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            reports_dir: default_reports_dir(),
            labels: ReportLabels::default(),
        }
    }
}

impl Config {
    /// Configuration directory: `~/.horaslite`, or `./.horaslite` when the
    /// home directory cannot be resolved.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE)
    }

    /// Load the configuration file, or defaults if there is none.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn reports_path(&self) -> PathBuf {
        expand_tilde(&self.reports_dir)
    }

    /// Create the config directory and file. With `is_test` the file is not
    /// written. Returns the database path that was configured.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();

        let database = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() {
                    p
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: database.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config.database)
    }
}
