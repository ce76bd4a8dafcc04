use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use idguard_core::FIELD_ID;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "idguard";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_SUBMIT_LABEL: &str = "Analyze";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub form: FormConfig,
    pub alerts: AlertsConfig,
}

#[derive(Debug, Clone)]
pub struct FormConfig {
    pub field_id: String,
    pub submit_label: String,
}

#[derive(Debug, Clone)]
pub struct AlertsConfig {
    pub backend: AlertBackend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertBackend {
    Stderr,
    Desktop,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            form: FormConfig {
                field_id: FIELD_ID.to_string(),
                submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
            },
            alerts: AlertsConfig {
                backend: AlertBackend::Stderr,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid form.field_id value: {0:?}")]
    InvalidFieldId(String),
    #[error("invalid form.submit_label value: {0:?}")]
    InvalidSubmitLabel(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    form: Option<FormFile>,
    alerts: Option<AlertsFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FormFile {
    field_id: Option<String>,
    submit_label: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AlertsFile {
    backend: Option<AlertBackend>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(form) = parsed.form {
        if let Some(field_id) = form.field_id {
            config.form.field_id = validate_field_id(field_id)?;
        }
        if let Some(label) = form.submit_label {
            let trimmed = label.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::InvalidSubmitLabel(label));
            }
            config.form.submit_label = trimmed.to_string();
        }
    }

    if let Some(alerts) = parsed.alerts {
        if let Some(backend) = alerts.backend {
            config.alerts.backend = backend;
        }
    }

    Ok(config)
}

// Element ids may not be empty or contain whitespace.
fn validate_field_id(field_id: String) -> Result<String> {
    if field_id.is_empty() || field_id.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidFieldId(field_id));
    }
    Ok(field_id)
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
