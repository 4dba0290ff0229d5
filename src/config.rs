use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub feedback: FeedbackSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Transactional email API used for user feedback
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackSettings {
    #[serde(default = "default_feedback_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub to_email: String,
    #[serde(default = "default_feedback_subject")]
    pub subject: String,
    #[serde(default = "default_feedback_from_name")]
    pub from_name: String,
    pub timeout_secs: Option<u64>,
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            endpoint: default_feedback_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            user_id: String::new(),
            to_email: String::new(),
            subject: default_feedback_subject(),
            from_name: default_feedback_from_name(),
            timeout_secs: None,
        }
    }
}

fn default_feedback_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}
fn default_feedback_subject() -> String { "Love compatibility - user feedback".to_string() }
fn default_feedback_from_name() -> String { "Service user".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with LUME_)
    /// 5. EMAILJS_* credentials
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., LUME_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("LUME")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    ///
    /// Same environment overrides as `load`, without the config/ files.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("LUME")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }
}

/// Apply email API credentials from their conventional variable names
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let overrides = [
        ("EMAILJS_SERVICE_ID", "feedback.service_id"),
        ("EMAILJS_TEMPLATE_ID", "feedback.template_id"),
        ("EMAILJS_USER_ID", "feedback.user_id"),
        ("FEEDBACK_TO_EMAIL", "feedback.to_email"),
    ];

    let mut builder = Config::builder().add_source(settings);
    for (var, key) in overrides {
        if let Ok(value) = env::var(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_feedback_settings() {
        let feedback = FeedbackSettings::default();
        assert_eq!(feedback.endpoint, "https://api.emailjs.com/api/v1.0/email/send");
        assert!(feedback.service_id.is_empty());
        assert_eq!(feedback.timeout_secs, None);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "compact");
    }

    fn write_temp_config(contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("lume-compat-{}.toml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", contents).unwrap();
        path
    }

    // Env overrides are process-wide, so file and env cases share one test
    #[test]
    fn test_load_from_file_and_env_overrides() {
        let path = write_temp_config("[server]\nport = 8080\n\n[feedback]\nservice_id = \"svc\"\n");

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.feedback.service_id, "svc");
        assert_eq!(settings.logging.level, "info");

        std::env::set_var("LUME_SERVER__PORT", "9191");
        std::env::set_var("EMAILJS_SERVICE_ID", "service_from_env");
        let overridden = Settings::load_from(&path);
        std::env::remove_var("LUME_SERVER__PORT");
        std::env::remove_var("EMAILJS_SERVICE_ID");
        std::fs::remove_file(&path).ok();

        let overridden = overridden.unwrap();
        assert_eq!(overridden.server.port, 9191);
        assert_eq!(overridden.feedback.service_id, "service_from_env");
    }
}
