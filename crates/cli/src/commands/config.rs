use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use commonground_core::config::{AppConfig, LoadOptions};
use toml::Value;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];

    lines.push(render_line(
        "engine.max_per_bucket",
        &config
            .engine
            .max_per_bucket
            .map_or_else(|| "unlimited".to_string(), |cap| cap.to_string()),
        field_source(
            "engine.max_per_bucket",
            &["COMMONGROUND_MAX_PER_BUCKET"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        field_source(
            "logging.level",
            &["COMMONGROUND_LOGGING_LEVEL", "COMMONGROUND_LOG_LEVEL"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "logging.format",
        &format!("{:?}", config.logging.format).to_ascii_lowercase(),
        field_source(
            "logging.format",
            &["COMMONGROUND_LOGGING_FORMAT", "COMMONGROUND_LOG_FORMAT"],
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));

    lines.join("\n")
}

fn render_line(field: &str, value: &str, source: String) -> String {
    format!("  {field} = {value}  ({source})")
}

fn field_source(
    field: &str,
    env_keys: &[&str],
    doc: Option<&Value>,
    path: Option<&Path>,
) -> String {
    for key in env_keys {
        if env::var(key).map(|value| !value.trim().is_empty()).unwrap_or(false) {
            return format!("env:{key}");
        }
    }

    if let (Some(doc), Some(path)) = (doc, path) {
        if doc_has_field(doc, field) {
            return format!("file:{}", path.display());
        }
    }

    "default".to_string()
}

fn doc_has_field(doc: &Value, field: &str) -> bool {
    let mut current = doc;
    for segment in field.split('.') {
        match current.get(segment) {
            Some(next) => current = next,
            None => return false,
        }
    }
    true
}

fn detect_config_path() -> Option<PathBuf> {
    if let Ok(value) = env::var("COMMONGROUND_CONFIG") {
        let path = PathBuf::from(value);
        if path.exists() {
            return Some(path);
        }
    }

    [PathBuf::from("commonground.toml"), PathBuf::from("config/commonground.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}
