use igloo_common::{PayloadCodec, PayloadFormat, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub payload_format: PayloadFormat,
}

impl Settings {
    pub fn new() -> Result<Self> {
        let config_file_path = std::env::var("STORAGE_CONNECTOR_CONFIG_PATH")
            .unwrap_or_else(|_| "crates/connectors/storage/config/default.toml".to_string());
        Self::from_file(&config_file_path)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let s = config::Config::builder()
            .add_source(config::File::with_name(path).required(true))
            .add_source(config::Environment::with_prefix("IGLOO_STORAGE").separator("__"))
            .build()?;
        Ok(s.try_deserialize()?)
    }

    /// Codec used to ship splits to workers.
    pub fn codec(&self) -> PayloadCodec {
        PayloadCodec::new(self.payload_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use igloo_common::Error;
    use std::sync::{Mutex, MutexGuard};

    // Settings read process-wide environment variables, so tests touching
    // them must not interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lock_env() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}_{}.toml", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    const DEFAULT_CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/config/default.toml");

    #[test]
    fn test_default_config_file() {
        let _guard = lock_env();
        let settings = Settings::from_file(DEFAULT_CONFIG).unwrap();
        assert_eq!(settings.payload_format, PayloadFormat::Json);
    }

    #[test]
    fn test_bincode_format() {
        let _guard = lock_env();
        let path = write_config("igloo_storage_bincode", "payload_format = \"bincode\"\n");
        let settings = Settings::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.codec().format(), PayloadFormat::Bincode);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_format_defaults_to_json() {
        let _guard = lock_env();
        let path = write_config("igloo_storage_empty", "");
        let settings = Settings::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.payload_format, PayloadFormat::Json);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let _guard = lock_env();
        let path = write_config("igloo_storage_xml", "payload_format = \"xml\"\n");
        let result = Settings::from_file(path.to_str().unwrap());
        assert!(matches!(result, Err(Error::Config(_))));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let _guard = lock_env();
        let result = Settings::from_file("/nonexistent/igloo/storage.toml");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_env_overrides_file() {
        let _guard = lock_env();
        std::env::set_var("IGLOO_STORAGE__PAYLOAD_FORMAT", "bincode");
        let result = Settings::from_file(DEFAULT_CONFIG);
        std::env::remove_var("IGLOO_STORAGE__PAYLOAD_FORMAT");
        assert_eq!(result.unwrap().payload_format, PayloadFormat::Bincode);
    }

    #[test]
    fn test_config_path_from_env() {
        let _guard = lock_env();
        let path = write_config("igloo_storage_from_env", "payload_format = \"bincode\"\n");
        std::env::set_var("STORAGE_CONNECTOR_CONFIG_PATH", &path);
        let result = Settings::new();
        std::env::remove_var("STORAGE_CONNECTOR_CONFIG_PATH");
        std::fs::remove_file(path).unwrap();
        assert_eq!(result.unwrap().payload_format, PayloadFormat::Bincode);
    }
}
