use std::env;

pub const DEFAULT_GEMINI_API_HOST: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60 * 10;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub gemini_api_hostname: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let gemini_api_hostname = env::var("ORACLE_GEMINI_API_HOST")
            .unwrap_or_else(|_| DEFAULT_GEMINI_API_HOST.to_string());
        // A missing key is only noticed when the first completion is
        // rejected by the endpoint
        let gemini_api_key = env::var("ORACLE_GEMINI_API_KEY")
            .or_else(|_| env::var("GEMINI_API_KEY"))
            .unwrap_or_default();
        let gemini_model =
            env::var("ORACLE_GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
        let request_timeout_secs = env::var("ORACLE_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            gemini_api_hostname,
            gemini_api_key,
            gemini_model,
            request_timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        // SAFETY: tests touching the environment are serialized
        unsafe {
            env::remove_var("ORACLE_GEMINI_API_HOST");
            env::remove_var("ORACLE_GEMINI_API_KEY");
            env::remove_var("GEMINI_API_KEY");
            env::remove_var("ORACLE_GEMINI_MODEL");
            env::remove_var("ORACLE_REQUEST_TIMEOUT_SECS");
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        clear_env();
        let config = AppConfig::default();
        assert_eq!(config.gemini_api_hostname, DEFAULT_GEMINI_API_HOST);
        assert_eq!(config.gemini_api_key, "");
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    #[serial]
    fn test_reads_env_overrides() {
        clear_env();
        unsafe {
            env::set_var("ORACLE_GEMINI_API_HOST", "http://localhost:9999");
            env::set_var("GEMINI_API_KEY", "fallback-key");
            env::set_var("ORACLE_GEMINI_MODEL", "gemini-test");
            env::set_var("ORACLE_REQUEST_TIMEOUT_SECS", "5");
        }
        let config = AppConfig::default();
        assert_eq!(config.gemini_api_hostname, "http://localhost:9999");
        assert_eq!(config.gemini_api_key, "fallback-key");
        assert_eq!(config.gemini_model, "gemini-test");
        assert_eq!(config.request_timeout_secs, 5);

        unsafe {
            env::set_var("ORACLE_GEMINI_API_KEY", "primary-key");
            env::set_var("ORACLE_REQUEST_TIMEOUT_SECS", "not-a-number");
        }
        let config = AppConfig::default();
        assert_eq!(config.gemini_api_key, "primary-key");
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        clear_env();
    }
}
