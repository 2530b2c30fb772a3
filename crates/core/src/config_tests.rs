//! Unit tests for environment-driven configuration

#[cfg(test)]
mod tests {
    use crate::config::*;
    use std::time::Duration;

    // Environment variables are process-global, so everything that touches
    // them lives in a single test.
    #[test]
    fn test_from_env_reads_keys_selector_and_defaults() {
        std::env::set_var("PROVIDER", "Groq");
        std::env::set_var("GOOGLE_API_KEY", "gemini-key");
        std::env::set_var("GROQ_API_KEY", "");
        std::env::remove_var("OPENAI_API_KEY");
        std::env::remove_var("GEMINI_BASE_URL");
        std::env::remove_var("GROQ_BASE_URL");
        std::env::set_var("OPENAI_BASE_URL", "http://localhost:8080/v1");
        std::env::remove_var("HELLO_TIMEOUT_SECS");

        let config = AgentConfig::from_env();

        assert_eq!(config.forced_provider.as_deref(), Some("Groq"));
        assert_eq!(config.gemini.api_key.as_deref(), Some("gemini-key"));
        // empty string counts as unset
        assert_eq!(config.groq.api_key, None);
        assert_eq!(config.openai.api_key, None);

        assert_eq!(
            config.gemini.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.groq.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.openai.base_url, "http://localhost:8080/v1");

        assert_eq!(config.request_timeout, Duration::from_secs(30));

        std::env::set_var("HELLO_TIMEOUT_SECS", "5");
        let config = AgentConfig::from_env();
        assert_eq!(config.request_timeout, Duration::from_secs(5));

        std::env::remove_var("PROVIDER");
        let config = AgentConfig::from_env();
        assert_eq!(config.forced_provider, None);
    }

    #[test]
    fn test_load_env_is_idempotent() {
        load_env();
        load_env();
    }
}
