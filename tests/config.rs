#[cfg(test)]
mod tests {
    use shelf::libs::config::{Config, ServerConfig, CONFIG_FILE_NAME, DEFAULT_API_URL};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        config_path: PathBuf,
        api_url: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
            ConfigTestContext {
                _temp_dir: temp_dir,
                config_path,
                api_url: "https://books.example.com".to_string(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.server.is_none());
        assert_eq!(config.api_url_with(None), DEFAULT_API_URL);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                api_url: ctx.api_url.clone(),
            }),
        };
        config.save_to(&ctx.config_path).unwrap();

        let read_config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(read_config, config);
        assert_eq!(read_config.api_url_with(None), ctx.api_url);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unconfigured_server_is_not_serialized(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.config_path).unwrap();
        let raw = fs::read_to_string(&ctx.config_path).unwrap();
        assert!(!raw.contains("server"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_env_override_wins(ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                api_url: ctx.api_url.clone(),
            }),
        };
        let url = config.api_url_with(Some("http://localhost:9000/".to_string()));
        assert_eq!(url, "http://localhost:9000");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_blank_values_fall_through(ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig { api_url: "  ".to_string() }),
        };
        assert_eq!(config.api_url_with(Some(String::new())), DEFAULT_API_URL);

        let config = Config {
            server: Some(ServerConfig {
                api_url: format!("{}/", ctx.api_url),
            }),
        };
        assert_eq!(config.api_url_with(Some(String::new())), ctx.api_url);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_json_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.config_path, "{ not json").unwrap();
        assert!(Config::read_from(&ctx.config_path).is_err());
    }

    #[test]
    fn test_with_api_url_requires_http_scheme() {
        let config = Config::with_api_url(" https://books.example.com/ ").unwrap();
        assert_eq!(config.api_url_with(None), "https://books.example.com");

        let err = Config::with_api_url("books.example.com").unwrap_err();
        assert!(err.to_string().contains("books.example.com"));
    }
}
