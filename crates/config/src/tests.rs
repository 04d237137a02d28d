use crate::AppConfig;
use figment::Jail;
use secrecy::ExposeSecret;

#[test]
fn test_defaults_without_files() {
    Jail::expect_with(|jail| {
        let dir = jail.directory().to_string_lossy().to_string();
        let config = AppConfig::load(&dir).map_err(|e| e.to_string())?;

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.sales.window_days, 180);
        assert_eq!(config.sales.weekend_boost, 1.4);
        assert!(config.sales.seed.is_none());
        assert!(config.chat.is_none());
        assert!(!config.is_production());
        Ok(())
    });
}

#[test]
fn test_file_and_env_layering() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "default.toml",
            r#"
            app_name = "stand"

            [server]
            port = 8080

            [sales]
            seed = 42
            "#,
        )?;
        jail.set_env("STAND_SERVER__PORT", "9090");
        jail.set_env("STAND_TELEMETRY__LOG_LEVEL", "debug");

        let dir = jail.directory().to_string_lossy().to_string();
        let config = AppConfig::load(&dir).map_err(|e| e.to_string())?;

        assert_eq!(config.app_name, "stand");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.telemetry.log_level, "debug");
        assert_eq!(config.sales.seed, Some(42));
        Ok(())
    });
}

#[test]
fn test_chat_section_and_secret_redaction() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "default.toml",
            r#"
            [chat]
            session_url = "https://chat.example.com/session"
            api_key = "super-secret-key"
            "#,
        )?;

        let dir = jail.directory().to_string_lossy().to_string();
        let config = AppConfig::load(&dir).map_err(|e| e.to_string())?;
        let chat = config.chat.expect("chat section");

        assert_eq!(chat.project_slug, "nano-banana-stand");
        assert_eq!(chat.api_key.expose_secret(), "super-secret-key");
        let debug_output = format!("{:?}", chat);
        assert!(!debug_output.contains("super-secret-key"));
        Ok(())
    });
}

#[test]
fn test_workspace_default_config() {
    Jail::expect_with(|_jail| {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config");
        let config = AppConfig::load(dir).map_err(|e| e.to_string())?;

        assert_eq!(config.app_name, "nanobanana-stand");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.sales.window_days, 180);
        assert_eq!(config.sales.weekend_boost, 1.4);
        assert!(config.chat.is_none());
        Ok(())
    });
}
