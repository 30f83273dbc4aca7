//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use frank_config::FrankConfig;
use frank_core::enums::WeekStart;

#[test]
fn loads_backend_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[backend]
url = "https://abc123.supabase.co"
anon_key = "anon-key"
timeout_secs = 10
"#,
        )?;

        let config: FrankConfig = Figment::from(Serialized::defaults(FrankConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.backend.url, "https://abc123.supabase.co");
        assert_eq!(config.backend.anon_key, "anon-key");
        assert_eq!(config.backend.timeout_secs, 10);
        assert!(config.backend.is_configured());
        Ok(())
    });
}

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_limit = 10
week_starts_on = "monday"
"#,
        )?;

        let config: FrankConfig = Figment::from(Serialized::defaults(FrankConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 10);
        assert_eq!(config.general.week_starts_on, WeekStart::Monday);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[backend]
url = "https://abc123.supabase.co"
"#,
        )?;

        let config: FrankConfig = Figment::from(Serialized::defaults(FrankConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.backend.timeout_secs, 30);
        assert!(!config.backend.is_configured());
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[backend]
url = "https://from-toml.supabase.co"
anon_key = "toml-key"
"#,
        )?;
        jail.set_env("FRANK_BACKEND__ANON_KEY", "env-key");

        let config: FrankConfig = Figment::from(Serialized::defaults(FrankConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("FRANK_").split("__"))
            .extract()?;

        assert_eq!(config.backend.url, "https://from-toml.supabase.co");
        assert_eq!(config.backend.anon_key, "env-key");
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".frank")?;
        jail.create_file(
            ".frank/config.toml",
            r#"
[general]
default_limit = 7
"#,
        )?;

        let config = FrankConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn invalid_week_start_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
week_starts_on = "friday"
"#,
        )?;

        let result: Result<FrankConfig, _> =
            Figment::from(Serialized::defaults(FrankConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
