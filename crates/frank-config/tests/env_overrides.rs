use figment::Jail;
use frank_config::FrankConfig;
use frank_core::enums::WeekStart;

#[test]
fn env_vars_fill_backend_section() {
    Jail::expect_with(|jail| {
        jail.set_env("FRANK_BACKEND__URL", "https://abc123.supabase.co");
        jail.set_env("FRANK_BACKEND__ANON_KEY", "anon");
        jail.set_env("FRANK_BACKEND__TIMEOUT_SECS", "5");

        let config = FrankConfig::load().expect("config loads");
        assert!(config.backend.is_configured());
        assert_eq!(config.backend.timeout_secs, 5);
        assert!(config.backend.validate().is_ok());
        Ok(())
    });
}

#[test]
fn env_vars_fill_general_section() {
    Jail::expect_with(|jail| {
        jail.set_env("FRANK_GENERAL__WEEK_STARTS_ON", "monday");
        jail.set_env("FRANK_GENERAL__DEFAULT_LIMIT", "3");

        let config = FrankConfig::load().expect("config loads");
        assert_eq!(config.general.week_starts_on, WeekStart::Monday);
        assert_eq!(config.general.default_limit, 3);
        Ok(())
    });
}

#[test]
fn single_underscore_is_not_a_section_separator() {
    Jail::expect_with(|jail| {
        jail.set_env("FRANK_BACKEND_URL", "https://abc123.supabase.co");

        let config = FrankConfig::load().expect("config loads");
        assert!(config.backend.url.is_empty());
        Ok(())
    });
}
