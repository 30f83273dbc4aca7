use frank_config::FrankConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &FrankConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &FrankConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.backend.is_configured() && has_single_underscore_key(&env_keys, "FRANK_BACKEND") {
        warnings.push(
            "Backend config appears default while FRANK_BACKEND_* env vars exist. Use double underscores (example: FRANK_BACKEND__URL)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "FRANK_GENERAL") {
        warnings.push(
            "FRANK_GENERAL_* env vars are ignored. Use double underscores (example: FRANK_GENERAL__WEEK_STARTS_ON)."
                .to_string(),
        );
    }

    warnings
}

/// `PREFIX_X` present but not `PREFIX__X`.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
