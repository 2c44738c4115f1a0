use lab_config::LabConfig;

/// Log a warning for each env misconfiguration that silently left a section
/// at its defaults.
pub fn warn_unconfigured(config: &LabConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &LabConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.openai.is_configured()
        && env_keys
            .iter()
            .any(|key| key.starts_with("LABTRACK_OPENAI") && !key.starts_with("LABTRACK_OPENAI__"))
    {
        warnings.push(
            "OpenAI config appears default while LABTRACK_OPENAI* env vars exist. Use double underscores (example: LABTRACK_OPENAI__API_KEY)."
                .to_string(),
        );
    }

    if env_keys.iter().any(|key| key == "OPENAI_KEY") && !config.openai.is_configured() {
        warnings.push(
            "OPENAI_KEY is set but not read. Use OPENAI_API_KEY or LABTRACK_OPENAI__API_KEY."
                .to_string(),
        );
    }

    warnings
}

#[cfg(test)]
mod tests {
    use lab_config::LabConfig;

    use super::collect_unconfigured_warnings;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_section() {
        let warnings = collect_unconfigured_warnings(
            &LabConfig::default(),
            env(&[("LABTRACK_OPENAI_API_KEY", "sk-test"), ("OPENAI_KEY", "sk-x")]),
        );
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("LABTRACK_OPENAI__API_KEY"));
    }

    #[test]
    fn does_not_warn_when_configured() {
        let mut config = LabConfig::default();
        config.openai.api_key = "sk-test".to_string();
        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[("LABTRACK_OPENAI_API_KEY", "sk-test"), ("OPENAI_KEY", "sk-x")]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn correct_separator_is_not_flagged() {
        let warnings = collect_unconfigured_warnings(
            &LabConfig::default(),
            env(&[("LABTRACK_OPENAI__MODEL", "gpt-5")]),
        );
        assert!(warnings.is_empty());
    }
}
