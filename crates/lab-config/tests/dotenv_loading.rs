//! `.env` files feed the same provider chain as process environment.

use std::fs;

use lab_config::LabConfig;

#[test]
fn dotenv_file_values_reach_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let env_path = dir.path().join(".env");
    fs::write(&env_path, "LABTRACK_GENERAL__WORKSPACE_ID=ws-from-dotenv\n").expect("write .env");

    figment::Jail::expect_with(|jail| {
        jail.clear_env();
        dotenvy::from_path(&env_path).expect("dotenv loads");

        let config = LabConfig::load().expect("config loads");
        assert_eq!(config.general.workspace_id, "ws-from-dotenv");
        Ok(())
    });
}
