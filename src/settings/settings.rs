use anyhow::{Result, anyhow};
use config::{Config, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub database: Database,
    pub api: Api,
    pub hasher: Hasher,
    pub log: Log,
}

#[derive(Debug, Deserialize)]
pub struct Database {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
pub struct Api {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Argon2id cost parameters for newly produced hashes. Verification reads
/// the parameters embedded in each stored hash, so changing these never
/// invalidates existing credentials.
#[derive(Debug, Deserialize)]
pub struct Hasher {
    pub m_cost_kib: u32,
    pub t_cost: u32,
    pub p_cost: u32,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let path = path.unwrap_or(SETTINGS_PATH);

    let settings: Settings = Config::builder()
        .add_source(File::with_name(path))
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
[database]
url = "postgres://parlance:pw@localhost:5432/parlance_db"
max_connections = 4
connect_timeout_secs = 5

[api]
base_url = "https://localhost:8443"
timeout_secs = 10

[hasher]
m_cost_kib = 19456
t_cost = 2
p_cost = 1

[log]
filter = "info,parlance=debug"
"#;

    #[test]
    fn parses_full_settings_file() {
        let dir = std::env::temp_dir().join("parlance_settings_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("full.toml");
        std::fs::write(&path, FIXTURE).unwrap();

        let settings = parse_settings(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(settings.database.max_connections, 4);
        assert_eq!(settings.api.timeout_secs, 10);
        assert_eq!(settings.hasher.t_cost, 2);
        assert_eq!(settings.log.filter, "info,parlance=debug");
    }

    #[test]
    fn errors_on_missing_file() {
        assert!(parse_settings(Some("settings/does_not_exist.toml")).is_err());
    }
}
