use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Database file used when neither a flag nor a config file names one
pub const DEFAULT_DATABASE: &str = "habits_tracker.db";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HabitrackConfig {
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("habits.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<HabitrackConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: HabitrackConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

/// Flag wins over config file, config file over the default
pub fn resolve_database_path(flag: Option<&Path>, config: Option<&HabitrackConfig>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    config
        .and_then(|c| c.database.as_deref())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(Some(&dir.path().join("habits.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.toml");
        std::fs::write(&path, "database = \"data/mine.db\"\n").unwrap();

        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded.database.as_deref(), Some("data/mine.db"));
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.toml");
        std::fs::write(&path, "database = [").unwrap();

        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_resolve_database_path_precedence() {
        let config = HabitrackConfig { database: Some("from_config.db".to_string()) };

        assert_eq!(
            resolve_database_path(Some(Path::new("flag.db")), Some(&config)),
            PathBuf::from("flag.db")
        );
        assert_eq!(resolve_database_path(None, Some(&config)), PathBuf::from("from_config.db"));
        assert_eq!(
            resolve_database_path(None, Some(&HabitrackConfig::default())),
            PathBuf::from(DEFAULT_DATABASE)
        );
        assert_eq!(resolve_database_path(None, None), PathBuf::from(DEFAULT_DATABASE));
    }

    #[test]
    fn test_ensure_db_dir_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("nested").join("habits.db");

        ensure_db_dir(&db).unwrap();
        assert!(dir.path().join("nested").is_dir());
        ensure_db_dir(Path::new("habits.db")).unwrap();
    }
}
