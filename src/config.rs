use crate::error::{Result, TriageError};
use pse_triage_common::{RuleTable, DEFAULT_TABLE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 既定のルールテーブル名
    pub default_table: String,
    /// 既定の通報人
    pub reporter: Option<String>,
    /// 対話モードで既定で複製する
    pub copy_by_default: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_table: DEFAULT_TABLE.into(),
            reporter: None,
            copy_by_default: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（存在しなければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TriageError::Config("找不到家目錄".into()))?;
        Ok(home.join(".config").join("pse-triage").join("config.json"))
    }

    /// 既定テーブルを設定（組み込み名のみ）
    pub fn set_default_table(&mut self, name: &str) -> Result<()> {
        let table = RuleTable::load_builtin(name)?;
        self.default_table = table.name;
        Ok(())
    }

    pub fn set_reporter(&mut self, reporter: String) {
        let reporter = reporter.trim().to_string();
        self.reporter = if reporter.is_empty() { None } else { Some(reporter) };
    }
}

/// 使用するルールテーブルを決定
///
/// 優先順: `--rules` ファイル → `--table` 名 → 設定の既定テーブル
pub fn resolve_table(table: Option<&str>, rules: Option<&Path>, config: &Config) -> Result<RuleTable> {
    if let Some(path) = rules {
        tracing::debug!(path = %path.display(), "loading custom rule table");
        return Ok(RuleTable::from_file(path)?);
    }
    let name = table.unwrap_or(&config.default_table);
    Ok(RuleTable::load_builtin(name)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_returns_default() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_table, "threshold");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");
        let mut config = Config::default();
        config.set_default_table("narrative").unwrap();
        config.set_reporter("  陳工程師 ".into());
        config.copy_by_default = true;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.reporter.as_deref(), Some("陳工程師"));
    }

    #[test]
    fn test_partial_config_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"reporter": "林組長"}"#).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.default_table, "threshold");
        assert_eq!(loaded.reporter.as_deref(), Some("林組長"));
    }

    #[test]
    fn test_set_unknown_table() {
        let mut config = Config::default();
        let err = config.set_default_table("legacy").unwrap_err();
        assert!(matches!(
            err,
            TriageError::Common(pse_triage_common::Error::UnknownTable(_))
        ));
        assert_eq!(config.default_table, "threshold");
    }

    #[test]
    fn test_resolve_table_priority() {
        let config = Config {
            default_table: "narrative".into(),
            ..Default::default()
        };
        assert_eq!(resolve_table(None, None, &config).unwrap().name, "narrative");
        assert_eq!(
            resolve_table(Some("threshold"), None, &config).unwrap().name,
            "threshold"
        );

        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("custom.json");
        let mut custom = RuleTable::threshold();
        custom.name = "site-a".into();
        std::fs::write(&path, custom.to_json_pretty().unwrap()).unwrap();
        assert_eq!(
            resolve_table(Some("threshold"), Some(&path), &config).unwrap().name,
            "site-a"
        );
    }

    #[test]
    fn test_resolve_table_invalid_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{").unwrap();
        let err = resolve_table(None, Some(&path), &Config::default()).unwrap_err();
        assert!(matches!(
            err,
            TriageError::Common(pse_triage_common::Error::Json(_))
        ));
    }
}
