use crate::error::{Result, TyreLabelerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 出力先を上書きする環境変数
pub const OUTPUT_DIR_ENV: &str = "TYRE_LABELER_OUTPUT_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ダウンロード（画像とラベルJSON）の保存先
    pub output_dir: Option<PathBuf>,
    /// tracing のフィルタ（RUST_LOG が無い時に使う）
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            log_filter: "warn".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TyreLabelerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("tyre-labeler").join("config.json"))
    }

    /// 出力先の決定: コマンドライン > 環境変数 > 設定ファイル > カレント
    pub fn resolve_output_dir(&self, cli_output: Option<PathBuf>) -> PathBuf {
        let env_output = std::env::var_os(OUTPUT_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.resolve_output_dir_with(cli_output, env_output)
    }

    fn resolve_output_dir_with(&self, cli_output: Option<PathBuf>, env_output: Option<PathBuf>) -> PathBuf {
        cli_output
            .or(env_output)
            .or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn set_output_dir(&mut self, dir: Option<PathBuf>) -> Result<()> {
        self.output_dir = dir;
        self.save()
    }

    pub fn set_log_filter(&mut self, filter: String) -> Result<()> {
        if tracing_subscriber::EnvFilter::try_new(&filter).is_err() {
            return Err(TyreLabelerError::Config(format!("ログフィルタが不正です: {}", filter)));
        }
        self.log_filter = filter;
        self.save()
    }
}
