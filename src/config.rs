use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::cli::Cli;
use crate::i18n::{LanguageCode, StringTable};

/// 預設設定檔位置，相對於目前工作目錄。
pub const DEFAULT_CONFIG_PATH: &str = "config/recommender.toml";
/// 覆寫伺服器網址的環境變數。
pub const ENV_URL: &str = "COFFEE_RECOMMENDER_URL";
/// 覆寫介面語言的環境變數。
pub const ENV_LANG: &str = "COFFEE_RECOMMENDER_LANG";

/// 用戶端設定，通常從 `config/recommender.toml` 載入。
///
/// 優先順序：命令列 > 環境變數 > 設定檔 > 內建預設值。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 推薦伺服器的基礎網址。
    pub base_url: String,
    /// 推薦端點路徑。
    pub endpoint: String,
    /// 用來取得 `csrftoken` cookie 的首頁路徑；空字串表示停用。
    pub bootstrap_path: Option<String>,
    /// 額外的 cookie 字串，格式同瀏覽器的 `document.cookie`。
    pub cookie: Option<String>,
    /// 啟動時的介面語言。
    pub language: LanguageCode,
    pub timeout_secs: u64,
    pub log_file: PathBuf,
    pub log_level: String,
    /// 以語言標籤分組的字串覆寫，例如 `[strings.en]`。
    pub strings: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: String::from("http://127.0.0.1:8000"),
            endpoint: String::from("/recommend/"),
            bootstrap_path: Some(String::from("/")),
            cookie: None,
            language: LanguageCode::TraditionalChinese,
            timeout_secs: 15,
            log_file: PathBuf::from("logs/coffee-recommender.log"),
            log_level: String::from("info"),
            strings: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// 依序套用設定檔、環境變數與命令列參數。
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let path = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        let mut settings = Self::load(&path)?;
        settings.apply_overrides(env::var(ENV_URL).ok(), env::var(ENV_LANG).ok())?;
        settings.apply_overrides(cli.url.clone(), cli.lang.clone())?;
        if cli.no_bootstrap {
            settings.bootstrap_path = None;
        }
        Ok(settings)
    }

    /// 讀取設定檔；檔案不存在時回傳預設值。
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("讀取設定檔失敗: {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("解析設定檔失敗: {}", path.display()))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// 套用網址與語言覆寫；`None` 表示不變更。
    pub fn apply_overrides(&mut self, url: Option<String>, lang: Option<String>) -> Result<()> {
        if let Some(url) = url.filter(|value| !value.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        if let Some(lang) = lang.filter(|value| !value.trim().is_empty()) {
            self.language = lang.parse().context("無效的語言設定")?;
        }
        Ok(())
    }

    pub fn endpoint_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)?.join(&self.endpoint)
    }

    /// 首頁網址；未設定或為空字串時回傳 `None`。
    pub fn bootstrap_url(&self) -> Result<Option<Url>, url::ParseError> {
        match self.bootstrap_path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => Ok(Some(Url::parse(&self.base_url)?.join(path)?)),
            _ => Ok(None),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// 內建字串表加上設定檔中的覆寫。無法辨識的語言標籤會被略過。
    pub fn string_table(&self) -> StringTable {
        let mut table = StringTable::builtin();
        for (tag, entries) in &self.strings {
            match tag.parse::<LanguageCode>() {
                Ok(lang) => table.extend(lang, entries.iter().map(|(k, v)| (k.clone(), v.clone()))),
                Err(err) => warn!("ignoring string overrides: {err}"),
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::keys;
    use std::io::Write;

    #[test]
    fn defaults_point_at_local_server() {
        let settings = Settings::default();
        assert_eq!(
            settings.endpoint_url().unwrap().as_str(),
            "http://127.0.0.1:8000/recommend/"
        );
        assert_eq!(
            settings.bootstrap_url().unwrap().map(|url| url.to_string()),
            Some(String::from("http://127.0.0.1:8000/"))
        );
        assert_eq!(settings.language, LanguageCode::TraditionalChinese);
    }

    #[test]
    fn parses_partial_toml_with_string_overrides() {
        let settings = Settings::from_toml_str(
            r#"
            base_url = "https://coffee.example.com/app/"
            language = "en"
            bootstrap_path = ""

            [strings.en]
            clear = "Reset"

            [strings.fr]
            clear = "Effacer"
            "#,
        )
        .unwrap();

        assert_eq!(settings.language, LanguageCode::English);
        assert_eq!(settings.timeout_secs, 15);
        assert_eq!(
            settings.endpoint_url().unwrap().as_str(),
            "https://coffee.example.com/recommend/"
        );
        assert_eq!(settings.bootstrap_url().unwrap(), None);

        let table = settings.string_table();
        assert_eq!(table.lookup(LanguageCode::English, keys::CLEAR), Some("Reset"));
        assert_eq!(
            table.lookup(LanguageCode::TraditionalChinese, keys::CLEAR),
            Some("清除")
        );
    }

    #[test]
    fn rejects_unknown_language() {
        assert!(Settings::from_toml_str(r#"language = "fr""#).is_err());
        let mut settings = Settings::default();
        assert!(settings.apply_overrides(None, Some(String::from("klingon"))).is_err());
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut settings = Settings::default();
        settings
            .apply_overrides(Some(String::from(" http://10.0.0.2:9000 ")), Some(String::from("en")))
            .unwrap();
        settings.apply_overrides(Some(String::new()), None).unwrap();
        assert_eq!(settings.base_url, "http://10.0.0.2:9000");
        assert_eq!(settings.language, LanguageCode::English);
    }

    #[test]
    fn load_reads_file_and_tolerates_missing_one() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert_eq!(Settings::load(&missing).unwrap().base_url, "http://127.0.0.1:8000");

        let path = dir.path().join("recommender.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "timeout_secs = 3\ncookie = \"csrftoken=abc\"").unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.timeout(), Duration::from_secs(3));
        assert_eq!(settings.cookie.as_deref(), Some("csrftoken=abc"));

        fs::write(&path, "timeout_secs = \"soon\"").unwrap();
        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn resolve_applies_cli_last() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/recommender.toml")),
            url: Some(String::from("http://cli.example")),
            lang: Some(String::from("en")),
            ask: None,
            no_bootstrap: true,
        };
        let settings = Settings::resolve(&cli).unwrap();
        assert_eq!(settings.base_url, "http://cli.example");
        assert_eq!(settings.language, LanguageCode::English);
        assert_eq!(settings.bootstrap_path, None);
    }
}
