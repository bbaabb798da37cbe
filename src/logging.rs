use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::config::Settings;

/// When this file exists it replaces the built-in file logging setup.
pub const LOG4RS_CONFIG_PATH: &str = "config/log4rs.yaml";

const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} {t} - {m}{n}";

/// Interactive mode owns the terminal, so logs go to a file.
pub fn init_file_logging(settings: &Settings) -> Result<()> {
    let custom = Path::new(LOG4RS_CONFIG_PATH);
    if custom.exists() {
        log4rs::init_file(custom, Default::default())
            .with_context(|| format!("載入日誌設定失敗: {}", custom.display()))?;
        return Ok(());
    }

    let appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
        .build(&settings.log_file)
        .with_context(|| format!("無法開啟日誌檔: {}", settings.log_file.display()))?;
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(
            Root::builder()
                .appender("file")
                .build(level_filter(&settings.log_level)),
        )
        .context("建立日誌設定失敗")?;
    log4rs::init_config(config).context("初始化日誌失敗")?;
    Ok(())
}

/// Headless mode logs to stderr; `RUST_LOG` takes precedence over the config level.
pub fn init_stderr_logging(settings: &Settings) {
    let _ = env_logger::Builder::new()
        .filter_level(level_filter(&settings.log_level))
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
}

/// Unknown level names fall back to `info`.
pub fn level_filter(name: &str) -> LevelFilter {
    LevelFilter::from_str(name.trim()).unwrap_or(LevelFilter::Info)
}
