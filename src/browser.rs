use std::process::Stdio;

use anyhow::{Context, Result, bail};
use log::info;
use tokio::process::Command;
use url::Url;

/// Opens `href` in the system browser, outside the terminal.
///
/// Only `http`/`https` links are accepted.
pub fn open_in_browser(href: &str) -> Result<()> {
    let url = Url::parse(href).with_context(|| format!("無效的連結: {href}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("不支援的連結協定: {}", url.scheme());
    }

    let mut command = platform_command(url.as_str());
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
        .spawn()
        .with_context(|| format!("無法啟動瀏覽器開啟 {url}"))?;
    info!("opened {url} in the system browser");
    Ok(())
}

#[cfg(target_os = "macos")]
fn platform_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn platform_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
