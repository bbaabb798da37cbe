//! 不開啟終端介面，直接送出一次推薦請求並把結果印到標準輸出。

use std::time::Duration;

use anyhow::{Context, Result, bail};
use log::{info, warn};
use tokio::time::{Instant, sleep};

use crate::config::Settings;
use crate::error::RecommendError;
use crate::i18n::{LanguageCode, StringTable};
use crate::page::ResultArea;
use crate::recommend::{HttpRecommender, RecommendEvent, RecommendationDispatcher};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub async fn run(settings: &Settings, text: &str) -> Result<()> {
    let mut backend = HttpRecommender::new(settings).context("建立 HTTP 客戶端失敗")?;
    if let Err(err) = backend.bootstrap().await {
        warn!("cookie bootstrap failed: {err}");
    }
    info!("asking {} for a recommendation", backend.endpoint());

    let strings = settings.string_table();
    let mut dispatcher = RecommendationDispatcher::new(Box::new(backend));
    let area = ask(&mut dispatcher, &strings, settings.language, text, settings.timeout()).await?;
    println!("{}", area.plain_text());
    match area {
        ResultArea::Failed { .. } => bail!("推薦請求失敗"),
        _ => Ok(()),
    }
}

/// Submits `text` and waits for the answer, rendering it in `lang`.
pub async fn ask(
    dispatcher: &mut RecommendationDispatcher,
    strings: &StringTable,
    lang: LanguageCode,
    text: &str,
    timeout: Duration,
) -> Result<ResultArea, RecommendError> {
    dispatcher.submit(text.to_string()).await?;
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(event) = dispatcher.poll() {
            return Ok(match event {
                RecommendEvent::Completed { result, .. } => {
                    ResultArea::recommendation(strings, lang, &result)
                }
                RecommendEvent::Failed { error, .. } => {
                    ResultArea::failed(strings, lang, error.to_string())
                }
            });
        }
        if Instant::now() >= deadline {
            return Err(RecommendError::Timeout(timeout));
        }
        sleep(POLL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::testing::{FakeBackend, arabica};

    #[tokio::test]
    async fn waits_for_the_answer() {
        let backend = FakeBackend::default();
        let mut dispatcher = RecommendationDispatcher::new(Box::new(backend.clone()));
        let feeder = backend.clone();
        tokio::spawn(async move {
            sleep(Duration::from_millis(100)).await;
            feeder.complete(1, arabica());
        });

        let area = ask(
            &mut dispatcher,
            &StringTable::builtin(),
            LanguageCode::TraditionalChinese,
            "女 25",
            Duration::from_secs(2),
        )
        .await
        .unwrap();
        assert_eq!(area.plain_text(), "推薦咖啡：阿拉比卡 <http://x>");
        assert_eq!(backend.sent()[0].input, "女 25");
    }

    #[tokio::test]
    async fn failure_becomes_a_failed_area() {
        let backend = FakeBackend::default();
        backend.fail(1, "boom");
        let mut dispatcher = RecommendationDispatcher::new(Box::new(backend));
        let area = ask(
            &mut dispatcher,
            &StringTable::builtin(),
            LanguageCode::English,
            "",
            Duration::from_secs(1),
        )
        .await
        .unwrap();
        assert!(matches!(area, ResultArea::Failed { .. }));
    }

    #[tokio::test]
    async fn gives_up_after_the_timeout() {
        let mut dispatcher = RecommendationDispatcher::new(Box::new(FakeBackend::default()));
        let err = ask(
            &mut dispatcher,
            &StringTable::builtin(),
            LanguageCode::English,
            "x",
            Duration::from_millis(120),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RecommendError::Timeout(_)));
    }
}
