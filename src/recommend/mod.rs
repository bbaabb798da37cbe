//! 推薦服務的用戶端。
//!
//! 此模組把「送出一段自我描述、取得一個咖啡推薦」這件事抽象成
//! `RecommendationBackend` trait，實際的 HTTP 實作位於 `http` 子模組，
//! `dispatcher` 則負責替每個請求編號並丟棄過期的回應。

// --- 子模組宣告 ---

/// `cookie` 模組：解析 `name=value; ...` 格式的 cookie 並取出防偽 token。
pub mod cookie;
/// `dispatcher` 模組：請求序號與過期回應的過濾。
pub mod dispatcher;
/// `http` 模組：透過 reqwest 呼叫 `POST /recommend/` 的後端實作。
pub mod http;
/// `models` 模組：伺服器回應的資料結構與驗證。
mod models;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::RecommendError;
use crate::i18n::LanguageCode;

pub use cookie::CookieJar;
pub use dispatcher::RecommendationDispatcher;
pub use http::HttpRecommender;
pub use models::parse_response;

/// 伺服器推薦的咖啡，包含中英文名稱與商品連結。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub chinese: String,
    pub english: String,
    pub url: String,
}

impl RecommendationResult {
    /// 依照介面語言挑選要顯示的名稱。
    pub fn name_for(&self, lang: LanguageCode) -> &str {
        match lang {
            LanguageCode::TraditionalChinese => &self.chinese,
            LanguageCode::English => &self.english,
        }
    }
}

/// 送往後端的單一請求。`seq` 由 `RecommendationDispatcher` 指定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendRequest {
    pub seq: u64,
    pub input: String,
}

/// 後端以非同步方式回報的結果。
#[derive(Debug)]
pub enum RecommendEvent {
    Completed {
        seq: u64,
        result: RecommendationResult,
    },
    Failed {
        seq: u64,
        error: RecommendError,
    },
}

impl RecommendEvent {
    pub fn seq(&self) -> u64 {
        match self {
            Self::Completed { seq, .. } | Self::Failed { seq, .. } => *seq,
        }
    }
}

/// 所有推薦後端都必須遵守的介面。
///
/// `send` 不應等待回應；結果稍後透過 `poll_event` 取得。
#[async_trait]
pub trait RecommendationBackend: Send {
    /// 後端名稱，用於日誌。
    fn name(&self) -> &str;

    /// 送出請求。只有在請求根本無法發出時才回傳錯誤。
    async fn send(&mut self, request: RecommendRequest) -> Result<(), RecommendError>;

    /// 非阻塞地取出一個已完成的事件。
    fn poll_event(&mut self) -> Option<RecommendEvent>;
}
