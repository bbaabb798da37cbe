use async_trait::async_trait;
use log::{debug, info, warn};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, SET_COOKIE};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use url::Url;

use super::cookie::CookieJar;
use super::models;
use super::{RecommendEvent, RecommendRequest, RecommendationBackend, RecommendationResult};
use crate::config::Settings;
use crate::error::RecommendError;

/// 伺服器用來驗證防偽 token 的標頭。
pub const CSRF_HEADER: &str = "x-csrftoken";

/// 與 `encodeURIComponent` 相同：只保留英數字與 `-_.!~*'()`。
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `RecommendationBackend` 的 HTTP 實作，呼叫 `POST /recommend/`。
pub struct HttpRecommender {
    /// 推薦端點的完整網址。
    endpoint: Url,
    /// 取得 `csrftoken` cookie 用的首頁網址；`None` 表示不做預先請求。
    bootstrap: Option<Url>,
    client: Client,
    /// 每次送出時才讀取 token，與瀏覽器在點擊當下讀 cookie 的行為一致。
    jar: CookieJar,
    events_tx: UnboundedSender<RecommendEvent>,
    events_rx: UnboundedReceiver<RecommendEvent>,
}

impl HttpRecommender {
    /// 根據設定建立後端。不會發出任何網路請求。
    pub fn new(settings: &Settings) -> Result<Self, RecommendError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()?;
        let jar = settings
            .cookie
            .as_deref()
            .map(CookieJar::parse)
            .unwrap_or_default();
        let (tx, rx) = mpsc::unbounded_channel();
        Ok(Self {
            endpoint: settings.endpoint_url()?,
            bootstrap: settings.bootstrap_url()?,
            client,
            jar,
            events_tx: tx,
            events_rx: rx,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn cookies(&self) -> &CookieJar {
        &self.jar
    }

    /// 先 `GET` 首頁，收下伺服器發出的 cookie（通常包含 `csrftoken`）。
    ///
    /// 回傳是否取得了 token。未設定首頁網址時直接回傳目前狀態。
    pub async fn bootstrap(&mut self) -> Result<bool, RecommendError> {
        let Some(url) = self.bootstrap.clone() else {
            return Ok(self.jar.csrf_token().is_some());
        };
        debug!("fetching cookies from {url}");
        let mut headers = HeaderMap::new();
        if !self.jar.is_empty() {
            headers.insert(
                reqwest::header::COOKIE,
                HeaderValue::from_str(&self.jar.serialize())?,
            );
        }
        let response = self.client.get(url).headers(headers).send().await?;
        for value in response.headers().get_all(SET_COOKIE) {
            match value.to_str() {
                Ok(raw) => self.jar.absorb_set_cookie(raw),
                Err(_) => warn!("ignoring non-ASCII Set-Cookie header"),
            }
        }
        let found = self.jar.csrf_token().is_some();
        info!(
            "cookie bootstrap finished with status {} (csrf token {})",
            response.status(),
            if found { "present" } else { "absent" }
        );
        Ok(found)
    }
}

#[async_trait]
impl RecommendationBackend for HttpRecommender {
    fn name(&self) -> &str {
        "http"
    }

    /// 立即 `tokio::spawn` 一個任務處理 HTTP 請求，結果經由 channel 傳回。
    async fn send(&mut self, request: RecommendRequest) -> Result<(), RecommendError> {
        let token = self.jar.csrf_token();
        if token.is_none() {
            debug!("no {} cookie, sending without anti-forgery header", super::cookie::CSRF_COOKIE);
        }
        let headers = build_headers(token.as_deref(), &self.jar)?;
        let tx = self.events_tx.clone();
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        tokio::spawn(async move {
            let seq = request.seq;
            let event = match dispatch_request(client, endpoint, headers, request).await {
                Ok(result) => RecommendEvent::Completed { seq, result },
                Err(error) => RecommendEvent::Failed { seq, error },
            };
            let _ = tx.send(event);
        });
        Ok(())
    }

    fn poll_event(&mut self) -> Option<RecommendEvent> {
        self.events_rx.try_recv().ok()
    }
}

/// 以 `encodeURIComponent` 的規則編碼表單內容。
pub fn encode_form_body(input: &str) -> String {
    format!("input={}", utf8_percent_encode(input, URI_COMPONENT))
}

/// 建構請求標頭；沒有 token 時不帶 `X-CSRFToken`。
fn build_headers(token: Option<&str>, jar: &CookieJar) -> Result<HeaderMap, RecommendError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded"),
    );
    if let Some(token) = token {
        headers.insert(
            HeaderName::from_static(CSRF_HEADER),
            HeaderValue::from_str(token)?,
        );
    }
    if !jar.is_empty() {
        headers.insert(
            reqwest::header::COOKIE,
            HeaderValue::from_str(&jar.serialize())?,
        );
    }
    Ok(headers)
}

async fn dispatch_request(
    client: Client,
    endpoint: Url,
    headers: HeaderMap,
    request: RecommendRequest,
) -> Result<RecommendationResult, RecommendError> {
    let response = client
        .post(endpoint.clone())
        .headers(headers)
        .body(encode_form_body(&request.input))
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        if let Some(message) = models::server_error_message(&body) {
            return Err(RecommendError::Server(message));
        }
        return Err(RecommendError::Status {
            status: status.as_u16(),
            body,
        });
    }
    models::parse_response(&body, &endpoint)
}
