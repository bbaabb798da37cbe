//! 推薦端點的回應結構：`{"recommendation": {...}}` 或 `{"error": "..."}`。

use serde::Deserialize;
use url::Url;

use super::RecommendationResult;
use crate::error::RecommendError;

#[derive(Deserialize)]
pub(super) struct RecommendationEnvelope {
    #[serde(default)]
    pub recommendation: Option<RawRecommendation>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub(super) struct RawRecommendation {
    #[serde(default)]
    pub chinese: Option<String>,
    #[serde(default)]
    pub english: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// 解析並驗證成功回應的內容。
///
/// 相對的 `url` 以 `base`（推薦端點所在的網址）為基準解析。
pub fn parse_response(body: &str, base: &Url) -> Result<RecommendationResult, RecommendError> {
    let envelope: RecommendationEnvelope = serde_json::from_str(body)?;
    if let Some(message) = envelope.error {
        return Err(RecommendError::Server(message));
    }
    let raw = envelope
        .recommendation
        .ok_or_else(|| RecommendError::InvalidPayload(String::from("missing `recommendation`")))?;
    validate(raw, base)
}

/// 從錯誤狀態的回應中取出伺服器訊息（若有）。
pub(super) fn server_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<RecommendationEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
}

fn validate(raw: RawRecommendation, base: &Url) -> Result<RecommendationResult, RecommendError> {
    let chinese = required_name(raw.chinese, "chinese")?;
    let english = required_name(raw.english, "english")?;
    let url = resolve_link(raw.url.unwrap_or_default().trim(), base)?;
    Ok(RecommendationResult {
        chinese,
        english,
        url,
    })
}

/// Whitespace-only names count as missing; accepted names are kept as sent.
fn required_name(value: Option<String>, field: &str) -> Result<String, RecommendError> {
    match value {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(RecommendError::InvalidPayload(format!("missing `{field}`"))),
    }
}

/// Absolute links are kept verbatim; relative ones are joined onto `base`.
fn resolve_link(link: &str, base: &Url) -> Result<String, RecommendError> {
    if link.is_empty() {
        return Ok(String::new());
    }
    let invalid =
        |err: url::ParseError| RecommendError::InvalidPayload(format!("bad `url` {link:?}: {err}"));
    let (parsed, resolved) = match Url::parse(link) {
        Ok(parsed) => (parsed, link.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let joined = base.join(link).map_err(invalid)?;
            let text = joined.to_string();
            (joined, text)
        }
        Err(err) => return Err(invalid(err)),
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(RecommendError::InvalidPayload(format!(
            "unsupported url scheme `{}`",
            parsed.scheme()
        )));
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<RecommendationResult, RecommendError> {
        let base = Url::parse("http://127.0.0.1:8000/recommend/").unwrap();
        parse_response(body, &base)
    }

    #[test]
    fn parses_well_formed_recommendation() {
        let body = r#"{"recommendation":{"chinese":"阿拉比卡","english":"Arabica","url":"http://x"}}"#;
        let result = parse(body).expect("valid body");
        assert_eq!(result.chinese, "阿拉比卡");
        assert_eq!(result.english, "Arabica");
        assert_eq!(result.url, "http://x");
    }

    #[test]
    fn empty_url_is_accepted() {
        let body = r#"{"recommendation":{"chinese":"Other","english":"Other","url":""}}"#;
        assert_eq!(parse(body).expect("valid body").url, "");
    }

    #[test]
    fn error_payload_becomes_server_error() {
        let body = r#"{"error": "Invalid request method"}"#;
        match parse(body) {
            Err(RecommendError::Server(message)) => assert_eq!(message, "Invalid request method"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(
            server_error_message(body).as_deref(),
            Some("Invalid request method")
        );
        assert_eq!(server_error_message("<html>"), None);
    }

    #[test]
    fn rejects_malformed_bodies() {
        assert!(matches!(parse("not json"), Err(RecommendError::Decode(_))));
        assert!(matches!(
            parse(r#"{"recommendation":{"chinese":5}}"#),
            Err(RecommendError::Decode(_))
        ));
        assert!(matches!(
            parse("{}"),
            Err(RecommendError::InvalidPayload(_))
        ));
        assert!(matches!(
            parse(r#"{"recommendation":{"chinese":"  ","english":"Latte","url":""}}"#),
            Err(RecommendError::InvalidPayload(_))
        ));
        assert!(matches!(
            parse(r#"{"recommendation":{"chinese":"拿鐵","english":"Latte","url":"javascript:alert(1)"}}"#),
            Err(RecommendError::InvalidPayload(_))
        ));
    }

    #[test]
    fn names_are_kept_exactly_as_sent() {
        let body = r#"{"recommendation":{"chinese":" 阿拉比卡 ","english":"Arabica\t","url":""}}"#;
        let result = parse(body).expect("valid body");
        assert_eq!(result.chinese, " 阿拉比卡 ");
        assert_eq!(result.english, "Arabica\t");
    }

    #[test]
    fn relative_links_resolve_against_the_server() {
        let body = r#"{"recommendation":{"chinese":"羅布斯塔","english":"Robusta","url":"/products/robusta"}}"#;
        assert_eq!(
            parse(body).expect("valid body").url,
            "http://127.0.0.1:8000/products/robusta"
        );

        let body = r#"{"recommendation":{"chinese":"羅布斯塔","english":"Robusta","url":"https://shop.example/r"}}"#;
        assert_eq!(parse(body).expect("valid body").url, "https://shop.example/r");
    }
}
