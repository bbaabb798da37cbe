use log::debug;
use percent_encoding::percent_decode_str;

/// 伺服器放置防偽 token 的 cookie 名稱。
pub const CSRF_COOKIE: &str = "csrftoken";

/// 以 `name=value` 配對保存 cookie，保留加入順序。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    pairs: Vec<(String, String)>,
}

impl CookieJar {
    /// 解析 `a=1; b=2` 形式的 cookie 字串。
    ///
    /// 沒有 `=` 或名稱為空的片段會被略過；同名 cookie 以第一個為準。
    pub fn parse(serialized: &str) -> Self {
        let mut jar = Self::default();
        for segment in serialized.split(';') {
            let Some((name, value)) = segment.trim().split_once('=') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() || jar.get(name).is_some() {
                continue;
            }
            jar.pairs.push((name.to_string(), value.trim().to_string()));
        }
        jar
    }

    /// 設定一個 cookie，同名者會被覆寫。
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(existing, _)| *existing == name) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((name, value)),
        }
    }

    /// 吸收一個 `Set-Cookie` 標頭值，只取第一個 `name=value`，屬性部分忽略。
    pub fn absorb_set_cookie(&mut self, header: &str) {
        let first = header.split(';').next().unwrap_or_default();
        match first.trim().split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => {
                debug!("cookie set by server: {}", name.trim());
                self.set(name.trim(), value.trim());
            }
            _ => debug!("ignoring malformed Set-Cookie header"),
        }
    }

    /// 原始（未解碼）的值。
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// URL 解碼後的值。無效的 UTF-8 序列會以替代字元呈現。
    pub fn decoded(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
    }

    pub fn csrf_token(&self) -> Option<String> {
        self.decoded(CSRF_COOKIE)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn serialize(&self) -> String {
        self.pairs
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_csrf_token_among_other_cookies() {
        let jar = CookieJar::parse("sessionid=abc; csrftoken=tok%2Fen%3D; theme=dark");
        assert_eq!(jar.csrf_token().as_deref(), Some("tok/en="));
        assert_eq!(jar.get("theme"), Some("dark"));
    }

    #[test]
    fn missing_cookie_yields_none() {
        assert_eq!(CookieJar::parse("").csrf_token(), None);
        assert_eq!(CookieJar::parse("sessionid=abc").csrf_token(), None);
        assert_eq!(CookieJar::parse("xcsrftoken=nope").csrf_token(), None);
    }

    #[test]
    fn first_duplicate_wins_and_garbage_is_skipped() {
        let jar = CookieJar::parse(";;csrftoken=one; junk; =novalue; csrftoken=two");
        assert_eq!(jar.csrf_token().as_deref(), Some("one"));
        assert_eq!(jar.serialize(), "csrftoken=one");
    }

    #[test]
    fn set_cookie_header_overrides_existing_value() {
        let mut jar = CookieJar::parse("csrftoken=old");
        jar.absorb_set_cookie("csrftoken=new%20value; expires=Mon, 01 Jan 2035 00:00:00 GMT; Path=/");
        jar.absorb_set_cookie("; Path=/");
        assert_eq!(jar.csrf_token().as_deref(), Some("new value"));
        assert_eq!(jar.serialize(), "csrftoken=new%20value");
    }
}
