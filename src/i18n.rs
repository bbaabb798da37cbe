//! 介面字串表與語言代碼。
//!
//! `StringTable` 是一份 `LanguageCode -> (key -> 顯示文字)` 的對照表，
//! 建構完成後即不再變動。查不到的 key 會回傳 `None`，由呼叫端決定略過。

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 字串表中使用的 key。
pub mod keys {
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const INPUT_PLACEHOLDER: &str = "input-placeholder";
    pub const GET_RECOMMENDATION: &str = "get-recommendation";
    pub const CLEAR: &str = "clear";
    pub const ARABICA: &str = "arabica";
    pub const ARABICA_DESCRIPTION: &str = "arabica-description";
    pub const ROBUSTA: &str = "robusta";
    pub const ROBUSTA_DESCRIPTION: &str = "robusta-description";
    pub const LIBERICA: &str = "liberica";
    pub const LIBERICA_DESCRIPTION: &str = "liberica-description";
    pub const ENG: &str = "eng";
    pub const ZH: &str = "zh";
    pub const RECOMMENDED_COFFEE: &str = "recommended-coffee";
    pub const RECOMMENDATION_FAILED: &str = "recommendation-failed";
    pub const PENDING: &str = "pending";
    pub const OPEN_LINK: &str = "open-link";
    pub const HELP: &str = "help";
    pub const WINDOW_TOO_SMALL: &str = "window-too-small";
}

/// 目前支援的兩種介面語言。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LanguageCode {
    #[default]
    TraditionalChinese,
    English,
}

impl LanguageCode {
    /// BCP 47 語言標籤，例如 `zh-TW`。
    pub fn tag(&self) -> &'static str {
        match self {
            Self::TraditionalChinese => "zh-TW",
            Self::English => "en",
        }
    }

    /// 切換到另一種語言。只有兩種語言，所以是單純的互換。
    pub fn toggle(&self) -> Self {
        match self {
            Self::TraditionalChinese => Self::English,
            Self::English => Self::TraditionalChinese,
        }
    }

    pub fn all() -> [LanguageCode; 2] {
        [Self::TraditionalChinese, Self::English]
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language tag: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for LanguageCode {
    type Err = UnknownLanguage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "zh-tw" | "zh-hant" | "zh" => Ok(Self::TraditionalChinese),
            "en" | "en-us" | "en-gb" => Ok(Self::English),
            _ => Err(UnknownLanguage(value.to_string())),
        }
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = UnknownLanguage;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LanguageCode> for String {
    fn from(value: LanguageCode) -> Self {
        value.tag().to_string()
    }
}

const ZH_TW: &[(&str, &str)] = &[
    (keys::TITLE, "咖啡推薦系統"),
    (keys::DESCRIPTION, "寫下關於您自己的一些事："),
    (keys::INPUT_PLACEHOLDER, "輸入例如:性別、年齡..等"),
    (keys::GET_RECOMMENDATION, "獲取推薦"),
    (keys::CLEAR, "清除"),
    (keys::ARABICA, "阿拉比卡"),
    (keys::ARABICA_DESCRIPTION, "甜美順滑，風味複雜。最受歡迎的咖啡品種。"),
    (keys::ROBUSTA, "羅布斯塔"),
    (keys::ROBUSTA_DESCRIPTION, "強烈苦味，咖啡因含量高。常用於義式濃縮咖啡"),
    (keys::LIBERICA, "利比里卡"),
    (keys::LIBERICA_DESCRIPTION, "獨特的水果和木質風味。罕見，主要在東南亞種植。"),
    (keys::ENG, "ENG"),
    (keys::ZH, "中文"),
    (keys::RECOMMENDED_COFFEE, "推薦咖啡："),
    (keys::RECOMMENDATION_FAILED, "推薦失敗："),
    (keys::PENDING, "正在取得推薦…"),
    (keys::OPEN_LINK, "F6 開啟連結"),
    (
        keys::HELP,
        "Enter 推薦 | Esc 清除 | F2 語言 | F3/F4 輪播 | Ctrl+Q 離開",
    ),
    (keys::WINDOW_TOO_SMALL, "終端機視窗過小，請調整至至少 {width}x{height}。"),
];

const EN: &[(&str, &str)] = &[
    (keys::TITLE, "Coffee Recommender System"),
    (keys::DESCRIPTION, "Write something about yourself:"),
    (keys::INPUT_PLACEHOLDER, "Input e.g. gender, age, etc."),
    (keys::GET_RECOMMENDATION, "Get Recommendation"),
    (keys::CLEAR, "Clear"),
    (keys::ARABICA, "Arabica"),
    (
        keys::ARABICA_DESCRIPTION,
        "Sweet and smooth with complex flavors. The most popular coffee variety.",
    ),
    (keys::ROBUSTA, "Robusta"),
    (
        keys::ROBUSTA_DESCRIPTION,
        "Strong bitter taste, high caffeine content. Often used in espresso.",
    ),
    (keys::LIBERICA, "Liberica"),
    (
        keys::LIBERICA_DESCRIPTION,
        "Unique fruity and woody flavor. Rare, mainly grown in Southeast Asia.",
    ),
    (keys::ENG, "ENG"),
    (keys::ZH, "中文"),
    (keys::RECOMMENDED_COFFEE, "Recommended Coffee: "),
    (keys::RECOMMENDATION_FAILED, "Recommendation failed: "),
    (keys::PENDING, "Fetching recommendation..."),
    (keys::OPEN_LINK, "F6 open link"),
    (
        keys::HELP,
        "Enter recommend | Esc clear | F2 language | F3/F4 carousel | Ctrl+Q quit",
    ),
    (
        keys::WINDOW_TOO_SMALL,
        "Terminal window too small, resize to at least {width}x{height}.",
    ),
];

/// 每種語言一份 key -> 文字的對照表。
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    entries: HashMap<LanguageCode, HashMap<String, String>>,
}

impl StringTable {
    /// 內建的繁體中文與英文字串。
    pub fn builtin() -> Self {
        let mut table = Self::default();
        table.extend(LanguageCode::TraditionalChinese, ZH_TW.iter().copied());
        table.extend(LanguageCode::English, EN.iter().copied());
        table
    }

    /// 加入或覆寫指定語言的字串。
    pub fn extend<K, V>(&mut self, lang: LanguageCode, pairs: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = self.entries.entry(lang).or_default();
        for (key, text) in pairs {
            entries.insert(key.into(), text.into());
        }
    }

    pub fn lookup(&self, lang: LanguageCode, key: &str) -> Option<&str> {
        self.entries
            .get(&lang)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// 與 `lookup` 相同，但查不到時回傳空字串。
    pub fn text(&self, lang: LanguageCode, key: &str) -> &str {
        self.lookup(lang, key).unwrap_or_default()
    }

    pub fn len(&self, lang: LanguageCode) -> usize {
        self.entries.get(&lang).map_or(0, HashMap::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_share_the_same_keys() {
        let table = StringTable::builtin();
        assert_eq!(
            table.len(LanguageCode::TraditionalChinese),
            table.len(LanguageCode::English)
        );
        for (key, _) in ZH_TW {
            assert!(
                table.lookup(LanguageCode::English, key).is_some(),
                "missing english entry for {key}"
            );
        }
    }

    #[test]
    fn lookup_of_unknown_key_is_none() {
        let table = StringTable::builtin();
        assert_eq!(table.lookup(LanguageCode::English, "no-such-key"), None);
        assert_eq!(table.text(LanguageCode::English, "no-such-key"), "");
    }

    #[test]
    fn extend_overrides_existing_entries() {
        let mut table = StringTable::builtin();
        table.extend(LanguageCode::English, [(keys::CLEAR, "Reset")]);
        assert_eq!(table.lookup(LanguageCode::English, keys::CLEAR), Some("Reset"));
        assert_eq!(
            table.lookup(LanguageCode::TraditionalChinese, keys::CLEAR),
            Some("清除")
        );
    }

    #[test]
    fn toggle_swaps_between_the_two_codes() {
        let lang = LanguageCode::default();
        assert_eq!(lang, LanguageCode::TraditionalChinese);
        assert_eq!(lang.toggle(), LanguageCode::English);
        assert_eq!(lang.toggle().toggle(), lang);
    }

    #[test]
    fn parses_common_spellings() {
        assert_eq!("zh-TW".parse(), Ok(LanguageCode::TraditionalChinese));
        assert_eq!("zh_tw".parse(), Ok(LanguageCode::TraditionalChinese));
        assert_eq!("EN".parse(), Ok(LanguageCode::English));
        assert_eq!(
            "fr".parse::<LanguageCode>(),
            Err(UnknownLanguage(String::from("fr")))
        );
    }
}
