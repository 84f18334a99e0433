// Localized message table
//
// Each user-visible string has a `Message` key and one variant per
// `Language`. Templates may contain a single `{n}` (a required count) or
// `{v}` (an offending value) placeholder, substituted by `fill`.

use std::fmt;

/// Output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Traditional Chinese as used in Hong Kong (zh-HK).
    #[default]
    TraditionalChinese,
    /// English.
    English,
}

impl Language {
    /// Parse a BCP 47-style language tag.
    ///
    /// Matching is case-insensitive and accepts `_` as well as `-` as the
    /// subtag separator. Simplified Chinese tags are not accepted since the
    /// table only carries traditional characters.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_ascii_lowercase().replace('_', "-");
        match tag.as_str() {
            "zh" | "zh-hk" | "zh-tw" | "zh-mo" | "zh-hant" | "zh-hant-hk" | "zh-hant-tw" => {
                Some(Language::TraditionalChinese)
            }
            "en" => Some(Language::English),
            t if t.starts_with("en-") => Some(Language::English),
            _ => None,
        }
    }

    /// Canonical tag for this language.
    pub fn tag(self) -> &'static str {
        match self {
            Language::TraditionalChinese => "zh-HK",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Keys of the message table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    /// Program banner, followed by the type label.
    Title,
    /// Random/custom mode prompt.
    ModePrompt,
    /// Custom number entry prompt. Placeholder: `{n}`.
    NumbersPrompt,
    /// Prefix of the echoed selection.
    SelectedNumbers,
    /// Heading above the generated combinations.
    GeneratedCombinations,
    /// Prefix of error lines.
    ErrorPrefix,
    /// Wrong count, range or duplicates. Placeholder: `{n}`.
    InvalidSelection,
    /// Unknown combination type id. Placeholder: `{v}`.
    UnknownType,
    /// Unparseable number token. Placeholder: `{v}`.
    NotANumber,
    /// Name of a combination type, followed by its id in labels.
    TypeLabel,
}

/// Every message key, for table completeness checks.
pub const ALL_MESSAGES: &[Message] = &[
    Message::Title,
    Message::ModePrompt,
    Message::NumbersPrompt,
    Message::SelectedNumbers,
    Message::GeneratedCombinations,
    Message::ErrorPrefix,
    Message::InvalidSelection,
    Message::UnknownType,
    Message::NotANumber,
    Message::TypeLabel,
];

/// Look up the template for `key` in `lang`.
pub fn message(key: Message, lang: Language) -> &'static str {
    use Language::*;
    use Message::*;
    match (key, lang) {
        (Title, TraditionalChinese) => "香港六合彩",
        (Title, English) => "Mark Six",
        (ModePrompt, TraditionalChinese) => "請選擇模式 (1: 隨機, 2: 自定義): ",
        (ModePrompt, English) => "Select mode (1: random, 2: custom): ",
        (NumbersPrompt, TraditionalChinese) => "請輸入{n}個號碼 (1-49): ",
        (NumbersPrompt, English) => "Enter {n} numbers (1-49): ",
        (SelectedNumbers, TraditionalChinese) => "已選擇的號碼: ",
        (SelectedNumbers, English) => "Selected numbers: ",
        (GeneratedCombinations, TraditionalChinese) => "產生的組合:",
        (GeneratedCombinations, English) => "Generated combinations:",
        (ErrorPrefix, TraditionalChinese) => "錯誤: ",
        (ErrorPrefix, English) => "Error: ",
        (InvalidSelection, TraditionalChinese) => "請選擇剛好{n}個1至49之間的不同號碼",
        (InvalidSelection, English) => {
            "Please select exactly {n} different numbers between 1 and 49"
        }
        (UnknownType, TraditionalChinese) => "沒有聰明組合 {v}",
        (UnknownType, English) => "No smart combination {v}",
        (NotANumber, TraditionalChinese) => "無效的號碼: {v}",
        (NotANumber, English) => "Invalid number: {v}",
        (TypeLabel, TraditionalChinese) => "聰明組合",
        (TypeLabel, English) => "Smart Combination",
    }
}

/// Substitute the `{n}` or `{v}` placeholder of a template.
pub fn fill(template: &str, value: impl fmt::Display) -> String {
    let value = value.to_string();
    template.replace("{n}", &value).replace("{v}", &value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_resolve() {
        assert_eq!(Language::from_tag("zh-HK"), Some(Language::TraditionalChinese));
        assert_eq!(Language::from_tag("zh_TW"), Some(Language::TraditionalChinese));
        assert_eq!(Language::from_tag("ZH-Hant"), Some(Language::TraditionalChinese));
        assert_eq!(Language::from_tag("en"), Some(Language::English));
        assert_eq!(Language::from_tag("en-GB"), Some(Language::English));
        assert_eq!(Language::from_tag(" en_US "), Some(Language::English));
    }

    #[test]
    fn unknown_tags_rejected() {
        assert_eq!(Language::from_tag("fi"), None);
        assert_eq!(Language::from_tag("zh-CN"), None);
        assert_eq!(Language::from_tag("english"), None);
        assert_eq!(Language::from_tag(""), None);
    }

    #[test]
    fn default_is_traditional_chinese() {
        assert_eq!(Language::default(), Language::TraditionalChinese);
        assert_eq!(Language::default().tag(), "zh-HK");
    }

    #[test]
    fn tag_round_trips() {
        for lang in [Language::TraditionalChinese, Language::English] {
            assert_eq!(Language::from_tag(lang.tag()), Some(lang));
        }
    }

    #[test]
    fn every_message_is_non_empty() {
        for &key in ALL_MESSAGES {
            for lang in [Language::TraditionalChinese, Language::English] {
                assert!(!message(key, lang).is_empty(), "{key:?} / {lang}");
            }
        }
    }

    #[test]
    fn placeholders_agree_between_languages() {
        for &key in ALL_MESSAGES {
            let zh = message(key, Language::TraditionalChinese);
            let en = message(key, Language::English);
            assert_eq!(zh.contains("{n}"), en.contains("{n}"), "{key:?}");
            assert_eq!(zh.contains("{v}"), en.contains("{v}"), "{key:?}");
        }
    }

    #[test]
    fn fill_count() {
        let s = fill(message(Message::InvalidSelection, Language::English), 10);
        assert_eq!(s, "Please select exactly 10 different numbers between 1 and 49");
        let s = fill(message(Message::NumbersPrompt, Language::TraditionalChinese), 10);
        assert_eq!(s, "請輸入10個號碼 (1-49): ");
    }

    #[test]
    fn fill_value() {
        let s = fill(message(Message::NotANumber, Language::English), "abc");
        assert_eq!(s, "Invalid number: abc");
    }

    #[test]
    fn fill_without_placeholder_is_identity() {
        let t = message(Message::Title, Language::English);
        assert_eq!(fill(t, 3), t);
    }
}
