//! UI strings for ThresholdFE: embedded `locales/*.txt` tables and the
//! `t!` lookup macro.

use std::collections::HashMap;
use std::sync::Mutex;

/// Global translation state.
static I18N: Mutex<Option<I18nState>> = Mutex::new(None);

struct I18nState {
    current_lang: String,
    /// lang_code → (key → translated_string)
    translations: HashMap<String, HashMap<String, String>>,
}

/// Supported languages: (code, native_name)
pub const LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("zh-CN", "中文(简体)")];

const TABLES: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en.txt")),
    ("zh-CN", include_str!("../locales/zh-CN.txt")),
];

/// Load the embedded tables. Calling again resets to English.
pub fn init() {
    let translations = TABLES
        .iter()
        .map(|&(code, data)| (code.to_string(), parse_translations(data)))
        .collect();
    if let Ok(mut guard) = I18N.lock() {
        *guard = Some(I18nState {
            current_lang: "en".to_string(),
            translations,
        });
    }
}

/// Unknown codes select English.
pub fn set_language(code: &str) {
    if let Ok(mut guard) = I18N.lock()
        && let Some(state) = guard.as_mut()
    {
        state.current_lang = if state.translations.contains_key(code) {
            code.to_string()
        } else {
            "en".to_string()
        };
    }
}

pub fn current_language() -> String {
    I18N.lock()
        .ok()
        .and_then(|guard| guard.as_ref().map(|state| state.current_lang.clone()))
        .unwrap_or_else(|| "en".to_string())
}

/// Current language, then English, then the key itself.
pub fn translate(key: &str) -> String {
    let Ok(guard) = I18N.lock() else {
        return key.to_string();
    };
    let Some(state) = guard.as_ref() else {
        return key.to_string();
    };
    [state.current_lang.as_str(), "en"]
        .iter()
        .find_map(|lang| state.translations.get(*lang)?.get(key))
        .cloned()
        .unwrap_or_else(|| key.to_string())
}

pub fn detect_system_language() -> String {
    ["LC_ALL", "LC_MESSAGES", "LANG", "LANGUAGE"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|val| match_system_locale(&val))
        .unwrap_or_else(|| "en".to_string())
}

// "zh_TW.UTF-8" -> "zh-CN": only the primary subtag matters with two tables
fn match_system_locale(locale: &str) -> Option<String> {
    let primary = locale
        .split(['.', '@', '_', '-'])
        .next()?
        .to_ascii_lowercase();
    LANGUAGES
        .iter()
        .map(|&(code, _)| code)
        .find(|code| code.split('-').next() == Some(primary.as_str()))
        .map(str::to_string)
}

/// `key=value` lines; `#` comments and blank lines are skipped.
fn parse_translations(data: &str) -> HashMap<String, String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, val)| (key.trim().to_string(), val.trim().to_string()))
        .collect()
}

/// Translation macro. Usage: `t!("button.load")` or `t!("status.loaded", name = "a.png")`
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::translate($key)
    };
    ($key:expr, $($name:ident = $val:expr),+ $(,)?) => {{
        let mut s = $crate::i18n::translate($key);
        $(
            s = s.replace(concat!("{", stringify!($name), "}"), &format!("{}", $val));
        )+
        s
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_comments_and_blanks() {
        let map = parse_translations("# header\n\n a = b \nno_equals\nx=y=z\n");
        assert_eq!(map.get("a").map(String::as_str), Some("b"));
        assert_eq!(map.get("x").map(String::as_str), Some("y=z"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn locale_matching() {
        assert_eq!(match_system_locale("zh_CN.UTF-8").as_deref(), Some("zh-CN"));
        assert_eq!(match_system_locale("ZH").as_deref(), Some("zh-CN"));
        assert_eq!(match_system_locale("C"), None);
        assert_eq!(match_system_locale(""), None);
        assert_eq!(match_system_locale("zh_TW").as_deref(), Some("zh-CN"));
        assert_eq!(match_system_locale("en_GB@euro").as_deref(), Some("en"));
        assert_eq!(match_system_locale("fr_FR"), None);
    }

    #[test]
    fn embedded_tables_cover_the_same_keys() {
        let en = parse_translations(include_str!("../locales/en.txt"));
        let zh = parse_translations(include_str!("../locales/zh-CN.txt"));
        let mut en_keys: Vec<_> = en.keys().collect();
        let mut zh_keys: Vec<_> = zh.keys().collect();
        en_keys.sort();
        zh_keys.sort();
        assert_eq!(en_keys, zh_keys);
    }

    #[test]
    fn lookup_switch_and_fallback() {
        init();
        assert_eq!(translate("slider.min"), "Min");
        assert_eq!(translate("no.such.key"), "no.such.key");
        assert_eq!(
            crate::t!("status.loaded", name = "a.png", width = 3, height = 4),
            "Loaded a.png (3×4)"
        );

        set_language("zh-CN");
        assert_eq!(current_language(), "zh-CN");
        assert_eq!(translate("slider.min"), "最小值");

        set_language("xx");
        assert_eq!(current_language(), "en");
    }
}
