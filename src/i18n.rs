use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const LANGUAGE_MENU_TITLE: &str = "language_menu.title";
    pub const LANGUAGE_MENU_ENGLISH: &str = "language_menu.english";
    pub const LANGUAGE_MENU_FILIPINO: &str = "language_menu.filipino";
    pub const PROMPT_CHOICE: &str = "prompt.choice";

    pub const WELCOME: &str = "general.welcome";

    pub const HOUSE_MENU_TITLE: &str = "house_menu.title";
    pub const HOUSE_MENU_BUNGALOW: &str = "house_menu.bungalow";
    pub const HOUSE_MENU_SINGLE_DETACHED: &str = "house_menu.single_detached";

    pub const PROMPT_FLOOR_AREA: &str = "prompt.floor_area";
    pub const PROMPT_WALL_AREA: &str = "prompt.wall_area";
    pub const PROMPT_CEILING_HEIGHT: &str = "prompt.ceiling_height";
    pub const PROMPT_FOUNDATION_VOLUME: &str = "prompt.foundation_volume";
    pub const PROMPT_COLUMN_VOLUME: &str = "prompt.column_volume";

    pub const ERROR_EXPECTED_NON_NEGATIVE: &str = "error.expected_non_negative";

    pub const REPORT_HEADING: &str = "report.heading";

    pub const MATERIAL_CEMENT: &str = "material.cement";
    pub const MATERIAL_SAND: &str = "material.sand";
    pub const MATERIAL_GRAVEL: &str = "material.gravel";
    pub const MATERIAL_REBAR: &str = "material.rebar";
    pub const MATERIAL_CHB: &str = "material.chb";
    pub const MATERIAL_PLYWOOD: &str = "material.plywood";
    pub const MATERIAL_STEEL_BARS: &str = "material.steel_bars";
    pub const MATERIAL_TILES: &str = "material.tiles";
    pub const MATERIAL_WOOD: &str = "material.wood";

    pub const UNIT_BAGS: &str = "unit.bags";
    pub const UNIT_CUBIC_METERS: &str = "unit.cubic_meters";
    pub const UNIT_CUBIC_METER_SYMBOL: &str = "unit.cubic_meter_symbol";
    pub const UNIT_KILOGRAMS: &str = "unit.kilograms";
    pub const UNIT_PIECES: &str = "unit.pieces";
    pub const UNIT_SHEETS: &str = "unit.sheets";
}

/// 지원 언어.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    /// Filipino (Tagalog)
    Tl,
}

impl Language {
    /// 언어 메뉴 번호를 해석한다. 2만 Filipino이고 나머지는 모두 영어다.
    pub fn from_choice(choice: i64) -> Self {
        if choice == 2 {
            Language::Tl
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tl => "tl",
        }
    }
}

const BUILT_IN_EN: &str = include_str!("../locales/en.toml");
const BUILT_IN_TL: &str = include_str!("../locales/tl.toml");

/// 언어 태그별 메시지 테이블을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    messages: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Translator {
    /// 내장 언어팩만으로 번역기를 만든다.
    pub fn new(lang: Language) -> Self {
        Self::new_with_pack(lang, None)
    }

    /// 내장 언어팩 위에 `pack_dir/<code>.toml`의 키를 덮어쓴다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang: Language, pack_dir: Option<&Path>) -> Self {
        let mut messages = built_in_pack(lang);
        if let Some(overrides) = pack_dir.and_then(|dir| load_overrides(dir, lang)) {
            debug!(lang = lang.as_code(), keys = overrides.len(), "locale pack applied");
            messages.extend(overrides);
        }
        let fallback = if lang == Language::En {
            HashMap::new()
        } else {
            built_in_pack(Language::En)
        };
        Self {
            lang,
            messages,
            fallback,
        }
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// 번역을 가져온다. 없으면 영어 문자열, 그것도 없으면 키 자체를 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key)
            .or_else(|| self.fallback.get(key).map(String::as_str))
            .unwrap_or(key)
    }
}

fn built_in_pack(lang: Language) -> HashMap<String, String> {
    let src = match lang {
        Language::En => BUILT_IN_EN,
        Language::Tl => BUILT_IN_TL,
    };
    parse_toml_to_map(src).unwrap_or_default()
}

fn load_overrides(dir: &Path, lang: Language) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{}.toml", lang.as_code()));
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no locale pack override");
            return None;
        }
    };
    let map = parse_toml_to_map(&content);
    if map.is_none() {
        warn!(path = %path.display(), "locale pack is empty or not valid TOML; ignored");
    }
    map
}

/// TOML 언어팩을 점(.)으로 이어진 플랫 키 맵으로 펼친다.
fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &value {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[unit]\nbags = \"sako\"\n[a.b]\nc = \"d\"\n").unwrap();
        assert_eq!(map.get("unit.bags").map(String::as_str), Some("sako"));
        assert_eq!(map.get("a.b.c").map(String::as_str), Some("d"));
    }

    #[test]
    fn non_string_values_are_skipped() {
        assert!(parse_toml_to_map("count = 3\n").is_none());
    }

    #[test]
    fn built_in_packs_cover_the_same_keys() {
        let en = built_in_pack(Language::En);
        let tl = built_in_pack(Language::Tl);
        let mut missing: Vec<_> = en.keys().filter(|k| !tl.contains_key(*k)).collect();
        missing.sort();
        assert!(missing.is_empty(), "tl pack is missing {missing:?}");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        let tr = Translator::new(Language::Tl);
        assert_eq!(tr.t("no.such.key"), "no.such.key");
    }
}
