use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_FORWARD: &str = "main_menu.forward";
    pub const MAIN_MENU_INVERSE_MODULUS: &str = "main_menu.inverse_modulus";
    pub const MAIN_MENU_INVERSE_THICKNESS: &str = "main_menu.inverse_thickness";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_DATASET: &str = "main_menu.dataset";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PROMPT_E1: &str = "prompt.e1";
    pub const PROMPT_E2: &str = "prompt.e2";
    pub const PROMPT_H: &str = "prompt.h";
    pub const PROMPT_D: &str = "prompt.d";
    pub const PROMPT_TARGET_EEQ: &str = "prompt.target_eeq";

    pub const FORWARD_HEADING: &str = "forward.heading";
    pub const FORWARD_RESULT_EEQ: &str = "forward.result_eeq";
    pub const FORWARD_RESULT_LEVEL: &str = "forward.result_level";
    pub const RESULT_BRACKET: &str = "result.bracket";
    pub const OUT_OF_RANGE: &str = "result.out_of_range";
    pub const REJECTED_HEADING: &str = "result.rejected_heading";
    pub const PROMPT_SHOW_REJECTED: &str = "prompt.show_rejected";

    pub const INVERSE_MODULUS_HEADING: &str = "inverse_modulus.heading";
    pub const INVERSE_MODULUS_RESULT: &str = "inverse_modulus.result";
    pub const INVERSE_THICKNESS_HEADING: &str = "inverse_thickness.heading";
    pub const INVERSE_THICKNESS_RESULT: &str = "inverse_thickness.result";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const DATASET_HEADING: &str = "dataset.heading";
    pub const DATASET_CURRENT: &str = "dataset.current";
    pub const DATASET_COLUMNS: &str = "dataset.columns";
    pub const DATASET_LEVELS: &str = "dataset.levels";
    pub const DATASET_PROMPT_CSV: &str = "dataset.prompt_csv";
    pub const DATASET_LOADED: &str = "dataset.loaded";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNITS: &str = "settings.current_units";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const MODULUS_UNIT_OPTIONS: &str = "unit.modulus_options";
    pub const LENGTH_UNIT_OPTIONS: &str = "unit.length_options";

    pub const HELP_FORWARD: &str = "help.forward";
    pub const HELP_INVERSE_MODULUS: &str = "help.inverse_modulus";
    pub const HELP_INVERSE_THICKNESS: &str = "help.inverse_thickness";
    pub const HELP_DATASET: &str = "help.dataset";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return intern(v);
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// 언어팩 문자열을 `&'static str`로 승격한다. 같은 문자열은 한 번만 누수되도록
/// 인터닝해서 반복 조회가 메모리를 계속 키우지 않게 한다.
fn intern(s: &str) -> &'static str {
    static INTERNED: OnceLock<Mutex<HashMap<String, &'static str>>> = OnceLock::new();
    let mut map = INTERNED
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(&leaked) = map.get(s) {
        return leaked;
    }
    let leaked: &'static str = Box::leak(s.to_string().into_boxed_str());
    map.insert(s.to_string(), leaked);
    leaked
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "bg" => Some("bg-bg".into()),
        "bg-bg" => Some("bg-bg".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        other if other.starts_with("bg") => Some("bg-bg".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        "bg" => Some("bg-bg".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
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

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        "bg-bg" | "bg" => parse_toml_to_map(include_str!("../locales/bg-bg.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Pavement Engineering Toolbox ===",
        MAIN_MENU_FORWARD => "1) 등가탄성계수 Eeq 계산",
        MAIN_MENU_INVERSE_MODULUS => "2) 필요 상층 탄성계수 E1 역산",
        MAIN_MENU_INVERSE_THICKNESS => "3) 필요 층 두께 h 역산",
        MAIN_MENU_UNIT_CONVERSION => "4) 단위 변환기",
        MAIN_MENU_DATASET => "5) 이솔라인 데이터",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PROMPT_E1 => "상층 탄성계수 E1 [MPa]: ",
        PROMPT_E2 => "기준 탄성계수 E2 [MPa]: ",
        PROMPT_H => "층 두께 h [cm]: ",
        PROMPT_D => "하중판 지름 D [cm]: ",
        PROMPT_TARGET_EEQ => "목표 등가탄성계수 Eeq [MPa]: ",
        FORWARD_HEADING => "\n-- 등가탄성계수 (이바노프법) --",
        FORWARD_RESULT_EEQ => "Eeq:",
        FORWARD_RESULT_LEVEL => "Eeq/E2:",
        RESULT_BRACKET => "사용한 브래킷:",
        OUT_OF_RANGE => "표 범위 밖입니다. 이솔라인을 더 추가하세요.",
        REJECTED_HEADING => "y 포함 검사에서 탈락한 쌍:",
        PROMPT_SHOW_REJECTED => "탈락한 쌍 진단을 표시할까요? (y/N): ",
        INVERSE_MODULUS_HEADING => "\n-- 필요 상층 탄성계수 역산 --",
        INVERSE_MODULUS_RESULT => "필요 E1:",
        INVERSE_THICKNESS_HEADING => "\n-- 필요 층 두께 역산 --",
        INVERSE_THICKNESS_RESULT => "필요 h:",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 탄성계수  2) 길이",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: MPa, kgf/cm2, cm): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: psi, mm, in): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        DATASET_HEADING => "\n-- 이솔라인 데이터 --",
        DATASET_CURRENT => "현재 데이터셋:",
        DATASET_COLUMNS => "열 이름:",
        DATASET_LEVELS => "레벨 / h/D 범위 / 표본 수:",
        DATASET_PROMPT_CSV => "읽을 CSV 경로(취소하려면 엔터): ",
        DATASET_LOADED => "데이터셋을 읽었습니다:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNITS => "현재 기본 단위:",
        SETTINGS_OPTIONS => "1) MPa/cm  2) kgf/cm²/cm  3) psi/in",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "기본 단위가 변경되었습니다:",
        MODULUS_UNIT_OPTIONS => "탄성계수 단위: 1=MPa 2=kPa 3=kgf/cm² 4=psi",
        LENGTH_UNIT_OPTIONS => "길이 단위: 1=cm 2=mm 3=m 4=in",
        HELP_FORWARD => "도움말: E1, E2, h, D를 입력하면 h/D와 E1/E2로 이솔라인을 보간해 Eeq = (Eeq/E2)·E2를 계산합니다.",
        HELP_INVERSE_MODULUS => "도움말: 목표 Eeq와 E2, h, D를 입력하면 필요한 상층 탄성계수 E1을 역산합니다.",
        HELP_INVERSE_THICKNESS => "도움말: 목표 Eeq와 E1, E2, D를 입력하면 필요한 층 두께 h를 역산합니다.",
        HELP_DATASET => "도움말: CSV 열 이름은 Eeq_over_E2/h_over_D/E1_over_E2 또는 Ee_over_Ei/Ed_over_Ei 계열을 지원합니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Pavement Engineering Toolbox ===",
        MAIN_MENU_FORWARD => "1) Equivalent modulus Eeq",
        MAIN_MENU_INVERSE_MODULUS => "2) Required top-layer modulus E1",
        MAIN_MENU_INVERSE_THICKNESS => "3) Required layer thickness h",
        MAIN_MENU_UNIT_CONVERSION => "4) Unit Converter",
        MAIN_MENU_DATASET => "5) Isoline dataset",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PROMPT_E1 => "Top-layer modulus E1 [MPa]: ",
        PROMPT_E2 => "Reference modulus E2 [MPa]: ",
        PROMPT_H => "Layer thickness h [cm]: ",
        PROMPT_D => "Load-plate diameter D [cm]: ",
        PROMPT_TARGET_EEQ => "Target equivalent modulus Eeq [MPa]: ",
        FORWARD_HEADING => "\n-- Equivalent modulus (Ivanov method) --",
        FORWARD_RESULT_EEQ => "Eeq:",
        FORWARD_RESULT_LEVEL => "Eeq/E2:",
        RESULT_BRACKET => "Bracket used:",
        OUT_OF_RANGE => "Out of table range. Add more isolines.",
        REJECTED_HEADING => "Pairs rejected by the y-containment check:",
        PROMPT_SHOW_REJECTED => "Show rejected-pair diagnostics? (y/N): ",
        INVERSE_MODULUS_HEADING => "\n-- Required top-layer modulus --",
        INVERSE_MODULUS_RESULT => "Required E1:",
        INVERSE_THICKNESS_HEADING => "\n-- Required layer thickness --",
        INVERSE_THICKNESS_RESULT => "Required h:",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Modulus  2) Length",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: MPa, kgf/cm2, cm): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: psi, mm, in): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        DATASET_HEADING => "\n-- Isoline dataset --",
        DATASET_CURRENT => "Current dataset:",
        DATASET_COLUMNS => "Columns:",
        DATASET_LEVELS => "Level / h/D range / samples:",
        DATASET_PROMPT_CSV => "CSV path to load (enter to cancel): ",
        DATASET_LOADED => "Dataset loaded:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNITS => "Current default units:",
        SETTINGS_OPTIONS => "1) MPa/cm  2) kgf/cm²/cm  3) psi/in",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; units unchanged.",
        SETTINGS_SAVED => "Default units changed to:",
        MODULUS_UNIT_OPTIONS => "Modulus units: 1=MPa 2=kPa 3=kgf/cm² 4=psi",
        LENGTH_UNIT_OPTIONS => "Length units: 1=cm 2=mm 3=m 4=in",
        HELP_FORWARD => "Help: enter E1, E2, h, D; the isolines are interpolated at h/D and E1/E2 to give Eeq = (Eeq/E2)·E2.",
        HELP_INVERSE_MODULUS => "Help: enter target Eeq plus E2, h, D to solve for the required top-layer modulus E1.",
        HELP_INVERSE_THICKNESS => "Help: enter target Eeq plus E1, E2, D to solve for the required layer thickness h.",
        HELP_DATASET => "Help: CSV headers may use Eeq_over_E2/h_over_D/E1_over_E2 or the Ee_over_Ei/Ed_over_Ei family.",
        _ => return None,
    })
}
