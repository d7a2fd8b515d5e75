use pavement_engineering_toolbox::i18n::{keys, Translator};

#[test]
fn pack_translation_overrides_built_in_strings() {
    let tr = Translator::new_with_pack("bg-bg", None);
    let msg = tr.t(keys::OUT_OF_RANGE);
    assert!(msg.contains("Извън обхвата"), "msg={msg}");
}

#[test]
fn repeated_lookups_reuse_the_same_static_string() {
    // 언어팩 문자열은 한 번만 'static으로 승격되어야 한다.
    // 조회할 때마다 새로 누수되면 긴 세션에서 메모리가 계속 는다.
    let tr = Translator::new_with_pack("bg-bg", None);
    let first = tr.t(keys::OUT_OF_RANGE);
    let second = tr.t(keys::OUT_OF_RANGE);
    assert!(std::ptr::eq(first, second));

    // 번역기를 새로 만들어도 같은 문자열은 재사용한다
    let tr2 = Translator::new_with_pack("bg-bg", None);
    assert!(std::ptr::eq(first, tr2.t(keys::OUT_OF_RANGE)));
}

#[test]
fn missing_pack_key_falls_back_to_built_in_table() {
    let tr = Translator::new("en");
    assert_eq!(tr.t(keys::FORWARD_RESULT_EEQ), "Eeq:");
    let ko = Translator::new("ko");
    assert_eq!(ko.t(keys::APP_EXIT), "프로그램을 종료합니다.");
}
