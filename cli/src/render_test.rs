use super::*;

#[test]
fn renders_all_fields() {
    let summary = Summary {
        word: "hello".to_owned(),
        phonetic: Some("/həˈləʊ/".to_owned()),
        audio: Some("//ssl.gstatic.com/hello.mp3".to_owned()),
        definition: Some("used as a greeting.".to_owned()),
    };
    assert_eq!(
        render_summary(&summary),
        "hello\n  /həˈləʊ/\n  audio: https://ssl.gstatic.com/hello.mp3\n\n  used as a greeting.\n"
    );
}

#[test]
fn skips_absent_fields() {
    let summary = Summary { word: "zyzzyva".to_owned(), ..Summary::default() };
    assert_eq!(render_summary(&summary), "zyzzyva\n");
}

#[test]
fn definition_without_pronunciation() {
    let summary = Summary {
        word: "cat".to_owned(),
        definition: Some("a small feline.".to_owned()),
        ..Summary::default()
    };
    assert_eq!(render_summary(&summary), "cat\n\n  a small feline.\n");
}

#[test]
fn json_output_resolves_protocol_relative_audio() {
    let summary = Summary {
        word: "hello".to_owned(),
        audio: Some("//ssl.gstatic.com/hello.mp3".to_owned()),
        ..Summary::default()
    };
    let value: serde_json::Value = serde_json::from_str(&render_json(&summary).unwrap()).unwrap();
    assert_eq!(value["word"], "hello");
    assert_eq!(value["audio"], "https://ssl.gstatic.com/hello.mp3");
    assert!(value["definition"].is_null());
}
