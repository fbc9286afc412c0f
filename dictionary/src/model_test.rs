use super::*;

const HELLO: &str = r#"[
  {
    "word": "hello",
    "phonetic": "həˈləʊ",
    "phonetics": [
      { "text": "həˈləʊ", "audio": "//ssl.gstatic.com/dictionary/static/sounds/20200429/hello--_gb_1.mp3" },
      { "text": "hɛˈləʊ" }
    ],
    "origin": "early 19th century: variant of earlier hollo.",
    "meanings": [
      {
        "partOfSpeech": "exclamation",
        "definitions": [
          {
            "definition": "used as a greeting or to begin a phone conversation.",
            "example": "hello there, Katie!",
            "synonyms": [],
            "antonyms": []
          }
        ]
      },
      {
        "partOfSpeech": "noun",
        "definitions": [
          { "definition": "an utterance of ‘hello’; a greeting.", "synonyms": [], "antonyms": [] }
        ],
        "synonyms": ["greeting"]
      }
    ],
    "license": { "name": "CC BY-SA 3.0", "url": "https://creativecommons.org/licenses/by-sa/3.0" },
    "sourceUrls": ["https://en.wiktionary.org/wiki/hello"]
  }
]"#;

// =============================================================
// parse_entries
// =============================================================

#[test]
fn parses_full_entry() {
    let entries = parse_entries(HELLO).expect("entries");
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert_eq!(entry.word, "hello");
    assert_eq!(entry.phonetic.as_deref(), Some("həˈləʊ"));
    assert_eq!(entry.phonetics.len(), 2);
    assert_eq!(entry.phonetics[1].audio, None);
    assert_eq!(entry.meanings.len(), 2);
    assert_eq!(entry.meanings[0].part_of_speech.as_deref(), Some("exclamation"));
    assert_eq!(entry.meanings[0].definitions[0].example.as_deref(), Some("hello there, Katie!"));
    assert_eq!(entry.meanings[1].synonyms, vec!["greeting".to_owned()]);
    assert_eq!(entry.source_urls, vec!["https://en.wiktionary.org/wiki/hello".to_owned()]);
}

#[test]
fn parses_minimal_entry() {
    let entries = parse_entries(r#"[{"word":"zyzzyva"}]"#).expect("entries");
    assert_eq!(entries[0].word, "zyzzyva");
    assert!(entries[0].phonetics.is_empty());
    assert!(entries[0].meanings.is_empty());
}

#[test]
fn parses_empty_array() {
    assert!(parse_entries("[]").expect("entries").is_empty());
}

#[test]
fn rejects_fault_object_as_entries() {
    let body = r#"{"title":"No Definitions Found","message":"Sorry pal","resolution":"Try again"}"#;
    assert!(matches!(parse_entries(body), Err(LookupError::Decode(_))));
}

#[test]
fn rejects_non_json() {
    assert!(matches!(parse_entries("<html>"), Err(LookupError::Decode(_))));
}

#[test]
fn later_sense_without_definition_still_decodes() {
    let body = r#"[
  {"word":"run","meanings":[{"definitions":[{"definition":"to move swiftly"}]}]},
  {"word":"run","meanings":[{"definitions":[{"example":"a run of luck"}]}]}
]"#;
    let entries = parse_entries(body).expect("entries");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].meanings[0].definitions[0].definition, "to move swiftly");
    assert_eq!(entries[1].meanings[0].definitions[0].definition, "");
    assert_eq!(entries[1].meanings[0].definitions[0].example.as_deref(), Some("a run of luck"));
}

#[test]
fn null_lists_decode_as_empty() {
    let body = r#"[{"word":"cat","phonetics":null,"sourceUrls":null,"meanings":[
  {"partOfSpeech":"noun","synonyms":null,"antonyms":null,
   "definitions":[{"definition":"a small feline","synonyms":null,"antonyms":null}]}
]}]"#;
    let entries = parse_entries(body).expect("entries");
    let entry = &entries[0];
    assert!(entry.phonetics.is_empty());
    assert!(entry.source_urls.is_empty());
    assert!(entry.meanings[0].synonyms.is_empty());
    assert!(entry.meanings[0].antonyms.is_empty());
    assert!(entry.meanings[0].definitions[0].synonyms.is_empty());
    assert_eq!(entry.meanings[0].definitions[0].definition, "a small feline");
}

#[test]
fn null_meanings_decode_as_empty() {
    let entries = parse_entries(r#"[{"word":"cat","meanings":null}]"#).expect("entries");
    assert!(entries[0].meanings.is_empty());
}

#[test]
fn missing_or_null_word_decodes_as_empty() {
    let entries = parse_entries(r#"[{"meanings":[]},{"word":null}]"#).expect("entries");
    assert_eq!(entries[0].word, "");
    assert_eq!(entries[1].word, "");
}

// =============================================================
// ServiceFault
// =============================================================

#[test]
fn service_fault_parses_not_found_body() {
    let body = r#"{"title":"No Definitions Found","message":"Sorry pal, we couldn't find definitions for the word you were looking for.","resolution":"You can try the search again at later time or head to the web instead."}"#;
    let fault = ServiceFault::parse(body).expect("fault");
    assert_eq!(fault.title, "No Definitions Found");
    assert!(fault.message.starts_with("Sorry pal"));
}

#[test]
fn service_fault_ignores_arrays() {
    assert_eq!(ServiceFault::parse("[]"), None);
}
