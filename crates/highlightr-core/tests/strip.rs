//! Strip engine behavior, including randomized idempotence checks.

use highlightr_core::{MarkupTemplate, StripEngine};
use pretty_assertions::assert_eq;
use rand::Rng;
use rand::seq::SliceRandom;

#[test]
fn test_strip_two_highlights() {
    let engine = StripEngine::highlight().unwrap();
    assert_eq!(
        engine.strip(
            r#"<mark style="background: #fff;">a</mark> <mark style="background: #000;">b</mark>"#
        ),
        "a b"
    );
}

#[test]
fn test_strip_empty_and_plain_text_unchanged() {
    let engine = StripEngine::highlight().unwrap();
    assert_eq!(engine.strip(""), "");
    assert_eq!(engine.strip("no markup <b>here</b>"), "no markup <b>here</b>");
    assert!(!engine.contains_markup("no markup <b>here</b>"));
}

#[test]
fn test_strip_unbalanced_tags() {
    let engine = StripEngine::highlight().unwrap();
    assert_eq!(
        engine.strip(r#"x</mark> y <mark style="background: red;">z"#),
        "x y z"
    );
}

#[test]
fn test_strip_nested_tags_flattened() {
    let engine = StripEngine::highlight().unwrap();
    let nested = r#"<mark style="background: red;">a<mark style="background: blue;">b</mark>c</mark>"#;
    assert_eq!(engine.strip(nested), "abc");
}

#[test]
fn test_strip_keeps_other_mark_tags() {
    let engine = StripEngine::highlight().unwrap();
    // Only inline-style opening tags belong to the family; the closing tag is always removed.
    assert_eq!(engine.strip("<mark>a</mark>"), "<mark>a");
}

#[test]
fn test_custom_family() {
    let engine = StripEngine::new("<span class", "</span>").unwrap();
    assert_eq!(
        engine.strip(r#"<span class="hl">x</span> <mark style="a">y</mark>"#),
        r#"x <mark style="a">y</mark>"#
    );
}

#[test]
fn test_strip_recovers_wrapped_words() {
    let engine = StripEngine::highlight().unwrap();
    let mut rng = rand::thread_rng();
    let colors = ["#ffab00", "#FF5582A6", "red", "rgb(1, 2, 3)"];

    for _ in 0..200 {
        let len = rng.gen_range(1..12);
        let word: String = (0..len)
            .map(|_| rng.gen_range(b'a'..=b'z') as char)
            .collect();
        let color = colors.choose(&mut rng).unwrap();
        let t = MarkupTemplate::highlight(color);
        let wrapped = format!("{}{}{}", t.prefix, word, t.suffix());
        assert_eq!(engine.strip(&wrapped), word);
    }
}

#[test]
fn test_strip_is_idempotent_on_random_fragments() {
    let engine = StripEngine::highlight().unwrap();
    let mut rng = rand::thread_rng();
    let fragments = [
        r#"<mark style="background: #fff;">"#,
        "</mark>",
        "<mark style",
        "</mark",
        "<",
        ">",
        "/",
        "mark",
        " style",
        "=\"x\"",
        "a",
        " ",
        "\n",
    ];

    for _ in 0..500 {
        let count = rng.gen_range(0..20);
        let input: String = (0..count)
            .map(|_| *fragments.choose(&mut rng).unwrap())
            .collect();
        let once = engine.strip(&input);
        assert_eq!(engine.strip(&once), once, "input: {input:?}");
        assert!(!engine.contains_markup(&once), "input: {input:?}");
    }
}
