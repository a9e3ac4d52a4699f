//! End-to-end behaviour of multi-pattern parsing

use parsed_text_core::{parse, render, Chunk, MatchLimit, PatternSpec, TextParser};
use std::sync::{Arc, Mutex};

fn spec(pattern: &str) -> PatternSpec {
    PatternSpec::from_regex(pattern).unwrap()
}

fn children(chunks: &[Chunk]) -> Vec<&str> {
    chunks.iter().map(|c| c.children.as_str()).collect()
}

fn source(chunks: &[Chunk]) -> String {
    chunks.iter().map(|c| c.text.as_str()).collect()
}

#[test]
fn test_no_patterns_passes_text_through() {
    let chunks = parse("Some Text", &[]);
    assert_eq!(children(&chunks), vec!["Some Text"]);
    assert!(!chunks[0].is_matched());
    assert!(chunks[0].on_press.is_none());
}

#[test]
fn test_no_match_passes_text_through() {
    let chunks = parse("Some Text", &[spec("abcdef")]);
    assert_eq!(children(&chunks), vec!["Some Text"]);
}

#[test]
fn test_full_match_collapses_to_one_chunk() {
    let chunks = parse("abcdef", &[spec("abcdef")]);
    assert_eq!(children(&chunks), vec!["abcdef"]);
    assert!(chunks[0].is_matched());
}

#[test]
fn test_empty_input() {
    assert!(parse("", &[]).is_empty());
    assert!(parse("", &[spec("a"), spec("b")]).is_empty());
}

#[test]
fn test_stale_scan_position_has_no_effect() {
    let text = "cc something c something";
    let pattern = spec("c").render_with(|_, _| "Found!".to_string());

    // Use the regex elsewhere first, positioned mid-string
    let stale = pattern.regex().find_at(text, 5).unwrap();
    assert_eq!(stale.start(), 13);

    let chunks = parse(text, &[pattern]);
    assert_eq!(
        children(&chunks),
        vec!["Found!", "Found!", " something ", "Found!", " something"]
    );
}

#[test]
fn test_earlier_pattern_has_priority() {
    let text = "hello my website is http://foo.bar, bar is good.";

    let url_first = TextParser::builder()
        .builtin("url")
        .unwrap()
        .pattern(spec("bar"))
        .build();
    let chunks = url_first.parse(text);

    assert_eq!(
        children(&chunks),
        vec!["hello my website is ", "http://foo.bar", ", ", "bar", " is good."]
    );
    assert_eq!(chunks[1].pattern, Some(0));
    assert_eq!(chunks[3].pattern, Some(1));
    assert_eq!(source(&chunks), text);
}

#[test]
fn test_reversed_order_changes_claims() {
    let text = "hello my website is http://foo.bar, bar is good.";

    let bar_first = TextParser::builder()
        .pattern(spec("bar"))
        .builtin("url")
        .unwrap()
        .build();
    let chunks = bar_first.parse(text);

    assert_eq!(
        children(&chunks),
        vec!["hello my website is http://foo.", "bar", ", ", "bar", " is good."]
    );
    assert!(chunks.iter().all(|c| c.pattern != Some(1)));
}

#[test]
fn test_identical_patterns_first_wins() {
    let chunks = parse(
        "a b a",
        &[
            spec("a").render_template("first"),
            spec("a").render_template("second"),
        ],
    );
    assert_eq!(children(&chunks), vec!["first", " b ", "first"]);
}

fn capped(limit: impl Into<MatchLimit>) -> String {
    let pattern = spec("a")
        .render_with(|_, _| "z".to_string())
        .max_matches(limit);
    render(&parse("aaaa", &[pattern]))
}

#[test]
fn test_match_count_capping() {
    assert_eq!(capped(MatchLimit::at_most(1)), "zaaa");
    assert_eq!(capped(MatchLimit::at_most(2)), "zzaa");
    assert_eq!(capped(MatchLimit::at_most(10)), "zzzz");
}

#[test]
fn test_out_of_domain_match_counts_are_unlimited() {
    assert_eq!(capped(MatchLimit::UNLIMITED), "zzzz");
    assert_eq!(capped(MatchLimit::at_most(0)), "zzzz");
    assert_eq!(capped(MatchLimit::from_signed(-1)), "zzzz");
    assert_eq!(
        capped(MatchLimit::from_value(&toml::Value::String("x".into()))),
        "zzzz"
    );
    assert_eq!(
        capped(MatchLimit::from_value(&toml::Value::Float(1.5))),
        "zzzz"
    );
}

#[test]
fn test_render_receives_capture_groups() {
    let pattern = spec(r"\[@(\w+):(\d+)\]").render_with(|_, groups| {
        format!("@{}", groups[0].as_deref().unwrap_or_default())
    });
    let chunks = parse("Hello [@Ann:42], welcome", &[pattern]);
    assert_eq!(children(&chunks), vec!["Hello ", "@Ann", ", welcome"]);
    assert_eq!(chunks[1].text, "[@Ann:42]");
}

#[test]
fn test_press_handler_attached_not_invoked() {
    let pressed = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&pressed);
    let pattern = spec(r"#\w+").on_press(move |text| log.lock().unwrap().push(text.to_string()));

    let chunks = parse("x #one y #two", &[pattern]);
    assert!(pressed.lock().unwrap().is_empty());

    let matched: Vec<_> = chunks.iter().filter(|c| c.is_matched()).collect();
    assert_eq!(matched.len(), 2);
    assert!(matched.iter().all(|c| c.on_press.is_some()));
    assert!(chunks.iter().filter(|c| !c.is_matched()).all(|c| c.on_press.is_none()));

    for chunk in &matched {
        assert!(chunk.press());
    }
    assert_eq!(*pressed.lock().unwrap(), vec!["#one", "#two"]);
}

#[test]
fn test_offsets_point_into_input() {
    let text = "one #two three";
    for chunk in parse(text, &[spec(r"#\w+")]) {
        assert_eq!(&text[chunk.offset..chunk.offset + chunk.len()], chunk.text);
    }
}

#[test]
fn test_parser_reuse_is_idempotent() {
    let parser = TextParser::with_builtins(&["url", "email", "hashtag"]).unwrap();
    let text = "mail a@b.co or see www.example.com #tag";

    let first = parser.parse(text);
    let second = parser.parse(text);
    assert_eq!(children(&first), children(&second));
    assert_eq!(source(&first), text);
}

#[test]
fn test_parse_across_threads() {
    let parser = Arc::new(TextParser::with_builtins(&["hashtag"]).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let parser = Arc::clone(&parser);
            std::thread::spawn(move || {
                let text = format!("thread {i} says #hi");
                parser.parse(&text).len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}
