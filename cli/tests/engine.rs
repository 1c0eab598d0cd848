//! # Carebot Engine Scenario Tests
//!
//! File: cli/tests/engine.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! End-to-end checks of the matching pipeline through the library API, with
//! deterministic random sources and hand-built catalogs.
//!

use carebot::core::dataset::{load_catalog, parse_dataset};
use carebot::engine::catalog::builtin_intents;
use carebot::engine::composer::{apology, disclosure_responses};
use carebot::engine::{Catalog, Engine, FixedSource, Intent, MatchPolicy, Route};
use carebot::engine::policy::FOLLOW_UP_QUESTIONS;

fn builtin_engine() -> Engine {
    Engine::new(Catalog::assemble(Vec::new()), MatchPolicy::default())
}

fn responses_of(tag: &str) -> Vec<String> {
    builtin_intents()
        .into_iter()
        .find(|intent| intent.tag == tag)
        .map(|intent| intent.responses)
        .unwrap_or_default()
}

#[test]
fn test_hi_selects_the_greeting() {
    let catalog = Catalog::new(vec![Intent::new("greeting", ["hi"], ["Hello there!"])]);
    let engine = Engine::new(catalog, MatchPolicy::default());

    let reply = engine.respond("hi", None, &mut FixedSource::default());
    assert_eq!(reply.text, "Hello there!");
    assert_eq!(
        reply.route,
        Route::Scored {
            tag: "greeting".into(),
            score: 1.0
        }
    );
}

#[test]
fn test_sad_always_draws_from_feeling_sad() {
    let engine = builtin_engine();
    let expected = responses_of("feeling_sad");
    for index in 0..expected.len() {
        let reply = engine.respond("I feel sad", None, &mut FixedSource::new(index, true));
        assert_eq!(reply.route.tag(), Some("feeling_sad"));
        assert_eq!(reply.text, expected[index]);
    }
}

#[test]
fn test_worried_is_personalized() {
    let engine = builtin_engine();
    let anxious = responses_of("feeling_anxious");
    let input = "I'm worried about my exam";

    // "When you're feeling anxious, ..." gets the name before "you're".
    let reply = engine.respond(input, Some("Sam"), &mut FixedSource::new(2, false));
    assert_eq!(reply.route.tag(), Some("feeling_anxious"));
    assert_eq!(reply.text, anxious[2].replacen("you're", "Sam, you're", 1));
    assert!(reply.text.starts_with("When Sam, you're feeling anxious"));

    // No "you" anywhere: the name is prepended.
    let reply = engine.respond(input, Some("Sam"), &mut FixedSource::new(0, false));
    assert!(reply.text.starts_with("Sam, i understand anxiety"));

    // Already addresses the user: left alone.
    let reply = engine.respond(input, Some("Sam"), &mut FixedSource::new(3, false));
    assert_eq!(reply.text, anxious[3]);
}

#[test]
fn test_gibberish_gets_the_apology() {
    let engine = builtin_engine();
    let reply = engine.respond("asdkj qweqwe", None, &mut FixedSource::new(3, true));
    assert_eq!(reply.route, Route::Apology);
    assert_eq!(reply.text, apology(None));
    assert_eq!(
        reply.text,
        "I'm sorry, I don't quite understand. Could you rephrase your question about mental health?"
    );
}

#[test]
fn test_struggling_gets_an_empathetic_reply() {
    let catalog = Catalog::new(vec![Intent::new("greeting", ["hi"], ["Hello!"])]);
    let engine = Engine::new(catalog, MatchPolicy::default());
    let templates = disclosure_responses(None);

    for index in 0..templates.len() {
        let reply = engine.respond(
            "I've been struggling lately",
            None,
            &mut FixedSource::new(index, true),
        );
        assert_eq!(reply.route, Route::Disclosure);
        assert_eq!(reply.text, templates[index]);
        assert_ne!(reply.text, apology(None));
    }
}

#[test]
fn test_follow_up_only_for_informational_intents() {
    let json = r#"{"intents": [
        {"tag": "definition", "patterns": ["what is mental health"], "responses": ["It is health of the mind."]},
        {"tag": "recover", "patterns": ["can people recover"], "responses": ["Yes."]}
    ]}"#;
    let catalog = Catalog::assemble(parse_dataset(json).unwrap());
    let engine = Engine::new(catalog, MatchPolicy::default());

    let reply = engine.respond("what is mental health", None, &mut FixedSource::new(0, true));
    assert_eq!(
        reply.text,
        format!("It is health of the mind. {}", FOLLOW_UP_QUESTIONS[0])
    );

    let reply = engine.respond("what is mental health", None, &mut FixedSource::new(0, false));
    assert_eq!(reply.text, "It is health of the mind.");

    let reply = engine.respond("can people recover", None, &mut FixedSource::new(0, true));
    assert_eq!(reply.text, "Yes.");
}

#[test]
fn test_bundled_catalog_answers_common_questions() {
    let engine = Engine::new(load_catalog(None).unwrap(), MatchPolicy::default());
    let mut rng = FixedSource::default();

    for (input, tag) in [
        ("what is mental health", "definition"),
        ("Can people with mental illness recover?", "recover"),
        ("hello", "greeting"),
        ("I need help", "need_help"),
    ] {
        let reply = engine.respond(input, None, &mut rng);
        assert_eq!(reply.route.tag(), Some(tag), "input {input:?}");
    }
}
