//! Composition engine tests
//!
//! These tests verify the selection and rendering contracts end to end:
//! bounded selection, cross-action diversity, caller-data immutability,
//! and placeholder substitution.

use pretty_assertions::assert_eq;
use prompt_composer::{
    compose_action_examples, compose_action_examples_with, select_action_examples,
    types::{ActionDefinition, ActionExample, Content},
    NameGenerator,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic name generator yielding Name1, Name2, ...
struct SequenceNames(AtomicUsize);

impl SequenceNames {
    fn new() -> Self {
        SequenceNames(AtomicUsize::new(0))
    }
}

impl NameGenerator for SequenceNames {
    fn generate_name(&self) -> String {
        format!("Name{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

fn turn(name: &str, text: &str) -> ActionExample {
    ActionExample {
        name: name.to_string(),
        content: Content {
            text: Some(text.to_string()),
            ..Default::default()
        },
    }
}

fn action(name: &str, dialogue_texts: &[&str]) -> ActionDefinition {
    ActionDefinition {
        name: name.to_string(),
        description: format!("The {} action", name),
        similes: None,
        examples: dialogue_texts
            .iter()
            .map(|text| vec![turn("{{user1}}", text)])
            .collect(),
    }
}

/// Selection returns exactly min(count, total available examples).
#[test]
fn test_selection_is_bounded_by_count_and_availability() {
    let actions = vec![
        action("greet", &["g1", "g2", "g3"]),
        action("wave", &["w1"]),
        action("ignore", &["i1", "i2"]),
    ];

    for count in 0..10 {
        let selected = select_action_examples(&actions, count);
        assert_eq!(selected.len(), count.min(6));
    }
}

/// No dialogue instance is ever selected twice in one call.
#[test]
fn test_selection_has_no_duplicates() {
    let actions = vec![
        action("a", &["a1", "a2", "a3", "a4"]),
        action("b", &["b1", "b2", "b3"]),
    ];

    for _ in 0..50 {
        let selected = select_action_examples(&actions, 7);
        let texts: HashSet<&str> = selected
            .iter()
            .map(|dialogue| dialogue[0].content.text.as_deref().unwrap())
            .collect();
        assert_eq!(texts.len(), 7);
    }
}

/// The caller's catalogue is observably unchanged by selection.
#[test]
fn test_selection_leaves_input_untouched() {
    let actions = vec![
        action("a", &["a1", "a2"]),
        action("b", &["b1"]),
    ];
    let before = serde_json::to_string(&actions).unwrap();

    for count in [0, 1, 3, 100] {
        let _ = select_action_examples(&actions, count);
    }

    assert_eq!(serde_json::to_string(&actions).unwrap(), before);
}

/// Small counts draw from distinct actions rather than letting one action
/// dominate the early slots.
#[test]
fn test_selection_round_robin_diversity() {
    let actions = vec![
        action("a", &["a1", "a2"]),
        action("b", &["b1", "b2"]),
        action("c", &["c1", "c2"]),
    ];

    for _ in 0..50 {
        let selected = select_action_examples(&actions, 3);
        let origins: HashSet<char> = selected
            .iter()
            .map(|dialogue| {
                dialogue[0]
                    .content
                    .text
                    .as_deref()
                    .unwrap()
                    .chars()
                    .next()
                    .unwrap()
            })
            .collect();
        assert_eq!(origins.len(), 3);
    }
}

/// Scenario from the wave action: both placeholders resolve to generated
/// names and the output carries the leading newline.
#[test]
fn test_wave_scenario() {
    let actions = vec![ActionDefinition {
        name: "wave".to_string(),
        description: "Wave at someone".to_string(),
        similes: None,
        examples: vec![vec![turn("{{user1}}", "hi {{user2}}")]],
    }];

    let names = SequenceNames::new();
    let output = compose_action_examples_with(&actions, 1, &names);
    assert_eq!(output, "\nName1: hi Name2");
}

/// Scenario: two actions with two examples each, count far above
/// availability — the result is capped at four and alternates actions.
#[test]
fn test_exhaustion_scenario() {
    let actions = vec![
        action("a", &["a1", "a2"]),
        action("b", &["b1", "b2"]),
    ];

    let selected = select_action_examples(&actions, 10);
    assert_eq!(selected.len(), 4);

    let origins: Vec<char> = selected
        .iter()
        .map(|dialogue| {
            dialogue[0]
                .content
                .text
                .as_deref()
                .unwrap()
                .chars()
                .next()
                .unwrap()
        })
        .collect();
    assert_eq!(origins, vec!['a', 'b', 'a', 'b']);
}

/// Scenario: zero count yields the empty string regardless of catalogue.
#[test]
fn test_zero_count_scenario() {
    let actions = vec![action("a", &["a1"])];
    assert_eq!(compose_action_examples(&actions, 0), "");
}

/// An empty catalogue short-circuits to the empty string.
#[test]
fn test_empty_catalogue() {
    assert_eq!(compose_action_examples(&[], 5), "");
}

/// Out-of-range and malformed placeholder tokens pass through verbatim.
#[test]
fn test_out_of_range_placeholders_pass_through() {
    let actions = vec![ActionDefinition {
        name: "mention".to_string(),
        description: "Mention everyone".to_string(),
        similes: None,
        examples: vec![vec![turn(
            "{{user1}}",
            "hey {{user5}} {{user6}} {{user0}} {{userX}}",
        )]],
    }];

    let names = SequenceNames::new();
    let output = compose_action_examples_with(&actions, 1, &names);
    assert_eq!(output, "\nName1: hey Name5 {{user6}} {{user0}} {{userX}}");
}

/// Multi-turn dialogues keep turn order and share one name batch, while
/// separate dialogues get fresh batches.
#[test]
fn test_name_batches_are_per_dialogue() {
    let actions = vec![ActionDefinition {
        name: "chat".to_string(),
        description: "Chat back and forth".to_string(),
        similes: None,
        examples: vec![vec![
            turn("{{user1}}", "hello {{user2}}"),
            turn("{{user2}}", "hello back {{user1}}"),
        ]],
    }];

    let names = SequenceNames::new();
    let output = compose_action_examples_with(&actions, 1, &names);
    assert_eq!(output, "\nName1: hello Name2\nName2: hello back Name1");
}

/// Non-empty output always starts with exactly one newline separator.
#[test]
fn test_output_has_leading_newline() {
    let actions = vec![action("a", &["a1", "a2"])];
    let output = compose_action_examples(&actions, 2);

    assert!(output.starts_with('\n'));
    assert!(!output.starts_with("\n\n"));
    assert_eq!(output.lines().count(), 3); // leading separator + two dialogues
}

/// Default name generation substitutes every in-range placeholder.
#[test]
fn test_default_generator_resolves_placeholders() {
    let actions = vec![action("a", &["{{user1}} waves to {{user2}}"])];
    let output = compose_action_examples(&actions, 1);

    assert!(!output.contains("{{user1}}"));
    assert!(!output.contains("{{user2}}"));
}
