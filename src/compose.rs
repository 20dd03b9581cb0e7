//! Few-shot example composition
//!
//! Assembles example conversations for a dialogue agent's prompt: a
//! selector picks a bounded, diverse subset of whole example dialogues
//! from the action catalogue, and a renderer rewrites them into plain-text
//! transcripts with freshly generated participant names.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::names::{DictionaryNameGenerator, NameGenerator};
use crate::types::{ActionDefinition, ActionExample};

/// Number of placeholder participants available to one example dialogue.
///
/// Substitution covers `{{user1}}` through `{{user5}}`; tokens with any
/// other index pass through verbatim. This is a defined limit, not an
/// error.
const EXAMPLE_NAME_COUNT: usize = 5;

/// Select up to `count` whole example dialogues across the given actions.
///
/// Selection is a stratified round-robin without replacement: one working
/// pool is built per action that has examples, and a cursor walks the
/// active pools in order, drawing one dialogue uniformly at random from
/// each visited pool. A pool leaves the rotation the moment it is
/// exhausted, so when `count` exceeds the total number of examples the
/// loop terminates early and fewer dialogues are returned.
///
/// The caller's catalogue is never mutated; pools are per-call copies
/// discarded on return. Result order is selection order, interleaved
/// across actions by construction.
pub fn select_action_examples(
    actions: &[ActionDefinition],
    count: usize,
) -> Vec<Vec<ActionExample>> {
    let mut pools: Vec<Vec<Vec<ActionExample>>> = actions
        .iter()
        .filter(|action| !action.examples.is_empty())
        .map(|action| action.examples.clone())
        .collect();

    let mut rng = rand::thread_rng();
    let mut selected: Vec<Vec<ActionExample>> = Vec::new();
    let mut i = 0;

    while i < count && !pools.is_empty() {
        let pool_index = i % pools.len();
        let pool = &mut pools[pool_index];

        if !pool.is_empty() {
            // Uniform draw with O(1) removal.
            let example = pool.swap_remove(rng.gen_range(0..pool.len()));
            trace!(pool = pool_index, remaining = pool.len(), "drew example");
            selected.push(example);
            i += 1;
        }
        // An exhausted pool leaves the rotation immediately. If the pool
        // was already empty when inspected, the cursor did not advance and
        // the slot is retried against the updated rotation.
        if pools[pool_index].is_empty() {
            pools.remove(pool_index);
        }
    }

    selected
}

/// Render selected example dialogues as a plain-text transcript block.
///
/// Each dialogue gets its own batch of five freshly generated participant
/// names, used only for that dialogue. Turns render as
/// `"{speaker}: {text}"` with `" ({action})"` appended when an action
/// annotation is present, then placeholder tokens are substituted.
///
/// Returns the empty string for an empty selection; otherwise the joined
/// blocks are prefixed with one newline so the output composes cleanly
/// when appended to a preceding prompt section.
pub fn render_action_examples(
    examples: &[Vec<ActionExample>],
    names: &dyn NameGenerator,
) -> String {
    if examples.is_empty() {
        return String::new();
    }

    let blocks: Vec<String> = examples
        .iter()
        .map(|example| render_example(example, names))
        .collect();

    format!("\n{}", blocks.join("\n"))
}

/// Render one dialogue with a fresh batch of participant names.
fn render_example(example: &[ActionExample], names: &dyn NameGenerator) -> String {
    let participants: Vec<String> = (0..EXAMPLE_NAME_COUNT)
        .map(|_| names.generate_name())
        .collect();

    example
        .iter()
        .map(|turn| {
            let text = turn.content.text.as_deref().unwrap_or_default();
            let mut line = match turn.content.action.as_deref() {
                Some(action) if !action.is_empty() => {
                    format!("{}: {} ({})", turn.name, text, action)
                }
                _ => format!("{}: {}", turn.name, text),
            };
            for (index, name) in participants.iter().enumerate() {
                line = line.replace(&format!("{{{{user{}}}}}", index + 1), name);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compose a set of example conversations from the provided actions.
///
/// Selects up to `count` example dialogues across `actions` and formats
/// them with generated names from the default dictionary generator.
///
/// # Arguments
/// * `actions` - Action catalogue to draw examples from
/// * `count` - Number of example dialogues to select
///
/// # Returns
/// A string containing formatted example conversations, or the empty
/// string when `actions` is empty
pub fn compose_action_examples(actions: &[ActionDefinition], count: usize) -> String {
    compose_action_examples_with(actions, count, &DictionaryNameGenerator::default())
}

/// Compose example conversations with an explicit name generator.
pub fn compose_action_examples_with(
    actions: &[ActionDefinition],
    count: usize,
    names: &dyn NameGenerator,
) -> String {
    if actions.is_empty() {
        return String::new();
    }

    let selected = select_action_examples(actions, count);
    debug!(
        requested = count,
        selected = selected.len(),
        "composed action examples"
    );
    render_action_examples(&selected, names)
}

/// Format the names of the provided actions into a comma-separated string.
///
/// The listing order is a uniform random permutation; the input slice is
/// left untouched.
pub fn format_action_names(actions: &[ActionDefinition]) -> String {
    let mut shuffled: Vec<&ActionDefinition> = actions.iter().collect();
    shuffled.shuffle(&mut rand::thread_rng());

    shuffled
        .iter()
        .map(|action| action.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format the provided actions into a detailed listing of
/// `"name: description"` entries, separated by commas and newlines.
///
/// Same uniform shuffle as [`format_action_names`].
pub fn format_actions(actions: &[ActionDefinition]) -> String {
    let mut shuffled: Vec<&ActionDefinition> = actions.iter().collect();
    shuffled.shuffle(&mut rand::thread_rng());

    shuffled
        .iter()
        .map(|action| format!("{}: {}", action.name, action.description))
        .collect::<Vec<_>>()
        .join(",\n")
}
