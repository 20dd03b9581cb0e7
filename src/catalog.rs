//! Action catalogue parsing and validation
//!
//! The composition engine itself is total over typed inputs; this module
//! is the fail-fast boundary for catalogues that arrive as JSON.

use crate::types::ActionDefinition;
use anyhow::{Context, Result};

/// Parse an action catalogue from a JSON string
///
/// # Arguments
/// * `json` - JSON array of action definitions
///
/// # Returns
/// A Result containing the parsed actions or an error
///
/// # Example
/// ```rust
/// use prompt_composer::parse_actions;
///
/// let json = r#"[{"name": "wave", "description": "Wave at someone"}]"#;
/// let actions = parse_actions(json).unwrap();
/// assert_eq!(actions[0].name, "wave");
/// ```
pub fn parse_actions(json: &str) -> Result<Vec<ActionDefinition>> {
    let actions: Vec<ActionDefinition> =
        serde_json::from_str(json).context("Failed to parse action catalogue JSON")?;
    for action in &actions {
        validate_action(action).context("Action validation failed")?;
    }
    Ok(actions)
}

/// Validate a single action definition
///
/// # Arguments
/// * `action` - The action to validate
///
/// # Returns
/// A Result with validation errors if any
pub fn validate_action(action: &ActionDefinition) -> Result<()> {
    if action.name.is_empty() {
        anyhow::bail!("Action name is required");
    }

    if action.description.is_empty() {
        anyhow::bail!("Action '{}' has no description", action.name);
    }

    for example in &action.examples {
        if example.is_empty() {
            anyhow::bail!("Action '{}' has an empty example dialogue", action.name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions_basic() {
        let json = r#"[
            {
                "name": "wave",
                "description": "Wave at someone",
                "examples": [
                    [{"name": "{{user1}}", "content": {"text": "hi {{user2}}"}}]
                ]
            }
        ]"#;

        let actions = parse_actions(json).unwrap();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].examples.len(), 1);
    }

    #[test]
    fn test_parse_actions_malformed_json() {
        assert!(parse_actions("not json").is_err());
    }

    #[test]
    fn test_validate_action_empty_name() {
        let json = r#"[{"name": "", "description": "nameless"}]"#;
        assert!(parse_actions(json).is_err());
    }

    #[test]
    fn test_validate_action_empty_description() {
        let json = r#"[{"name": "wave", "description": ""}]"#;
        assert!(parse_actions(json).is_err());
    }

    #[test]
    fn test_validate_action_empty_example_dialogue() {
        let json = r#"[
            {"name": "wave", "description": "Wave", "examples": [[]]}
        ]"#;
        assert!(parse_actions(json).is_err());
    }
}
