//! Name generation for anonymizing example dialogues
//!
//! The composition engine only depends on the [`NameGenerator`] trait; the
//! corpus and draw algorithm behind it are replaceable.

use rand::seq::SliceRandom;
use thiserror::Error;

/// Built-in first-name corpus used by the default generator.
const DEFAULT_NAMES: &[&str] = &[
    "Aaliyah", "Adam", "Aisha", "Alejandro", "Amara", "Amir", "Ana", "Andre",
    "Anika", "Arjun", "Astrid", "Benjamin", "Bianca", "Carlos", "Chloe",
    "Daniel", "Dariya", "Diego", "Elena", "Elias", "Emeka", "Emma", "Ethan",
    "Farah", "Felix", "Freya", "Gabriel", "Hana", "Henry", "Imani", "Ines",
    "Isaac", "Ivan", "Jasmine", "Jonas", "Kai", "Kenji", "Laila", "Leo",
    "Lucia", "Malik", "Maren", "Mateo", "Maya", "Mei", "Mikhail", "Nadia",
    "Naomi", "Nikolai", "Nina", "Omar", "Priya", "Rafael", "Rosa", "Sana",
    "Santiago", "Sofia", "Tariq", "Thea", "Tomas", "Valentina", "Wei",
    "Yara", "Zoe",
];

/// Error type for name generation
#[derive(Error, Debug)]
pub enum NameError {
    /// The generator was constructed over an empty corpus
    #[error("Name corpus is empty")]
    EmptyCorpus,
}

/// Capability producing random human-readable name strings
///
/// Distinct calls are independent draws; the renderer requests five names
/// per example dialogue and never reuses a batch across dialogues.
pub trait NameGenerator: Send + Sync {
    /// Generate one display name
    fn generate_name(&self) -> String;
}

/// Default [`NameGenerator`] drawing uniformly from a name dictionary
pub struct DictionaryNameGenerator {
    names: Vec<String>,
}

impl DictionaryNameGenerator {
    /// Create a generator over a custom corpus
    ///
    /// # Arguments
    /// * `names` - Non-empty list of candidate display names
    ///
    /// # Returns
    /// A Result with `NameError::EmptyCorpus` if `names` is empty
    pub fn new(names: Vec<String>) -> Result<Self, NameError> {
        if names.is_empty() {
            return Err(NameError::EmptyCorpus);
        }
        Ok(DictionaryNameGenerator { names })
    }
}

impl Default for DictionaryNameGenerator {
    fn default() -> Self {
        DictionaryNameGenerator {
            names: DEFAULT_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl NameGenerator for DictionaryNameGenerator {
    fn generate_name(&self) -> String {
        self.names
            .choose(&mut rand::thread_rng())
            .cloned()
            .expect("corpus is non-empty by construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_generator_draws_from_corpus() {
        let generator = DictionaryNameGenerator::default();
        for _ in 0..20 {
            let name = generator.generate_name();
            assert!(DEFAULT_NAMES.contains(&name.as_str()));
        }
    }

    #[test]
    fn test_custom_corpus() {
        let generator =
            DictionaryNameGenerator::new(vec!["Ada".to_string()]).unwrap();
        assert_eq!(generator.generate_name(), "Ada");
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let result = DictionaryNameGenerator::new(vec![]);
        assert!(matches!(result, Err(NameError::EmptyCorpus)));
    }
}
