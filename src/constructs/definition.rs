//! The construct definition file format and its derived lookup structures.

use regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DefinitionError {
    #[error("Regex pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Malformed mutation {0}, expected <wild-type><position><mutant>")]
    Mutation(String),
}

/// One construct definition: a parent protein plus the edits applied to it.
#[derive(Debug, Deserialize)]
pub struct ConstructDefinition {
    #[serde(default)]
    pub protein: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Inclusive `[start, end]` position ranges removed from the parent.
    #[serde(default)]
    pub truncations: Vec<[i32; 2]>,
    /// Point mutations as `<wild-type><position><mutant>` tokens, e.g. `A123V`.
    #[serde(default)]
    pub mutations: Vec<String>,
    #[serde(default)]
    pub fusion_proteins: Vec<FusionDefinition>,
}

/// A foreign sequence inserted between two parent positions.
#[derive(Debug, Clone, Deserialize)]
pub struct FusionDefinition {
    pub name: String,
    pub sequence: String,
    pub positions: [i32; 2],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub wild_type: String,
    pub position: i32,
    pub mutant: String,
    /// The original token, kept for error messages.
    pub token: String,
}

/// Parses mutation tokens into a position-keyed map. A duplicate position
/// keeps the last token.
pub fn parse_mutations(tokens: &[String]) -> Result<HashMap<i32, Mutation>, DefinitionError> {
    let pattern = Regex::new(r"^(?P<wild_type>[A-Z])(?P<position>\d+)(?P<mutant>[A-Z])$")?;

    let mut mutations = HashMap::new();
    for token in tokens {
        let caps = pattern
            .captures(token)
            .ok_or_else(|| DefinitionError::Mutation(token.clone()))?;
        let position: i32 = caps["position"]
            .parse()
            .map_err(|_| DefinitionError::Mutation(token.clone()))?;
        mutations.insert(
            position,
            Mutation {
                wild_type: caps["wild_type"].to_string(),
                position,
                mutant: caps["mutant"].to_string(),
                token: token.clone(),
            },
        );
    }
    Ok(mutations)
}

/// Expands inclusive truncation ranges into the set of excluded positions.
pub fn expand_truncations(ranges: &[[i32; 2]]) -> BTreeSet<i32> {
    let mut positions = BTreeSet::new();
    for range in ranges {
        for position in range[0]..=range[1] {
            positions.insert(position);
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mutation_tokens() {
        let mutations =
            parse_mutations(&["A123V".to_string(), "G56W".to_string()]).unwrap();
        assert_eq!(mutations.len(), 2);
        let m = &mutations[&123];
        assert_eq!(m.wild_type, "A");
        assert_eq!(m.mutant, "V");
        assert_eq!(m.token, "A123V");
        assert_eq!(mutations[&56].mutant, "W");
    }

    #[test]
    fn rejects_malformed_mutation_tokens() {
        for token in ["a123V", "A123", "123V", "A12 3V", ""] {
            let result = parse_mutations(&[token.to_string()]);
            assert!(
                matches!(result, Err(DefinitionError::Mutation(_))),
                "token {:?} should be rejected",
                token
            );
        }
    }

    #[test]
    fn duplicate_mutation_position_keeps_last_token() {
        let mutations =
            parse_mutations(&["A5V".to_string(), "A5W".to_string()]).unwrap();
        assert_eq!(mutations.len(), 1);
        assert_eq!(mutations[&5].mutant, "W");
    }

    #[test]
    fn expands_inclusive_truncation_ranges() {
        let positions = expand_truncations(&[[1, 3], [7, 7]]);
        assert_eq!(positions.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 7]);
    }

    #[test]
    fn overlapping_truncation_ranges_merge() {
        let positions = expand_truncations(&[[1, 5], [4, 6]]);
        assert_eq!(positions.len(), 6);
    }

    #[test]
    fn deserializes_definition_with_defaults() {
        let definition: ConstructDefinition = serde_yaml::from_str(
            "protein: adrb2_human\nname: Test construct\n",
        )
        .unwrap();
        assert_eq!(definition.protein.as_deref(), Some("adrb2_human"));
        assert!(definition.truncations.is_empty());
        assert!(definition.mutations.is_empty());
        assert!(definition.fusion_proteins.is_empty());
    }

    #[test]
    fn deserializes_fusion_entries() {
        let definition: ConstructDefinition = serde_yaml::from_str(
            "protein: adrb2_human\n\
             name: Fusion construct\n\
             truncations:\n- [1, 28]\n\
             mutations:\n- M96T\n\
             fusion_proteins:\n\
             - name: T4 Lysozyme\n  sequence: MNIFEMLRID\n  positions: [231, 262]\n",
        )
        .unwrap();
        assert_eq!(definition.truncations, vec![[1, 28]]);
        let fusion = &definition.fusion_proteins[0];
        assert_eq!(fusion.name, "T4 Lysozyme");
        assert_eq!(fusion.positions, [231, 262]);
    }
}
