//! Structural anomaly catalog: one YAML document per file describing an
//! anomaly (type + generic number) and its rule sets. A rule set is either
//! exclusive (all rules must hold) or not (any single rule suffices); the
//! evaluation of rules against actual structures happens elsewhere, this
//! loader only materializes them.

use log::info;
use serde::Deserialize;

use super::{file_key, parse_yaml_file, yaml_files, LoadError};
use crate::models::protein::NewProteinAnomalyRule;
use crate::report::{Outcome, StageReport};
use crate::settings::Settings;
use crate::store::Store;
use crate::text::title_case;

#[derive(Debug, Deserialize)]
struct AnomalyFile {
    #[serde(default)]
    anomaly_type: Option<String>,
    #[serde(default)]
    protein_segment: Option<String>,
    #[serde(default)]
    generic_number: Option<String>,
    #[serde(default)]
    rule_sets: Option<Vec<RuleSetEntry>>,
}

#[derive(Debug, Deserialize)]
struct RuleSetEntry {
    #[serde(default)]
    exclusive: bool,
    #[serde(default)]
    rules: Vec<RuleEntry>,
}

#[derive(Debug, Deserialize)]
struct RuleEntry {
    #[serde(default)]
    generic_number: Option<String>,
    #[serde(default)]
    amino_acid: Option<String>,
    #[serde(default)]
    negative: bool,
}

pub fn load(store: &mut Store, settings: &Settings) -> Result<StageReport, LoadError> {
    // Every anomaly's generic numbers live under the default scheme; without
    // it no file can be processed.
    let scheme = store
        .find_numbering_scheme(&settings.default_numbering_scheme)?
        .ok_or_else(|| LoadError::MissingDependency {
            kind: "numbering scheme",
            key: settings.default_numbering_scheme.clone(),
        })?;

    let mut report = StageReport::new("anomalies");
    for path in yaml_files(&settings.anomalies_dir())? {
        let key = format!("anomaly file {}", file_key(&path));
        info!("parsing file {}", path.display());
        let file: AnomalyFile = match parse_yaml_file(&path) {
            Ok(file) => file,
            Err(e) => {
                report.record(key, Outcome::Failed(e.to_string()));
                continue;
            }
        };
        match load_file(store, &file, scheme.id, &key, &mut report) {
            Ok(Some(outcome)) => report.record(key, outcome),
            Ok(None) => {}
            Err(e) => report.record(key, Outcome::Failed(e.to_string())),
        }
    }
    Ok(report)
}

/// Processes one anomaly file. Returns the file outcome, or `None` when the
/// individual outcomes were already recorded on the report.
fn load_file(
    store: &mut Store,
    file: &AnomalyFile,
    scheme_id: i32,
    key: &str,
    report: &mut StageReport,
) -> Result<Option<Outcome>, LoadError> {
    let Some(type_slug) = file.anomaly_type.as_deref().filter(|s| !s.is_empty()) else {
        return Ok(Some(Outcome::Skipped("anomaly type not specified".to_string())));
    };
    let Some(segment_slug) = file.protein_segment.as_deref().filter(|s| !s.is_empty()) else {
        return Ok(Some(Outcome::Skipped("protein segment not specified".to_string())));
    };
    let Some(label) = file.generic_number.as_deref().filter(|s| !s.is_empty()) else {
        return Ok(Some(Outcome::Skipped("generic number not specified".to_string())));
    };

    let Some(segment) = store.find_protein_segment(segment_slug)? else {
        return Ok(Some(Outcome::Skipped(format!(
            "protein segment {} not found",
            segment_slug
        ))));
    };

    let (anomaly_type, _) =
        store.get_or_create_protein_anomaly_type(type_slug, &title_case(type_slug))?;
    let (generic_number, _) =
        store.get_or_create_generic_number(label, scheme_id, Some(segment.id))?;
    let (anomaly, created) =
        store.get_or_create_protein_anomaly(anomaly_type.id, generic_number.id)?;

    let Some(rule_sets) = file.rule_sets.as_ref().filter(|rs| !rs.is_empty()) else {
        return Ok(Some(Outcome::Skipped("no rule sets specified".to_string())));
    };

    // Rule sets have no natural key of their own; they are materialized
    // together with their anomaly and left alone on later runs.
    if !created {
        return Ok(Some(Outcome::Existing));
    }

    for (set_index, rule_set) in rule_sets.iter().enumerate() {
        if rule_set.rules.is_empty() {
            continue;
        }
        let created_set = store.create_protein_anomaly_rule_set(anomaly.id, rule_set.exclusive)?;
        for (rule_index, rule) in rule_set.rules.iter().enumerate() {
            let (Some(rule_label), Some(amino_acid)) = (
                rule.generic_number.as_deref().filter(|s| !s.is_empty()),
                rule.amino_acid.as_deref().filter(|s| !s.is_empty()),
            ) else {
                report.record(
                    format!("rule {}.{} in {}", set_index + 1, rule_index + 1, key),
                    Outcome::Failed("missing generic number or amino acid".to_string()),
                );
                continue;
            };
            let (rule_number, _) =
                store.get_or_create_generic_number(rule_label, scheme_id, Some(segment.id))?;
            store.create_protein_anomaly_rule(&NewProteinAnomalyRule {
                rule_set_id: created_set.id,
                generic_number_id: rule_number.id,
                amino_acid,
                negative: rule.negative,
            })?;
        }
    }

    Ok(Some(if created {
        Outcome::Created
    } else {
        Outcome::Existing
    }))
}
