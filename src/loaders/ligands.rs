use log::info;
use serde::Deserialize;

use super::{parse_yaml_file, LoadError};
use crate::models::ligand::{LigandProperties, NewLigandProperties};
use crate::report::{Outcome, StageReport};
use crate::settings::Settings;
use crate::store::Store;

#[derive(Debug, Deserialize)]
struct LigandEntry {
    name: String,
    canonical: bool,
    #[serde(default)]
    ambiguous_alias: Option<String>,
    #[serde(default)]
    smiles: Option<String>,
    #[serde(default)]
    inchikey: Option<String>,
    #[serde(default)]
    ligand_type: Option<LigandTypeEntry>,
    #[serde(default)]
    weblinks: Vec<WeblinkEntry>,
}

#[derive(Debug, Deserialize)]
struct LigandTypeEntry {
    slug: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct WeblinkEntry {
    index: String,
    resource: String,
}

/// Loads the ligand catalog. The PubChem web resource is a hard dependency
/// of the whole catalog and is checked up front; an unknown resource slug in
/// an entry's weblinks aborts the stage as well.
pub fn load(store: &mut Store, settings: &Settings) -> Result<StageReport, LoadError> {
    let path = settings.ligands_file();
    info!("parsing file {}", path.display());
    let entries: Vec<LigandEntry> = parse_yaml_file(&path)?;

    if store.find_web_resource("pubchem")?.is_none() {
        return Err(LoadError::MissingDependency {
            kind: "web resource",
            key: "pubchem".to_string(),
        });
    }

    let mut report = StageReport::new("ligands");
    for entry in &entries {
        let key = format!("ligand {}", entry.name);
        match load_entry(store, entry, &mut report) {
            Ok(Some(outcome)) => report.record(key, outcome),
            Ok(None) => return Ok(report),
            Err(e) => report.record(key, Outcome::Failed(e.to_string())),
        }
    }
    Ok(report)
}

/// Processes one catalog entry. Returns `None` when the stage must abort
/// (after marking the report), otherwise the entry's outcome.
fn load_entry(
    store: &mut Store,
    entry: &LigandEntry,
    report: &mut StageReport,
) -> Result<Option<Outcome>, LoadError> {
    let ligand_type_id = match &entry.ligand_type {
        Some(lt) => Some(store.get_or_create_ligand_type(&lt.slug, &lt.name)?.0.id),
        None => None,
    };

    // Entries without a determined structure get their own properties row,
    // so the structure can be filled in later without affecting other
    // ligands; an identical structureless ligand must not be duplicated.
    let properties: LigandProperties;
    if entry.smiles.is_none() && entry.inchikey.is_none() {
        if store.ligand_exists_without_structure(
            &entry.name,
            entry.canonical,
            entry.ambiguous_alias.as_deref(),
        )? {
            return Ok(Some(Outcome::Existing));
        }
        properties = store.create_ligand_properties(&NewLigandProperties {
            smiles: None,
            inchikey: None,
            ligand_type_id,
        })?;
    } else {
        properties = store
            .get_or_create_ligand_properties(
                entry.smiles.as_deref(),
                entry.inchikey.as_deref(),
                ligand_type_id,
            )?
            .0;
    }

    for weblink in &entry.weblinks {
        let Some(resource) = store.find_web_resource(&weblink.resource)? else {
            report.abort(
                LoadError::MissingDependency {
                    kind: "web resource",
                    key: weblink.resource.clone(),
                }
                .to_string(),
            );
            return Ok(None);
        };
        let (web_link, _) = store.get_or_create_web_link(resource.id, &weblink.index)?;
        store.link_ligand_property_web_link(properties.id, web_link.id)?;
    }

    let (_, created) = store.get_or_create_ligand(
        &entry.name,
        entry.canonical,
        entry.ambiguous_alias.as_deref(),
        properties.id,
    )?;
    Ok(Some(if created {
        Outcome::Created
    } else {
        Outcome::Existing
    }))
}
