use log::info;
use serde::Deserialize;

use super::{parse_yaml_file, LoadError};
use crate::models::common::NewPublication;
use crate::report::{Outcome, StageReport};
use crate::settings::Settings;
use crate::store::Store;

#[derive(Debug, Deserialize)]
struct PublicationEntry {
    title: String,
    authors: String,
    year: i32,
    reference: String,
    journal_slug: String,
    journal_name: String,
    weblink_resource: String,
    weblink_index: String,
}

/// Loads the publication catalog. Every entry references a web resource by
/// slug; a missing resource is a hard dependency failure that aborts the
/// stage, since every remaining record needs one too.
pub fn load(store: &mut Store, settings: &Settings) -> Result<StageReport, LoadError> {
    let path = settings.publications_file();
    info!("parsing file {}", path.display());
    let entries: Vec<PublicationEntry> = parse_yaml_file(&path)?;

    let mut report = StageReport::new("publications");
    for entry in &entries {
        let key = format!("publication {}", entry.weblink_index);

        let resource = match store.find_web_resource(&entry.weblink_resource) {
            Ok(Some(resource)) => resource,
            Ok(None) => {
                report.abort(
                    LoadError::MissingDependency {
                        kind: "web resource",
                        key: entry.weblink_resource.clone(),
                    }
                    .to_string(),
                );
                return Ok(report);
            }
            Err(e) => {
                report.record(key, Outcome::Failed(e.to_string()));
                continue;
            }
        };

        let web_link = match store.get_or_create_web_link(resource.id, &entry.weblink_index) {
            Ok((web_link, _)) => web_link,
            Err(e) => {
                report.record(key, Outcome::Failed(e.to_string()));
                continue;
            }
        };
        let journal = match store
            .get_or_create_publication_journal(&entry.journal_slug, &entry.journal_name)
        {
            Ok((journal, _)) => journal,
            Err(e) => {
                report.record(key, Outcome::Failed(e.to_string()));
                continue;
            }
        };
        let result = store.get_or_create_publication(&NewPublication {
            title: &entry.title,
            authors: &entry.authors,
            year: entry.year,
            reference: &entry.reference,
            journal_id: journal.id,
            web_link_id: web_link.id,
        });
        match result {
            Ok((_, true)) => report.record(key, Outcome::Created),
            Ok((_, false)) => report.record(key, Outcome::Existing),
            Err(e) => report.record(key, Outcome::Failed(e.to_string())),
        }
    }
    info!("created {} publications", report.created());
    Ok(report)
}
