use log::info;

use super::{read_to_string, LoadError};
use crate::report::{Outcome, StageReport};
use crate::settings::Settings;
use crate::store::Store;
use crate::text::split_tokens;

/// Loads the protein segment catalog. Each line: slug, category, name.
pub fn load_segments(store: &mut Store, settings: &Settings) -> Result<StageReport, LoadError> {
    let path = settings.segments_file();
    info!("parsing file {}", path.display());
    let contents = read_to_string(&path)?;

    let mut report = StageReport::new("protein-segments");
    for line in contents.lines() {
        let tokens = split_tokens(line);
        if tokens.is_empty() {
            continue;
        }
        let key = format!("protein segment {}", tokens[0]);
        if tokens.len() < 3 {
            report.record(key, Outcome::Failed("expected slug, category and name".to_string()));
            continue;
        }
        match store.get_or_create_protein_segment(&tokens[0], &tokens[2], &tokens[1]) {
            Ok((_, true)) => report.record(key, Outcome::Created),
            Ok((_, false)) => report.record(key, Outcome::Existing),
            Err(e) => report.record(key, Outcome::Failed(e.to_string())),
        }
    }
    Ok(report)
}

/// Loads the residue numbering scheme catalog. Each line: slug, short name,
/// name, and optionally the slug of a parent scheme, which must already
/// exist (schemes are listed parents-first in the source file).
pub fn load_numbering_schemes(
    store: &mut Store,
    settings: &Settings,
) -> Result<StageReport, LoadError> {
    let path = settings.numbering_schemes_file();
    info!("parsing file {}", path.display());
    let contents = read_to_string(&path)?;

    let mut report = StageReport::new("numbering-schemes");
    for line in contents.lines() {
        let tokens = split_tokens(line);
        if tokens.is_empty() {
            continue;
        }
        let key = format!("numbering scheme {}", tokens[0]);
        if tokens.len() < 3 {
            report.record(key, Outcome::Failed("expected slug, short name and name".to_string()));
            continue;
        }

        let parent_id = match tokens.get(3) {
            Some(parent_slug) => match store.find_numbering_scheme(parent_slug) {
                Ok(Some(parent)) => Some(parent.id),
                Ok(None) => {
                    report.record(
                        key,
                        Outcome::Failed(format!("parent scheme {} does not exist", parent_slug)),
                    );
                    continue;
                }
                Err(e) => {
                    report.record(key, Outcome::Failed(e.to_string()));
                    continue;
                }
            },
            None => None,
        };

        match store.get_or_create_numbering_scheme(&tokens[0], &tokens[1], &tokens[2], parent_id) {
            Ok((_, true)) => report.record(key, Outcome::Created),
            Ok((_, false)) => report.record(key, Outcome::Existing),
            Err(e) => report.record(key, Outcome::Failed(e.to_string())),
        }
    }
    Ok(report)
}
