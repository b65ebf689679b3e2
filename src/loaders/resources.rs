use log::info;

use super::{read_to_string, LoadError};
use crate::report::{Outcome, StageReport};
use crate::settings::Settings;
use crate::store::Store;
use crate::text::split_tokens;

/// Loads the web resource catalog. Each line: slug, name, url.
pub fn load(store: &mut Store, settings: &Settings) -> Result<StageReport, LoadError> {
    let path = settings.resources_file();
    info!("parsing file {}", path.display());
    let contents = read_to_string(&path)?;

    let mut report = StageReport::new("resources");
    for line in contents.lines() {
        let tokens = split_tokens(line);
        if tokens.is_empty() {
            continue;
        }
        let key = format!("resource {}", tokens[0]);
        if tokens.len() < 3 {
            report.record(key, Outcome::Failed("expected slug, name and url".to_string()));
            continue;
        }
        match store.get_or_create_web_resource(&tokens[0], &tokens[1], &tokens[2]) {
            Ok((_, true)) => report.record(key, Outcome::Created),
            Ok((_, false)) => report.record(key, Outcome::Existing),
            Err(e) => report.record(key, Outcome::Failed(e.to_string())),
        }
    }
    Ok(report)
}
