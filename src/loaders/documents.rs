//! Documentation, news and page catalogs: each record is a `.yaml` metadata
//! file paired with a sibling `.html` file whose contents are stored
//! verbatim. The HTML is (re)read on every run, also for records that
//! already exist.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::{file_key, parse_yaml_file, yaml_files, LoadError};
use crate::report::{Outcome, StageReport};
use crate::settings::Settings;
use crate::store::Store;

#[derive(Debug, Deserialize)]
struct DocumentationEntry {
    title: String,
    description: String,
    image: String,
}

#[derive(Debug, Deserialize)]
struct NewsEntry {
    image: String,
    date: String,
}

#[derive(Debug, Deserialize)]
struct PageEntry {
    title: String,
}

fn sibling_html(path: &Path) -> Result<String, LoadError> {
    let html_path = path.with_extension("html");
    fs::read_to_string(&html_path).map_err(|source| LoadError::Io {
        path: html_path,
        source,
    })
}

macro_rules! try_record {
    ($report:expr, $key:expr, $result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => {
                $report.record($key, Outcome::Failed(e.to_string()));
                continue;
            }
        }
    };
}

pub fn load_documentation(store: &mut Store, settings: &Settings) -> Result<StageReport, LoadError> {
    let mut report = StageReport::new("documentation");
    for path in yaml_files(&settings.documentation_dir())? {
        let key = format!("documentation {}", file_key(&path));
        let entry: DocumentationEntry =
            try_record!(report, key, parse_yaml_file(&path));
        let html = try_record!(report, key, sibling_html(&path));
        let (doc, created) = try_record!(
            report,
            key,
            store.get_or_create_documentation(&entry.title, &entry.description, &entry.image)
        );
        try_record!(report, key, store.set_documentation_html(doc.id, &html));
        report.record(
            key,
            if created {
                Outcome::Created
            } else {
                Outcome::Existing
            },
        );
    }
    Ok(report)
}

pub fn load_news(store: &mut Store, settings: &Settings) -> Result<StageReport, LoadError> {
    let mut report = StageReport::new("news");
    for path in yaml_files(&settings.news_dir())? {
        let key = format!("news {}", file_key(&path));
        let entry: NewsEntry = try_record!(report, key, parse_yaml_file(&path));
        let html = try_record!(report, key, sibling_html(&path));
        let (news, created) =
            try_record!(report, key, store.get_or_create_news(&entry.image, &entry.date));
        try_record!(report, key, store.set_news_html(news.id, &html));
        report.record(
            key,
            if created {
                Outcome::Created
            } else {
                Outcome::Existing
            },
        );
    }
    Ok(report)
}

pub fn load_pages(store: &mut Store, settings: &Settings) -> Result<StageReport, LoadError> {
    let mut report = StageReport::new("pages");
    for path in yaml_files(&settings.pages_dir())? {
        let key = format!("page {}", file_key(&path));
        let entry: PageEntry = try_record!(report, key, parse_yaml_file(&path));
        let html = try_record!(report, key, sibling_html(&path));
        let (page, created) = try_record!(report, key, store.get_or_create_page(&entry.title));
        try_record!(report, key, store.set_page_html(page.id, &html));
        report.record(
            key,
            if created {
                Outcome::Created
            } else {
                Outcome::Existing
            },
        );
    }
    Ok(report)
}
