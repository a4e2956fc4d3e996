use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    bst_base::bst_traits::BstParams,
    course::Course,
    course_store::CourseStore,
    error::{CatalogError, Result},
};

const FIELD_SEPARATOR: char = ',';

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Parse one `identifier,title[,prerequisite]*` record.
///
/// Fields are trimmed. Empty prerequisite fields are dropped, so a trailing
/// comma is harmless. A blank line yields `Ok(None)`. `line` is 1-based and
/// only used for error reporting.
pub fn parse_line(raw: &str, line: usize) -> Result<Option<Course>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let mut fields = raw.split(FIELD_SEPARATOR).map(str::trim);

    let identifier = match fields.next() {
        Some(id) if !id.is_empty() => id,
        _ => return Err(CatalogError::MissingIdentifier { line }),
    };
    let title = match fields.next() {
        Some(title) if !title.is_empty() => title,
        _ => {
            return Err(CatalogError::MissingTitle {
                line,
                identifier: identifier.to_string(),
            })
        }
    };
    let prerequisites = fields.filter(|p| !p.is_empty());

    Ok(Some(Course::new(identifier, title, prerequisites)))
}

/// Insert every well-formed record from `reader`. Malformed records are
/// logged and skipped; a read failure aborts the load, keeping whatever was
/// inserted before it. `source` names the input in logs and errors.
pub fn load_from_reader<R, T>(
    reader: R,
    source: &Path,
    store: &mut CourseStore<T>,
) -> Result<LoadReport>
where
    R: BufRead,
    T: BstParams<KeyType = str, ValueType = Course>,
{
    let mut report = LoadReport::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| CatalogError::Read {
            path: source.to_path_buf(),
            source: e,
        })?;

        match parse_line(&line, idx + 1) {
            Ok(Some(course)) => {
                log::debug!("Loading {} from {}", course.identifier, source.display());
                store.insert(course);
                report.loaded += 1;
            }
            Ok(None) => {}
            Err(e) => {
                log::warn!("Skipping record in {}: {}", source.display(), e);
                report.skipped += 1;
            }
        }
    }

    log::info!(
        "Loaded {} courses from {} ({} skipped)",
        report.loaded,
        source.display(),
        report.skipped
    );
    Ok(report)
}

pub fn load_file<T>(path: &Path, store: &mut CourseStore<T>) -> Result<LoadReport>
where
    T: BstParams<KeyType = str, ValueType = Course>,
{
    let file = File::open(path).map_err(|e| CatalogError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    load_from_reader(BufReader::new(file), path, store)
}
