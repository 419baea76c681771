use crate::config::Strictness;
use crate::error::MergeError;
use crate::model::Record;

/// Parse one delimited blob into records.
///
/// The first line is a header and is always discarded. Each data line is
/// `title,url`; quoting is disabled so the format stays a naive comma
/// split (loosely-formatted exports often contain stray quotes). Lines
/// with extra commas keep only the second field as the URL. Lines with
/// an empty title are skipped. Lines with no second field keep
/// `url = None` in lenient mode and fail in strict mode.
pub fn parse_records(raw: &str, strictness: Strictness) -> Result<Vec<Record>, MergeError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(raw.as_bytes());

    let mut records = Vec::new();

    for row in reader.records() {
        let row = row.map_err(|e| MergeError::Io(e.to_string()))?;

        let title = row.get(0).unwrap_or("").to_string();
        if title.is_empty() {
            continue;
        }

        let url = match row.get(1) {
            Some(url) => Some(url.to_string()),
            None if strictness == Strictness::Strict => {
                let line = row.position().map(|p| p.line() as usize).unwrap_or(0);
                return Err(MergeError::ShortRow {
                    line,
                    content: title,
                });
            }
            None => None,
        };

        records.push(Record { title, url });
    }

    Ok(records)
}
