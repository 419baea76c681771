use crate::model::Record;

/// Comparison key for a record: the title alone, or in turbo mode the
/// title with a slug-normalized form of the URL appended. Records with
/// no URL fall back to the title in either mode.
pub fn match_key(record: &Record, turbo: bool) -> String {
    match (turbo, record.url.as_deref()) {
        (true, Some(url)) => format!("{}{}", record.title, normalize_slug(url)),
        _ => record.title.clone(),
    }
}

/// Flatten a URL into slug words: hyphens become spaces, then
/// underscores become spaces, then each run of slashes becomes a single
/// space.
pub fn normalize_slug(url: &str) -> String {
    let dehyphenated = url.replace('-', " ").replace('_', " ");

    let mut out = String::with_capacity(dehyphenated.len());
    let mut in_slash_run = false;
    for c in dehyphenated.chars() {
        if c == '/' {
            if !in_slash_run {
                out.push(' ');
                in_slash_run = true;
            }
        } else {
            out.push(c);
            in_slash_run = false;
        }
    }
    out
}
