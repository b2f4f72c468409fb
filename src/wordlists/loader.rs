//! Word list loading utilities
//!
//! Dictionary files are tab-separated: `display<TAB>kind[<TAB>definition]`,
//! where `kind` is `s` for solution words and `a` for guess-only words.
//! Blank lines and lines starting with `#` are skipped.

use super::DictionaryEntry;
use std::fs;
use std::io;
use std::path::Path;

/// Load dictionary entries from a TSV file
///
/// Malformed lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letrix::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/words_pt.tsv").unwrap();
/// println!("Loaded {} words", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<DictionaryEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_entries(&content))
}

/// Parse TSV dictionary content
#[must_use]
pub fn parse_entries(content: &str) -> Vec<DictionaryEntry> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<DictionaryEntry> {
    let mut fields = line.split('\t');
    let display = fields.next()?.trim();
    if display.is_empty() || !display.chars().all(char::is_alphabetic) {
        return None;
    }
    let is_solution = match fields.next().map(str::trim) {
        Some("s") => true,
        Some("a") | None => false,
        Some(_) => return None,
    };
    Some(DictionaryEntry::new(display, is_solution, fields.next()))
}

/// Convert an embedded table to dictionary entries
#[must_use]
pub fn entries_from_slice(slice: &[(&str, bool, Option<&str>)]) -> Vec<DictionaryEntry> {
    slice
        .iter()
        .map(|&(display, is_solution, definition)| {
            DictionaryEntry::new(display, is_solution, definition)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_entries_reads_kinds_and_definitions() {
        let content = "# header\nnação\ts\tpaís\narroz\ta\n\ntermo\n";
        let entries = parse_entries(content);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].normalized, "nacao");
        assert_eq!(entries[0].display, "nação");
        assert!(entries[0].is_solution);
        assert_eq!(entries[0].definition.as_deref(), Some("país"));
        assert!(!entries[1].is_solution);
        assert!(!entries[2].is_solution);
    }

    #[test]
    fn parse_entries_skips_invalid() {
        let content = "cran3\ts\nbolsa\tx\nbo lsa\ts\nvalid\ts\n";
        let entries = parse_entries(content);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].normalized, "valid");
    }

    #[test]
    fn entries_from_slice_converts_all() {
        let entries = entries_from_slice(&[("Ética", true, None), ("plena", false, Some(" "))]);
        assert_eq!(entries[0].normalized, "etica");
        assert_eq!(entries[1].definition, None);
    }

    #[test]
    fn load_from_file_reads_tsv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.tsv");
        fs::write(&path, "termo\ts\nmundo\ta\n").unwrap();

        let entries = load_from_file(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(load_from_file(dir.path().join("missing.tsv")).is_err());
    }
}
