//! Seed file loading. A seed file holds one `name,score` record per line with
//! no header and no quoting. Malformed lines never abort a load; they come
//! back as diagnostics so the caller can report them.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::Player;

/// Failures that stop a seed file from being read at all.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("seed file {} does not exist", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to open seed file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read seed file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// A skipped line, with enough context to point the user at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number within the seed file.
    pub line: u64,
    pub content: String,
    pub reason: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "skipping line {} (\"{}\"): {}",
            self.line, self.content, self.reason
        )
    }
}

/// Result of a load: the players that parsed plus every skipped line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub players: Vec<Player>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Open `path` and parse every record in it. The file is closed before this
/// returns.
pub fn load_players(path: &Path) -> Result<LoadReport, LoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Open {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let report = parse_players(file).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        players = report.players.len(),
        skipped = report.diagnostics.len(),
        "seed file loaded"
    );
    Ok(report)
}

/// Parse seed records from any reader. Only I/O faults are returned as
/// errors.
pub fn parse_players<R: Read>(input: R) -> Result<LoadReport, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::None)
        .from_reader(input);

    let mut report = LoadReport::default();
    let mut raw = ByteRecord::new();
    while reader.read_byte_record(&mut raw)? {
        let line = raw.position().map(|pos| pos.line()).unwrap_or_default();

        if raw.len() == 1 && raw[0].iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        match parse_record(&raw) {
            Ok(player) => report.players.push(player),
            Err(reason) => {
                let diagnostic = Diagnostic {
                    line,
                    content: raw_content(&raw),
                    reason,
                };
                debug!(line, content = %diagnostic.content, "malformed seed line");
                report.diagnostics.push(diagnostic);
            }
        }
    }

    Ok(report)
}

fn parse_record(raw: &ByteRecord) -> Result<Player, String> {
    if raw.len() != 2 {
        return Err(format!("expected 2 fields, found {}", raw.len()));
    }
    let record = StringRecord::from_byte_record(raw.clone())
        .map_err(|_| "line is not valid UTF-8".to_string())?;

    let name = record[0].trim();
    if name.is_empty() {
        return Err("name is empty".to_string());
    }
    let score_raw = record[1].trim();
    let score = score_raw
        .parse::<i64>()
        .map_err(|_| format!("score `{score_raw}` is not an integer"))?;

    Ok(Player::new(name, score))
}

/// Rebuild the line text from its untrimmed fields. With quoting off this is
/// the line exactly as written, minus its terminator.
fn raw_content(raw: &ByteRecord) -> String {
    raw.iter()
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn skips_malformed_lines_with_a_diagnostic() {
        let report = parse_players("Alice,10\nBob,20\nEve\n".as_bytes()).unwrap();

        assert_eq!(
            report.players,
            vec![Player::new("Alice", 10), Player::new("Bob", 20)]
        );
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].line, 3);
        assert_eq!(report.diagnostics[0].content, "Eve");
    }

    #[test]
    fn trims_whitespace_around_fields() {
        let report = parse_players("  Alice  ,  -7 \r\n".as_bytes()).unwrap();
        assert_eq!(report.players, vec![Player::new("Alice", -7)]);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn rejects_non_integer_scores_and_extra_fields() {
        let report = parse_players("Bob,ten\nCarl,1,2\nDana,3\n".as_bytes()).unwrap();

        assert_eq!(report.players, vec![Player::new("Dana", 3)]);
        let lines: Vec<_> = report.diagnostics.iter().map(|d| d.line).collect();
        assert_eq!(lines, [1, 2]);
        assert_eq!(report.diagnostics[1].content, "Carl,1,2");
        assert!(report.diagnostics[0].reason.contains("ten"));
    }

    #[test]
    fn diagnostics_keep_the_line_as_written() {
        let report = parse_players("  Eve  \nBob , x ,\n".as_bytes()).unwrap();

        assert!(report.players.is_empty());
        let contents: Vec<_> = report.diagnostics.iter().map(|d| d.content.as_str()).collect();
        assert_eq!(contents, ["  Eve  ", "Bob , x ,"]);
    }

    #[test]
    fn empty_names_are_malformed() {
        let report = parse_players("  Eve  \n,5\n   ,6\nAlice,1\n".as_bytes()).unwrap();

        assert_eq!(report.players, vec![Player::new("Alice", 1)]);
        assert_eq!(report.diagnostics.len(), 3);
        assert_eq!(report.diagnostics[1].content, ",5");
        assert_eq!(report.diagnostics[1].reason, "name is empty");
        assert_eq!(report.diagnostics[2].line, 3);
    }

    #[test]
    fn quotes_are_plain_characters() {
        let report = parse_players("\"Al,ice\",4\n".as_bytes()).unwrap();
        assert!(report.players.is_empty());
        assert_eq!(report.diagnostics.len(), 1);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let report = parse_players("Alice,1\n\n   \nBob,2\n".as_bytes()).unwrap();
        assert_eq!(report.players.len(), 2);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn invalid_utf8_is_reported_not_fatal() {
        let report = parse_players(&b"Al\xffce,1\nBob,2\n"[..]).unwrap();
        assert_eq!(report.players, vec![Player::new("Bob", 2)]);
        assert_eq!(report.diagnostics.len(), 1);
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Alice,10").unwrap();
        writeln!(file, "Bob,20").unwrap();
        writeln!(file, "Eve").unwrap();

        let report = load_players(file.path()).unwrap();
        assert_eq!(report.players.len(), 2);
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(
            report.diagnostics[0].to_string(),
            "skipping line 3 (\"Eve\"): expected 2 fields, found 1"
        );
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_players(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }
}
