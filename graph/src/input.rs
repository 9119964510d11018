//! Plain-text commit lists.
//!
//! One commit per line, newest first, as printed by
//! `git log --format='%H %P%x09%an'`:
//!
//! ```text
//! <hash> [<parent>...][\t<author>]
//! ```

use thiserror::Error;

use crate::core::Commit;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: '{hash}' is not a hex commit hash")]
    InvalidHash { line: usize, hash: String },

    #[error("line {line}: missing commit hash")]
    MissingHash { line: usize },
}

/// Parse a commit list; blank lines are skipped
pub fn parse_commit_list(text: &str) -> Result<Vec<Commit>, ParseError> {
    let mut commits = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let (ids, author) = match raw.split_once('\t') {
            Some((ids, author)) => (ids, author.trim()),
            None => (raw, ""),
        };

        let mut hashes = ids.split_whitespace();
        let hash = hashes.next().ok_or(ParseError::MissingHash { line })?;
        let hash = validate(hash, line)?;
        let parents = hashes
            .map(|parent| validate(parent, line))
            .collect::<Result<Vec<_>, _>>()?;

        commits.push(Commit::new(hash, parents).with_author(author));
    }

    Ok(commits)
}

fn validate(hash: &str, line: usize) -> Result<String, ParseError> {
    if hash.chars().all(|ch| ch.is_ascii_hexdigit()) {
        Ok(hash.to_string())
    } else {
        Err(ParseError::InvalidHash {
            line,
            hash: hash.to_string(),
        })
    }
}
