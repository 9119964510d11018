/// Hash of git's empty tree. Root commits point their first pipe here; it is
/// never the hash of a commit.
pub const EMPTY_TREE_HASH: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

/// Source hash of the synthetic pipe that seeds the first row.
pub const START_HASH: &str = "START";

/// A commit as seen by the graph: its hash and its ordered parents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Commit hash, possibly abbreviated
    pub hash: String,
    /// Parent hashes, first parent first
    pub parents: Vec<String>,
    /// Author name, used by callers to pick a style
    pub author: String,
}

impl Commit {
    pub fn new(hash: impl Into<String>, parents: Vec<String>) -> Self {
        Self {
            hash: hash.into(),
            parents,
            author: String::new(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Check if this is a root commit (no parents)
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// Check if this is a merge commit (multiple parents)
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}

/// Compare two hashes up to the length of the shorter one.
///
/// Parent hashes may be stored abbreviated, so `abcd` equals `abcdef`. An
/// empty hash never equals anything, which is also how "no selection" is
/// spelled.
pub fn equal_hashes(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let len = a.len().min(b.len());
    a.as_bytes()[..len] == b.as_bytes()[..len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_never_matches() {
        assert!(!equal_hashes("", "abc"));
        assert!(!equal_hashes("abc", ""));
        assert!(!equal_hashes("", ""));
    }

    #[test]
    fn prefix_matches_either_way() {
        assert!(equal_hashes("abcd", "abcdef"));
        assert!(equal_hashes("abcdef", "abcd"));
        assert!(equal_hashes("abc", "abc"));
    }

    #[test]
    fn diverging_hashes_differ() {
        assert!(!equal_hashes("abcx", "abcy"));
        assert!(!equal_hashes("b", "abc"));
    }

    #[test]
    fn sentinel_is_not_a_start_marker() {
        assert!(!equal_hashes(EMPTY_TREE_HASH, START_HASH));
    }

    #[test]
    fn merge_and_root_flags() {
        let root = Commit::new("aaa", vec![]);
        assert!(root.is_root());
        assert!(!root.is_merge());

        let merge = Commit::new("ccc", vec!["aaa".to_string(), "bbb".to_string()]);
        assert!(merge.is_merge());
        assert!(!merge.is_root());
    }
}
