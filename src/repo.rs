use std::path::Path;

use anyhow::{Context, Result};
use commit_graph::Commit;
use git2::{Repository, Sort};

/// A commit plus the text printed beside its graph line
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub commit: Commit,
    pub summary: String,
}

/// Reads commit history from a git repository
pub struct GitWalker {
    repo: Repository,
}

impl GitWalker {
    pub fn new(repo_path: Option<&Path>) -> Result<Self> {
        let repo = match repo_path {
            Some(path) => Repository::open(path),
            None => Repository::open_from_env(),
        }
        .context("Failed to open repository")?;

        Ok(Self { repo })
    }

    /// Walk HEAD and every local branch, newest first, children before parents
    pub fn log(&self, limit: Option<usize>) -> Result<Vec<LogEntry>> {
        let mut revwalk = self.repo.revwalk()?;

        revwalk.push_head()?;
        for branch in self.repo.branches(Some(git2::BranchType::Local))? {
            let (branch, _) = branch?;
            if let Some(target) = branch.get().target() {
                revwalk.push(target)?;
            }
        }

        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

        let mut entries = Vec::new();
        for oid in revwalk {
            if limit.is_some_and(|limit| entries.len() >= limit) {
                break;
            }

            let commit = self.repo.find_commit(oid?)?;
            let parents = commit.parent_ids().map(|oid| oid.to_string()).collect();
            let author = commit.author().name().unwrap_or("Unknown").to_string();

            entries.push(LogEntry {
                commit: Commit::new(commit.id().to_string(), parents).with_author(author),
                summary: commit.summary().unwrap_or("").to_string(),
            });
        }

        tracing::debug!(commits = entries.len(), "walked repository");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Oid, Signature};
    use tempfile::TempDir;

    fn create_test_repo() -> Result<(TempDir, Repository)> {
        let dir = TempDir::new()?;
        let repo = Repository::init(dir.path())?;

        let mut config = repo.config()?;
        config.set_str("user.name", "Test User")?;
        config.set_str("user.email", "test@example.com")?;

        Ok((dir, repo))
    }

    fn commit_to_repo(
        repo: &Repository,
        message: &str,
        parents: &[&git2::Commit],
        update_ref: Option<&str>,
    ) -> Result<Oid> {
        let sig = Signature::now("Test User", "test@example.com")?;
        let tree_id = {
            let mut index = repo.index()?;
            index.write_tree()?
        };
        let tree = repo.find_tree(tree_id)?;

        Ok(repo.commit(update_ref, &sig, &sig, message, &tree, parents)?)
    }

    #[test]
    fn linear_history_is_newest_first() -> Result<()> {
        let (dir, repo) = create_test_repo()?;

        let oid1 = commit_to_repo(&repo, "First commit", &[], Some("HEAD"))?;
        let commit1 = repo.find_commit(oid1)?;
        let oid2 = commit_to_repo(&repo, "Second commit", &[&commit1], Some("HEAD"))?;

        let walker = GitWalker::new(Some(dir.path()))?;
        let entries = walker.log(None)?;

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].commit.hash, oid2.to_string());
        assert_eq!(entries[0].commit.parents, vec![oid1.to_string()]);
        assert_eq!(entries[0].commit.author, "Test User");
        assert_eq!(entries[0].summary, "Second commit");
        assert!(entries[1].commit.is_root());

        Ok(())
    }

    #[test]
    fn merge_commit_keeps_parent_order() -> Result<()> {
        let (dir, repo) = create_test_repo()?;

        let base_oid = commit_to_repo(&repo, "Base commit", &[], Some("HEAD"))?;
        let base = repo.find_commit(base_oid)?;
        let b1_oid = commit_to_repo(&repo, "Branch 1", &[&base], Some("HEAD"))?;
        let b1 = repo.find_commit(b1_oid)?;
        let b2_oid = commit_to_repo(&repo, "Branch 2", &[&base], None)?;
        let b2 = repo.find_commit(b2_oid)?;
        commit_to_repo(&repo, "Merge", &[&b1, &b2], Some("HEAD"))?;

        let walker = GitWalker::new(Some(dir.path()))?;
        let entries = walker.log(None)?;

        assert_eq!(entries.len(), 4);
        assert!(entries[0].commit.is_merge());
        assert_eq!(
            entries[0].commit.parents,
            vec![b1_oid.to_string(), b2_oid.to_string()]
        );

        Ok(())
    }

    #[test]
    fn limit_caps_entries() -> Result<()> {
        let (dir, repo) = create_test_repo()?;

        let oid1 = commit_to_repo(&repo, "one", &[], Some("HEAD"))?;
        let c1 = repo.find_commit(oid1)?;
        let oid2 = commit_to_repo(&repo, "two", &[&c1], Some("HEAD"))?;
        let c2 = repo.find_commit(oid2)?;
        commit_to_repo(&repo, "three", &[&c2], Some("HEAD"))?;

        let walker = GitWalker::new(Some(dir.path()))?;
        assert_eq!(walker.log(Some(2))?.len(), 2);

        Ok(())
    }

    #[test]
    fn missing_repository_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nowhere");
        assert!(GitWalker::new(Some(path.as_path())).is_err());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn opens_repository_at_non_utf8_path() -> Result<()> {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new()?;
        let path = dir.path().join(OsStr::from_bytes(b"repo-\xff"));
        let repo = Repository::init(&path)?;
        let oid = commit_to_repo(&repo, "only", &[], Some("HEAD"))?;

        let entries = GitWalker::new(Some(path.as_path()))?.log(None)?;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].commit.hash, oid.to_string());

        Ok(())
    }
}
