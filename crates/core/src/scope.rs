//! Selection of the directories a run organizes.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::vec;

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::organize::{OrganizeError, Result};

/// Which directories below the root receive organizing treatment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Only the root itself.
    #[default]
    Current,
    /// Only the root's immediate child directories.
    Subdirs,
    /// The root, then every descendant directory.
    Recursive,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Current => "current",
            Scope::Subdirs => "subdirs",
            Scope::Recursive => "recursive",
        }
    }

    pub fn all() -> [Scope; 3] {
        [Scope::Current, Scope::Subdirs, Scope::Recursive]
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = OrganizeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "current" => Ok(Scope::Current),
            "subdirs" => Ok(Scope::Subdirs),
            "recursive" => Ok(Scope::Recursive),
            other => Err(OrganizeError::UnknownScope(other.to_string())),
        }
    }
}

/// Directories yielded by [`iter_target_dirs`].
///
/// For [`Scope::Recursive`] the root is yielded first and the rest of the
/// tree is only listed once the caller asks for the next directory, so key
/// folders created while organizing the root are part of the listing.
#[derive(Debug)]
pub struct TargetDirs {
    state: State,
}

#[derive(Debug)]
enum State {
    Listed(vec::IntoIter<PathBuf>),
    Recursive {
        root: PathBuf,
        root_pending: bool,
        rest: Option<vec::IntoIter<PathBuf>>,
    },
}

impl Iterator for TargetDirs {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        match &mut self.state {
            State::Listed(dirs) => dirs.next(),
            State::Recursive {
                root,
                root_pending,
                rest,
            } => {
                if *root_pending {
                    *root_pending = false;
                    return Some(root.clone());
                }
                let root = root.as_path();
                rest.get_or_insert_with(|| descendant_dirs(root).into_iter())
                    .next()
            }
        }
    }
}

/// Produces the directories to organize for `root` under `scope`.
///
/// - `current`: `root` only, even if it does not exist (organizing it then
///   reports the invalid folder).
/// - `subdirs`: immediate child directories in name order; fails if `root`
///   cannot be listed.
/// - `recursive`: `root`, then every descendant directory depth-first with
///   siblings in name order.
pub fn iter_target_dirs(root: &Path, scope: Scope) -> Result<TargetDirs> {
    let state = match scope {
        Scope::Current => State::Listed(vec![root.to_path_buf()].into_iter()),
        Scope::Subdirs => State::Listed(child_dirs(root)?.into_iter()),
        Scope::Recursive => State::Recursive {
            root: root.to_path_buf(),
            root_pending: true,
            rest: None,
        },
    };
    Ok(TargetDirs { state })
}

fn child_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(root).map_err(|e| OrganizeError::io(root, e))?;
    let mut dirs = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| OrganizeError::io(root, e))?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn descendant_dirs(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .collect()
}
