//! Read-only filesystem access for kernel-exposed network state.

use std::{
    collections::{BTreeSet, HashMap},
    fs, io,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

/// Source of the kernel files the monitor reads.
///
/// Everything under `/sys/class/net` and `/proc/net/route` goes through this
/// trait so classification and fallback policy can be exercised against an
/// in-memory tree.
pub trait SysFs: Send + Sync {
    /// Read a whole file as text.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file is missing or unreadable.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Names of the entries directly inside `path`, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the directory cannot be listed.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Whether `path` names an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFs;

impl SysFs for HostFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let names = fs::read_dir(path)?
            .filter_map(Result::ok)
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();

        Ok(names)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[derive(Debug, Default)]
struct MemoryTree {
    files: HashMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

/// In-memory filesystem for tests and simulations.
///
/// Writing a file implicitly creates its parent directories. Contents can
/// be changed through a shared reference while a monitor holds the same
/// instance.
#[derive(Debug, Default)]
pub struct MemoryFs {
    tree: RwLock<MemoryTree>,
}

impl MemoryFs {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or overwrite a file.
    pub fn write(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        let mut tree = self.tree.write().unwrap_or_else(PoisonError::into_inner);

        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            tree.dirs.insert(ancestor.to_path_buf());
        }
        tree.files.insert(path.to_path_buf(), content.into());
    }

    /// Create an empty directory and its parents.
    pub fn create_dir(&self, path: impl AsRef<Path>) {
        let mut tree = self.tree.write().unwrap_or_else(PoisonError::into_inner);

        for ancestor in path.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            tree.dirs.insert(ancestor.to_path_buf());
        }
    }

    /// Remove a file or a directory with everything below it.
    pub fn remove(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut tree = self.tree.write().unwrap_or_else(PoisonError::into_inner);

        tree.files.retain(|file, _| !file.starts_with(path));
        tree.dirs.retain(|dir| !dir.starts_with(path));
    }
}

impl SysFs for MemoryFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let tree = self.tree.read().unwrap_or_else(PoisonError::into_inner);

        tree.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let tree = self.tree.read().unwrap_or_else(PoisonError::into_inner);

        if !tree.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ));
        }

        let children = tree
            .dirs
            .iter()
            .chain(tree.files.keys())
            .filter(|child| child.parent() == Some(path))
            .filter_map(|child| child.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .collect::<BTreeSet<_>>();

        Ok(children.into_iter().collect())
    }

    fn is_dir(&self, path: &Path) -> bool {
        let tree = self.tree.read().unwrap_or_else(PoisonError::into_inner);
        tree.dirs.contains(path)
    }
}
