use std::io;
use std::path::{Component, Path, PathBuf};

/// Path primitives used to resolve [`Hint::Path`](crate::Hint::Path) values.
///
/// `is_absolute` and `resolve` default to lexical platform semantics; an
/// implementor only has to say where the working directory is. The parser
/// calls `current_dir` once per relative path value and propagates its error.
pub trait PathContext {
    /// Working directory relative paths are resolved against.
    fn current_dir(&self) -> io::Result<PathBuf>;

    fn is_absolute(&self, path: &str) -> bool {
        Path::new(path).is_absolute()
    }

    /// Join `path` onto `base` and collapse `.` and `..` segments.
    ///
    /// Purely lexical: nothing is looked up on disk, so symlinks are not
    /// followed and the result need not exist.
    fn resolve(&self, base: &Path, path: &str) -> PathBuf {
        normalize_lexically(&base.join(path))
    }
}

/// The real process working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPaths;

impl PathContext for SystemPaths {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// A fixed working directory supplied by the caller.
#[derive(Debug, Clone)]
pub struct WorkingDir(pub PathBuf);

impl WorkingDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        WorkingDir(dir.into())
    }
}

impl PathContext for WorkingDir {
    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.0.clone())
    }
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // ".." at the root stays at the root
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}
