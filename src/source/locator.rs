use super::LOG_TARGET;
use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::app_err;

/// Directory name that holds packaged resources, both in the source tree and next to the binary
pub const RESOURCE_DIR: &str = "resources";

/// Finds packaged resource files by name.
///
/// Directories are searched in order and the first regular file with the requested name wins.
/// The default search order is any caller-supplied directories, then `resources/` in the crate
/// root, then `resources/` next to the running executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocator {
    search_dirs: Vec<Utf8PathBuf>,
}

impl ResourceLocator {
    /// A locator searching `extra_dirs` first, followed by the built-in resource directories.
    #[must_use]
    pub fn new(extra_dirs: impl IntoIterator<Item = Utf8PathBuf>) -> Self {
        let mut search_dirs: Vec<Utf8PathBuf> = extra_dirs.into_iter().collect();
        search_dirs.extend(builtin_dirs());
        Self { search_dirs }
    }

    /// A locator searching exactly `dirs`, without the built-in resource directories.
    #[must_use]
    pub fn with_dirs(dirs: impl IntoIterator<Item = Utf8PathBuf>) -> Self {
        Self {
            search_dirs: dirs.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn search_dirs(&self) -> &[Utf8PathBuf] {
        &self.search_dirs
    }

    /// Find the resource called `name`.
    ///
    /// # Errors
    ///
    /// Returns an error naming every searched directory when no match exists.
    pub fn locate(&self, name: &str) -> Result<Utf8PathBuf> {
        for dir in &self.search_dirs {
            let candidate = dir.join(name);
            log::debug!(target: LOG_TARGET, "Looking for '{name}' at {candidate}");

            if candidate.is_file() {
                return Ok(candidate);
            }
        }

        let searched = self.search_dirs.iter().map(|dir| dir.as_str()).collect::<Vec<_>>().join(", ");
        Err(app_err!("could not find browscap resource '{name}' (searched: {searched})"))
    }
}

impl Default for ResourceLocator {
    fn default() -> Self {
        Self::new([])
    }
}

fn builtin_dirs() -> Vec<Utf8PathBuf> {
    let mut dirs = vec![Utf8Path::new(env!("CARGO_MANIFEST_DIR")).join(RESOURCE_DIR)];

    if let Ok(exe) = std::env::current_exe()
        && let Some(exe_dir) = exe.parent()
        && let Ok(dir) = Utf8PathBuf::from_path_buf(exe_dir.join(RESOURCE_DIR))
        && !dirs.contains(&dir)
    {
        dirs.push(dir);
    }

    dirs
}
