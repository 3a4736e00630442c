use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Environment variable holding the directory in which data files are stored.
pub const DATA_GUARD_DIR_ENV: &str = "MIDEN_DATA_GUARD_DIR";

// DATA GUARD CONFIG
// ================================================================================================

/// A set of parameters specifying where and how a [`DataGuard`](crate::DataGuard) persists data.
///
/// - `dir` is the directory in which `<name>.json` data files are written and read.
/// - `pretty` enables pretty-printed JSON output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataGuardConfig {
    dir: PathBuf,
    pretty: bool,
}

impl Default for DataGuardConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("."), pretty: false }
    }
}

impl DataGuardConfig {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Creates a new config storing data files in `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), ..Self::default() }
    }

    /// Creates a new config from the environment.
    ///
    /// The data directory is read from `MIDEN_DATA_GUARD_DIR`; if the variable is not set, the
    /// current directory is used.
    pub fn from_env() -> Self {
        Self::from_dir_var(env::var_os(DATA_GUARD_DIR_ENV))
    }

    fn from_dir_var(dir: Option<OsString>) -> Self {
        match dir {
            Some(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::default(),
        }
    }

    /// Sets the directory in which data files are stored.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Enables pretty-printed JSON output when `pretty` is set to true.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the directory in which data files are stored.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns true if data files are written as pretty-printed JSON.
    pub fn pretty(&self) -> bool {
        self.pretty
    }

    pub(crate) fn set_dir(&mut self, dir: PathBuf) {
        self.dir = dir;
    }
}

// TESTS
// ================================================================================================
