//! Loading `KEY=VALUE` files into an [`EnvSource`].
//!
//! Candidate files are `{dir}/{file_name}` for each directory the search
//! paths expand to (see [`file`](crate::file)), followed by any explicit
//! [`file()`](DotEnvLoader::file) entries. The list is priority-ascending and
//! missing files are skipped.
//!
//! - [`SearchMode::Merge`]: every file found is read; later files win per key.
//! - [`SearchMode::FirstMatch`]: only the highest-priority file found is read.
//!
//! Variables already present in the target are left alone unless
//! [`override_existing(true)`](DotEnvLoader::override_existing) is set.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::EnvError;
use crate::file;
use crate::source::{EnvSource, ProcessEnv};
use crate::types::{MalformedPolicy, SearchMode, SearchPath};

/// What a load did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Files read, in the order they were applied.
    pub files: Vec<PathBuf>,
    /// Variables written to the target.
    pub injected: usize,
}

/// Builder-style `.env` loader.
#[derive(Debug, Clone)]
pub struct DotEnvLoader {
    file_name: String,
    app_name: Option<String>,
    search_paths: Option<Vec<SearchPath>>,
    files: Vec<PathBuf>,
    search_mode: SearchMode,
    override_existing: bool,
    malformed: MalformedPolicy,
}

impl Default for DotEnvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DotEnvLoader {
    /// Looks for `.env` in the current working directory.
    pub fn new() -> Self {
        Self {
            file_name: ".env".to_string(),
            app_name: None,
            search_paths: None,
            files: Vec::new(),
            search_mode: SearchMode::default(),
            override_existing: false,
            malformed: MalformedPolicy::default(),
        }
    }

    /// File name looked up in each search directory (default: `.env`).
    pub fn file_name(mut self, name: &str) -> Self {
        self.file_name = name.to_string();
        self
    }

    /// App name used by [`SearchPath::Platform`].
    pub fn app_name(mut self, name: &str) -> Self {
        self.app_name = Some(name.to_string());
        self
    }

    /// Replace the default `[Cwd]` search paths. Priority-ascending.
    pub fn search_paths(mut self, paths: Vec<SearchPath>) -> Self {
        self.search_paths = Some(paths);
        self
    }

    /// Append a search path to the defaults or the current list.
    pub fn add_search_path(mut self, path: SearchPath) -> Self {
        self.search_paths
            .get_or_insert_with(|| vec![SearchPath::Cwd])
            .push(path);
        self
    }

    /// Add an explicit file, above every search directory in priority.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Add several explicit files, in increasing priority.
    pub fn files<P: AsRef<Path>>(mut self, paths: &[P]) -> Self {
        self.files
            .extend(paths.iter().map(|p| p.as_ref().to_path_buf()));
        self
    }

    pub fn search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    /// Let file values replace variables that are already set (default: `false`).
    pub fn override_existing(mut self, yes: bool) -> Self {
        self.override_existing = yes;
        self
    }

    /// Policy for files that exist but do not parse (default: return the error).
    pub fn on_malformed(mut self, policy: MalformedPolicy) -> Self {
        self.malformed = policy;
        self
    }

    fn effective_search_paths(&self) -> Vec<SearchPath> {
        match &self.search_paths {
            Some(paths) => paths.clone(),
            None => vec![SearchPath::Cwd],
        }
    }

    /// Every candidate file, priority-ascending, whether or not it exists.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let dirs =
            file::expand_search_paths(&self.effective_search_paths(), self.app_name.as_deref());
        dirs.into_iter()
            .map(|dir| dir.join(&self.file_name))
            .chain(self.files.iter().cloned())
            .collect()
    }

    /// Load into the process environment.
    pub fn load(&self) -> Result<LoadReport, EnvError> {
        self.load_into(&ProcessEnv)
    }

    /// Load into `target`.
    ///
    /// `${VAR}` references inside the files are expanded by `dotenvy` from
    /// the process environment and earlier lines of the same file, never
    /// from `target`.
    pub fn load_into<S: EnvSource + ?Sized>(&self, target: &S) -> Result<LoadReport, EnvError> {
        self.load_candidates(self.candidates(), target)
    }

    fn load_candidates<S: EnvSource + ?Sized>(
        &self,
        candidates: Vec<PathBuf>,
        target: &S,
    ) -> Result<LoadReport, EnvError> {
        let mut found: Vec<PathBuf> = candidates
            .into_iter()
            .filter(|p| file::file_exists(p))
            .collect();

        if self.search_mode == SearchMode::FirstMatch {
            found = found.pop().into_iter().collect();
        }

        let mut merged = BTreeMap::new();
        for path in &found {
            match read_pairs(path) {
                Ok(pairs) => merged.extend(pairs),
                Err(e) => return self.handle_malformed(e),
            }
        }

        let mut injected = 0;
        for (key, value) in &merged {
            if !self.override_existing && target.contains(key) {
                tracing::trace!(key, "keeping existing variable");
                continue;
            }
            target.set_var(key, value);
            injected += 1;
        }

        tracing::debug!(files = found.len(), injected, "loaded env files");
        Ok(LoadReport {
            files: found,
            injected,
        })
    }

    fn handle_malformed(&self, err: EnvError) -> Result<LoadReport, EnvError> {
        match self.malformed {
            MalformedPolicy::Error => Err(err),
            MalformedPolicy::Abort => {
                tracing::error!(error = %err, "aborting on malformed env file");
                std::process::exit(1)
            }
        }
    }
}

/// Parse one file into `(key, value)` pairs, in file order.
///
/// Substitution reads `std::env`; see [`DotEnvLoader::load_into`].
pub fn read_pairs(path: &Path) -> Result<Vec<(String, String)>, EnvError> {
    let to_err = |source: dotenvy::Error| EnvError::DotEnv {
        path: path.to_path_buf(),
        source,
    };
    dotenvy::from_path_iter(path)
        .map_err(to_err)?
        .map(|item| item.map_err(to_err))
        .collect()
}
