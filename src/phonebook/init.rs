use crate::api::{CmdResult, DirectoryApi, DirectoryPaths};
use crate::config::DirectoryConfig;
use crate::error::Result;
use crate::model::Scope;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct DirectoryContext {
    pub api: DirectoryApi<FileStore>,
    pub scope: Scope,
    pub config: DirectoryConfig,
    /// Warnings produced while loading the store.
    pub load_result: CmdResult,
}

/// Per-user data directory used by the global scope.
pub fn global_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "phonebook", "phonebook").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Project scope is the working directory. Without a home directory the global scope
/// falls back to `.phonebook/` under it.
pub fn resolve_paths(cwd: &Path) -> DirectoryPaths {
    DirectoryPaths {
        project: Some(cwd.to_path_buf()),
        global: global_data_dir().unwrap_or_else(|| cwd.join(".phonebook")),
    }
}

/// Builds the store location for a scope. `file_override` wins over the configured file name.
pub fn store_for(
    paths: &DirectoryPaths,
    scope: Scope,
    config: &DirectoryConfig,
    file_override: Option<&Path>,
) -> Result<FileStore> {
    match file_override {
        Some(path) => Ok(FileStore::new(path)),
        None => Ok(FileStore::in_dir(
            &paths.scope_dir(scope)?,
            &config.data_file,
        )),
    }
}

/// Loads config and store for a scope and opens the session.
pub fn initialize(
    paths: DirectoryPaths,
    use_global: bool,
    file_override: Option<&Path>,
) -> Result<DirectoryContext> {
    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };

    let config = DirectoryConfig::load(paths.scope_dir(scope)?)?;
    let store = store_for(&paths, scope, &config, file_override)?;
    let (api, load_result) = DirectoryApi::open(store, paths, config.page_size)?;

    Ok(DirectoryContext {
        api,
        scope,
        config,
        load_result,
    })
}
