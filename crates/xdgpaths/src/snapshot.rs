use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::kind::PathKind;

/// Every location of a program resolved at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsSnapshot {
    pub program: String,
    pub config_dir: PathBuf,
    pub log_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub user_profiles_dir: PathBuf,
    pub persistent_data_dir: PathBuf,
    pub inbox_dir: PathBuf,
    pub outbox_dir: PathBuf,
    pub state_dir: PathBuf,
    pub plugins_dir: PathBuf,
    pub themes_dir: PathBuf,
    pub bin_dir: PathBuf,
    pub backups_dir: PathBuf,
    pub runtime_dir: PathBuf,
    pub config_file: PathBuf,
    pub log_file: PathBuf,
}

impl PathsSnapshot {
    pub fn get(&self, kind: PathKind) -> &Path {
        match kind {
            PathKind::ConfigDir => &self.config_dir,
            PathKind::LogDir => &self.log_dir,
            PathKind::CacheDir => &self.cache_dir,
            PathKind::UserProfilesDir => &self.user_profiles_dir,
            PathKind::PersistentDataDir => &self.persistent_data_dir,
            PathKind::InboxDir => &self.inbox_dir,
            PathKind::OutboxDir => &self.outbox_dir,
            PathKind::StateDir => &self.state_dir,
            PathKind::PluginsDir => &self.plugins_dir,
            PathKind::ThemesDir => &self.themes_dir,
            PathKind::BinDir => &self.bin_dir,
            PathKind::BackupsDir => &self.backups_dir,
            PathKind::RuntimeDir => &self.runtime_dir,
            PathKind::ConfigFile => &self.config_file,
            PathKind::LogFile => &self.log_file,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PathKind, &Path)> + '_ {
        PathKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}
