use std::ffi::OsString;
use std::path::PathBuf;

use crate::env::{Environment, SystemEnv};
use crate::kind::PathKind;
use crate::snapshot::PathsSnapshot;

/// Standard on-disk locations for one program, resolved on every call from
/// the XDG base directory variables.
///
/// ```
/// use xdgpaths::{MapEnv, ProgramPaths};
///
/// let env = MapEnv::new().with_var("HOME", "/home/u");
/// let paths = ProgramPaths::with_env("myapp", env);
/// assert_eq!(paths.config_file().to_str(), Some("/home/u/.config/myapp/myapp.conf"));
/// ```
#[derive(Debug, Clone)]
pub struct ProgramPaths<E: Environment = SystemEnv> {
    program_name: String,
    env: E,
}

impl ProgramPaths<SystemEnv> {
    pub fn new(program_name: impl Into<String>) -> Self {
        Self::with_env(program_name, SystemEnv)
    }
}

impl<E: Environment> ProgramPaths<E> {
    pub fn with_env(program_name: impl Into<String>, env: E) -> Self {
        Self {
            program_name: program_name.into(),
            env,
        }
    }

    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    // An empty value counts as unset.
    fn override_var(&self, key: &str) -> Option<PathBuf> {
        match self.env.var_os(key) {
            Some(value) if !value.is_empty() => Some(PathBuf::from(value)),
            _ => None,
        }
    }

    fn home(&self) -> PathBuf {
        PathBuf::from(self.env.var_os("HOME").unwrap_or_else(OsString::new))
    }

    fn home_root(&self, key: &str, default: &[&str]) -> PathBuf {
        if let Some(dir) = self.override_var(key) {
            return dir;
        }
        let dir = default
            .iter()
            .fold(self.home(), |path, segment| path.join(segment));
        log::trace!("{} not set, using {}", key, dir.display());
        dir
    }

    fn config_home(&self) -> PathBuf {
        self.home_root("XDG_CONFIG_HOME", &[".config"])
    }

    fn data_home(&self) -> PathBuf {
        self.home_root("XDG_DATA_HOME", &[".local", "share"])
    }

    fn cache_home(&self) -> PathBuf {
        self.home_root("XDG_CACHE_HOME", &[".cache"])
    }

    fn state_home(&self) -> PathBuf {
        self.home_root("XDG_STATE_HOME", &[".local", "state"])
    }

    fn runtime_home(&self) -> PathBuf {
        if let Some(dir) = self.override_var("XDG_RUNTIME_DIR") {
            return dir;
        }
        let dir = PathBuf::from("/run/user").join(self.env.effective_uid().to_string());
        log::trace!("XDG_RUNTIME_DIR not set, using {}", dir.display());
        dir
    }

    fn program_dir(&self, root: PathBuf) -> PathBuf {
        join_segment(root, &self.program_name)
    }

    fn data_subdir(&self, name: &str) -> PathBuf {
        self.program_dir(self.data_home()).join(name)
    }

    /// `$XDG_CONFIG_HOME/<program>`, e.g. `~/.config/myapp`.
    pub fn config_dir(&self) -> PathBuf {
        self.program_dir(self.config_home())
    }

    /// `$XDG_STATE_HOME/<program>/log`.
    pub fn log_dir(&self) -> PathBuf {
        self.state_dir().join("log")
    }

    /// `$XDG_CACHE_HOME/<program>`.
    pub fn cache_dir(&self) -> PathBuf {
        self.program_dir(self.cache_home())
    }

    /// `$XDG_DATA_HOME/<program>/profiles`.
    pub fn user_profiles_dir(&self) -> PathBuf {
        self.data_subdir("profiles")
    }

    /// `$XDG_DATA_HOME/<program>/data`.
    pub fn persistent_data_dir(&self) -> PathBuf {
        self.data_subdir("data")
    }

    /// `$XDG_DATA_HOME/<program>/inbox`.
    pub fn inbox_dir(&self) -> PathBuf {
        self.data_subdir("inbox")
    }

    /// `$XDG_DATA_HOME/<program>/outbox`.
    pub fn outbox_dir(&self) -> PathBuf {
        self.data_subdir("outbox")
    }

    /// `$XDG_STATE_HOME/<program>`, e.g. `~/.local/state/myapp`.
    pub fn state_dir(&self) -> PathBuf {
        self.program_dir(self.state_home())
    }

    /// `$XDG_DATA_HOME/<program>/plugins`.
    pub fn plugins_dir(&self) -> PathBuf {
        self.data_subdir("plugins")
    }

    /// `$XDG_DATA_HOME/<program>/themes`.
    pub fn themes_dir(&self) -> PathBuf {
        self.data_subdir("themes")
    }

    /// `$XDG_DATA_HOME/<program>/bin`.
    pub fn bin_dir(&self) -> PathBuf {
        self.data_subdir("bin")
    }

    /// `$XDG_DATA_HOME/<program>/backups`.
    pub fn backups_dir(&self) -> PathBuf {
        self.data_subdir("backups")
    }

    /// Per-session files: `$XDG_RUNTIME_DIR/<program>`, falling back to
    /// `/run/user/<euid>/<program>`.
    pub fn runtime_dir(&self) -> PathBuf {
        self.program_dir(self.runtime_home())
    }

    /// `<config_dir>/<program>.conf`.
    pub fn config_file(&self) -> PathBuf {
        join_segment(self.config_dir(), &format!("{}.conf", self.program_name))
    }

    /// `<log_dir>/<program>.log`.
    pub fn log_file(&self) -> PathBuf {
        join_segment(self.log_dir(), &format!("{}.log", self.program_name))
    }

    pub fn get(&self, kind: PathKind) -> PathBuf {
        match kind {
            PathKind::ConfigDir => self.config_dir(),
            PathKind::LogDir => self.log_dir(),
            PathKind::CacheDir => self.cache_dir(),
            PathKind::UserProfilesDir => self.user_profiles_dir(),
            PathKind::PersistentDataDir => self.persistent_data_dir(),
            PathKind::InboxDir => self.inbox_dir(),
            PathKind::OutboxDir => self.outbox_dir(),
            PathKind::StateDir => self.state_dir(),
            PathKind::PluginsDir => self.plugins_dir(),
            PathKind::ThemesDir => self.themes_dir(),
            PathKind::BinDir => self.bin_dir(),
            PathKind::BackupsDir => self.backups_dir(),
            PathKind::RuntimeDir => self.runtime_dir(),
            PathKind::ConfigFile => self.config_file(),
            PathKind::LogFile => self.log_file(),
        }
    }

    pub fn snapshot(&self) -> PathsSnapshot {
        PathsSnapshot {
            program: self.program_name.clone(),
            config_dir: self.config_dir(),
            log_dir: self.log_dir(),
            cache_dir: self.cache_dir(),
            user_profiles_dir: self.user_profiles_dir(),
            persistent_data_dir: self.persistent_data_dir(),
            inbox_dir: self.inbox_dir(),
            outbox_dir: self.outbox_dir(),
            state_dir: self.state_dir(),
            plugins_dir: self.plugins_dir(),
            themes_dir: self.themes_dir(),
            bin_dir: self.bin_dir(),
            backups_dir: self.backups_dir(),
            runtime_dir: self.runtime_dir(),
            config_file: self.config_file(),
            log_file: self.log_file(),
        }
    }
}

// The segment always lands under `path`: surrounding separators are dropped
// and an empty segment leaves `path` unchanged.
fn join_segment(mut path: PathBuf, segment: &str) -> PathBuf {
    let segment = segment.trim_matches(std::path::is_separator);
    if !segment.is_empty() {
        path.push(segment);
    }
    path
}
