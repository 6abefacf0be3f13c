use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the locations a [`crate::ProgramPaths`] can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    ConfigDir,
    LogDir,
    CacheDir,
    UserProfilesDir,
    PersistentDataDir,
    InboxDir,
    OutboxDir,
    StateDir,
    PluginsDir,
    ThemesDir,
    BinDir,
    BackupsDir,
    RuntimeDir,
    ConfigFile,
    LogFile,
}

impl PathKind {
    pub const ALL: [PathKind; 15] = [
        PathKind::ConfigDir,
        PathKind::LogDir,
        PathKind::CacheDir,
        PathKind::UserProfilesDir,
        PathKind::PersistentDataDir,
        PathKind::InboxDir,
        PathKind::OutboxDir,
        PathKind::StateDir,
        PathKind::PluginsDir,
        PathKind::ThemesDir,
        PathKind::BinDir,
        PathKind::BackupsDir,
        PathKind::RuntimeDir,
        PathKind::ConfigFile,
        PathKind::LogFile,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PathKind::ConfigDir => "config_dir",
            PathKind::LogDir => "log_dir",
            PathKind::CacheDir => "cache_dir",
            PathKind::UserProfilesDir => "user_profiles_dir",
            PathKind::PersistentDataDir => "persistent_data_dir",
            PathKind::InboxDir => "inbox_dir",
            PathKind::OutboxDir => "outbox_dir",
            PathKind::StateDir => "state_dir",
            PathKind::PluginsDir => "plugins_dir",
            PathKind::ThemesDir => "themes_dir",
            PathKind::BinDir => "bin_dir",
            PathKind::BackupsDir => "backups_dir",
            PathKind::RuntimeDir => "runtime_dir",
            PathKind::ConfigFile => "config_file",
            PathKind::LogFile => "log_file",
        }
    }

    pub fn is_file(self) -> bool {
        matches!(self, PathKind::ConfigFile | PathKind::LogFile)
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPathKind(pub String);

impl fmt::Display for UnknownPathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown path kind: {}", self.0)
    }
}

impl std::error::Error for UnknownPathKind {}

impl FromStr for PathKind {
    type Err = UnknownPathKind;

    // Accepts "log_dir" as well as "log-dir".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        PathKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| UnknownPathKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for kind in PathKind::ALL {
            assert_eq!(kind.name().parse::<PathKind>(), Ok(kind));
        }
        assert_eq!("user-profiles-dir".parse::<PathKind>(), Ok(PathKind::UserProfilesDir));
        assert_eq!(" log_file ".parse::<PathKind>(), Ok(PathKind::LogFile));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "music_dir".parse::<PathKind>().unwrap_err();
        assert_eq!(err, UnknownPathKind("music_dir".to_string()));
        assert_eq!(err.to_string(), "unknown path kind: music_dir");
        assert!("".parse::<PathKind>().is_err());
        assert!("ConfigDir".parse::<PathKind>().is_err());
    }

    #[test]
    fn test_is_file() {
        let files: Vec<_> = PathKind::ALL.into_iter().filter(|k| k.is_file()).collect();
        assert_eq!(files, vec![PathKind::ConfigFile, PathKind::LogFile]);
    }

    #[test]
    fn test_serde_name_matches_display() {
        for kind in PathKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }
}
