use std::collections::HashMap;
use std::ffi::OsString;

/// Read-only view of the process environment used to resolve paths.
pub trait Environment {
    fn var_os(&self, key: &str) -> Option<OsString>;
    fn effective_uid(&self) -> u32;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var_os(&self, key: &str) -> Option<OsString> {
        (**self).var_os(key)
    }

    fn effective_uid(&self) -> u32 {
        (**self).effective_uid()
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl Environment for SystemEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }

    fn effective_uid(&self) -> u32 {
        unsafe { libc::geteuid() }
    }
}

/// A fixed environment, for tests and for hosts that want reproducible output.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, OsString>,
    uid: u32,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: &str, value: impl Into<OsString>) -> Self {
        self.set(key, value);
        self
    }

    pub fn with_uid(mut self, uid: u32) -> Self {
        self.uid = uid;
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<OsString>) {
        self.vars.insert(key.to_string(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<OsString> {
        self.vars.remove(key)
    }

    pub fn set_uid(&mut self, uid: u32) {
        self.uid = uid;
    }
}

impl Environment for MapEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }

    fn effective_uid(&self) -> u32 {
        self.uid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_lookup() {
        let env = MapEnv::new().with_var("HOME", "/home/u").with_uid(1000);
        assert_eq!(env.var_os("HOME"), Some(OsString::from("/home/u")));
        assert_eq!(env.var_os("XDG_CONFIG_HOME"), None);
        assert_eq!(env.effective_uid(), 1000);
    }

    #[test]
    fn test_map_env_mutation() {
        let mut env = MapEnv::new().with_var("HOME", "/home/u");
        env.set("HOME", "/home/v");
        assert_eq!(env.var_os("HOME"), Some(OsString::from("/home/v")));
        assert_eq!(env.remove("HOME"), Some(OsString::from("/home/v")));
        assert_eq!(env.var_os("HOME"), None);
        env.set_uid(42);
        assert_eq!(env.effective_uid(), 42);
    }

    #[test]
    fn test_borrowed_env() {
        let env = MapEnv::new().with_var("HOME", "/root").with_uid(0);
        let borrowed = &env;
        assert_eq!(borrowed.var_os("HOME"), Some(OsString::from("/root")));
        assert_eq!(borrowed.effective_uid(), 0);
    }

    #[test]
    fn test_system_env_matches_process() {
        let env = SystemEnv;
        assert_eq!(env.var_os("PATH"), std::env::var_os("PATH"));
        assert_eq!(env.effective_uid(), unsafe { libc::geteuid() });
    }
}
