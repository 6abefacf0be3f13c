use std::path::Path;
use xdgpaths::ProgramPaths;

#[test]
fn system_env_follows_process_environment() {
    std::env::set_var("HOME", "/home/probe");
    for var in [
        "XDG_CONFIG_HOME",
        "XDG_DATA_HOME",
        "XDG_CACHE_HOME",
        "XDG_STATE_HOME",
    ] {
        std::env::remove_var(var);
    }

    let paths = ProgramPaths::new("myapp");
    assert_eq!(paths.config_dir(), Path::new("/home/probe/.config/myapp"));
    assert_eq!(paths.plugins_dir(), Path::new("/home/probe/.local/share/myapp/plugins"));
    assert_eq!(paths.log_file(), Path::new("/home/probe/.local/state/myapp/log/myapp.log"));

    std::env::set_var("XDG_CONFIG_HOME", "/custom/cfg");
    assert_eq!(paths.config_dir(), Path::new("/custom/cfg/myapp"));

    std::env::set_var("XDG_CONFIG_HOME", "");
    assert_eq!(paths.config_dir(), Path::new("/home/probe/.config/myapp"));

    std::env::remove_var("XDG_RUNTIME_DIR");
    let uid = unsafe { libc::geteuid() };
    assert_eq!(
        paths.runtime_dir(),
        Path::new("/run/user").join(uid.to_string()).join("myapp")
    );
}
