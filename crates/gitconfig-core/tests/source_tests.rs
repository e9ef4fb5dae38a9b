use gitconfig_core::source::{overlay_from_config, scope_for_level, scope_from_config};
use gitconfig_core::{ConfigView, Level, Value};
use gitconfig_test_utils::files::LayeredConfig;
use pretty_assertions::assert_eq;

const SYSTEM: &str = "[core]\n\tautocrlf = false\n\tsymlinks = true\n[help]\n\tformat = man\n";
const GLOBAL: &str = "[user]\n\tname = Ada\n\temail = ada@example.com\n[core]\n\tautocrlf = input\n";
const LOCAL: &str = "[core]\n\tbare = false\n[user]\n\temail = ada@work.example\n";

fn raw<'a>(view: &'a impl ConfigView, name: &str) -> Option<&'a str> {
    view.get(name).map(Value::raw)
}

#[test]
fn test_overlay_from_layered_files() {
    let layered = LayeredConfig::new().system(SYSTEM).global(GLOBAL).local(LOCAL);
    let config = overlay_from_config(&layered.open()).unwrap();

    assert_eq!(raw(&config, "core.autocrlf"), Some("input"));
    assert_eq!(raw(&config, "core.symlinks"), Some("true"));
    assert_eq!(raw(&config, "user.email"), Some("ada@work.example"));
    assert_eq!(raw(&config, "user.name"), Some("Ada"));
    assert_eq!(config.origin("core.bare"), Some(Level::Local));
    assert_eq!(config.origin("help.format"), Some(Level::System));

    assert_eq!(
        config.to_string(),
        "core.autocrlf=input\n\
         core.bare=false\n\
         core.symlinks=true\n\
         help.format=man\n\
         user.email=ada@work.example\n\
         user.name=Ada\n"
    );
}

#[test]
fn test_missing_levels_are_empty_scopes() {
    let layered = LayeredConfig::new().global(GLOBAL);
    let config = overlay_from_config(&layered.open()).unwrap();

    assert!(config.system().is_empty());
    assert!(config.local().is_empty());
    assert_eq!(config.global().len(), 3);
}

#[test]
fn test_xdg_is_read_before_global() {
    let layered = LayeredConfig::new()
        .xdg("[user]\n\tname = From Xdg\n\temail = xdg@example.com\n")
        .global("[user]\n\tname = From Home\n");
    let global = scope_for_level(&layered.open(), Level::Global).unwrap();

    assert_eq!(raw(&global, "user.name"), Some("From Home"));
    assert_eq!(raw(&global, "user.email"), Some("xdg@example.com"));
}

#[test]
fn test_repeated_keys_last_wins() {
    let layered = LayeredConfig::new().local("[remote \"origin\"]\n\tfetch = a\n\tfetch = b\n");
    let local = scope_for_level(&layered.open(), Level::Local).unwrap();

    assert_eq!(local.len(), 1);
    assert_eq!(raw(&local, "remote.origin.fetch"), Some("b"));
}

#[test]
fn test_key_without_value_is_empty() {
    let layered = LayeredConfig::new().local("[core]\n\tflag\n");
    let local = scope_for_level(&layered.open(), Level::Local).unwrap();

    assert_eq!(raw(&local, "core.flag"), Some(""));
}

#[test]
fn test_key_without_value_in_overlay() {
    let layered = LayeredConfig::new().global("[core]\n\tflag\n\tbare = false\n");
    let config = overlay_from_config(&layered.open()).unwrap();

    assert_eq!(raw(&config, "core.flag"), Some(""));
    assert_eq!(config.origin("core.flag"), Some(Level::Global));
    assert_eq!(config.to_string(), "core.bare=false\ncore.flag=\n");
}

#[test]
fn test_invalid_utf8_value_is_kept_lossily() {
    let layered = LayeredConfig::new().local(b"[user]\n\tname = Ad\xe9\n\temail = ada@example.com\n");
    let local = scope_for_level(&layered.open(), Level::Local).unwrap();

    assert_eq!(raw(&local, "user.name"), Some("Ad\u{FFFD}"));
    assert_eq!(raw(&local, "user.email"), Some("ada@example.com"));
}

#[test]
fn test_scope_from_config_flattens_levels() {
    let layered = LayeredConfig::new().system(SYSTEM).global(GLOBAL);
    let scope = scope_from_config(&layered.open()).unwrap();

    // Entries are read lowest level first, so the global value wins.
    assert_eq!(raw(&scope, "core.autocrlf"), Some("input"));
    assert_eq!(scope.find("core.*").len(), 2);
}

#[test]
fn test_typed_reads_from_git_files() {
    let layered = LayeredConfig::new().local("[pack]\n\twindow = 10\n[core]\n\tbare = yes\n");
    let config = overlay_from_config(&layered.open()).unwrap();

    assert_eq!(config.get("pack.window").and_then(Value::as_int), Some(10));
    assert_eq!(config.get("core.bare").and_then(Value::as_bool), Some(true));
}
