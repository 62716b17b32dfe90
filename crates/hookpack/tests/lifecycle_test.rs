use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CHIME_STOP: &str = "bash -c '.claude/hooks/sounds/chime/play.sh'";

fn hookpack_cmd() -> assert_cmd::Command {
    cargo_bin_cmd!("hookpack")
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn chime_hooks_json() -> String {
    serde_json::json!({"Stop": {"command": CHIME_STOP}}).to_string()
}

/// Install a pack next to an unrelated hook, then uninstall it again.
#[test]
fn install_then_uninstall_restores_settings() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.json");
    let settings_arg = settings.to_str().unwrap();
    fs::write(
        &settings,
        r#"{"hooks": {"Stop": [{"hooks":[{"type":"command","command":"echo hi"}]}]}}"#,
    )
    .unwrap();
    let original = read_json(&settings);

    // 1. Install
    hookpack_cmd()
        .args(["install", "chime", chime_hooks_json().as_str(), "--settings", settings_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged 1 hook(s) into"))
        .stdout(predicate::str::contains("settings.json.bak"));

    let installed = read_json(&settings);
    let stop = installed["hooks"]["Stop"].as_array().unwrap();
    assert_eq!(stop.len(), 2);
    assert_eq!(stop[0]["hooks"][0]["command"], "echo hi");
    assert_eq!(stop[1]["hooks"][0]["command"], CHIME_STOP);

    // 2. Reinstall is idempotent
    hookpack_cmd()
        .args(["install", "chime", chime_hooks_json().as_str(), "--settings", settings_arg])
        .assert()
        .success();
    assert_eq!(read_json(&settings), installed);

    // 3. Uninstall
    hookpack_cmd()
        .args(["uninstall", "chime", "--settings", settings_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Removed 1 hook entry/entries for 'chime'",
        ));

    assert_eq!(read_json(&settings), original);
    assert!(tmp.path().join("settings.json.bak").exists());
}

#[test]
fn written_file_is_pretty_with_trailing_newline() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.json");

    hookpack_cmd()
        .args([
            "install",
            "chime",
            r#"{"PreToolUse": {"command": "play", "matcher": "Bash"}}"#,
            "--settings",
            settings.to_str().unwrap(),
        ])
        .assert()
        .success();

    let written = fs::read_to_string(&settings).unwrap();
    assert!(written.ends_with("}\n"));
    insta::assert_snapshot!(written.trim_end(), @r#"
    {
      "hooks": {
        "PreToolUse": [
          {
            "hooks": [
              {
                "type": "command",
                "command": "play"
              }
            ],
            "matcher": "Bash"
          }
        ]
      }
    }
    "#);
}

#[test]
fn install_warns_about_commands_without_pack_marker() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.json");
    let settings_arg = settings.to_str().unwrap();
    let hooks = r#"{"SessionStart": {"command": "bash -c 'play a.wav'"}}"#;

    for _ in 0..2 {
        hookpack_cmd()
            .args(["install", "P", hooks, "--settings", settings_arg])
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "SessionStart: command does not contain '.claude/hooks/sounds/P/'",
            ));
    }
    assert_eq!(
        read_json(&settings)["hooks"]["SessionStart"]
            .as_array()
            .unwrap()
            .len(),
        2
    );

    hookpack_cmd()
        .args(["uninstall", "P", "--settings", settings_arg])
        .assert()
        .success();
    assert!(read_json(&settings)["hooks"]["SessionStart"].is_array());
}

#[test]
fn install_with_pack_marker_does_not_warn() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.json");

    hookpack_cmd()
        .args([
            "install",
            "chime",
            chime_hooks_json().as_str(),
            "--settings",
            settings.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("does not contain").not());
}

#[test]
fn install_missing_hooks_json_is_usage_error() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.json");

    hookpack_cmd()
        .args(["install", "chime", "--settings", settings.to_str().unwrap()])
        .assert()
        .failure()
        .code(2);

    assert!(!settings.exists());
}

#[test]
fn install_malformed_json_fails_without_writing() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.json");
    fs::write(&settings, r#"{"model": "opus"}"#).unwrap();

    hookpack_cmd()
        .args([
            "install",
            "chime",
            "{not json",
            "--settings",
            settings.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Malformed hooks JSON"));

    assert_eq!(fs::read_to_string(&settings).unwrap(), r#"{"model": "opus"}"#);
    assert!(!tmp.path().join("settings.json.bak").exists());
}

#[test]
fn install_entry_without_command_fails() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.json");

    hookpack_cmd()
        .args([
            "install",
            "chime",
            r#"{"Stop": {"matcher": "Bash"}}"#,
            "--settings",
            settings.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("command"));

    assert!(!settings.exists());
}

#[test]
fn install_invalid_pack_id_fails() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.json");

    hookpack_cmd()
        .args([
            "install",
            "a/b",
            chime_hooks_json().as_str(),
            "--settings",
            settings.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid pack id"));

    assert!(!settings.exists());
}

#[test]
fn uninstall_without_settings_file_succeeds() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.json");

    hookpack_cmd()
        .args(["uninstall", "chime", "--settings", settings.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to clean"));

    assert!(!settings.exists());
}

#[test]
fn uninstall_missing_pack_id_is_usage_error() {
    hookpack_cmd().args(["uninstall"]).assert().failure().code(2);
}

#[test]
fn uninstall_last_pack_removes_hooks_key() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.json");
    fs::write(
        &settings,
        serde_json::json!({
            "model": "opus",
            "hooks": {"Stop": [{"hooks": [{"type": "command", "command": CHIME_STOP}]}]}
        })
        .to_string(),
    )
    .unwrap();

    hookpack_cmd()
        .args(["uninstall", "chime", "--settings", settings.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(read_json(&settings), serde_json::json!({"model": "opus"}));
}

#[test]
fn json_output_mode() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.json");

    let output = hookpack_cmd()
        .args([
            "install",
            "chime",
            chime_hooks_json().as_str(),
            "--settings",
            settings.to_str().unwrap(),
            "--json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let results = parsed["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["type"], "success");
}

#[test]
fn quiet_mode_prints_nothing_on_success() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.json");

    hookpack_cmd()
        .args([
            "install",
            "chime",
            chime_hooks_json().as_str(),
            "--settings",
            settings.to_str().unwrap(),
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn default_settings_path_is_under_home() {
    let home = TempDir::new().unwrap();

    hookpack_cmd()
        .env("HOME", home.path())
        .args(["install", "chime", chime_hooks_json().as_str()])
        .assert()
        .success();

    let settings = home.path().join(".claude").join("settings.json");
    assert!(settings.exists());
    assert_eq!(
        read_json(&settings)["hooks"]["Stop"][0]["hooks"][0]["command"],
        CHIME_STOP
    );
}
