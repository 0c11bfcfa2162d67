use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PLAYER: &str = r#"import pygpen as pp

MAX_SPEED = 5

class Player(pp.PhysicsEntity):
    def __init__(self, *args):
        super().__init__(*args)
        self.speed = 10
        self.flying = True

    def update(self, dt):
        self.pos[0] += self.speed * dt
        self.e['Assets'].load_folder('data/images/player')
"#;

fn write_script(dir: &Path) -> PathBuf {
    let path = dir.join("player.py");
    fs::write(&path, PLAYER).unwrap();
    path
}

#[test]
fn scan_lists_parameters() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path());

    let mut cmd = cargo_bin_cmd!("soma-inspector");
    cmd.arg("scan").arg(&script);

    cmd.assert().success().stdout(
        predicate::str::contains("MAX_SPEED = 5")
            .and(predicate::str::contains("speed = 10"))
            .and(predicate::str::contains("flying = True"))
            .and(predicate::str::contains("3 parameter(s)")),
    );
}

#[test]
fn scan_json_output_at_line() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path());

    let mut cmd = cargo_bin_cmd!("soma-inspector");
    cmd.arg("scan")
        .arg(format!("{}:8", script.display()))
        .arg("--json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let descriptors: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let descriptors = descriptors.as_array().unwrap();
    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0]["name"], "speed");
    assert_eq!(descriptors[0]["param_type"], "int");
    assert_eq!(descriptors[0]["class_type"], "PhysicsEntity");
}

#[test]
fn set_writes_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path());

    let mut cmd = cargo_bin_cmd!("soma-inspector");
    cmd.args(["set"]).arg(&script).args(["Player", "speed", "20"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Player.speed = 20"));

    let text = fs::read_to_string(&script).unwrap();
    assert!(text.contains("        self.speed = 20\n"));
    assert!(text.contains("self.pos[0] += self.speed * dt"));
}

#[test]
fn set_dry_run_leaves_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path());

    let mut cmd = cargo_bin_cmd!("soma-inspector");
    cmd.arg("set")
        .arg(&script)
        .args(["GlobalConfig", "MAX_SPEED", "-3", "--dry-run"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"5\" -> \"-3\""));

    assert_eq!(fs::read_to_string(&script).unwrap(), PLAYER);
}

#[test]
fn set_unknown_parameter_fails() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path());

    let mut cmd = cargo_bin_cmd!("soma-inspector");
    cmd.arg("set").arg(&script).args(["Player", "mana", "1"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to set Player.mana"));

    assert_eq!(fs::read_to_string(&script).unwrap(), PLAYER);
}

#[test]
fn rename_reads_new_name_from_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path());

    let mut cmd = cargo_bin_cmd!("soma-inspector");
    cmd.arg("rename").arg(&script).arg("speed").write_stdin("velocity\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("in 2 place(s)"));

    let text = fs::read_to_string(&script).unwrap();
    assert!(text.contains("self.velocity = 10"));
    assert!(text.contains("self.velocity * dt"));
    assert!(!text.contains("self.speed"));
}

#[test]
fn rename_cancelled_on_end_of_input() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path());

    let mut cmd = cargo_bin_cmd!("soma-inspector");
    cmd.arg("rename").arg(&script).arg("speed").write_stdin("");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Rename cancelled"));

    assert_eq!(fs::read_to_string(&script).unwrap(), PLAYER);
}

#[test]
fn jump_prints_location() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path());

    let mut cmd = cargo_bin_cmd!("soma-inspector");
    cmd.arg("jump").arg("Player").arg("--root").arg(temp_dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!("{}:11:5", script.display())));

    let mut cmd = cargo_bin_cmd!("soma-inspector");
    cmd.arg("jump").arg("Boss").arg("--root").arg(temp_dir.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No update method found for class 'Boss'"));
}

#[test]
fn assets_lists_images() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path());
    let images = temp_dir.path().join("data/images/player");
    fs::create_dir_all(&images).unwrap();
    fs::write(images.join("idle.png"), b"").unwrap();
    fs::write(images.join("readme.md"), b"").unwrap();

    let mut cmd = cargo_bin_cmd!("soma-inspector");
    cmd.arg("assets").arg(&script).arg("--root").arg(temp_dir.path());
    cmd.assert().success().stdout(
        predicate::str::contains("data/images/player (1 images)")
            .and(predicate::str::contains("idle.png"))
            .and(predicate::str::contains("readme.md").not()),
    );
}

#[test]
fn json_kind_from_flag() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("tuning.data");
    fs::write(&data, r#"{"enemy": {"hp": 3, "boss": false}, "title": "Soma"}"#).unwrap();

    let mut cmd = cargo_bin_cmd!("soma-inspector");
    cmd.arg("scan").arg(&data);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--kind"));

    let mut cmd = cargo_bin_cmd!("soma-inspector");
    cmd.arg("set").arg(&data).args(["enemy", "enemy.hp", "7", "--kind", "json"]);
    cmd.assert().success();

    let text = fs::read_to_string(&data).unwrap();
    assert!(text.contains(r#""hp": 7"#));
}

#[test]
fn init_writes_config_once() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("soma-inspector");
    cmd.arg("init")
        .arg("--cwd")
        .arg(temp_dir.path())
        .args(["--asset-root", "game"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Created config"));

    let config_path = temp_dir.path().join(".soma-inspector.json");
    let config: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(config["asset_root"], "game");

    let mut cmd = cargo_bin_cmd!("soma-inspector");
    cmd.arg("init").arg("--cwd").arg(temp_dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
