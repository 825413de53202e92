//! CLI command integration tests.
//! Each test points HOME at a temp directory so no user config is read.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn saju_cmd(home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("saju").unwrap();
    cmd.env("HOME", home.path()).env_remove("SAJU_CONFIG");
    cmd
}

const LUNAR_TABLE: &str = r#"
[[year]]
year = 2000
new_year = "2000-02-05"
months = [30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30]
"#;

#[test]
fn profile_text() {
    let home = TempDir::new().unwrap();
    saju_cmd(&home)
        .args(["profile", "--date", "2000-01-01", "--time", "12:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("기묘 병자 무오 무오"))
        .stdout(predicate::str::contains("己卯 丙子 戊午 戊午"))
        .stdout(predicate::str::contains("lacking:    금(金)"));
}

#[test]
fn profile_json() {
    let home = TempDir::new().unwrap();
    let output = saju_cmd(&home)
        .args(["profile", "--date", "2000-01-01", "--time", "12:00", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["dominantElement"], "fire");
    assert_eq!(json["birthTime"], "12:00");
    assert_eq!(json["calendarDegraded"], false);
}

#[test]
fn invalid_time_fails() {
    let home = TempDir::new().unwrap();
    saju_cmd(&home)
        .args(["profile", "--date", "2000-01-01", "--time", "25:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid birth date or time"));
}

#[test]
fn fortune_yearly() {
    let home = TempDir::new().unwrap();
    saju_cmd(&home)
        .args([
            "fortune", "--date", "2000-01-01", "--time", "12:00", "--period", "yearly", "--on",
            "2024-06-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024년 (갑진년)"))
        .stdout(predicate::str::contains("편관(칠살)"));
}

#[test]
fn fortune_rejects_unknown_period() {
    let home = TempDir::new().unwrap();
    saju_cmd(&home)
        .args(["fortune", "--date", "2000-01-01", "--period", "weekly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("period must be"));
}

#[test]
fn health_names_organs() {
    let home = TempDir::new().unwrap();
    saju_cmd(&home)
        .args(["health", "--date", "2000-01-01", "--time", "12:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lungs"));
}

#[test]
fn score_with_direction_and_floor() {
    let home = TempDir::new().unwrap();
    saju_cmd(&home)
        .args([
            "score", "--date", "2000-01-01", "--time", "12:00", "--direction", "west", "--floor",
            "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("score:      95/100"))
        .stdout(predicate::str::contains("서향"));
}

#[test]
fn score_rejects_bad_direction() {
    let home = TempDir::new().unwrap();
    saju_cmd(&home)
        .args(["score", "--date", "2000-01-01", "--direction", "up"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --direction"));
}

#[test]
fn lunar_without_table_degrades() {
    let home = TempDir::new().unwrap();
    saju_cmd(&home)
        .args(["profile", "--date", "2000-01-01", "--lunar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("read as solar"));
}

#[test]
fn lunar_with_configured_table() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("lunar.toml"), LUNAR_TABLE).unwrap();
    let config = home.path().join("config.toml");
    std::fs::write(&config, "lunar_table = \"lunar.toml\"\n").unwrap();

    saju_cmd(&home)
        .args(["profile", "--date", "2000-01-01", "--lunar", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("solar:      2000-02-05"));
}

#[test]
fn config_from_home_directory() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir_all(home.path().join(".saju")).unwrap();
    std::fs::write(
        home.path().join(".saju").join("config.toml"),
        "unknown_hour = \"midnight\"\n",
    )
    .unwrap();

    // 무오 day at midnight is the 임자 hour
    saju_cmd(&home)
        .args(["profile", "--date", "2000-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("기묘 병자 무오 임자"));
}

#[test]
fn missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    saju_cmd(&home)
        .args(["profile", "--date", "2000-01-01", "--config"])
        .arg(home.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn fortune_defaults_to_today_on_configured_clock() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.toml");
    std::fs::write(&config, "utc_offset_hours = 9\n").unwrap();

    saju_cmd(&home)
        .args(["fortune", "--date", "2000-01-01", "--period", "yearly", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("년 ("));
}

#[test]
fn out_of_range_utc_offset_fails() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.toml");
    std::fs::write(&config, "utc_offset_hours = 20\n").unwrap();

    saju_cmd(&home)
        .args(["fortune", "--date", "2000-01-01", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("utc_offset_hours"));
}

#[test]
fn traditional_zi_hour_from_config() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.toml");
    std::fs::write(&config, "zi_hour = \"traditional\"\n").unwrap();

    saju_cmd(&home)
        .args(["profile", "--date", "2000-01-01", "--time", "23:30", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("기묘 병자 기미 갑자"));
}
