use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn missing_path_exits_1_silently() {
    let mut cmd = cargo_bin_cmd!("nyawiki");
    cmd.assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn outline_with_default_conversion() {
    let fixture = fixture_path("timeutil.go");
    let mut cmd = cargo_bin_cmd!("nyawiki");
    cmd.arg(&fixture);

    let heading = format!("# {}\n", fixture.display());
    let output_pred = predicate::str::starts_with(heading)
        .and(predicate::str::contains("## 经过时间\n"))
        .and(predicate::str::contains(
            "- `func Elapsed(start time.Time) string`\n",
        ))
        .and(predicate::str::contains("\n  - nested note\n"))
        .and(predicate::str::contains("func pad").not());

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn outline_without_conversion() {
    let fixture = fixture_path("timeutil.go");
    let mut cmd = cargo_bin_cmd!("nyawiki");
    cmd.arg(&fixture).arg("--to").arg("none");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("## 經過時間\n"));
}

#[test]
fn variant_flag_is_case_insensitive() {
    let fixture = fixture_path("timeutil.go");

    cargo_bin_cmd!("nyawiki")
        .arg(&fixture)
        .arg("--to")
        .arg("NONE")
        .assert()
        .success()
        .stdout(predicate::str::contains("## 經過時間\n"));

    cargo_bin_cmd!("nyawiki")
        .arg(&fixture)
        .arg("--to")
        .arg("ZH-Hans")
        .assert()
        .success()
        .stdout(predicate::str::contains("## 经过时间\n"));
}

#[test]
fn unknown_variant_flag_is_rejected() {
    let mut cmd = cargo_bin_cmd!("nyawiki");
    cmd.arg(fixture_path("timeutil.go")).arg("--to").arg("tw2sp");

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown variant 'tw2sp'"));
}

#[test]
fn output_is_identical_across_runs() {
    let fixture = fixture_path("timeutil.go");
    let first = cargo_bin_cmd!("nyawiki").arg(&fixture).output().unwrap();
    let second = cargo_bin_cmd!("nyawiki").arg(&fixture).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn file_without_sections_prints_path_only() {
    let fixture = fixture_path("no_sections.go");
    let mut cmd = cargo_bin_cmd!("nyawiki");
    cmd.arg(&fixture);

    cmd.assert()
        .success()
        .stdout(predicate::str::diff(format!("# {}\n", fixture.display())));
}

#[test]
fn missing_file_fails_without_stdout() {
    let mut cmd = cargo_bin_cmd!("nyawiki");
    cmd.arg("/nonexistent/source.go");

    cmd.assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: IO error"));
}

#[test]
fn config_file_selects_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("nyawiki.toml");
    let mut config = std::fs::File::create(&config_path).unwrap();
    writeln!(
        config,
        "[conversion]\ntarget = \"zh-hans\"\ndictionary = {:?}",
        fixture_path("phrases.txt").display().to_string()
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("nyawiki");
    cmd.arg(fixture_path("timeutil.go"))
        .arg("--config")
        .arg(&config_path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("## 时区(TZ)设定\n"));
}

#[test]
fn missing_dictionary_aborts_before_output() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("nyawiki.toml");
    std::fs::write(
        &config_path,
        "[conversion]\ndictionary = \"/nonexistent/phrases.txt\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("nyawiki");
    cmd.arg(fixture_path("timeutil.go"))
        .arg("-c")
        .arg(&config_path);

    cmd.assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot load conversion table"));
}

#[test]
fn unknown_format_is_rejected() {
    let mut cmd = cargo_bin_cmd!("nyawiki");
    cmd.arg(fixture_path("timeutil.go"))
        .arg("--format")
        .arg("html");

    cmd.assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Format 'html' not found"));
}

#[test]
fn json_format_via_cli() {
    let mut cmd = cargo_bin_cmd!("nyawiki");
    cmd.arg(fixture_path("timeutil.go"))
        .arg("-f")
        .arg("json")
        .arg("-t")
        .arg("none");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#"{"kind":"heading","text":"時區設定"}"#));
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("nyawiki");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("  json\n").and(predicate::str::contains("  markdown\n")),
    );
}
