use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("gn").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("GN_CONFIG").arg("--no-color");
    cmd
}

/// A config file pointing the defaults store into `dir`.
fn config_in(dir: &Path, extra: &str) -> PathBuf {
    let path = dir.join("gn-foundation.toml");
    let store = dir.join("store");
    let body = format!(
        "[defaults]\ndirectory = {:?}\n{extra}",
        store.to_string_lossy()
    );
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn md5_text() {
    cmd()
        .args(["md5", "abc"])
        .assert()
        .success()
        .stdout("900150983cd24fb0d6963f7d28e17f72\n");
}

#[test]
fn md5_stdin() {
    cmd()
        .arg("md5")
        .write_stdin("message digest")
        .assert()
        .success()
        .stdout(contains("f96b697d7cb7938d525a2f31aaf161d0"));
}

#[test]
fn md5_file_json() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("data.txt");
    std::fs::write(&file, "a").unwrap();

    cmd()
        .arg("--json")
        .arg("md5")
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("0cc175b9c0f1b6a831c399e269772661"))
        .stdout(contains("\"size\": \"1 B\""));
}

#[test]
fn md5_verify() {
    cmd()
        .args(["md5", "abc", "--verify", "900150983CD24FB0D6963F7D28E17F72"])
        .assert()
        .success()
        .stdout(contains("Digest matches"));

    cmd()
        .args(["md5", "abd", "--verify", "900150983cd24fb0d6963f7d28e17f72"])
        .assert()
        .code(5)
        .stderr(contains("Digest mismatch"));
}

#[test]
fn md5_missing_file() {
    cmd()
        .args(["md5", "--file", "/definitely/not/here.bin"])
        .assert()
        .code(4)
        .stderr(contains("E2001"));
}

#[test]
fn aes_round_trip() {
    let key = ["--key", "0123456789abcdef", "--iv", "fedcba9876543210"];

    let output = cmd()
        .args(["aes", "encrypt"])
        .args(key)
        .arg("hello world")
        .output()
        .unwrap();
    assert!(output.status.success());
    let sealed = String::from_utf8(output.stdout).unwrap();

    cmd()
        .args(["aes", "decrypt"])
        .args(key)
        .arg(sealed.trim())
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn aes_no_padding_requires_alignment() {
    let args = [
        "aes",
        "encrypt",
        "--hex-key",
        "--no-padding",
        "--key",
        "2b7e151628aed2a6abf7158809cf4f3c",
        "--iv",
        "000102030405060708090a0b0c0d0e0f",
    ];

    cmd()
        .args(args)
        .arg("exactly16bytes!!")
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[A-Za-z0-9+/]{22}==\n$").unwrap());

    cmd()
        .args(args)
        .arg("short")
        .assert()
        .code(5)
        .stderr(contains("Encryption failed"));
}

#[test]
fn aes_bad_key_length() {
    cmd()
        .args(["aes", "encrypt", "--key", "short", "--iv", "fedcba9876543210", "x"])
        .assert()
        .code(5)
        .stderr(contains("invalid key length"));
}

#[test]
fn aes_errors_in_chinese() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path(), "[crypto]\nlanguage = \"zh-Hans\"\n");

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["aes", "encrypt", "--key", "short", "--iv", "fedcba9876543210", "x"])
        .assert()
        .code(5)
        .stderr(contains("密钥长度非法"));
}

#[test]
fn aes_invalid_hex_key() {
    cmd()
        .args(["aes", "encrypt", "--hex-key", "--key", "zz", "--iv", "00", "x"])
        .assert()
        .code(2)
        .stderr(contains("--key is not valid hex"));
}

#[test]
fn json_mode_reports_crypto_errors_as_json() {
    cmd()
        .args(["--json", "aes", "encrypt", "--key", "short", "--iv", "fedcba9876543210", "x"])
        .assert()
        .code(5)
        .stderr(contains(r#""code":"E11001""#))
        .stderr(contains(r#""category":"Crypto""#))
        .stderr(contains("invalid key length"));
}

#[test]
fn json_mode_reports_text_errors_as_json() {
    cmd()
        .args(["--json", "query", "[1,2]"])
        .assert()
        .code(2)
        .stderr(contains(r#""code":"E12002""#))
        .stderr(contains(r#""category":"Text""#));
}

#[test]
fn json_mode_reports_core_errors_as_json() {
    cmd()
        .args(["--json", "md5", "--file", "/definitely/not/here.bin"])
        .assert()
        .code(4)
        .stderr(contains(r#""code":"E2001""#))
        .stderr(contains(r#""category":"IO""#));
}

#[test]
fn color_show_json() {
    cmd()
        .args(["--json", "color", "show", "#FF8800"])
        .assert()
        .success()
        .stdout(contains("\"hex\": \"#FF8800FF\""))
        .stdout(contains("\"short\": \"#F80\""));
}

#[test]
fn color_operations() {
    cmd()
        .args(["color", "blend", "#FF0000", "#0000FF"])
        .assert()
        .success()
        .stdout("#800080FF\n");

    cmd()
        .args(["color", "complement", "#FFFFFF"])
        .assert()
        .success()
        .stdout("#000000FF\n");

    cmd()
        .args(["color", "darken", "0x000000"])
        .assert()
        .success()
        .stdout("#000000FF\n");

    cmd()
        .args(["color", "lighten", "#000", "1.0"])
        .assert()
        .success()
        .stdout("#FFFFFFFF\n");
}

#[test]
fn color_falls_back_softly() {
    cmd()
        .args(["color", "complement", "not-a-colour"])
        .assert()
        .success()
        .stderr(contains("using #00000000"))
        .stdout("#FFFFFFFF\n");
}

#[test]
fn text_helpers() {
    cmd()
        .args(["text", "slug", "Hello  Wörld!"])
        .assert()
        .success()
        .stdout("hello-world\n");

    cmd()
        .args(["text", "camel", "two lines here"])
        .assert()
        .success()
        .stdout("twoLinesHere\n");

    cmd()
        .args(["text", "pad-start", "42", "5", "--pad", "0"])
        .assert()
        .success()
        .stdout("00042\n");

    cmd()
        .args(["text", "slice", "Hello World", "6", "5"])
        .assert()
        .success()
        .stdout("World\n");
}

#[test]
fn text_words_unique() {
    cmd()
        .args(["--json", "text", "words", "--unique", "a b a c"])
        .assert()
        .success()
        .stdout(contains("\"a\"").and(contains("\"c\"")));
}

#[test]
fn text_slice_out_of_range() {
    cmd()
        .args(["text", "slice", "abc", "10"])
        .assert()
        .code(2)
        .stderr(contains("out of range"));
}

#[test]
fn query_sorted_and_escaped() {
    cmd()
        .args(["query", r#"{"q":"a b","page":2}"#])
        .assert()
        .success()
        .stdout("page=2&q=a%20b\n");
}

#[test]
fn query_rejects_array() {
    cmd()
        .args(["query", "[1,2]"])
        .assert()
        .code(2)
        .stderr(contains("must be a JSON object"));
}

#[test]
fn json_pretty_prints_object() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("data.json");
    std::fs::write(&file, r#"{"name":"gn","tags":["a"]}"#).unwrap();

    cmd()
        .arg("json")
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("\"name\": \"gn\""));

    let array = dir.path().join("array.json");
    std::fs::write(&array, "[1, 2]").unwrap();
    cmd()
        .arg("json")
        .arg(&array)
        .assert()
        .failure()
        .stderr(contains("E4002"));
}

#[test]
fn defaults_set_get_remove() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path(), "");
    let with_config = |args: &[&str]| {
        let mut c = cmd();
        c.arg("--config").arg(&config).args(args);
        c
    };

    with_config(&["defaults", "set", "launch_count", "3"]).assert().success();
    with_config(&["defaults", "set", "name", "Ada Lovelace"]).assert().success();

    with_config(&["defaults", "get", "launch_count"])
        .assert()
        .success()
        .stdout("3\n");
    with_config(&["defaults", "get", "name"])
        .assert()
        .success()
        .stdout("Ada Lovelace\n");

    with_config(&["defaults", "list"])
        .assert()
        .success()
        .stdout(contains("launch_count = 3").and(contains("2 keys")));

    assert!(dir.path().join("store").join("standard.json").is_file());

    with_config(&["defaults", "remove", "name"])
        .assert()
        .success()
        .stdout(contains("Removed 'name'"));
    with_config(&["defaults", "get", "name"]).assert().code(1);
}

#[test]
fn defaults_suites_are_separate() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path(), "");

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["defaults", "--suite", "other", "set", "flag", "true"])
        .assert()
        .success();

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["--json", "defaults", "list"])
        .assert()
        .success()
        .stdout("{}\n");

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["defaults", "--suite", "other", "get", "flag"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn missing_config_file() {
    cmd()
        .args(["--config", "/definitely/not/here.toml", "md5", "x"])
        .assert()
        .code(3)
        .stderr(contains("E3001"));
}
