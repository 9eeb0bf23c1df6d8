use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const FIXTURE_WORDS: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliet",
    "kilo", "lima", "mike", "november", "oscar", "papa", "quebec", "romeo", "sierra", "tango",
];

pub struct TestEnv {
    _tmp: TempDir,
    pub wordlist: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_words(FIXTURE_WORDS)
    }

    pub fn with_words(words: &[&str]) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let wordlist = tmp.path().join("wordlist.txt");
        fs::write(&wordlist, words.join("\n")).expect("write fixture wordlist");
        Self {
            _tmp: tmp,
            wordlist,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("wordpick");
        cmd.arg("--wordlist").arg(&self.wordlist);
        cmd
    }

    pub fn run_stdout(&self, args: &[&str]) -> String {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 stdout")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_err(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .code(2)
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json error output")
    }
}
