use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use argparse2typer::compose::GeneratedDocument;
use argparse2typer::sink::{OverwritePolicy, WriteOutcome, write_document};
use tempfile::TempDir;

struct Recorder {
    answer: bool,
    asked: Vec<PathBuf>,
}

impl OverwritePolicy for Recorder {
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool> {
        self.asked.push(path.to_path_buf());
        Ok(self.answer)
    }
}

fn document() -> GeneratedDocument {
    GeneratedDocument {
        lines: vec!["def main(".to_string(), "):".to_string(), "  pass".to_string()],
    }
}

#[test]
fn writes_new_file_without_asking() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested/cli.py");
    let mut policy = Recorder {
        answer: false,
        asked: Vec::new(),
    };

    let outcome = write_document(&document(), &path, false, &mut policy).unwrap();

    assert_eq!(outcome, WriteOutcome::Written);
    assert!(policy.asked.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "def main(\n):\n  pass\n");
}

#[test]
fn declined_overwrite_keeps_existing_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("cli.py");
    fs::write(&path, "keep\n").unwrap();
    let mut policy = Recorder {
        answer: false,
        asked: Vec::new(),
    };

    let outcome = write_document(&document(), &path, false, &mut policy).unwrap();

    assert_eq!(outcome, WriteOutcome::Declined);
    assert_eq!(policy.asked, vec![path.clone()]);
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep\n");
}

#[test]
fn confirmed_overwrite_replaces_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("cli.py");
    fs::write(&path, "old\n").unwrap();

    let outcome = write_document(&document(), &path, false, &mut true).unwrap();

    assert_eq!(outcome, WriteOutcome::Written);
    assert!(fs::read_to_string(&path).unwrap().starts_with("def main("));
}

#[test]
fn override_skips_the_policy() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("cli.py");
    fs::write(&path, "old\n").unwrap();
    let mut policy = Recorder {
        answer: false,
        asked: Vec::new(),
    };

    let outcome = write_document(&document(), &path, true, &mut policy).unwrap();

    assert_eq!(outcome, WriteOutcome::Written);
    assert!(policy.asked.is_empty());
}
