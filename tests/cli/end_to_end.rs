// tests/cli/end_to_end.rs
use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{ONE_PREDICATE, SENTENCE, SHORT_LINE, TWO_PREDICATES, TempCorpus};

fn count_deps() -> Command {
    Command::new(env!("CARGO_BIN_EXE_count_deps"))
}

fn stdout_of(corpus: &TempCorpus, ext: &str) -> String {
    let output = count_deps()
        .arg(corpus.path())
        .arg(ext)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn single_file_report() {
    let corpus = TempCorpus::new("single");
    corpus.write_file("a.txt", TWO_PREDICATES);

    let expected = format!("{} 1 3 2\n[1, 3, 2]\n", corpus.display("a.txt"));
    assert_eq!(stdout_of(&corpus, "txt"), expected);
}

#[test]
fn two_files_are_listed_in_order_with_total() {
    let corpus = TempCorpus::new("two_files");
    corpus.write_file("b.txt", ONE_PREDICATE);
    corpus.write_file("a.txt", TWO_PREDICATES);
    corpus.write_file("notes.md", SHORT_LINE);

    let expected = format!(
        "{} 1 3 2\n{} 0 1 1\n[1, 4, 3]\n",
        corpus.display("a.txt"),
        corpus.display("b.txt")
    );
    assert_eq!(stdout_of(&corpus, "txt"), expected);
}

#[test]
fn empty_corpus_prints_zero_total_only() {
    let corpus = TempCorpus::new("empty");
    corpus.write_file("a.dep", SENTENCE);

    assert_eq!(stdout_of(&corpus, "txt"), "[0, 0, 0]\n");
}

#[test]
fn missing_directory_prints_zero_total_only() {
    let corpus = TempCorpus::new("missing");
    count_deps()
        .arg(corpus.path().join("absent"))
        .arg("dep")
        .assert()
        .success()
        .stdout("[0, 0, 0]\n");
}

#[test]
fn blank_only_file() {
    let corpus = TempCorpus::new("blank");
    corpus.write_file("blank.dep", "\n");

    let expected = format!("{} 1 0 0\n[1, 0, 0]\n", corpus.display("blank.dep"));
    assert_eq!(stdout_of(&corpus, "dep"), expected);
}

#[test]
fn malformed_line_aborts_without_total() {
    let corpus = TempCorpus::new("malformed");
    corpus.write_file("a.txt", TWO_PREDICATES);
    corpus.write_file("b.txt", SHORT_LINE);

    count_deps()
        .arg(corpus.path())
        .arg("txt")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::diff(format!("{} 1 3 2\n", corpus.display("a.txt"))))
        .stderr(predicate::str::contains("expected at least 5 columns, found 3"));
}

#[cfg(unix)]
#[test]
fn unreadable_file_aborts_without_total() {
    let corpus = TempCorpus::new("unreadable");
    corpus.write_file("a.txt", TWO_PREDICATES);
    std::os::unix::fs::symlink(corpus.path().join("gone"), corpus.path().join("b.txt")).unwrap();
    corpus.write_file("c.txt", ONE_PREDICATE);

    count_deps()
        .arg(corpus.path())
        .arg("txt")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::diff(format!("{} 1 3 2\n", corpus.display("a.txt"))))
        .stderr(predicate::str::contains("Failed to read file").and(predicate::str::contains("b.txt")));
}

#[test]
fn extension_is_matched_literally() {
    let corpus = TempCorpus::new("literal_ext");
    corpus.write_file("a.[x", ONE_PREDICATE);
    corpus.write_file("b.x", TWO_PREDICATES);

    let expected = format!("{} 0 1 1\n[0, 1, 1]\n", corpus.display("a.[x"));
    assert_eq!(stdout_of(&corpus, "[x"), expected);
}

#[test]
fn skip_malformed_counts_the_rest() {
    let corpus = TempCorpus::new("skip");
    corpus.write_file("a.txt", TWO_PREDICATES);
    corpus.write_file("b.txt", SHORT_LINE);

    count_deps()
        .arg(corpus.path())
        .arg("txt")
        .arg("--skip-malformed")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("[1, 4, 2]\n"))
        .stderr(predicate::str::contains("b.txt:1"));
}

#[test]
fn custom_marker_and_column() {
    let corpus = TempCorpus::new("custom");
    corpus.write_file("s.dep", SENTENCE);

    count_deps()
        .arg(corpus.path())
        .arg("dep")
        .args(["--column", "deprel", "--marker", "subj"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("[1, 4, 1]\n"));
}

#[test]
fn parallel_run_matches_sequential() {
    let corpus = TempCorpus::new("parallel");
    for i in 0..12 {
        corpus.write_file(&format!("f{i:02}.dep"), &SENTENCE.repeat(i + 1));
    }

    let sequential = stdout_of(&corpus, "dep");
    let parallel = count_deps()
        .arg(corpus.path())
        .arg("dep")
        .args(["--jobs", "4"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(sequential, String::from_utf8(parallel).unwrap());
    assert!(sequential.ends_with("[78, 312, 78]\n"));
}

#[test]
fn repeated_runs_are_identical() {
    let corpus = TempCorpus::new("idempotent");
    corpus.write_file("a.dep", SENTENCE);
    corpus.write_file("b.dep", TWO_PREDICATES);
    corpus.write_file("c.dep", "\n\n\n");

    assert_eq!(stdout_of(&corpus, "dep"), stdout_of(&corpus, "dep"));
}
