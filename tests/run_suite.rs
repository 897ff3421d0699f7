mod common;

use std::path::{Path, PathBuf};
use std::process::Output;

use common::command;
use regex::Regex;
use test_generator::test_resources;

const ERROR_PREAMBLE: &str = "RIP my dude, it looks like there's an error! ";

struct Expected {
    out: String,
    errors: Vec<String>,
}

#[test_resources("tests/suite/*/*.corgy")]
fn run_file_test(filename: &str) {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push(filename);
    let expected = read_expectations(&path);
    let output = command()
        .arg(&path)
        .output()
        .expect("Command execution error.");

    let out = String::from_utf8(output.stdout.clone()).expect("Invalid UTF-8");
    let err: Vec<String> = String::from_utf8(output.stderr.clone())
        .expect("Invalid UTF-8")
        .lines()
        .map(|x| x.to_owned())
        .collect();

    run_assertions(expected, output, out, err);
}

fn read_expectations(path: &Path) -> Expected {
    println!("{}", path.display());
    let out = std::fs::read_to_string(path.with_extension("stdout"))
        .expect("Could not read expected stdout.");
    let errors = match std::fs::read_to_string(path.with_extension("stderr")) {
        Ok(content) => content.lines().map(|x| x.to_owned()).collect(),
        Err(_) => vec![],
    };
    Expected { out, errors }
}

fn run_assertions(expected: Expected, output: Output, out: String, err: Vec<String>) {
    let diagnostic_re =
        Regex::new(r"^(.*)\[Line (\d+)\] Error([^:]*): (.+)$").expect("Invalid regex.");

    let code = output
        .status
        .code()
        .expect("Process terminated by a signal.");
    match expected.errors.is_empty() {
        true => assert_eq!(code, 0, "Program exited with failure, expected success"),
        false => assert_eq!(code, 65, "Lexical errors should have error code 65"),
    }

    let mut errors = vec![];
    for line in &err {
        let m = diagnostic_re
            .captures(line)
            .unwrap_or_else(|| panic!("Malformed diagnostic: {line}"));
        assert_eq!(&m[1], ERROR_PREAMBLE, "Diagnostic preamble should match");
        errors.push(format!("[Line {}] Error{}: {}", &m[2], &m[3], &m[4]));
    }
    assert_eq!(expected.errors, errors, "Lexical errors should match");
    assert_eq!(expected.out, out, "Output should match");
}
