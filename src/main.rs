use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::exit;

use common::{EX_DATAERR, EX_IOERR, EX_USAGE, PROMPT, USAGE};
use error::{CorgyError, CorgyResult, Reporter};
use scanner::Scanner;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod common;
mod error;
mod scanner;

pub struct Corgy<O: Write, E: Write> {
    out: O,
    reporter: Reporter<E>,
}

impl<O: Write, E: Write> Corgy<O, E> {
    fn new(out: O, err: E) -> Self {
        Self {
            out,
            reporter: Reporter::new(err),
        }
    }

    /// Scans `source` and prints its tokens. Returns whether any error was reported.
    fn run(&mut self, source: &str) -> CorgyResult<bool> {
        let tokens = Scanner::new(source).scan_tokens(&mut self.reporter);
        tracing::debug!(count = tokens.len(), "scanned tokens");
        for token in &tokens {
            writeln!(self.out, "{token}")?;
        }
        self.out.flush()?;
        Ok(self.reporter.take_error())
    }

    fn run_file(&mut self, path: &Path) -> CorgyResult<bool> {
        let bytes = std::fs::read(path).map_err(|source| CorgyError::ReadFile {
            path: path.to_owned(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read script");
        // malformed bytes become U+FFFD and are reported by the scanner
        self.run(&String::from_utf8_lossy(&bytes))
    }

    fn run_prompt<R: BufRead>(&mut self, mut input: R) -> CorgyResult<()> {
        let mut buf = Vec::new();
        loop {
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = trim_line_ending(&buf);
            // each line starts clean, so the flag is only worth a log entry
            if self.run(&String::from_utf8_lossy(line))? {
                tracing::debug!("line had errors");
            }
        }
        writeln!(self.out)?;
        Ok(())
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = env::args().collect::<Vec<String>>();
    let corgy = Corgy::new(io::stdout().lock(), io::stderr());

    match args.len() {
        1 => repl(corgy),
        2 => run_file(corgy, &args[1]),
        _ => {
            tracing::debug!(args = args.len() - 1, "too many arguments");
            println!("{USAGE}");
            exit(EX_USAGE)
        }
    }
}

fn repl<O: Write, E: Write>(mut corgy: Corgy<O, E>) {
    if let Err(err) = corgy.run_prompt(io::stdin().lock()) {
        eprintln!("{err}");
        exit(EX_IOERR);
    }
}

fn run_file<O: Write, E: Write>(mut corgy: Corgy<O, E>, path: &str) {
    match corgy.run_file(Path::new(path)) {
        Ok(false) => {}
        Ok(true) => exit(EX_DATAERR),
        Err(err) => {
            eprintln!("{err}");
            exit(EX_IOERR);
        }
    }
}
