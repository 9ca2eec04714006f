//! Comma-delimited distance fixtures.
//!
//! Each non-comment line holds one case:
//!
//! ```text
//! <string1>,<string2>,<expectedLevenshtein>,<expectedDamerauLevenshtein>
//! ```
//!
//! Lines starting with `#` and blank lines are skipped. Missing trailing
//! fields read as empty, fields past the fourth are ignored, and expected
//! values are read like C's `atoi` (leading integer, otherwise `0`).

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::cs::dynamic::edit_distance::{damerau_levenshtein_distance, levenshtein_distance};
use crate::cs::dynamic::sentinel::to_sentinel;
use crate::error::{Error, Result};

/// One line of a fixture file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureCase {
    /// 1-based line number in the source.
    pub line: usize,
    pub a: String,
    pub b: String,
    pub expected_levenshtein: i64,
    pub expected_damerau: i64,
}

impl FixtureCase {
    /// Parses a single line with its terminator already removed.
    ///
    /// Returns `None` for comments and blank lines.
    pub fn parse_line(line: usize, text: &str) -> Option<Self> {
        if text.starts_with('#') || text.trim().is_empty() {
            return None;
        }

        let mut fields = text.split(',');
        let mut next = || fields.next().unwrap_or("");
        let a = next().to_string();
        let b = next().to_string();
        let expected_levenshtein = parse_expected(next());
        let expected_damerau = parse_expected(next());

        Some(Self {
            line,
            a,
            b,
            expected_levenshtein,
            expected_damerau,
        })
    }
}

/// Leading optional sign and digits after optional whitespace; `0` if none.
fn parse_expected(field: &str) -> i64 {
    let field = field.trim_start();
    let (sign, digits) = match field.as_bytes().first() {
        Some(b'-') => (-1, &field[1..]),
        Some(b'+') => (1, &field[1..]),
        _ => (1, field),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

    sign * magnitude
}

/// Reads every case from `reader`.
///
/// # Errors
///
/// Fails on I/O errors and on lines that are not valid UTF-8.
pub fn parse_fixture<R: BufRead>(mut reader: R) -> Result<Vec<FixtureCase>> {
    let mut cases = Vec::new();
    let mut buffer = Vec::new();
    let mut line = 0;

    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        line += 1;

        while matches!(buffer.last(), Some(b'\n' | b'\r')) {
            buffer.pop();
        }
        let text = std::str::from_utf8(&buffer)
            .map_err(|e| Error::fixture(line, format!("not valid UTF-8: {e}")))?;

        if let Some(case) = FixtureCase::parse_line(line, text) {
            cases.push(case);
        }
    }

    log::debug!("parsed {} fixture cases from {line} lines", cases.len());
    Ok(cases)
}

/// Opens and parses the fixture file at `path`.
pub fn load_fixture<P: AsRef<Path>>(path: P) -> Result<Vec<FixtureCase>> {
    let file = File::open(path.as_ref())?;
    parse_fixture(BufReader::new(file))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Levenshtein,
    DamerauLevenshtein,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Levenshtein => "levenshtein",
            Algorithm::DamerauLevenshtein => "damerau_levenshtein",
        }
    }

    fn evaluate(&self, a: &str, b: &str) -> i64 {
        match self {
            Algorithm::Levenshtein => to_sentinel(levenshtein_distance(a, b)),
            Algorithm::DamerauLevenshtein => to_sentinel(damerau_levenshtein_distance(a, b)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A case whose computed distance differs from the expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailure {
    pub line: usize,
    pub algorithm: Algorithm,
    pub a: String,
    pub b: String,
    pub actual: i64,
    pub expected: i64,
}

impl fmt::Display for CaseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FAIL: {}({},{}) yields {}.  Expected = {}",
            self.algorithm, self.a, self.b, self.actual, self.expected
        )
    }
}

/// Pass counts per algorithm plus every failure, in fixture order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureReport {
    pub total: usize,
    pub levenshtein_passes: usize,
    pub damerau_passes: usize,
    pub failures: Vec<CaseFailure>,
}

impl FixtureReport {
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn passes(&self, algorithm: Algorithm) -> usize {
        match algorithm {
            Algorithm::Levenshtein => self.levenshtein_passes,
            Algorithm::DamerauLevenshtein => self.damerau_passes,
        }
    }

    /// The closing `<algorithm> <p> passes out of <t> total tests` lines.
    pub fn summary(&self) -> String {
        [Algorithm::Levenshtein, Algorithm::DamerauLevenshtein]
            .iter()
            .map(|algorithm| {
                format!(
                    "{algorithm} {} passes out of {} total tests\n",
                    self.passes(*algorithm),
                    self.total
                )
            })
            .collect()
    }
}

/// Failure lines followed by the summary, exactly as the harness prints them.
impl fmt::Display for FixtureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for failure in &self.failures {
            writeln!(f, "{failure}")?;
        }
        f.write_str(&self.summary())
    }
}

/// Runs both algorithms over every case.
pub fn run_cases(cases: &[FixtureCase]) -> FixtureReport {
    let mut report = FixtureReport::default();

    for case in cases {
        for (algorithm, expected) in [
            (Algorithm::Levenshtein, case.expected_levenshtein),
            (Algorithm::DamerauLevenshtein, case.expected_damerau),
        ] {
            let actual = algorithm.evaluate(&case.a, &case.b);
            if actual == expected {
                match algorithm {
                    Algorithm::Levenshtein => report.levenshtein_passes += 1,
                    Algorithm::DamerauLevenshtein => report.damerau_passes += 1,
                }
            } else {
                log::warn!(
                    "line {}: {algorithm}({},{}) = {actual}, expected {expected}",
                    case.line,
                    case.a,
                    case.b
                );
                report.failures.push(CaseFailure {
                    line: case.line,
                    algorithm,
                    a: case.a.clone(),
                    b: case.b.clone(),
                    actual,
                    expected,
                });
            }
        }
        report.total += 1;
    }

    log::debug!(
        "fixture run: {} cases, {} failures",
        report.total,
        report.failures.len()
    );
    report
}

/// Loads the fixture at `path` and runs it.
pub fn run_fixture<P: AsRef<Path>>(path: P) -> Result<FixtureReport> {
    let cases = load_fixture(path)?;
    Ok(run_cases(&cases))
}
