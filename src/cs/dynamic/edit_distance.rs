//! Levenshtein and Damerau-Levenshtein edit distances.
//!
//! The `&str` entry points compare raw UTF-8 bytes, so `"café"` and `"cafe"`
//! are two edits apart. Use the `*_chars` variants to compare Unicode scalar
//! values, or the `*_elements` variants for arbitrary slices.

use crate::cs::dynamic::distance_matrix::DistanceMatrix;
use crate::cs::dynamic::trace::{CellObserver, CellTrace, NoopObserver};
use crate::error::{Error, Result};

/// How the first row and column of the Damerau-Levenshtein table are seeded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DamerauBoundary {
    /// Row 0 and column 0 are all zero. This is the historical behavior of
    /// this routine and what [`damerau_levenshtein_distance`] uses.
    #[default]
    Zero,
    /// Row 0 is `0..=n` and column 0 is `0..=m`, as in textbook optimal
    /// string alignment.
    Ramp,
}

/// Computes the Levenshtein (edit) distance between two strings, compared
/// byte by byte.
///
/// The Levenshtein distance is the minimum number of single-element
/// insertions, deletions and substitutions required to change `a` into `b`.
///
/// # Examples
///
/// ```
/// use editdistance::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("", "").unwrap(), 0);
/// assert_eq!(levenshtein_distance("kitten", "sitting").unwrap(), 3);
/// assert_eq!(levenshtein_distance("gumbo", "gambol").unwrap(), 2);
/// ```
///
/// # Errors
///
/// Returns [`Error::Allocation`] if the distance table cannot be allocated.
pub fn levenshtein_distance(a: &str, b: &str) -> Result<usize> {
    levenshtein_elements(a.as_bytes(), b.as_bytes())
}

/// Levenshtein distance over Unicode scalar values instead of bytes.
///
/// ```
/// use editdistance::{levenshtein_chars, levenshtein_distance};
///
/// assert_eq!(levenshtein_chars("café", "cafe").unwrap(), 1);
/// assert_eq!(levenshtein_distance("café", "cafe").unwrap(), 2);
/// ```
pub fn levenshtein_chars(a: &str, b: &str) -> Result<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_elements(&a, &b)
}

/// Levenshtein distance over any two slices of comparable elements.
pub fn levenshtein_elements<T: PartialEq>(a: &[T], b: &[T]) -> Result<usize> {
    levenshtein_traced(a, b, &mut NoopObserver)
}

/// Levenshtein distance, reporting every computed cell to `observer`.
///
/// When either input is empty the result is the length of the other and no
/// cell is computed.
pub fn levenshtein_traced<T, O>(a: &[T], b: &[T], observer: &mut O) -> Result<usize>
where
    T: PartialEq,
    O: CellObserver + ?Sized,
{
    if a.is_empty() {
        return Ok(b.len());
    } else if b.is_empty() {
        return Ok(a.len());
    }

    fill_levenshtein(a, b, observer).map(|table| table.distance())
}

/// Returns the whole populated Levenshtein table for `a` and `b`.
///
/// Unlike [`levenshtein_elements`] this always builds the table, including
/// for empty inputs, so the boundary row and column can be inspected.
pub fn levenshtein_matrix<T: PartialEq>(a: &[T], b: &[T]) -> Result<DistanceMatrix> {
    fill_levenshtein(a, b, &mut NoopObserver)
}

/// Levenshtein distance for possibly-absent inputs.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if either input is `None`. An empty string
/// is a valid input.
pub fn try_levenshtein(a: Option<&str>, b: Option<&str>) -> Result<usize> {
    match (a, b) {
        (Some(a), Some(b)) => levenshtein_distance(a, b),
        _ => Err(Error::InvalidInput),
    }
}

fn fill_levenshtein<T, O>(a: &[T], b: &[T], observer: &mut O) -> Result<DistanceMatrix>
where
    T: PartialEq,
    O: CellObserver + ?Sized,
{
    let mut table = DistanceMatrix::ramped(a.len() + 1, b.len() + 1)?;

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            let deletion = table.at(i - 1, j) + 1;
            let insertion = table.at(i, j - 1) + 1;
            let substitution = table.at(i - 1, j - 1) + cost;
            let value = deletion.min(insertion).min(substitution);
            table.set(i, j, value);

            observer.on_cell(&CellTrace {
                row: i,
                col: j,
                substitution_cost: cost,
                deletion,
                insertion,
                substitution,
                transposition: None,
                value,
            });
        }
    }

    Ok(table)
}

/// Computes the Damerau-Levenshtein distance between two strings, compared
/// byte by byte, with the [`DamerauBoundary::Zero`] table seeding.
///
/// On top of the Levenshtein operations, swapping two adjacent elements counts
/// as a single edit.
///
/// Because the first row and column start at zero, a prefix or suffix that
/// only one input carries is free inside the table: `"a"` against `"ba"` is `0`.
/// Use [`damerau_levenshtein_distance_with`] and [`DamerauBoundary::Ramp`]
/// for the textbook values.
///
/// # Examples
///
/// ```
/// use editdistance::{damerau_levenshtein_distance, levenshtein_distance};
///
/// assert_eq!(damerau_levenshtein_distance("ab", "ba").unwrap(), 1);
/// assert_eq!(levenshtein_distance("ab", "ba").unwrap(), 2);
/// assert_eq!(damerau_levenshtein_distance("", "abc").unwrap(), 3);
/// ```
pub fn damerau_levenshtein_distance(a: &str, b: &str) -> Result<usize> {
    damerau_levenshtein_distance_with(a, b, DamerauBoundary::Zero)
}

/// Damerau-Levenshtein distance over bytes with an explicit boundary mode.
///
/// ```
/// use editdistance::{damerau_levenshtein_distance_with, DamerauBoundary};
///
/// assert_eq!(damerau_levenshtein_distance_with("ca", "abc", DamerauBoundary::Zero).unwrap(), 1);
/// assert_eq!(damerau_levenshtein_distance_with("ca", "abc", DamerauBoundary::Ramp).unwrap(), 3);
/// ```
pub fn damerau_levenshtein_distance_with(
    a: &str,
    b: &str,
    boundary: DamerauBoundary,
) -> Result<usize> {
    damerau_levenshtein_elements(a.as_bytes(), b.as_bytes(), boundary)
}

/// Damerau-Levenshtein distance over Unicode scalar values.
pub fn damerau_levenshtein_chars(a: &str, b: &str, boundary: DamerauBoundary) -> Result<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    damerau_levenshtein_elements(&a, &b, boundary)
}

pub fn damerau_levenshtein_elements<T: PartialEq>(
    a: &[T],
    b: &[T],
    boundary: DamerauBoundary,
) -> Result<usize> {
    damerau_levenshtein_traced(a, b, boundary, &mut NoopObserver)
}

/// Damerau-Levenshtein distance, reporting every computed cell to `observer`.
pub fn damerau_levenshtein_traced<T, O>(
    a: &[T],
    b: &[T],
    boundary: DamerauBoundary,
    observer: &mut O,
) -> Result<usize>
where
    T: PartialEq,
    O: CellObserver + ?Sized,
{
    if a.is_empty() {
        return Ok(b.len());
    } else if b.is_empty() {
        return Ok(a.len());
    }

    fill_damerau(a, b, boundary, observer).map(|table| table.distance())
}

/// Returns the whole populated Damerau-Levenshtein table.
///
/// The empty-input shortcuts are not applied here: with
/// [`DamerauBoundary::Zero`] an empty input yields an all-zero table.
pub fn damerau_levenshtein_matrix<T: PartialEq>(
    a: &[T],
    b: &[T],
    boundary: DamerauBoundary,
) -> Result<DistanceMatrix> {
    fill_damerau(a, b, boundary, &mut NoopObserver)
}

/// Damerau-Levenshtein distance ([`DamerauBoundary::Zero`]) for
/// possibly-absent inputs.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if either input is `None`.
pub fn try_damerau_levenshtein(a: Option<&str>, b: Option<&str>) -> Result<usize> {
    match (a, b) {
        (Some(a), Some(b)) => damerau_levenshtein_distance(a, b),
        _ => Err(Error::InvalidInput),
    }
}

fn fill_damerau<T, O>(
    a: &[T],
    b: &[T],
    boundary: DamerauBoundary,
    observer: &mut O,
) -> Result<DistanceMatrix>
where
    T: PartialEq,
    O: CellObserver + ?Sized,
{
    let (rows, cols) = (a.len() + 1, b.len() + 1);
    let mut table = match boundary {
        DamerauBoundary::Zero => DistanceMatrix::zeroed(rows, cols)?,
        DamerauBoundary::Ramp => DistanceMatrix::ramped(rows, cols)?,
    };

    for i in 1..rows {
        for j in 1..cols {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            let deletion = table.at(i - 1, j) + 1;
            let insertion = table.at(i, j - 1) + 1;
            let substitution = table.at(i - 1, j - 1) + cost;

            // The last two elements of each prefix are swapped.
            let swapped = i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1];
            let transposition = swapped.then(|| table.at(i - 2, j - 2) + cost);

            let mut value = deletion.min(insertion).min(substitution);
            if let Some(transposition) = transposition {
                value = value.min(transposition);
            }
            table.set(i, j, value);

            observer.on_cell(&CellTrace {
                row: i,
                col: j,
                substitution_cost: cost,
                deletion,
                insertion,
                substitution,
                transposition,
                value,
            });
        }
    }

    Ok(table)
}
