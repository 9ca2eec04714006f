//! Integer-returning wrappers for callers that expect `-1` on failure.
//!
//! Every error the distance routines can produce (absent input, table
//! allocation failure) collapses into [`INVALID`].

use crate::cs::dynamic::edit_distance::{try_damerau_levenshtein, try_levenshtein};
use crate::error::Result;

/// Returned in place of a distance when the computation failed.
pub const INVALID: i64 = -1;

/// Maps a distance result onto the legacy integer convention.
pub fn to_sentinel(result: Result<usize>) -> i64 {
    match result {
        Ok(distance) => i64::try_from(distance).unwrap_or(INVALID),
        Err(e) => {
            log::debug!("distance failed: {e}");
            INVALID
        }
    }
}

/// Levenshtein distance, or `-1` if either input is absent.
///
/// ```
/// use editdistance::sentinel;
///
/// assert_eq!(sentinel::levenshtein(Some("kitten"), Some("sitting")), 3);
/// assert_eq!(sentinel::levenshtein(None, Some("sitting")), -1);
/// ```
pub fn levenshtein(a: Option<&str>, b: Option<&str>) -> i64 {
    to_sentinel(try_levenshtein(a, b))
}

/// Damerau-Levenshtein distance (zero-seeded table), or `-1` if either input
/// is absent.
pub fn damerau_levenshtein(a: Option<&str>, b: Option<&str>) -> i64 {
    to_sentinel(try_damerau_levenshtein(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_absent_inputs() {
        assert_eq!(levenshtein(None, Some("abc")), INVALID);
        assert_eq!(levenshtein(Some("abc"), None), INVALID);
        assert_eq!(levenshtein(None, None), INVALID);
        assert_eq!(damerau_levenshtein(None, Some("abc")), INVALID);
        assert_eq!(damerau_levenshtein(Some("abc"), None), INVALID);
    }

    #[test]
    fn test_present_inputs() {
        assert_eq!(levenshtein(Some(""), Some("")), 0);
        assert_eq!(levenshtein(Some("abc"), Some("")), 3);
        assert_eq!(levenshtein(Some("ab"), Some("ba")), 2);
        assert_eq!(damerau_levenshtein(Some("ab"), Some("ba")), 1);
        assert_eq!(damerau_levenshtein(Some("ca"), Some("abc")), 1);
    }

    #[test]
    fn test_to_sentinel() {
        assert_eq!(to_sentinel(Ok(4)), 4);
        assert_eq!(to_sentinel(Err(Error::InvalidInput)), INVALID);
        assert_eq!(
            to_sentinel(Err(Error::Allocation { rows: 9, cols: 9 })),
            INVALID
        );
    }
}
