pub mod cs;
pub mod error;
pub mod fixture;

pub use cs::dynamic::{self, sentinel};
pub use cs::dynamic::{
    damerau_levenshtein_chars, damerau_levenshtein_distance, damerau_levenshtein_distance_with,
    damerau_levenshtein_elements, damerau_levenshtein_matrix, damerau_levenshtein_traced,
    levenshtein_chars, levenshtein_distance, levenshtein_elements, levenshtein_matrix,
    levenshtein_traced, try_damerau_levenshtein, try_levenshtein, CellObserver, CellTrace,
    DamerauBoundary, DistanceMatrix, LogObserver, NoopObserver,
};
pub use error::{Error, Result};
