pub mod distance_matrix;
pub mod edit_distance;
pub mod sentinel;
pub mod trace;

// Re-export the edit distance routines with descriptive names
pub use distance_matrix::DistanceMatrix;
pub use edit_distance::{
    damerau_levenshtein_chars, damerau_levenshtein_distance, damerau_levenshtein_distance_with,
    damerau_levenshtein_elements, damerau_levenshtein_matrix, damerau_levenshtein_traced,
    levenshtein_chars, levenshtein_distance, levenshtein_elements, levenshtein_matrix,
    levenshtein_traced, try_damerau_levenshtein, try_levenshtein, DamerauBoundary,
};
pub use trace::{CellObserver, CellTrace, LogObserver, NoopObserver};
