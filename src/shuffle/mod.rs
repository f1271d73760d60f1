pub mod permutation;
pub mod shuffle;
pub mod subset;

// Re-export
pub use self::{
    permutation::Permutation,
    shuffle::{shuffle_commitments, ShuffleRecord},
    subset::subset_check,
};
