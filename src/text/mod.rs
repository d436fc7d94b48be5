//! Text primitives: normalization, accent folding and filler removal.

pub mod noise;
pub mod normalize;

pub use noise::NoiseFilter;
pub use normalize::{
    FoldedText, collapse_repeated_words, fold, is_trailing_punct, normalize, word_tokens,
};
