//! # Grammar Rules
//!
//! The grammar of the hotline dialogue language - a deliberately small subset
//! of English made of statements, yes/no questions, "who" and "what" questions,
//! and a closing exclamation.
//!
//! This crate only knows how to turn a raw line into a structured [`Sentence`].
//! It holds no dialogue state and does not answer anything.
//!
//! ## Core Components
//!
//! - **lexicon**: The grammar tables (negating words, question openers, ...)
//! - **tokenizer**: Splits a line into punctuation-stripped words
//! - **words**: Subject, predicate and object entities with their matching rules
//! - **sentence**: The sentence sum type and the grammar parser

pub mod error;
pub mod lexicon;
pub mod sentence;
pub mod tokenizer;
pub mod words;

pub use error::*;
pub use lexicon::*;
pub use sentence::*;
pub use tokenizer::*;
pub use words::*;
