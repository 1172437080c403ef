//! # Dialogue Core
//!
//! The engine behind the hotline: it reads dialogues written in the
//! `grammar_rules` language, remembers what was stated, notices when a
//! dialogue contradicts itself and answers the questions asked.
//!
//! ## Core Components
//!
//! - **knowledge_base**: The per-dialogue fact store, its query language and
//!   the contradiction detector
//! - **answerer**: The true/false, who and what answer algorithms
//! - **formatter**: Sentence joining, English lists and the I/you swap
//! - **session**: The state of one dialogue
//! - **driver**: Runs a whole input of dialogues into a transcript
//!
//! ## Example
//!
//! ```
//! use dialogue_core::{run_dialogues, Config, TextTranscript};
//!
//! let input = "1\nI code in Python.\nDo I code in Python?\nBye!\n";
//! let mut transcript = TextTranscript::new(Vec::new());
//! run_dialogues(&Config::default(), input.as_bytes(), &mut transcript).unwrap();
//!
//! let output = String::from_utf8(transcript.into_inner()).unwrap();
//! assert!(output.contains("yes, you code in Python."));
//! ```

pub mod answerer;
pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod formatter;
pub mod knowledge_base;
pub mod session;
pub mod transcript;

pub use answerer::*;
pub use config::*;
pub use driver::*;
pub use error::*;
pub use knowledge_base::*;
pub use session::*;
pub use transcript::*;
