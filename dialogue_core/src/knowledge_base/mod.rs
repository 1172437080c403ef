//! Knowledge Base module - the facts asserted during one dialogue.
//!
//! - **Facts**: Parsed statements, stored in the order they were asserted
//! - **Queries**: Partial matches over a fact's subject, predicate, object and polarity
//! - **Contradictions**: A claim asserted with both polarities

mod contradiction;
mod fact;
mod query;
mod store;

pub use contradiction::*;
pub use fact::*;
pub use query::*;
pub use store::*;
