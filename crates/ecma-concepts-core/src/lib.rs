//! Core of `ecma-concepts`: two ways of writing the same arithmetic, a
//! sequence with a hole in it, and the transcript that ties them together.
//!
//! ```
//! use ecma_concepts_core::{Style, Transcript};
//!
//! let transcript = Transcript::build(&Style::default());
//! assert_eq!(transcript.lines(), ["3", "7", "20", "1 undefined 2"]);
//! ```

pub mod arith;
pub mod sequence;
pub mod transcript;

pub use arith::{add, arrow_add, implicit_arrow_multiply, multiply};
pub use sequence::{ABSENT, SparseSeq, Slot};
pub use transcript::{Style, Transcript};
