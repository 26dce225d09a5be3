//! Header numbering state machine.
//!
//! This module assigns dot-notation labels (e.g. `XXX.2.1`) to markdown
//! headers line by line. A single [`HeaderNumberer`] owns the counters for
//! one pass over a document; nothing is shared between numberers.

mod counters;
mod engine;
mod types;

pub use counters::CounterState;
pub use engine::{detect_header, strip_existing_label, HeaderNumberer};
pub use types::{FallbackBlockLine, Label, LineEnding, NumberedLine, RegularHeaderLine};
