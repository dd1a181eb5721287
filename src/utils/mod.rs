//! Terminal presentation, progress, logging and OS helpers

pub mod logging;
pub mod progress;
pub mod reveal;
pub mod styling;

pub use logging::*;
pub use progress::*;
pub use reveal::*;
pub use styling::*;
