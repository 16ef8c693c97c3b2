//! Tracing setup: bootstrap with a default filter, reload once settings are parsed.

mod logger;
pub use logger::*;

pub use tracing::{debug, error, info, trace, warn};
