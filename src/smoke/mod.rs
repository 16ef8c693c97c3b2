//! Manual smoke checks against the transcription/user API. The service
//! itself lives elsewhere; these commands only poke it and print what came
//! back.

mod client;
pub use client::*;

mod checks;
pub use checks::*;
