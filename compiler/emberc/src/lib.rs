//! Ember CLI library: command implementations and the shared pipeline.
//!
//! Exit code conventions follow the classic interpreter drivers: 65 for
//! static (lex/parse/resolve) errors, 70 for a runtime error, 64 for
//! usage mistakes.

pub mod commands;
pub mod pipeline;
