//! Command implementations.

mod lex;
mod repl;
mod run;

pub use lex::lex_file;
pub use repl::repl;
pub use run::run_file;
