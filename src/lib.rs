pub mod eval;
pub mod history;
pub mod repl;
pub mod tokenizer;
pub mod types;

pub use crate::eval::eval;
pub use crate::history::History;
pub use crate::repl::{eval_line, run_line};
pub use crate::tokenizer::tokenize;
pub use crate::types::{classify, EvalError, TokenKind};
