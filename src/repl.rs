use crate::eval::eval;
use crate::history::History;
use crate::tokenizer::tokenize;
use crate::types::EvalError;

/// Evaluates one input line as exactly one prefix expression.
pub fn eval_line(line: &str, history: &History) -> Result<f64, EvalError> {
    let tokens = tokenize(line);
    let (value, rest) = eval(&tokens, history)?;
    if !rest.is_empty() {
        return Err(EvalError::TrailingTokens(rest.join(" ")));
    }
    Ok(value)
}

/// Runs one line through the calculator and returns the line to display,
/// or `None` for blank input. A successful result is appended to the
/// history and reported as `<id>: <value>`; any failure reports the
/// uniform error line and leaves the history untouched.
pub fn run_line(line: &str, history: &mut History) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match eval_line(line, history) {
        Ok(value) => {
            let id = history.push(value);
            Some(format!("{}: {:?}", id, value))
        }
        Err(_) => Some("Error: Invalid Expression".to_string()),
    }
}
