use crate::history::History;
use crate::types::{classify, EvalError, TokenKind};

/// Evaluates one prefix expression from the front of `tokens`, returning its
/// value together with the tokens left over after it.
pub fn eval<'a>(
    tokens: &'a [String],
    history: &History,
) -> Result<(f64, &'a [String]), EvalError> {
    let (token, rest) = tokens.split_first().ok_or(EvalError::EmptyExpression)?;

    match classify(token) {
        TokenKind::HistoryRef => {
            let value = token[1..]
                .parse::<usize>()
                .ok()
                .and_then(|id| history.get(id))
                .ok_or_else(|| EvalError::InvalidReference(token.clone()))?;
            Ok((value, rest))
        }
        TokenKind::Number => {
            let value = token
                .parse::<f64>()
                .map_err(|_| EvalError::UnknownToken(token.clone()))?;
            Ok((value, rest))
        }
        TokenKind::Negate => {
            let (value, rest) = eval(rest, history)?;
            Ok((-value, rest))
        }
        op @ (TokenKind::Add | TokenKind::Mul | TokenKind::Div) => {
            let (lhs, rest) = eval(rest, history)?;
            let (rhs, rest) = eval(rest, history)?;
            let value = match op {
                TokenKind::Add => lhs + rhs,
                TokenKind::Mul => lhs * rhs,
                _ => div(lhs, rhs)?,
            };
            Ok((value, rest))
        }
        TokenKind::Unknown => Err(EvalError::UnknownToken(token.clone())),
    }
}

// Both operands truncate toward zero before dividing, so the quotient is an
// integer even for decimal literals. `checked_div` rejects a divisor that
// truncated to 0 as well as `i64::MIN / -1`, which the saturating float
// cast makes reachable from large literals.
fn div(lhs: f64, rhs: f64) -> Result<f64, EvalError> {
    if rhs == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    let (lhs, rhs) = (lhs.trunc() as i64, rhs.trunc() as i64);
    lhs.checked_div(rhs)
        .map(|quotient| quotient as f64)
        .ok_or(EvalError::DivisionByZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn eval_all(expr: &str, history: &History) -> Result<f64, EvalError> {
        let tokens = tokenize(expr);
        let (value, rest) = eval(&tokens, history)?;
        assert!(rest.is_empty(), "leftover tokens: {:?}", rest);
        Ok(value)
    }

    #[test]
    fn test_eval_literals() {
        let history = History::new();
        assert_eq!(eval_all("42", &history), Ok(42.0));
        assert_eq!(eval_all("-5", &history), Ok(-5.0));
        assert_eq!(eval_all("3.5", &history), Ok(3.5));
    }

    #[test]
    fn test_eval_binary_ops() {
        let history = History::new();
        assert_eq!(eval_all("+ 2 5", &history), Ok(7.0));
        assert_eq!(eval_all("* 3 4", &history), Ok(12.0));
        assert_eq!(eval_all("+ 1.5 2.25", &history), Ok(3.75));
    }

    #[test]
    fn test_eval_nested() {
        let history = History::new();
        assert_eq!(eval_all("+ * 2 3 4", &history), Ok(10.0));
        assert_eq!(eval_all("* + 1 2 + 3 4", &history), Ok(21.0));
    }

    #[test]
    fn test_eval_unary_minus() {
        let history = History::new();
        assert_eq!(eval_all("- 5", &history), Ok(-5.0));
        assert_eq!(eval_all("- + 2 3", &history), Ok(-5.0));
        assert_eq!(eval_all("- -5", &history), Ok(5.0));
    }

    #[test]
    fn test_eval_division_truncates_toward_zero() {
        let history = History::new();
        assert_eq!(eval_all("/ 7 2", &history), Ok(3.0));
        assert_eq!(eval_all("/ -7 2", &history), Ok(-3.0));
        assert_eq!(eval_all("/ 7 -2", &history), Ok(-3.0));
        assert_eq!(eval_all("/ 7.5 2", &history), Ok(3.0));
    }

    #[test]
    fn test_eval_division_by_zero() {
        let history = History::new();
        assert_eq!(eval_all("/ 5 0", &history), Err(EvalError::DivisionByZero));
        assert_eq!(
            eval_all("/ 5 0.5", &history),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            eval_all("/ 5 * 0 3", &history),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_eval_division_overflow() {
        // The literal saturates to i64::MIN, so dividing by -1 would
        // overflow rather than produce a quotient.
        let history = History::new();
        assert_eq!(
            eval_all("/ -99999999999999999999 -1", &history),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            eval_all("/ -99999999999999999999 2", &history),
            Ok((i64::MIN / 2) as f64)
        );
    }

    #[test]
    fn test_eval_history_refs() {
        let mut history = History::new();
        history.push(7.0);
        history.push(13.0);
        assert_eq!(eval_all("$1", &history), Ok(7.0));
        assert_eq!(eval_all("$2", &history), Ok(13.0));
        assert_eq!(eval_all("+ $1 6", &history), Ok(13.0));
        assert_eq!(eval_all("- $2", &history), Ok(-13.0));
    }

    #[test]
    fn test_eval_invalid_history_refs() {
        let mut history = History::new();
        history.push(7.0);
        assert_eq!(
            eval_all("$0", &history),
            Err(EvalError::InvalidReference("$0".to_string()))
        );
        assert_eq!(
            eval_all("$2", &history),
            Err(EvalError::InvalidReference("$2".to_string()))
        );
    }

    #[test]
    fn test_eval_malformed_input() {
        let history = History::new();
        assert_eq!(eval_all("", &history), Err(EvalError::EmptyExpression));
        assert_eq!(eval_all("+ 1", &history), Err(EvalError::EmptyExpression));
        assert_eq!(
            eval_all("-x", &history),
            Err(EvalError::UnknownToken("-x".to_string()))
        );
        assert_eq!(
            eval_all("(+ 1 2)", &history),
            Err(EvalError::UnknownToken("(".to_string()))
        );
    }
}
