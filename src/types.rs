use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum EvalError {
    #[error("empty expression")]
    EmptyExpression,
    #[error("unknown token `{0}`")]
    UnknownToken(String),
    #[error("trailing tokens after expression: {0}")]
    TrailingTokens(String),
    #[error("invalid history reference `{0}`")]
    InvalidReference(String),
    #[error("division by zero")]
    DivisionByZero,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    HistoryRef,
    Number,
    Negate,
    Add,
    Mul,
    Div,
    Unknown,
}

/// Classifies a token by the first matching pattern, in order: history
/// reference, number literal, unary minus, binary operator, anything else.
pub fn classify(token: &str) -> TokenKind {
    if is_history_ref(token) {
        TokenKind::HistoryRef
    } else if is_number(token) {
        TokenKind::Number
    } else {
        match token {
            "-" => TokenKind::Negate,
            "+" => TokenKind::Add,
            "*" => TokenKind::Mul,
            "/" => TokenKind::Div,
            _ => TokenKind::Unknown,
        }
    }
}

// `$` followed by one or more digits, nothing else.
fn is_history_ref(token: &str) -> bool {
    match token.strip_prefix('$') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

// Optional leading `-`, digits, then optionally `.` and more digits.
fn is_number(token: &str) -> bool {
    let unsigned = token.strip_prefix('-').unwrap_or(token);
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(i) => (&unsigned[..i], Some(&unsigned[i + 1..])),
        None => (unsigned, None),
    };
    !int_part.is_empty()
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.map_or(true, |f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
}
