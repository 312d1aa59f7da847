/// Splits an input line into string tokens, left to right.
///
/// Whitespace separates tokens and is never itself a token. `+`, `*`, `/`,
/// `(` and `)` are emitted as single-character tokens on sight. Every other
/// character, `-` and `$` included, accumulates into the pending token, so
/// `-5` stays one token while a bare `-` surfaces on its own and `-x` comes
/// out as the single malformed token `-x`.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens: Vec<String> = vec![];
    let mut pending = String::new();

    for c in line.chars() {
        match c {
            c if c.is_whitespace() => {
                if !pending.is_empty() {
                    tokens.push(std::mem::take(&mut pending));
                }
            }
            '+' | '*' | '/' | '(' | ')' => {
                if !pending.is_empty() {
                    tokens.push(std::mem::take(&mut pending));
                }
                tokens.push(c.to_string());
            }
            _ => pending.push(c),
        }
    }
    if !pending.is_empty() {
        tokens.push(pending);
    }
    tokens
}
