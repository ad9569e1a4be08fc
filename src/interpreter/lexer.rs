use logos::Logos;

/// Represents a lexical token of a polynomial expression.
///
/// Expressions are not parsed into a tree: the evaluator splits them on
/// operator characters. The lexer only exists to normalize the whitespace
/// around those characters, so every input character belongs to some token
/// and lexing never fails.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Runs of spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
    /// Anything else: names, numbers, function names.
    #[regex(r"[^ \t\r\n\f+\-*/%^,()]+")]
    Text,
}

/// Normalizes the whitespace of an expression.
///
/// Whitespace next to an operator, a comma or a parenthesis is removed,
/// whitespace between two text runs collapses to a single space, and
/// leading and trailing whitespace is dropped. Applying it twice is the same
/// as applying it once.
///
/// # Example
/// ```
/// use polycalc::interpreter::lexer::normalize;
///
/// assert_eq!(normalize("  p1 +  p2 "), "p1+p2");
/// assert_eq!(normalize("gcd( a , b * 2 )"), "gcd(a,b*2)");
/// assert_eq!(normalize("1   2\t3"), "1 2 3");
/// ```
#[must_use]
pub fn normalize(expression: &str) -> String {
    let tokens = Token::lexer(expression).spanned()
                                         .map(|(token, span)| {
                                             (token.unwrap_or(Token::Text), &expression[span])
                                         })
                                         .collect::<Vec<_>>();

    let is_text = |i: usize| tokens.get(i).is_some_and(|(token, _)| *token == Token::Text);

    let mut normalized = String::with_capacity(expression.len());
    for (i, (token, slice)) in tokens.iter().enumerate() {
        if *token == Token::Whitespace {
            if i > 0 && is_text(i - 1) && is_text(i + 1) {
                normalized.push(' ');
            }
        } else {
            normalized.push_str(slice);
        }
    }

    normalized
}
