use logos::Logos;

use crate::ast::Operator;

/// Represents a lexical token of a one-line calculator input.
///
/// Operator codes get their own tokens. Everything else that is not
/// whitespace is a [`Token::Word`]; operands are words and are validated later
/// by the evaluator. Since the lexer prefers the longest match, `-5` is a
/// single word and not a minus sign followed by `5`.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// `+`, `add`, `plus`
    #[token("+")]
    #[token("add", ignore(ascii_case))]
    #[token("plus", ignore(ascii_case))]
    Add,
    /// `-`, `sub`, `subtract`, `minus`
    #[token("-")]
    #[token("sub", ignore(ascii_case))]
    #[token("subtract", ignore(ascii_case))]
    #[token("minus", ignore(ascii_case))]
    Sub,
    /// `*`, `x`, `mul`, `multiply`, `times`
    #[token("*")]
    #[token("x")]
    #[token("X")]
    #[token("mul", ignore(ascii_case))]
    #[token("multiply", ignore(ascii_case))]
    #[token("times", ignore(ascii_case))]
    Mul,
    /// `/`, `div`, `divide`
    #[token("/")]
    #[token("div", ignore(ascii_case))]
    #[token("divide", ignore(ascii_case))]
    Div,
    /// `max`, `maximum`
    #[token("max", ignore(ascii_case))]
    #[token("maximum", ignore(ascii_case))]
    Max,
    /// `min`, `minimum`
    #[token("min", ignore(ascii_case))]
    #[token("minimum", ignore(ascii_case))]
    Min,
    /// Any other run of non-whitespace characters, such as `3.5` or `abc`.
    /// Operator tokens of the same length take precedence.
    #[regex(r"[^ \t\r\n\f]+", priority = 1)]
    Word,
}

impl Token {
    /// Returns the operator this token selects, or `None` for a word.
    ///
    /// # Example
    /// ```
    /// use arith_eval::{ast::Operator, interpreter::lexer::Token};
    ///
    /// assert_eq!(Token::Max.operator(), Some(Operator::Max));
    /// assert_eq!(Token::Word.operator(), None);
    /// ```
    #[must_use]
    pub const fn operator(self) -> Option<Operator> {
        match self {
            Self::Add => Some(Operator::Add),
            Self::Sub => Some(Operator::Sub),
            Self::Mul => Some(Operator::Mul),
            Self::Div => Some(Operator::Div),
            Self::Max => Some(Operator::Max),
            Self::Min => Some(Operator::Min),
            Self::Word => None,
        }
    }
}

/// Splits a line into tokens, each paired with the slice it was read from.
///
/// The catch-all word pattern accepts every non-whitespace character, so no
/// input produces a lexing error; unexpected results are left to the parser
/// and the evaluator.
///
/// # Example
/// ```
/// use arith_eval::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("-3 minus 4");
/// assert_eq!(tokens, vec![(Token::Word, "-3"), (Token::Sub, "minus"), (Token::Word, "4")]);
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<(Token, &str)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        let token = token.unwrap_or(Token::Word);
        tokens.push((token, lexer.slice()));
    }

    tracing::trace!(line, count = tokens.len(), "tokenized input");
    tokens
}
