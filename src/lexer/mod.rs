use thiserror::Error;

use crate::instruction::Program;

use self::lexer::Lexer;

pub mod lexer;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("unknown lexeme '{lexeme}' at {line}:{column}")]
    UnknownLexeme {
        lexeme: String,
        line: usize,
        column: usize,
    },

    #[error("unknown lexeme '{symbol}' at {line}:{column}")]
    UnknownCharacter {
        symbol: char,
        line: usize,
        column: usize,
    },

    #[error("unclosed comment starting at {line}:{column}")]
    UnclosedComment { line: usize, column: usize },
}

/// Lex mnemonic source into a program, stopping at the first error
pub fn lex(src: &str) -> Result<Program, LexerError> {
    Lexer::new(src).collect_results()
}
