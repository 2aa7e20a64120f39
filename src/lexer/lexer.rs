use crate::instruction::{Instruction, Program};

use super::LexerError;

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /** Human Readable positions in file */
    pub cur_line: usize,
    pub cur_col: usize,

    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(chars: &'a str) -> Lexer<'a> {
        Lexer {
            cur_col: 1,
            cur_line: 1,

            chars: chars.chars().peekable(),
        }
    }

    fn transform_to_type(&self, lexeme: String, line: usize, column: usize) -> Result<Instruction, LexerError> {
        Instruction::from_mnemonic(&lexeme).ok_or(LexerError::UnknownLexeme {
            lexeme,
            line,
            column,
        })
    }

    fn consume_char(&mut self) -> Option<char> {
        match self.chars.next() {
            Some(c) => {
                self.cur_col += 1;
                if c == '\n' {
                    self.cur_line += 1;
                    self.cur_col = 1;
                }
                Some(c)
            }
            None => None,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.chars.peek() {
            // C's isspace set, unicode spaces are unknown lexemes
            if !(c.is_ascii_whitespace() || *c == '\x0b') {
                break;
            }
            self.consume_char();
        }
    }

    /// Skips a `// line` or `/* block */` comment, the leading `/` hasn't been consumed yet
    fn skip_comment(&mut self) -> Result<(), LexerError> {
        let (line, column) = (self.cur_line, self.cur_col);
        self.consume_char();

        match self.chars.peek() {
            Some('/') => {
                // the newline is left for skip_whitespace, running into EOF is fine here
                while let Some(c) = self.chars.peek() {
                    if *c == '\n' {
                        break;
                    }
                    self.consume_char();
                }
                Ok(())
            }
            Some('*') => {
                self.consume_char();
                loop {
                    match self.consume_char() {
                        Some('*') if self.chars.peek() == Some(&'/') => {
                            self.consume_char();
                            break Ok(());
                        }
                        Some(_) => continue,
                        None => break Err(LexerError::UnclosedComment { line, column }),
                    }
                }
            }
            _ => Err(LexerError::UnknownCharacter {
                symbol: '/',
                line,
                column,
            }),
        }
    }

    pub fn next_token(&mut self) -> Result<Instruction, LexerError> {
        loop {
            self.skip_whitespace();

            let (line, column) = (self.cur_line, self.cur_col);
            match self.chars.peek() {
                None => return Ok(Instruction::EndOfProgram),
                Some('/') => self.skip_comment()?,
                Some(c) if c.is_ascii_alphabetic() => {
                    let mut lexeme = String::new();
                    while let Some(c) = self.chars.peek() {
                        if !c.is_ascii_alphabetic() {
                            break;
                        }
                        lexeme.push(*c);
                        self.consume_char();
                    }

                    return self.transform_to_type(lexeme, line, column);
                }
                Some(c) => {
                    return Err(LexerError::UnknownCharacter {
                        symbol: *c,
                        line,
                        column,
                    })
                }
            }
        }
    }

    pub fn collect_results(&mut self) -> Result<Program, LexerError> {
        let mut v = vec![];
        loop {
            match self.next_token() {
                Ok(Instruction::EndOfProgram) => return Ok(Program::new(v)),
                Err(e) => return Err(e),
                Ok(tok) => v.push(tok),
            }
        }
    }
}
