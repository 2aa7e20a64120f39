use std::str::Chars;

use crate::instruction::{Instruction, Program};

pub struct Parser<'a> {
    chars: Chars<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str) -> Parser<'a> {
        Parser { chars: src.chars() }
    }

    /// The next real instruction, or `EndOfProgram` once the text runs out
    pub fn next_instruction(&mut self) -> Instruction {
        self.chars
            .by_ref()
            // every other character is a comment
            .find_map(Instruction::from_symbol)
            .unwrap_or(Instruction::EndOfProgram)
    }

    pub fn parse_program(&mut self) -> Program {
        let mut instructions = vec![];
        loop {
            match self.next_instruction() {
                Instruction::EndOfProgram => break Program::new(instructions),
                instruction => instructions.push(instruction),
            }
        }
    }
}
