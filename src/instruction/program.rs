use std::ops::Deref;

use super::Instruction;

/// A finished instruction stream, always terminated by a single `EndOfProgram`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Builds a program from real instructions, any `EndOfProgram` inside is dropped
    pub fn new(instructions: impl IntoIterator<Item = Instruction>) -> Program {
        let mut instructions: Vec<Instruction> = instructions
            .into_iter()
            .filter(|instruction| *instruction != Instruction::EndOfProgram)
            .collect();
        instructions.push(Instruction::EndOfProgram);

        Program { instructions }
    }

    pub fn empty() -> Program {
        Program::new([])
    }

    /// The instructions without the trailing sentinel
    pub fn body(&self) -> &[Instruction] {
        &self.instructions[..self.instructions.len() - 1]
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.len() == 1
    }
}

impl Deref for Program {
    type Target = [Instruction];

    fn deref(&self) -> &[Instruction] {
        &self.instructions
    }
}
