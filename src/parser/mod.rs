use crate::{
    instruction::{Instruction, Program},
    interpreter::InstructionSource,
};

pub mod parser;

/// Symbolic source read directly, one byte per slot.
///
/// Bytes that aren't one of the 8 symbols are comments and execute as no-ops,
/// so no instruction array is ever built.
pub struct SymbolicSource<'a> {
    bytes: &'a [u8],
}

impl<'a> SymbolicSource<'a> {
    pub fn new(src: &'a str) -> SymbolicSource<'a> {
        SymbolicSource {
            bytes: src.as_bytes(),
        }
    }
}

impl InstructionSource for SymbolicSource<'_> {
    fn fetch(&self, index: usize) -> Option<Instruction> {
        match self.bytes.get(index) {
            // multi-byte utf-8 sequences never contain ascii bytes so this is safe to do bytewise
            Some(byte) => Instruction::from_symbol(*byte as char),
            None => Some(Instruction::EndOfProgram),
        }
    }
}

/// Parse symbolic source into a program, dropping comments
pub fn parse_symbolic(src: &str) -> Program {
    parser::Parser::new(src).parse_program()
}
