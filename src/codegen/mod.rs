pub mod c;
pub mod mnemonic;
pub mod symbolic;

use crate::instruction::Instruction;

pub use self::{c::CCodeGen, mnemonic::MnemonicCodeGen, symbolic::SymbolicCodeGen};

const INITIAL_CAPACITY: usize = 512;

/// Append-only text buffer for emitted code.
/// When a chunk doesn't fit the capacity becomes `2 * capacity + chunk.len()`.
#[derive(Debug)]
pub struct EmitBuffer {
    text: String,
}

impl EmitBuffer {
    pub fn new() -> Self {
        Self {
            text: String::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub fn push_str(&mut self, chunk: &str) {
        if self.text.len() + chunk.len() > self.text.capacity() {
            let grown = self.text.capacity() * 2 + chunk.len();
            self.text.reserve_exact(grown - self.text.len());
        }
        self.text.push_str(chunk);
    }

    pub fn push(&mut self, c: char) {
        self.push_str(c.encode_utf8(&mut [0; 4]));
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.text.capacity()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl Default for EmitBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// A backend rendering a program into one of the textual dialects
pub trait CodeGen {
    fn prologue(&self, _out: &mut EmitBuffer) {}

    /// Never called with `EndOfProgram`
    fn instruction(&self, out: &mut EmitBuffer, instruction: Instruction);

    fn epilogue(&self, _out: &mut EmitBuffer) {}
}

/// Renders every instruction up to `EndOfProgram` through `backend`
pub fn generate<G: CodeGen + ?Sized>(backend: &G, program: &[Instruction]) -> String {
    let mut out = EmitBuffer::new();

    backend.prologue(&mut out);
    for instruction in program
        .iter()
        .take_while(|instruction| **instruction != Instruction::EndOfProgram)
    {
        backend.instruction(&mut out, *instruction);
    }
    backend.epilogue(&mut out);

    out.into_string()
}
