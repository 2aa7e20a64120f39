use crate::instruction::Instruction;

use super::{CodeGen, EmitBuffer};

pub struct SymbolicCodeGen;

impl CodeGen for SymbolicCodeGen {
    fn instruction(&self, out: &mut EmitBuffer, instruction: Instruction) {
        if let Some(symbol) = instruction.symbol() {
            out.push(symbol);
        }
    }

    fn epilogue(&self, out: &mut EmitBuffer) {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{codegen::generate, lexer::lex};

    #[test]
    fn one_symbol_per_instruction() {
        let program = lex("increment startloop decrement endloop // clear\nright input output left").unwrap();
        assert_eq!(generate(&SymbolicCodeGen, &program), "+[-]>,.<\n");
    }

    #[test]
    fn empty_program() {
        assert_eq!(generate(&SymbolicCodeGen, &lex("").unwrap()), "\n");
    }
}
