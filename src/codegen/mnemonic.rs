use crate::instruction::Instruction;

use super::{CodeGen, EmitBuffer};

/// Renders the word dialect, each reserved word followed by a space
pub struct MnemonicCodeGen;

impl CodeGen for MnemonicCodeGen {
    fn instruction(&self, out: &mut EmitBuffer, instruction: Instruction) {
        if let Some(word) = instruction.mnemonic() {
            out.push_str(word);
            out.push(' ');
        }
    }

    fn epilogue(&self, out: &mut EmitBuffer) {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{codegen::generate, parser::parse_symbolic};

    #[test]
    fn words_with_trailing_spaces() {
        let program = parse_symbolic("+[-]>,.<");
        assert_eq!(
            generate(&MnemonicCodeGen, &program),
            "increment startloop decrement endloop right input output left \n"
        );
    }

    #[test]
    fn empty_program() {
        assert_eq!(generate(&MnemonicCodeGen, &parse_symbolic("")), "\n");
    }
}
