use crate::bytecode::ByteCode;

use super::{Runtime, RuntimeError};

/// Runs bytecode with precomputed jump targets.
/// Behaves exactly like the scan interpreter, including on unbalanced loops.
pub struct ByteCodeInterpreter {}

impl ByteCodeInterpreter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn run(&mut self, runtime: &mut Runtime, instructions: &[ByteCode]) -> Result<(), RuntimeError> {
        let mut pc = 0;
        while pc < instructions.len() {
            match &instructions[pc] {
                ByteCode::DerefIncrement => runtime.deref_and_add_value(1),
                ByteCode::DerefDecrement => runtime.deref_and_sub_value(1),
                ByteCode::ShiftLeft => runtime.shift_data_pointer(-1)?,
                ByteCode::ShiftRight => runtime.shift_data_pointer(1)?,
                ByteCode::Read => runtime.read()?,
                ByteCode::Write => runtime.write()?,
                ByteCode::JumpForwardsIfZero(target) => {
                    if runtime.value_is_zero() {
                        pc = target.ok_or(RuntimeError::UnbalancedBrackets { position: pc })?;
                    }
                }
                ByteCode::JumpBackwardsIfNonZero(target) => {
                    if !runtime.value_is_zero() {
                        pc = target.ok_or(RuntimeError::UnbalancedBrackets { position: pc })?;
                    }
                }
            }
            // a jump lands on the partner bracket, so this steps past it
            pc += 1;
        }

        Ok(())
    }
}

impl Default for ByteCodeInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bytecode::to_bytecode, instruction::Program, lexer::lex};

    fn run(program: &Program) -> (Result<(), RuntimeError>, Vec<u8>) {
        let mut output = vec![];
        let result = {
            let mut runtime = Runtime::new(256, Box::new(&b""[..]), Box::new(&mut output));
            ByteCodeInterpreter::new().run(&mut runtime, &to_bytecode(program))
        };
        (result, output)
    }

    #[test]
    fn nested_loop_multiplies() {
        // 3 * 4 into the second cell
        let program = lex(
            "increment increment increment
             startloop right increment increment increment increment left decrement endloop
             right output",
        )
        .unwrap();

        let (result, output) = run(&program);
        assert!(result.is_ok());
        assert_eq!(output, vec![12]);
    }

    #[test]
    fn unbalanced_positions_match_the_scan() {
        let skipped = lex("startloop increment").unwrap();
        assert!(matches!(
            run(&skipped).0,
            Err(RuntimeError::UnbalancedBrackets { position: 0 })
        ));

        let taken = lex("increment endloop").unwrap();
        assert!(matches!(
            run(&taken).0,
            Err(RuntimeError::UnbalancedBrackets { position: 1 })
        ));

        let falls_through = lex("endloop increment startloop output").unwrap();
        let (result, output) = run(&falls_through);
        assert!(result.is_ok());
        assert_eq!(output, vec![1]);
    }
}
