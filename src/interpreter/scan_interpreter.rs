use crate::instruction::Instruction;

use super::{InstructionSource, Runtime, RuntimeError};

/// Executes instructions one slot at a time, finding the matching bracket with
/// a linear scan every time a loop is skipped or repeated.
pub struct ScanInterpreter {}

impl ScanInterpreter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn run<S>(&mut self, runtime: &mut Runtime, source: &S) -> Result<(), RuntimeError>
    where
        S: InstructionSource + ?Sized,
    {
        let mut i = 0;
        loop {
            match source.fetch(i) {
                None => {}
                Some(Instruction::EndOfProgram) => break Ok(()),
                Some(Instruction::Increment) => runtime.deref_and_add_value(1),
                Some(Instruction::Decrement) => runtime.deref_and_sub_value(1),
                Some(Instruction::MoveLeft) => runtime.shift_data_pointer(-1)?,
                Some(Instruction::MoveRight) => runtime.shift_data_pointer(1)?,
                Some(Instruction::Output) => runtime.write()?,
                Some(Instruction::Input) => runtime.read()?,
                Some(Instruction::LoopStart) => {
                    if runtime.value_is_zero() {
                        i = Self::scan_forward(source, i)?;
                    }
                }
                Some(Instruction::LoopEnd) => {
                    if !runtime.value_is_zero() {
                        i = Self::scan_backward(source, i)?;
                    }
                }
            }
            // after a jump this steps past the matching bracket
            i += 1;
        }
    }

    /// Index of the `LoopEnd` closing the `LoopStart` at `start`
    fn scan_forward<S>(source: &S, start: usize) -> Result<usize, RuntimeError>
    where
        S: InstructionSource + ?Sized,
    {
        let mut loop_depth = 0usize;
        let mut i = start + 1;
        loop {
            match source.fetch(i) {
                Some(Instruction::EndOfProgram) => {
                    break Err(RuntimeError::UnbalancedBrackets { position: start })
                }
                Some(Instruction::LoopStart) => loop_depth += 1,
                Some(Instruction::LoopEnd) if loop_depth == 0 => break Ok(i),
                Some(Instruction::LoopEnd) => loop_depth -= 1,
                _ => {}
            }
            i += 1;
        }
    }

    /// Index of the `LoopStart` opening the `LoopEnd` at `end`
    fn scan_backward<S>(source: &S, end: usize) -> Result<usize, RuntimeError>
    where
        S: InstructionSource + ?Sized,
    {
        let mut loop_depth = 0usize;
        let mut i = end;
        loop {
            if i == 0 {
                break Err(RuntimeError::UnbalancedBrackets { position: end });
            }
            i -= 1;

            match source.fetch(i) {
                Some(Instruction::LoopEnd) => loop_depth += 1,
                Some(Instruction::LoopStart) if loop_depth == 0 => break Ok(i),
                Some(Instruction::LoopStart) => loop_depth -= 1,
                _ => {}
            }
        }
    }
}

impl Default for ScanInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::Program;
    use Instruction::*;

    fn run(program: &Program, input: &[u8]) -> (Result<(), RuntimeError>, Vec<u8>, Vec<u8>) {
        let mut output = vec![];
        let (result, tape) = {
            let mut runtime = Runtime::new(256, Box::new(input), Box::new(&mut output));
            let result = ScanInterpreter::new().run(&mut runtime, &program[..]);
            (result, runtime.tape().to_vec())
        };
        (result, tape, output)
    }

    #[test]
    fn prints_three() {
        let program = Program::new([Increment, Increment, Increment, Output]);
        let (result, _, output) = run(&program, b"");
        assert!(result.is_ok());
        assert_eq!(output, vec![3]);
    }

    #[test]
    fn echo() {
        let program = Program::new([Input, Output]);
        let (result, _, output) = run(&program, b"A");
        assert!(result.is_ok());
        assert_eq!(output, b"A");
    }

    #[test]
    fn loop_clears_cell() {
        let mut instructions = vec![Increment; 5];
        instructions.extend([LoopStart, Decrement, LoopEnd]);
        let (result, tape, _) = run(&Program::new(instructions), b"");
        assert!(result.is_ok());
        assert_eq!(tape[0], 0);
    }

    #[test]
    fn zero_cell_skips_nested_loops() {
        // [ [ + ] + ] +
        let program = Program::new([
            LoopStart, LoopStart, Increment, LoopEnd, Increment, LoopEnd, Increment, Output,
        ]);
        let (result, _, output) = run(&program, b"");
        assert!(result.is_ok());
        assert_eq!(output, vec![1]);
    }

    #[test]
    fn unmatched_start_only_fails_when_skipped() {
        let skipped = Program::new([LoopStart, Increment]);
        assert!(matches!(
            run(&skipped, b"").0,
            Err(RuntimeError::UnbalancedBrackets { position: 0 })
        ));

        let entered = Program::new([Increment, LoopStart, Output]);
        let (result, _, output) = run(&entered, b"");
        assert!(result.is_ok());
        assert_eq!(output, vec![1]);
    }

    #[test]
    fn unmatched_end_only_fails_when_taken() {
        let taken = Program::new([Increment, LoopEnd]);
        assert!(matches!(
            run(&taken, b"").0,
            Err(RuntimeError::UnbalancedBrackets { position: 1 })
        ));

        let falls_through = Program::new([LoopEnd, Increment, Output]);
        assert!(run(&falls_through, b"").0.is_ok());
    }

    #[test]
    fn move_left_at_start() {
        let program = Program::new([MoveLeft, Increment, Output]);
        let (result, _, output) = run(&program, b"");
        assert!(matches!(result, Err(RuntimeError::DataPointerOutOfRange)));
        assert!(output.is_empty());
    }
}
