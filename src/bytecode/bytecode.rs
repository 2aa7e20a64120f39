use crate::instruction::Instruction;

use super::ByteCode;

/// Lowers instructions up to `EndOfProgram` into bytecode, one op per instruction.
///
/// Brackets are paired with a stack, which is the same pairing the run time
/// scan finds. Brackets left without a partner keep a `None` target so the
/// interpreter only fails if it actually needs to take that jump.
pub fn to_bytecode(program: &[Instruction]) -> Vec<ByteCode> {
    let mut instructions = vec![];
    let mut open_loops = vec![];

    for instruction in program.iter() {
        match instruction {
            Instruction::Increment => instructions.push(ByteCode::DerefIncrement),
            Instruction::Decrement => instructions.push(ByteCode::DerefDecrement),
            Instruction::MoveLeft => instructions.push(ByteCode::ShiftLeft),
            Instruction::MoveRight => instructions.push(ByteCode::ShiftRight),
            Instruction::Output => instructions.push(ByteCode::Write),
            Instruction::Input => instructions.push(ByteCode::Read),
            Instruction::LoopStart => {
                // patched once we find the end
                open_loops.push(instructions.len());
                instructions.push(ByteCode::JumpForwardsIfZero(None));
            }
            Instruction::LoopEnd => {
                let start = open_loops.pop();
                if let Some(start) = start {
                    instructions[start] = ByteCode::JumpForwardsIfZero(Some(instructions.len()));
                }
                instructions.push(ByteCode::JumpBackwardsIfNonZero(start));
            }
            Instruction::EndOfProgram => break,
        }
    }

    instructions
}
