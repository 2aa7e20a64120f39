pub mod program;

pub use program::Program;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    // `increment` / `+`: Increment the byte at the `data pointer` by one
    Increment,
    // `decrement` / `-`: Decrement the byte at the `data pointer` by one
    Decrement,

    // `left` / `<`: Move the `data pointer` one cell to the left
    MoveLeft,
    // `right` / `>`: Move the `data pointer` one cell to the right, growing the tape if needed
    MoveRight,

    // `output` / `.`: Write the byte at the `data pointer` to the `output device`
    Output,
    // `input` / `,`: Read the next byte from the `input device` and write it to the `data pointer`
    Input,

    // `startloop` / `[`: If the byte at the `data pointer` is zero, jump forward past the matching `endloop`
    LoopStart,
    // `endloop` / `]`: If the byte at the `data pointer` is non-zero, jump back past the matching `startloop`
    LoopEnd,

    // End of program: no more instructions left
    EndOfProgram,
}

impl Instruction {
    /// Every real instruction, in canonical order
    pub const ALL: [Instruction; 8] = [
        Instruction::Increment,
        Instruction::Decrement,
        Instruction::MoveLeft,
        Instruction::MoveRight,
        Instruction::Output,
        Instruction::Input,
        Instruction::LoopStart,
        Instruction::LoopEnd,
    ];

    /// The reserved word in the mnemonic dialect
    pub fn mnemonic(&self) -> Option<&'static str> {
        match self {
            Instruction::Increment => Some("increment"),
            Instruction::Decrement => Some("decrement"),
            Instruction::MoveLeft => Some("left"),
            Instruction::MoveRight => Some("right"),
            Instruction::Output => Some("output"),
            Instruction::Input => Some("input"),
            Instruction::LoopStart => Some("startloop"),
            Instruction::LoopEnd => Some("endloop"),
            Instruction::EndOfProgram => None,
        }
    }

    /// The single character in the symbolic dialect
    pub fn symbol(&self) -> Option<char> {
        match self {
            Instruction::Increment => Some('+'),
            Instruction::Decrement => Some('-'),
            Instruction::MoveLeft => Some('<'),
            Instruction::MoveRight => Some('>'),
            Instruction::Output => Some('.'),
            Instruction::Input => Some(','),
            Instruction::LoopStart => Some('['),
            Instruction::LoopEnd => Some(']'),
            Instruction::EndOfProgram => None,
        }
    }

    pub fn from_mnemonic(word: &str) -> Option<Instruction> {
        Instruction::ALL
            .into_iter()
            .find(|instruction| instruction.mnemonic() == Some(word))
    }

    /// Anything that isn't one of the 8 symbols is a comment in the symbolic dialect
    pub fn from_symbol(c: char) -> Option<Instruction> {
        match c {
            '+' => Some(Instruction::Increment),
            '-' => Some(Instruction::Decrement),
            '<' => Some(Instruction::MoveLeft),
            '>' => Some(Instruction::MoveRight),
            '.' => Some(Instruction::Output),
            ',' => Some(Instruction::Input),
            '[' => Some(Instruction::LoopStart),
            ']' => Some(Instruction::LoopEnd),
            _ => None,
        }
    }
}
