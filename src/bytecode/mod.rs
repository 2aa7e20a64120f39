pub mod bytecode;

pub use bytecode::to_bytecode;

/// The instruction set with every loop's partner resolved up front
#[derive(Clone, Debug, PartialEq)]
pub enum ByteCode {
    /// Increment the value at the data pointer
    DerefIncrement,

    /// Decrement the value at the data pointer
    DerefDecrement,

    /// Move the data pointer one cell left
    ShiftLeft,

    /// Move the data pointer one cell right
    ShiftRight,

    /// Read a byte into the heap at the data pointer
    Read,

    /// Write the byte at the data pointer
    Write,

    /// Jump to the matching `JumpBackwardsIfNonZero` if zero, `None` when there is no match
    JumpForwardsIfZero(Option<usize>),

    /// Jump to the matching `JumpForwardsIfZero` if non-zero, `None` when there is no match
    JumpBackwardsIfNonZero(Option<usize>),
}
