pub mod bytecode_interpreter;
pub mod scan_interpreter;

use std::io::{self, ErrorKind, Read, Write};

use clap::ValueEnum;
use thiserror::Error;

use crate::instruction::Instruction;

pub const DEFAULT_TAPE_SIZE: usize = 256;

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("data pointer out of range")]
    DataPointerOutOfRange,

    #[error("unbalanced brackets (loop at instruction {position})")]
    UnbalancedBrackets { position: usize },

    #[error("io error: {0}")]
    Io(
        #[from]
        io::Error,
    ),
}

/// What `input` stores in the current cell once the input stream is exhausted
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EofBehavior {
    /// Store 0
    #[default]
    Zero,
    /// Leave the cell as it was
    Unchanged,
    /// Store 255, what C's `getchar()` leaves in a byte
    Max,
}

/// Anything the scan interpreter can step through one slot at a time
pub trait InstructionSource {
    /// The instruction in slot `index`, `None` for slots that do nothing
    /// Every index at or past the end yields `EndOfProgram`
    fn fetch(&self, index: usize) -> Option<Instruction>;
}

impl InstructionSource for [Instruction] {
    fn fetch(&self, index: usize) -> Option<Instruction> {
        Some(self.get(index).copied().unwrap_or(Instruction::EndOfProgram))
    }
}

pub struct Runtime<'io> {
    /// Pointer into the tape
    data_pointer: usize,

    /// Our growable tape, the length is always a power of two
    tape: Vec<u8>,
    initial_size: usize,

    eof_behavior: EofBehavior,

    in_stream: Box<dyn Read + 'io>,
    out_stream: Box<dyn Write + 'io>,
}

impl<'io> Runtime<'io> {
    pub fn reset(&mut self) {
        self.tape = vec![0; self.initial_size];
        self.data_pointer = 0;
    }

    /// Read one byte from the input stream into the data pointer
    pub fn read(&mut self) -> Result<(), RuntimeError> {
        let mut byte = [0u8; 1];
        loop {
            match self.in_stream.read(&mut byte) {
                Ok(0) => {
                    match self.eof_behavior {
                        EofBehavior::Zero => self.tape[self.data_pointer] = 0,
                        EofBehavior::Unchanged => {}
                        EofBehavior::Max => self.tape[self.data_pointer] = u8::MAX,
                    }
                    return Ok(());
                }
                Ok(_) => {
                    self.tape[self.data_pointer] = byte[0];
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Write the byte at the data pointer to the output stream
    pub fn write(&mut self) -> Result<(), RuntimeError> {
        self.out_stream.write_all(&[self.tape[self.data_pointer]])?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), RuntimeError> {
        self.out_stream.flush()?;
        Ok(())
    }

    pub fn deref_and_add_value(&mut self, by: u8) {
        self.tape[self.data_pointer] = self.tape[self.data_pointer].wrapping_add(by);
    }

    pub fn deref_and_sub_value(&mut self, by: u8) {
        self.tape[self.data_pointer] = self.tape[self.data_pointer].wrapping_sub(by);
    }

    /// Moves the data pointer, doubling the tape until the new position fits
    pub fn shift_data_pointer(&mut self, by: isize) -> Result<(), RuntimeError> {
        let target = self
            .data_pointer
            .checked_add_signed(by)
            .ok_or(RuntimeError::DataPointerOutOfRange)?;

        while target >= self.tape.len() {
            let len = self.tape.len();
            self.tape.resize(len * 2, 0);
        }

        self.data_pointer = target;
        Ok(())
    }

    /// is the value at the data pointer zero?
    pub fn value_is_zero(&self) -> bool {
        self.tape[self.data_pointer] == 0
    }

    pub fn data_pointer(&self) -> usize {
        self.data_pointer
    }

    pub fn tape(&self) -> &[u8] {
        &self.tape
    }
}

impl<'io> Runtime<'io> {
    /// `tape_size` is rounded up to the next power of two
    pub fn new(tape_size: usize, in_stream: Box<dyn Read + 'io>, out_stream: Box<dyn Write + 'io>) -> Self {
        let initial_size = tape_size.max(1).next_power_of_two();
        Self {
            data_pointer: 0,
            tape: vec![0; initial_size],
            initial_size,
            eof_behavior: EofBehavior::default(),
            in_stream,
            out_stream,
        }
    }

    pub fn with_eof_behavior(mut self, eof_behavior: EofBehavior) -> Self {
        self.eof_behavior = eof_behavior;
        self
    }
}
