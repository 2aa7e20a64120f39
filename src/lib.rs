//! Toolchain for brainscrew, a word-based dialect of Brainf**k.
//!
//! Mnemonic (`.bsc`) sources are lexed into a [`Program`] which can be run on a
//! growable tape or rendered as Brainf**k (`.bf`) or C (`.c`). Brainf**k sources
//! can be run directly or rendered back into brainscrew.

pub mod bytecode;
pub mod codegen;
pub mod instruction;
pub mod interpreter;
pub mod lexer;
pub mod parser;

use std::io;

use thiserror::Error;

use crate::{
    bytecode::{to_bytecode, ByteCode},
    codegen::{generate, CCodeGen, MnemonicCodeGen, SymbolicCodeGen},
    interpreter::{
        bytecode_interpreter::ByteCodeInterpreter, scan_interpreter::ScanInterpreter, Runtime,
        RuntimeError,
    },
    lexer::LexerError,
    parser::SymbolicSource,
};

pub use crate::{
    instruction::{Instruction, Program},
    interpreter::EofBehavior,
    lexer::lex,
    parser::parse_symbolic,
};

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("{path}: {source}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Run brainscrew source with the scan interpreter
pub fn interpret(src: &str, runtime: &mut Runtime) -> Result<(), Error> {
    execute(&lex(src)?, runtime)
}

/// Run brainscrew source with loop targets resolved ahead of time
pub fn interpret_bytecode(src: &str, runtime: &mut Runtime) -> Result<(), Error> {
    execute_bytecode(&to_bytecode(&lex(src)?), runtime)
}

/// Run Brainf**k source character by character
pub fn interpret_symbolic(src: &str, runtime: &mut Runtime) -> Result<(), Error> {
    let result = ScanInterpreter::new().run(runtime, &SymbolicSource::new(src));
    finish(runtime, result)
}

/// Run Brainf**k source with loop targets resolved ahead of time
pub fn interpret_symbolic_bytecode(src: &str, runtime: &mut Runtime) -> Result<(), Error> {
    execute_bytecode(&to_bytecode(&parse_symbolic(src)), runtime)
}

/// Run an already lexed program with the scan interpreter
pub fn execute(program: &Program, runtime: &mut Runtime) -> Result<(), Error> {
    let result = ScanInterpreter::new().run(runtime, &program[..]);
    finish(runtime, result)
}

pub fn execute_bytecode(bytecode: &[ByteCode], runtime: &mut Runtime) -> Result<(), Error> {
    let result = ByteCodeInterpreter::new().run(runtime, bytecode);
    finish(runtime, result)
}

/// Whatever was written before an error still reaches the output stream
fn finish(runtime: &mut Runtime, result: Result<(), RuntimeError>) -> Result<(), Error> {
    let flushed = runtime.flush();
    result?;
    flushed?;
    Ok(())
}

/// brainscrew -> Brainf**k
pub fn compile_to_symbolic(src: &str) -> Result<String, Error> {
    Ok(generate(&SymbolicCodeGen, &lex(src)?))
}

/// brainscrew -> C
pub fn compile_to_c(src: &str, eof_behavior: EofBehavior) -> Result<String, Error> {
    Ok(generate(&CCodeGen::new(eof_behavior), &lex(src)?))
}

/// Brainf**k -> brainscrew
pub fn compile_to_mnemonic(src: &str) -> String {
    generate(&MnemonicCodeGen, &parse_symbolic(src))
}

/// Brainf**k -> C
pub fn compile_symbolic_to_c(src: &str, eof_behavior: EofBehavior) -> String {
    generate(&CCodeGen::new(eof_behavior), &parse_symbolic(src))
}
