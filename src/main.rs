use std::{
    fs,
    io::{self},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use brainscrew::{
    bytecode::to_bytecode,
    codegen::{generate, CCodeGen, MnemonicCodeGen, SymbolicCodeGen},
    execute, execute_bytecode, interpret_symbolic,
    interpreter::{Runtime, DEFAULT_TAPE_SIZE},
    lex, parse_symbolic, EofBehavior, Error, Program,
};
use clap::{ArgGroup, Parser, ValueEnum};
use colored::Colorize;

/// brainscrew compiler/interpreter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("target").args(["c", "bf", "bsc"])))]
struct Args {
    /// The files to operate on, run one after another
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Compile to C
    #[arg(short, long)]
    c: bool,

    /// Compile to Brainf**k
    #[arg(long)]
    bf: bool,

    /// Compile Brainf**k to brainscrew, input is always read as Brainf**k
    #[arg(long, conflicts_with = "dialect")]
    bsc: bool,

    /// Dialect of the input files, `.bf` files are symbolic unless this is given
    #[arg(long, value_enum)]
    dialect: Option<Dialect>,

    /// Initial number of tape cells
    #[arg(short, long, default_value_t = DEFAULT_TAPE_SIZE, value_parser = parse_tape_size)]
    tape_size: usize,

    /// What `input` stores once stdin is exhausted
    #[arg(long, value_enum, default_value_t = EofBehavior::Zero)]
    eof: EofBehavior,

    #[arg(long, value_enum, default_value_t = Engine::Scan)]
    engine: Engine,

    /// Log each phase and its timing to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Dialect {
    /// Word based brainscrew
    Mnemonic,
    /// Plain Brainf**k
    Symbolic,
}

impl Dialect {
    fn detect(path: &Path) -> Dialect {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("bf") => Dialect::Symbolic,
            _ => Dialect::Mnemonic,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Engine {
    /// Find matching brackets with a scan every time a loop jumps
    Scan,
    /// Resolve every loop before running
    Bytecode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    C,
    Bf,
    Bsc,
}

impl Target {
    fn extension(&self) -> &'static str {
        match self {
            Target::C => "c",
            Target::Bf => "bf",
            Target::Bsc => "bsc",
        }
    }
}

fn parse_tape_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|e| format!("{e}"))?;
    if size.is_power_of_two() {
        Ok(size)
    } else {
        Err(format!("{size} is not a power of two"))
    }
}

/// The file name without its directory, with the last extension swapped out
fn output_name(path: &Path, extension: &str) -> PathBuf {
    let file_name = path.file_name().map(Path::new).unwrap_or(path);
    file_name.with_extension(extension)
}

/// Runs `f`, logging its start and how long it took when `verbose` is set
fn phase<T>(verbose: bool, name: &str, f: impl FnOnce() -> T) -> T {
    if !verbose {
        return f();
    }

    eprintln!("{}", format!("Starting {name}").blue());
    let now = Instant::now();
    let result = f();
    eprintln!("{} {:.2?}", format!("Finished {name} in").green(), now.elapsed());
    result
}

struct Session {
    args: Args,
    runtime: Runtime<'static>,
}

impl Session {
    fn target(&self) -> Option<Target> {
        if self.args.c {
            Some(Target::C)
        } else if self.args.bf {
            Some(Target::Bf)
        } else if self.args.bsc {
            Some(Target::Bsc)
        } else {
            None
        }
    }

    fn load(&self, src: &str, dialect: Dialect) -> Result<Program, Error> {
        match dialect {
            Dialect::Mnemonic => Ok(phase(self.args.verbose, "lexing", || lex(src))?),
            Dialect::Symbolic => Ok(phase(self.args.verbose, "parsing", || parse_symbolic(src))),
        }
    }

    fn run_file(&mut self, path: &Path) -> Result<(), Error> {
        if self.args.verbose {
            eprintln!("Running {}", path.display());
        }

        let src = fs::read_to_string(path).map_err(|source| Error::File {
            path: path.display().to_string(),
            source,
        })?;
        let dialect = self.args.dialect.unwrap_or_else(|| Dialect::detect(path));

        match self.target() {
            None => self.interpret(&src, dialect),
            Some(target) => {
                let program = match target {
                    // Brainf**k is the only thing that becomes brainscrew
                    Target::Bsc => self.load(&src, Dialect::Symbolic)?,
                    _ => self.load(&src, dialect)?,
                };

                let compiled = phase(self.args.verbose, "codegen", || match target {
                    Target::C => generate(
                        &CCodeGen::new(self.args.eof).with_tape_size(self.args.tape_size),
                        &program,
                    ),
                    Target::Bf => generate(&SymbolicCodeGen, &program),
                    Target::Bsc => generate(&MnemonicCodeGen, &program),
                });

                let out_path = output_name(path, target.extension());
                fs::write(&out_path, compiled).map_err(|source| Error::File {
                    path: out_path.display().to_string(),
                    source,
                })
            }
        }
    }

    fn interpret(&mut self, src: &str, dialect: Dialect) -> Result<(), Error> {
        let verbose = self.args.verbose;
        let result = match (dialect, self.args.engine) {
            // Brainf**k runs straight off the characters, there is nothing to lex
            (Dialect::Symbolic, Engine::Scan) => {
                let runtime = &mut self.runtime;
                phase(verbose, "interpreting", || interpret_symbolic(src, runtime))
            }
            (_, Engine::Scan) => self.load(src, dialect).and_then(|program| {
                let runtime = &mut self.runtime;
                phase(verbose, "interpreting", || execute(&program, runtime))
            }),
            (_, Engine::Bytecode) => self.load(src, dialect).and_then(|program| {
                let bytecode = phase(verbose, "bytecode", || to_bytecode(&program));
                let runtime = &mut self.runtime;
                phase(verbose, "bytecode-interpreting", || execute_bytecode(&bytecode, runtime))
            }),
        };

        // each file gets a fresh tape
        self.runtime.reset();
        result
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let runtime = Runtime::new(args.tape_size, Box::new(io::stdin()), Box::new(io::stdout()))
        .with_eof_behavior(args.eof);
    let files = args.files.clone();
    let mut session = Session { args, runtime };

    for file in files.iter() {
        if let Err(e) = session.run_file(file) {
            eprintln!("{}: {}", "error".red(), e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_names() {
        assert_eq!(output_name(Path::new("hello.bsc"), "c"), PathBuf::from("hello.c"));
        assert_eq!(output_name(Path::new("dir/sub/hello.bf"), "bsc"), PathBuf::from("hello.bsc"));
        assert_eq!(output_name(Path::new("hello"), "bf"), PathBuf::from("hello.bf"));
        assert_eq!(output_name(Path::new("a.b.bsc"), "c"), PathBuf::from("a.b.c"));
    }

    #[test]
    fn dialect_from_extension() {
        assert_eq!(Dialect::detect(Path::new("x.bf")), Dialect::Symbolic);
        assert_eq!(Dialect::detect(Path::new("x.bsc")), Dialect::Mnemonic);
        assert_eq!(Dialect::detect(Path::new("x")), Dialect::Mnemonic);
    }

    #[test]
    fn tape_size_must_be_a_power_of_two() {
        assert_eq!(parse_tape_size("512"), Ok(512));
        assert!(parse_tape_size("0").is_err());
        assert!(parse_tape_size("300").is_err());
        assert!(parse_tape_size("lots").is_err());
    }

    #[test]
    fn at_most_one_target() {
        assert!(Args::try_parse_from(["brainscrew", "-c", "--bf", "x.bsc"]).is_err());
        assert!(Args::try_parse_from(["brainscrew"]).is_err());

        // brainscrew is only ever compiled from Brainf**k
        assert!(Args::try_parse_from(["brainscrew", "--bsc", "--dialect", "mnemonic", "x.bf"]).is_err());

        let args = Args::try_parse_from(["brainscrew", "--bsc", "x.bf", "y.bf"]).unwrap();
        assert!(args.bsc);
        assert_eq!(args.files.len(), 2);
        assert_eq!(args.tape_size, DEFAULT_TAPE_SIZE);
        assert_eq!(args.eof, EofBehavior::Zero);
    }
}
