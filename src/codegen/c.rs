use crate::{
    instruction::Instruction,
    interpreter::{EofBehavior, DEFAULT_TAPE_SIZE},
};

use super::{CodeGen, EmitBuffer};

/*
    The emitted program mirrors the interpreter's runtime:
    - `c` is the tape, `s` its size in cells, `p` the data pointer
    - `d` doubles the tape (zeroing the new half) when `p` sits on the last cell, called before every right move
    - `L` aborts like the interpreter does when moving left of the first cell

    One short macro per instruction keeps the generated body small.
*/
const INCLUDES: &str = "#include<stdio.h>\n\
                        #include<stdlib.h>\n\
                        #include<stdint.h>\n\
                        #include<string.h>\n";

const MACROS: &str = "#define I ++*p;\n\
                      #define D --*p;\n\
                      #define L if(p==c){fputs(\"error: data pointer out of range\\n\",stderr);free(c);exit(1);}--p;\n\
                      #define R d(&c,&p,&s);++p;\n\
                      #define O putchar(*p);\n\
                      #define S while(*p){\n\
                      #define E }\n";

const GROW: &str = "void d(uint8_t**c,uint8_t**p,size_t*s)\
                    {\
                    if((size_t)(*p-*c)==*s-1){\
                    size_t o=*p-*c;\
                    uint8_t*n=realloc(*c,*s*2);\
                    if(!n){free(*c);exit(1);}\
                    memset(n+*s,0,*s);\
                    *s*=2;\
                    *c=n;\
                    *p=n+o;\
                    }\
                    }\n";

const EPILOGUE: &str = "\nfflush(stdout);free(c);return 0;}\n";

/// Renders a standalone C translation unit with the instructions as macro calls
pub struct CCodeGen {
    eof_behavior: EofBehavior,
    tape_size: usize,
}

impl CCodeGen {
    pub fn new(eof_behavior: EofBehavior) -> Self {
        Self {
            eof_behavior,
            tape_size: DEFAULT_TAPE_SIZE,
        }
    }

    /// Rounded up to a power of two like the interpreter's tape
    pub fn with_tape_size(mut self, tape_size: usize) -> Self {
        self.tape_size = tape_size.max(1).next_power_of_two();
        self
    }

    fn input_macro(&self) -> &'static str {
        match self.eof_behavior {
            EofBehavior::Zero => "#define G {int g=getchar();*p=g==EOF?0:g;}\n",
            EofBehavior::Unchanged => "#define G {int g=getchar();if(g!=EOF)*p=g;}\n",
            // EOF is -1, which lands on 255
            EofBehavior::Max => "#define G *p=getchar();\n",
        }
    }

    fn macro_name(instruction: Instruction) -> Option<&'static str> {
        match instruction {
            Instruction::Increment => Some("I"),
            Instruction::Decrement => Some("D"),
            Instruction::MoveLeft => Some("L"),
            Instruction::MoveRight => Some("R"),
            Instruction::Output => Some("O"),
            Instruction::Input => Some("G"),
            Instruction::LoopStart => Some("S"),
            Instruction::LoopEnd => Some("E"),
            Instruction::EndOfProgram => None,
        }
    }
}

impl Default for CCodeGen {
    fn default() -> Self {
        Self::new(EofBehavior::default())
    }
}

impl CodeGen for CCodeGen {
    fn prologue(&self, out: &mut EmitBuffer) {
        out.push_str(INCLUDES);
        out.push_str(MACROS);
        out.push_str(self.input_macro());
        out.push_str(GROW);
        out.push_str("int main(void){size_t s=");
        out.push_str(&self.tape_size.to_string());
        out.push_str(";uint8_t*c=calloc(s,1);if(!c)return 1;uint8_t*p=c;\n");
    }

    fn instruction(&self, out: &mut EmitBuffer, instruction: Instruction) {
        if let Some(name) = Self::macro_name(instruction) {
            out.push_str(name);
            out.push(' ');
        }
    }

    fn epilogue(&self, out: &mut EmitBuffer) {
        out.push_str(EPILOGUE);
    }
}
