use std::io::{self, BufRead, Write};

use log::{debug, trace};

use crate::executor::{execute, CalcError, ExecuteError};
use crate::parser;
use crate::stack::Stack;

/// A line-oriented calculator session over a value stack.
///
/// Query results go to `out`; `ERROR <line> <kind>` diagnostics go to
/// `diag`. A faulty line is reported and processing continues with the next
/// one; only a failing sink aborts the session.
pub struct Calculator<W, E> {
    stack: Stack,
    out: W,
    diag: E,
}

impl<W: Write, E: Write> Calculator<W, E> {
    pub fn new(out: W, diag: E) -> Calculator<W, E> {
        Calculator {
            stack: Stack::new(),
            out,
            diag,
        }
    }

    /// Processes one input line (without its trailing newline).
    ///
    /// The first byte decides the interpretation: `#` or an empty line is
    /// ignored, a letter starts a command, `(`, `-` or a digit starts a
    /// polynomial that is pushed on success. Anything else is a polynomial
    /// error.
    pub fn process_line(&mut self, line_number: usize, line: &[u8]) -> io::Result<()> {
        let command = match line.first() {
            None | Some(b'#') => return Ok(()),
            Some(c) if c.is_ascii_alphabetic() => match parser::parse_command(line) {
                Ok(command) => command,
                Err(e) => return self.report(line_number, e),
            },
            Some(c) if *c == b'(' || *c == b'-' || c.is_ascii_digit() => {
                match parser::parse_poly(line) {
                    Ok(poly) => {
                        trace!("line {}: push {}", line_number, poly);
                        self.stack.push(poly);
                    }
                    Err(e) => return self.report(line_number, e),
                }
                return Ok(());
            }
            Some(_) => return self.report(line_number, CalcError::WrongPoly),
        };

        debug!("line {}: {:?}", line_number, command);
        match execute(&command, &mut self.stack, &mut self.out) {
            Ok(()) => Ok(()),
            Err(ExecuteError::Calc(e)) => self.report(line_number, e),
            Err(ExecuteError::Io(e)) => Err(e),
        }
    }

    /// Runs a whole session. Lines are raw bytes, numbered from 1; ignored
    /// lines count too. A missing final newline is tolerated.
    pub fn run(&mut self, mut reader: impl BufRead) -> io::Result<()> {
        let mut line = Vec::new();
        let mut line_number = 1;
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(());
            }
            if line.last() == Some(&b'\n') {
                line.pop();
            }
            self.process_line(line_number, &line)?;
            line_number += 1;
        }
    }

    fn report(&mut self, line_number: usize, error: CalcError) -> io::Result<()> {
        debug!("line {}: {}", line_number, error);
        writeln!(self.diag, "ERROR {} {}", line_number, error)
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Releases the two sinks, for callers that buffered them.
    pub fn into_parts(self) -> (W, E) {
        (self.out, self.diag)
    }
}
