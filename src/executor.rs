use std::fmt;
use std::io::{self, Write};

use crate::poly::{Coefficient, Poly};
use crate::stack::Stack;

/// The command vocabulary of the calculator. Parameterized commands carry
/// their already-validated argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Push the zero polynomial.
    Zero,
    /// Print whether the top polynomial is a constant.
    IsCoeff,
    /// Print whether the top polynomial is zero.
    IsZero,
    /// Push a copy of the top polynomial.
    Clone,
    /// Replace the top two polynomials with their sum.
    Add,
    /// Replace the top two polynomials with their product.
    Mul,
    /// Negate the top polynomial.
    Neg,
    /// Replace the top two polynomials with top minus second.
    Sub,
    /// Print whether the top two polynomials are equal.
    IsEq,
    /// Print the total degree of the top polynomial.
    Deg,
    /// Print the degree of the top polynomial in the given variable.
    DegBy(usize),
    /// Evaluate the top polynomial at a point of its leading variable.
    At(Coefficient),
    /// Print the top polynomial.
    Print,
    /// Discard the top polynomial.
    Pop,
    /// Pop the top polynomial and the given number of substitution
    /// arguments, push the composition.
    Compose(usize),
}

/// The per-line diagnostics of the calculator. The polynomial engine itself
/// has no error conditions; everything here originates in parsing or in the
/// stack discipline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalcError {
    WrongCommand,
    WrongPoly,
    DegByWrongVariable,
    AtWrongValue,
    ComposeWrongParameter,
    StackUnderflow,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            CalcError::WrongCommand => "WRONG COMMAND",
            CalcError::WrongPoly => "WRONG POLY",
            CalcError::DegByWrongVariable => "DEG BY WRONG VARIABLE",
            CalcError::AtWrongValue => "AT WRONG VALUE",
            CalcError::ComposeWrongParameter => "COMPOSE WRONG PARAMETER",
            CalcError::StackUnderflow => "STACK UNDERFLOW",
        })
    }
}

impl std::error::Error for CalcError {}

/// A failure while executing a single command: either a diagnostic for the
/// current line, or a failure of the output sink.
#[derive(Debug)]
pub enum ExecuteError {
    Calc(CalcError),
    Io(io::Error),
}

impl From<CalcError> for ExecuteError {
    fn from(e: CalcError) -> ExecuteError {
        ExecuteError::Calc(e)
    }
}

impl From<io::Error> for ExecuteError {
    fn from(e: io::Error) -> ExecuteError {
        ExecuteError::Io(e)
    }
}

impl fmt::Display for ExecuteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExecuteError::Calc(e) => e.fmt(f),
            ExecuteError::Io(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for ExecuteError {}

/// Executes one command against the stack, writing query results to `out`.
/// Underflow is reported before any output is produced.
pub fn execute<W: Write>(
    command: &Command,
    stack: &mut Stack,
    out: &mut W,
) -> Result<(), ExecuteError> {
    match command {
        Command::Zero => stack.push(Poly::zero()),
        Command::IsCoeff => {
            let top = stack.top().ok_or(CalcError::StackUnderflow)?;
            writeln!(out, "{}", top.is_coeff() as u8)?;
        }
        Command::IsZero => {
            let top = stack.top().ok_or(CalcError::StackUnderflow)?;
            writeln!(out, "{}", top.is_zero() as u8)?;
        }
        Command::Clone => {
            let copy = stack.top().ok_or(CalcError::StackUnderflow)?.clone();
            stack.push(copy);
        }
        Command::Add => binary(stack, |a, b| a + b)?,
        Command::Mul => binary(stack, |a, b| a * b)?,
        Command::Sub => binary(stack, |a, b| a - b)?,
        Command::Neg => {
            let top = stack.pop().ok_or(CalcError::StackUnderflow)?;
            stack.push(-top);
        }
        Command::IsEq => {
            let (first, second) = stack.top2().ok_or(CalcError::StackUnderflow)?;
            writeln!(out, "{}", (first == second) as u8)?;
        }
        Command::Deg => {
            let top = stack.top().ok_or(CalcError::StackUnderflow)?;
            writeln!(out, "{}", top.deg())?;
        }
        Command::DegBy(var) => {
            let top = stack.top().ok_or(CalcError::StackUnderflow)?;
            writeln!(out, "{}", top.deg_by(*var))?;
        }
        Command::At(x) => {
            let top = stack.pop().ok_or(CalcError::StackUnderflow)?;
            stack.push(top.evaluate(*x));
        }
        Command::Print => {
            let top = stack.top().ok_or(CalcError::StackUnderflow)?;
            writeln!(out, "{}", top)?;
        }
        Command::Pop => {
            stack.pop().ok_or(CalcError::StackUnderflow)?;
        }
        Command::Compose(count) => compose(stack, *count)?,
    }
    Ok(())
}

/// Pops the top two polynomials and pushes `op(top, second)`.
fn binary(stack: &mut Stack, op: impl FnOnce(Poly, Poly) -> Poly) -> Result<(), CalcError> {
    if stack.len() < 2 {
        return Err(CalcError::StackUnderflow);
    }
    let first = stack.pop().unwrap();
    let second = stack.pop().unwrap();
    stack.push(op(first, second));
    Ok(())
}

/// Pops the composition target, then `count` substitution arguments starting
/// with the one for the highest variable index, and pushes the result.
fn compose(stack: &mut Stack, count: usize) -> Result<(), CalcError> {
    if stack.len() <= count {
        return Err(CalcError::StackUnderflow);
    }
    let target = stack.pop().unwrap();
    let mut subs = Vec::with_capacity(count);
    for _ in 0..count {
        subs.push(stack.pop().unwrap());
    }
    subs.reverse();
    stack.push(target.compose(&subs));
    Ok(())
}
