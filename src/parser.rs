use std::str::{self, FromStr};

use bytes::Buf;
use smallvec::SmallVec;
use smartstring::{LazyCompact, SmartString};

use crate::executor::{CalcError, Command};
use crate::poly::{Coefficient, Exponent, Mono, Poly};

/// Parses a full input line as a polynomial. The whole line must be
/// consumed; any trailing byte is an error.
///
/// The grammar matches the canonical rendering: a line is either a signed
/// decimal constant or a `+`-joined sequence of `(coeff,exp)` monomials,
/// where the coefficient recurses into the same grammar over the next
/// variable. The monomial list goes through the canonical builder, so
/// redundant input (`(1,0)+(2,0)`) parses to its canonical form.
pub fn parse_poly(line: &[u8]) -> Result<Poly, CalcError> {
    let mut cursor = Cursor::new(line);
    let poly = cursor.poly()?;
    if cursor.peek().is_some() {
        return Err(CalcError::WrongPoly);
    }
    Ok(poly)
}

/// Parses a full input line as a command. The first whitespace-delimited
/// token selects the command; `DEG_BY`, `AT` and `COMPOSE` take a parameter
/// separated by exactly one space, and a missing or malformed parameter
/// yields the command-specific error kind.
pub fn parse_command(line: &[u8]) -> Result<Command, CalcError> {
    let split = line
        .iter()
        .position(|c| c.is_ascii_whitespace())
        .unwrap_or(line.len());
    let (name, rest) = line.split_at(split);

    match name {
        b"ZERO" if rest.is_empty() => Ok(Command::Zero),
        b"IS_COEFF" if rest.is_empty() => Ok(Command::IsCoeff),
        b"IS_ZERO" if rest.is_empty() => Ok(Command::IsZero),
        b"CLONE" if rest.is_empty() => Ok(Command::Clone),
        b"ADD" if rest.is_empty() => Ok(Command::Add),
        b"MUL" if rest.is_empty() => Ok(Command::Mul),
        b"NEG" if rest.is_empty() => Ok(Command::Neg),
        b"SUB" if rest.is_empty() => Ok(Command::Sub),
        b"IS_EQ" if rest.is_empty() => Ok(Command::IsEq),
        b"DEG" if rest.is_empty() => Ok(Command::Deg),
        b"PRINT" if rest.is_empty() => Ok(Command::Print),
        b"POP" if rest.is_empty() => Ok(Command::Pop),
        b"DEG_BY" => parameter(rest)
            .map(Command::DegBy)
            .ok_or(CalcError::DegByWrongVariable),
        b"AT" => parameter(rest)
            .map(Command::At)
            .ok_or(CalcError::AtWrongValue),
        b"COMPOSE" => parameter(rest)
            .map(Command::Compose)
            .ok_or(CalcError::ComposeWrongParameter),
        _ => Err(CalcError::WrongCommand),
    }
}

/// A command parameter is exactly one space followed by a number spanning
/// the rest of the line. A leading `+` is rejected, as in the polynomial
/// grammar; range errors fail the parse.
fn parameter<T: FromStr>(rest: &[u8]) -> Option<T> {
    let arg = rest.strip_prefix(b" ")?;
    let arg = str::from_utf8(arg).ok()?;
    if arg.is_empty() || arg.starts_with('+') {
        return None;
    }
    arg.parse().ok()
}

/// Byte cursor over one input line.
struct Cursor<'a> {
    input: &'a [u8],
}

impl<'a> Cursor<'a> {
    fn new(input: &'a [u8]) -> Cursor<'a> {
        Cursor { input }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.first().copied()
    }

    #[inline]
    fn bump(&mut self) -> Option<u8> {
        self.input.has_remaining().then(|| self.input.get_u8())
    }

    /// Consumes the next byte if it matches.
    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn poly(&mut self) -> Result<Poly, CalcError> {
        match self.peek() {
            Some(c) if c == b'-' || c.is_ascii_digit() => Ok(Poly::from(self.coefficient()?)),
            Some(b'(') => {
                let mut monomials: SmallVec<[Mono; 4]> = SmallVec::new();
                loop {
                    monomials.push(self.mono()?);
                    if !self.eat(b'+') {
                        break;
                    }
                }
                Ok(Poly::from_monomials(monomials.into_vec()))
            }
            _ => Err(CalcError::WrongPoly),
        }
    }

    /// One `(coeff,exp)` pair.
    fn mono(&mut self) -> Result<Mono, CalcError> {
        if !self.eat(b'(') {
            return Err(CalcError::WrongPoly);
        }
        let coeff = self.poly()?;
        if !self.eat(b',') {
            return Err(CalcError::WrongPoly);
        }
        let exp = self.exponent()?;
        if !self.eat(b')') {
            return Err(CalcError::WrongPoly);
        }
        Ok(Mono::new(coeff, exp))
    }

    /// A signed decimal coefficient. Values outside the coefficient range
    /// are a parse error, not a wraparound.
    fn coefficient(&mut self) -> Result<Coefficient, CalcError> {
        let mut digits: SmartString<LazyCompact> = SmartString::new();
        if self.peek() == Some(b'-') {
            self.bump();
            digits.push('-');
        }
        self.digits(&mut digits)?;
        digits.parse().map_err(|_| CalcError::WrongPoly)
    }

    /// A non-negative decimal exponent; a sign is not part of the grammar.
    fn exponent(&mut self) -> Result<Exponent, CalcError> {
        let mut digits: SmartString<LazyCompact> = SmartString::new();
        self.digits(&mut digits)?;
        digits.parse().map_err(|_| CalcError::WrongPoly)
    }

    /// At least one ASCII digit into the buffer.
    fn digits(&mut self, buffer: &mut SmartString<LazyCompact>) -> Result<(), CalcError> {
        let mut any = false;
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.bump();
            buffer.push(c as char);
            any = true;
        }
        if any {
            Ok(())
        } else {
            Err(CalcError::WrongPoly)
        }
    }
}
