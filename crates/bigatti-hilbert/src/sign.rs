//! Unit coefficients of base-case output.

use std::fmt;
use std::ops::{Mul, Neg};

use bigatti_term::Term;
use dashu::integer::IBig;

/// A coefficient of `+1` or `-1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Sign {
    /// `+1`.
    #[default]
    Plus,
    /// `-1`.
    Minus,
}

impl Sign {
    /// Returns the opposite sign.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }

    /// Returns `+1` or `-1`.
    #[must_use]
    pub const fn to_i8(self) -> i8 {
        match self {
            Sign::Plus => 1,
            Sign::Minus => -1,
        }
    }

    /// Returns the sign as an arbitrary-precision integer.
    #[must_use]
    pub fn to_ibig(self) -> IBig {
        IBig::from(self.to_i8())
    }

    /// Returns `(-1)^n`.
    #[must_use]
    pub const fn parity(n: usize) -> Self {
        if n % 2 == 0 {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        self.flip()
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        if self == rhs {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Plus => write!(f, "+"),
            Sign::Minus => write!(f, "-"),
        }
    }
}

/// A term with a unit coefficient.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SignedTerm {
    /// The coefficient.
    pub sign: Sign,
    /// The term.
    pub term: Term,
}

impl SignedTerm {
    /// Creates a signed term.
    #[must_use]
    pub fn new(sign: Sign, term: Term) -> Self {
        Self { sign, term }
    }
}

impl fmt::Display for SignedTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign, self.term)
    }
}
