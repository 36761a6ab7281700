mod error;
mod kind;

pub use error::Error;
pub use kind::Kind;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use uuid::Uuid;

use crate::number::Number;

/// A calculation bound to a user and an ordered list of numeric inputs.
///
/// Instances are immutable once constructed. [`get_result`] is a pure read
/// of the stored inputs, so a single instance can be shared across threads
/// without synchronization.
///
/// [`get_result`]: Calculation::get_result
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Calculation {
    user_id: Uuid,
    kind: Kind,
    inputs: Vec<Number>,
}

impl Calculation {
    /// Creates a calculation from a type-name token.
    ///
    /// The token must be one of `addition`, `subtraction`,
    /// `multiplication`, `division`, `exponentiation`, `nthroot`, or
    /// `modulus`, matched case-sensitively. The user id is stored as an
    /// opaque value and never validated here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] for any other token.
    pub fn create(
        calculation_type: &str,
        user_id: Uuid,
        inputs: Vec<Number>,
    ) -> Result<Self, Error> {
        let kind = calculation_type.parse()?;
        Ok(Self::new(kind, user_id, inputs))
    }

    /// Creates a calculation from an already-typed [`Kind`].
    pub fn new(kind: Kind, user_id: Uuid, inputs: Vec<Number>) -> Self {
        Self {
            user_id,
            kind,
            inputs,
        }
    }

    /// The identifier of the user who submitted the calculation.
    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// The operator variant.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The ordered inputs, as supplied at construction.
    pub fn inputs(&self) -> &[Number] {
        &self.inputs
    }

    /// Reduces the inputs left to right with the variant's operator.
    ///
    /// Inputs are validated first: every element must be a finite number,
    /// then the variant's minimum count must be met. The fold aborts at the
    /// first violated arithmetic precondition; no partial result is ever
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if an element is NaN or infinite,
    /// [`Error::InsufficientInputs`] if too few inputs were supplied, and
    /// the matching arithmetic-precondition error for a zero divisor, a
    /// zero modulus operand, a zero root degree, or an even root of a
    /// negative accumulator.
    pub fn get_result(&self) -> Result<Number, Error> {
        if self.inputs.iter().any(|n| !n.is_finite()) {
            return Err(Error::InvalidInput);
        }

        match self.kind {
            Kind::Addition => Ok(sum(&self.inputs)),
            Kind::Subtraction => difference(&self.inputs),
            Kind::Multiplication => Ok(product(&self.inputs)),
            Kind::Division => quotient(&self.inputs),
            Kind::Exponentiation => power(&self.inputs),
            Kind::NthRoot => nth_root(&self.inputs),
            Kind::Modulus => modulus(&self.inputs),
        }
    }
}

/// Sums all inputs; the empty sum is the additive identity.
fn sum(inputs: &[Number]) -> Number {
    inputs.iter().copied().fold(Number::Int(0), |acc, n| acc + n)
}

/// Multiplies all inputs; the empty product is the multiplicative identity.
fn product(inputs: &[Number]) -> Number {
    inputs.iter().copied().fold(Number::Int(1), |acc, n| acc * n)
}

fn difference(inputs: &[Number]) -> Result<Number, Error> {
    let (first, rest) = at_least_two(Kind::Subtraction, inputs)?;
    Ok(rest.iter().copied().fold(first, |acc, n| acc - n))
}

fn quotient(inputs: &[Number]) -> Result<Number, Error> {
    let (first, rest) = at_least_two(Kind::Division, inputs)?;
    rest.iter().copied().try_fold(first, |acc, divisor| {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(acc.div(divisor))
    })
}

fn power(inputs: &[Number]) -> Result<Number, Error> {
    let (first, rest) = at_least_two(Kind::Exponentiation, inputs)?;
    Ok(rest.iter().copied().fold(first, Number::pow))
}

/// Replaces the accumulator with its own `degree`-th root for each degree
/// value in turn, checking that degree's preconditions per step.
fn nth_root(inputs: &[Number]) -> Result<Number, Error> {
    let (first, rest) = at_least_two(Kind::NthRoot, inputs)?;
    rest.iter().copied().try_fold(first, |acc, degree| {
        if degree.is_zero() {
            return Err(Error::RootDegreeZero);
        }
        if degree.is_even_integer() && acc.is_negative() {
            return Err(Error::EvenRootOfNegative);
        }
        Ok(acc.root(degree))
    })
}

fn modulus(inputs: &[Number]) -> Result<Number, Error> {
    let (first, rest) = at_least_two(Kind::Modulus, inputs)?;
    rest.iter().copied().try_fold(first, |acc, operand| {
        if operand.is_zero() {
            return Err(Error::ModulusWithZero);
        }
        Ok(acc.rem(operand))
    })
}

/// Splits off the first input, requiring at least two in total.
fn at_least_two(kind: Kind, inputs: &[Number]) -> Result<(Number, &[Number]), Error> {
    match inputs.split_first() {
        Some((&first, rest)) if !rest.is_empty() => Ok((first, rest)),
        _ => Err(Error::InsufficientInputs(kind)),
    }
}
