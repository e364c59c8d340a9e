use std::{
    fmt::{Display, Formatter},
    ops::{Add, Div, Mul, Neg, Sub},
};

use tracing::debug;

use crate::utils;

use super::{EuclideanDomain, Field, Ring};

/// The field of rational numbers.
pub type Q = RationalField;
/// The field of rational numbers.
pub const Q: RationalField = RationalField;

/// The largest power-of-ten denominator [Rational::from_f64] will try
/// before giving up on an exact decimal representation.
const MAX_DECIMAL_DENOMINATOR: i64 = 1_000_000_000_000_000;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RationalField;

impl RationalField {
    pub fn new() -> RationalField {
        RationalField
    }
}

impl Display for RationalField {
    fn fmt(&self, _: &mut Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

/// An exact rational number: a machine-integer numerator and denominator,
/// kept in lowest terms with a positive denominator. The canonical form
/// makes the derived equality and hash exact.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// Create a new rational from a numerator and denominator. The pair is
    /// brought into lowest terms and the sign is moved to the numerator.
    ///
    /// A zero denominator is not rejected here: the solvers only divide by
    /// values whose determinant was checked to be nonzero, so a zero
    /// denominator can only be produced by a caller that broke that
    /// contract.
    pub fn new(numerator: i64, denominator: i64) -> Rational {
        let g = utils::gcd_signed(numerator, denominator);
        let (mut n, mut d) = if g == 0 {
            (numerator, denominator)
        } else {
            (numerator / g, denominator / g)
        };
        if d < 0 {
            n = -n;
            d = -d;
        }
        Rational {
            numerator: n,
            denominator: d,
        }
    }

    pub fn zero() -> Rational {
        Rational {
            numerator: 0,
            denominator: 1,
        }
    }

    pub fn one() -> Rational {
        Rational {
            numerator: 1,
            denominator: 1,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_one(&self) -> bool {
        self.numerator == 1 && self.denominator == 1
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Convert a floating-point number into an exact fraction by scaling
    /// with increasing powers of ten until the scaled value is integral.
    ///
    /// The search is capped at a denominator of 10^15, past the precision
    /// of an `f64` mantissa; inputs that do not terminate by then (e.g.
    /// numbers without a short decimal expansion) are rounded at that
    /// denominator.
    pub fn from_f64(x: f64) -> Rational {
        if x == x.trunc() {
            return Rational {
                numerator: x as i64,
                denominator: 1,
            };
        }

        let mut den: i64 = 1;
        while (x * den as f64).fract() != 0. && den < MAX_DECIMAL_DENOMINATOR {
            den *= 10;
        }

        if (x * den as f64).fract() != 0. {
            debug!("Rounding {} at denominator {}", x, den);
        }

        Rational::new((x * den as f64).round() as i64, den)
    }

    /// Convert to a floating-point number. This may lose precision and is
    /// not used anywhere in the exact solve paths.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.denominator == 1 {
            f.write_fmt(format_args!("{}", self.numerator))
        } else {
            f.write_fmt(format_args!("{}/{}", self.numerator, self.denominator))
        }
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Rational {
        Rational {
            numerator: n,
            denominator: 1,
        }
    }
}

impl From<(i64, i64)> for Rational {
    fn from((n, d): (i64, i64)) -> Rational {
        Rational::new(n, d)
    }
}

impl Ring for RationalField {
    type Element = Rational;

    fn add(&self, a: &Rational, b: &Rational) -> Rational {
        Rational::new(
            a.numerator * b.denominator + b.numerator * a.denominator,
            a.denominator * b.denominator,
        )
    }

    fn sub(&self, a: &Rational, b: &Rational) -> Rational {
        Rational::new(
            a.numerator * b.denominator - b.numerator * a.denominator,
            a.denominator * b.denominator,
        )
    }

    fn mul(&self, a: &Rational, b: &Rational) -> Rational {
        Rational::new(a.numerator * b.numerator, a.denominator * b.denominator)
    }

    fn add_assign(&self, a: &mut Rational, b: &Rational) {
        *a = self.add(a, b);
    }

    fn sub_assign(&self, a: &mut Rational, b: &Rational) {
        *a = self.sub(a, b);
    }

    fn mul_assign(&self, a: &mut Rational, b: &Rational) {
        *a = self.mul(a, b);
    }

    fn add_mul_assign(&self, a: &mut Rational, b: &Rational, c: &Rational) {
        *a = self.add(a, &self.mul(b, c));
    }

    fn sub_mul_assign(&self, a: &mut Rational, b: &Rational, c: &Rational) {
        *a = self.sub(a, &self.mul(b, c));
    }

    fn neg(&self, a: &Rational) -> Rational {
        Rational {
            numerator: -a.numerator,
            denominator: a.denominator,
        }
    }

    fn zero(&self) -> Rational {
        Rational::zero()
    }

    fn one(&self) -> Rational {
        Rational::one()
    }

    fn is_zero(a: &Rational) -> bool {
        a.numerator == 0
    }

    fn is_one(&self, a: &Rational) -> bool {
        a.numerator == 1 && a.denominator == 1
    }
}

impl EuclideanDomain for RationalField {
    fn rem(&self, _: &Rational, _: &Rational) -> Rational {
        Rational::zero()
    }

    fn quot_rem(&self, a: &Rational, b: &Rational) -> (Rational, Rational) {
        (self.div(a, b), Rational::zero())
    }

    fn gcd(&self, a: &Rational, b: &Rational) -> Rational {
        // gcd of the numerators over the lcm of the denominators
        let num = utils::gcd_signed(a.numerator, b.numerator);
        let den = a.denominator / utils::gcd_signed(a.denominator, b.denominator) * b.denominator;
        Rational::new(num, den)
    }
}

impl Field for RationalField {
    fn div(&self, a: &Rational, b: &Rational) -> Rational {
        Rational::new(a.numerator * b.denominator, a.denominator * b.numerator)
    }

    fn div_assign(&self, a: &mut Rational, b: &Rational) {
        *a = self.div(a, b);
    }

    fn inv(&self, a: &Rational) -> Rational {
        if a.numerator < 0 {
            Rational {
                numerator: -a.denominator,
                denominator: -a.numerator,
            }
        } else {
            Rational {
                numerator: a.denominator,
                denominator: a.numerator,
            }
        }
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        Q.add(&self, &rhs)
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        Q.sub(&self, &rhs)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Q.mul(&self, &rhs)
    }
}

impl Div for Rational {
    type Output = Rational;

    fn div(self, rhs: Rational) -> Rational {
        Q.div(&self, &rhs)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Q.neg(&self)
    }
}

#[cfg(test)]
mod test {
    use crate::domains::{EuclideanDomain, Field, Ring};

    use super::{Rational, Q};

    #[test]
    fn canonical_form() {
        assert_eq!(Rational::new(4, 8), (1, 2).into());
        assert_eq!(Rational::new(-4, 8), (-1, 2).into());
        assert_eq!(Rational::new(4, -8), (-1, 2).into());
        assert_eq!(Rational::new(-4, -8), (1, 2).into());
        assert_eq!(Rational::new(0, 7), 0.into());

        let r = Rational::new(30, -42);
        assert!(r.denominator() > 0);
        assert_eq!(crate::utils::gcd_signed(r.numerator(), r.denominator()), 1);
    }

    #[test]
    fn identities() {
        let f: Rational = (3, 7).into();
        assert_eq!(f + Rational::zero(), f);
        assert_eq!(f * Rational::one(), f);
        assert_eq!(f * Rational::zero(), Rational::zero());
    }

    #[test]
    fn div_round_trip() {
        let f: Rational = (3, 4).into();
        let g: Rational = (-5, 7).into();
        assert_eq!(f / g * g, f);
        assert_eq!(Q.mul(&Q.div(&f, &g), &g), f);
    }

    #[test]
    fn inv() {
        assert_eq!(Q.inv(&(2, 3).into()), (3, 2).into());
        let r = Q.inv(&(-2, 3).into());
        assert_eq!(r, (-3, 2).into());
        assert!(r.denominator() > 0);
    }

    #[test]
    fn field_gcd() {
        let g = Q.gcd(&(1, 2).into(), &(1, 3).into());
        assert_eq!(g, (1, 6).into());
        assert_eq!(Q.gcd(&0.into(), &(3, 4).into()), (3, 4).into());

        let (q, r) = Q.quot_rem(&(1, 2).into(), &(1, 4).into());
        assert_eq!(q, 2.into());
        assert_eq!(r, Rational::zero());
    }

    #[test]
    fn from_f64() {
        assert_eq!(Rational::from_f64(3.), 3.into());
        assert_eq!(Rational::from_f64(-2.), (-2).into());
        assert_eq!(Rational::from_f64(2.5), (5, 2).into());
        assert_eq!(Rational::from_f64(0.125), (1, 8).into());
        assert_eq!(Rational::from_f64(-0.2), (-1, 5).into());
    }

    #[test]
    fn from_f64_round_trip() {
        for x in [0.5, -1.25, 3.141592, 0.000001, 12.875, -0.333333] {
            assert!((Rational::from_f64(x).to_f64() - x).abs() < 1e-12);
        }
    }

    #[test]
    fn display() {
        assert_eq!(Rational::new(6, 2).to_string(), "3");
        assert_eq!(Rational::new(-1, 2).to_string(), "-1/2");
        assert_eq!(Rational::new(1, -2).to_string(), "-1/2");
        assert_eq!(Rational::zero().to_string(), "0");
    }
}
