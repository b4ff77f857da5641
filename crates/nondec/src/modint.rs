use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// Prime modulus every residue is reduced by.
pub const MOD: u32 = 1_000_000_007;

/// Residue modulo [`MOD`].
///
/// Stored as `u32`, multiplied through `u64` so that no product can overflow
/// before reduction.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct ModInt(u32);

impl ModInt {
    pub const ZERO: ModInt = ModInt(0);
    pub const ONE: ModInt = ModInt(1);

    pub fn new(value: u64) -> Self {
        ModInt((value % MOD as u64) as u32)
    }

    pub fn val(self) -> u32 {
        self.0
    }

    /// `self` raised to `exp` by repeated squaring. `pow(0)` is one, also for zero.
    pub fn pow(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut acc = ModInt::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                acc *= base;
            }
            base *= base;
            exp >>= 1;
        }
        acc
    }

    /// Multiplicative inverse via Fermat's little theorem.
    ///
    /// `self` must not be zero; zero maps to zero.
    pub fn inv(self) -> Self {
        self.pow(MOD as u64 - 2)
    }
}

impl Add for ModInt {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let sum = self.0 + rhs.0;
        ModInt(if sum >= MOD { sum - MOD } else { sum })
    }
}

impl Sub for ModInt {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        ModInt(if self.0 >= rhs.0 {
            self.0 - rhs.0
        } else {
            self.0 + MOD - rhs.0
        })
    }
}

impl Mul for ModInt {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        ModInt((self.0 as u64 * rhs.0 as u64 % MOD as u64) as u32)
    }
}

impl Div for ModInt {
    type Output = Self;
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inv()
    }
}

impl Neg for ModInt {
    type Output = Self;
    fn neg(self) -> Self {
        ModInt::ZERO - self
    }
}

macro_rules! assign_impl {
    ($assign_trait:ident, $assign_fn:ident, $op_fn:ident) => {
        impl $assign_trait for ModInt {
            fn $assign_fn(&mut self, rhs: Self) {
                *self = (*self).$op_fn(rhs);
            }
        }
    };
}

assign_impl!(AddAssign, add_assign, add);
assign_impl!(SubAssign, sub_assign, sub);
assign_impl!(MulAssign, mul_assign, mul);
assign_impl!(DivAssign, div_assign, div);

macro_rules! from_impl {
    ($num_type:ty) => {
        impl From<$num_type> for ModInt {
            fn from(value: $num_type) -> Self {
                ModInt::new(value as u64)
            }
        }
    };
}

from_impl!(u8);
from_impl!(u16);
from_impl!(u32);
from_impl!(u64);
from_impl!(usize);

impl Sum for ModInt {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ModInt::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a ModInt> for ModInt {
    fn sum<I: Iterator<Item = &'a ModInt>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Debug for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
