//! Typed lengths. Everything the layout engine and the document writer
//! exchange is measured in [`Pt`]; [`In`] and [`Mm`] exist to make
//! configuration read the way paper sizes are usually written down.

use derive_more::{Add, AddAssign, Display, From, Into, MulAssign, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// PDF points, 1/72 of an inch
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    MulAssign,
    Sum,
    From,
    Into,
    Display,
)]
pub struct Pt(pub f32);

/// Inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, From, Into, Display)]
pub struct In(pub f32);

/// Millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, From, Into, Display)]
pub struct Mm(pub f32);

impl Pt {
    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// Dividing two lengths gives a plain ratio
impl Div<Pt> for Pt {
    type Output = f32;

    fn div(self, rhs: Pt) -> f32 {
        self.0 / rhs.0
    }
}

impl From<In> for Pt {
    fn from(value: In) -> Pt {
        Pt(value.0 * 72.0)
    }
}

impl From<Mm> for Pt {
    fn from(value: Mm) -> Pt {
        Pt(value.0 * 72.0 / 25.4)
    }
}

impl From<Pt> for Mm {
    fn from(value: Pt) -> Mm {
        Mm(value.0 * 25.4 / 72.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_units() {
        assert_eq!(Pt::from(In(1.0)), Pt(72.0));
        assert!((Pt::from(Mm(25.4)).0 - 72.0).abs() < 1e-4);
        assert!((Mm::from(Pt(72.0)).0 - 25.4).abs() < 1e-4);
    }

    #[test]
    fn arithmetic_stays_typed() {
        let mut y = Pt(10.0) + Pt(5.0) * 2.0;
        y -= Pt(4.0);
        assert_eq!(y, Pt(16.0));
        assert_eq!(Pt(30.0) / Pt(10.0), 3.0);
        assert_eq!([Pt(1.0), Pt(2.0)].into_iter().sum::<Pt>(), Pt(3.0));
        assert_eq!(Pt(3.0).max(Pt(4.0)), Pt(4.0));
    }
}
