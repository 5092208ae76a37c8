//! The coordinate model: a 2- or 3-tuple of finite reals, generic over a
//! numeric type.

use std::fmt;

use num_traits::{Num, NumCast};

/// The numeric bound shared by every geometry type in this crate: wide
/// enough to admit both integer and floating coordinates, narrow enough to
/// rule out anything that can't be cast or compared.
pub trait CoordNum: Num + NumCast + PartialOrd + PartialEq + Copy + fmt::Debug {}
impl<T> CoordNum for T where T: Num + NumCast + PartialOrd + PartialEq + Copy + fmt::Debug {}

/// A 2D or 3D coordinate. There is no `m` dimension and no representation
/// of an absent ordinate pair: a `Coord` is always either `(x, y)` or
/// `(x, y, z)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord<T: CoordNum = f64> {
    pub x: T,
    pub y: T,
    pub z: Option<T>,
}

impl<T: CoordNum> Coord<T> {
    pub fn xy(x: T, y: T) -> Self {
        Coord { x, y, z: None }
    }

    pub fn xyz(x: T, y: T, z: T) -> Self {
        Coord { x, y, z: Some(z) }
    }

    pub fn is_3d(&self) -> bool {
        self.z.is_some()
    }
}

impl<T: CoordNum + fmt::Display> fmt::Display for Coord<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.z {
            Some(z) => write!(f, "({}, {}, {})", self.x, self.y, z),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}
