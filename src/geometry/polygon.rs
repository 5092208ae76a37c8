use crate::geometry::coord::CoordNum;
use crate::geometry::linestring::LineString;

/// `Polygon(shell, holes)`. The shell and holes are kept as separate fields
/// rather than a flat `Vec<LineString>` of rings: the flatten codec treats
/// them asymmetrically (the shell is the first decoded child, holes are
/// the rest), and a dedicated field makes that asymmetry explicit rather
/// than implicit in a convention about index 0.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon<T: CoordNum = f64> {
    pub shell: LineString<T>,
    pub holes: Vec<LineString<T>>,
}

impl<T: CoordNum> Polygon<T> {
    pub fn new(shell: LineString<T>, holes: Vec<LineString<T>>) -> Self {
        Polygon { shell, holes }
    }

    pub fn shell(&self) -> &LineString<T> {
        &self.shell
    }

    pub fn holes(&self) -> &[LineString<T>] {
        &self.holes
    }
}
