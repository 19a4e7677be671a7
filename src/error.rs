use grid_2d::Coord;
use std::fmt;

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    CoordOutOfRange(Coord),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::CoordOutOfRange(coord) => write!(
                f,
                "coordinate ({}, {}) is outside the hashable range",
                coord.x, coord.y
            ),
        }
    }
}

impl ::std::error::Error for Error {}
