//! Immutable Quadray axis table.
//!
//! The four basis directions point from the centre of a regular tetrahedron to
//! its vertices. Axis order equals array index (`W=0, X=1, Y=2, Z=3`); there is
//! no second naming convention and no permutation table.
//!
//! ```text
//!   axis  direction      chirality
//!   W     (+1, +1, +1)   Right
//!   X     (+1, -1, -1)   Left
//!   Y     (-1, +1, -1)   Right
//!   Z     (-1, -1, +1)   Left
//! ```
//!
//! Chirality selects the circulant ordering a rotation about the axis needs:
//! removing `X` or `Z` from the ascending `(W, X, Y, Z)` order leaves the other
//! three with the opposite cyclic orientation to removing `W` or `Y`.

use std::fmt;
use std::str::FromStr;

use config::constants::SQRT_3;
use serde::{Deserialize, Serialize};

use crate::core::vec3::Vec3;
use crate::error::RtError;

/// One of the four Quadray basis axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    /// Index 0, direction `(+1, +1, +1)`.
    W,
    /// Index 1, direction `(+1, -1, -1)`.
    X,
    /// Index 2, direction `(-1, +1, -1)`.
    Y,
    /// Index 3, direction `(-1, -1, +1)`.
    Z,
}

/// Ordering of the F/G/H coefficients inside a 3×3 circulant matrix.
///
/// - `Right`: `[[F, H, G], [G, F, H], [H, G, F]]`
/// - `Left`:  `[[F, G, H], [H, F, G], [G, H, F]]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Circulant {
    /// Right circulant, used by `W` and `Y`.
    Right,
    /// Left circulant (G and H swapped), used by `X` and `Z`.
    Left,
}

impl Circulant {
    /// The other ordering. Applying it rotates in the mirrored direction.
    pub fn opposite(self) -> Self {
        match self {
            Circulant::Right => Circulant::Left,
            Circulant::Left => Circulant::Right,
        }
    }
}

/// Static description of one basis axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSpec {
    /// The axis this entry describes.
    pub axis: Axis,
    /// Single-letter display name.
    pub name: &'static str,
    /// Un-normalized Cartesian direction (quadrance 3).
    pub direction: [f64; 3],
    /// Circulant ordering required by rotations about this axis.
    pub chirality: Circulant,
}

/// The axis table, indexed by [`Axis::index`].
pub const AXIS_TABLE: [AxisSpec; 4] = [
    AxisSpec {
        axis: Axis::W,
        name: "W",
        direction: [1.0, 1.0, 1.0],
        chirality: Circulant::Right,
    },
    AxisSpec {
        axis: Axis::X,
        name: "X",
        direction: [1.0, -1.0, -1.0],
        chirality: Circulant::Left,
    },
    AxisSpec {
        axis: Axis::Y,
        name: "Y",
        direction: [-1.0, 1.0, -1.0],
        chirality: Circulant::Right,
    },
    AxisSpec {
        axis: Axis::Z,
        name: "Z",
        direction: [-1.0, -1.0, 1.0],
        chirality: Circulant::Left,
    },
];

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 4] = [Axis::W, Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis inside a Quadray tuple.
    ///
    /// # Examples
    /// ```
    /// use quadray_rt::Axis;
    /// assert_eq!(Axis::Y.index(), 2);
    /// ```
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Axis for a component index, `None` past 3.
    pub fn from_index(index: usize) -> Option<Axis> {
        Axis::ALL.get(index).copied()
    }

    /// Table entry for this axis.
    pub fn spec(self) -> &'static AxisSpec {
        &AXIS_TABLE[self.index()]
    }

    /// Single-letter name.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Un-normalized Cartesian direction of the basis vector.
    pub fn direction(self) -> Vec3 {
        Vec3::from_array(self.spec().direction)
    }

    /// Cartesian unit direction, the rotation axis used by the quaternion
    /// reference.
    ///
    /// # Examples
    /// ```
    /// use quadray_rt::Axis;
    /// let u = Axis::X.unit_direction();
    /// assert!((u.length_squared() - 1.0).abs() < 1e-15);
    /// ```
    pub fn unit_direction(self) -> Vec3 {
        self.direction() / SQRT_3
    }

    /// Circulant ordering used by rotations about this axis.
    pub fn chirality(self) -> Circulant {
        self.spec().chirality
    }

    /// The three axes mixed by a rotation about `self`, in ascending index
    /// order.
    ///
    /// # Examples
    /// ```
    /// use quadray_rt::Axis;
    /// assert_eq!(Axis::X.free_axes(), [Axis::W, Axis::Y, Axis::Z]);
    /// ```
    pub fn free_axes(self) -> [Axis; 3] {
        match self {
            Axis::W => [Axis::X, Axis::Y, Axis::Z],
            Axis::X => [Axis::W, Axis::Y, Axis::Z],
            Axis::Y => [Axis::W, Axis::X, Axis::Z],
            Axis::Z => [Axis::W, Axis::X, Axis::Y],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = RtError;

    /// Parses `W`, `X`, `Y` or `Z` (case-insensitive, surrounding whitespace
    /// ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "W" => Ok(Axis::W),
            "X" => Ok(Axis::X),
            "Y" => Ok(Axis::Y),
            "Z" => Ok(Axis::Z),
            _ => Err(RtError::UnknownAxis(s.to_string())),
        }
    }
}
