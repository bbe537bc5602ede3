//! Index records for exported simplices.
//!
//! [`LineElement`] and [`TriangleElement`] refer to vertices by their
//! position in a vertex list (the `vertices` of a [`Mesh2D`](crate::core::mesh::Mesh2D)
//! or of a [`PlanarStraightLineGraph`](crate::core::pslg::PlanarStraightLineGraph)).
//! They carry no coordinates and are only meaningful next to the list they
//! were produced with.

use thiserror::Error;

/// Error when building a simplex record from a slice of the wrong length.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SimplexError {
    /// The slice does not hold exactly as many indices as the simplex has vertices.
    #[error("Expected {expected} vertex indices, found {found}")]
    WrongArity {
        /// Number of indices the record needs
        expected: usize,
        /// Number of indices supplied
        found: usize,
    },
}

/// A directed edge `i → j` between two vertex indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineElement {
    /// Start vertex index
    pub i: usize,
    /// End vertex index
    pub j: usize,
}

impl LineElement {
    /// Creates the edge `i → j`.
    #[must_use]
    pub const fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    /// The same edge traversed in the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.j, self.i)
    }

    /// The edge with its smaller index first.
    #[must_use]
    pub fn canonical(self) -> Self {
        Self::new(self.i.min(self.j), self.i.max(self.j))
    }

    /// Equality ignoring direction.
    #[must_use]
    pub fn undirected_eq(self, other: Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl From<[usize; 2]> for LineElement {
    fn from([i, j]: [usize; 2]) -> Self {
        Self::new(i, j)
    }
}

impl TryFrom<&[usize]> for LineElement {
    type Error = SimplexError;

    fn try_from(indices: &[usize]) -> Result<Self, Self::Error> {
        match *indices {
            [i, j] => Ok(Self::new(i, j)),
            _ => Err(SimplexError::WrongArity {
                expected: 2,
                found: indices.len(),
            }),
        }
    }
}

/// A triangle given by three vertex indices in counter-clockwise order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriangleElement {
    /// First vertex index
    pub i: usize,
    /// Second vertex index
    pub j: usize,
    /// Third vertex index
    pub k: usize,
}

impl TriangleElement {
    /// Creates the triangle `(i, j, k)`.
    #[must_use]
    pub const fn new(i: usize, j: usize, k: usize) -> Self {
        Self { i, j, k }
    }

    /// The vertex indices as an array.
    #[must_use]
    pub const fn to_array(self) -> [usize; 3] {
        [self.i, self.j, self.k]
    }

    /// The three directed edges `i→j`, `j→k`, `k→i`.
    #[must_use]
    pub const fn edges(self) -> [LineElement; 3] {
        [
            LineElement::new(self.i, self.j),
            LineElement::new(self.j, self.k),
            LineElement::new(self.k, self.i),
        ]
    }

    /// Whether `index` is one of the corners.
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        self.i == index || self.j == index || self.k == index
    }

    /// Equality up to cyclic rotation (same winding, any starting vertex).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use delaunay_mesh::core::simplex::TriangleElement;
    ///
    /// let t = TriangleElement::new(0, 2, 3);
    /// assert!(t.cyclic_eq(TriangleElement::new(2, 3, 0)));
    /// assert!(!t.cyclic_eq(TriangleElement::new(0, 3, 2)));
    /// ```
    #[must_use]
    pub const fn cyclic_eq(self, other: Self) -> bool {
        let Self { i, j, k } = other;
        (self.i == i && self.j == j && self.k == k)
            || (self.i == j && self.j == k && self.k == i)
            || (self.i == k && self.j == i && self.k == j)
    }

    /// Rotation starting at the smallest index; equal for cyclically equal triangles.
    #[must_use]
    pub fn canonical(self) -> Self {
        let Self { i, j, k } = self;
        if i <= j && i <= k {
            self
        } else if j <= i && j <= k {
            Self::new(j, k, i)
        } else {
            Self::new(k, i, j)
        }
    }
}

impl From<[usize; 3]> for TriangleElement {
    fn from([i, j, k]: [usize; 3]) -> Self {
        Self::new(i, j, k)
    }
}

impl TryFrom<&[usize]> for TriangleElement {
    type Error = SimplexError;

    fn try_from(indices: &[usize]) -> Result<Self, Self::Error> {
        match *indices {
            [i, j, k] => Ok(Self::new(i, j, k)),
            _ => Err(SimplexError::WrongArity {
                expected: 3,
                found: indices.len(),
            }),
        }
    }
}
