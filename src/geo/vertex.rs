use serde::{Serialize, Deserialize};
use enum_dispatch::enum_dispatch;

use crate::geo::{
    err_str,
    Coordinates,
    Dimension,
    GeoError,
    NumericPolicy,
    ProcResult,
    Tolerance,
    Vertex2,
    Vertex3,
};

/// A vertex of either dimensionality.
/// Serialized without a tag: `{x, y}` is 2D, `{x, y, z}` is 3D.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
#[enum_dispatch(Coordinates)]
pub enum Vertex {
    // 3D first, so a `z` field is never dropped into a 2D vertex
    D3(Vertex3),
    D2(Vertex2),
}
impl Vertex {
    /// Build a vertex from two or three coordinates.
    pub fn from_slice(coords: &[f64]) -> ProcResult<Self> {
        match coords {
            [x, y] => Ok(Vertex::D2(Vertex2::new(*x, *y))),
            [x, y, z] => Ok(Vertex::D3(Vertex3::new(*x, *y, *z))),
            _ => err_str(&format!("Expected 2 or 3 coordinates, got {}", coords.len())),
        }
    }

    /// Equality against an optional other vertex.
    ///
    /// - `None` is never equal.
    /// - The same vertex (by reference) is always equal, even with NaN coordinates.
    /// - Vertices of different dimensionality are never equal.
    /// - Otherwise every axis is compared with its counterpart under the tolerance.
    pub fn equals(&self, other: Option<&Vertex>, tolerance: Tolerance) -> bool {
        let other = match other {
            Some(other) => other,
            None => return false,
        };
        if std::ptr::eq(self, other) {
            return true;
        }
        match (self, other) {
            (Vertex::D2(a), Vertex::D2(b)) => a.within(b, tolerance),
            (Vertex::D3(a), Vertex::D3(b)) => a.within(b, tolerance),
            _ => false,
        }
    }

    /// Largest per-axis absolute difference, `None` if the dimensions differ.
    pub fn max_delta(&self, other: &Vertex) -> Option<f64> {
        match (self, other) {
            (Vertex::D2(a), Vertex::D2(b)) => Some(a.max_delta(b)),
            (Vertex::D3(a), Vertex::D3(b)) => Some(a.max_delta(b)),
            _ => None,
        }
    }
}
impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Vertex::D2(vertex) => std::fmt::Display::fmt(vertex, f),
            Vertex::D3(vertex) => std::fmt::Display::fmt(vertex, f),
        }
    }
}

/// A list of vertices, as stored in vertex files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VertexList {
    #[serde(default)]
    pub vertices: Vec<Vertex>,
}
impl VertexList {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        VertexList{vertices}
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Count the vertices of a given dimensionality.
    pub fn count(&self, dimension: Dimension) -> usize {
        self.vertices.iter().filter(|v| v.dimension() == dimension).count()
    }

    /// Find the first vertex the policy rejects.
    pub fn first_invalid(&self, policy: NumericPolicy) -> Option<(usize, GeoError)> {
        self.vertices.iter().enumerate()
            .find_map(|(idx, vertex)| policy.check(vertex).err().map(|error| (idx, error)))
    }
}
