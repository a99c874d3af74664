mod proc_errors;
mod tolerance;
mod vertex;
mod vertex_2;
mod vertex_3;

use enum_dispatch::enum_dispatch;
use serde::{Serialize, Deserialize};
use strum::{Display, EnumIter};

pub use proc_errors::{
    GeoError,
    ProcResult,
    err_str,
};
pub use tolerance::{
    NumericPolicy,
    Tolerance,
};
pub use vertex::{
    Vertex,
    VertexList,
};
pub use vertex_2::Vertex2;
pub use vertex_3::Vertex3;

/// Number of coordinate axes carried by a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    #[strum(serialize = "2D")]
    Two,
    #[strum(serialize = "3D")]
    Three,
}
impl Dimension {
    /// Axes present in this dimensionality, in storage order.
    pub fn axes(&self) -> &'static [Axis] {
        match self {
            Dimension::Two => &[Axis::X, Axis::Y],
            Dimension::Three => &[Axis::X, Axis::Y, Axis::Z],
        }
    }
}

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Coordinate access shared by every vertex kind.
/// Dispatched over the `Vertex` union.
#[enum_dispatch]
pub trait Coordinates {
    /// Dimensionality of the vertex.
    fn dimension(&self) -> crate::geo::Dimension;

    /// Value along an axis, `None` if the vertex has no such axis.
    fn coord(&self, axis: crate::geo::Axis) -> Option<f64>;

    /// Check that no coordinate is NaN or infinite.
    fn is_finite(&self) -> bool {
        self.dimension().axes().iter()
            .filter_map(|axis| self.coord(*axis))
            .all(f64::is_finite)
    }

    /// Return the first non-finite coordinate as an error.
    fn check_finite(&self) -> crate::geo::ProcResult<()> {
        for axis in self.dimension().axes() {
            if let Some(value) = self.coord(*axis) {
                if !value.is_finite() {
                    return Err(GeoError::NonFinite{axis: *axis, value});
                }
            }
        }
        Ok(())
    }
}
