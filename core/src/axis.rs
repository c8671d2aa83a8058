//! Enumeration of axes.
//!
//! These are mainly used for indexing specific components in a `UVec2`.

pub use Axis::*;

/// Enumeration of the two dimensions of a mask.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (columns; increases to the right).
    X = 0,
    /// Y axis (rows; increases downwards).
    Y = 1,
}

/// List of axes in order.
pub const AXES: &[Axis] = &[Axis::X, Axis::Y];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_order() {
        assert_eq!(vec![Axis::X, Axis::Y], AXES.to_vec());
        assert!(X < Y);
    }
}
