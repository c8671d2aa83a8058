//! Compact storage for large, sparse binary masks.
//!
//! Masks used in EDA process design are huge grids of on/off cells that are
//! mostly empty and highly repetitive. `MaskArray` stores each row as a list
//! of runs, interns identical rows in a shared `RowPool`, and implements set
//! algebra, queries, and geometry directly on the runs. Masks can be saved as
//! two-state RLE text or in a binary page format with a symbol table.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

pub mod axis;
pub mod dense;
pub mod io;
pub mod mask;
pub mod pool;
pub mod rect;
pub mod row;
pub mod runs;
pub mod vec2;

pub use mask::MaskArray;

/// Version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod traits {
    //! Traits that are useful to have in scope.

    pub use crate::rect::CanContain;
}

pub mod prelude {
    //! Commonly used types.

    pub use crate::traits::*;

    pub use crate::axis::Axis;
    pub use crate::dense::DenseMask;
    pub use crate::io::{export_mask, import_mask, MaskFormat, MaskFormatError};
    pub use crate::io::{PagesError, Rle, RleError};
    pub use crate::mask::{MaskArray, MaskCover, MaskError, MaskResult, MaskStats};
    pub use crate::pool::{RowPool, SharedRowPool};
    pub use crate::rect::Rect;
    pub use crate::row::{Row, RowKind};
    pub use crate::runs::{BoolOp, Run, RunList};
    pub use crate::vec2::UVec2;
}
