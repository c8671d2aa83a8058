use maskarray::prelude::*;

/// Test layout to benchmark.
#[derive(Debug, Copy, Clone)]
pub struct Layout {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    pub cell: fn(UVec2) -> bool,
}

/// Vertical wires with a via grid every 64 rows.
pub const WIRES: Layout = Layout {
    name: "wires",
    width: 4096,
    height: 4096,
    cell: |pos| pos.x % 32 < 8 || (pos.y % 64 < 4 && pos.x % 16 < 4),
};

/// Sparse contacts on a diagonal lattice.
pub const CONTACTS: Layout = Layout {
    name: "contacts",
    width: 4096,
    height: 4096,
    cell: |pos| (pos.x + pos.y) % 97 < 3 && pos.y % 5 == 0,
};

/// Large solid pads with thin gaps.
pub const PADS: Layout = Layout {
    name: "pads",
    width: 2048,
    height: 2048,
    cell: |pos| pos.x % 256 < 240 && pos.y % 256 < 240,
};

pub const ALL: &[Layout] = &[WIRES, CONTACTS, PADS];

impl Layout {
    pub fn build(self, pool: SharedRowPool) -> MaskArray {
        let dense = DenseMask::from_fn(UVec2::new(self.width, self.height), self.cell);
        MaskArray::from_dense_with_pool(&dense, pool)
    }
}
