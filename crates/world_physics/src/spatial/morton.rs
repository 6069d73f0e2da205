//! Morton (Z-order) addressing for the per-depth node arrays
//!
//! At depth `d` the octree has `2^d` cells per axis and `8^d` nodes. Cell
//! coordinates are bit-interleaved (x in bit 0, y in bit 1, z in bit 2 of each
//! triple, least significant level first), so the children of `code` are
//! `(code << 3) + 0..7` and the parent is `code >> 3`.

/// Number of nodes stored at `depth`
pub fn nodes_at_depth(depth: u32) -> usize {
    1usize << (3 * depth)
}

/// Interleave cell coordinates `(x, y, z)` at `depth` into a flat index
pub fn encode(depth: u32, x: u32, y: u32, z: u32) -> usize {
    let mut code = 0usize;
    for bit in 0..depth {
        let shift = 3 * bit;
        code |= (((x >> bit) & 1) as usize) << shift;
        code |= (((y >> bit) & 1) as usize) << (shift + 1);
        code |= (((z >> bit) & 1) as usize) << (shift + 2);
    }
    code
}

/// Inverse of [`encode`]
pub fn decode(depth: u32, code: usize) -> (u32, u32, u32) {
    let (mut x, mut y, mut z) = (0u32, 0u32, 0u32);
    for bit in 0..depth {
        let shift = 3 * bit;
        x |= (((code >> shift) & 1) as u32) << bit;
        y |= (((code >> (shift + 1)) & 1) as u32) << bit;
        z |= (((code >> (shift + 2)) & 1) as u32) << bit;
    }
    (x, y, z)
}

/// Codes of the 8 children one level deeper
pub fn children(code: usize) -> [usize; 8] {
    let base = code << 3;
    [base, base + 1, base + 2, base + 3, base + 4, base + 5, base + 6, base + 7]
}

/// Code of the parent one level up (the root is its own parent)
pub fn parent(code: usize) -> usize {
    code >> 3
}
