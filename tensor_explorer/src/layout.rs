//! Maps the `[H, B, S, D]` index space onto 3D positions.
//!
//! Each head becomes a block along X. Inside a block only the batch-0 slice
//! is resolved per cell (the front layer); every other batch collapses into a
//! single ghost volume, so a rebuild costs `O(H×S×D)` whatever `B` is.
//!
//! Everything here is pure: same shape and explode factor, same positions.

use bevy::math::{Vec2, Vec3};

use crate::data::{CellIndex, TensorShape};

/// Geometry constants for the layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSettings {
    pub cell_size: f32,
    pub gap: f32,
    /// Thickness of every layer along Z.
    pub layer_depth: f32,
    /// Head spacing as a multiple of the block width.
    pub head_spacing_factor: f32,
    /// Per-batch shift in X and Y.
    pub lateral_step: f32,
    /// Extra Z gap between consecutive batch layers.
    pub depth_pad: f32,
    /// How much harder explode pushes layers apart in Z than in XY.
    pub depth_explode_gain: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            cell_size: 0.4,
            gap: 0.05,
            layer_depth: 0.1,
            head_spacing_factor: 1.8,
            lateral_step: 0.15,
            depth_pad: 0.35,
            depth_explode_gain: 4.0,
        }
    }
}

impl LayoutSettings {
    pub fn pitch(&self) -> f32 {
        self.cell_size + self.gap
    }

    pub fn block_width(&self, shape: &TensorShape) -> f32 {
        shape.dim as f32 * self.pitch()
    }

    pub fn block_height(&self, shape: &TensorShape) -> f32 {
        shape.seq as f32 * self.pitch()
    }

    pub fn head_spacing(&self, shape: &TensorShape) -> f32 {
        self.block_width(shape) * self.head_spacing_factor
    }

    /// X of head `h`; heads are centered on the origin.
    pub fn head_x(&self, shape: &TensorShape, h: u32) -> f32 {
        let spacing = self.head_spacing(shape);
        -(shape.heads.saturating_sub(1) as f32) * spacing / 2.0 + h as f32 * spacing
    }

    pub fn xy_offset(&self, batch: u32, explode: f32) -> f32 {
        batch as f32 * self.lateral_step * (1.0 + explode)
    }

    pub fn z_offset(&self, batch: u32, explode: f32) -> f32 {
        -(batch as f32) * (self.layer_depth + self.depth_pad)
            * (1.0 + explode * self.depth_explode_gain)
    }

    pub fn cell_extents(&self) -> Vec3 {
        Vec3::new(self.cell_size, self.cell_size, self.layer_depth)
    }
}

/// A front-layer cell and its world position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellLayout {
    pub index: CellIndex,
    pub position: Vec3,
}

/// Batch 0 of one head, resolved per `(s, d)` in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct FrontLayer {
    pub cells: Vec<CellLayout>,
}

/// Coarse stand-in for a whole `S×D` slice at batch `b > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GhostLayer {
    pub batch: u32,
    pub position: Vec3,
    pub footprint: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlockLayout {
    pub head: u32,
    /// Center of the block's batch-0 plane.
    pub origin: Vec3,
    pub front: FrontLayer,
    /// Batches `1..B`, in order.
    pub ghosts: Vec<GhostLayer>,
}

impl BlockLayout {
    pub fn cell_count(&self) -> usize {
        self.front.cells.len()
    }
}

/// Lays out every head of `shape`.
///
/// Zero axes are treated as 1 and a negative or non-finite explode as 0, so
/// the result never contains NaN.
pub fn layout(shape: TensorShape, explode: f32, settings: &LayoutSettings) -> Vec<BlockLayout> {
    let shape = shape.normalized();
    let explode = sanitize_explode(explode);
    let pitch = settings.pitch();
    let half_width = settings.block_width(&shape) / 2.0;
    let half_height = settings.block_height(&shape) / 2.0;
    let footprint = Vec2::new(settings.block_width(&shape), settings.block_height(&shape));

    (0..shape.heads)
        .map(|h| {
            let head_x = settings.head_x(&shape, h);
            let front_xy = settings.xy_offset(0, explode);
            let front_z = settings.z_offset(0, explode);

            let mut cells = Vec::with_capacity(shape.cells_per_head());
            for s in 0..shape.seq {
                for d in 0..shape.dim {
                    let x = head_x - half_width
                        + d as f32 * pitch
                        + settings.cell_size / 2.0
                        + front_xy;
                    let y = half_height - s as f32 * pitch - settings.cell_size / 2.0 + front_xy;
                    cells.push(CellLayout {
                        index: CellIndex::new(h, 0, s, d),
                        position: Vec3::new(x, y, front_z),
                    });
                }
            }

            let ghosts = (1..shape.batch)
                .map(|b| {
                    let xy = settings.xy_offset(b, explode);
                    GhostLayer {
                        batch: b,
                        position: Vec3::new(head_x + xy, xy, settings.z_offset(b, explode)),
                        footprint,
                    }
                })
                .collect();

            BlockLayout {
                head: h,
                origin: Vec3::new(head_x, 0.0, 0.0),
                front: FrontLayer { cells },
                ghosts,
            }
        })
        .collect()
}

pub fn sanitize_explode(explode: f32) -> f32 {
    if explode.is_finite() {
        explode.max(0.0)
    } else {
        0.0
    }
}

pub fn interactive_cell_count(blocks: &[BlockLayout]) -> usize {
    blocks.iter().map(BlockLayout::cell_count).sum()
}

/// Radius around the origin that contains every laid-out volume.
pub fn scene_extent(blocks: &[BlockLayout], settings: &LayoutSettings) -> f32 {
    let cell_reach = settings.cell_extents().length() / 2.0;
    let cells = blocks
        .iter()
        .flat_map(|block| &block.front.cells)
        .map(|cell| cell.position.length() + cell_reach);
    let ghosts = blocks.iter().flat_map(|block| &block.ghosts).map(|ghost| {
        let half = ghost.footprint.extend(settings.layer_depth) / 2.0;
        ghost.position.length() + half.length()
    });
    cells.chain(ghosts).fold(0.0, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shapes() -> Vec<TensorShape> {
        let mut out = Vec::new();
        for h in 1..=3 {
            for b in 1..=4 {
                for s in 1..=3 {
                    for d in [1, 2, 5] {
                        out.push(TensorShape::new(h, b, s, d));
                    }
                }
            }
        }
        out
    }

    #[test]
    fn block_and_layer_counts_follow_the_shape() {
        let settings = LayoutSettings::default();
        for shape in shapes() {
            let blocks = layout(shape, 0.3, &settings);
            assert_eq!(blocks.len(), shape.heads as usize, "{shape}");
            for block in &blocks {
                assert_eq!(block.cell_count(), shape.cells_per_head(), "{shape}");
                assert_eq!(block.ghosts.len(), shape.batch as usize - 1, "{shape}");
                assert!(block.front.cells.iter().all(|c| c.index.b == 0));
            }
        }
    }

    #[test]
    fn interactive_cells_ignore_batch() {
        let settings = LayoutSettings::default();
        let counts: Vec<usize> = (1..=10)
            .map(|b| {
                let blocks = layout(TensorShape::new(3, b, 4, 6), 0.0, &settings);
                interactive_cell_count(&blocks)
            })
            .collect();
        assert!(counts.iter().all(|&n| n == 72));
    }

    #[test]
    fn reference_shape_example() {
        let blocks = layout(TensorShape::new(2, 8, 12, 8), 0.3, &LayoutSettings::default());
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b.cell_count() == 96 && b.ghosts.len() == 7));
        assert_eq!(interactive_cell_count(&blocks), 192);
    }

    fn bits(v: Vec3) -> [u32; 3] {
        v.to_array().map(f32::to_bits)
    }

    #[test]
    fn layout_is_bit_identical_across_calls() {
        let settings = LayoutSettings::default();
        let shape = TensorShape::new(3, 5, 7, 4);
        let first = layout(shape, 0.75, &settings);
        let second = layout(shape, 0.75, &settings);
        for (a, b) in first.iter().zip(&second) {
            for (ca, cb) in a.front.cells.iter().zip(&b.front.cells) {
                assert_eq!(bits(ca.position), bits(cb.position));
            }
            for (ga, gb) in a.ghosts.iter().zip(&b.ghosts) {
                assert_eq!(bits(ga.position), bits(gb.position));
            }
        }
    }

    #[test]
    fn explode_moves_layers_but_keeps_counts() {
        let settings = LayoutSettings::default();
        let shape = TensorShape::new(2, 4, 3, 3);
        let tight = layout(shape, 0.0, &settings);
        let loose = layout(shape, 1.5, &settings);

        assert_eq!(tight.len(), loose.len());
        for (a, b) in tight.iter().zip(&loose) {
            assert_eq!(a.cell_count(), b.cell_count());
            assert_eq!(a.ghosts.len(), b.ghosts.len());
            assert_ne!(a.ghosts[2].position, b.ghosts[2].position);
        }
    }

    #[test]
    fn explode_separates_depth_faster_than_lateral() {
        let settings = LayoutSettings::default();
        let shape = TensorShape::new(1, 3, 2, 2);
        let tight = layout(shape, 0.0, &settings);
        let loose = layout(shape, 1.0, &settings);

        let t = tight[0].ghosts[1].position;
        let l = loose[0].ghosts[1].position;
        let lateral_growth = l.y / t.y;
        let depth_growth = l.z / t.z;
        assert!(depth_growth > lateral_growth);
        assert!(l.z < t.z);
    }

    #[test]
    fn heads_are_centered_on_origin() {
        let settings = LayoutSettings::default();
        let blocks = layout(TensorShape::new(3, 1, 2, 2), 0.0, &settings);
        assert!(blocks[1].origin.x.abs() < 1e-6);
        assert!((blocks[0].origin.x + blocks[2].origin.x).abs() < 1e-6);
        let spacing = settings.head_spacing(&TensorShape::new(3, 1, 2, 2));
        assert!((blocks[2].origin.x - blocks[1].origin.x - spacing).abs() < 1e-6);
    }

    #[test]
    fn rows_go_down_and_columns_go_right() {
        let settings = LayoutSettings::default();
        let blocks = layout(TensorShape::new(1, 1, 3, 3), 0.0, &settings);
        let cells = &blocks[0].front.cells;
        let at = |s: u32, d: u32| cells[(s * 3 + d) as usize];

        assert_eq!(at(1, 2).index, CellIndex::new(0, 0, 1, 2));
        assert!(at(1, 0).position.y < at(0, 0).position.y);
        assert!(at(0, 1).position.x > at(0, 0).position.x);
        assert!((at(0, 1).position.x - at(0, 0).position.x - settings.pitch()).abs() < 1e-6);
        assert!((at(0, 0).position.y - at(1, 0).position.y - settings.pitch()).abs() < 1e-6);
    }

    #[test]
    fn ghosts_share_the_block_footprint() {
        let settings = LayoutSettings::default();
        let shape = TensorShape::new(1, 3, 4, 6);
        let blocks = layout(shape, 0.2, &settings);
        for ghost in &blocks[0].ghosts {
            let expected = Vec2::new(6.0 * settings.pitch(), 4.0 * settings.pitch());
            assert_eq!(ghost.footprint, expected);
        }
        assert_eq!(blocks[0].ghosts[0].batch, 1);
    }

    #[test]
    fn degenerate_inputs_stay_finite() {
        let settings = LayoutSettings::default();
        for explode in [f32::NAN, f32::INFINITY, -3.0] {
            let empty = TensorShape {
                heads: 0,
                batch: 0,
                seq: 0,
                dim: 0,
            };
            let blocks = layout(empty, explode, &settings);
            assert_eq!(blocks.len(), 1);
            assert!(blocks[0].front.cells.iter().all(|c| c.position.is_finite()));
        }
    }

    #[test]
    fn scene_extent_grows_with_heads() {
        let settings = LayoutSettings::default();
        let extent = |heads| {
            let blocks = layout(TensorShape::new(heads, 2, 4, 4), 0.0, &settings);
            scene_extent(&blocks, &settings)
        };
        let (small, large) = (extent(1), extent(6));
        assert!(small > 0.0);
        assert!(large > small);
    }
}
