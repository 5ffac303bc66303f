//! Tensor shape and cell index types shared by layout, scene, and UI.

use std::fmt;
use std::str::FromStr;

use crate::error::ExplorerError;

/// One of the four tensor axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Head,
    Batch,
    Sequence,
    Dim,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Head, Axis::Batch, Axis::Sequence, Axis::Dim];

    pub fn label(self) -> &'static str {
        match self {
            Axis::Head => "Heads (H)",
            Axis::Batch => "Batch (B)",
            Axis::Sequence => "Sequence (S)",
            Axis::Dim => "Dim (D)",
        }
    }

    /// Upper bound offered by the control panel slider.
    pub fn slider_max(self) -> u32 {
        match self {
            Axis::Head => 8,
            Axis::Batch => 16,
            Axis::Sequence | Axis::Dim => 32,
        }
    }
}

/// `[H, B, S, D]`. Every axis is at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TensorShape {
    pub heads: u32,
    pub batch: u32,
    pub seq: u32,
    pub dim: u32,
}

impl Default for TensorShape {
    fn default() -> Self {
        Self::new(2, 8, 12, 8)
    }
}

impl TensorShape {
    /// Builds a shape, clamping zero axes up to 1.
    pub fn new(heads: u32, batch: u32, seq: u32, dim: u32) -> Self {
        Self {
            heads: heads.max(1),
            batch: batch.max(1),
            seq: seq.max(1),
            dim: dim.max(1),
        }
    }

    /// Same shape with any zero axis raised to 1. Fields are public, so
    /// consumers that cannot trust their input go through this.
    pub fn normalized(self) -> Self {
        Self::new(self.heads, self.batch, self.seq, self.dim)
    }

    pub fn get(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Head => self.heads,
            Axis::Batch => self.batch,
            Axis::Sequence => self.seq,
            Axis::Dim => self.dim,
        }
    }

    pub fn with_axis(self, axis: Axis, value: u32) -> Self {
        let mut next = self;
        match axis {
            Axis::Head => next.heads = value,
            Axis::Batch => next.batch = value,
            Axis::Sequence => next.seq = value,
            Axis::Dim => next.dim = value,
        }
        next.normalized()
    }

    /// Cells in one head's front slice (`S×D`).
    pub fn cells_per_head(&self) -> usize {
        self.seq as usize * self.dim as usize
    }

    /// Interactive cells across all heads (`H×S×D`), independent of batch.
    pub fn front_cell_count(&self) -> usize {
        self.heads as usize * self.cells_per_head()
    }

    /// Every element of the full index space (`H×B×S×D`).
    pub fn element_count(&self) -> usize {
        self.front_cell_count() * self.batch as usize
    }
}

impl From<[u32; 4]> for TensorShape {
    fn from([heads, batch, seq, dim]: [u32; 4]) -> Self {
        Self::new(heads, batch, seq, dim)
    }
}

impl fmt::Display for TensorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.heads, self.batch, self.seq, self.dim
        )
    }
}

/// Parses `H,B,S,D`, optionally bracketed (`[2, 8, 12, 8]`). Zero axes are
/// rejected here rather than clamped, since they usually mean a typo.
impl FromStr for TensorShape {
    type Err = ExplorerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ExplorerError::InvalidShape(raw.to_string());
        let trimmed = raw.trim().trim_start_matches('[').trim_end_matches(']');
        let dims = trimmed
            .split(',')
            .map(|part| part.trim().parse::<u32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        match dims.as_slice() {
            &[h, b, s, d] if dims.iter().all(|&n| n > 0) => Ok(Self::new(h, b, s, d)),
            _ => Err(invalid()),
        }
    }
}

/// Position of one element in the 4D index space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex {
    pub h: u32,
    pub b: u32,
    pub s: u32,
    pub d: u32,
}

impl CellIndex {
    pub fn new(h: u32, b: u32, s: u32, d: u32) -> Self {
        Self { h, b, s, d }
    }

    /// Offset of a front-slice cell in an `H×S×D` row-major value buffer.
    pub fn front_offset(&self, shape: &TensorShape) -> usize {
        (self.h as usize * shape.seq as usize + self.s as usize) * shape.dim as usize
            + self.d as usize
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.h, self.b, self.s, self.d)
    }
}
