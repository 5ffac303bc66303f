//! Activation values shown on front-layer cells.
//!
//! By default every rebuild draws fresh random values in `[0, 1)`; a seed
//! makes them repeatable, and a JSON fixture supplies real data.

use std::path::Path;

use bevy::log::warn;
use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::data::TensorShape;
use crate::error::ExplorerError;

/// On-disk activation dump: `{"shape": [H, B, S, D], "values": [...]}`.
///
/// `values` is either the `H×S×D` front slice or the full `H×B×S×D` tensor,
/// row-major in both cases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivationFixture {
    pub shape: [u32; 4],
    pub values: Vec<f32>,
}

impl ActivationFixture {
    pub fn load(path: &Path) -> Result<Self, ExplorerError> {
        let json = std::fs::read_to_string(path).map_err(|source| ExplorerError::FixtureIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ExplorerError::FixtureParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn tensor_shape(&self) -> TensorShape {
        TensorShape::from(self.shape)
    }

    /// The `b = 0` slice as `H×S×D` values for `shape`.
    pub fn front_values(&self, shape: TensorShape) -> Result<Vec<f32>, ExplorerError> {
        let own = self.tensor_shape();
        if own != shape {
            return Err(ExplorerError::FixtureShapeMismatch {
                fixture: own,
                requested: shape,
            });
        }

        let front = shape.front_cell_count();
        let full = shape.element_count();
        if self.values.len() == front {
            return Ok(self.values.clone());
        }
        if self.values.len() != full {
            return Err(ExplorerError::FixtureLength {
                shape,
                front,
                full,
                found: self.values.len(),
            });
        }

        let per_head = shape.cells_per_head();
        let per_batch_block = per_head * shape.batch as usize;
        let mut out = Vec::with_capacity(front);
        for h in 0..shape.heads as usize {
            let start = h * per_batch_block;
            out.extend_from_slice(&self.values[start..start + per_head]);
        }
        Ok(out)
    }
}

#[derive(Clone, Debug)]
pub enum ActivationSource {
    /// Fresh values per rebuild. A seed pins them for a given shape.
    Random { seed: Option<u64> },
    Fixture(ActivationFixture),
}

impl Default for ActivationSource {
    fn default() -> Self {
        Self::Random { seed: None }
    }
}

impl ActivationSource {
    /// Front-slice values for `shape`, always exactly `H×S×D` long.
    pub fn values_for(&self, shape: TensorShape) -> Vec<f32> {
        let count = shape.front_cell_count();
        match self {
            Self::Random { seed } => random_values(count, *seed),
            Self::Fixture(fixture) => match fixture.front_values(shape) {
                Ok(values) => values,
                Err(err) => {
                    warn!("{err}; falling back to random activations");
                    random_values(count, None)
                }
            },
        }
    }
}

/// Activation source used by the scene builder.
#[derive(Resource, Clone, Debug, Default)]
pub struct ActivationSettings(pub ActivationSource);

fn random_values(count: usize, seed: Option<u64>) -> Vec<f32> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..count).map(|_| rng.gen::<f32>()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn random_values_cover_the_front_slice_in_unit_range() {
        let shape = TensorShape::new(2, 8, 12, 8);
        let values = ActivationSource::default().values_for(shape);
        assert_eq!(values.len(), 192);
        assert!(values.iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn seeded_values_repeat_across_rebuilds() {
        let shape = TensorShape::new(3, 2, 4, 5);
        let source = ActivationSource::Random { seed: Some(7) };
        assert_eq!(source.values_for(shape), source.values_for(shape));
    }

    #[test]
    fn full_tensor_fixture_keeps_only_batch_zero() {
        // H=2, B=2, S=1, D=2: [h0b0 | h0b1 | h1b0 | h1b1]
        let fixture = ActivationFixture {
            shape: [2, 2, 1, 2],
            values: vec![0.1, 0.2, 0.9, 0.9, 0.3, 0.4, 0.8, 0.8],
        };
        let values = fixture.front_values(TensorShape::new(2, 2, 1, 2)).unwrap();
        assert_eq!(values, vec![0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn front_slice_fixture_is_used_as_is() {
        let fixture = ActivationFixture {
            shape: [1, 4, 1, 3],
            values: vec![0.5, 0.25, 0.125],
        };
        let values = fixture.front_values(TensorShape::new(1, 4, 1, 3)).unwrap();
        assert_eq!(values, vec![0.5, 0.25, 0.125]);
    }

    #[test]
    fn mismatched_fixture_falls_back_to_random() {
        let fixture = ActivationFixture {
            shape: [1, 1, 1, 1],
            values: vec![0.5],
        };
        let shape = TensorShape::new(2, 1, 2, 2);
        assert!(matches!(
            fixture.front_values(shape),
            Err(ExplorerError::FixtureShapeMismatch { .. })
        ));
        assert_eq!(
            ActivationSource::Fixture(fixture).values_for(shape).len(),
            8
        );
    }

    #[test]
    fn wrong_value_count_is_reported() {
        let fixture = ActivationFixture {
            shape: [1, 2, 2, 2],
            values: vec![0.0; 5],
        };
        let err = fixture.front_values(fixture.tensor_shape()).unwrap_err();
        assert!(matches!(
            err,
            ExplorerError::FixtureLength {
                front: 4,
                full: 8,
                found: 5,
                ..
            }
        ));
    }

    #[test]
    fn load_reads_json_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"shape":[1,1,1,2],"values":[0.25,0.75]}}"#).unwrap();

        let fixture = ActivationFixture::load(file.path()).unwrap();

        assert_eq!(fixture.tensor_shape(), TensorShape::new(1, 1, 1, 2));
        assert_eq!(fixture.values, vec![0.25, 0.75]);
    }

    #[test]
    fn load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            ActivationFixture::load(file.path()),
            Err(ExplorerError::FixtureParse { .. })
        ));
    }
}
