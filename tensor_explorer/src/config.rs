//! Environment configuration: initial shape, explode factor, activation source.

use std::path::Path;

use bevy::log::warn;

use crate::data::{ActivationFixture, ActivationSource, TensorShape};
use crate::error::ExplorerError;
use crate::state::DEFAULT_EXPLODE;

pub const SHAPE_ENV: &str = "TENSOR_SHAPE";
pub const EXPLODE_ENV: &str = "TENSOR_EXPLODE";
pub const SEED_ENV: &str = "TENSOR_SEED";
pub const ACTIVATIONS_ENV: &str = "TENSOR_ACTIVATIONS";

/// Startup settings for the explorer.
#[derive(Clone, Debug)]
pub struct ExplorerConfig {
    pub shape: TensorShape,
    pub explode: f32,
    pub activations: ActivationSource,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            shape: TensorShape::default(),
            explode: DEFAULT_EXPLODE,
            activations: ActivationSource::default(),
        }
    }
}

/// Reads the `TENSOR_*` variables. Invalid values are logged and replaced by
/// defaults. Without `TENSOR_SHAPE`, a loaded fixture decides the shape.
pub fn explorer_config() -> ExplorerConfig {
    let seed = env_value(SEED_ENV, parse_seed);
    let fixture = std::env::var(ACTIVATIONS_ENV)
        .ok()
        .and_then(|path| match ActivationFixture::load(Path::new(&path)) {
            Ok(fixture) => Some(fixture),
            Err(err) => {
                warn!("{err}; using random activations");
                None
            }
        });

    let shape = env_value(SHAPE_ENV, |raw| raw.parse::<TensorShape>())
        .or_else(|| fixture.as_ref().map(ActivationFixture::tensor_shape))
        .unwrap_or_default();
    let explode = env_value(EXPLODE_ENV, parse_explode).unwrap_or(DEFAULT_EXPLODE);
    let activations = match fixture {
        Some(fixture) => ActivationSource::Fixture(fixture),
        None => ActivationSource::Random { seed },
    };

    ExplorerConfig {
        shape,
        explode,
        activations,
    }
}

pub fn parse_explode(raw: &str) -> Result<f32, ExplorerError> {
    match raw.trim().parse::<f32>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ExplorerError::InvalidExplode(raw.to_string())),
    }
}

pub fn parse_seed(raw: &str) -> Result<u64, ExplorerError> {
    raw.trim()
        .parse()
        .map_err(|_| ExplorerError::InvalidSeed(raw.to_string()))
}

fn env_value<T>(key: &str, parse: impl Fn(&str) -> Result<T, ExplorerError>) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    parse(&raw)
        .inspect_err(|err| warn!("{key}: {err}; using default"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn lock_env() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    struct EnvGuard {
        snapshot: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn capture(keys: &[&'static str]) -> Self {
            let snapshot = keys
                .iter()
                .map(|&key| (key, std::env::var(key).ok()))
                .collect();
            Self { snapshot }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.snapshot {
                match value {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }

    const ENV_KEYS: [&str; 4] = [SHAPE_ENV, EXPLODE_ENV, SEED_ENV, ACTIVATIONS_ENV];

    fn clean_env() -> (std::sync::MutexGuard<'static, ()>, EnvGuard) {
        let lock = lock_env();
        let guard = EnvGuard::capture(&ENV_KEYS);
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
        (lock, guard)
    }

    #[test]
    fn defaults_without_env() {
        let _env = clean_env();

        let config = explorer_config();

        assert_eq!(config.shape, TensorShape::new(2, 8, 12, 8));
        assert_eq!(config.explode, DEFAULT_EXPLODE);
        assert!(matches!(
            config.activations,
            ActivationSource::Random { seed: None }
        ));
    }

    #[test]
    fn env_overrides_shape_explode_and_seed() {
        let _env = clean_env();
        std::env::set_var(SHAPE_ENV, "4, 2, 6, 3");
        std::env::set_var(EXPLODE_ENV, "1.25");
        std::env::set_var(SEED_ENV, "42");

        let config = explorer_config();

        assert_eq!(config.shape, TensorShape::new(4, 2, 6, 3));
        assert_eq!(config.explode, 1.25);
        assert!(matches!(
            config.activations,
            ActivationSource::Random { seed: Some(42) }
        ));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let _env = clean_env();
        std::env::set_var(SHAPE_ENV, "2,0,4,4");
        std::env::set_var(EXPLODE_ENV, "-1");
        std::env::set_var(SEED_ENV, "lots");

        let config = explorer_config();

        assert_eq!(config.shape, TensorShape::default());
        assert_eq!(config.explode, DEFAULT_EXPLODE);
        assert!(matches!(
            config.activations,
            ActivationSource::Random { seed: None }
        ));
    }

    #[test]
    fn fixture_supplies_shape_when_unset() {
        let _env = clean_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"shape":[1,2,2,2],"values":[0.1,0.2,0.3,0.4]}}"#).unwrap();
        std::env::set_var(ACTIVATIONS_ENV, file.path());

        let config = explorer_config();

        assert_eq!(config.shape, TensorShape::new(1, 2, 2, 2));
        let ActivationSource::Fixture(fixture) = config.activations else {
            panic!("expected fixture activations");
        };
        assert_eq!(fixture.values, vec![0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn missing_fixture_falls_back_to_random() {
        let _env = clean_env();
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var(ACTIVATIONS_ENV, dir.path().join("missing.json"));
        std::env::set_var(SEED_ENV, "9");

        let config = explorer_config();

        assert!(matches!(
            config.activations,
            ActivationSource::Random { seed: Some(9) }
        ));
    }

    #[test]
    fn explode_parser_rejects_negative_and_non_finite() {
        assert_eq!(parse_explode(" 0.5 ").unwrap(), 0.5);
        assert_eq!(parse_explode("0").unwrap(), 0.0);
        assert!(parse_explode("-0.1").is_err());
        assert!(parse_explode("NaN").is_err());
        assert!(parse_explode("inf").is_err());
        assert!(parse_explode("wide").is_err());
    }

    #[test]
    fn seed_parser_accepts_u64() {
        assert_eq!(parse_seed("18446744073709551615").unwrap(), u64::MAX);
        assert!(matches!(parse_seed("-3"), Err(ExplorerError::InvalidSeed(_))));
    }
}
