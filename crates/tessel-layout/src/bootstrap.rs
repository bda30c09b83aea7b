//! One-call layout setup for applications.

use crate::collaborators::Collaborators;
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::manager::LayoutManager;

/// Validate `config`, initialise the library and create the layout.
///
/// On success the returned manager holds the layout (see
/// [`LayoutManager::layout`]) and the initialised collaborators.
///
/// # Errors
///
/// Any [`LayoutError`] from validation or creation. Nothing is retried.
pub fn bootstrap(
    config: &LayoutConfig,
    collaborators: Collaborators,
) -> Result<LayoutManager, LayoutError> {
    let mut manager = LayoutManager::from_config(config, collaborators)?;
    manager.initialize_library();
    manager.create_layout()?;
    Ok(manager)
}

/// [`bootstrap`], terminating the process with exit code 1 on failure.
///
/// The error is reported through `tracing::error!` before exiting. This
/// is the only function in the workspace that ends the process; library
/// code should call [`bootstrap`] and handle the error.
pub fn bootstrap_or_exit(config: &LayoutConfig, collaborators: Collaborators) -> LayoutManager {
    match bootstrap(config, collaborators) {
        Ok(manager) => manager,
        Err(err) => {
            tracing::error!(error = %err, "layout creation failed");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_codec::LayoutScheme;

    fn small(dims: &[u32]) -> LayoutConfig {
        LayoutConfig {
            pool_size_gb: 0.01,
            ..LayoutConfig::new(dims.to_vec())
        }
    }

    #[test]
    fn bootstrap_creates_layout() {
        let config = small(&[4, 4, 4, 4]);
        let manager = bootstrap(&config, Collaborators::for_config(&config)).unwrap();
        assert!(manager.is_library_initialized());
        let layout = manager.layout().unwrap();
        assert_eq!(layout.scheme(), LayoutScheme::Checkerboard2);
        assert_eq!(layout.volume(), 256);
    }

    #[test]
    fn bootstrap_propagates_validation_errors() {
        let config = LayoutConfig {
            lattice_size: vec![4, 4],
            ..Default::default()
        };
        assert!(matches!(
            bootstrap(&config, Collaborators::default()),
            Err(LayoutError::DimensionMismatch {
                expected: 4,
                got: 2
            })
        ));
    }

    #[test]
    fn bootstrap_propagates_codec_errors() {
        let config = small(&[6, 4, 4, 4]).with_scheme(LayoutScheme::Checkerboard32);
        assert!(matches!(
            bootstrap(&config, Collaborators::default()),
            Err(LayoutError::Codec(_))
        ));
    }

    #[test]
    fn bootstrap_or_exit_returns_manager_on_success() {
        let config = small(&[2, 2]).with_scheme(LayoutScheme::Lexicographic);
        let manager = bootstrap_or_exit(&config, Collaborators::default());
        assert!(manager.is_created());
    }
}
