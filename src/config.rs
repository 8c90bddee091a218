/*!
 * # Configuration
 *
 * Shared, immutable configuration for the generator and the discriminator,
 * validated once at module construction.
 */

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: i64 },

    #[error("img_size must be divisible by 4 to survive two 2x upsampling stages, got {0}")]
    NotUpsampleable(i64),

    #[error("img_size must be divisible by 16 to survive four stride-2 convolutions, got {0}")]
    NotDownsampleable(i64),
}

/// Result type for module construction
pub type Result<T> = std::result::Result<T, ConfigError>;

/**
 * Dimensions shared by both networks.
 *
 * - `channels` : color depth of the images
 * - `img_size` : side length of the square images
 * - `latent_dim` : length of the unstructured noise vector
 * - `code_dim` : length of the structured latent code
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GanConfig {
    pub channels: i64,
    pub img_size: i64,
    pub latent_dim: i64,
    pub code_dim: i64,
}

impl GanConfig {
    /// Width of the generator input, noise and code concatenated.
    pub fn input_dim(&self) -> i64 {
        self.latent_dim + self.code_dim
    }

    /// Spatial side of the generator's first feature map, before the two
    /// 2x upsampling stages restore `img_size`.
    pub fn init_size(&self) -> i64 {
        self.img_size / 4
    }

    /// Spatial side of the discriminator's last feature map, after four
    /// stride-2 convolutions.
    pub fn ds_size(&self) -> i64 {
        self.img_size / 16
    }

    pub(crate) fn validate_generator(&self) -> Result<()> {
        self.validate_fields()?;
        if self.img_size % 4 != 0 {
            return Err(ConfigError::NotUpsampleable(self.img_size));
        }
        Ok(())
    }

    // Stride-2 convolutions with padding 1 ceil-halve odd extents while
    // ds_size floors, so anything not divisible by 16 would make the trunk
    // output and the head input widths disagree at runtime.
    pub(crate) fn validate_discriminator(&self) -> Result<()> {
        self.validate_fields()?;
        if self.img_size % 16 != 0 {
            return Err(ConfigError::NotDownsampleable(self.img_size));
        }
        Ok(())
    }

    fn validate_fields(&self) -> Result<()> {
        let fields = [
            ("channels", self.channels),
            ("img_size", self.img_size),
            ("latent_dim", self.latent_dim),
            ("code_dim", self.code_dim),
        ];
        for (name, value) in fields {
            if value <= 0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn cfg(img_size: i64) -> GanConfig {
        GanConfig {
            channels: 1,
            img_size,
            latent_dim: 62,
            code_dim: 2,
        }
    }

    #[test]
    fn derived_sizes() {
        assert_eq!(cfg(28).init_size(), 7);
        assert_eq!(cfg(32).init_size(), 8);
        assert_eq!(cfg(32).ds_size(), 2);
        assert_eq!(cfg(64).ds_size(), 4);
        assert_eq!(cfg(32).input_dim(), 64);
    }

    #[test]
    fn generator_validation() {
        assert!(cfg(28).validate_generator().is_ok());
        assert!(cfg(32).validate_generator().is_ok());
        assert!(matches!(
            cfg(30).validate_generator(),
            Err(ConfigError::NotUpsampleable(30))
        ));
    }

    #[test]
    fn discriminator_validation() {
        assert!(cfg(32).validate_discriminator().is_ok());
        assert!(cfg(64).validate_discriminator().is_ok());
        // 28 upsamples cleanly but does not downsample cleanly.
        assert!(matches!(
            cfg(28).validate_discriminator(),
            Err(ConfigError::NotDownsampleable(28))
        ));
    }

    #[test]
    fn rejects_non_positive_fields() {
        let mut c = cfg(32);
        c.code_dim = 0;
        assert!(matches!(
            c.validate_generator(),
            Err(ConfigError::NonPositive { name: "code_dim", .. })
        ));
    }
}
