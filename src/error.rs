//! Error types for scene construction, viewport setup and rendering.

use thiserror::Error;

/// Normalization was requested for a zero-length vector.
///
/// Fatal to a single pixel only: the render loop substitutes the background
/// color for that pixel and reports the count once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot normalize a zero-length vector")]
pub struct DegenerateVector;

/// Invalid scene description, detected at scene construction time.
///
/// These are configuration mistakes, never retried: the renderer refuses to
/// start rather than silently skipping the offending sphere.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// A sphere with zero, negative, or non-finite radius.
    #[error("sphere {index}: radius must be strictly positive, got {radius}")]
    InvalidRadius {
        /// Index of the offending sphere in scene order.
        index: usize,
        /// The rejected radius value.
        radius: f64,
    },

    /// A color component outside 0..=255.
    #[error("{location}: {channel} channel must be in 0..=255, got {value}")]
    ColorOutOfRange {
        /// Which color the component belongs to, e.g. `sphere 2 color`
        /// or `background_color`.
        location: String,
        /// Name of the offending channel.
        channel: char,
        /// The rejected component value.
        value: i64,
    },
}

/// Invalid viewport parameters, detected before any ray is cast.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ViewportError {
    /// Image width of zero pixels.
    #[error("image width must be positive")]
    InvalidWidth,

    /// Image height of zero pixels.
    #[error("image height must be positive")]
    InvalidHeight,

    /// Field of view outside the open interval (0, pi).
    #[error("field of view must lie in (0, pi) radians, got {fov}")]
    InvalidFov {
        /// The rejected field of view, in radians.
        fov: f64,
    },
}

/// Failure to load or validate a render configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for a render configuration.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path that was being parsed.
        path: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// The configuration describes an invalid scene.
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// The configuration describes an invalid viewport.
    #[error(transparent)]
    Viewport(#[from] ViewportError),
}
