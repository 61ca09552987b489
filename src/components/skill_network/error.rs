#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
	#[error("sphere radius must be finite and non-negative, got {0}")]
	InvalidRadius(f64),

	#[error("connection threshold must be finite and positive, got {0}")]
	InvalidThreshold(f64),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
	#[error("smoothing factor must lie in (0, 1], got {0}")]
	InvalidSmoothing(f64),

	#[error("visibility window is empty: near {near} > far {far}")]
	EmptyVisibilityWindow { near: f64, far: f64 },

	#[error("fog range is empty: near {near} >= far {far}")]
	EmptyFogRange { near: f64, far: f64 },

	#[error("field of view must lie in (0, 180) degrees, got {0}")]
	InvalidFieldOfView(f64),

	#[error("{name} must be finite, got {value}")]
	NotFinite { name: &'static str, value: f64 },
}

/// Anything that can stop the background scene from being built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
	#[error(transparent)]
	Layout(#[from] LayoutError),

	#[error(transparent)]
	Config(#[from] ConfigError),
}
