/// Side length of the square sample every image is resized to before analysis.
pub const RESIZE_DIM: u32 = 150;

/// Palette size used when the caller does not ask for a specific count.
pub const DEFAULT_COLOR_COUNT: usize = 9;

/// Hard upper bound on k-means iterations.
pub const MAX_ITERATIONS: usize = 300;

/// Total centroid movement (squared, in `[0, 1]` RGB units) below which
/// clustering is considered converged.
pub const CONVERGENCE_THRESHOLD: f32 = 1e-5;

/// Seed for k-means++ initialisation. Fixed so the cluster path is repeatable.
pub const RANDOM_SEED: u64 = 0;

/// `kmeans_colors` stores cluster assignments as `u8`.
pub const MAX_CLUSTERS: usize = 256;

/// Knobs shared by both extractors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtractorConfig {
    pub resize_dim: u32,
    pub max_iterations: usize,
    pub convergence: f32,
    pub seed: u64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            resize_dim: RESIZE_DIM,
            max_iterations: MAX_ITERATIONS,
            convergence: CONVERGENCE_THRESHOLD,
            seed: RANDOM_SEED,
        }
    }
}

