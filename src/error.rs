use std::fmt::Display;

/// Reasons an extractor (or the whole extraction) can fail.
#[derive(Debug)]
pub enum ExtractError {
    /// No image bytes were supplied.
    MissingImage,
    /// The bytes could not be decoded into an image.
    Decode(image::ImageError),
    /// The image has a zero width or height.
    EmptyImage { width: u32, height: u32 },
    /// The configured resize target is zero.
    ZeroResizeTarget,
    /// Resizing produced a sample of unexpected length.
    SampleSizeMismatch { expected: usize, found: usize },
    /// More clusters requested than there are sample points.
    ColorCountExceedsSample { requested: usize, available: usize },
    /// More clusters requested than the clustering backend can index.
    TooManyClusters { requested: usize, max: usize },
    /// The clustering backend panicked.
    ClusteringPanicked,
    /// Clustering returned a different number of centroids than requested.
    CentroidCountMismatch { expected: usize, found: usize },
    /// A centroid channel came back as NaN or infinity.
    NonFiniteCentroid(usize),
    /// Both the cluster and the frequency extractor failed.
    NoPalette,
}

impl Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingImage => write!(f, "No image file provided"),
            Self::Decode(error) => write!(f, "Unable to decode image: {}", error),
            Self::EmptyImage { width, height } => {
                write!(f, "Image has no pixels ({}x{})", width, height)
            }
            Self::ZeroResizeTarget => write!(f, "Resize target must be at least 1x1"),
            Self::SampleSizeMismatch { expected, found } => write!(
                f,
                "Resized sample holds {} pixels, expected {}",
                found, expected
            ),
            Self::ColorCountExceedsSample {
                requested,
                available,
            } => write!(
                f,
                "Requested {} colors but the sample only has {} pixels",
                requested, available
            ),
            Self::TooManyClusters { requested, max } => write!(
                f,
                "Requested {} clusters, at most {} are supported",
                requested, max
            ),
            Self::ClusteringPanicked => write!(f, "Clustering aborted unexpectedly"),
            Self::CentroidCountMismatch { expected, found } => write!(
                f,
                "Clustering returned {} centroids, expected {}",
                found, expected
            ),
            Self::NonFiniteCentroid(index) => {
                write!(f, "Centroid {} has a non-finite channel", index)
            }
            Self::NoPalette => write!(f, "Failed to process image"),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(error) => Some(error),
            _ => None,
        }
    }
}

impl From<image::ImageError> for ExtractError {
    fn from(error: image::ImageError) -> Self {
        Self::Decode(error)
    }
}

/// Rejection of a requested palette size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorCountError {
    Zero,
    NotANumber(String),
}

impl Display for ColorCountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zero => write!(f, "Number of colors must be at least 1"),
            Self::NotANumber(value) => {
                write!(f, "Number of colors '{}' is not a positive integer", value)
            }
        }
    }
}

impl std::error::Error for ColorCountError {}
