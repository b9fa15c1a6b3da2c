use std::panic::{self, AssertUnwindSafe};

use image::DynamicImage;
use kmeans_colors::get_kmeans;
use palette::Srgb;

use super::PaletteExtractor;
use crate::color_count::ColorCount;
use crate::colors::Palette;
use crate::config::{ExtractorConfig, MAX_CLUSTERS};
use crate::error::ExtractError;
use crate::sample::Sample;

/// Summarises the sample with k-means in RGB space.
///
/// Steps performed:
/// 1. Resize to a fixed square and flatten to RGB (see [`Sample`]).
/// 2. Seed `k` centroids with k-means++ (fixed seed), then alternate nearest
///    centroid assignment and mean updates until the centroids stop moving or
///    the iteration cap is hit.
/// 3. Round every centroid channel to the nearest integer in `0..=255`.
///
/// Always yields exactly `k` colors or an error. Centroid order is whatever
/// the clustering produced and carries no meaning.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClusterExtractor {
    config: ExtractorConfig,
}

impl ClusterExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }
}

impl PaletteExtractor for ClusterExtractor {
    fn name(&self) -> &'static str {
        "cluster"
    }

    fn extract(&self, img: &DynamicImage, count: ColorCount) -> Result<Palette, ExtractError> {
        let sample = Sample::from_image(img, self.config.resize_dim)?;
        let k = count.get();

        if k > sample.len() {
            return Err(ExtractError::ColorCountExceedsSample {
                requested: k,
                available: sample.len(),
            });
        }

        let distinct: Vec<Srgb<u8>> = sample
            .color_counts()
            .into_iter()
            .map(|(color, _)| color)
            .collect();
        if distinct.len() <= k {
            return Ok(pad_degenerate(distinct, k).into());
        }

        if k > MAX_CLUSTERS {
            return Err(ExtractError::TooManyClusters {
                requested: k,
                max: MAX_CLUSTERS,
            });
        }

        let points: Vec<Srgb> = sample.pixels().iter().map(|c| c.into_format()).collect();
        let config = self.config;
        let kmeans = panic::catch_unwind(AssertUnwindSafe(|| {
            get_kmeans(
                k,
                config.max_iterations,
                config.convergence,
                false,
                &points,
                config.seed,
            )
        }))
        .map_err(|_| ExtractError::ClusteringPanicked)?;

        if kmeans.centroids.len() != k {
            return Err(ExtractError::CentroidCountMismatch {
                expected: k,
                found: kmeans.centroids.len(),
            });
        }
        log::debug!("k-means settled on {} centroids, score {}", k, kmeans.score);

        let colors = kmeans
            .centroids
            .iter()
            .enumerate()
            .map(|(i, centroid)| quantize_centroid(i, centroid))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(colors.into())
    }
}

/// With no more distinct colors than clusters every color is its own
/// centroid; the leftover clusters are empty and keep the last centroid.
fn pad_degenerate(mut distinct: Vec<Srgb<u8>>, k: usize) -> Vec<Srgb<u8>> {
    if let Some(&last) = distinct.last() {
        distinct.resize(k, last);
    }
    distinct
}

fn quantize_centroid(index: usize, centroid: &Srgb) -> Result<Srgb<u8>, ExtractError> {
    let channel = |value: f32| -> Result<u8, ExtractError> {
        if !value.is_finite() {
            return Err(ExtractError::NonFiniteCentroid(index));
        }
        Ok((value * 255.0).round().clamp(0.0, 255.0) as u8)
    };
    Ok(Srgb::new(
        channel(centroid.red)?,
        channel(centroid.green)?,
        channel(centroid.blue)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn count(k: usize) -> ColorCount {
        ColorCount::new(k).unwrap()
    }

    fn gradient() -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_fn(240, 180, |x, y| {
            Rgb([x as u8, (y * 255 / 179) as u8, ((x + y) / 2) as u8])
        }))
    }

    #[test]
    fn solid_image_yields_repeated_centroid() {
        let img = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(150, 150, Rgb([255, 0, 0])));
        let palette = ClusterExtractor::default().extract(&img, count(3)).unwrap();
        assert_eq!(palette.to_triples(), vec![[255, 0, 0]; 3]);
    }

    #[test]
    fn returns_exactly_k_colors() {
        let img = gradient();
        let extractor = ClusterExtractor::new(ExtractorConfig {
            resize_dim: 40,
            ..ExtractorConfig::default()
        });
        for k in [1, 2, 5, 16, 50] {
            let palette = extractor.extract(&img, count(k)).unwrap();
            assert_eq!(palette.len(), k, "k = {k}");
        }
    }

    #[test]
    fn separates_well_spread_blocks() {
        let img = DynamicImage::ImageRgb8(ImageBuffer::from_fn(150, 150, |x, y| {
            let noise = ((x + y) % 3) as u8;
            if x < 75 { Rgb([10 + noise, 10, 10]) } else { Rgb([240 - noise, 240, 240]) }
        }));
        let mut palette = ClusterExtractor::default().extract(&img, count(2)).unwrap().to_triples();
        palette.sort();
        assert!(palette[0][0].abs_diff(11) <= 1 && palette[0][1] == 10, "{palette:?}");
        assert!(palette[1][0].abs_diff(239) <= 1 && palette[1][1] == 240, "{palette:?}");
    }

    #[test]
    fn fixed_seed_is_repeatable() {
        let img = gradient();
        let extractor = ClusterExtractor::default();
        assert_eq!(
            extractor.extract(&img, count(6)).unwrap(),
            extractor.extract(&img, count(6)).unwrap()
        );
    }

    #[test]
    fn too_many_clusters_for_backend() {
        let img = gradient();
        let result = ClusterExtractor::default().extract(&img, count(MAX_CLUSTERS + 1));
        assert!(matches!(result, Err(ExtractError::TooManyClusters { .. })));
    }

    #[test]
    fn more_clusters_than_sample_points() {
        let config = ExtractorConfig {
            resize_dim: 2,
            ..ExtractorConfig::default()
        };
        let result = ClusterExtractor::new(config).extract(&gradient(), count(5));
        assert!(matches!(
            result,
            Err(ExtractError::ColorCountExceedsSample { requested: 5, available: 4 })
        ));
    }

    #[test]
    fn quantize_rounds_and_clamps() {
        let c = quantize_centroid(0, &Srgb::new(0.5, 1.2, -0.1)).unwrap();
        assert_eq!(c, Srgb::new(128, 255, 0));
        assert!(matches!(
            quantize_centroid(3, &Srgb::new(f32::NAN, 0.0, 0.0)),
            Err(ExtractError::NonFiniteCentroid(3))
        ));
    }
}
