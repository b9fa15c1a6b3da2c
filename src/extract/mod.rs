mod cluster;
mod frequency;

pub use cluster::ClusterExtractor;
pub use frequency::FrequencyExtractor;

use image::DynamicImage;

use crate::color_count::ColorCount;
use crate::colors::Palette;
use crate::config::ExtractorConfig;
use crate::error::ExtractError;

/// A strategy that turns an image into a palette of at most `count` colors.
pub trait PaletteExtractor {
    fn name(&self) -> &'static str;

    fn extract(&self, img: &DynamicImage, count: ColorCount) -> Result<Palette, ExtractError>;
}

/// Runs `primary`, and `fallback` only when `primary` fails.
///
/// Failure causes are logged here; callers only ever see
/// [`ExtractError::NoPalette`] when both strategies fail.
pub struct Coordinator<P, F> {
    primary: P,
    fallback: F,
}

impl<P: PaletteExtractor, F: PaletteExtractor> Coordinator<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    pub fn extract(&self, img: &DynamicImage, count: ColorCount) -> Result<Palette, ExtractError> {
        let primary_err = match self.primary.extract(img, count) {
            Ok(palette) => return Ok(palette),
            Err(e) => e,
        };
        log::warn!(
            "{} extractor failed ({}), falling back to {}",
            self.primary.name(),
            primary_err,
            self.fallback.name()
        );

        self.fallback.extract(img, count).map_err(|fallback_err| {
            log::error!(
                "{} extractor failed as well ({}), no palette produced",
                self.fallback.name(),
                fallback_err
            );
            ExtractError::NoPalette
        })
    }
}

impl<P: PaletteExtractor, F: PaletteExtractor> PaletteExtractor for Coordinator<P, F> {
    fn name(&self) -> &'static str {
        "auto"
    }

    fn extract(&self, img: &DynamicImage, count: ColorCount) -> Result<Palette, ExtractError> {
        Coordinator::extract(self, img, count)
    }
}

impl Coordinator<ClusterExtractor, FrequencyExtractor> {
    /// Clustering first, exact-color counting as the fallback.
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self::new(
            ClusterExtractor::new(config),
            FrequencyExtractor::new(config),
        )
    }
}

impl Default for Coordinator<ClusterExtractor, FrequencyExtractor> {
    fn default() -> Self {
        Self::with_config(ExtractorConfig::default())
    }
}

/// Extract a palette with the default configuration.
pub fn extract_palette(img: &DynamicImage, count: ColorCount) -> Result<Palette, ExtractError> {
    Coordinator::default().extract(img, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use palette::Srgb;

    struct AlwaysFails;

    impl PaletteExtractor for AlwaysFails {
        fn name(&self) -> &'static str {
            "faulty"
        }

        fn extract(&self, _img: &DynamicImage, _count: ColorCount) -> Result<Palette, ExtractError> {
            Err(ExtractError::ClusteringPanicked)
        }
    }

    struct Fixed(Palette);

    impl PaletteExtractor for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn extract(&self, _img: &DynamicImage, _count: ColorCount) -> Result<Palette, ExtractError> {
            Ok(self.0.clone())
        }
    }

    fn stripes() -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_fn(300, 300, |x, _| {
            if x < 200 { Rgb([0, 128, 255]) } else { Rgb([250, 250, 10]) }
        }))
    }

    #[test]
    fn primary_result_wins() {
        let expected = Palette::new(vec![Srgb::new(1, 2, 3)]);
        let coordinator = Coordinator::new(Fixed(expected.clone()), AlwaysFails);
        let palette = coordinator.extract(&stripes(), ColorCount::default()).unwrap();
        assert_eq!(palette, expected);
    }

    #[test]
    fn falls_back_to_frequency_when_clustering_fails() {
        let img = stripes();
        let count = ColorCount::new(4).unwrap();
        let coordinator = Coordinator::new(AlwaysFails, FrequencyExtractor::default());
        let via_coordinator = coordinator.extract(&img, count).unwrap();
        let direct = FrequencyExtractor::default().extract(&img, count).unwrap();
        assert_eq!(via_coordinator, direct);
        assert_eq!(
            via_coordinator.to_triples(),
            vec![[0, 128, 255], [250, 250, 10]]
        );
    }

    #[test]
    fn both_failing_yields_no_palette() {
        let coordinator = Coordinator::new(AlwaysFails, AlwaysFails);
        let result = coordinator.extract(&stripes(), ColorCount::default());
        assert!(matches!(result, Err(ExtractError::NoPalette)));
    }

    #[test]
    fn empty_image_fails_both_extractors() {
        let img = DynamicImage::new_rgb8(0, 0);
        let result = extract_palette(&img, ColorCount::new(3).unwrap());
        assert!(matches!(result, Err(ExtractError::NoPalette)));
    }
}
