use image::DynamicImage;

use super::PaletteExtractor;
use crate::color_count::ColorCount;
use crate::colors::Palette;
use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::sample::Sample;

/// Returns the most frequent exact colors of the sample.
///
/// Deterministic: ties in frequency are resolved by which color the row-major
/// pixel walk met first. The palette is shorter than requested when the
/// sample has fewer distinct colors.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrequencyExtractor {
    config: ExtractorConfig,
}

impl FrequencyExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }
}

impl PaletteExtractor for FrequencyExtractor {
    fn name(&self) -> &'static str {
        "frequency"
    }

    fn extract(&self, img: &DynamicImage, count: ColorCount) -> Result<Palette, ExtractError> {
        let sample = Sample::from_image(img, self.config.resize_dim)?;
        let mut counts = sample.color_counts();

        // Stable sort keeps insertion order among equal counts.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(count.get());

        log::debug!(
            "frequency extractor kept {} of {} requested colors",
            counts.len(),
            count
        );
        Ok(counts.into_iter().map(|(color, _)| color).collect::<Vec<_>>().into())
    }
}
