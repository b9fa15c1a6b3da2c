use std::collections::HashMap;
use std::collections::hash_map::Entry;

use image::{DynamicImage, GenericImageView, imageops::FilterType};
use palette::Srgb;

use crate::error::ExtractError;

/// Flattened RGB pixels of an image resized to a fixed square.
///
/// Both extractors work on a `Sample` so the cost of an extraction does not
/// depend on the size of the uploaded image.
#[derive(Clone, Debug)]
pub struct Sample {
    pixels: Vec<Srgb<u8>>,
}

impl Sample {
    /// Resize `img` to `dim`×`dim` (nearest-neighbour, aspect ratio ignored)
    /// and drop every channel except red, green and blue.
    pub fn from_image(img: &DynamicImage, dim: u32) -> Result<Self, ExtractError> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(ExtractError::EmptyImage { width, height });
        }
        if dim == 0 {
            return Err(ExtractError::ZeroResizeTarget);
        }

        let rgb8 = img.resize_exact(dim, dim, FilterType::Nearest).to_rgb8();
        let pixels: Vec<Srgb<u8>> = rgb8
            .pixels()
            .map(|p| Srgb::new(p[0], p[1], p[2]))
            .collect();

        let expected = (dim as usize) * (dim as usize);
        if pixels.len() != expected {
            return Err(ExtractError::SampleSizeMismatch {
                expected,
                found: pixels.len(),
            });
        }

        log::debug!("sampled {}x{} image down to {}x{}", width, height, dim, dim);
        Ok(Self { pixels })
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Srgb<u8>] {
        &self.pixels
    }

    /// Every distinct color with its number of occurrences, in the order each
    /// color was first seen.
    pub fn color_counts(&self) -> Vec<(Srgb<u8>, usize)> {
        let mut slots: HashMap<(u8, u8, u8), usize> = HashMap::new();
        let mut counts: Vec<(Srgb<u8>, usize)> = Vec::new();

        for &pix in &self.pixels {
            match slots.entry(pix.into_components()) {
                Entry::Occupied(slot) => counts[*slot.get()].1 += 1,
                Entry::Vacant(slot) => {
                    slot.insert(counts.len());
                    counts.push((pix, 1));
                }
            }
        }

        counts
    }
}
