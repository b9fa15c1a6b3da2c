use wasm_bindgen::prelude::*;
use js_sys::{Array, Object, Reflect};

pub mod color_count;
pub mod colors;
pub mod config;
pub mod error;
pub mod extract;
pub mod sample;

pub use color_count::ColorCount;
pub use colors::Palette;
pub use config::ExtractorConfig;
pub use error::{ColorCountError, ExtractError};
pub use extract::{ClusterExtractor, Coordinator, FrequencyExtractor, PaletteExtractor, extract_palette};
pub use sample::Sample;

// ------------------------------------------------------------
// Byte-level entry points
// ------------------------------------------------------------

/// Decode an uploaded image and extract its palette with `extractor`.
///
/// Empty input is treated as a missing upload and rejected before decoding.
pub fn extract_palette_bytes_with<E: PaletteExtractor + ?Sized>(
    input: &[u8],
    count: ColorCount,
    extractor: &E,
) -> Result<Palette, ExtractError> {
    if input.is_empty() {
        return Err(ExtractError::MissingImage);
    }
    let img = image::load_from_memory(input)?;
    extractor.extract(&img, count)
}

/// Decode an uploaded image and extract its palette, clustering first and
/// counting exact colors if clustering fails.
pub fn extract_palette_bytes(input: &[u8], count: ColorCount) -> Result<Palette, ExtractError> {
    extract_palette_bytes_with(input, count, &Coordinator::default())
}

// ------------------------------------------------------------
// wasm export
// ------------------------------------------------------------

/// Extract a palette from an encoded image.
///
/// `colors` is the requested palette size as sent in a form field; it
/// defaults to 9 when absent or blank. The returned object has two keys:
/// * `colors`: array of `[r, g, b]` integer triples
/// * `hex`: the same colors as `RRGGBB` strings
#[wasm_bindgen(js_name = extractPalette)]
pub fn extract_palette_js(input: Vec<u8>, colors: Option<String>) -> Result<Object, JsValue> {
    let count = ColorCount::from_field(colors.as_deref())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let palette =
        extract_palette_bytes(&input, count).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let colors_js = Array::new();
    for [r, g, b] in palette.to_triples() {
        let triple = Array::of3(&r.into(), &g.into(), &b.into());
        colors_js.push(&triple);
    }
    let hex_js = Array::new();
    for hex in palette.to_hex_strings() {
        hex_js.push(&JsValue::from_str(&hex));
    }

    let result = Object::new();
    Reflect::set(&result, &JsValue::from_str("colors"), &colors_js)?;
    Reflect::set(&result, &JsValue::from_str("hex"), &hex_js)?;

    Ok(result)
}
