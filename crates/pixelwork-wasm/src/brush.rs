//! Brush-stamp painting bindings.

use crate::types::JsImage;
use pixelwork_core::brush::apply_brushes_seeded;
use pixelwork_core::{BrushSettings, Image};
use wasm_bindgen::prelude::*;

/// An ordered set of brush opacity images.
///
/// Channel 0 of each brush is used as opacity.
#[wasm_bindgen]
pub struct JsBrushSet {
    brushes: Vec<Image>,
}

#[wasm_bindgen]
impl JsBrushSet {
    /// Create an empty brush set
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            brushes: Vec::new(),
        }
    }

    /// Add a copy of `brush` to the set
    pub fn push(&mut self, brush: &JsImage) {
        self.brushes.push(brush.as_image().clone());
    }

    /// Number of brushes in the set
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.brushes.len()
    }
}

impl Default for JsBrushSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Paint an image with randomly placed brush stamps.
///
/// # Arguments
///
/// * `image` - Image providing both the canvas and the stamp colors
/// * `brushes` - Brush set to draw from
/// * `settings` - `{ scale_hint?, coverage?, margin?, seed? }`; missing fields
///   take their defaults
/// * `seed` - Used when `settings.seed` is not given
///
/// # Errors
///
/// Returns an error if the settings cannot be deserialized or the brush set is
/// empty.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const brushes = new JsBrushSet();
/// brushes.push(brush);
/// const painted = apply_brushes(image, brushes, { coverage: 0.5 }, 1234n);
/// ```
#[wasm_bindgen]
pub fn apply_brushes(
    image: &JsImage,
    brushes: &JsBrushSet,
    settings: JsValue,
    seed: u64,
) -> Result<JsImage, JsValue> {
    let settings: BrushSettings = if settings.is_undefined() || settings.is_null() {
        BrushSettings::default()
    } else {
        serde_wasm_bindgen::from_value(settings)
            .map_err(|e| JsValue::from_str(&format!("Invalid brush settings: {}", e)))?
    };
    paint(image, brushes, settings, seed)
}

/// Run the painter with a seed always set, so no OS entropy is needed.
fn paint(
    image: &JsImage,
    brushes: &JsBrushSet,
    mut settings: BrushSettings,
    seed: u64,
) -> Result<JsImage, JsValue> {
    settings.seed = settings.seed.or(Some(seed));
    apply_brushes_seeded(image.as_image(), &brushes.brushes, &settings)
        .map(JsImage::from_image)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient() -> JsImage {
        let (w, h) = (16u32, 16u32);
        let n = (w * h) as usize;
        let mut data = Vec::with_capacity(n * 3);
        for c in 0..3 {
            data.extend((0..n).map(|i| ((i + c * 7) % 16) as f32 / 15.0));
        }
        JsImage::new(w, h, 3, data).unwrap()
    }

    fn brush_set() -> JsBrushSet {
        let mut set = JsBrushSet::new();
        set.push(&JsImage::new(12, 12, 1, vec![1.0; 144]).unwrap());
        set
    }

    #[test]
    fn test_brush_set_push() {
        let mut set = JsBrushSet::default();
        assert_eq!(set.length(), 0);
        set.push(&JsImage::blank(3, 3, 1));
        set.push(&JsImage::blank(5, 2, 1));
        assert_eq!(set.length(), 2);
    }

    #[test]
    fn test_paint_is_deterministic_per_seed() {
        let image = gradient();
        let brushes = brush_set();
        let settings = BrushSettings {
            margin: 0,
            ..BrushSettings::default()
        };
        let a = paint(&image, &brushes, settings.clone(), 9).unwrap();
        let b = paint(&image, &brushes, settings, 9).unwrap();
        assert_eq!(a.data(), b.data());
        assert_eq!((a.width(), a.height(), a.channels()), (16, 16, 3));
    }

    #[test]
    fn test_settings_seed_takes_precedence() {
        let image = gradient();
        let brushes = brush_set();
        let settings = BrushSettings {
            margin: 0,
            seed: Some(3),
            ..BrushSettings::default()
        };
        let a = paint(&image, &brushes, settings.clone(), 1).unwrap();
        let b = paint(&image, &brushes, settings, 2).unwrap();
        assert_eq!(a.data(), b.data());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_apply_brushes_empty_set() {
        let image = JsImage::blank(4, 4, 3);
        let result = apply_brushes(&image, &JsBrushSet::new(), JsValue::UNDEFINED, 1);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_apply_brushes_invalid_settings() {
        let image = JsImage::blank(4, 4, 3);
        let mut brushes = JsBrushSet::new();
        brushes.push(&JsImage::blank(4, 4, 1));
        let result = apply_brushes(&image, &brushes, JsValue::from_str("fast"), 1);
        assert!(result.is_err());
    }
}
