//! PNG export backend.
//!
//! Scenes are serialized with the [`Svg`] backend first and then rasterized
//! with `resvg`, so both formats always show the same drawing.

use std::io::Write;

use log::debug;
use resvg::{
    tiny_skia::{Pixmap, Transform},
    usvg::{Options, Tree},
};

use pollflow_core::draw::Scene;

use super::{Error, Exporter, svg::Svg};

/// Rasterizes scenes to PNG at a fixed scale factor.
#[derive(Debug, Clone)]
pub struct Png {
    svg: Svg,
    scale: f32,
}

impl Png {
    /// Creates a PNG exporter drawing through `svg` at `scale` pixels per unit.
    pub fn new(svg: Svg, scale: f32) -> Self {
        Self { svg, scale }
    }

    /// Renders `scene` into encoded PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the scale is not positive, the scaled
    /// surface is empty or too large, or rasterization fails.
    pub fn render_scene(&self, scene: &Scene) -> Result<Vec<u8>, Error> {
        let scale = self.scale;
        if !(scale.is_finite() && scale > 0.0) {
            return Err(Error::Render(format!(
                "raster scale must be a positive number, got {scale}"
            )));
        }

        let svg = self.svg.render_scene(scene).to_string();

        let mut options = Options::default();
        options.fontdb_mut().load_system_fonts();
        let tree = Tree::from_str(&svg, &options)
            .map_err(|err| Error::Render(format!("failed to parse generated SVG: {err}")))?;

        let size = tree.size().to_int_size();
        let scaled_width = (size.width() as f32 * scale).ceil();
        let scaled_height = (size.height() as f32 * scale).ceil();

        if !scaled_width.is_finite() || !scaled_height.is_finite() {
            return Err(Error::Render(
                "scaled dimensions are not finite; try a smaller scale factor".to_string(),
            ));
        }
        if scaled_width < 1.0 || scaled_height < 1.0 {
            return Err(Error::Render(
                "scaled dimensions collapsed below 1px; try a larger scale factor".to_string(),
            ));
        }
        if scaled_width > u32::MAX as f32 || scaled_height > u32::MAX as f32 {
            return Err(Error::Render(
                "scaled dimensions exceed supported limits; try a smaller scale factor".to_string(),
            ));
        }

        let (width, height) = (scaled_width as u32, scaled_height as u32);
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            Error::Render(format!("failed to allocate {width}x{height} surface"))
        })?;

        resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

        let png = pixmap
            .encode_png()
            .map_err(|err| Error::Render(format!("failed to encode PNG output: {err}")))?;
        debug!(width, height, scale, bytes = png.len(); "Rasterized scene to PNG");
        Ok(png)
    }
}

impl Exporter for Png {
    fn export_scene(&self, scene: &Scene, out: &mut dyn Write) -> Result<(), Error> {
        let png = self.render_scene(scene)?;
        out.write_all(&png)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pollflow_core::{
        color::Color,
        draw::RectPrimitive,
        geometry::{Bounds, Size},
    };

    use crate::export::svg::SvgBuilder;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn scene() -> Scene {
        let mut scene = Scene::new(Size::new(40.0, 30.0));
        scene.push(
            RectPrimitive::new(Bounds::new(5.0, 25.0, 5.0, 25.0))
                .with_fill(Color::new("#4CAF50").unwrap()),
        );
        scene
    }

    fn png_dimensions(png: &[u8]) -> (u32, u32) {
        let width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
        let height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
        (width, height)
    }

    #[test]
    fn test_png_is_scaled() {
        let png = Png::new(SvgBuilder::new().build(), 2.0)
            .render_scene(&scene())
            .unwrap();

        assert_eq!(png[..8], PNG_SIGNATURE);
        assert_eq!(png_dimensions(&png), (80, 60));
    }

    #[test]
    fn test_rejects_non_positive_scale() {
        for scale in [0.0, -1.0, f32::NAN] {
            let err = Png::new(SvgBuilder::new().build(), scale)
                .render_scene(&scene())
                .unwrap_err();
            assert!(matches!(err, Error::Render(_)), "scale {scale}");
        }
    }

    #[test]
    fn test_exporter_writes_png_bytes() {
        let mut out = Vec::new();
        Png::new(SvgBuilder::new().build(), 1.0)
            .export_scene(&scene(), &mut out)
            .unwrap();
        assert_eq!(out[..8], PNG_SIGNATURE);
        assert_eq!(png_dimensions(&out), (40, 30));
    }
}
