//! Grille de pixels RGB non agrandie

use crate::error::{PixelError, Result};
use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

/// Triplet RGB 8 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    /// Pixel de remplissage
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn is_black(self) -> bool {
        self == Self::BLACK
    }

    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }
}

impl From<Rgb<u8>> for Pixel {
    fn from(rgb: Rgb<u8>) -> Self {
        let [r, g, b] = rgb.0;
        Self { r, g, b }
    }
}

impl From<Pixel> for Rgb<u8> {
    fn from(pixel: Pixel) -> Self {
        pixel.to_rgb()
    }
}

/// Grille rectangulaire de pixels, parcourue ligne par ligne
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Canvas {
    /// Dimensions de la grille quasi carrée pour `count` pixels:
    /// largeur = ceil(sqrt(n)), hauteur = ceil(n / largeur).
    pub fn grid_dimensions(count: usize) -> (usize, usize) {
        if count == 0 {
            return (0, 0);
        }
        let mut width = (count as f64).sqrt() as usize;
        while width * width > count {
            width -= 1;
        }
        while width * width < count {
            width += 1;
        }
        (width, count.div_ceil(width))
    }

    /// Dispose des pixels dans la grille quasi carrée, cellules restantes en noir
    pub fn from_pixels(mut pixels: Vec<Pixel>) -> Result<Self> {
        let count = pixels.len();
        let (width, height) = Self::grid_dimensions(count);
        let too_large = || PixelError::CanvasTooLarge(count);
        let width = u32::try_from(width).map_err(|_| too_large())?;
        let height = u32::try_from(height).map_err(|_| too_large())?;

        pixels.resize(width as usize * height as usize, Pixel::BLACK);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Construit une grille de dimensions explicites
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        if pixels.len() != width as usize * height as usize {
            return Err(PixelError::DimensionMismatch {
                width,
                height,
                pixels: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Nombre total de cellules, remplissage compris
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        let width = self.width as usize;
        RgbImage::from_fn(self.width, self.height, |x, y| {
            self.pixels[y as usize * width + x as usize].to_rgb()
        })
    }

    /// Lit chaque pixel physique tel quel
    pub fn from_rgb_image(image: &RgbImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.pixels().map(|p| Pixel::from(*p)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions() {
        assert_eq!(Canvas::grid_dimensions(0), (0, 0));
        assert_eq!(Canvas::grid_dimensions(1), (1, 1));
        assert_eq!(Canvas::grid_dimensions(2), (2, 1));
        assert_eq!(Canvas::grid_dimensions(4), (2, 2));
        assert_eq!(Canvas::grid_dimensions(5), (3, 2));
        assert_eq!(Canvas::grid_dimensions(10), (4, 3));
        assert_eq!(Canvas::grid_dimensions(10_000), (100, 100));
        assert_eq!(Canvas::grid_dimensions(10_001), (101, 100));
    }

    #[test]
    fn test_from_pixels_fills_with_black() {
        let pixels = vec![Pixel::new(1, 2, 3); 5];
        let canvas = Canvas::from_pixels(pixels).unwrap();

        assert_eq!((canvas.width(), canvas.height()), (3, 2));
        assert_eq!(canvas.len(), 6);
        assert_eq!(canvas.get(1, 1), Some(Pixel::new(1, 2, 3)));
        assert_eq!(canvas.get(2, 1), Some(Pixel::BLACK));
        assert_eq!(canvas.get(3, 0), None);
    }

    #[test]
    fn test_new_rejects_mismatch() {
        let err = Canvas::new(2, 2, vec![Pixel::BLACK; 3]).unwrap_err();
        assert!(matches!(err, PixelError::DimensionMismatch { pixels: 3, .. }));
    }

    #[test]
    fn test_rgb_image_roundtrip() {
        let pixels = (0..7u8).map(|i| Pixel::new(i, i * 2, 255 - i)).collect();
        let canvas = Canvas::from_pixels(pixels).unwrap();
        let image = canvas.to_rgb_image();

        assert_eq!(image.dimensions(), (3, 3));
        assert_eq!(Canvas::from_rgb_image(&image), canvas);
    }
}
