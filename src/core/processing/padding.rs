use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel, imageops};
use tracing::info;

use crate::types::ColorMode;

/// Smallest even dimensions greater than or equal to `(width, height)`.
/// Each axis grows by at most one pixel.
pub fn even_dimensions(width: u32, height: u32) -> (u32, u32) {
    (width + width % 2, height + height % 2)
}

/// Pad an image up to even width and height by appending a zero-filled row
/// and/or column at the bottom/right edge. Existing pixels are copied
/// bit-identical to the same positions; the color mode is preserved.
///
/// Images that are already even in both axes are returned as-is, with no
/// canvas allocation.
pub fn pad_to_even(image: DynamicImage) -> DynamicImage {
    let (w, h) = image.dimensions();
    let (new_w, new_h) = even_dimensions(w, h);
    if (new_w, new_h) == (w, h) {
        return image;
    }

    match ColorMode::from_color_type(image.color()) {
        Some(mode) => info!("Padding {}x{} -> {}x{} ({})", w, h, new_w, new_h, mode),
        None => info!("Padding {}x{} -> {}x{} (unrecognized mode)", w, h, new_w, new_h),
    }

    match image {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(pad_buffer(&buf, new_w, new_h)),
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(pad_buffer(&buf, new_w, new_h)),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(pad_buffer(&buf, new_w, new_h)),
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(pad_buffer(&buf, new_w, new_h)),
        DynamicImage::ImageLuma16(buf) => DynamicImage::ImageLuma16(pad_buffer(&buf, new_w, new_h)),
        DynamicImage::ImageLumaA16(buf) => {
            DynamicImage::ImageLumaA16(pad_buffer(&buf, new_w, new_h))
        }
        DynamicImage::ImageRgb16(buf) => DynamicImage::ImageRgb16(pad_buffer(&buf, new_w, new_h)),
        DynamicImage::ImageRgba16(buf) => DynamicImage::ImageRgba16(pad_buffer(&buf, new_w, new_h)),
        // Variants outside the PNG mode set lose their layout; RGBA keeps
        // the transparent fill semantics.
        other => DynamicImage::ImageRgba8(pad_buffer(&other.to_rgba8(), new_w, new_h)),
    }
}

// A zeroed canvas is fully transparent black in alpha modes and black in
// the rest, which is exactly the required fill value per mode.
fn pad_buffer<P: Pixel>(
    src: &ImageBuffer<P, Vec<P::Subpixel>>,
    new_w: u32,
    new_h: u32,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    let mut canvas = ImageBuffer::new(new_w, new_h);
    imageops::replace(&mut canvas, src, 0, 0);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, Rgba, RgbaImage};

    fn sample_rgba(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([x as u8, y as u8, (x + y) as u8, 255])
        })
    }

    #[test]
    fn odd_dimensions_grow_by_one() {
        let padded = pad_to_even(DynamicImage::ImageRgba8(sample_rgba(3, 5)));
        assert_eq!(padded.dimensions(), (4, 6));
    }

    #[test]
    fn dimensions_are_minimal() {
        for (w, h) in [(1, 1), (1, 2), (2, 3), (7, 8), (640, 479)] {
            let padded = pad_to_even(DynamicImage::ImageRgba8(sample_rgba(w, h)));
            let (pw, ph) = padded.dimensions();
            assert!(pw % 2 == 0 && ph % 2 == 0);
            assert!(pw - w <= 1 && ph - h <= 1);
        }
    }

    #[test]
    fn original_pixels_are_preserved() {
        let src = sample_rgba(3, 5);
        let padded = pad_to_even(DynamicImage::ImageRgba8(src.clone())).to_rgba8();
        for y in 0..5 {
            for x in 0..3 {
                assert_eq!(padded.get_pixel(x, y), src.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn new_edge_pixels_are_transparent_in_alpha_modes() {
        let padded = pad_to_even(DynamicImage::ImageRgba8(sample_rgba(3, 5))).to_rgba8();
        for y in 0..6 {
            assert_eq!(*padded.get_pixel(3, y), Rgba([0, 0, 0, 0]));
        }
        for x in 0..4 {
            assert_eq!(*padded.get_pixel(x, 5), Rgba([0, 0, 0, 0]));
        }
    }

    #[test]
    fn new_edge_pixels_are_black_without_alpha() {
        let src = image::RgbImage::from_pixel(3, 4, Rgb([200, 100, 50]));
        let padded = pad_to_even(DynamicImage::ImageRgb8(src)).to_rgb8();
        assert_eq!(padded.dimensions(), (4, 4));
        for y in 0..4 {
            assert_eq!(*padded.get_pixel(3, y), Rgb([0, 0, 0]));
        }
    }

    #[test]
    fn even_images_pass_through_unchanged() {
        let src = sample_rgba(4, 6);
        let padded = pad_to_even(DynamicImage::ImageRgba8(src.clone()));
        assert_eq!(padded.to_rgba8(), src);
        assert_eq!(padded.color(), image::ColorType::Rgba8);
    }

    #[test]
    fn color_mode_is_preserved() {
        let gray = ImageBuffer::from_pixel(5, 5, Luma([7u16]));
        let padded = pad_to_even(DynamicImage::ImageLuma16(gray));
        assert_eq!(padded.color(), image::ColorType::L16);
        assert_eq!(padded.dimensions(), (6, 6));
        assert_eq!(padded.as_luma16().unwrap().get_pixel(5, 5), &Luma([0u16]));
    }

    #[test]
    fn single_pixel_image() {
        let padded = pad_to_even(DynamicImage::ImageRgba8(sample_rgba(1, 1)));
        assert_eq!(padded.dimensions(), (2, 2));
    }

    #[test]
    fn even_dimensions_math() {
        assert_eq!(even_dimensions(0, 0), (0, 0));
        assert_eq!(even_dimensions(1, 1), (2, 2));
        assert_eq!(even_dimensions(3, 4), (4, 4));
        assert_eq!(even_dimensions(1024, 768), (1024, 768));
    }
}
