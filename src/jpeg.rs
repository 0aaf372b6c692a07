use crate::img::RawImage;
use image::ExtendedColorType;
use image::codecs::jpeg::JpegEncoder;
use std::io::Write;

pub const DEFAULT_QUALITY: u8 = 75;

pub fn encode_img(img: &RawImage, out: &mut impl Write, quality: u8) -> image::ImageResult<()> {
    JpegEncoder::new_with_quality(out, quality.clamp(1, 100)).encode(
        &img.data,
        img.width,
        img.height,
        ExtendedColorType::Rgb8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_a_decodable_jpeg() {
        let mut img = RawImage::blank(16, 8);
        for x in 0..16 {
            img.put_pixel(x, 0, [200, 200, 200]);
        }
        let mut out = Vec::new();
        encode_img(&img, &mut out, DEFAULT_QUALITY).unwrap();

        assert_eq!(&out[..2], &[0xFF, 0xD8]);
        let back = image::load_from_memory_with_format(&out, image::ImageFormat::Jpeg).unwrap();
        assert_eq!((back.width(), back.height()), (16, 8));
    }
}
