use crate::img::RawImage;
use std::io::Write;

/// Lossless output, for checking simulation frames pixel for pixel.
pub fn encode_img(img: &RawImage, out: impl Write) -> Result<(), ::png::EncodingError> {
    let mut encoder = ::png::Encoder::new(out, img.width, img.height);
    encoder.set_color(::png::ColorType::Rgb);
    encoder.set_depth(::png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&img.data)?;
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_exact_pixels() {
        let mut img = RawImage::blank(3, 2);
        img.put_pixel(1, 0, [255, 16, 0]);
        img.put_pixel(2, 1, [1, 2, 3]);

        let mut out = Vec::new();
        encode_img(&img, &mut out).unwrap();

        let back = image::load_from_memory_with_format(&out, image::ImageFormat::Png)
            .unwrap()
            .to_rgb8();
        assert_eq!(RawImage::from(back), img);
    }
}
