//! The hex pixel dump loaded into simulated VGA memory: one `RRGGBB` line per
//! pixel, uppercase, row-major, no header.

use crate::error::LineError;
use crate::img::RawImage;
use std::io::{self, Write};

pub fn encode_pixel([r, g, b]: [u8; 3]) -> String {
    format!("{r:02X}{g:02X}{b:02X}")
}

/// Accepts either case so hand-edited dumps still load.
pub fn decode_line(line: &str) -> Result<[u8; 3], LineError> {
    let line = line.trim();
    if line.len() != 6 || !line.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(LineError::BadHex(line.to_string()));
    }

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&line[i * 2..i * 2 + 2], 16)
            .map_err(|_| LineError::BadHex(line.to_string()))?;
    }
    Ok(rgb)
}

pub fn write_dump(img: &RawImage, out: &mut impl Write) -> io::Result<()> {
    for rgb in img.pixels() {
        writeln!(out, "{}", encode_pixel(rgb))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::img::read_dump;
    use std::path::Path;

    #[test]
    fn encodes_channels_in_order() {
        assert_eq!(encode_pixel([255, 16, 0]), "FF1000");
        assert_eq!(encode_pixel([0, 0, 0]), "000000");
        assert_eq!(encode_pixel([10, 171, 205]), "0AABCD");
    }

    #[test]
    fn decode_inverts_encode() {
        for rgb in [[0, 0, 0], [255, 255, 255], [1, 128, 254], [171, 205, 239]] {
            assert_eq!(decode_line(&encode_pixel(rgb)), Ok(rgb));
        }
        assert_eq!(decode_line("ff1000"), Ok([255, 16, 0]));
    }

    #[test]
    fn decode_rejects_malformed_lines() {
        for line in ["", "FFF", "FF10000", "GG0000", "FF 000", "ÿÿÿ"] {
            assert!(decode_line(line).is_err(), "{line:?} should be rejected");
        }
    }

    #[test]
    fn dump_is_one_line_per_pixel() {
        let mut img = RawImage::blank(3, 2);
        img.put_pixel(2, 0, [255, 16, 0]);
        img.put_pixel(0, 1, [1, 2, 3]);

        let mut out = Vec::new();
        write_dump(&img, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "000000\n000000\nFF1000\n010203\n000000\n000000\n"
        );
    }

    #[test]
    fn dump_reads_back_into_the_same_raster() {
        let img = RawImage::from(image::RgbImage::from_fn(4, 3, |x, y| {
            image::Rgb([x as u8 * 60, y as u8 * 90, 7])
        }));
        let mut out = Vec::new();
        write_dump(&img, &mut out).unwrap();

        let back = read_dump(out.as_slice(), Path::new("t.hex"), 4, 3, decode_line).unwrap();
        assert_eq!(back, img);
    }
}
