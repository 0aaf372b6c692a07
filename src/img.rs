use crate::error::{Error, LineError, Result};
use image::RgbImage;
use log::debug;
use std::io::BufRead;
use std::path::Path;

/// An 8-bit RGB raster, row-major, three bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RawImage {
    /// A black raster of the given size.
    pub fn blank(width: u32, height: u32) -> Self {
        RawImage {
            width,
            height,
            data: vec![0; width as usize * height as usize * 3],
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        (y as usize * self.width as usize + x as usize) * 3
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let i = self.offset(x, y);
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data.chunks_exact(3).map(|p| [p[0], p[1], p[2]])
    }

    /// Expands to the RGBA layout the preview surface expects.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels()
            .flat_map(|[r, g, b]| [r, g, b, 255])
            .collect()
    }
}

/// Fills a `width`x`height` raster from a one-pixel-per-line dump.
///
/// Positions are consumed in row-major order. Running out of lines stops the
/// fill and leaves the remaining pixels black; a line that `parse` rejects
/// aborts with its 1-based line number.
pub fn read_dump<R, F>(
    reader: R,
    path: &Path,
    width: u32,
    height: u32,
    parse: F,
) -> Result<RawImage>
where
    R: BufRead,
    F: Fn(&str) -> std::result::Result<[u8; 3], LineError>,
{
    let mut img = RawImage::blank(width, height);
    let mut lines = reader.lines();

    'rows: for y in 0..height {
        for x in 0..width {
            let index = y as usize * width as usize + x as usize;
            let Some(line) = lines.next() else {
                debug!(
                    "{} ended after {} of {} pixels",
                    path.display(),
                    index,
                    width as usize * height as usize
                );
                break 'rows;
            };
            let line = line.map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let rgb = parse(&line).map_err(|source| Error::Parse {
                path: path.to_path_buf(),
                line: index + 1,
                source,
            })?;
            img.put_pixel(x, y, rgb);
        }
    }

    Ok(img)
}

impl From<RgbImage> for RawImage {
    fn from(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        RawImage {
            width,
            height,
            data: img.into_raw(),
        }
    }
}
