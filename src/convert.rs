use crate::config::ConvertConfig;
use crate::dec;
use crate::error::{Error, Result};
use crate::hex;
use crate::img::{self, RawImage};
use crate::jpeg;
use crate::png;
use clap::ValueEnum;
use image::ImageReader;
use image::imageops::{self, FilterType};
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Resample {
    Nearest,
    Triangle,
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<Resample> for FilterType {
    fn from(filter: Resample) -> Self {
        match filter {
            Resample::Nearest => FilterType::Nearest,
            Resample::Triangle => FilterType::Triangle,
            Resample::CatmullRom => FilterType::CatmullRom,
            Resample::Gaussian => FilterType::Gaussian,
            Resample::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            "png" => Some(OutputFormat::Png),
            _ => None,
        }
    }
}

/// Decodes the source image, resizes it to the target resolution and writes
/// it out as a hex pixel dump.
pub fn image_to_hex(config: &ConvertConfig, filter: Resample) -> Result<()> {
    let source = &config.source_path;
    let reader = ImageReader::open(source)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| Error::open(source, e))?;
    let decoded = reader.decode().map_err(|e| Error::Decode {
        path: source.clone(),
        source: e,
    })?;
    debug!(
        "decoded {} at {}x{}",
        source.display(),
        decoded.width(),
        decoded.height()
    );

    let rgb = decoded.to_rgb8();
    let resized = imageops::resize(
        &rgb,
        config.target_width,
        config.target_height,
        filter.into(),
    );
    let img = RawImage::from(resized);

    let output = &config.output_path;
    let file = File::create(output).map_err(|e| Error::write(output, e))?;
    let mut writer = BufWriter::new(file);
    hex::write_dump(&img, &mut writer).map_err(|e| Error::write(output, e))?;
    writer.flush().map_err(|e| Error::write(output, e))?;

    info!(
        "Wrote {}x{} hex dump to {}",
        img.width,
        img.height,
        output.display()
    );
    Ok(())
}

/// Rebuilds a raster from a decimal pixel dump and saves it as JPEG or PNG,
/// picked by the output extension.
pub fn text_to_image(config: &ConvertConfig, quality: u8) -> Result<()> {
    let output = &config.output_path;
    let format = OutputFormat::from_path(output).ok_or_else(|| Error::UnsupportedFormat {
        path: output.clone(),
    })?;

    debug!(
        "reading up to {} pixels from {}",
        config.pixel_count(),
        config.source_path.display()
    );
    let img = load_dump(
        &config.source_path,
        config.target_width,
        config.target_height,
        dec::parse_line,
    )?;

    let file = File::create(output).map_err(|e| Error::write(output, e))?;
    let mut writer = BufWriter::new(file);
    let encoded = match format {
        OutputFormat::Jpeg => jpeg::encode_img(&img, &mut writer, quality).map_err(|e| match e {
            image::ImageError::IoError(e) => Error::write(output, e),
            e => Error::Encode {
                path: output.clone(),
                source: Box::new(e),
            },
        }),
        OutputFormat::Png => png::encode_img(&img, &mut writer).map_err(|e| match e {
            ::png::EncodingError::IoError(e) => Error::write(output, e),
            e => Error::Encode {
                path: output.clone(),
                source: Box::new(e),
            },
        }),
    };
    encoded?;
    writer.flush().map_err(|e| Error::write(output, e))?;

    info!(
        "Wrote {}x{} image to {}",
        img.width,
        img.height,
        output.display()
    );
    Ok(())
}

/// Opens a dump file and fills a raster from it line by line.
pub fn load_dump<F>(path: &Path, width: u32, height: u32, parse: F) -> Result<RawImage>
where
    F: Fn(&str) -> std::result::Result<[u8; 3], crate::error::LineError>,
{
    let file = File::open(path).map_err(|e| Error::open(path, e))?;
    img::read_dump(BufReader::new(file), path, width, height, parse)
}
