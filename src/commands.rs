use crate::config::{self, ConvertConfig};
use crate::convert::{self, Resample};
use crate::dec;
use crate::error::Result;
use crate::gfx;
use crate::hex;
use crate::jpeg;
use clap::{Args, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert an image into a hex pixel dump (one RRGGBB line per pixel).
    /// Defaults: SourceImage4.jpg -> ../Quartus/SourceImage4.hex at 640x480
    ToHex {
        #[command(flatten)]
        paths: ConfigArgs,
        #[arg(short, long, value_enum, default_value_t = Resample::default())]
        filter: Resample,
    },
    /// Rebuild an image from a decimal "R G B" pixel dump (.jpg or .png output).
    /// Defaults: ../Questa/output_frame.txt -> output_frame.jpg at 160x100
    ToImage {
        #[command(flatten)]
        paths: ConfigArgs,
        #[arg(short, long, default_value_t = jpeg::DEFAULT_QUALITY)]
        quality: u8,
    },
    /// Preview a hex or decimal pixel dump in a window
    View {
        dump: PathBuf,
        #[arg(short, long, value_enum, help = "Dump format, inferred from the extension if omitted")]
        format: Option<DumpFormat>,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
    },
}

/// Overrides for the fixed lab paths and resolution.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Input file
    source: Option<PathBuf>,
    /// Output file
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Raster width in pixels
    #[arg(long)]
    width: Option<u32>,
    /// Raster height in pixels
    #[arg(long)]
    height: Option<u32>,
}

impl ConfigArgs {
    fn over(self, defaults: ConvertConfig) -> ConvertConfig {
        ConvertConfig::new(
            self.source.unwrap_or(defaults.source_path),
            self.output.unwrap_or(defaults.output_path),
            self.width.unwrap_or(defaults.target_width),
            self.height.unwrap_or(defaults.target_height),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    Hex,
    Decimal,
}

impl DumpFormat {
    fn infer(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("hex") => DumpFormat::Hex,
            _ => DumpFormat::Decimal,
        }
    }

    fn default_size(self) -> (u32, u32) {
        match self {
            DumpFormat::Hex => (config::HEX_WIDTH, config::HEX_HEIGHT),
            DumpFormat::Decimal => (config::DUMP_WIDTH, config::DUMP_HEIGHT),
        }
    }
}

impl Command {
    pub fn run(self) -> Result<()> {
        match self {
            Command::ToHex { paths, filter } => {
                convert::image_to_hex(&paths.over(ConvertConfig::image_to_hex()), filter)
            }
            Command::ToImage { paths, quality } => {
                convert::text_to_image(&paths.over(ConvertConfig::text_to_image()), quality)
            }
            Command::View {
                dump,
                format,
                width,
                height,
            } => view(&dump, format, width, height),
        }
    }
}

fn view(
    dump: &Path,
    format: Option<DumpFormat>,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<()> {
    let format = format.unwrap_or_else(|| DumpFormat::infer(dump));
    let (default_width, default_height) = format.default_size();
    let width = width.unwrap_or(default_width);
    let height = height.unwrap_or(default_height);

    let img = match format {
        DumpFormat::Hex => convert::load_dump(dump, width, height, hex::decode_line)?,
        DumpFormat::Decimal => convert::load_dump(dump, width, height, dec::parse_line)?,
    };

    gfx::show(&img, &dump.display().to_string())
}
