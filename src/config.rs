use std::path::PathBuf;

pub const HEX_SOURCE_PATH: &str = "SourceImage4.jpg";
pub const HEX_OUTPUT_PATH: &str = "../Quartus/SourceImage4.hex";
pub const HEX_WIDTH: u32 = 640;
pub const HEX_HEIGHT: u32 = 480;

pub const DUMP_SOURCE_PATH: &str = "../Questa/output_frame.txt";
pub const DUMP_OUTPUT_PATH: &str = "output_frame.jpg";
pub const DUMP_WIDTH: u32 = 160;
pub const DUMP_HEIGHT: u32 = 100;

/// Where a conversion reads from, where it writes to, and the raster size
/// the dump side of the conversion assumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub target_width: u32,
    pub target_height: u32,
}

impl ConvertConfig {
    pub fn new(
        source_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        target_width: u32,
        target_height: u32,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            output_path: output_path.into(),
            target_width,
            target_height,
        }
    }

    /// The fixed paths and 640x480 resolution of the lab's image-to-hex step.
    pub fn image_to_hex() -> Self {
        Self::new(HEX_SOURCE_PATH, HEX_OUTPUT_PATH, HEX_WIDTH, HEX_HEIGHT)
    }

    /// The fixed paths and 160x100 resolution of the lab's simulation readback.
    pub fn text_to_image() -> Self {
        Self::new(DUMP_SOURCE_PATH, DUMP_OUTPUT_PATH, DUMP_WIDTH, DUMP_HEIGHT)
    }

    pub fn pixel_count(&self) -> usize {
        self.target_width as usize * self.target_height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_lab_layout() {
        let hex = ConvertConfig::image_to_hex();
        assert_eq!(hex.source_path, PathBuf::from("SourceImage4.jpg"));
        assert_eq!(hex.output_path, PathBuf::from("../Quartus/SourceImage4.hex"));
        assert_eq!(hex.pixel_count(), 307_200);

        let dump = ConvertConfig::text_to_image();
        assert_eq!(dump.source_path, PathBuf::from("../Questa/output_frame.txt"));
        assert_eq!(dump.output_path, PathBuf::from("output_frame.jpg"));
        assert_eq!(dump.pixel_count(), 16_000);
    }
}
