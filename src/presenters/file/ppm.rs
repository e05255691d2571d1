use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary PPM (P6) writer.
#[derive(Debug, Default, Clone, Copy)]
pub struct PpmFilePresenter;

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(std::fs::File::create(filepath)?);

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", buffer.width(), buffer.height())?;
        writeln!(file, "255")?;
        file.write_all(buffer.buffer())?;
        file.flush()?;

        Ok(())
    }
}
