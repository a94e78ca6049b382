//! Input loading: memory-mapped files or buffered stdin

use crate::error::{ChartContext, ChartError, ChartResult};
use memmap2::Mmap;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Name used for stdin in messages
pub const STDIN_NAME: &str = "standard input";

const UTF8_BOM: &str = "\u{feff}";

enum InputData {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

/// Raw bytes of the input, kept alive for the duration of the run
pub struct InputText {
    name: String,
    data: InputData,
}

impl InputText {
    /// Open `input`, where `-` means stdin
    pub fn open(input: &str) -> ChartResult<Self> {
        if input == "-" {
            let stdin = std::io::stdin();
            Self::from_reader(stdin.lock(), STDIN_NAME)
        } else {
            Self::from_file(Path::new(input))
        }
    }

    /// Map a regular file into memory. Empty files are rejected up front.
    pub fn from_file(path: &Path) -> ChartResult<Self> {
        let name = path.display().to_string();
        let metadata = fs::metadata(path).with_file_context(&name)?;
        if metadata.is_dir() {
            return Err(ChartError::is_directory(&name));
        }
        if metadata.len() == 0 {
            return Err(ChartError::empty_input(&name));
        }

        let file = File::open(path).with_file_context(&name)?;
        // SAFETY: the map is read-only and lives as long as this InputText;
        // the file is not expected to be modified while the run is in progress
        let mmap = unsafe { Mmap::map(&file) }.with_file_context(&name)?;
        debug!(file = %name, bytes = mmap.len(), "input mapped");

        Ok(Self {
            name,
            data: InputData::Mapped(mmap),
        })
    }

    /// Read a whole stream into memory
    pub fn from_reader<R: Read>(mut reader: R, name: &str) -> ChartResult<Self> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer).with_file_context(name)?;
        if buffer.is_empty() {
            return Err(ChartError::empty_input(name));
        }
        debug!(input = name, bytes = buffer.len(), "input read");

        Ok(Self {
            name: name.to_string(),
            data: InputData::Owned(buffer),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn as_bytes(&self) -> &[u8] {
        match &self.data {
            InputData::Mapped(mmap) => &mmap[..],
            InputData::Owned(buffer) => buffer.as_slice(),
        }
    }

    /// Input as UTF-8 text, without a leading byte order mark
    pub fn as_str(&self) -> ChartResult<&str> {
        let text = std::str::from_utf8(self.as_bytes())?;
        Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_mapped_file() -> ChartResult<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("summary.csv");
        fs::write(&path, "\"Country\",\"Code\"\n")?;

        let input = InputText::from_file(&path)?;
        assert_eq!(input.as_str()?, "\"Country\",\"Code\"\n");
        assert!(input.name().ends_with("summary.csv"));
        Ok(())
    }

    #[test]
    fn test_empty_file_rejected() -> ChartResult<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("empty.csv");
        fs::write(&path, "")?;

        match InputText::from_file(&path) {
            Err(ChartError::EmptyInput { .. }) => Ok(()),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("empty file must be rejected"),
        }
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing.csv");
        assert!(matches!(
            InputText::from_file(&path),
            Err(ChartError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_directory_rejected() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        assert!(matches!(
            InputText::from_file(temp_dir.path()),
            Err(ChartError::IsDirectory { .. })
        ));
    }

    #[test]
    fn test_reader_input() -> ChartResult<()> {
        let input = InputText::from_reader(Cursor::new("\u{feff}\"A\"\n"), STDIN_NAME)?;
        assert_eq!(input.as_str()?, "\"A\"\n");
        assert_eq!(input.name(), STDIN_NAME);

        assert!(matches!(
            InputText::from_reader(Cursor::new(""), STDIN_NAME),
            Err(ChartError::EmptyInput { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_invalid_utf8() -> ChartResult<()> {
        let input = InputText::from_reader(Cursor::new(vec![b'"', 0xff, b'"']), STDIN_NAME)?;
        assert!(matches!(input.as_str(), Err(ChartError::Utf8Error(_))));
        Ok(())
    }
}
