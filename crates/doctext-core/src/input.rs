use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

/// Anything the extractor can read from and rewind.
pub trait DocumentSource: Read + Seek {}

impl<T: Read + Seek> DocumentSource for T {}

/// A named byte stream handed to the extractor for a single call.
///
/// The name carries the format hint (its extension). Parsers never keep the
/// stream beyond one call, and always rewind before reading.
pub struct InputDocument {
    name: String,
    source: Box<dyn DocumentSource>,
}

impl InputDocument {
    pub fn new(name: impl Into<String>, source: impl DocumentSource + 'static) -> Self {
        InputDocument {
            name: name.into(),
            source: Box::new(source),
        }
    }

    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(name, Cursor::new(bytes))
    }

    /// Open a file on disk, using its file name as the format hint.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, file))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rewind the stream and read it to the end.
    pub fn read_all(&mut self) -> io::Result<Vec<u8>> {
        read_from_start(self)
    }
}

impl std::fmt::Debug for InputDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputDocument")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Read for InputDocument {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.source.read(buf)
    }
}

impl Seek for InputDocument {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.source.seek(pos)
    }
}

/// Seek to position zero, then read everything that follows.
pub fn read_from_start<R: Read + Seek + ?Sized>(reader: &mut R) -> io::Result<Vec<u8>> {
    reader.seek(SeekFrom::Start(0))?;
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn read_all_ignores_current_position() {
        let mut doc = InputDocument::from_bytes("a.txt", b"abcdef".to_vec());
        let mut head = [0u8; 4];
        doc.read_exact(&mut head).unwrap();
        assert_eq!(doc.read_all().unwrap(), b"abcdef");
        assert_eq!(doc.read_all().unwrap(), b"abcdef");
    }

    #[test]
    fn open_uses_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Notes.TXT");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"hi").unwrap();

        let mut doc = InputDocument::open(&path).unwrap();
        assert_eq!(doc.name(), "Notes.TXT");
        assert_eq!(doc.read_all().unwrap(), b"hi");
    }
}
