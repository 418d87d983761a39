// SkinConsult - platform/fs.rs
//
// File-system access for the catalog and output files.

use crate::util::constants;
use crate::util::error::CatalogError;
use std::fs::File;
use std::io;
use std::path::Path;

/// Open a catalog file for buffered reading.
///
/// The file size is checked against `MAX_CATALOG_FILE_SIZE` before the file
/// is opened, so an oversized table is rejected without reading it.
pub fn open_catalog_file(path: &Path) -> Result<io::BufReader<File>, CatalogError> {
    let io_err = |source: io::Error| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = std::fs::metadata(path).map_err(io_err)?.len();
    if size > constants::MAX_CATALOG_FILE_SIZE {
        return Err(CatalogError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size: constants::MAX_CATALOG_FILE_SIZE,
        });
    }

    let file = File::open(path).map_err(io_err)?;
    tracing::debug!(path = %path.display(), bytes = size, "Opened catalog file");
    Ok(io::BufReader::new(file))
}

/// Create (or truncate) an output file, creating missing parent directories.
pub fn create_output_file(path: &Path) -> io::Result<io::BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(io::BufWriter::new(File::create(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};

    #[test]
    fn test_open_catalog_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "Product,Skin type").unwrap();
        let mut content = String::new();
        open_catalog_file(tmp.path())
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "Product,Skin type");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = open_catalog_file(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.as_file()
            .set_len(constants::MAX_CATALOG_FILE_SIZE + 1)
            .unwrap();
        let result = open_catalog_file(tmp.path());
        assert!(matches!(result, Err(CatalogError::FileTooLarge { .. })));
    }

    #[test]
    fn test_create_output_file_makes_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("reports").join("routine.json");
        let mut out = create_output_file(&target).unwrap();
        out.write_all(b"{}").unwrap();
        out.flush().unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "{}");
    }
}
