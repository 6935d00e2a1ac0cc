// crates/citydb-core/src/loader/common_io.rs
use crate::error::{CityDbError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// True for `*.gz` paths.
pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the name
/// ends in `.gz`. Returns a generic reader so parsers don't care about the
/// compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CityDbError::NotFound(format!("{}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(CityDbError::InvalidData(format!(
                "{} is gzip-compressed but the 'compact' feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_not_found() {
        let err = open_stream(Path::new("/definitely/not/here.csv")).err().unwrap();
        assert!(matches!(err, CityDbError::NotFound(_)));
    }

    #[test]
    fn plain_file_passes_through() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "a,b").unwrap();
        let mut s = String::new();
        open_stream(tmp.path()).unwrap().read_to_string(&mut s).unwrap();
        assert_eq!(s, "a,b\n");
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzip_file_is_decoded() {
        use flate2::{write::GzEncoder, Compression};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv.gz");
        let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        enc.write_all(b"US,United States\n").unwrap();
        enc.finish().unwrap();

        let mut s = String::new();
        open_stream(&path).unwrap().read_to_string(&mut s).unwrap();
        assert_eq!(s, "US,United States\n");
    }
}
