use std::ffi::CString;
use std::fs;
use std::io::ErrorKind;

use crate::utils::error::RenderError;

/// Reads a whole file into an owned, nul-terminated buffer suitable for
/// handing to the GL shader compiler. Open and read failures are hard
/// errors; the caller never sees a partially-filled buffer.
pub fn load_entire_file(path: &str) -> Result<CString, RenderError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => RenderError::FileNotFound {
            path: path.to_string(),
            source,
        },
        _ => RenderError::ReadFailed {
            path: path.to_string(),
            source,
        },
    })?;

    CString::new(bytes).map_err(|_| RenderError::InvalidSource {
        path: path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_appends_single_nul_terminator() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"#version 330 core\nvoid main() {}\n").unwrap();

        let source = load_entire_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(source.as_bytes(), b"#version 330 core\nvoid main() {}\n");
        assert_eq!(
            source.as_bytes_with_nul().len(),
            source.as_bytes().len() + 1
        );
    }

    #[test]
    fn test_empty_file_is_just_the_terminator() {
        let file = NamedTempFile::new().unwrap();
        let source = load_entire_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(source.as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn test_missing_file_is_a_hard_error() {
        let err = load_entire_file("no/such/shader.vert").unwrap_err();
        assert!(matches!(err, RenderError::FileNotFound { .. }));
    }

    #[test]
    fn test_interior_nul_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"void main()\0{}").unwrap();

        let err = load_entire_file(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, RenderError::InvalidSource { .. }));
    }
}
