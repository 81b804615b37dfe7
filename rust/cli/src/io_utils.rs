//! File and stream helpers shared by the commands.
//!
//! - Reading one line of interactive input
//! - Reading text files, decompressing Zstandard when the path ends in `.zst`
//! - Ensuring parent directories exist before file writes

use std::io::BufRead;
use std::path::Path;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Returns the trimmed line, or `None` on EOF or a read error.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use cribbage_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  0 3 \n");
/// assert_eq!(read_stdin_line(&mut input), Some("0 3".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Read a text file, decompressing it first when the path ends in `.zst`.
/// A leading UTF-8 BOM is stripped.
///
/// # Example
///
/// ```rust,no_run
/// # use cribbage_cli::io_utils::read_text_auto;
///
/// let plain = read_text_auto("data/matches.jsonl").unwrap();
/// let compressed = read_text_auto("data/matches.jsonl.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::stream::decode_all(comp.as_slice()).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Ensure parent directory exists for given path, creating if needed.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
        }
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_stdin_line_valid_input() {
        let mut cursor = Cursor::new(b"2 5\n");
        assert_eq!(read_stdin_line(&mut cursor), Some("2 5".to_string()));
    }

    #[test]
    fn test_read_stdin_line_empty_after_trim() {
        let mut cursor = Cursor::new(b"   \n");
        assert_eq!(read_stdin_line(&mut cursor), Some("".to_string()));
    }

    #[test]
    fn test_read_stdin_line_eof() {
        let mut cursor = Cursor::new(b"");
        assert_eq!(read_stdin_line(&mut cursor), None);
    }

    #[test]
    fn test_strip_utf8_bom() {
        let mut s = "\u{feff}hello".to_string();
        strip_utf8_bom(&mut s);
        assert_eq!(s, "hello");

        let mut plain = "hello".to_string();
        strip_utf8_bom(&mut plain);
        assert_eq!(plain, "hello");
    }

    #[test]
    fn test_read_text_auto_decompresses_zst() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matches.jsonl.zst");
        let packed = zstd::stream::encode_all("\u{feff}{\"a\":1}\n".as_bytes(), 0).unwrap();
        std::fs::write(&path, packed).unwrap();
        assert_eq!(
            read_text_auto(&path.to_string_lossy()).unwrap(),
            "{\"a\":1}\n"
        );
    }

    #[test]
    fn test_ensure_parent_dir_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("out.jsonl");
        ensure_parent_dir(&path).unwrap();
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn test_ensure_parent_dir_no_parent() {
        assert!(ensure_parent_dir(Path::new("file.txt")).is_ok());
    }
}
