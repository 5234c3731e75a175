//! Extension-based bucket classification
//!
//! Maps a file path to the destination subdirectory ("bucket") it sorts
//! into. Pure string manipulation, no I/O.

use std::path::Path;

/// Bucket for files without a usable extension
pub const UNKNOWN_BUCKET: &str = "unknown";

/// Classify a file path into its destination bucket.
///
/// The bucket is the file name's final extension, ASCII lower-cased. Files
/// with no extension land in [`UNKNOWN_BUCKET`]; that includes dot-files
/// like `.gitignore`, which have no extension by the usual convention, and
/// names whose extension is not valid UTF-8.
///
/// The result is derived from the file name alone, so it can never contain
/// a path separator.
pub fn bucket_for(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => UNKNOWN_BUCKET.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_lowercases_extension() {
        assert_eq!(bucket_for(Path::new("a.TXT")), "txt");
        assert_eq!(bucket_for(Path::new("photo.JpEg")), "jpeg");
    }

    #[test]
    fn test_no_extension_is_unknown() {
        assert_eq!(bucket_for(Path::new("README")), UNKNOWN_BUCKET);
        assert_eq!(bucket_for(Path::new("/some/dir/Makefile")), UNKNOWN_BUCKET);
    }

    #[test]
    fn test_dotfile_is_unknown() {
        assert_eq!(bucket_for(Path::new(".gitignore")), UNKNOWN_BUCKET);
        assert_eq!(bucket_for(Path::new("/home/user/.bashrc")), UNKNOWN_BUCKET);
    }

    #[test]
    fn test_last_extension_wins() {
        assert_eq!(bucket_for(Path::new("archive.tar.gz")), "gz");
        assert_eq!(bucket_for(Path::new(".config.yml")), "yml");
    }

    #[test]
    fn test_deterministic() {
        let p = PathBuf::from("/deep/tree/File.Rs");
        assert_eq!(bucket_for(&p), bucket_for(&p));
        assert_eq!(bucket_for(&p), "rs");
    }

    #[test]
    fn test_never_contains_separator() {
        for name in ["a.txt", "dir/with.dots/file.md", "no_ext", ".hidden"] {
            let bucket = bucket_for(Path::new(name));
            assert!(!bucket.contains(std::path::MAIN_SEPARATOR));
        }
    }
}
