use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "envy")]
#[command(version)]
#[command(about = "A minimal modal terminal text editor")]
pub struct CliArgs {
    /// File to open; omit for an untitled buffer
    pub file: Option<PathBuf>,
}

impl CliArgs {
    /// Check if the provided path exists (following symlinks)
    pub fn exists(&self) -> bool {
        if let Some(path) = &self.file {
            std::fs::metadata(path).is_ok()
        } else {
            false
        }
    }
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_cli_args() {
        let args = CliArgs::default();
        assert!(args.file.is_none());
        assert!(!args.exists());
    }

    #[test]
    fn test_parse_no_args() {
        let args = CliArgs::parse_from(["envy"]);
        assert!(args.file.is_none());
    }

    #[test]
    fn test_parse_path() {
        let args = CliArgs::parse_from(["envy", "notes.txt"]);
        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
    }

    #[test]
    fn test_rejects_extra_positional() {
        assert!(CliArgs::try_parse_from(["envy", "a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn test_exists() {
        let file = NamedTempFile::new().unwrap();
        let args = CliArgs {
            file: Some(file.path().to_path_buf()),
        };
        assert!(args.exists());

        let missing = CliArgs {
            file: Some(PathBuf::from("/nonexistent/path")),
        };
        assert!(!missing.exists());
    }
}
