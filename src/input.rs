use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use thiserror::Error;

/// Marker argument that reads a text from standard input.
pub const STDIN_MARKER: &str = "-";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read standard input: {source}")]
    Stdin {
        #[source]
        source: io::Error,
    },
    #[error("standard input ('-') can only be used for one text")]
    StdinReused,
}

/// A text to score, with a label saying where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub source: String,
    pub text: String,
}

/// Resolves positional arguments into texts, reading stdin at most once.
#[derive(Debug, Default)]
pub struct TextLoader {
    inline: bool,
    stdin_used: bool,
}

impl TextLoader {
    /// With `inline` set, arguments are the texts themselves.
    pub fn new(inline: bool) -> Self {
        Self {
            inline,
            stdin_used: false,
        }
    }

    pub fn load(&mut self, arg: &str) -> Result<SourceText, InputError> {
        if self.inline {
            return Ok(SourceText {
                source: "inline".to_string(),
                text: arg.to_string(),
            });
        }

        if arg == STDIN_MARKER {
            if self.stdin_used {
                return Err(InputError::StdinReused);
            }
            self.stdin_used = true;

            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| InputError::Stdin { source })?;
            return Ok(SourceText {
                source: "<stdin>".to_string(),
                text,
            });
        }

        let path = PathBuf::from(arg);
        if !path.exists() {
            return Err(InputError::NotFound { path });
        }
        let text = fs::read_to_string(&path).map_err(|source| InputError::Read {
            path: path.clone(),
            source,
        })?;

        log::debug!("loaded {} bytes from {}", text.len(), path.display());

        Ok(SourceText {
            source: path.display().to_string(),
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reference.txt");
        fs::write(&path, "Hello world").unwrap();

        let loaded = TextLoader::new(false).load(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.text, "Hello world");
        assert_eq!(loaded.source, path.display().to_string());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let err = TextLoader::new(false).load(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, InputError::NotFound { .. }));
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn test_inline_skips_filesystem() {
        let loaded = TextLoader::new(true).load("-").unwrap();
        assert_eq!(loaded.text, "-");
        assert_eq!(loaded.source, "inline");
    }

    #[test]
    fn test_stdin_only_once() {
        let mut loader = TextLoader::new(false);
        loader.stdin_used = true;

        assert!(matches!(loader.load(STDIN_MARKER), Err(InputError::StdinReused)));
    }
}
