//! Defines the [`SourceDocument`] type and [`build_page`], which turns one
//! `.txt` source file into its sibling `.html` page.

use crate::template::{Error as TemplateError, Renderer};
use log::info;
use std::fmt;
use std::path::{Path, PathBuf};

/// The extension which marks a file as a page source.
pub const SOURCE_EXTENSION: &str = ".txt";

/// The extension given to rendered pages.
pub const HTML_EXTENSION: &str = ".html";

/// A source file read from disk.
pub struct SourceDocument {
    /// The location of the source file.
    pub path: PathBuf,

    /// The raw text content of the source file.
    pub content: String,
}

impl SourceDocument {
    /// Reads the source file at `path` in full.
    pub fn read(path: &Path) -> Result<SourceDocument> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(SourceDocument {
                path: path.to_owned(),
                content,
            }),
            Err(err) => Err(Error::ReadSource {
                path: path.to_owned(),
                err,
            }),
        }
    }

    /// The location the rendered page will be written to. See
    /// [`output_path`].
    pub fn output_path(&self) -> Result<PathBuf> {
        output_path(&self.path)
    }
}

/// Derives a page's output path from its source path: everything from the
/// first occurrence of [`SOURCE_EXTENSION`] onward is replaced by
/// [`HTML_EXTENSION`]. For example `posts/hello.txt` becomes
/// `posts/hello.html`.
pub fn output_path(source: &Path) -> Result<PathBuf> {
    let source_str = source
        .to_str()
        .ok_or_else(|| Error::InvalidFileName(source.to_owned()))?;
    let stem = match source_str.find(SOURCE_EXTENSION) {
        Some(i) => &source_str[..i],
        None => source_str,
    };
    Ok(PathBuf::from(format!("{}{}", stem, HTML_EXTENSION)))
}

/// Reads the source file at `source`, renders it with `renderer`, and writes
/// the result next to the source. Returns the output path.
pub fn build_page(renderer: &Renderer, source: &Path) -> Result<PathBuf> {
    let document = SourceDocument::read(source)?;
    let output = document.output_path()?;
    renderer.render(&output, &document.content)?;
    info!("Wrote '{}'", output.display());
    Ok(output)
}

/// The result of a fallible page-building operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error building a single page.
#[derive(Debug)]
pub enum Error {
    /// Returned when the source file can't be read as UTF-8 text.
    ReadSource { path: PathBuf, err: std::io::Error },

    /// Returned when a source path isn't valid UTF-8.
    InvalidFileName(PathBuf),

    /// Returned when rendering or writing the page fails.
    Template(TemplateError),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ReadSource { path, err } => {
                write!(f, "Reading source file '{}': {}", path.display(), err)
            }
            Error::InvalidFileName(path) => {
                write!(f, "invalid file name: {:?}", path)
            }
            Error::Template(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ReadSource { path: _, err } => Some(err),
            Error::InvalidFileName(_) => None,
            Error::Template(err) => Some(err),
        }
    }
}

impl From<TemplateError> for Error {
    /// Converts a [`TemplateError`] into an [`Error`]. This allows us to use
    /// the `?` operator when rendering.
    fn from(err: TemplateError) -> Error {
        Error::Template(err)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_path() -> Result<()> {
        assert_eq!(
            PathBuf::from("posts/hello.html"),
            output_path(Path::new("posts/hello.txt"))?
        );
        assert_eq!(
            PathBuf::from("./first-post.html"),
            output_path(Path::new("./first-post.txt"))?
        );
        Ok(())
    }

    #[test]
    fn test_output_path_first_occurrence() -> Result<()> {
        assert_eq!(
            PathBuf::from("notes.html"),
            output_path(Path::new("notes.txt.bak.txt"))?
        );
        assert_eq!(
            PathBuf::from("drafts/a.html"),
            output_path(Path::new("drafts/a.txt.txt"))?
        );
        Ok(())
    }

    #[test]
    fn test_output_path_without_extension() -> Result<()> {
        assert_eq!(
            PathBuf::from("README.html"),
            output_path(Path::new("README"))?
        );
        Ok(())
    }

    #[test]
    fn test_build_page() {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("posts");
        std::fs::create_dir(&posts).unwrap();
        let source = posts.join("hello.txt");
        std::fs::write(&source, "Hi there").unwrap();

        let renderer = Renderer::parse("<p>{{.}}</p>").unwrap();
        let output = build_page(&renderer, &source).unwrap();

        assert_eq!(posts.join("hello.html"), output);
        assert_eq!("<p>Hi there</p>", std::fs::read_to_string(&output).unwrap());
        assert_eq!("Hi there", std::fs::read_to_string(&source).unwrap());
    }

    #[test]
    fn test_build_page_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("page.txt");
        std::fs::write(&source, "line one\nline <two>\n").unwrap();
        let renderer = Renderer::parse("<html><body>{{.}}</body></html>").unwrap();

        let output = build_page(&renderer, &source).unwrap();
        let first = std::fs::read(&output).unwrap();
        build_page(&renderer, &source).unwrap();
        assert_eq!(first, std::fs::read(&output).unwrap());
    }

    #[test]
    fn test_build_page_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("missing.txt");
        let renderer = Renderer::parse("{{.}}").unwrap();

        match build_page(&renderer, &source) {
            Err(Error::ReadSource { path, err: _ }) => assert_eq!(source, path),
            other => panic!("expected ReadSource error, got {:?}", other),
        }
        assert!(!dir.path().join("missing.html").exists());
    }

    #[test]
    fn test_build_page_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("binary.txt");
        std::fs::write(&source, [0xff, 0xfe, 0xfd]).unwrap();
        let renderer = Renderer::parse("{{.}}").unwrap();

        assert!(matches!(
            build_page(&renderer, &source),
            Err(Error::ReadSource { .. })
        ));
        assert!(!dir.path().join("binary.html").exists());
    }
}
