//! Defines the [`Renderer`], which owns the parsed page template and applies
//! it to page content, writing the rendered page to disk.

use gtmpl::{Context, Template, Value};
use log::debug;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

/// The default location of the template file, relative to the working
/// directory.
pub const DEFAULT_TEMPLATE_FILE: &str = "template.tmpl";

/// Applies a single parsed template to page content. A [`Renderer`] is built
/// once per run and shared by reference between all pages.
pub struct Renderer {
    template: Template,
}

impl Renderer {
    /// Loads and parses the template at `path`.
    pub fn from_file(path: &Path) -> Result<Renderer> {
        use std::io::Read;
        let mut contents = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut contents))
            .map_err(|err| Error::OpenTemplateFile {
                path: path.to_owned(),
                err,
            })?;

        let renderer = Renderer::parse(&contents).map_err(|err| match err {
            Error::ParseTemplate { path: _, err } => Error::ParseTemplate {
                path: Some(path.to_owned()),
                err,
            },
            err => err,
        })?;
        debug!("Loaded template '{}'", path.display());
        Ok(renderer)
    }

    /// Parses a template from source text.
    pub(crate) fn parse(source: &str) -> Result<Renderer> {
        let mut template = Template::default();
        template
            .parse(source)
            .map_err(|err| Error::ParseTemplate { path: None, err })?;
        Ok(Renderer { template })
    }

    /// Executes the template against `content` and writes the result to
    /// `output`, truncating any existing file. The content is HTML-escaped
    /// before it is bound as the template's data value. Nothing is written
    /// unless the template executes successfully.
    pub fn render(&self, output: &Path, content: &str) -> Result<()> {
        let context = Context::from(Value::String(escape(content)))
            .map_err(Error::Execute)?;
        let mut buffer: Vec<u8> = Vec::new();
        self.template
            .execute(&mut buffer, &context)
            .map_err(Error::Execute)?;
        std::fs::write(output, &buffer).map_err(|err| Error::WriteOutput {
            path: output.to_owned(),
            err,
        })
    }
}

/// Escapes `content` the way Go's `html/template` escapes text: `&`, `<`,
/// and `>` become named entities, `"`, `'`, and `+` become numeric ones, and
/// NUL becomes U+FFFD.
pub fn escape(content: &str) -> String {
    use pulldown_cmark::escape::escape_html;

    let mut escaped = String::with_capacity(content.len());
    let mut rest = content;
    // Writing into a `String` can't fail.
    while let Some(i) = rest.find(|c: char| matches!(c, '"' | '\'' | '+' | '\0')) {
        let _ = escape_html(&mut escaped, &rest[..i]);
        escaped.push_str(match rest.as_bytes()[i] {
            b'"' => "&#34;",
            b'\'' => "&#39;",
            b'+' => "&#43;",
            _ => "\u{FFFD}",
        });
        rest = &rest[i + 1..];
    }
    let _ = escape_html(&mut escaped, rest);
    escaped
}

/// The result of a fallible template operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error loading or executing the template.
#[derive(Debug)]
pub enum Error {
    /// Returned when the template file can't be opened or read.
    OpenTemplateFile { path: PathBuf, err: std::io::Error },

    /// Returned when the template source is malformed. `path` is `None` for
    /// templates parsed from memory.
    ParseTemplate { path: Option<PathBuf>, err: String },

    /// Returned when the destination file can't be written.
    WriteOutput { path: PathBuf, err: std::io::Error },

    /// Returned when executing the template fails.
    Execute(String),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OpenTemplateFile { path, err } => {
                write!(f, "Opening template file '{}': {}", path.display(), err)
            }
            Error::ParseTemplate {
                path: Some(path),
                err,
            } => {
                write!(f, "Parsing template file '{}': {}", path.display(), err)
            }
            Error::ParseTemplate { path: None, err } => {
                write!(f, "Parsing template: {}", err)
            }
            Error::WriteOutput { path, err } => {
                write!(f, "Writing output file '{}': {}", path.display(), err)
            }
            Error::Execute(err) => write!(f, "Executing template: {}", err),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::OpenTemplateFile { path: _, err } => Some(err),
            Error::ParseTemplate { .. } => None,
            Error::WriteOutput { path: _, err } => Some(err),
            Error::Execute(_) => None,
        }
    }
}
