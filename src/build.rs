//! Exports the [`build_site`] function which stitches together the high-level
//! steps of a build: loading the template ([`crate::template`]), then either
//! building the single configured page ([`crate::page`]) or walking the root
//! directory for every page source ([`crate::walk`]).

use crate::config::Config;
use crate::page::{build_page, Error as PageError};
use crate::template::{Error as TemplateError, Renderer};
use crate::walk::walk_directory;
use std::fmt;
use std::path::PathBuf;

/// Builds the site from a [`Config`] object. The template is loaded before
/// any page is built so a missing or malformed template aborts the build
/// without writing anything. Returns the output paths in the order they were
/// written.
pub fn build_site(config: Config) -> Result<Vec<PathBuf>> {
    let renderer = Renderer::from_file(&config.template_file)?;
    match &config.source_file {
        Some(source_file) => Ok(vec![build_page(&renderer, source_file)?]),
        None => Ok(walk_directory(&renderer, &config.root_directory)?),
    }
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building a site. Errors can be during template loading
/// or while building an individual page.
#[derive(Debug)]
pub enum Error {
    /// Returned when the template can't be loaded or parsed.
    Template(TemplateError),

    /// Returned when a page can't be built.
    Page(PageError),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Template(err) => err.fmt(f),
            Error::Page(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Template(err) => Some(err),
            Error::Page(err) => Some(err),
        }
    }
}

impl From<TemplateError> for Error {
    /// Converts [`TemplateError`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: TemplateError) -> Error {
        Error::Template(err)
    }
}

impl From<PageError> for Error {
    /// Converts [`PageError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: PageError) -> Error {
        Error::Page(err)
    }
}
