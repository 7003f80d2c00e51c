//! The library code for the `makesite` static site generator. A build is a
//! single linear pass:
//!
//! 1. Resolve the [`config::Config`] from the command line and the optional
//!    project file ([`crate::config`])
//! 2. Load the page template once ([`crate::template`])
//! 3. Either build the one configured page, or walk the root directory and
//!    build every `.txt` file found ([`crate::walk`])
//!
//! Building a page ([`crate::page`]) reads the source text, derives the
//! sibling `.html` output path, and renders the HTML-escaped text through the
//! template straight into the output file.
//!
//! Any failure to read a source, load the template, or write a page stops
//! the build. Directories that can't be listed are logged and skipped.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod config;
pub mod page;
pub mod template;
mod util;
pub mod walk;
