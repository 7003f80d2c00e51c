//! Command-line and project-file configuration. The [`Config`] is resolved
//! once at startup from the command-line flags, an optional `makesite.yaml`
//! project file in the working directory, and built-in defaults, in that
//! order of precedence.

use crate::template::DEFAULT_TEMPLATE_FILE;
use anyhow::{Context, Result};
use clap::{App, Arg, ArgMatches};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The name of the optional project file.
pub const PROJECT_FILE: &str = "makesite.yaml";

/// The root directory walked when neither the command line nor the project
/// file names one.
pub const DEFAULT_ROOT_DIRECTORY: &str = ".";

/// The contents of a `makesite.yaml` project file. Every field is optional.
#[derive(Deserialize, Default, Debug, PartialEq)]
pub struct Project {
    /// The template file to render pages with.
    #[serde(default)]
    pub template: Option<PathBuf>,

    /// The directory to search for page sources.
    #[serde(default)]
    pub root_directory: Option<PathBuf>,
}

impl Project {
    /// Loads the project file at `path`. A missing file yields an empty
    /// [`Project`]; a file that exists but doesn't parse is an error.
    pub fn find(path: &Path) -> Result<Project> {
        use crate::util::open;
        if !path.exists() {
            return Ok(Project::default());
        }
        serde_yaml::from_reader(open(path, "project")?)
            .with_context(|| format!("Loading project file `{}`", path.display()))
    }
}

/// Everything needed to run a build.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// When set, only this file is built and `root_directory` is ignored.
    pub source_file: Option<PathBuf>,

    /// The directory to search for page sources.
    pub root_directory: PathBuf,

    /// The template file to render pages with.
    pub template_file: PathBuf,
}

impl Config {
    /// Resolves the configuration from parsed command-line arguments and the
    /// project file in the working directory (if any).
    pub fn load(matches: &ArgMatches) -> Result<Config> {
        Ok(Config::resolve(matches, Project::find(Path::new(PROJECT_FILE))?))
    }

    /// Merges command-line arguments over `project` over the defaults. An
    /// empty `--file` is treated as unset.
    pub fn resolve(matches: &ArgMatches, project: Project) -> Config {
        Config {
            source_file: matches
                .value_of("file")
                .filter(|file| !file.is_empty())
                .map(PathBuf::from),
            root_directory: matches
                .value_of("dir")
                .map(PathBuf::from)
                .or(project.root_directory)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT_DIRECTORY)),
            template_file: matches
                .value_of("template")
                .map(PathBuf::from)
                .or(project.template)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_FILE)),
        }
    }
}

/// The command-line interface.
pub fn app() -> App<'static, 'static> {
    App::new("makesite")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders `.txt` files through an HTML template into `.html` pages")
        .arg(
            Arg::with_name("file")
                .long("file")
                .value_name("PATH")
                .takes_value(true)
                .help("Build only this file"),
        )
        .arg(
            Arg::with_name("dir")
                .long("dir")
                .value_name("PATH")
                .takes_value(true)
                .help("The root directory to search for `.txt` files [default: .]"),
        )
        .arg(
            Arg::with_name("template")
                .long("template")
                .value_name("PATH")
                .takes_value(true)
                .help("The template file [default: template.tmpl]"),
        )
}
