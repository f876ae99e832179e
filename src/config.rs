/*!
 * Configuration handling for lf
 */

use std::path::PathBuf;

use clap::Parser;

use crate::error::{LfError, Result};

/// Command-line arguments for lf
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "lf",
    version = env!("CARGO_PKG_VERSION"),
    about = "Colorized, iconified directory listings",
    long_about = "Lists the immediate children of a directory with a colorized \
permission string and a type glyph per entry, classifying regular files by \
sniffing their leading bytes."
)]
pub struct Args {
    /// Directory to list (only the first value is used)
    #[clap(default_value = ".")]
    pub paths: Vec<String>,

    /// Include dot-entries and the synthetic `.`/`..` rows
    #[clap(short = 'a', long = "all")]
    pub all: bool,

    /// Select output fields (reserved; not yet applied to output)
    #[clap(short = 'f', long = "fields", value_name = "VALUE")]
    pub fields: Option<String>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory to list
    pub target_dir: PathBuf,

    /// Whether to include dot-entries and synthetic `.`/`..` rows
    pub show_all: bool,

    /// Requested output fields (parsed but currently inert)
    pub fields: Option<String>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let target = args
            .paths
            .first()
            .map(String::as_str)
            .unwrap_or(".")
            .to_string();

        Self {
            target_dir: PathBuf::from(target),
            show_all: args.all,
            fields: args.fields,
        }
    }

    /// Validate the configuration
    ///
    /// A missing target is reported distinctly from an empty directory so
    /// the driver can exit non-zero with a clear diagnostic.
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.exists() {
            return Err(LfError::PathNotFound(
                self.target_dir.display().to_string(),
            ));
        }

        Ok(())
    }
}
