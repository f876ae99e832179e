/*!
 * Listing output
 *
 * Composes the permission column, classification glyph, and entry name
 * into one printed line per entry: synthetic `.`/`..` rows first when
 * requested, then directories, then files.
 */

use std::fs;
use std::io::{self, Write};
use std::os::unix::fs::PermissionsExt;

use crate::classify::classify;
use crate::config::Config;
use crate::perms::render_permissions;
use crate::scanner::Listing;
use crate::types::{Kind, RESET};

/// Writer for directory listings
pub struct ListingWriter {
    /// Writer configuration
    config: Config,
}

impl ListingWriter {
    /// Create a new listing writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write the listing, one line per entry.
    ///
    /// Entries whose metadata cannot be read are skipped with a warning
    /// on stderr; a single inaccessible entry never aborts the listing.
    pub fn write<W: Write>(&self, listing: &Listing, out: &mut W) -> io::Result<()> {
        if self.config.show_all {
            self.write_synthetic(out)?;
        }

        for name in listing.dirs.iter().chain(listing.files.iter()) {
            self.write_entry(name, out)?;
        }

        Ok(())
    }

    /// Write the `.` and `..` rows. Both reuse the target directory's own
    /// stat result and the hidden-directory glyph.
    fn write_synthetic<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let metadata = match fs::metadata(&self.config.target_dir) {
            Ok(metadata) => metadata,
            Err(e) => {
                eprintln!(
                    "lf: warning: cannot stat {}: {}",
                    self.config.target_dir.display(),
                    e
                );
                return Ok(());
            }
        };

        let perms = render_permissions(metadata.permissions().mode());
        for name in [".", ".."] {
            writeln!(
                out,
                "{}  {} {}{}/",
                perms,
                Kind::DirHidden.symbol(),
                name,
                RESET
            )?;
        }

        Ok(())
    }

    fn write_entry<W: Write>(&self, name: &str, out: &mut W) -> io::Result<()> {
        let path = self.config.target_dir.join(name);

        // Stat through symlinks first; broken links fall back to the link
        // itself so they still get a row.
        let metadata = match fs::metadata(&path).or_else(|_| fs::symlink_metadata(&path)) {
            Ok(metadata) => metadata,
            Err(e) => {
                eprintln!("lf: warning: skipping {}: {}", path.display(), e);
                return Ok(());
            }
        };

        let kind = classify(&path, &metadata);
        let perms = render_permissions(metadata.permissions().mode());
        let slash = if metadata.is_dir() { "/" } else { "" };

        writeln!(out, "{}  {} {}{}{}", perms, kind.symbol(), name, RESET, slash)?;

        Ok(())
    }
}
