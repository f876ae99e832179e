/*!
 * lf - colorized, iconified directory listings
 *
 * Lists the immediate children of a directory, classifies each entry by
 * metadata and content sniffing, and prints one permission-annotated,
 * glyph-prefixed line per entry.
 */

pub mod classify;
pub mod config;
pub mod error;
pub mod perms;
pub mod scanner;
pub mod types;
pub mod writer;


// Re-export main components for easier access
pub use classify::{classify, sniff_mime};
pub use config::{Args, Config};
pub use error::{LfError, Result};
pub use perms::render_permissions;
pub use scanner::{Listing, Scanner};
pub use types::Kind;
pub use writer::ListingWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
