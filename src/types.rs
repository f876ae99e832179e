/*!
 * Core types for the lf application
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub const FG_ORANGE: &str = "\x1b[38;5;216m";
pub const FG_BLUE: &str = "\x1b[38;5;153m";
pub const FG_GREEN: &str = "\x1b[38;5;157m";
pub const FG_LAVENDER: &str = "\x1b[38;5;183m";
pub const FG_WHITE: &str = "\x1b[38;5;254m";
pub const FG_GRAY: &str = "\x1b[38;5;240m";
pub const RESET: &str = "\x1b[0m";

/// Classification tag for a single directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Directory
    Dir,
    /// Dot-prefixed directory
    DirHidden,
    /// Character device
    Special,
    /// Block device
    Block,
    /// Named pipe (FIFO)
    Pipe,
    /// Unix domain socket
    Socket,
    /// Symbolic link
    Symlink,
    /// Regular file
    File,
    /// Dot-prefixed regular file
    FileHidden,
    /// Binary (non-text) file
    Binary,
    /// Position-independent executable
    Exec,
    /// Shell script
    Script,
}

/// Display glyphs for each classification, colored and ready to print.
///
/// Built once at first use and never mutated. The glyphs assume a Nerd
/// Font capable terminal; each value carries its own color escape and a
/// trailing space.
pub static SYMBOLS: Lazy<HashMap<Kind, String>> = Lazy::new(|| {
    HashMap::from([
        (Kind::Dir, format!("{FG_BLUE}󰉋 ")),
        (Kind::DirHidden, format!("{FG_BLUE}󱞞 ")),
        (Kind::Special, format!("{FG_LAVENDER} ")),
        (Kind::Block, format!("{FG_LAVENDER}󰆦 ")),
        (Kind::Pipe, format!("{FG_LAVENDER}󰟥 ")),
        (Kind::Socket, format!("{FG_LAVENDER}󰟨 ")),
        (Kind::Symlink, format!("{FG_GREEN} ")),
        (Kind::File, format!("{FG_WHITE}󰈔 ")),
        (Kind::FileHidden, format!("{FG_WHITE}󰘓 ")),
        (Kind::Binary, format!("{FG_WHITE} ")),
        (Kind::Exec, format!("{FG_ORANGE}󰩃 ")),
        (Kind::Script, format!("{FG_ORANGE}󰄛 ")),
    ])
});

impl Kind {
    /// Colored display glyph for this classification
    pub fn symbol(&self) -> &'static str {
        SYMBOLS[self].as_str()
    }
}
