/*!
 * Permission string rendering
 *
 * Produces the fixed nine-slot permission column: user r,w,x; group r,w,x;
 * other r,w,x. Every slot is independently colored; a missing bit renders
 * as a dimmed placeholder. A pure function of the mode bits.
 */

use crate::types::{FG_GRAY, FG_WHITE};

pub const S_IRUSR: u32 = 0o400;
pub const S_IWUSR: u32 = 0o200;
pub const S_IXUSR: u32 = 0o100;
pub const S_IRGRP: u32 = 0o040;
pub const S_IWGRP: u32 = 0o020;
pub const S_IXGRP: u32 = 0o010;
pub const S_IROTH: u32 = 0o004;
pub const S_IWOTH: u32 = 0o002;
pub const S_IXOTH: u32 = 0o001;
pub const S_ISUID: u32 = 0o4000;
pub const S_ISGID: u32 = 0o2000;

const RESET: &str = crate::types::RESET;

fn lit(ch: char) -> String {
    format!("{FG_WHITE}{ch}{RESET}")
}

fn placeholder() -> String {
    format!("{FG_GRAY}.{RESET}")
}

/// A read or write slot: the literal character when the bit is set,
/// otherwise the placeholder.
fn rw_slot(mode: u32, bit: u32, ch: char) -> String {
    if mode & bit != 0 {
        lit(ch)
    } else {
        placeholder()
    }
}

/// An execute slot with set-id handling: `x` when only the execute bit is
/// set, `s` when the set-id bit accompanies it, `S` when the set-id bit is
/// set without execute, placeholder otherwise. The other triple passes
/// `setid_bit == 0` since it has no set-id concept.
fn exec_slot(mode: u32, exec_bit: u32, setid_bit: u32) -> String {
    let exec = mode & exec_bit != 0;
    let setid = setid_bit != 0 && mode & setid_bit != 0;

    match (setid, exec) {
        (true, true) => lit('s'),
        (true, false) => lit('S'),
        (false, true) => lit('x'),
        (false, false) => placeholder(),
    }
}

/// Render the nine-slot colored permission string for a raw mode value
pub fn render_permissions(mode: u32) -> String {
    [
        rw_slot(mode, S_IRUSR, 'r'),
        rw_slot(mode, S_IWUSR, 'w'),
        exec_slot(mode, S_IXUSR, S_ISUID),
        rw_slot(mode, S_IRGRP, 'r'),
        rw_slot(mode, S_IWGRP, 'w'),
        exec_slot(mode, S_IXGRP, S_ISGID),
        rw_slot(mode, S_IROTH, 'r'),
        rw_slot(mode, S_IWOTH, 'w'),
        exec_slot(mode, S_IXOTH, 0),
    ]
    .concat()
}
