/*!
 * Entry classification
 *
 * Maps a path plus its stat metadata to a display classification. The
 * decision chain is ordered: symlink, directory, block device, socket,
 * char device, other non-regular types, then content sniffing for regular
 * files. First match wins.
 */

use std::fs::{self, File, Metadata};
use std::io::{self, Read};
use std::os::unix::fs::FileTypeExt;
use std::path::Path;

use crate::types::Kind;

pub const MIME_PIE_EXECUTABLE: &str = "application/x-pie-executable";
pub const MIME_SHELLSCRIPT: &str = "text/x-shellscript";
pub const MIME_OCTET_STREAM: &str = "application/octet-stream";
pub const MIME_PLAIN_TEXT: &str = "text/plain";
pub const MIME_EMPTY: &str = "inode/x-empty";

/// Bytes inspected per file when sniffing content
const SNIFF_LEN: usize = 8192;

/// ELF e_type for shared objects / position-independent executables
const ET_DYN: u16 = 3;

/// Classify a directory entry for display.
///
/// The symlink test runs against the path itself rather than the supplied
/// metadata, which may have followed the link. All sniffing failures
/// degrade to the plain file classification; nothing here aborts a
/// listing.
pub fn classify(path: &Path, metadata: &Metadata) -> Kind {
    let hidden = path
        .file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false);

    let is_link = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if is_link {
        return Kind::Symlink;
    }

    if metadata.is_dir() {
        return if hidden { Kind::DirHidden } else { Kind::Dir };
    }

    let file_type = metadata.file_type();
    if file_type.is_block_device() {
        return Kind::Block;
    }
    if file_type.is_socket() {
        return Kind::Socket;
    }
    if file_type.is_char_device() {
        return Kind::Special;
    }
    // FIFOs and any remaining non-regular type fall through to the
    // default file glyphs.
    if !file_type.is_file() {
        return if hidden { Kind::FileHidden } else { Kind::File };
    }

    match sniff_mime(path) {
        Ok(MIME_PIE_EXECUTABLE) => Kind::Exec,
        Ok(MIME_SHELLSCRIPT) => Kind::Script,
        Ok(MIME_OCTET_STREAM) => Kind::Binary,
        _ => {
            if hidden {
                Kind::FileHidden
            } else {
                Kind::File
            }
        }
    }
}

/// Determine a file's MIME type from its leading bytes.
///
/// Opens the file for the duration of this call only. Recognizes ELF
/// position-independent executables, shell scripts by shebang, empty
/// files, and text by UTF-8 validity with a low control-byte ratio;
/// everything else is an octet stream.
pub fn sniff_mime(path: &Path) -> io::Result<&'static str> {
    let mut file = File::open(path)?;
    let mut buf = [0u8; SNIFF_LEN];
    let n = file.read(&mut buf)?;
    let buf = &buf[..n];

    if buf.is_empty() {
        return Ok(MIME_EMPTY);
    }

    if let Some(mime) = sniff_elf(buf) {
        return Ok(mime);
    }

    if let Some(mime) = sniff_shebang(buf) {
        return Ok(mime);
    }

    if is_mostly_text(buf) {
        return Ok(MIME_PLAIN_TEXT);
    }

    Ok(MIME_OCTET_STREAM)
}

/// Check for an ELF header and read `e_type`, honoring the EI_DATA
/// endianness byte. ET_DYN images are reported as PIE; other ELF types as
/// opaque binaries.
fn sniff_elf(buf: &[u8]) -> Option<&'static str> {
    if buf.len() < 18 || &buf[..4] != b"\x7fELF" {
        return None;
    }

    let e_type = if buf[5] == 2 {
        u16::from_be_bytes([buf[16], buf[17]])
    } else {
        u16::from_le_bytes([buf[16], buf[17]])
    };

    if e_type == ET_DYN {
        Some(MIME_PIE_EXECUTABLE)
    } else {
        Some(MIME_OCTET_STREAM)
    }
}

/// Interpreter names treated as shells when found on a shebang line
const SHELLS: &[&str] = &[
    "sh", "bash", "zsh", "dash", "ksh", "mksh", "ash", "csh", "tcsh", "fish",
];

/// Check for a `#!` line naming a shell, directly or via `env`
fn sniff_shebang(buf: &[u8]) -> Option<&'static str> {
    let rest = buf.strip_prefix(b"#!")?;
    let line = rest.split(|&b| b == b'\n').next().unwrap_or(rest);
    let line = String::from_utf8_lossy(line);

    let mut words = line.split_whitespace();
    let interpreter = words.next()?;
    let program = if interpreter.rsplit('/').next() == Some("env") {
        words.next()?
    } else {
        interpreter.rsplit('/').next().unwrap_or(interpreter)
    };

    if SHELLS.contains(&program) {
        Some(MIME_SHELLSCRIPT)
    } else {
        None
    }
}

/// Heuristic for text files: valid UTF-8 with under 10% control bytes
fn is_mostly_text(buf: &[u8]) -> bool {
    if std::str::from_utf8(buf).is_err() {
        return false;
    }

    let control = buf.iter().filter(|&&b| b < 9 || (b > 13 && b < 32)).count();
    (control as f32 / buf.len() as f32) < 0.1
}
