/// Symbolic (`ls -l` style) rendering of mode bits.
///
/// Always renders exactly ten characters: one type character followed by
/// three `rwx` triplets, with setuid/setgid/sticky folded into the execute
/// positions (`s`/`S`, `t`/`T`).
use std::fs::Metadata;

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

pub const S_IFMT: u32 = 0o170_000;
pub const S_IFSOCK: u32 = 0o140_000;
pub const S_IFLNK: u32 = 0o120_000;
pub const S_IFREG: u32 = 0o100_000;
pub const S_IFBLK: u32 = 0o060_000;
pub const S_IFDIR: u32 = 0o040_000;
pub const S_IFCHR: u32 = 0o020_000;
pub const S_IFIFO: u32 = 0o010_000;

const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

/// Render `mode` as a ten-character permission string, e.g. `drwxr-xr-x`.
pub fn filemode(mode: u32) -> String {
    let mut out = String::with_capacity(10);
    out.push(type_char(mode));

    out.push(if mode & 0o400 != 0 { 'r' } else { '-' });
    out.push(if mode & 0o200 != 0 { 'w' } else { '-' });
    out.push(special_exec(mode & 0o100 != 0, mode & S_ISUID != 0, 's'));

    out.push(if mode & 0o040 != 0 { 'r' } else { '-' });
    out.push(if mode & 0o020 != 0 { 'w' } else { '-' });
    out.push(special_exec(mode & 0o010 != 0, mode & S_ISGID != 0, 's'));

    out.push(if mode & 0o004 != 0 { 'r' } else { '-' });
    out.push(if mode & 0o002 != 0 { 'w' } else { '-' });
    out.push(special_exec(mode & 0o001 != 0, mode & S_ISVTX != 0, 't'));

    out
}

fn type_char(mode: u32) -> char {
    match mode & S_IFMT {
        S_IFLNK => 'l',
        S_IFSOCK => 's',
        S_IFREG => '-',
        S_IFBLK => 'b',
        S_IFDIR => 'd',
        S_IFCHR => 'c',
        S_IFIFO => 'p',
        _ => '-',
    }
}

/// Execute slot: plain `x`, or the special-bit letter (lowercase when the
/// execute bit is also set, uppercase when it is not).
fn special_exec(exec: bool, special: bool, letter: char) -> char {
    match (exec, special) {
        (true, false) => 'x',
        (false, false) => '-',
        (true, true) => letter,
        (false, true) => letter.to_ascii_uppercase(),
    }
}

/// Raw mode bits of an entry obtained from a link-aware stat.
#[cfg(unix)]
pub fn entry_mode(meta: &Metadata) -> u32 {
    meta.mode()
}

/// Synthesised mode bits for hosts without a Unix mode: directories and
/// links are fully accessible, files are `rw` unless marked read-only.
#[cfg(not(unix))]
pub fn entry_mode(meta: &Metadata) -> u32 {
    let file_type = meta.file_type();
    let write = if meta.permissions().readonly() { 0 } else { 0o222 };
    if file_type.is_symlink() {
        S_IFLNK | 0o777
    } else if file_type.is_dir() {
        S_IFDIR | 0o555 | write
    } else if file_type.is_file() {
        S_IFREG | 0o444 | write
    } else {
        0o444 | write
    }
}
