//! Error numbers.
//!
//! `<errno.h>` constants (Linux values), `strerror` text as glibc spells it,
//! and the `perror` line format. Errors arrive as [`std::io::Error`]; use
//! [`errno_of`] to recover the number a C caller would have seen.

use std::io;

pub const EPERM: i32 = 1;
pub const ENOENT: i32 = 2;
pub const ESRCH: i32 = 3;
pub const EINTR: i32 = 4;
pub const EIO: i32 = 5;
pub const ENXIO: i32 = 6;
pub const E2BIG: i32 = 7;
pub const EBADF: i32 = 9;
pub const EAGAIN: i32 = 11;
pub const ENOMEM: i32 = 12;
pub const EACCES: i32 = 13;
pub const EFAULT: i32 = 14;
pub const EBUSY: i32 = 16;
pub const EEXIST: i32 = 17;
pub const ENOTDIR: i32 = 20;
pub const EISDIR: i32 = 21;
pub const EINVAL: i32 = 22;
pub const EMFILE: i32 = 24;
pub const ENOSPC: i32 = 28;
pub const ESPIPE: i32 = 29;
pub const EROFS: i32 = 30;
pub const EPIPE: i32 = 32;
pub const EDOM: i32 = 33;
pub const ERANGE: i32 = 34;
pub const ENAMETOOLONG: i32 = 36;
pub const ENOSYS: i32 = 38;
pub const ETIMEDOUT: i32 = 110;

/// Message for `errnum`, matching glibc's `strerror`.
pub fn strerror(errnum: i32) -> String {
    let text = match errnum {
        0 => "Success",
        EPERM => "Operation not permitted",
        ENOENT => "No such file or directory",
        ESRCH => "No such process",
        EINTR => "Interrupted system call",
        EIO => "Input/output error",
        ENXIO => "No such device or address",
        E2BIG => "Argument list too long",
        EBADF => "Bad file descriptor",
        EAGAIN => "Resource temporarily unavailable",
        ENOMEM => "Cannot allocate memory",
        EACCES => "Permission denied",
        EFAULT => "Bad address",
        EBUSY => "Device or resource busy",
        EEXIST => "File exists",
        ENOTDIR => "Not a directory",
        EISDIR => "Is a directory",
        EINVAL => "Invalid argument",
        EMFILE => "Too many open files",
        ENOSPC => "No space left on device",
        ESPIPE => "Illegal seek",
        EROFS => "Read-only file system",
        EPIPE => "Broken pipe",
        EDOM => "Numerical argument out of domain",
        ERANGE => "Numerical result out of range",
        ENAMETOOLONG => "File name too long",
        ENOSYS => "Function not implemented",
        ETIMEDOUT => "Connection timed out",
        _ => return format!("Unknown error {errnum}"),
    };
    text.to_string()
}

/// The errno a C caller would observe for `err`.
///
/// OS errors carry their number; synthetic errors are mapped from their
/// kind, with `EIO` as the catch-all.
pub fn errno_of(err: &io::Error) -> i32 {
    if let Some(code) = err.raw_os_error() {
        return code;
    }
    match err.kind() {
        io::ErrorKind::NotFound => ENOENT,
        io::ErrorKind::PermissionDenied => EACCES,
        io::ErrorKind::AlreadyExists => EEXIST,
        io::ErrorKind::Interrupted => EINTR,
        io::ErrorKind::InvalidInput => EINVAL,
        io::ErrorKind::BrokenPipe => EPIPE,
        io::ErrorKind::WouldBlock => EAGAIN,
        io::ErrorKind::TimedOut => ETIMEDOUT,
        io::ErrorKind::OutOfMemory => ENOMEM,
        io::ErrorKind::Unsupported => ENOSYS,
        _ => EIO,
    }
}

/// The line `perror(prefix)` writes: `"<prefix>: <strerror>"`, or just the
/// message when the prefix is empty.
pub fn perror_line(prefix: &str, errnum: i32) -> String {
    if prefix.is_empty() {
        strerror(errnum)
    } else {
        format!("{prefix}: {}", strerror(errnum))
    }
}
