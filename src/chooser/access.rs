//! Read/write permission checks used to validate a selection.

use std::path::Path;

/// Answers whether the running process may read or write a path.
///
/// The chooser only ever asks these two questions, so tests can swap in a
/// probe that denies access without depending on who runs the test suite
/// (root ignores permission bits).
pub trait AccessProbe {
    fn can_read(&self, path: &Path) -> bool;
    fn can_write(&self, path: &Path) -> bool;
}

/// Access checks against the real operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsAccess;

#[cfg(unix)]
impl OsAccess {
    #[allow(unsafe_code)]
    fn access(path: &Path, mode: libc::c_int) -> bool {
        use std::ffi::CString;
        use std::os::unix::ffi::OsStrExt;

        let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
            return false;
        };
        // SAFETY: c_path is a valid NUL-terminated string that outlives the call.
        unsafe { libc::access(c_path.as_ptr(), mode) == 0 }
    }
}

#[cfg(unix)]
impl AccessProbe for OsAccess {
    fn can_read(&self, path: &Path) -> bool {
        Self::access(path, libc::R_OK)
    }

    fn can_write(&self, path: &Path) -> bool {
        Self::access(path, libc::W_OK)
    }
}

#[cfg(not(unix))]
impl AccessProbe for OsAccess {
    fn can_read(&self, path: &Path) -> bool {
        if path.is_dir() {
            std::fs::read_dir(path).is_ok()
        } else {
            std::fs::File::open(path).is_ok()
        }
    }

    fn can_write(&self, path: &Path) -> bool {
        std::fs::metadata(path)
            .map(|m| !m.permissions().readonly())
            .unwrap_or(false)
    }
}

/// A path is a valid selection when it is present, is a directory, and the
/// process can both read and write it.
pub fn is_valid_selection(path: Option<&Path>, probe: &dyn AccessProbe) -> bool {
    match path {
        Some(path) => path.is_dir() && probe.can_read(path) && probe.can_write(path),
        None => false,
    }
}
