//! Read-only mapping of a named shared-memory segment.
//!
//! On Windows the name is opened with `OpenFileMappingW`. Elsewhere the
//! name, minus any `Global\` or `Local\` namespace, is a file inside the
//! shared-memory directory (normally `/dev/shm`) and is read into memory.
//!
//! A [`SharedSegment`] unmaps and closes everything it acquired when it is
//! dropped, so callers release the segment on every exit path by scoping it.

use std::ops::Deref;
use std::path::Path;

use tracing::debug;

use crate::error::CoolantResult;

/// Kernel object namespaces that only mean something on Windows.
const NAMESPACE_PREFIXES: [&str; 2] = ["Global\\", "Local\\"];

/// A mapped segment. Dereferences to its bytes.
pub struct SharedSegment {
    mapping: platform::Mapping,
}

impl SharedSegment {
    /// Map segment `name` for reading.
    ///
    /// `shm_dir` is only consulted outside Windows.
    pub fn open(name: &str, shm_dir: &Path) -> CoolantResult<Self> {
        let mapping = platform::Mapping::open(name, shm_dir)?;
        debug!(segment = name, len = mapping.as_bytes().len(), "mapped shared memory");
        Ok(Self { mapping })
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.mapping.as_bytes()
    }
}

impl Deref for SharedSegment {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Strip a Windows kernel namespace from a segment name.
pub fn segment_file_name(name: &str) -> &str {
    NAMESPACE_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .unwrap_or(name)
}

#[cfg(not(windows))]
mod platform {
    use std::fs;
    use std::io;
    use std::path::Path;

    use super::segment_file_name;
    use crate::error::{CoolantError, CoolantResult};

    /// A private copy of the segment file.
    ///
    /// A live file mapping faults with SIGBUS once the exporter truncates
    /// or replaces the file, so the bytes are copied out at open time.
    pub struct Mapping {
        bytes: Vec<u8>,
    }

    impl Mapping {
        pub fn open(name: &str, shm_dir: &Path) -> CoolantResult<Self> {
            let path = shm_dir.join(segment_file_name(name));
            let bytes = fs::read(&path).map_err(|err| {
                let describe = path.display().to_string();
                match err.kind() {
                    io::ErrorKind::NotFound => CoolantError::SegmentNotFound(describe),
                    io::ErrorKind::PermissionDenied => CoolantError::AccessDenied(describe),
                    _ => CoolantError::Map(format!("{describe}: {err}")),
                }
            })?;
            Ok(Self { bytes })
        }

        pub fn as_bytes(&self) -> &[u8] {
            &self.bytes
        }
    }
}

#[cfg(windows)]
#[allow(unsafe_code)]
mod platform {
    use std::path::Path;

    use windows::Win32::Foundation::{
        CloseHandle, ERROR_ACCESS_DENIED, ERROR_FILE_NOT_FOUND, FALSE, HANDLE,
    };
    use windows::Win32::System::Memory::{
        FILE_MAP_READ, MEMORY_BASIC_INFORMATION, MEMORY_MAPPED_VIEW_ADDRESS, MapViewOfFile,
        OpenFileMappingW, UnmapViewOfFile, VirtualQuery,
    };
    use windows::core::HSTRING;

    use crate::error::{CoolantError, CoolantResult};

    pub struct Mapping {
        handle: HANDLE,
        view: MEMORY_MAPPED_VIEW_ADDRESS,
        len: usize,
    }

    impl Mapping {
        pub fn open(name: &str, _shm_dir: &Path) -> CoolantResult<Self> {
            let wide = HSTRING::from(name);

            // SAFETY: `wide` is a valid NUL-terminated wide string for the
            // duration of the call.
            let handle = unsafe { OpenFileMappingW(FILE_MAP_READ.0, FALSE, &wide) }.map_err(
                |err| {
                    if err.code() == ERROR_FILE_NOT_FOUND.to_hresult() {
                        CoolantError::SegmentNotFound(name.to_string())
                    } else if err.code() == ERROR_ACCESS_DENIED.to_hresult() {
                        CoolantError::AccessDenied(name.to_string())
                    } else {
                        CoolantError::Map(format!("{name}: {err}"))
                    }
                },
            )?;

            // SAFETY: `handle` was just opened with read access. A length
            // of zero maps the whole segment.
            let view = unsafe { MapViewOfFile(handle, FILE_MAP_READ, 0, 0, 0) };
            if view.Value.is_null() {
                let err = windows::core::Error::from_win32();
                // SAFETY: `handle` is open and owned here.
                unsafe {
                    let _ = CloseHandle(handle);
                }
                return Err(CoolantError::Map(format!("{name}: {err}")));
            }

            // The view size is not reported by MapViewOfFile; ask the VM
            // manager for the committed region instead.
            let mut info = MEMORY_BASIC_INFORMATION::default();
            // SAFETY: `view` is a live mapping and `info` is a valid buffer
            // of the size passed.
            let written = unsafe {
                VirtualQuery(
                    Some(view.Value.cast_const()),
                    &mut info,
                    size_of::<MEMORY_BASIC_INFORMATION>(),
                )
            };
            let len = if written == 0 { 0 } else { info.RegionSize };

            Ok(Self { handle, view, len })
        }

        pub fn as_bytes(&self) -> &[u8] {
            if self.len == 0 {
                return &[];
            }
            // SAFETY: `view` stays mapped for the lifetime of `self` and
            // spans at least `len` readable bytes.
            unsafe { std::slice::from_raw_parts(self.view.Value.cast::<u8>(), self.len) }
        }
    }

    impl Drop for Mapping {
        fn drop(&mut self) {
            // SAFETY: both were acquired in `open` and are released once.
            unsafe {
                let _ = UnmapViewOfFile(self.view);
                let _ = CloseHandle(self.handle);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_file_name_strips_namespace() {
        assert_eq!(segment_file_name(r"Global\HWiNFO_SENS_SM2"), "HWiNFO_SENS_SM2");
        assert_eq!(segment_file_name(r"Local\HWiNFO_SENS_SM2"), "HWiNFO_SENS_SM2");
        assert_eq!(segment_file_name("HWiNFO_SENS_SM2"), "HWiNFO_SENS_SM2");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_missing_segment() {
        let dir = tempfile::tempdir().unwrap();
        let err = SharedSegment::open(r"Global\HWiNFO_SENS_SM2", dir.path())
            .err()
            .unwrap();
        assert!(matches!(err, crate::CoolantError::SegmentNotFound(_)));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_maps_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("seg"), [1u8, 2, 3]).unwrap();
        let segment = SharedSegment::open(r"Local\seg", dir.path()).unwrap();
        assert_eq!(&*segment, &[1, 2, 3]);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_exporter_truncating_after_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seg");
        std::fs::write(&path, vec![1u8; 8192]).unwrap();

        let segment = SharedSegment::open("seg", dir.path()).unwrap();
        std::fs::OpenOptions::new()
            .write(true)
            .open(&path)
            .unwrap()
            .set_len(0)
            .unwrap();

        let sum: u64 = segment.iter().map(|&b| u64::from(b)).sum();
        assert_eq!(sum, 8192);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_empty_file_maps_to_empty_slice() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("seg"), b"").unwrap();
        let segment = SharedSegment::open("seg", dir.path()).unwrap();
        assert!(segment.is_empty());
    }
}
