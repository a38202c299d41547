//! Native library layer (FFI)
//!
//! Resolves and loads `libGR` / `libGR3` with `libloading`, binds every entry
//! point the adapters use into a typed symbol table, and defines the
//! [`GrNative`] / [`Gr3Native`] traits the adapters call through.
//!
//! ```text
//! ┌──────────────┐   marshal    ┌──────────────────┐   C ABI   ┌───────────┐
//! │ Gr / Gr3     │ ───────────> │ GrNative         │ ────────> │ libGR.so  │
//! │ (adapters)   │ <─────────── │ Gr3Native        │ <──────── │ libGR3.so │
//! └──────────────┘  unmarshal   └──────────────────┘           └───────────┘
//!                                  ├─ LoadedGr / LoadedGr3 (libloading)
//!                                  └─ RecordingBackend (in-process)
//! ```

use std::path::{Path, PathBuf};

use libloading::Library;

use crate::config::LibraryConfig;
use crate::error::{BindingError, BindingResult};

pub mod gr3_sys;
pub mod gr_sys;
pub mod recording;

pub use gr3_sys::{Gr3Native, LoadedGr3, LogCallbackFn};
pub use gr_sys::{GrNative, LoadedGr};
pub use recording::{NativeArg, NativeCall, QueryReplies, RecordingBackend};

/// A loaded shared library and the path it was loaded from.
///
/// Never unloaded while a symbol table resolved from it is alive: both are
/// owned by the same `LoadedGr` / `LoadedGr3`.
#[derive(Debug)]
pub struct NativeLibrary {
    name: String,
    path: PathBuf,
    library: Library,
}

impl NativeLibrary {
    /// Loads the library described by `config`.
    ///
    /// An explicit `path` is the only candidate and its failure is reported
    /// as [`BindingError::LibraryLoad`]. Otherwise candidates are tried in
    /// order and [`BindingError::LibraryNotFound`] lists what was searched.
    pub fn open(config: &LibraryConfig) -> BindingResult<Self> {
        if let Some(path) = &config.path {
            return Self::open_path(&config.name, path).map_err(|reason| {
                BindingError::LibraryLoad {
                    path: path.clone(),
                    reason,
                }
            });
        }

        let mut searched = Vec::new();
        for candidate in config.candidates() {
            if !is_bare_name(&candidate) && !candidate.exists() {
                searched.push(candidate.display().to_string());
                continue;
            }
            match Self::open_path(&config.name, &candidate) {
                Ok(library) => return Ok(library),
                Err(reason) => {
                    tracing::debug!(
                        target: "gr_binding::ffi",
                        "Cannot load {} from {}: {}",
                        config.name,
                        candidate.display(),
                        reason
                    );
                    searched.push(format!("{} ({})", candidate.display(), reason));
                }
            }
        }

        tracing::warn!(target: "gr_binding::ffi", "{} library not found", config.name);
        Err(BindingError::LibraryNotFound {
            name: config.name.clone(),
            searched,
        })
    }

    fn open_path(name: &str, path: &Path) -> Result<Self, String> {
        // Loading runs the library's initialisers; GR and GR3 have none that
        // depend on the caller.
        let library = unsafe { Library::new(path) }.map_err(|e| e.to_string())?;
        tracing::info!(target: "gr_binding::ffi", "Loaded {} from {}", name, path.display());
        Ok(Self {
            name: name.to_string(),
            path: path.to_path_buf(),
            library,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Looks up `prefix` + `name` and copies out the function pointer.
    ///
    /// # Safety
    ///
    /// `T` must be the exact function pointer type of the exported symbol,
    /// and the pointer must not be called after this library is dropped.
    pub(crate) unsafe fn symbol<T: Copy>(&self, prefix: &str, name: &str) -> BindingResult<T> {
        let symbol = format!("{}{}", prefix, name);
        let mut raw = symbol.clone().into_bytes();
        raw.push(0);
        let resolved = self.library.get::<T>(&raw).map_err(|e| {
            tracing::warn!(
                target: "gr_binding::ffi",
                "{} does not export {}",
                self.name,
                symbol
            );
            BindingError::Symbol {
                library: self.name.clone(),
                symbol,
                reason: e.to_string(),
            }
        })?;
        Ok(*resolved)
    }
}

fn is_bare_name(path: &Path) -> bool {
    path.parent().map_or(true, |parent| parent.as_os_str().is_empty())
}
