//! GR3 log callback
//!
//! The native library keeps one plain function pointer. It always points at
//! [`log_trampoline`], which decodes the message and hands it to the closure
//! currently stored in a process-wide slot. Registering again replaces the
//! closure; nothing unregisters it implicitly.

use std::ffi::{c_char, CStr};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, PoisonError, RwLock};

use crate::ffi::Gr3Native;
use crate::marshal::decode_text;

/// Callback invoked once per native log event.
pub type LogCallback = Arc<dyn Fn(&str) + Send + Sync>;

static LOG_CALLBACK: RwLock<Option<LogCallback>> = RwLock::new(None);

/// Stores `callback` for the rest of the process and points the native
/// library at the trampoline.
pub(crate) fn install(native: &dyn Gr3Native, callback: LogCallback) {
    *LOG_CALLBACK
        .write()
        .unwrap_or_else(PoisonError::into_inner) = Some(callback);
    native.setlogcallback(Some(log_trampoline));
    tracing::debug!(target: "gr3", "Log callback registered");
}

pub(crate) fn is_registered() -> bool {
    LOG_CALLBACK
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// Delivers `message` to the registered callback, if any.
pub(crate) fn emit(message: &str) {
    // clone out so the callback runs without holding the lock
    let callback = LOG_CALLBACK
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    if let Some(callback) = callback {
        callback(message);
    }
}

unsafe extern "C" fn log_trampoline(message: *const c_char) {
    if message.is_null() {
        return;
    }
    let message = decode_text(CStr::from_ptr(message).to_bytes());
    // a panic must not unwind into C
    let result = panic::catch_unwind(AssertUnwindSafe(|| emit(&message)));
    if result.is_err() {
        tracing::error!(target: "gr3", "Log callback panicked");
    }
}
