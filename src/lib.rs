//! # gr_binding
//!
//! Runtime-loaded bindings for the GR (2-D) and GR3 (3-D) plotting libraries,
//! exposed to JavaScript through QuickJS.
//!
//! ## Layers
//!
//! - [`ffi`]: loads `libGR` / `libGR3` and binds their entry points
//! - [`marshal`]: converts script-side sequences and strings into native buffers
//! - [`gr`] / [`gr3`]: typed adapters, one method per native operation
//! - [`scripting`]: the name-keyed script API (`gr.polyline`, `gr3.init`, ...)
//! - [`bindings`]: language adapters hosting that API
//!
//! ### Example
//!
//! ```ignore
//! use gr_binding::{BindingConfig, Gr};
//!
//! let config = BindingConfig::load_or_default();
//! let gr = Gr::load(&config.gr)?;
//! gr.setviewport(0.1, 0.9, 0.1, 0.9);
//! gr.polyline(3, &[0.0, 0.5, 1.0], &[0.0, 1.0, 0.0]);
//! gr.updatews();
//! ```

#[macro_use]
mod macros;

/// Language adapters hosting the script API
pub mod bindings;
/// Configuration system
pub mod config;
/// GR enumerations and the script constant table
pub mod constants;
pub mod error;
/// Native library loading and symbol tables
pub mod ffi;
/// GR (2-D) adapter
pub mod gr;
/// GR3 (3-D) adapter
pub mod gr3;
pub mod logging;
pub mod marshal;
/// Script-facing API
pub mod scripting;

pub use bindings::{BindingAdapter, JsBindingAdapter};
pub use config::{BindingConfig, LibraryConfig};
pub use error::{BindingError, BindingResult, Gr3Error};
pub use gr::{DisplaySize, Gr};
pub use gr3::{Gr3, MeshHandle};
pub use scripting::{ScriptApi, ScriptValue};
