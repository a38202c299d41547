//! Language binding layer
//!
//! Hosts the script API inside a scripting language. Adapters stay thin:
//! every call goes through the same JSON dispatch protocol into
//! [`ScriptApi`](crate::scripting::ScriptApi).
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  script: gr.polyline(3, x, y)│
//! └──────────────┬───────────────┘
//!                v
//! ┌──────────────────────────────┐
//! │  JsBindingAdapter (rquickjs) │
//! └──────────────┬───────────────┘
//!                v  name + JSON args
//! ┌──────────────────────────────┐
//! │  dispatch_json / ScriptApi   │
//! └──────────────┬───────────────┘
//!                v
//! ┌──────────────────────────────┐
//! │  Gr / Gr3 adapters ─> FFI    │
//! └──────────────────────────────┘
//! ```

pub mod js;
pub mod protocol;

pub use js::JsBindingAdapter;
pub use protocol::{dispatch_json, BindingAdapter, DispatchReply};
