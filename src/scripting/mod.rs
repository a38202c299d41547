//! 脚本接口层
//!
//! 把 [`Gr`](crate::gr::Gr) / [`Gr3`](crate::gr3::Gr3) 的操作按名称注册到
//! [`ScriptApi`]，供各语言适配器（见 [`crate::bindings`]）分发调用。

mod api;
mod gr3_bindings;
mod gr_bindings;
mod value;

pub use api::ScriptApi;
pub use gr3_bindings::register_gr3;
pub use gr_bindings::register_gr;
pub use value::{Args, ScriptValue};

use crate::gr::Gr;
use crate::gr3::Gr3;

/// GR和（可选的）GR3操作的完整脚本API
pub fn standard_api(gr: Gr, gr3: Option<Gr3>) -> ScriptApi {
    let mut api = ScriptApi::new();
    register_gr(&mut api, gr);
    if let Some(gr3) = gr3 {
        register_gr3(&mut api, gr3);
    }
    api
}
