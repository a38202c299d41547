//! GR3 script bindings
//!
//! Meshes cross into scripts as their integer id. Operations whose native
//! status is checked raise the symbolic GR3 error name.

use super::api::ScriptApi;
use super::gr_bindings::bind;
use super::value::{Args, ScriptValue};
use crate::error::BindingError;
use crate::gr3::{self, Gr3, MeshHandle};

/// Registers the GR3 operations and the GR3 constant namespace.
pub fn register_gr3(api: &mut ScriptApi, gr3: Gr3) {
    register_scene(api, &gr3);
    register_meshes(api, &gr3);
    register_output(api, &gr3);
    register_light_direction(api, &gr3);

    api.register_function("gr3.geterrorstring", |values: &[ScriptValue]| {
        let args = Args::new("gr3.geterrorstring", values, 1)?;
        Ok(ScriptValue::from(gr3::error_name(args.int(0)?).to_string()))
    });
    api.register_constants("gr3", gr3::constants_table());
    tracing::debug!(target: "scripting", "Registered GR3 bindings");
}

fn register_scene(api: &mut ScriptApi, gr3: &Gr3) {
    {
        let gr3 = gr3.clone();
        // the attribute list is optional
        api.register_function("gr3.init", move |values: &[ScriptValue]| {
            let attributes = match values.len() {
                0 => Vec::new(),
                1 => Args::new("gr3.init", values, 1)?.ints(0)?,
                n => {
                    return Err(BindingError::argument(format!(
                        "gr3.init() takes at most 1 argument ({} given)",
                        n
                    )))
                }
            };
            gr3.init(&attributes)?;
            Ok(ScriptValue::Null)
        });
    }
    bind!(api, gr3, "gr3.terminate", || gr3.terminate());
    bind!(api, gr3, "gr3.clear", || gr3.clear()?);
    bind!(api, gr3, "gr3.setbackgroundcolor", 4, |a| {
        gr3.setbackgroundcolor(a.float(0)?, a.float(1)?, a.float(2)?, a.float(3)?)
    });
    bind!(api, gr3, "gr3.cameralookat", 9, |a| {
        gr3.cameralookat(
            a.float(0)?,
            a.float(1)?,
            a.float(2)?,
            a.float(3)?,
            a.float(4)?,
            a.float(5)?,
            a.float(6)?,
            a.float(7)?,
            a.float(8)?,
        )
    });
    bind!(api, gr3, "gr3.setcameraprojectionparameters", 3, |a| {
        gr3.setcameraprojectionparameters(a.float(0)?, a.float(1)?, a.float(2)?)?
    });
    bind!(api, gr3, "gr3.setquality", 1, |a| gr3.setquality(a.int(0)?)?);
}

fn register_meshes(api: &mut ScriptApi, gr3: &Gr3) {
    bind!(api, gr3, "gr3.createmesh", 4, |a| {
        gr3.createmesh(a.count(0)?, &a.floats(1)?, &a.floats(2)?, &a.floats(3)?)?
            .id()
    });
    bind!(api, gr3, "gr3.drawmesh", 7, |a| {
        gr3.drawmesh(
            MeshHandle::from_raw(a.int(0)?),
            a.count(1)?,
            &a.floats(2)?,
            &a.floats(3)?,
            &a.floats(4)?,
            &a.floats(5)?,
            &a.floats(6)?,
        )?
    });
    bind!(api, gr3, "gr3.deletemesh", 1, |a| {
        gr3.deletemesh(MeshHandle::from_raw(a.int(0)?))
    });
    bind!(api, gr3, "gr3.drawcylindermesh", 6, |a| {
        gr3.drawcylindermesh(
            a.count(0)?,
            &a.floats(1)?,
            &a.floats(2)?,
            &a.floats(3)?,
            &a.floats(4)?,
            &a.floats(5)?,
        )?
    });
    bind!(api, gr3, "gr3.drawconemesh", 6, |a| {
        gr3.drawconemesh(
            a.count(0)?,
            &a.floats(1)?,
            &a.floats(2)?,
            &a.floats(3)?,
            &a.floats(4)?,
            &a.floats(5)?,
        )?
    });
    bind!(api, gr3, "gr3.drawspheremesh", 4, |a| {
        gr3.drawspheremesh(a.count(0)?, &a.floats(1)?, &a.floats(2)?, &a.floats(3)?)?
    });
}

fn register_output(api: &mut ScriptApi, gr3: &Gr3) {
    bind!(api, gr3, "gr3.renderdirect", 2, |a| gr3.renderdirect(a.int(0)?, a.int(1)?));
    bind!(api, gr3, "gr3.drawscene", 6, |a| {
        gr3.drawscene(
            a.float(0)?,
            a.float(1)?,
            a.float(2)?,
            a.float(3)?,
            a.int(4)?,
            a.int(5)?,
        )?
    });
    bind!(api, gr3, "gr3.getimage", 3, |a| {
        gr3.getimage(a.count(0)?, a.count(1)?, a.bool(2)?)?
    });
    bind!(api, gr3, "gr3.export", 3, |a| {
        gr3.export(a.string(0)?, a.int(1)?, a.int(2)?)?
    });
    bind!(api, gr3, "gr3.getrenderpathstring", || gr3.getrenderpathstring());
}

/// `setlightdirection(x, y, z)` fixes the light, `setlightdirection(null)`
/// returns to camera lighting.
fn register_light_direction(api: &mut ScriptApi, gr3: &Gr3) {
    let gr3 = gr3.clone();
    api.register_function("gr3.setlightdirection", move |values: &[ScriptValue]| {
        match values {
            [ScriptValue::Null] => gr3.clear_light_direction(),
            [_] => {
                return Err(BindingError::argument(
                    "gr3.setlightdirection(): if called with 1 argument, it must be null",
                ))
            }
            [_, _, _] => {
                let args = Args::new("gr3.setlightdirection", values, 3)?;
                gr3.set_light_direction(args.float(0)?, args.float(1)?, args.float(2)?);
            }
            _ => {
                return Err(BindingError::argument(format!(
                    "gr3.setlightdirection() takes exactly 1 or exactly 3 arguments ({} given)",
                    values.len()
                )))
            }
        }
        Ok(ScriptValue::Null)
    });
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::ffi::{NativeArg, RecordingBackend};

    fn api() -> (ScriptApi, Arc<RecordingBackend>) {
        let backend = Arc::new(RecordingBackend::new());
        let mut api = ScriptApi::new();
        register_gr3(&mut api, Gr3::with_backend(backend.clone()));
        (api, backend)
    }

    fn floats(values: &[f64]) -> ScriptValue {
        ScriptValue::Array(values.iter().copied().map(ScriptValue::Float).collect())
    }

    #[test]
    fn test_init_without_attributes() {
        let (api, backend) = api();
        api.call("gr3.init", &[]).unwrap();
        let call = backend.last_call().unwrap();
        assert_eq!(call.symbol, "gr3_init");
        assert_eq!(call.args[0], NativeArg::Ints(vec![0]));
    }

    #[test]
    fn test_createmesh_returns_id() {
        let (api, _) = api();
        let triangle = floats(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        let id = api
            .call(
                "gr3.createmesh",
                &[ScriptValue::Int(3), triangle.clone(), triangle.clone(), triangle],
            )
            .unwrap();
        assert_eq!(id, ScriptValue::Int(1));
    }

    #[test]
    fn test_failed_status_carries_error_name() {
        let (api, backend) = api();
        backend.fail_with("gr3_export", 8);
        let err = api
            .call(
                "gr3.export",
                &[
                    ScriptValue::String("scene.xyz".to_string()),
                    ScriptValue::Int(100),
                    ScriptValue::Int(100),
                ],
            )
            .unwrap_err();
        assert!(err.to_string().contains("GR3_ERROR_UNKNOWN_FILE_EXTENSION"));
    }

    #[test]
    fn test_getimage_returns_bytes() {
        let (api, _) = api();
        let value = api
            .call(
                "gr3.getimage",
                &[ScriptValue::Int(2), ScriptValue::Int(1), ScriptValue::Bool(false)],
            )
            .unwrap();
        match value {
            ScriptValue::Array(bytes) => assert_eq!(bytes.len(), 6),
            other => panic!("Expected array, got {:?}", other),
        }
    }

    #[test]
    fn test_light_direction_shapes() {
        let (api, backend) = api();

        api.call(
            "gr3.setlightdirection",
            &[ScriptValue::Float(1.0), ScriptValue::Int(0), ScriptValue::Float(-1.0)],
        )
        .unwrap();
        let call = backend.last_call().unwrap();
        assert_eq!(
            call.args,
            vec![NativeArg::Float(1.0), NativeArg::Float(0.0), NativeArg::Float(-1.0)]
        );

        api.call("gr3.setlightdirection", &[ScriptValue::Null]).unwrap();
        assert_eq!(
            backend.last_call().unwrap().args,
            vec![NativeArg::Float(0.0); 3]
        );

        backend.clear_calls();
        let err = api
            .call("gr3.setlightdirection", &[ScriptValue::Int(1)])
            .unwrap_err();
        assert!(matches!(err, BindingError::ArgumentShape(_)));

        let err = api
            .call(
                "gr3.setlightdirection",
                &[ScriptValue::Float(1.0), ScriptValue::Float(0.0)],
            )
            .unwrap_err();
        assert!(err.to_string().contains("(2 given)"));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_geterrorstring() {
        let (api, backend) = api();
        let value = api.call("gr3.geterrorstring", &[ScriptValue::Int(5)]).unwrap();
        assert_eq!(value, ScriptValue::String("GR3_ERROR_OUT_OF_MEM".to_string()));
        let value = api.call("gr3.geterrorstring", &[ScriptValue::Int(99)]).unwrap();
        assert_eq!(value, ScriptValue::String("GR3_ERROR_UNKNOWN".to_string()));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_constants_registered() {
        let (api, _) = api();
        assert_eq!(api.constant("gr3", "GR3_ERROR_NONE"), Some(0));
        assert!(api.function_names().iter().all(|name| name.starts_with("gr3.")));
    }
}
