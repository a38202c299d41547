use std::sync::Arc;

use gr_binding::ffi::{NativeArg, RecordingBackend};
use gr_binding::{scripting, BindingAdapter, BindingError, Gr, Gr3, JsBindingAdapter, ScriptValue};

fn adapter() -> (JsBindingAdapter, Arc<RecordingBackend>) {
    let backend = Arc::new(RecordingBackend::new());
    let api = scripting::standard_api(
        Gr::with_backend(backend.clone()),
        Some(Gr3::with_backend(backend.clone())),
    );
    (JsBindingAdapter::new(api).unwrap(), backend)
}

#[test]
fn plot_script_reaches_native_layer() {
    let (js, backend) = adapter();
    js.run_script(
        r#"
        gr.setviewport(0.1, 0.95, 0.1, 0.95);
        gr.setwindow(-1, 1, -1, 1);
        gr.setlinetype(gr.LINETYPE_DASHED);
        const x = new Float64Array([-1, 0, 1]);
        gr.polyline(3, x, [0, 1, 0]);
        gr.updatews();
        "#,
    )
    .unwrap();

    assert_eq!(
        backend.symbols(),
        vec![
            "gr_setviewport",
            "gr_setwindow",
            "gr_setlinetype",
            "gr_polyline",
            "gr_updatews"
        ]
    );
    let calls = backend.calls();
    assert_eq!(calls[2].args, vec![NativeArg::Int(2)]);
    assert_eq!(calls[3].args[1], NativeArg::Floats(vec![-1.0, 0.0, 1.0]));
}

#[test]
fn queries_return_plain_values() {
    let (js, _) = adapter();
    assert_eq!(
        js.eval_value("gr.inqdspsize()[2]").unwrap(),
        ScriptValue::Int(1920)
    );
    assert_eq!(
        js.eval_value("gr.inqtextext(0.5, 0.5, 'abc').length").unwrap(),
        ScriptValue::Int(2)
    );
    assert_eq!(
        js.eval_value("gr3.getrenderpathstring()").unwrap(),
        ScriptValue::String("recording".to_string())
    );
}

#[test]
fn mesh_lifecycle_from_script() {
    let (js, backend) = adapter();
    js.run_script(
        r#"
        gr3.init([gr3.GR3_IA_FRAMEBUFFER_WIDTH, 256]);
        const tri = [0, 0, 0, 1, 0, 0, 0, 1, 0];
        const mesh = gr3.createmesh(3, tri, tri, tri);
        gr3.drawmesh(mesh, 1, [0, 0, 0], [0, 0, 1], [0, 1, 0], [1, 1, 1], [1, 1, 1]);
        gr3.deletemesh(mesh);
        "#,
    )
    .unwrap();

    let calls = backend.calls();
    assert_eq!(calls[0].symbol, "gr3_init");
    assert_eq!(calls[0].args[0], NativeArg::Ints(vec![1, 256, 0]));
    assert_eq!(calls[2].symbol, "gr3_drawmesh");
    assert_eq!(calls[2].args[0], NativeArg::Int(1));
    assert_eq!(calls[3].args, vec![NativeArg::Int(1)]);
}

#[test]
fn native_status_becomes_js_error() {
    let (js, backend) = adapter();
    backend.fail_with("gr3_export", 8);
    let message = js
        .eval_value(
            r#"(() => {
                try { gr3.export("scene.abc", 100, 100); return "exported"; }
                catch (e) { return e.message; }
            })()"#,
        )
        .unwrap();
    assert_eq!(
        message,
        ScriptValue::String(
            "gr3_export failed: GR3_ERROR_UNKNOWN_FILE_EXTENSION (code 8)".to_string()
        )
    );
}

#[test]
fn setlightdirection_accepts_null_or_three_numbers() {
    let (js, backend) = adapter();
    js.run_script("gr3.setlightdirection(0, 0, 1); gr3.setlightdirection(null);")
        .unwrap();
    assert_eq!(
        backend.symbols(),
        vec!["gr3_setlightdirection", "gr3_setlightdirection"]
    );

    backend.clear_calls();
    match js.run_script("gr3.setlightdirection(1, 2);") {
        Err(BindingError::Script(message)) => {
            assert!(message.contains("takes exactly 1 or exactly 3 arguments (2 given)"))
        }
        other => panic!("Expected script error, got {:?}", other),
    }
    assert!(js.run_script("gr3.setlightdirection(5);").is_err());
    assert!(backend.calls().is_empty());
}

#[test]
fn short_array_is_an_error_not_a_crash() {
    let (js, backend) = adapter();
    let result = js.run_script("gr.polyline(5, [0, 1], [0, 1]);");
    assert!(matches!(result, Err(BindingError::Script(_))));
    assert!(backend.calls().is_empty());

    // the context is still usable afterwards
    js.run_script("gr.updatews();").unwrap();
    assert_eq!(backend.symbols(), vec!["gr_updatews"]);
}

#[test]
fn nan_and_infinity_reach_native_layer() {
    let (js, backend) = adapter();
    js.run_script(
        r#"
        gr.polyline(3, [0, NaN, 1], new Float64Array([0, 1, 0]));
        gr.setwindow(0, Infinity, -Infinity, 1);
        "#,
    )
    .unwrap();

    assert_eq!(backend.symbols(), vec!["gr_polyline", "gr_setwindow"]);
    let calls = backend.calls();
    let x = calls[0].args[1].as_floats().unwrap();
    assert_eq!(x.len(), 3);
    assert_eq!(x[0], 0.0);
    assert!(x[1].is_nan());
    assert_eq!(x[2], 1.0);
    assert_eq!(
        calls[1].args,
        vec![
            NativeArg::Float(0.0),
            NativeArg::Float(f32::INFINITY),
            NativeArg::Float(f32::NEG_INFINITY),
            NativeArg::Float(1.0),
        ]
    );
}

#[test]
fn run_file_reads_script() -> anyhow::Result<()> {
    let (js, backend) = adapter();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("plot.js");
    std::fs::write(&path, "gr.clearws(); console.log('cleared', 1);")?;

    js.run_file(&path)?;
    assert_eq!(backend.symbols(), vec!["gr_clearws"]);

    let missing = dir.path().join("missing.js");
    assert!(matches!(js.run_file(&missing), Err(BindingError::Io { .. })));
    Ok(())
}
