use std::sync::Arc;

use gr_binding::ffi::RecordingBackend;
use gr_binding::gr3::{self, Gr3ErrorCode, Gr3Quality};
use gr_binding::{BindingError, BindingResult, Gr3};

fn recording() -> (Gr3, Arc<RecordingBackend>) {
    let backend = Arc::new(RecordingBackend::new());
    (Gr3::with_backend(backend.clone()), backend)
}

fn failed_with(result: BindingResult<()>) -> (&'static str, &'static str) {
    match result {
        Err(BindingError::Gr3 { operation, error }) => (operation, error.name()),
        other => panic!("Expected GR3 error, got {:?}", other),
    }
}

#[test]
fn every_checked_operation_reports_its_status() {
    let (gr3, backend) = recording();
    let cases: Vec<(&'static str, i32, Box<dyn Fn(&Gr3) -> BindingResult<()>>)> = vec![
        ("gr3_init", 3, Box::new(|g: &Gr3| g.init(&[]))),
        ("gr3_clear", 6, Box::new(|g: &Gr3| g.clear())),
        (
            "gr3_createmesh",
            5,
            Box::new(|g: &Gr3| g.createmesh(1, &[0.0; 3], &[0.0; 3], &[0.0; 3]).map(drop)),
        ),
        (
            "gr3_setcameraprojectionparameters",
            1,
            Box::new(|g: &Gr3| g.setcameraprojectionparameters(45.0, 0.1, 100.0)),
        ),
        (
            "gr3_drawscene",
            7,
            Box::new(|g: &Gr3| g.drawscene(0.0, 1.0, 0.0, 1.0, 500, 500)),
        ),
        ("gr3_setquality", 1, Box::new(|g: &Gr3| g.setquality(0x100))),
        ("gr3_getimage", 4, Box::new(|g: &Gr3| g.getimage(2, 2, true).map(drop))),
        ("gr3_export", 8, Box::new(|g: &Gr3| g.export("scene.unknown", 10, 10))),
    ];

    for (symbol, code, operation) in cases {
        backend.fail_with(symbol, code);
        let (reported, name) = failed_with(operation(&gr3));
        assert_eq!(reported, symbol);
        assert_eq!(Some(name), Gr3ErrorCode::from_code(code).map(Gr3ErrorCode::symbol));
    }
}

#[test]
fn unmapped_code_is_unknown() {
    let (gr3, backend) = recording();
    backend.fail_with("gr3_setquality", 1234);
    let (_, name) = failed_with(gr3.setquality_kind(Gr3Quality::Povray2xSsaa));
    assert_eq!(name, "GR3_ERROR_UNKNOWN");
    assert_eq!(gr3::error_name(1234), "GR3_ERROR_UNKNOWN");
}

#[test]
fn failed_createmesh_yields_no_handle() {
    let (gr3, backend) = recording();
    let mesh = gr3.createmesh(1, &[0.0; 3], &[0.0; 3], &[1.0; 3]).unwrap();
    assert_eq!(mesh.id(), 1);

    backend.fail_with("gr3_createmesh", 5);
    let err = gr3
        .createmesh(1, &[0.0; 3], &[0.0; 3], &[1.0; 3])
        .unwrap_err();
    assert_eq!(err.to_string(), "gr3_createmesh failed: GR3_ERROR_OUT_OF_MEM (code 5)");
}

#[test]
fn getimage_sizes_buffer_by_alpha() {
    let (gr3, _) = recording();
    assert_eq!(gr3.getimage(4, 3, true).unwrap().len(), 48);
    assert_eq!(gr3.getimage(4, 3, false).unwrap().len(), 36);
}

#[test]
fn unchecked_calls_ignore_status() {
    let (gr3, backend) = recording();
    backend.fail_with("gr3_terminate", 3);
    gr3.terminate();
    gr3.renderdirect(100, 100);
    assert_eq!(backend.symbols(), vec!["gr3_terminate", "gr3_renderdirect"]);
}
