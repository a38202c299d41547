//! The log callback slot is process-wide, so everything touching it lives in
//! this single test.

use std::sync::{Arc, Mutex};

use gr_binding::ffi::{NativeArg, RecordingBackend};
use gr_binding::Gr3;

#[test]
fn log_callback_registration() {
    let backend = Arc::new(RecordingBackend::new());
    let gr3 = Gr3::with_backend(backend.clone());

    // nothing registered yet
    assert!(!backend.emit_log("dropped"));

    let first = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&first);
    gr3.set_log_callback(move |message| sink.lock().unwrap().push(message.to_string()));
    assert_eq!(
        backend.last_call().unwrap().args,
        vec![NativeArg::Callback(true)]
    );

    assert!(backend.emit_log("context created"));
    assert!(backend.emit_log("context created"));
    assert_eq!(
        *first.lock().unwrap(),
        vec!["context created".to_string(), "context created".to_string()]
    );

    // init announces the library before calling into it
    first.lock().unwrap().clear();
    gr3.init(&[]).unwrap();
    assert_eq!(
        *first.lock().unwrap(),
        vec!["Loaded dynamic library unknown.".to_string()]
    );

    let second = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&second);
    gr3.set_log_callback(move |message| sink.lock().unwrap().push(message.to_string()));

    assert!(backend.emit_log("after replace"));
    assert_eq!(first.lock().unwrap().len(), 1);
    assert_eq!(*second.lock().unwrap(), vec!["after replace".to_string()]);

    // a panicking callback does not unwind through the native caller
    gr3.set_log_callback(|_| panic!("callback failure"));
    assert!(backend.emit_log("boom"));
}
