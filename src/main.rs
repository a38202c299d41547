//! `grscript` - runs a JavaScript file against GR/GR3
//!
//! ```text
//! grscript [--config <file>] [--dry-run] <script.js>
//! ```
//!
//! `--dry-run` replaces both native libraries with an in-process recorder
//! and prints the recorded calls instead of drawing.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use gr_binding::ffi::RecordingBackend;
use gr_binding::{
    logging, scripting, BindingAdapter, BindingConfig, BindingResult, Gr, Gr3, JsBindingAdapter,
};

struct Options {
    config: Option<PathBuf>,
    dry_run: bool,
    script: PathBuf,
}

fn parse_args() -> Result<Options, String> {
    let mut config = None;
    let mut dry_run = false;
    let mut script = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dry-run" => dry_run = true,
            "--config" => {
                let path = args.next().ok_or("--config needs a file argument")?;
                config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Err(String::new()),
            _ if arg.starts_with('-') => return Err(format!("unknown option {}", arg)),
            _ if script.is_none() => script = Some(PathBuf::from(arg)),
            _ => return Err(format!("unexpected argument {}", arg)),
        }
    }

    Ok(Options {
        config,
        dry_run,
        script: script.ok_or("missing script path")?,
    })
}

fn load_config(path: Option<&PathBuf>) -> Result<BindingConfig, String> {
    let Some(path) = path else {
        return BindingConfig::try_load().map_err(|e| e.to_string());
    };
    let mut config =
        BindingConfig::from_file(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    config.apply_env_overrides();
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn run(options: &Options, config: &BindingConfig) -> BindingResult<()> {
    let recorder = options.dry_run.then(|| Arc::new(RecordingBackend::new()));

    let (gr, gr3) = match &recorder {
        Some(recorder) => (
            Gr::with_backend(recorder.clone()),
            Some(Gr3::with_backend(recorder.clone())),
        ),
        None => {
            let gr = Gr::load(&config.gr)?;
            let gr3 = match Gr3::load(&config.gr3) {
                Ok(gr3) => Some(gr3),
                Err(e) => {
                    tracing::warn!("GR3 unavailable, gr3.* functions are disabled: {}", e);
                    None
                }
            };
            (gr, gr3)
        }
    };

    if let Some(gr3) = &gr3 {
        if config.logging.forward_gr3_log {
            gr3.log_to_tracing();
        }
    }

    let adapter = JsBindingAdapter::new(scripting::standard_api(gr, gr3))?;
    adapter.run_file(&options.script)?;

    if let Some(recorder) = recorder {
        for call in recorder.calls() {
            println!("{}{:?}", call.symbol, call.args);
        }
    }
    Ok(())
}

fn main() {
    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            if !message.is_empty() {
                eprintln!("grscript: {}", message);
            }
            eprintln!("usage: grscript [--config <file>] [--dry-run] <script.js>");
            process::exit(2);
        }
    };

    let config = match load_config(options.config.as_ref()) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("grscript: invalid configuration: {}", message);
            process::exit(2);
        }
    };
    logging::init(&config.logging);

    if let Err(e) = run(&options, &config) {
        tracing::error!("{}", e);
        eprintln!("grscript: {}", e);
        process::exit(1);
    }
}
