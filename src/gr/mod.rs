//! GR (2-D) adapter
//!
//! [`Gr`] is the safe surface over [`GrNative`]: each method marshals its
//! arguments, calls exactly one `gr_*` entry point and unmarshals any output
//! parameters. Methods are grouped by concern:
//!
//! - this module: handle construction, GKS / workstation lifecycle, queries
//! - [`primitives`]: drawing operations (arrays, grids, text, shapes, axes)
//! - [`attributes`]: primitive attribute setters
//! - [`transform`]: normalization transformations and coordinate conversion
//! - [`segments`]: segments, print, graphics output and selection
//!
//! No locking happens here. The native library keeps one implicit global
//! state, so callers that share a [`Gr`] across threads serialise the calls
//! themselves.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::config::{BindingConfig, LibraryConfig};
use crate::error::BindingResult;
use crate::ffi::{GrNative, LoadedGr};
use crate::marshal::encode_text;

mod attributes;
mod primitives;
mod segments;
mod transform;

/// Result of [`Gr::inqdspsize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySize {
    /// Physical width in metres
    pub mwidth: f64,
    /// Physical height in metres
    pub mheight: f64,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl DisplaySize {
    /// `[mwidth, mheight, width, height]`
    pub fn to_array(self) -> [f64; 4] {
        [
            self.mwidth,
            self.mheight,
            f64::from(self.width),
            f64::from(self.height),
        ]
    }
}

/// Handle to the GR library.
///
/// Cheap to clone: clones share the same native backend.
#[derive(Clone)]
pub struct Gr {
    native: Arc<dyn GrNative>,
}

impl fmt::Debug for Gr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gr").finish_non_exhaustive()
    }
}

static GLOBAL: OnceLock<Gr> = OnceLock::new();

/// Process-wide GR handle.
///
/// Loaded on first use from [`BindingConfig::load_or_default`] and kept for
/// the rest of the process.
pub fn global() -> BindingResult<&'static Gr> {
    if let Some(gr) = GLOBAL.get() {
        return Ok(gr);
    }
    let config = BindingConfig::load_or_default();
    let gr = Gr::load(&config.gr)?;
    Ok(GLOBAL.get_or_init(|| gr))
}

impl Gr {
    /// Loads `libGR` as described by `config`.
    pub fn load(config: &LibraryConfig) -> BindingResult<Self> {
        let library = LoadedGr::load(config)?;
        Ok(Self::with_backend(Arc::new(library)))
    }

    pub fn with_backend(native: Arc<dyn GrNative>) -> Self {
        Self { native }
    }

    pub fn native(&self) -> &dyn GrNative {
        self.native.as_ref()
    }

    pub fn opengks(&self) {
        self.native.opengks();
    }

    pub fn closegks(&self) {
        self.native.closegks();
    }

    pub fn emergencyclosegks(&self) {
        self.native.emergencyclosegks();
    }

    pub fn updategks(&self) {
        self.native.updategks();
    }

    pub fn openws(&self, workstation_id: i32, connection: &str, ws_type: i32) -> BindingResult<()> {
        let connection = encode_text(connection)?;
        self.native.openws(workstation_id, &connection, ws_type);
        Ok(())
    }

    pub fn closews(&self, workstation_id: i32) {
        self.native.closews(workstation_id);
    }

    pub fn activatews(&self, workstation_id: i32) {
        self.native.activatews(workstation_id);
    }

    pub fn deactivatews(&self, workstation_id: i32) {
        self.native.deactivatews(workstation_id);
    }

    pub fn clearws(&self) {
        self.native.clearws();
    }

    pub fn updatews(&self) {
        self.native.updatews();
    }

    pub fn inqdspsize(&self) -> DisplaySize {
        let (mwidth, mheight, width, height) = self.native.inqdspsize();
        DisplaySize {
            mwidth: f64::from(mwidth),
            mheight: f64::from(mheight),
            width,
            height,
        }
    }

    /// `[xmin, xmax, ymin, ymax]` of the current window
    pub fn inqwindow(&self) -> [f64; 4] {
        self.native.inqwindow().map(f64::from)
    }

    /// `[zmin, zmax, rotation, tilt]`
    pub fn inqspace(&self) -> [f64; 4] {
        let (zmin, zmax, rotation, tilt) = self.native.inqspace();
        [
            f64::from(zmin),
            f64::from(zmax),
            f64::from(rotation),
            f64::from(tilt),
        ]
    }

    pub fn inqscale(&self) -> i32 {
        self.native.inqscale()
    }

    /// Corner coordinates `(tbx, tby)` of the text extent box.
    pub fn inqtextext(&self, x: f64, y: f64, string: &str) -> BindingResult<([f64; 4], [f64; 4])> {
        let string = encode_text(string)?;
        let (tbx, tby) = self.native.inqtextext(x as f32, y as f32, &string);
        Ok((tbx.map(f64::from), tby.map(f64::from)))
    }

    /// `[xmin, xmax, ymin, ymax]` of everything drawn since the last clear
    pub fn inqbbox(&self) -> [f64; 4] {
        self.native.inqbbox().map(f64::from)
    }

    pub fn tick(&self, amin: f64, amax: f64) -> f64 {
        f64::from(self.native.tick(amin as f32, amax as f32))
    }

    /// `[amin, amax]` widened to round tick values
    pub fn adjustrange(&self, amin: f64, amax: f64) -> [f64; 2] {
        let (amin, amax) = self.native.adjustrange(amin as f32, amax as f32);
        [f64::from(amin), f64::from(amax)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::{NativeArg, QueryReplies, RecordingBackend};

    fn recording() -> (Gr, Arc<RecordingBackend>) {
        let backend = Arc::new(RecordingBackend::new());
        (Gr::with_backend(backend.clone()), backend)
    }

    #[test]
    fn test_inqdspsize_order() {
        let backend = Arc::new(RecordingBackend::with_replies(QueryReplies {
            dspsize: (0.5, 0.25, 1280, 640),
            ..Default::default()
        }));
        let gr = Gr::with_backend(backend.clone());

        let size = gr.inqdspsize();
        assert_eq!(size.to_array(), [0.5, 0.25, 1280.0, 640.0]);
        assert_eq!(backend.symbols(), vec!["gr_inqdspsize"]);
    }

    #[test]
    fn test_inqspace_order() {
        let backend = Arc::new(RecordingBackend::with_replies(QueryReplies {
            space: (-1.0, 2.0, 30, 60),
            ..Default::default()
        }));
        let gr = Gr::with_backend(backend);
        assert_eq!(gr.inqspace(), [-1.0, 2.0, 30.0, 60.0]);
    }

    #[test]
    fn test_openws_encodes_connection() {
        let (gr, backend) = recording();
        gr.openws(1, "plot.pdf", 101).unwrap();

        let call = backend.last_call().unwrap();
        assert_eq!(call.symbol, "gr_openws");
        assert_eq!(call.args[0], NativeArg::Int(1));
        assert_eq!(call.args[1].as_text(), Some(&b"plot.pdf\0"[..]));
        assert_eq!(call.args[2], NativeArg::Int(101));
    }

    #[test]
    fn test_encoding_failure_skips_native_call() {
        let (gr, backend) = recording();
        assert!(gr.inqtextext(0.5, 0.5, "\u{2192}").is_err());
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_lifecycle_symbols() {
        let (gr, backend) = recording();
        gr.opengks();
        gr.activatews(1);
        gr.clearws();
        gr.updatews();
        gr.deactivatews(1);
        gr.closews(1);
        gr.closegks();
        assert_eq!(
            backend.symbols(),
            vec![
                "gr_opengks",
                "gr_activatews",
                "gr_clearws",
                "gr_updatews",
                "gr_deactivatews",
                "gr_closews",
                "gr_closegks",
            ]
        );
    }
}
