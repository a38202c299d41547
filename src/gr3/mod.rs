//! GR3 (3-D) adapter
//!
//! [`Gr3`] forwards to [`Gr3Native`] like [`crate::gr::Gr`] does for GR, with
//! one difference: the entry points that return a status code are checked,
//! and a non-zero code becomes [`BindingError::Gr3`] carrying the symbolic
//! error name.
//!
//! ```text
//! init ──> setquality ──> cameralookat ──> createmesh / drawmesh ──> getimage | export
//!                                             │
//!                                             └── drawscene (into the current GR viewport)
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::config::{BindingConfig, LibraryConfig};
use crate::error::{BindingError, BindingResult, Gr3Error};
use crate::ffi::{Gr3Native, LoadedGr3};
use crate::marshal::{decode_text, encode_text, float_array, native_count, scaled_len};

mod log;
mod types;

pub use log::LogCallback;
pub use types::{constants_table, Gr3ErrorCode, Gr3InitAttribute, Gr3Quality, MeshHandle};

/// Handle to the GR3 library.
#[derive(Clone)]
pub struct Gr3 {
    native: Arc<dyn Gr3Native>,
    library_path: Option<PathBuf>,
}

impl fmt::Debug for Gr3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gr3")
            .field("library_path", &self.library_path)
            .finish_non_exhaustive()
    }
}

static GLOBAL: OnceLock<Gr3> = OnceLock::new();

/// Process-wide GR3 handle, loaded on first use.
pub fn global() -> BindingResult<&'static Gr3> {
    if let Some(gr3) = GLOBAL.get() {
        return Ok(gr3);
    }
    let config = BindingConfig::load_or_default();
    let gr3 = Gr3::load(&config.gr3)?;
    Ok(GLOBAL.get_or_init(|| gr3))
}

/// Registers `callback` for native log events of the process-wide library.
pub fn set_log_callback<F>(callback: F) -> BindingResult<()>
where
    F: Fn(&str) + Send + Sync + 'static,
{
    global()?.set_log_callback(callback);
    Ok(())
}

/// Forwards native log events of the process-wide library to `tracing`.
pub fn log_to_tracing() -> BindingResult<()> {
    global()?.log_to_tracing();
    Ok(())
}

/// Symbolic name of a GR3 status code, `GR3_ERROR_UNKNOWN` if unmapped.
pub fn error_name(code: i32) -> &'static str {
    Gr3Error::new(code).name()
}

fn check(operation: &'static str, status: i32) -> BindingResult<()> {
    BindingError::check_status(operation, status)
}

impl Gr3 {
    pub fn load(config: &LibraryConfig) -> BindingResult<Self> {
        let library = LoadedGr3::load(config)?;
        let library_path = library.library().path().to_path_buf();
        Ok(Self {
            native: Arc::new(library),
            library_path: Some(library_path),
        })
    }

    pub fn with_backend(native: Arc<dyn Gr3Native>) -> Self {
        Self {
            native,
            library_path: None,
        }
    }

    pub fn native(&self) -> &dyn Gr3Native {
        self.native.as_ref()
    }

    /// Path the library was loaded from, if it came from disk.
    pub fn library_path(&self) -> Option<&Path> {
        self.library_path.as_deref()
    }

    /// Initialises GR3 with a flat `key, value, ...` attribute list;
    /// `GR3_IA_END_OF_LIST` is appended here.
    pub fn init(&self, attrib_list: &[i32]) -> BindingResult<()> {
        let mut list = attrib_list.to_vec();
        list.push(Gr3InitAttribute::EndOfList.code());

        if log::is_registered() {
            match &self.library_path {
                Some(path) => log::emit(&format!("Loaded dynamic library from {}", path.display())),
                None => log::emit("Loaded dynamic library unknown."),
            }
        }

        // the list is terminated above
        let status = unsafe { self.native.init(&list) };
        check("gr3_init", status)
    }

    pub fn init_with(&self, attributes: &[(Gr3InitAttribute, i32)]) -> BindingResult<()> {
        let list: Vec<i32> = attributes
            .iter()
            .flat_map(|&(key, value)| [key.code(), value])
            .collect();
        self.init(&list)
    }

    pub fn terminate(&self) {
        self.native.terminate();
    }

    /// Removes every mesh draw call from the scene.
    pub fn clear(&self) -> BindingResult<()> {
        check("gr3_clear", self.native.clear())
    }

    pub fn setbackgroundcolor(&self, red: f64, green: f64, blue: f64, alpha: f64) {
        self.native
            .setbackgroundcolor(red as f32, green as f32, blue as f32, alpha as f32);
    }

    /// Uploads a triangle mesh of `n` vertices.
    ///
    /// # Panics
    ///
    /// Panics if a sequence holds fewer than `3 * n` values. A `3 * n` that
    /// overflows is a [`BindingError::ArgumentShape`] instead.
    pub fn createmesh(
        &self,
        n: usize,
        vertices: &[f64],
        normals: &[f64],
        colors: &[f64],
    ) -> BindingResult<MeshHandle> {
        let len = scaled_len(n, 3)?;
        let vertices = float_array(len, vertices);
        let normals = float_array(len, normals);
        let colors = float_array(len, colors);
        // each buffer holds 3 * n elements
        let (status, mesh) =
            unsafe { self.native.createmesh(native_count(n), &vertices, &normals, &colors) };
        check("gr3_createmesh", status)?;
        Ok(MeshHandle(mesh))
    }

    /// Queues `n` instances of `mesh`.
    #[allow(clippy::too_many_arguments)]
    pub fn drawmesh(
        &self,
        mesh: MeshHandle,
        n: usize,
        positions: &[f64],
        directions: &[f64],
        ups: &[f64],
        colors: &[f64],
        scales: &[f64],
    ) -> BindingResult<()> {
        let len = scaled_len(n, 3)?;
        let positions = float_array(len, positions);
        let directions = float_array(len, directions);
        let ups = float_array(len, ups);
        let colors = float_array(len, colors);
        let scales = float_array(len, scales);
        unsafe {
            self.native.drawmesh(
                mesh.id(),
                native_count(n),
                &positions,
                &directions,
                &ups,
                &colors,
                &scales,
            )
        }
        Ok(())
    }

    pub fn deletemesh(&self, mesh: MeshHandle) {
        self.native.deletemesh(mesh.id());
    }

    /// Fixes the light direction instead of lighting from the camera.
    pub fn set_light_direction(&self, x: f64, y: f64, z: f64) {
        self.native.setlightdirection(x as f32, y as f32, z as f32);
    }

    /// Returns to lighting from the camera position.
    pub fn clear_light_direction(&self) {
        self.native.setlightdirection(0.0, 0.0, 0.0);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn cameralookat(
        &self,
        camera_x: f64,
        camera_y: f64,
        camera_z: f64,
        center_x: f64,
        center_y: f64,
        center_z: f64,
        up_x: f64,
        up_y: f64,
        up_z: f64,
    ) {
        self.native.cameralookat(
            camera_x as f32,
            camera_y as f32,
            camera_z as f32,
            center_x as f32,
            center_y as f32,
            center_z as f32,
            up_x as f32,
            up_y as f32,
            up_z as f32,
        );
    }

    pub fn setcameraprojectionparameters(&self, fovy: f64, znear: f64, zfar: f64) -> BindingResult<()> {
        let status = self
            .native
            .setcameraprojectionparameters(fovy as f32, znear as f32, zfar as f32);
        check("gr3_setcameraprojectionparameters", status)
    }

    pub fn renderdirect(&self, width: i32, height: i32) {
        self.native.renderdirect(width, height);
    }

    /// Renders the scene into the given rectangle of the current GR output.
    pub fn drawscene(
        &self,
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        width: i32,
        height: i32,
    ) -> BindingResult<()> {
        let status = self.native.drawscene(
            xmin as f32,
            xmax as f32,
            ymin as f32,
            ymax as f32,
            width,
            height,
        );
        check("gr3_drawscene", status)
    }

    pub fn setquality(&self, quality: i32) -> BindingResult<()> {
        check("gr3_setquality", self.native.setquality(quality))
    }

    pub fn setquality_kind(&self, quality: Gr3Quality) -> BindingResult<()> {
        self.setquality(quality.code())
    }

    /// Renders into a fresh pixel buffer, RGBA when `use_alpha` is set and
    /// RGB otherwise.
    pub fn getimage(&self, width: usize, height: usize, use_alpha: bool) -> BindingResult<Vec<u8>> {
        let bytes_per_pixel = if use_alpha { 4 } else { 3 };
        let len = scaled_len(width, height)
            .and_then(|pixels| scaled_len(pixels, bytes_per_pixel))?;
        let mut pixels = vec![0u8; len];
        let status = unsafe {
            self.native.getimage(
                native_count(width),
                native_count(height),
                use_alpha,
                &mut pixels,
            )
        };
        check("gr3_getimage", status)?;
        Ok(pixels)
    }

    /// Writes the scene to `path`; the format follows the extension.
    pub fn export(&self, path: &str, width: i32, height: i32) -> BindingResult<()> {
        let path = encode_text(path)?;
        check("gr3_export", self.native.export(&path, width, height))
    }

    pub fn getrenderpathstring(&self) -> String {
        decode_text(&self.native.getrenderpathstring())
    }

    /// `positions`, `directions` and `colors` hold `3 * n` values, `radii`
    /// and `lengths` hold `n`.
    #[allow(clippy::too_many_arguments)]
    pub fn drawcylindermesh(
        &self,
        n: usize,
        positions: &[f64],
        directions: &[f64],
        colors: &[f64],
        radii: &[f64],
        lengths: &[f64],
    ) -> BindingResult<()> {
        let len = scaled_len(n, 3)?;
        let positions = float_array(len, positions);
        let directions = float_array(len, directions);
        let colors = float_array(len, colors);
        let radii = float_array(n, radii);
        let lengths = float_array(n, lengths);
        unsafe {
            self.native.drawcylindermesh(
                native_count(n),
                &positions,
                &directions,
                &colors,
                &radii,
                &lengths,
            )
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn drawconemesh(
        &self,
        n: usize,
        positions: &[f64],
        directions: &[f64],
        colors: &[f64],
        radii: &[f64],
        lengths: &[f64],
    ) -> BindingResult<()> {
        let len = scaled_len(n, 3)?;
        let positions = float_array(len, positions);
        let directions = float_array(len, directions);
        let colors = float_array(len, colors);
        let radii = float_array(n, radii);
        let lengths = float_array(n, lengths);
        unsafe {
            self.native.drawconemesh(
                native_count(n),
                &positions,
                &directions,
                &colors,
                &radii,
                &lengths,
            )
        }
        Ok(())
    }

    pub fn drawspheremesh(
        &self,
        n: usize,
        positions: &[f64],
        colors: &[f64],
        radii: &[f64],
    ) -> BindingResult<()> {
        let len = scaled_len(n, 3)?;
        let positions = float_array(len, positions);
        let colors = float_array(len, colors);
        let radii = float_array(n, radii);
        unsafe {
            self.native
                .drawspheremesh(native_count(n), &positions, &colors, &radii)
        }
        Ok(())
    }

    /// Registers `callback` for native log events, replacing any earlier
    /// one. The registration lasts for the rest of the process.
    pub fn set_log_callback<F>(&self, callback: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        log::install(self.native.as_ref(), Arc::new(callback));
    }

    pub fn log_to_tracing(&self) {
        self.set_log_callback(|message| tracing::debug!(target: "gr3", "{}", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::{NativeArg, RecordingBackend};

    fn recording() -> (Gr3, Arc<RecordingBackend>) {
        let backend = Arc::new(RecordingBackend::new());
        (Gr3::with_backend(backend.clone()), backend)
    }

    #[test]
    fn test_init_terminates_attribute_list() {
        let (gr3, backend) = recording();
        gr3.init_with(&[
            (Gr3InitAttribute::FramebufferWidth, 512),
            (Gr3InitAttribute::FramebufferHeight, 256),
        ])
        .unwrap();

        let call = backend
            .calls()
            .into_iter()
            .find(|call| call.symbol == "gr3_init")
            .unwrap();
        assert_eq!(call.args[0].as_ints(), Some(&[1, 512, 2, 256, 0][..]));
    }

    #[test]
    fn test_init_failure_names_error() {
        let (gr3, backend) = recording();
        backend.fail_with("gr3_init", 3);
        match gr3.init(&[]) {
            Err(BindingError::Gr3 { operation, error }) => {
                assert_eq!(operation, "gr3_init");
                assert_eq!(error.code(), 3);
                assert_eq!(error.name(), "GR3_ERROR_INIT_FAILED");
            }
            other => panic!("Expected Gr3 error, got {:?}", other),
        }
    }

    #[test]
    fn test_unmapped_status_is_unknown() {
        let (gr3, backend) = recording();
        backend.fail_with("gr3_setquality", 99);
        let err = gr3.setquality_kind(Gr3Quality::PovrayNoSsaa).unwrap_err();
        assert!(err.to_string().contains("GR3_ERROR_UNKNOWN"));
        assert_eq!(error_name(99), "GR3_ERROR_UNKNOWN");
    }

    #[test]
    fn test_getimage_buffer_size() {
        let (gr3, backend) = recording();
        assert_eq!(gr3.getimage(4, 3, true).unwrap().len(), 48);
        assert_eq!(gr3.getimage(4, 3, false).unwrap().len(), 36);
        assert_eq!(
            backend.last_call().unwrap().args,
            vec![
                NativeArg::Int(4),
                NativeArg::Int(3),
                NativeArg::Int(0),
                NativeArg::OutBuffer(36),
            ]
        );
    }

    #[test]
    fn test_oversized_buffers_are_rejected() {
        let (gr3, backend) = recording();
        assert!(matches!(
            gr3.getimage(usize::MAX, 2, true),
            Err(BindingError::ArgumentShape(_))
        ));
        assert!(matches!(
            gr3.getimage(usize::MAX / 2, 1, false),
            Err(BindingError::ArgumentShape(_))
        ));
        let n = usize::MAX / 3 + 1;
        assert!(matches!(
            gr3.createmesh(n, &[], &[], &[]),
            Err(BindingError::ArgumentShape(_))
        ));
        assert!(gr3.drawspheremesh(n, &[], &[], &[]).is_err());
        assert!(gr3.drawconemesh(n, &[], &[], &[], &[], &[]).is_err());
        assert!(gr3.drawmesh(MeshHandle::from_raw(1), n, &[], &[], &[], &[], &[]).is_err());
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_getimage_failure() {
        let (gr3, backend) = recording();
        backend.fail_with("gr3_getimage", 6);
        let err = gr3.getimage(1, 1, true).unwrap_err();
        assert!(err.to_string().contains("GR3_ERROR_NOT_INITIALIZED"));
    }

    #[test]
    fn test_createmesh_returns_handle() {
        let (gr3, backend) = recording();
        let vertices = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let normals = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
        let colors = [1.0; 9];
        let mesh = gr3.createmesh(3, &vertices, &normals, &colors).unwrap();

        gr3.drawmesh(mesh, 1, &[0.0; 3], &[0.0, 0.0, 1.0], &[0.0, 1.0, 0.0], &[1.0; 3], &[1.0; 3])
            .unwrap();
        gr3.deletemesh(mesh);

        let calls = backend.calls();
        assert_eq!(calls[0].args[1].as_floats().map(<[f32]>::len), Some(9));
        assert_eq!(calls[1].args[0], NativeArg::Int(mesh.id()));
        assert_eq!(calls[2].args, vec![NativeArg::Int(mesh.id())]);
    }

    #[test]
    fn test_createmesh_failure() {
        let (gr3, backend) = recording();
        backend.fail_with("gr3_createmesh", 5);
        assert!(matches!(
            gr3.createmesh(0, &[], &[], &[]),
            Err(BindingError::Gr3 { operation: "gr3_createmesh", .. })
        ));
    }

    #[test]
    fn test_light_direction() {
        let (gr3, backend) = recording();
        gr3.set_light_direction(1.0, -2.0, 0.5);
        gr3.clear_light_direction();
        let calls = backend.calls();
        assert_eq!(
            calls[0].args,
            vec![NativeArg::Float(1.0), NativeArg::Float(-2.0), NativeArg::Float(0.5)]
        );
        assert_eq!(
            calls[1].args,
            vec![NativeArg::Float(0.0), NativeArg::Float(0.0), NativeArg::Float(0.0)]
        );
    }

    #[test]
    fn test_cylinder_mesh_sizes() {
        let (gr3, backend) = recording();
        gr3.drawcylindermesh(2, &[0.0; 6], &[1.0; 6], &[0.5; 6], &[0.1, 0.2], &[1.0, 2.0])
            .unwrap();
        let call = backend.last_call().unwrap();
        assert_eq!(call.args[3].as_floats().map(<[f32]>::len), Some(6));
        assert_eq!(call.args[4].as_floats(), Some(&[0.1f32, 0.2][..]));
    }

    #[test]
    fn test_export_encoding_error_skips_native_call() {
        let (gr3, backend) = recording();
        assert!(matches!(
            gr3.export("scène\u{2603}.png", 100, 100),
            Err(BindingError::Encoding { position: 5, .. })
        ));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_render_path_string() {
        let (gr3, _backend) = recording();
        assert_eq!(gr3.getrenderpathstring(), "recording");
    }
}
