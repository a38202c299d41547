//! `libGR3` entry points

use std::ffi::{c_char, c_float, c_int, CStr};

use super::NativeLibrary;
use crate::config::LibraryConfig;
use crate::error::BindingResult;

/// Signature of the log function `gr3_setlogcallback` accepts.
pub type LogCallbackFn = unsafe extern "C" fn(*const c_char);

symbol_table! {
    /// Typed `gr3_*` entry points.
    pub(crate) struct Gr3Symbols {
        init: fn(*const c_int) -> c_int;
        terminate: fn();
        clear: fn() -> c_int;
        setbackgroundcolor: fn(c_float, c_float, c_float, c_float);
        createmesh: fn(*mut c_int, c_int, *const c_float, *const c_float, *const c_float) -> c_int;
        drawmesh: fn(
            c_int, c_int,
            *const c_float, *const c_float, *const c_float, *const c_float, *const c_float,
        );
        deletemesh: fn(c_int);
        setlightdirection: fn(c_float, c_float, c_float);
        cameralookat: fn(
            c_float, c_float, c_float,
            c_float, c_float, c_float,
            c_float, c_float, c_float,
        );
        setcameraprojectionparameters: fn(c_float, c_float, c_float) -> c_int;
        renderdirect: fn(c_int, c_int);
        drawscene: fn(c_float, c_float, c_float, c_float, c_int, c_int) -> c_int;
        setquality: fn(c_int) -> c_int;
        getimage: fn(c_int, c_int, c_int, *mut c_char) -> c_int;
        export: fn(*const c_char, c_int, c_int) -> c_int;
        setlogcallback: fn(Option<LogCallbackFn>);
        getrenderpathstring: fn() -> *const c_char;
        drawcylindermesh: fn(
            c_int,
            *const c_float, *const c_float, *const c_float, *const c_float, *const c_float,
        );
        drawconemesh: fn(
            c_int,
            *const c_float, *const c_float, *const c_float, *const c_float, *const c_float,
        );
        drawspheremesh: fn(c_int, *const c_float, *const c_float, *const c_float);
    }
}

/// The `libGR3` C surface. Status-returning entry points hand back the raw
/// code; mapping it to an error is left to the adapter.
pub trait Gr3Native: Send + Sync {
    /// # Safety
    /// `attrib_list` is terminated by `GR3_IA_END_OF_LIST`.
    unsafe fn init(&self, attrib_list: &[i32]) -> i32;
    fn terminate(&self);
    fn clear(&self) -> i32;
    fn setbackgroundcolor(&self, red: f32, green: f32, blue: f32, alpha: f32);
    /// Returns `(status, mesh)`.
    ///
    /// # Safety
    /// Each buffer holds at least `3 * n` elements.
    unsafe fn createmesh(&self, n: i32, vertices: &[f32], normals: &[f32], colors: &[f32]) -> (i32, i32);
    /// # Safety
    /// Each buffer holds at least `3 * n` elements.
    #[allow(clippy::too_many_arguments)]
    unsafe fn drawmesh(
        &self,
        mesh: i32,
        n: i32,
        positions: &[f32],
        directions: &[f32],
        ups: &[f32],
        colors: &[f32],
        scales: &[f32],
    );
    fn deletemesh(&self, mesh: i32);
    fn setlightdirection(&self, x: f32, y: f32, z: f32);
    #[allow(clippy::too_many_arguments)]
    fn cameralookat(
        &self,
        camera_x: f32,
        camera_y: f32,
        camera_z: f32,
        center_x: f32,
        center_y: f32,
        center_z: f32,
        up_x: f32,
        up_y: f32,
        up_z: f32,
    );
    fn setcameraprojectionparameters(&self, fovy: f32, znear: f32, zfar: f32) -> i32;
    fn renderdirect(&self, width: i32, height: i32);
    fn drawscene(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32, width: i32, height: i32) -> i32;
    fn setquality(&self, quality: i32) -> i32;
    /// # Safety
    /// `pixels` holds at least `width * height * (4 | 3)` bytes.
    unsafe fn getimage(&self, width: i32, height: i32, use_alpha: bool, pixels: &mut [u8]) -> i32;
    fn export(&self, filename: &CStr, width: i32, height: i32) -> i32;
    fn setlogcallback(&self, callback: Option<LogCallbackFn>);
    /// Raw bytes of the render path description, without terminator.
    fn getrenderpathstring(&self) -> Vec<u8>;
    /// # Safety
    /// `positions`, `directions` and `colors` hold `3 * n`, `radii` and
    /// `lengths` hold `n` elements.
    unsafe fn drawcylindermesh(
        &self,
        n: i32,
        positions: &[f32],
        directions: &[f32],
        colors: &[f32],
        radii: &[f32],
        lengths: &[f32],
    );
    /// # Safety
    /// Same layout as [`Gr3Native::drawcylindermesh`].
    unsafe fn drawconemesh(
        &self,
        n: i32,
        positions: &[f32],
        directions: &[f32],
        colors: &[f32],
        radii: &[f32],
        lengths: &[f32],
    );
    /// # Safety
    /// `positions` and `colors` hold `3 * n`, `radii` holds `n` elements.
    unsafe fn drawspheremesh(&self, n: i32, positions: &[f32], colors: &[f32], radii: &[f32]);
}

/// `libGR3` loaded with `libloading`.
pub struct LoadedGr3 {
    symbols: Gr3Symbols,
    library: NativeLibrary,
}

impl LoadedGr3 {
    pub fn load(config: &LibraryConfig) -> BindingResult<Self> {
        let library = NativeLibrary::open(config)?;
        // Gr3Symbols declares the signatures of gr3.h
        let symbols = unsafe { Gr3Symbols::resolve(&library, "gr3_")? };
        tracing::debug!(
            target: "gr_binding::ffi",
            "Resolved {} GR3 entry points",
            Gr3Symbols::SYMBOLS.len()
        );
        Ok(Self { symbols, library })
    }

    pub fn library(&self) -> &NativeLibrary {
        &self.library
    }
}

impl Gr3Native for LoadedGr3 {
    unsafe fn init(&self, attrib_list: &[i32]) -> i32 {
        (self.symbols.init)(attrib_list.as_ptr())
    }

    fn terminate(&self) {
        unsafe { (self.symbols.terminate)() }
    }

    fn clear(&self) -> i32 {
        unsafe { (self.symbols.clear)() }
    }

    fn setbackgroundcolor(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        unsafe { (self.symbols.setbackgroundcolor)(red, green, blue, alpha) }
    }

    unsafe fn createmesh(&self, n: i32, vertices: &[f32], normals: &[f32], colors: &[f32]) -> (i32, i32) {
        let mut mesh = 0;
        let status = (self.symbols.createmesh)(
            &mut mesh,
            n,
            vertices.as_ptr(),
            normals.as_ptr(),
            colors.as_ptr(),
        );
        (status, mesh)
    }

    unsafe fn drawmesh(
        &self,
        mesh: i32,
        n: i32,
        positions: &[f32],
        directions: &[f32],
        ups: &[f32],
        colors: &[f32],
        scales: &[f32],
    ) {
        (self.symbols.drawmesh)(
            mesh,
            n,
            positions.as_ptr(),
            directions.as_ptr(),
            ups.as_ptr(),
            colors.as_ptr(),
            scales.as_ptr(),
        )
    }

    fn deletemesh(&self, mesh: i32) {
        unsafe { (self.symbols.deletemesh)(mesh) }
    }

    fn setlightdirection(&self, x: f32, y: f32, z: f32) {
        unsafe { (self.symbols.setlightdirection)(x, y, z) }
    }

    fn cameralookat(
        &self,
        camera_x: f32,
        camera_y: f32,
        camera_z: f32,
        center_x: f32,
        center_y: f32,
        center_z: f32,
        up_x: f32,
        up_y: f32,
        up_z: f32,
    ) {
        unsafe {
            (self.symbols.cameralookat)(
                camera_x, camera_y, camera_z, center_x, center_y, center_z, up_x, up_y, up_z,
            )
        }
    }

    fn setcameraprojectionparameters(&self, fovy: f32, znear: f32, zfar: f32) -> i32 {
        unsafe { (self.symbols.setcameraprojectionparameters)(fovy, znear, zfar) }
    }

    fn renderdirect(&self, width: i32, height: i32) {
        unsafe { (self.symbols.renderdirect)(width, height) }
    }

    fn drawscene(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32, width: i32, height: i32) -> i32 {
        unsafe { (self.symbols.drawscene)(xmin, xmax, ymin, ymax, width, height) }
    }

    fn setquality(&self, quality: i32) -> i32 {
        unsafe { (self.symbols.setquality)(quality) }
    }

    unsafe fn getimage(&self, width: i32, height: i32, use_alpha: bool, pixels: &mut [u8]) -> i32 {
        (self.symbols.getimage)(
            width,
            height,
            c_int::from(use_alpha),
            pixels.as_mut_ptr().cast::<c_char>(),
        )
    }

    fn export(&self, filename: &CStr, width: i32, height: i32) -> i32 {
        unsafe { (self.symbols.export)(filename.as_ptr(), width, height) }
    }

    fn setlogcallback(&self, callback: Option<LogCallbackFn>) {
        unsafe { (self.symbols.setlogcallback)(callback) }
    }

    fn getrenderpathstring(&self) -> Vec<u8> {
        let raw = unsafe { (self.symbols.getrenderpathstring)() };
        if raw.is_null() {
            return Vec::new();
        }
        // static string owned by the library
        unsafe { CStr::from_ptr(raw) }.to_bytes().to_vec()
    }

    unsafe fn drawcylindermesh(
        &self,
        n: i32,
        positions: &[f32],
        directions: &[f32],
        colors: &[f32],
        radii: &[f32],
        lengths: &[f32],
    ) {
        (self.symbols.drawcylindermesh)(
            n,
            positions.as_ptr(),
            directions.as_ptr(),
            colors.as_ptr(),
            radii.as_ptr(),
            lengths.as_ptr(),
        )
    }

    unsafe fn drawconemesh(
        &self,
        n: i32,
        positions: &[f32],
        directions: &[f32],
        colors: &[f32],
        radii: &[f32],
        lengths: &[f32],
    ) {
        (self.symbols.drawconemesh)(
            n,
            positions.as_ptr(),
            directions.as_ptr(),
            colors.as_ptr(),
            radii.as_ptr(),
            lengths.as_ptr(),
        )
    }

    unsafe fn drawspheremesh(&self, n: i32, positions: &[f32], colors: &[f32], radii: &[f32]) {
        (self.symbols.drawspheremesh)(n, positions.as_ptr(), colors.as_ptr(), radii.as_ptr())
    }
}
