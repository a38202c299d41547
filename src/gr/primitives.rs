//! Output primitives
//!
//! Sequence arguments are read up to the element count the caller passes;
//! see [`crate::marshal`] for the copy discipline.

use super::Gr;
use crate::error::BindingResult;
use crate::marshal::{encode_text, float_array, grid_len, int_array, native_count};

impl Gr {
    /// # Panics
    ///
    /// Panics if `x` or `y` holds fewer than `n` values.
    pub fn polyline(&self, n: usize, x: &[f64], y: &[f64]) {
        let (x, y) = (float_array(n, x), float_array(n, y));
        // both buffers hold exactly n elements
        unsafe { self.native.polyline(native_count(n), &x, &y) }
    }

    pub fn polymarker(&self, n: usize, x: &[f64], y: &[f64]) {
        let (x, y) = (float_array(n, x), float_array(n, y));
        unsafe { self.native.polymarker(native_count(n), &x, &y) }
    }

    pub fn fillarea(&self, n: usize, x: &[f64], y: &[f64]) {
        let (x, y) = (float_array(n, x), float_array(n, y));
        unsafe { self.native.fillarea(native_count(n), &x, &y) }
    }

    /// Draws the full `dimx` by `dimy` color index grid.
    ///
    /// `color` is row-major and read as `dimx * dimy` indices, unreshaped.
    #[allow(clippy::too_many_arguments)]
    pub fn cellarray(
        &self,
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        dimx: usize,
        dimy: usize,
        color: &[i32],
    ) {
        let color = int_array(grid_len(dimx, dimy), color);
        let (dimx, dimy) = (native_count(dimx), native_count(dimy));
        unsafe {
            self.native.cellarray(
                xmin as f32,
                xmax as f32,
                ymin as f32,
                ymax as f32,
                dimx,
                dimy,
                1,
                1,
                dimx,
                dimy,
                &color,
            )
        }
    }

    /// Smooth curve through `n` points, evaluated at `m` points.
    pub fn spline(&self, n: usize, px: &[f64], py: &[f64], m: i32, method: i32) {
        let (px, py) = (float_array(n, px), float_array(n, py));
        unsafe { self.native.spline(native_count(n), &px, &py, m, method) }
    }

    pub fn verrorbars(&self, n: usize, px: &[f64], py: &[f64], e1: &[f64], e2: &[f64]) {
        let (px, py) = (float_array(n, px), float_array(n, py));
        let (e1, e2) = (float_array(n, e1), float_array(n, e2));
        unsafe { self.native.verrorbars(native_count(n), &px, &py, &e1, &e2) }
    }

    pub fn herrorbars(&self, n: usize, px: &[f64], py: &[f64], e1: &[f64], e2: &[f64]) {
        let (px, py) = (float_array(n, px), float_array(n, py));
        let (e1, e2) = (float_array(n, e1), float_array(n, e2));
        unsafe { self.native.herrorbars(native_count(n), &px, &py, &e1, &e2) }
    }

    pub fn polyline3d(&self, n: usize, px: &[f64], py: &[f64], pz: &[f64]) {
        let (px, py, pz) = (float_array(n, px), float_array(n, py), float_array(n, pz));
        unsafe { self.native.polyline3d(native_count(n), &px, &py, &pz) }
    }

    /// `pz` holds `nx * ny` heights, x varying fastest.
    pub fn surface(&self, nx: usize, ny: usize, px: &[f64], py: &[f64], pz: &[f64], option: i32) {
        let px = float_array(nx, px);
        let py = float_array(ny, py);
        let pz = float_array(grid_len(nx, ny), pz);
        unsafe {
            self.native
                .surface(native_count(nx), native_count(ny), &px, &py, &pz, option)
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn contour(
        &self,
        nx: usize,
        ny: usize,
        nh: usize,
        px: &[f64],
        py: &[f64],
        h: &[f64],
        pz: &[f64],
        major_h: i32,
    ) {
        let px = float_array(nx, px);
        let py = float_array(ny, py);
        let h = float_array(nh, h);
        let pz = float_array(grid_len(nx, ny), pz);
        unsafe {
            self.native.contour(
                native_count(nx),
                native_count(ny),
                native_count(nh),
                &px,
                &py,
                &h,
                &pz,
                major_h,
            )
        }
    }

    /// Draws a `width` by `height` image of packed RGBA values.
    #[allow(clippy::too_many_arguments)]
    pub fn drawimage(
        &self,
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        width: usize,
        height: usize,
        data: &[i32],
    ) {
        let data = int_array(grid_len(width, height), data);
        unsafe {
            self.native.drawimage(
                xmin as f32,
                xmax as f32,
                ymin as f32,
                ymax as f32,
                native_count(width),
                native_count(height),
                &data,
            )
        }
    }

    pub fn text(&self, x: f64, y: f64, string: &str) -> BindingResult<()> {
        let string = encode_text(string)?;
        self.native.text(x as f32, y as f32, &string);
        Ok(())
    }

    /// Draws extended text (LaTeX-like formulas); the native return value is
    /// passed through.
    pub fn textext(&self, x: f64, y: f64, string: &str) -> BindingResult<i32> {
        let string = encode_text(string)?;
        Ok(self.native.textext(x as f32, y as f32, &string))
    }

    pub fn titles3d(&self, x_title: &str, y_title: &str, z_title: &str) -> BindingResult<()> {
        let x_title = encode_text(x_title)?;
        let y_title = encode_text(y_title)?;
        let z_title = encode_text(z_title)?;
        self.native.titles3d(&x_title, &y_title, &z_title);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn axes(
        &self,
        x_tick: f64,
        y_tick: f64,
        x_org: f64,
        y_org: f64,
        major_x: i32,
        major_y: i32,
        tick_size: f64,
    ) {
        self.native.axes(
            x_tick as f32,
            y_tick as f32,
            x_org as f32,
            y_org as f32,
            major_x,
            major_y,
            tick_size as f32,
        );
    }

    pub fn grid(&self, x_tick: f64, y_tick: f64, x_org: f64, y_org: f64, major_x: i32, major_y: i32) {
        self.native.grid(
            x_tick as f32,
            y_tick as f32,
            x_org as f32,
            y_org as f32,
            major_x,
            major_y,
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn axes3d(
        &self,
        x_tick: f64,
        y_tick: f64,
        z_tick: f64,
        x_org: f64,
        y_org: f64,
        z_org: f64,
        major_x: i32,
        major_y: i32,
        major_z: i32,
        tick_size: f64,
    ) {
        self.native.axes3d(
            x_tick as f32,
            y_tick as f32,
            z_tick as f32,
            x_org as f32,
            y_org as f32,
            z_org as f32,
            major_x,
            major_y,
            major_z,
            tick_size as f32,
        );
    }

    pub fn drawrect(&self, xmin: f64, xmax: f64, ymin: f64, ymax: f64) {
        self.native
            .drawrect(xmin as f32, xmax as f32, ymin as f32, ymax as f32);
    }

    pub fn fillrect(&self, xmin: f64, xmax: f64, ymin: f64, ymax: f64) {
        self.native
            .fillrect(xmin as f32, xmax as f32, ymin as f32, ymax as f32);
    }

    /// Arc of the ellipse inscribed in the rectangle, from `a1` to `a2` degrees.
    pub fn drawarc(&self, xmin: f64, xmax: f64, ymin: f64, ymax: f64, a1: i32, a2: i32) {
        self.native
            .drawarc(xmin as f32, xmax as f32, ymin as f32, ymax as f32, a1, a2);
    }

    pub fn fillarc(&self, xmin: f64, xmax: f64, ymin: f64, ymax: f64, a1: i32, a2: i32) {
        self.native
            .fillarc(xmin as f32, xmax as f32, ymin as f32, ymax as f32, a1, a2);
    }

    pub fn drawarrow(&self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.native
            .drawarrow(x1 as f32, y1 as f32, x2 as f32, y2 as f32);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::ffi::{NativeArg, RecordingBackend};

    fn recording() -> (Gr, Arc<RecordingBackend>) {
        let backend = Arc::new(RecordingBackend::new());
        (Gr::with_backend(backend.clone()), backend)
    }

    #[test]
    fn test_polyline_buffers() {
        let (gr, backend) = recording();
        gr.polyline(3, &[1.0, 2.5, -3.25], &[0.0, 0.5, 1.0]);

        let call = backend.last_call().unwrap();
        assert_eq!(call.symbol, "gr_polyline");
        assert_eq!(call.args[0], NativeArg::Int(3));
        assert_eq!(call.args[1].as_floats(), Some(&[1.0f32, 2.5, -3.25][..]));
        assert_eq!(call.args[2].as_floats(), Some(&[0.0f32, 0.5, 1.0][..]));
    }

    #[test]
    fn test_polymarker_reads_only_n() {
        let (gr, backend) = recording();
        gr.polymarker(2, &[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]);
        let call = backend.last_call().unwrap();
        assert_eq!(call.args[1].as_floats().map(<[f32]>::len), Some(2));
    }

    #[test]
    #[should_panic]
    fn test_short_sequence_is_not_padded() {
        let (gr, _backend) = recording();
        gr.fillarea(4, &[0.0, 1.0], &[0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_cellarray_forwards_full_grid() {
        let (gr, backend) = recording();
        gr.cellarray(0.0, 1.0, 0.0, 1.0, 2, 3, &[1, 2, 3, 4, 5, 6]);

        let call = backend.last_call().unwrap();
        assert_eq!(call.symbol, "gr_cellarray");
        assert_eq!(
            &call.args[4..10],
            &[
                NativeArg::Int(2),
                NativeArg::Int(3),
                NativeArg::Int(1),
                NativeArg::Int(1),
                NativeArg::Int(2),
                NativeArg::Int(3),
            ]
        );
        assert_eq!(call.args[10].as_ints(), Some(&[1, 2, 3, 4, 5, 6][..]));
    }

    #[test]
    fn test_surface_sizes() {
        let (gr, backend) = recording();
        let pz: Vec<f64> = (0..6).map(f64::from).collect();
        gr.surface(2, 3, &[0.0, 1.0], &[0.0, 1.0, 2.0], &pz, 3);

        let call = backend.last_call().unwrap();
        assert_eq!(call.args[2].as_floats().map(<[f32]>::len), Some(2));
        assert_eq!(call.args[3].as_floats().map(<[f32]>::len), Some(3));
        assert_eq!(
            call.args[4].as_floats(),
            Some(&[0.0f32, 1.0, 2.0, 3.0, 4.0, 5.0][..])
        );
        assert_eq!(call.args[5], NativeArg::Int(3));
    }

    #[test]
    fn test_contour_sizes() {
        let (gr, backend) = recording();
        let pz = [0.0; 4];
        gr.contour(2, 2, 3, &[0.0, 1.0], &[0.0, 1.0], &[0.1, 0.2, 0.3], &pz, 0);

        let call = backend.last_call().unwrap();
        assert_eq!(call.symbol, "gr_contour");
        assert_eq!(call.args[5].as_floats().map(<[f32]>::len), Some(3));
        assert_eq!(call.args[6].as_floats().map(<[f32]>::len), Some(4));
    }

    #[test]
    fn test_drawimage_reads_width_times_height() {
        let (gr, backend) = recording();
        gr.drawimage(0.0, 1.0, 0.0, 1.0, 2, 2, &[-1, 0, 1, 2, 99]);
        let call = backend.last_call().unwrap();
        assert_eq!(call.args[6].as_ints(), Some(&[-1, 0, 1, 2][..]));
    }

    #[test]
    fn test_text_is_latin9() {
        let (gr, backend) = recording();
        gr.text(0.5, 0.5, "Preis: 5 €").unwrap();
        let call = backend.last_call().unwrap();
        assert_eq!(call.args[2].as_text(), Some(&b"Preis: 5 \xA4\0"[..]));
    }

    #[test]
    fn test_titles3d_fails_before_native_call() {
        let (gr, backend) = recording();
        assert!(gr.titles3d("x", "y", "\u{3b6}").is_err());
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_errorbars() {
        let (gr, backend) = recording();
        gr.verrorbars(1, &[1.0], &[2.0], &[0.5], &[3.5]);
        gr.herrorbars(1, &[1.0], &[2.0], &[0.5], &[3.5]);
        assert_eq!(backend.symbols(), vec!["gr_verrorbars", "gr_herrorbars"]);
        let call = backend.last_call().unwrap();
        assert_eq!(call.args[3].as_floats(), Some(&[0.5f32][..]));
        assert_eq!(call.args[4].as_floats(), Some(&[3.5f32][..]));
    }
}
