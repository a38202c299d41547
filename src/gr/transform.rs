//! Normalization transformations

use super::Gr;
use crate::constants::ClipIndicator;

impl Gr {
    /// Sets the axis scale options (log, flip); returns the native result.
    pub fn setscale(&self, options: i32) -> i32 {
        self.native.setscale(options)
    }

    pub fn setwindow(&self, xmin: f64, xmax: f64, ymin: f64, ymax: f64) {
        self.native
            .setwindow(xmin as f32, xmax as f32, ymin as f32, ymax as f32);
    }

    pub fn setviewport(&self, xmin: f64, xmax: f64, ymin: f64, ymax: f64) {
        self.native
            .setviewport(xmin as f32, xmax as f32, ymin as f32, ymax as f32);
    }

    pub fn selntran(&self, transform: i32) {
        self.native.selntran(transform);
    }

    pub fn setclip(&self, indicator: i32) {
        self.native.setclip(indicator);
    }

    pub fn setclip_kind(&self, indicator: ClipIndicator) {
        self.setclip(indicator.code());
    }

    pub fn setwswindow(&self, xmin: f64, xmax: f64, ymin: f64, ymax: f64) {
        self.native
            .setwswindow(xmin as f32, xmax as f32, ymin as f32, ymax as f32);
    }

    pub fn setwsviewport(&self, xmin: f64, xmax: f64, ymin: f64, ymax: f64) {
        self.native
            .setwsviewport(xmin as f32, xmax as f32, ymin as f32, ymax as f32);
    }

    /// Sets the z range and viewing angles of 3-D output; returns the native
    /// result.
    pub fn setspace(&self, zmin: f64, zmax: f64, rotation: i32, tilt: i32) -> i32 {
        self.native
            .setspace(zmin as f32, zmax as f32, rotation, tilt)
    }

    /// Normalized device coordinates to world coordinates, `[x, y]`.
    pub fn ndctowc(&self, x: f64, y: f64) -> [f64; 2] {
        let (x, y) = self.native.ndctowc(x as f32, y as f32);
        [f64::from(x), f64::from(y)]
    }

    /// World coordinates to normalized device coordinates, `[x, y]`.
    pub fn wctondc(&self, x: f64, y: f64) -> [f64; 2] {
        let (x, y) = self.native.wctondc(x as f32, y as f32);
        [f64::from(x), f64::from(y)]
    }
}
