//! Primitive attributes
//!
//! Raw setters take the native integer codes. The `*_kind` variants take the
//! closed enums from [`crate::constants`] and forward their codes.

use super::Gr;
use crate::constants::{
    AsfMode, FillInteriorStyle, LineType, MarkerType, TextHAlign, TextPath, TextPrecision,
    TextVAlign, ASF_FLAG_COUNT,
};
use crate::marshal::{float_array, int_array};

impl Gr {
    /// Sets the 13 attribute source flags.
    ///
    /// # Panics
    ///
    /// Panics if `flags` holds fewer than 13 values.
    pub fn setasf(&self, flags: &[i32]) {
        let flags = int_array(ASF_FLAG_COUNT, flags);
        // exactly ASF_FLAG_COUNT elements
        unsafe { self.native.setasf(&flags) }
    }

    pub fn setasf_modes(&self, modes: &[AsfMode; ASF_FLAG_COUNT]) {
        let flags = modes.map(AsfMode::code);
        unsafe { self.native.setasf(&flags) }
    }

    pub fn setlineind(&self, index: i32) {
        self.native.setlineind(index);
    }

    pub fn setlinetype(&self, line_type: i32) {
        self.native.setlinetype(line_type);
    }

    pub fn setlinetype_kind(&self, line_type: LineType) {
        self.setlinetype(line_type.code());
    }

    pub fn setlinewidth(&self, width: f64) {
        self.native.setlinewidth(width as f32);
    }

    pub fn setlinecolorind(&self, color: i32) {
        self.native.setlinecolorind(color);
    }

    pub fn setmarkerind(&self, index: i32) {
        self.native.setmarkerind(index);
    }

    pub fn setmarkertype(&self, marker_type: i32) {
        self.native.setmarkertype(marker_type);
    }

    pub fn setmarkertype_kind(&self, marker_type: MarkerType) {
        self.setmarkertype(marker_type.code());
    }

    pub fn setmarkersize(&self, size: f64) {
        self.native.setmarkersize(size as f32);
    }

    pub fn setmarkercolorind(&self, color: i32) {
        self.native.setmarkercolorind(color);
    }

    pub fn settextind(&self, index: i32) {
        self.native.settextind(index);
    }

    pub fn settextfontprec(&self, font: i32, precision: i32) {
        self.native.settextfontprec(font, precision);
    }

    pub fn settextfontprec_kind(&self, font: i32, precision: TextPrecision) {
        self.settextfontprec(font, precision.code());
    }

    pub fn setcharexpan(&self, factor: f64) {
        self.native.setcharexpan(factor as f32);
    }

    pub fn setcharspace(&self, spacing: f64) {
        self.native.setcharspace(spacing as f32);
    }

    pub fn settextcolorind(&self, color: i32) {
        self.native.settextcolorind(color);
    }

    pub fn setcharheight(&self, height: f64) {
        self.native.setcharheight(height as f32);
    }

    pub fn setcharup(&self, ux: f64, uy: f64) {
        self.native.setcharup(ux as f32, uy as f32);
    }

    pub fn settextpath(&self, path: i32) {
        self.native.settextpath(path);
    }

    pub fn settextpath_kind(&self, path: TextPath) {
        self.settextpath(path.code());
    }

    pub fn settextalign(&self, horizontal: i32, vertical: i32) {
        self.native.settextalign(horizontal, vertical);
    }

    pub fn settextalign_kind(&self, horizontal: TextHAlign, vertical: TextVAlign) {
        self.settextalign(horizontal.code(), vertical.code());
    }

    pub fn setfillind(&self, index: i32) {
        self.native.setfillind(index);
    }

    pub fn setfillintstyle(&self, style: i32) {
        self.native.setfillintstyle(style);
    }

    pub fn setfillintstyle_kind(&self, style: FillInteriorStyle) {
        self.setfillintstyle(style.code());
    }

    pub fn setfillstyle(&self, index: i32) {
        self.native.setfillstyle(index);
    }

    pub fn setfillcolorind(&self, color: i32) {
        self.native.setfillcolorind(color);
    }

    /// Redefines color `index` with RGB components in `[0, 1]`.
    pub fn setcolorrep(&self, index: i32, red: f64, green: f64, blue: f64) {
        self.native
            .setcolorrep(index, red as f32, green as f32, blue as f32);
    }

    pub fn setcolormap(&self, index: i32) {
        self.native.setcolormap(index);
    }

    /// Draws the color bar of the current colormap.
    pub fn colormap(&self) {
        self.native.colormap();
    }

    pub fn setarrowstyle(&self, style: i32) {
        self.native.setarrowstyle(style);
    }

    pub fn setshadow(&self, offsetx: f64, offsety: f64, blur: f64) {
        self.native
            .setshadow(offsetx as f32, offsety as f32, blur as f32);
    }

    pub fn settransparency(&self, alpha: f64) {
        self.native.settransparency(alpha as f32);
    }

    /// Sets the 2x3 coordinate transformation matrix, row-major.
    ///
    /// # Panics
    ///
    /// Panics if `mat` holds fewer than 6 values.
    pub fn setcoordxform(&self, mat: &[f64]) {
        let mat = float_array(6, mat);
        unsafe { self.native.setcoordxform(&mat) }
    }
}
