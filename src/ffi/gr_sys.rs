//! `libGR` entry points

use std::ffi::{c_char, c_float, c_int, CStr};

use super::NativeLibrary;
use crate::config::LibraryConfig;
use crate::error::BindingResult;

symbol_table! {
    /// Typed `gr_*` entry points.
    pub(crate) struct GrSymbols {
        opengks: fn();
        closegks: fn();
        emergencyclosegks: fn();
        updategks: fn();
        inqdspsize: fn(*mut c_float, *mut c_float, *mut c_int, *mut c_int);
        openws: fn(c_int, *const c_char, c_int);
        closews: fn(c_int);
        activatews: fn(c_int);
        deactivatews: fn(c_int);
        clearws: fn();
        updatews: fn();
        polyline: fn(c_int, *const c_float, *const c_float);
        polymarker: fn(c_int, *const c_float, *const c_float);
        text: fn(c_float, c_float, *const c_char);
        fillarea: fn(c_int, *const c_float, *const c_float);
        cellarray: fn(
            c_float, c_float, c_float, c_float,
            c_int, c_int, c_int, c_int, c_int, c_int,
            *const c_int,
        );
        spline: fn(c_int, *const c_float, *const c_float, c_int, c_int);
        setasf: fn(*const c_int);
        setlineind: fn(c_int);
        setlinetype: fn(c_int);
        setlinewidth: fn(c_float);
        setlinecolorind: fn(c_int);
        setmarkerind: fn(c_int);
        setmarkertype: fn(c_int);
        setmarkersize: fn(c_float);
        setmarkercolorind: fn(c_int);
        settextind: fn(c_int);
        settextfontprec: fn(c_int, c_int);
        setcharexpan: fn(c_float);
        setcharspace: fn(c_float);
        settextcolorind: fn(c_int);
        setcharheight: fn(c_float);
        setcharup: fn(c_float, c_float);
        settextpath: fn(c_int);
        settextalign: fn(c_int, c_int);
        setfillind: fn(c_int);
        setfillintstyle: fn(c_int);
        setfillstyle: fn(c_int);
        setfillcolorind: fn(c_int);
        setcolorrep: fn(c_int, c_float, c_float, c_float);
        setscale: fn(c_int) -> c_int;
        inqscale: fn(*mut c_int);
        setwindow: fn(c_float, c_float, c_float, c_float);
        inqwindow: fn(*mut c_float, *mut c_float, *mut c_float, *mut c_float);
        setviewport: fn(c_float, c_float, c_float, c_float);
        selntran: fn(c_int);
        setclip: fn(c_int);
        setwswindow: fn(c_float, c_float, c_float, c_float);
        setwsviewport: fn(c_float, c_float, c_float, c_float);
        createseg: fn(c_int);
        copysegws: fn(c_int);
        redrawsegws: fn();
        setsegtran: fn(
            c_int, c_float, c_float, c_float, c_float, c_float, c_float, c_float,
        );
        closeseg: fn();
        setspace: fn(c_float, c_float, c_int, c_int) -> c_int;
        inqspace: fn(*mut c_float, *mut c_float, *mut c_int, *mut c_int);
        textext: fn(c_float, c_float, *const c_char) -> c_int;
        inqtextext: fn(c_float, c_float, *const c_char, *mut c_float, *mut c_float);
        axes: fn(c_float, c_float, c_float, c_float, c_int, c_int, c_float);
        grid: fn(c_float, c_float, c_float, c_float, c_int, c_int);
        verrorbars: fn(c_int, *const c_float, *const c_float, *const c_float, *const c_float);
        herrorbars: fn(c_int, *const c_float, *const c_float, *const c_float, *const c_float);
        polyline3d: fn(c_int, *const c_float, *const c_float, *const c_float);
        axes3d: fn(
            c_float, c_float, c_float, c_float, c_float, c_float,
            c_int, c_int, c_int, c_float,
        );
        titles3d: fn(*const c_char, *const c_char, *const c_char);
        surface: fn(c_int, c_int, *const c_float, *const c_float, *const c_float, c_int);
        contour: fn(
            c_int, c_int, c_int,
            *const c_float, *const c_float, *const c_float, *const c_float,
            c_int,
        );
        setcolormap: fn(c_int);
        colormap: fn();
        tick: fn(c_float, c_float) -> c_float;
        adjustrange: fn(*mut c_float, *mut c_float);
        beginprint: fn(*const c_char);
        beginprintext: fn(*const c_char, *const c_char, *const c_char, *const c_char);
        endprint: fn();
        ndctowc: fn(*mut c_float, *mut c_float);
        wctondc: fn(*mut c_float, *mut c_float);
        drawrect: fn(c_float, c_float, c_float, c_float);
        fillrect: fn(c_float, c_float, c_float, c_float);
        drawarc: fn(c_float, c_float, c_float, c_float, c_int, c_int);
        fillarc: fn(c_float, c_float, c_float, c_float, c_int, c_int);
        setarrowstyle: fn(c_int);
        drawarrow: fn(c_float, c_float, c_float, c_float);
        drawimage: fn(c_float, c_float, c_float, c_float, c_int, c_int, *const c_int);
        setshadow: fn(c_float, c_float, c_float);
        settransparency: fn(c_float);
        setcoordxform: fn(*const c_float);
        begingraphics: fn(*const c_char);
        endgraphics: fn();
        beginselection: fn(c_int, c_int);
        endselection: fn();
        moveselection: fn(c_float, c_float);
        resizeselection: fn(c_int, c_float, c_float);
        inqbbox: fn(*mut c_float, *mut c_float, *mut c_float, *mut c_float);
    }
}

/// The `libGR` C surface, one method per entry point.
///
/// Implemented by [`LoadedGr`] for the real library and by
/// [`RecordingBackend`](super::RecordingBackend) in-process. Methods that
/// take a buffer next to an element count are `unsafe`: the native side
/// reads as many elements as the counts announce.
pub trait GrNative: Send + Sync {
    fn opengks(&self);
    fn closegks(&self);
    fn emergencyclosegks(&self);
    fn updategks(&self);
    /// `(mwidth, mheight, width, height)`
    fn inqdspsize(&self) -> (f32, f32, i32, i32);
    fn openws(&self, workstation_id: i32, connection: &CStr, ws_type: i32);
    fn closews(&self, workstation_id: i32);
    fn activatews(&self, workstation_id: i32);
    fn deactivatews(&self, workstation_id: i32);
    fn clearws(&self);
    fn updatews(&self);

    /// # Safety
    /// `x` and `y` hold at least `n` elements.
    unsafe fn polyline(&self, n: i32, x: &[f32], y: &[f32]);
    /// # Safety
    /// `x` and `y` hold at least `n` elements.
    unsafe fn polymarker(&self, n: i32, x: &[f32], y: &[f32]);
    fn text(&self, x: f32, y: f32, string: &CStr);
    /// # Safety
    /// `x` and `y` hold at least `n` elements.
    unsafe fn fillarea(&self, n: i32, x: &[f32], y: &[f32]);
    /// # Safety
    /// `color` holds at least `dimx * dimy` elements.
    #[allow(clippy::too_many_arguments)]
    unsafe fn cellarray(
        &self,
        xmin: f32,
        xmax: f32,
        ymin: f32,
        ymax: f32,
        dimx: i32,
        dimy: i32,
        scol: i32,
        srow: i32,
        ncol: i32,
        nrow: i32,
        color: &[i32],
    );
    /// # Safety
    /// `px` and `py` hold at least `n` elements.
    unsafe fn spline(&self, n: i32, px: &[f32], py: &[f32], m: i32, method: i32);
    /// # Safety
    /// `flags` holds at least 13 elements.
    unsafe fn setasf(&self, flags: &[i32]);

    fn setlineind(&self, index: i32);
    fn setlinetype(&self, line_type: i32);
    fn setlinewidth(&self, width: f32);
    fn setlinecolorind(&self, color: i32);
    fn setmarkerind(&self, index: i32);
    fn setmarkertype(&self, marker_type: i32);
    fn setmarkersize(&self, size: f32);
    fn setmarkercolorind(&self, color: i32);
    fn settextind(&self, index: i32);
    fn settextfontprec(&self, font: i32, precision: i32);
    fn setcharexpan(&self, factor: f32);
    fn setcharspace(&self, spacing: f32);
    fn settextcolorind(&self, color: i32);
    fn setcharheight(&self, height: f32);
    fn setcharup(&self, ux: f32, uy: f32);
    fn settextpath(&self, path: i32);
    fn settextalign(&self, horizontal: i32, vertical: i32);
    fn setfillind(&self, index: i32);
    fn setfillintstyle(&self, style: i32);
    fn setfillstyle(&self, index: i32);
    fn setfillcolorind(&self, color: i32);
    fn setcolorrep(&self, index: i32, red: f32, green: f32, blue: f32);

    fn setscale(&self, options: i32) -> i32;
    fn inqscale(&self) -> i32;
    fn setwindow(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32);
    /// `[xmin, xmax, ymin, ymax]`
    fn inqwindow(&self) -> [f32; 4];
    fn setviewport(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32);
    fn selntran(&self, transform: i32);
    fn setclip(&self, indicator: i32);
    fn setwswindow(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32);
    fn setwsviewport(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32);

    fn createseg(&self, segment: i32);
    fn copysegws(&self, segment: i32);
    fn redrawsegws(&self);
    #[allow(clippy::too_many_arguments)]
    fn setsegtran(
        &self,
        segment: i32,
        fx: f32,
        fy: f32,
        transx: f32,
        transy: f32,
        phi: f32,
        scalex: f32,
        scaley: f32,
    );
    fn closeseg(&self);

    fn setspace(&self, zmin: f32, zmax: f32, rotation: i32, tilt: i32) -> i32;
    /// `(zmin, zmax, rotation, tilt)`
    fn inqspace(&self) -> (f32, f32, i32, i32);
    fn textext(&self, x: f32, y: f32, string: &CStr) -> i32;
    /// `(tbx, tby)`
    fn inqtextext(&self, x: f32, y: f32, string: &CStr) -> ([f32; 4], [f32; 4]);
    #[allow(clippy::too_many_arguments)]
    fn axes(
        &self,
        x_tick: f32,
        y_tick: f32,
        x_org: f32,
        y_org: f32,
        major_x: i32,
        major_y: i32,
        tick_size: f32,
    );
    fn grid(&self, x_tick: f32, y_tick: f32, x_org: f32, y_org: f32, major_x: i32, major_y: i32);
    /// # Safety
    /// All four buffers hold at least `n` elements.
    unsafe fn verrorbars(&self, n: i32, px: &[f32], py: &[f32], e1: &[f32], e2: &[f32]);
    /// # Safety
    /// All four buffers hold at least `n` elements.
    unsafe fn herrorbars(&self, n: i32, px: &[f32], py: &[f32], e1: &[f32], e2: &[f32]);
    /// # Safety
    /// All three buffers hold at least `n` elements.
    unsafe fn polyline3d(&self, n: i32, px: &[f32], py: &[f32], pz: &[f32]);
    #[allow(clippy::too_many_arguments)]
    fn axes3d(
        &self,
        x_tick: f32,
        y_tick: f32,
        z_tick: f32,
        x_org: f32,
        y_org: f32,
        z_org: f32,
        major_x: i32,
        major_y: i32,
        major_z: i32,
        tick_size: f32,
    );
    fn titles3d(&self, x_title: &CStr, y_title: &CStr, z_title: &CStr);
    /// # Safety
    /// `px` holds `nx`, `py` holds `ny` and `pz` holds `nx * ny` elements.
    unsafe fn surface(&self, nx: i32, ny: i32, px: &[f32], py: &[f32], pz: &[f32], option: i32);
    /// # Safety
    /// `px` holds `nx`, `py` holds `ny`, `h` holds `nh` and `pz` holds
    /// `nx * ny` elements.
    #[allow(clippy::too_many_arguments)]
    unsafe fn contour(
        &self,
        nx: i32,
        ny: i32,
        nh: i32,
        px: &[f32],
        py: &[f32],
        h: &[f32],
        pz: &[f32],
        major_h: i32,
    );
    fn setcolormap(&self, index: i32);
    fn colormap(&self);
    fn tick(&self, amin: f32, amax: f32) -> f32;
    /// Returns the adjusted `(amin, amax)`.
    fn adjustrange(&self, amin: f32, amax: f32) -> (f32, f32);

    fn beginprint(&self, pathname: &CStr);
    fn beginprintext(&self, pathname: &CStr, mode: &CStr, format: &CStr, orientation: &CStr);
    fn endprint(&self);
    fn ndctowc(&self, x: f32, y: f32) -> (f32, f32);
    fn wctondc(&self, x: f32, y: f32) -> (f32, f32);

    fn drawrect(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32);
    fn fillrect(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32);
    fn drawarc(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32, a1: i32, a2: i32);
    fn fillarc(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32, a1: i32, a2: i32);
    fn setarrowstyle(&self, style: i32);
    fn drawarrow(&self, x1: f32, y1: f32, x2: f32, y2: f32);
    /// # Safety
    /// `data` holds at least `width * height` elements.
    #[allow(clippy::too_many_arguments)]
    unsafe fn drawimage(
        &self,
        xmin: f32,
        xmax: f32,
        ymin: f32,
        ymax: f32,
        width: i32,
        height: i32,
        data: &[i32],
    );
    fn setshadow(&self, offsetx: f32, offsety: f32, blur: f32);
    fn settransparency(&self, alpha: f32);
    /// # Safety
    /// `mat` holds at least 6 elements.
    unsafe fn setcoordxform(&self, mat: &[f32]);

    fn begingraphics(&self, path: &CStr);
    fn endgraphics(&self);
    fn beginselection(&self, index: i32, kind: i32);
    fn endselection(&self);
    fn moveselection(&self, x: f32, y: f32);
    fn resizeselection(&self, kind: i32, x: f32, y: f32);
    /// `[xmin, xmax, ymin, ymax]`
    fn inqbbox(&self) -> [f32; 4];
}

/// `libGR` loaded with `libloading`.
pub struct LoadedGr {
    symbols: GrSymbols,
    library: NativeLibrary,
}

impl LoadedGr {
    /// Loads the library and resolves every entry point.
    pub fn load(config: &LibraryConfig) -> BindingResult<Self> {
        let library = NativeLibrary::open(config)?;
        // GrSymbols declares the signatures of gr.h
        let symbols = unsafe { GrSymbols::resolve(&library, "gr_")? };
        tracing::debug!(
            target: "gr_binding::ffi",
            "Resolved {} GR entry points",
            GrSymbols::SYMBOLS.len()
        );
        Ok(Self { symbols, library })
    }

    pub fn library(&self) -> &NativeLibrary {
        &self.library
    }
}

// Every call below forwards to an entry point resolved from `self.library`,
// which outlives `self.symbols`.
impl GrNative for LoadedGr {
    fn opengks(&self) {
        unsafe { (self.symbols.opengks)() }
    }

    fn closegks(&self) {
        unsafe { (self.symbols.closegks)() }
    }

    fn emergencyclosegks(&self) {
        unsafe { (self.symbols.emergencyclosegks)() }
    }

    fn updategks(&self) {
        unsafe { (self.symbols.updategks)() }
    }

    fn inqdspsize(&self) -> (f32, f32, i32, i32) {
        let (mut mwidth, mut mheight, mut width, mut height) = (0.0, 0.0, 0, 0);
        unsafe { (self.symbols.inqdspsize)(&mut mwidth, &mut mheight, &mut width, &mut height) };
        (mwidth, mheight, width, height)
    }

    fn openws(&self, workstation_id: i32, connection: &CStr, ws_type: i32) {
        unsafe { (self.symbols.openws)(workstation_id, connection.as_ptr(), ws_type) }
    }

    fn closews(&self, workstation_id: i32) {
        unsafe { (self.symbols.closews)(workstation_id) }
    }

    fn activatews(&self, workstation_id: i32) {
        unsafe { (self.symbols.activatews)(workstation_id) }
    }

    fn deactivatews(&self, workstation_id: i32) {
        unsafe { (self.symbols.deactivatews)(workstation_id) }
    }

    fn clearws(&self) {
        unsafe { (self.symbols.clearws)() }
    }

    fn updatews(&self) {
        unsafe { (self.symbols.updatews)() }
    }

    unsafe fn polyline(&self, n: i32, x: &[f32], y: &[f32]) {
        (self.symbols.polyline)(n, x.as_ptr(), y.as_ptr())
    }

    unsafe fn polymarker(&self, n: i32, x: &[f32], y: &[f32]) {
        (self.symbols.polymarker)(n, x.as_ptr(), y.as_ptr())
    }

    fn text(&self, x: f32, y: f32, string: &CStr) {
        unsafe { (self.symbols.text)(x, y, string.as_ptr()) }
    }

    unsafe fn fillarea(&self, n: i32, x: &[f32], y: &[f32]) {
        (self.symbols.fillarea)(n, x.as_ptr(), y.as_ptr())
    }

    unsafe fn cellarray(
        &self,
        xmin: f32,
        xmax: f32,
        ymin: f32,
        ymax: f32,
        dimx: i32,
        dimy: i32,
        scol: i32,
        srow: i32,
        ncol: i32,
        nrow: i32,
        color: &[i32],
    ) {
        (self.symbols.cellarray)(
            xmin,
            xmax,
            ymin,
            ymax,
            dimx,
            dimy,
            scol,
            srow,
            ncol,
            nrow,
            color.as_ptr(),
        )
    }

    unsafe fn spline(&self, n: i32, px: &[f32], py: &[f32], m: i32, method: i32) {
        (self.symbols.spline)(n, px.as_ptr(), py.as_ptr(), m, method)
    }

    unsafe fn setasf(&self, flags: &[i32]) {
        (self.symbols.setasf)(flags.as_ptr())
    }

    fn setlineind(&self, index: i32) {
        unsafe { (self.symbols.setlineind)(index) }
    }

    fn setlinetype(&self, line_type: i32) {
        unsafe { (self.symbols.setlinetype)(line_type) }
    }

    fn setlinewidth(&self, width: f32) {
        unsafe { (self.symbols.setlinewidth)(width) }
    }

    fn setlinecolorind(&self, color: i32) {
        unsafe { (self.symbols.setlinecolorind)(color) }
    }

    fn setmarkerind(&self, index: i32) {
        unsafe { (self.symbols.setmarkerind)(index) }
    }

    fn setmarkertype(&self, marker_type: i32) {
        unsafe { (self.symbols.setmarkertype)(marker_type) }
    }

    fn setmarkersize(&self, size: f32) {
        unsafe { (self.symbols.setmarkersize)(size) }
    }

    fn setmarkercolorind(&self, color: i32) {
        unsafe { (self.symbols.setmarkercolorind)(color) }
    }

    fn settextind(&self, index: i32) {
        unsafe { (self.symbols.settextind)(index) }
    }

    fn settextfontprec(&self, font: i32, precision: i32) {
        unsafe { (self.symbols.settextfontprec)(font, precision) }
    }

    fn setcharexpan(&self, factor: f32) {
        unsafe { (self.symbols.setcharexpan)(factor) }
    }

    fn setcharspace(&self, spacing: f32) {
        unsafe { (self.symbols.setcharspace)(spacing) }
    }

    fn settextcolorind(&self, color: i32) {
        unsafe { (self.symbols.settextcolorind)(color) }
    }

    fn setcharheight(&self, height: f32) {
        unsafe { (self.symbols.setcharheight)(height) }
    }

    fn setcharup(&self, ux: f32, uy: f32) {
        unsafe { (self.symbols.setcharup)(ux, uy) }
    }

    fn settextpath(&self, path: i32) {
        unsafe { (self.symbols.settextpath)(path) }
    }

    fn settextalign(&self, horizontal: i32, vertical: i32) {
        unsafe { (self.symbols.settextalign)(horizontal, vertical) }
    }

    fn setfillind(&self, index: i32) {
        unsafe { (self.symbols.setfillind)(index) }
    }

    fn setfillintstyle(&self, style: i32) {
        unsafe { (self.symbols.setfillintstyle)(style) }
    }

    fn setfillstyle(&self, index: i32) {
        unsafe { (self.symbols.setfillstyle)(index) }
    }

    fn setfillcolorind(&self, color: i32) {
        unsafe { (self.symbols.setfillcolorind)(color) }
    }

    fn setcolorrep(&self, index: i32, red: f32, green: f32, blue: f32) {
        unsafe { (self.symbols.setcolorrep)(index, red, green, blue) }
    }

    fn setscale(&self, options: i32) -> i32 {
        unsafe { (self.symbols.setscale)(options) }
    }

    fn inqscale(&self) -> i32 {
        let mut options = 0;
        unsafe { (self.symbols.inqscale)(&mut options) };
        options
    }

    fn setwindow(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32) {
        unsafe { (self.symbols.setwindow)(xmin, xmax, ymin, ymax) }
    }

    fn inqwindow(&self) -> [f32; 4] {
        let mut w = [0.0f32; 4];
        let [xmin, xmax, ymin, ymax] = &mut w;
        unsafe { (self.symbols.inqwindow)(xmin, xmax, ymin, ymax) };
        w
    }

    fn setviewport(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32) {
        unsafe { (self.symbols.setviewport)(xmin, xmax, ymin, ymax) }
    }

    fn selntran(&self, transform: i32) {
        unsafe { (self.symbols.selntran)(transform) }
    }

    fn setclip(&self, indicator: i32) {
        unsafe { (self.symbols.setclip)(indicator) }
    }

    fn setwswindow(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32) {
        unsafe { (self.symbols.setwswindow)(xmin, xmax, ymin, ymax) }
    }

    fn setwsviewport(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32) {
        unsafe { (self.symbols.setwsviewport)(xmin, xmax, ymin, ymax) }
    }

    fn createseg(&self, segment: i32) {
        unsafe { (self.symbols.createseg)(segment) }
    }

    fn copysegws(&self, segment: i32) {
        unsafe { (self.symbols.copysegws)(segment) }
    }

    fn redrawsegws(&self) {
        unsafe { (self.symbols.redrawsegws)() }
    }

    fn setsegtran(
        &self,
        segment: i32,
        fx: f32,
        fy: f32,
        transx: f32,
        transy: f32,
        phi: f32,
        scalex: f32,
        scaley: f32,
    ) {
        unsafe {
            (self.symbols.setsegtran)(segment, fx, fy, transx, transy, phi, scalex, scaley)
        }
    }

    fn closeseg(&self) {
        unsafe { (self.symbols.closeseg)() }
    }

    fn setspace(&self, zmin: f32, zmax: f32, rotation: i32, tilt: i32) -> i32 {
        unsafe { (self.symbols.setspace)(zmin, zmax, rotation, tilt) }
    }

    fn inqspace(&self) -> (f32, f32, i32, i32) {
        let (mut zmin, mut zmax, mut rotation, mut tilt) = (0.0, 0.0, 0, 0);
        unsafe { (self.symbols.inqspace)(&mut zmin, &mut zmax, &mut rotation, &mut tilt) };
        (zmin, zmax, rotation, tilt)
    }

    fn textext(&self, x: f32, y: f32, string: &CStr) -> i32 {
        unsafe { (self.symbols.textext)(x, y, string.as_ptr()) }
    }

    fn inqtextext(&self, x: f32, y: f32, string: &CStr) -> ([f32; 4], [f32; 4]) {
        let mut tbx = [0.0f32; 4];
        let mut tby = [0.0f32; 4];
        unsafe {
            (self.symbols.inqtextext)(x, y, string.as_ptr(), tbx.as_mut_ptr(), tby.as_mut_ptr())
        };
        (tbx, tby)
    }

    fn axes(
        &self,
        x_tick: f32,
        y_tick: f32,
        x_org: f32,
        y_org: f32,
        major_x: i32,
        major_y: i32,
        tick_size: f32,
    ) {
        unsafe {
            (self.symbols.axes)(x_tick, y_tick, x_org, y_org, major_x, major_y, tick_size)
        }
    }

    fn grid(&self, x_tick: f32, y_tick: f32, x_org: f32, y_org: f32, major_x: i32, major_y: i32) {
        unsafe { (self.symbols.grid)(x_tick, y_tick, x_org, y_org, major_x, major_y) }
    }

    unsafe fn verrorbars(&self, n: i32, px: &[f32], py: &[f32], e1: &[f32], e2: &[f32]) {
        (self.symbols.verrorbars)(n, px.as_ptr(), py.as_ptr(), e1.as_ptr(), e2.as_ptr())
    }

    unsafe fn herrorbars(&self, n: i32, px: &[f32], py: &[f32], e1: &[f32], e2: &[f32]) {
        (self.symbols.herrorbars)(n, px.as_ptr(), py.as_ptr(), e1.as_ptr(), e2.as_ptr())
    }

    unsafe fn polyline3d(&self, n: i32, px: &[f32], py: &[f32], pz: &[f32]) {
        (self.symbols.polyline3d)(n, px.as_ptr(), py.as_ptr(), pz.as_ptr())
    }

    fn axes3d(
        &self,
        x_tick: f32,
        y_tick: f32,
        z_tick: f32,
        x_org: f32,
        y_org: f32,
        z_org: f32,
        major_x: i32,
        major_y: i32,
        major_z: i32,
        tick_size: f32,
    ) {
        unsafe {
            (self.symbols.axes3d)(
                x_tick, y_tick, z_tick, x_org, y_org, z_org, major_x, major_y, major_z,
                tick_size,
            )
        }
    }

    fn titles3d(&self, x_title: &CStr, y_title: &CStr, z_title: &CStr) {
        unsafe { (self.symbols.titles3d)(x_title.as_ptr(), y_title.as_ptr(), z_title.as_ptr()) }
    }

    unsafe fn surface(&self, nx: i32, ny: i32, px: &[f32], py: &[f32], pz: &[f32], option: i32) {
        (self.symbols.surface)(nx, ny, px.as_ptr(), py.as_ptr(), pz.as_ptr(), option)
    }

    unsafe fn contour(
        &self,
        nx: i32,
        ny: i32,
        nh: i32,
        px: &[f32],
        py: &[f32],
        h: &[f32],
        pz: &[f32],
        major_h: i32,
    ) {
        (self.symbols.contour)(
            nx,
            ny,
            nh,
            px.as_ptr(),
            py.as_ptr(),
            h.as_ptr(),
            pz.as_ptr(),
            major_h,
        )
    }

    fn setcolormap(&self, index: i32) {
        unsafe { (self.symbols.setcolormap)(index) }
    }

    fn colormap(&self) {
        unsafe { (self.symbols.colormap)() }
    }

    fn tick(&self, amin: f32, amax: f32) -> f32 {
        unsafe { (self.symbols.tick)(amin, amax) }
    }

    fn adjustrange(&self, amin: f32, amax: f32) -> (f32, f32) {
        let (mut amin, mut amax) = (amin, amax);
        unsafe { (self.symbols.adjustrange)(&mut amin, &mut amax) };
        (amin, amax)
    }

    fn beginprint(&self, pathname: &CStr) {
        unsafe { (self.symbols.beginprint)(pathname.as_ptr()) }
    }

    fn beginprintext(&self, pathname: &CStr, mode: &CStr, format: &CStr, orientation: &CStr) {
        unsafe {
            (self.symbols.beginprintext)(
                pathname.as_ptr(),
                mode.as_ptr(),
                format.as_ptr(),
                orientation.as_ptr(),
            )
        }
    }

    fn endprint(&self) {
        unsafe { (self.symbols.endprint)() }
    }

    fn ndctowc(&self, x: f32, y: f32) -> (f32, f32) {
        let (mut x, mut y) = (x, y);
        unsafe { (self.symbols.ndctowc)(&mut x, &mut y) };
        (x, y)
    }

    fn wctondc(&self, x: f32, y: f32) -> (f32, f32) {
        let (mut x, mut y) = (x, y);
        unsafe { (self.symbols.wctondc)(&mut x, &mut y) };
        (x, y)
    }

    fn drawrect(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32) {
        unsafe { (self.symbols.drawrect)(xmin, xmax, ymin, ymax) }
    }

    fn fillrect(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32) {
        unsafe { (self.symbols.fillrect)(xmin, xmax, ymin, ymax) }
    }

    fn drawarc(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32, a1: i32, a2: i32) {
        unsafe { (self.symbols.drawarc)(xmin, xmax, ymin, ymax, a1, a2) }
    }

    fn fillarc(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32, a1: i32, a2: i32) {
        unsafe { (self.symbols.fillarc)(xmin, xmax, ymin, ymax, a1, a2) }
    }

    fn setarrowstyle(&self, style: i32) {
        unsafe { (self.symbols.setarrowstyle)(style) }
    }

    fn drawarrow(&self, x1: f32, y1: f32, x2: f32, y2: f32) {
        unsafe { (self.symbols.drawarrow)(x1, y1, x2, y2) }
    }

    unsafe fn drawimage(
        &self,
        xmin: f32,
        xmax: f32,
        ymin: f32,
        ymax: f32,
        width: i32,
        height: i32,
        data: &[i32],
    ) {
        (self.symbols.drawimage)(xmin, xmax, ymin, ymax, width, height, data.as_ptr())
    }

    fn setshadow(&self, offsetx: f32, offsety: f32, blur: f32) {
        unsafe { (self.symbols.setshadow)(offsetx, offsety, blur) }
    }

    fn settransparency(&self, alpha: f32) {
        unsafe { (self.symbols.settransparency)(alpha) }
    }

    unsafe fn setcoordxform(&self, mat: &[f32]) {
        (self.symbols.setcoordxform)(mat.as_ptr())
    }

    fn begingraphics(&self, path: &CStr) {
        unsafe { (self.symbols.begingraphics)(path.as_ptr()) }
    }

    fn endgraphics(&self) {
        unsafe { (self.symbols.endgraphics)() }
    }

    fn beginselection(&self, index: i32, kind: i32) {
        unsafe { (self.symbols.beginselection)(index, kind) }
    }

    fn endselection(&self) {
        unsafe { (self.symbols.endselection)() }
    }

    fn moveselection(&self, x: f32, y: f32) {
        unsafe { (self.symbols.moveselection)(x, y) }
    }

    fn resizeselection(&self, kind: i32, x: f32, y: f32) {
        unsafe { (self.symbols.resizeselection)(kind, x, y) }
    }

    fn inqbbox(&self) -> [f32; 4] {
        let mut b = [0.0f32; 4];
        let [xmin, xmax, ymin, ymax] = &mut b;
        unsafe { (self.symbols.inqbbox)(xmin, xmax, ymin, ymax) };
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbol_names_are_unique() {
        let names: HashSet<_> = GrSymbols::SYMBOLS.iter().collect();
        assert_eq!(names.len(), GrSymbols::SYMBOLS.len());
    }

    #[test]
    fn test_setters_bind_their_own_symbols() {
        // each setter binds the entry point of the same name
        for name in ["setmarkercolorind", "settextind", "closeseg", "closegks"] {
            assert!(GrSymbols::SYMBOLS.contains(&name), "{} not bound", name);
        }
    }
}
