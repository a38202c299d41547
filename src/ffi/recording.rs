//! In-process native backend
//!
//! [`RecordingBackend`] implements both [`GrNative`] and [`Gr3Native`] without
//! touching a shared library. Every entry point is appended to a call log
//! together with the exact buffers it was handed, queries answer from
//! [`QueryReplies`] and GR3 status codes can be forced per symbol. Used by the
//! test suite and by `grscript --dry-run`.

use std::collections::HashMap;
use std::ffi::{CStr, CString};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::gr3_sys::{Gr3Native, LogCallbackFn};
use super::gr_sys::GrNative;
use self::NativeArg::{Float, Int};

/// One argument as it crossed the native boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeArg {
    Int(i32),
    Float(f32),
    Floats(Vec<f32>),
    Ints(Vec<i32>),
    /// Encoded text including its terminator.
    Text(Vec<u8>),
    /// Output buffer of the given length in bytes.
    OutBuffer(usize),
    /// Whether a callback pointer (rather than NULL) was passed.
    Callback(bool),
}

impl NativeArg {
    pub fn as_floats(&self) -> Option<&[f32]> {
        match self {
            NativeArg::Floats(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_ints(&self) -> Option<&[i32]> {
        match self {
            NativeArg::Ints(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&[u8]> {
        match self {
            NativeArg::Text(bytes) => Some(bytes),
            _ => None,
        }
    }
}

/// A recorded native call.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeCall {
    /// Full native symbol, e.g. `gr_polyline`.
    pub symbol: &'static str,
    pub args: Vec<NativeArg>,
}

/// Values the recorder answers queries with.
#[derive(Debug, Clone)]
pub struct QueryReplies {
    pub dspsize: (f32, f32, i32, i32),
    pub window: [f32; 4],
    pub space: (f32, f32, i32, i32),
    pub scale: i32,
    pub textext: ([f32; 4], [f32; 4]),
    pub bbox: [f32; 4],
    pub tick: f32,
    pub render_path: Vec<u8>,
    /// Byte every `gr3_getimage` pixel buffer is filled with.
    pub image_fill: u8,
}

impl_default!(QueryReplies {
    dspsize: (0.3, 0.2, 1920, 1080),
    window: [0.0, 1.0, 0.0, 1.0],
    space: (0.0, 1.0, 0, 90),
    scale: 0,
    textext: ([0.0; 4], [0.0; 4]),
    bbox: [0.0, 1.0, 0.0, 1.0],
    tick: 0.1,
    render_path: b"recording".to_vec(),
    image_fill: 0,
});

/// Native backend that records calls instead of drawing.
pub struct RecordingBackend {
    calls: Mutex<Vec<NativeCall>>,
    replies: Mutex<QueryReplies>,
    statuses: Mutex<HashMap<&'static str, i32>>,
    log_callback: Mutex<Option<LogCallbackFn>>,
    next_mesh: AtomicI32,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::with_replies(QueryReplies::default())
    }

    pub fn with_replies(replies: QueryReplies) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            replies: Mutex::new(replies),
            statuses: Mutex::new(HashMap::new()),
            log_callback: Mutex::new(None),
            next_mesh: AtomicI32::new(1),
        }
    }

    /// Makes every later call of `symbol` return `code`.
    pub fn fail_with(&self, symbol: &'static str, code: i32) {
        lock(&self.statuses).insert(symbol, code);
    }

    pub fn set_replies(&self, replies: QueryReplies) {
        *lock(&self.replies) = replies;
    }

    pub fn calls(&self) -> Vec<NativeCall> {
        lock(&self.calls).clone()
    }

    pub fn last_call(&self) -> Option<NativeCall> {
        lock(&self.calls).last().cloned()
    }

    /// Recorded symbols, in call order.
    pub fn symbols(&self) -> Vec<&'static str> {
        lock(&self.calls).iter().map(|call| call.symbol).collect()
    }

    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    /// Delivers a log event through the function registered with
    /// `gr3_setlogcallback`, as the native library would.
    ///
    /// Returns `false` when no function is registered.
    pub fn emit_log(&self, message: &str) -> bool {
        let Some(callback) = *lock(&self.log_callback) else {
            return false;
        };
        let Ok(message) = CString::new(message) else {
            return false;
        };
        // the registered function expects a zero-terminated string that
        // stays valid for the duration of the call
        unsafe { callback(message.as_ptr()) };
        true
    }

    fn record(&self, symbol: &'static str, args: Vec<NativeArg>) {
        lock(&self.calls).push(NativeCall { symbol, args });
    }

    fn status(&self, symbol: &'static str) -> i32 {
        lock(&self.statuses).get(symbol).copied().unwrap_or(0)
    }

    fn replies(&self) -> QueryReplies {
        lock(&self.replies).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn text(string: &CStr) -> NativeArg {
    NativeArg::Text(string.to_bytes_with_nul().to_vec())
}

fn floats(values: &[f32]) -> NativeArg {
    NativeArg::Floats(values.to_vec())
}

fn ints(values: &[i32]) -> NativeArg {
    NativeArg::Ints(values.to_vec())
}

impl GrNative for RecordingBackend {
    fn opengks(&self) {
        self.record("gr_opengks", vec![]);
    }

    fn closegks(&self) {
        self.record("gr_closegks", vec![]);
    }

    fn emergencyclosegks(&self) {
        self.record("gr_emergencyclosegks", vec![]);
    }

    fn updategks(&self) {
        self.record("gr_updategks", vec![]);
    }

    fn inqdspsize(&self) -> (f32, f32, i32, i32) {
        self.record("gr_inqdspsize", vec![]);
        self.replies().dspsize
    }

    fn openws(&self, workstation_id: i32, connection: &CStr, ws_type: i32) {
        self.record(
            "gr_openws",
            vec![Int(workstation_id), text(connection), Int(ws_type)],
        );
    }

    fn closews(&self, workstation_id: i32) {
        self.record("gr_closews", vec![Int(workstation_id)]);
    }

    fn activatews(&self, workstation_id: i32) {
        self.record("gr_activatews", vec![Int(workstation_id)]);
    }

    fn deactivatews(&self, workstation_id: i32) {
        self.record("gr_deactivatews", vec![Int(workstation_id)]);
    }

    fn clearws(&self) {
        self.record("gr_clearws", vec![]);
    }

    fn updatews(&self) {
        self.record("gr_updatews", vec![]);
    }

    unsafe fn polyline(&self, n: i32, x: &[f32], y: &[f32]) {
        self.record("gr_polyline", vec![Int(n), floats(x), floats(y)]);
    }

    unsafe fn polymarker(&self, n: i32, x: &[f32], y: &[f32]) {
        self.record("gr_polymarker", vec![Int(n), floats(x), floats(y)]);
    }

    fn text(&self, x: f32, y: f32, string: &CStr) {
        self.record("gr_text", vec![Float(x), Float(y), text(string)]);
    }

    unsafe fn fillarea(&self, n: i32, x: &[f32], y: &[f32]) {
        self.record("gr_fillarea", vec![Int(n), floats(x), floats(y)]);
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
        self.record(
            "gr_cellarray",
            vec![
                Float(xmin),
                Float(xmax),
                Float(ymin),
                Float(ymax),
                Int(dimx),
                Int(dimy),
                Int(scol),
                Int(srow),
                Int(ncol),
                Int(nrow),
                ints(color),
            ],
        );
    }

    unsafe fn spline(&self, n: i32, px: &[f32], py: &[f32], m: i32, method: i32) {
        self.record(
            "gr_spline",
            vec![Int(n), floats(px), floats(py), Int(m), Int(method)],
        );
    }

    unsafe fn setasf(&self, flags: &[i32]) {
        self.record("gr_setasf", vec![ints(flags)]);
    }

    fn setlineind(&self, index: i32) {
        self.record("gr_setlineind", vec![Int(index)]);
    }

    fn setlinetype(&self, line_type: i32) {
        self.record("gr_setlinetype", vec![Int(line_type)]);
    }

    fn setlinewidth(&self, width: f32) {
        self.record("gr_setlinewidth", vec![Float(width)]);
    }

    fn setlinecolorind(&self, color: i32) {
        self.record("gr_setlinecolorind", vec![Int(color)]);
    }

    fn setmarkerind(&self, index: i32) {
        self.record("gr_setmarkerind", vec![Int(index)]);
    }

    fn setmarkertype(&self, marker_type: i32) {
        self.record("gr_setmarkertype", vec![Int(marker_type)]);
    }

    fn setmarkersize(&self, size: f32) {
        self.record("gr_setmarkersize", vec![Float(size)]);
    }

    fn setmarkercolorind(&self, color: i32) {
        self.record("gr_setmarkercolorind", vec![Int(color)]);
    }

    fn settextind(&self, index: i32) {
        self.record("gr_settextind", vec![Int(index)]);
    }

    fn settextfontprec(&self, font: i32, precision: i32) {
        self.record("gr_settextfontprec", vec![Int(font), Int(precision)]);
    }

    fn setcharexpan(&self, factor: f32) {
        self.record("gr_setcharexpan", vec![Float(factor)]);
    }

    fn setcharspace(&self, spacing: f32) {
        self.record("gr_setcharspace", vec![Float(spacing)]);
    }

    fn settextcolorind(&self, color: i32) {
        self.record("gr_settextcolorind", vec![Int(color)]);
    }

    fn setcharheight(&self, height: f32) {
        self.record("gr_setcharheight", vec![Float(height)]);
    }

    fn setcharup(&self, ux: f32, uy: f32) {
        self.record("gr_setcharup", vec![Float(ux), Float(uy)]);
    }

    fn settextpath(&self, path: i32) {
        self.record("gr_settextpath", vec![Int(path)]);
    }

    fn settextalign(&self, horizontal: i32, vertical: i32) {
        self.record("gr_settextalign", vec![Int(horizontal), Int(vertical)]);
    }

    fn setfillind(&self, index: i32) {
        self.record("gr_setfillind", vec![Int(index)]);
    }

    fn setfillintstyle(&self, style: i32) {
        self.record("gr_setfillintstyle", vec![Int(style)]);
    }

    fn setfillstyle(&self, index: i32) {
        self.record("gr_setfillstyle", vec![Int(index)]);
    }

    fn setfillcolorind(&self, color: i32) {
        self.record("gr_setfillcolorind", vec![Int(color)]);
    }

    fn setcolorrep(&self, index: i32, red: f32, green: f32, blue: f32) {
        self.record(
            "gr_setcolorrep",
            vec![Int(index), Float(red), Float(green), Float(blue)],
        );
    }

    fn setscale(&self, options: i32) -> i32 {
        self.record("gr_setscale", vec![Int(options)]);
        self.status("gr_setscale")
    }

    fn inqscale(&self) -> i32 {
        self.record("gr_inqscale", vec![]);
        self.replies().scale
    }

    fn setwindow(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32) {
        self.record(
            "gr_setwindow",
            vec![Float(xmin), Float(xmax), Float(ymin), Float(ymax)],
        );
    }

    fn inqwindow(&self) -> [f32; 4] {
        self.record("gr_inqwindow", vec![]);
        self.replies().window
    }

    fn setviewport(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32) {
        self.record(
            "gr_setviewport",
            vec![Float(xmin), Float(xmax), Float(ymin), Float(ymax)],
        );
    }

    fn selntran(&self, transform: i32) {
        self.record("gr_selntran", vec![Int(transform)]);
    }

    fn setclip(&self, indicator: i32) {
        self.record("gr_setclip", vec![Int(indicator)]);
    }

    fn setwswindow(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32) {
        self.record(
            "gr_setwswindow",
            vec![Float(xmin), Float(xmax), Float(ymin), Float(ymax)],
        );
    }

    fn setwsviewport(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32) {
        self.record(
            "gr_setwsviewport",
            vec![Float(xmin), Float(xmax), Float(ymin), Float(ymax)],
        );
    }

    fn createseg(&self, segment: i32) {
        self.record("gr_createseg", vec![Int(segment)]);
    }

    fn copysegws(&self, segment: i32) {
        self.record("gr_copysegws", vec![Int(segment)]);
    }

    fn redrawsegws(&self) {
        self.record("gr_redrawsegws", vec![]);
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
        self.record(
            "gr_setsegtran",
            vec![
                Int(segment),
                Float(fx),
                Float(fy),
                Float(transx),
                Float(transy),
                Float(phi),
                Float(scalex),
                Float(scaley),
            ],
        );
    }

    fn closeseg(&self) {
        self.record("gr_closeseg", vec![]);
    }

    fn setspace(&self, zmin: f32, zmax: f32, rotation: i32, tilt: i32) -> i32 {
        self.record(
            "gr_setspace",
            vec![Float(zmin), Float(zmax), Int(rotation), Int(tilt)],
        );
        self.status("gr_setspace")
    }

    fn inqspace(&self) -> (f32, f32, i32, i32) {
        self.record("gr_inqspace", vec![]);
        self.replies().space
    }

    fn textext(&self, x: f32, y: f32, string: &CStr) -> i32 {
        self.record("gr_textext", vec![Float(x), Float(y), text(string)]);
        self.status("gr_textext")
    }

    fn inqtextext(&self, x: f32, y: f32, string: &CStr) -> ([f32; 4], [f32; 4]) {
        self.record(
            "gr_inqtextext",
            vec![
                Float(x),
                Float(y),
                text(string),
                NativeArg::OutBuffer(4),
                NativeArg::OutBuffer(4),
            ],
        );
        self.replies().textext
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
        self.record(
            "gr_axes",
            vec![
                Float(x_tick),
                Float(y_tick),
                Float(x_org),
                Float(y_org),
                Int(major_x),
                Int(major_y),
                Float(tick_size),
            ],
        );
    }

    fn grid(&self, x_tick: f32, y_tick: f32, x_org: f32, y_org: f32, major_x: i32, major_y: i32) {
        self.record(
            "gr_grid",
            vec![
                Float(x_tick),
                Float(y_tick),
                Float(x_org),
                Float(y_org),
                Int(major_x),
                Int(major_y),
            ],
        );
    }

    unsafe fn verrorbars(&self, n: i32, px: &[f32], py: &[f32], e1: &[f32], e2: &[f32]) {
        self.record(
            "gr_verrorbars",
            vec![Int(n), floats(px), floats(py), floats(e1), floats(e2)],
        );
    }

    unsafe fn herrorbars(&self, n: i32, px: &[f32], py: &[f32], e1: &[f32], e2: &[f32]) {
        self.record(
            "gr_herrorbars",
            vec![Int(n), floats(px), floats(py), floats(e1), floats(e2)],
        );
    }

    unsafe fn polyline3d(&self, n: i32, px: &[f32], py: &[f32], pz: &[f32]) {
        self.record(
            "gr_polyline3d",
            vec![Int(n), floats(px), floats(py), floats(pz)],
        );
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
        self.record(
            "gr_axes3d",
            vec![
                Float(x_tick),
                Float(y_tick),
                Float(z_tick),
                Float(x_org),
                Float(y_org),
                Float(z_org),
                Int(major_x),
                Int(major_y),
                Int(major_z),
                Float(tick_size),
            ],
        );
    }

    fn titles3d(&self, x_title: &CStr, y_title: &CStr, z_title: &CStr) {
        self.record(
            "gr_titles3d",
            vec![text(x_title), text(y_title), text(z_title)],
        );
    }

    unsafe fn surface(&self, nx: i32, ny: i32, px: &[f32], py: &[f32], pz: &[f32], option: i32) {
        self.record(
            "gr_surface",
            vec![
                Int(nx),
                Int(ny),
                floats(px),
                floats(py),
                floats(pz),
                Int(option),
            ],
        );
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
        self.record(
            "gr_contour",
            vec![
                Int(nx),
                Int(ny),
                Int(nh),
                floats(px),
                floats(py),
                floats(h),
                floats(pz),
                Int(major_h),
            ],
        );
    }

    fn setcolormap(&self, index: i32) {
        self.record("gr_setcolormap", vec![Int(index)]);
    }

    fn colormap(&self) {
        self.record("gr_colormap", vec![]);
    }

    fn tick(&self, amin: f32, amax: f32) -> f32 {
        self.record("gr_tick", vec![Float(amin), Float(amax)]);
        self.replies().tick
    }

    fn adjustrange(&self, amin: f32, amax: f32) -> (f32, f32) {
        self.record("gr_adjustrange", vec![Float(amin), Float(amax)]);
        (amin, amax)
    }

    fn beginprint(&self, pathname: &CStr) {
        self.record("gr_beginprint", vec![text(pathname)]);
    }

    fn beginprintext(&self, pathname: &CStr, mode: &CStr, format: &CStr, orientation: &CStr) {
        self.record(
            "gr_beginprintext",
            vec![text(pathname), text(mode), text(format), text(orientation)],
        );
    }

    fn endprint(&self) {
        self.record("gr_endprint", vec![]);
    }

    fn ndctowc(&self, x: f32, y: f32) -> (f32, f32) {
        self.record("gr_ndctowc", vec![Float(x), Float(y)]);
        (x, y)
    }

    fn wctondc(&self, x: f32, y: f32) -> (f32, f32) {
        self.record("gr_wctondc", vec![Float(x), Float(y)]);
        (x, y)
    }

    fn drawrect(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32) {
        self.record(
            "gr_drawrect",
            vec![Float(xmin), Float(xmax), Float(ymin), Float(ymax)],
        );
    }

    fn fillrect(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32) {
        self.record(
            "gr_fillrect",
            vec![Float(xmin), Float(xmax), Float(ymin), Float(ymax)],
        );
    }

    fn drawarc(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32, a1: i32, a2: i32) {
        self.record(
            "gr_drawarc",
            vec![
                Float(xmin),
                Float(xmax),
                Float(ymin),
                Float(ymax),
                Int(a1),
                Int(a2),
            ],
        );
    }

    fn fillarc(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32, a1: i32, a2: i32) {
        self.record(
            "gr_fillarc",
            vec![
                Float(xmin),
                Float(xmax),
                Float(ymin),
                Float(ymax),
                Int(a1),
                Int(a2),
            ],
        );
    }

    fn setarrowstyle(&self, style: i32) {
        self.record("gr_setarrowstyle", vec![Int(style)]);
    }

    fn drawarrow(&self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.record(
            "gr_drawarrow",
            vec![Float(x1), Float(y1), Float(x2), Float(y2)],
        );
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
        self.record(
            "gr_drawimage",
            vec![
                Float(xmin),
                Float(xmax),
                Float(ymin),
                Float(ymax),
                Int(width),
                Int(height),
                ints(data),
            ],
        );
    }

    fn setshadow(&self, offsetx: f32, offsety: f32, blur: f32) {
        self.record(
            "gr_setshadow",
            vec![Float(offsetx), Float(offsety), Float(blur)],
        );
    }

    fn settransparency(&self, alpha: f32) {
        self.record("gr_settransparency", vec![Float(alpha)]);
    }

    unsafe fn setcoordxform(&self, mat: &[f32]) {
        self.record("gr_setcoordxform", vec![floats(mat)]);
    }

    fn begingraphics(&self, path: &CStr) {
        self.record("gr_begingraphics", vec![text(path)]);
    }

    fn endgraphics(&self) {
        self.record("gr_endgraphics", vec![]);
    }

    fn beginselection(&self, index: i32, kind: i32) {
        self.record("gr_beginselection", vec![Int(index), Int(kind)]);
    }

    fn endselection(&self) {
        self.record("gr_endselection", vec![]);
    }

    fn moveselection(&self, x: f32, y: f32) {
        self.record("gr_moveselection", vec![Float(x), Float(y)]);
    }

    fn resizeselection(&self, kind: i32, x: f32, y: f32) {
        self.record("gr_resizeselection", vec![Int(kind), Float(x), Float(y)]);
    }

    fn inqbbox(&self) -> [f32; 4] {
        self.record("gr_inqbbox", vec![]);
        self.replies().bbox
    }
}

impl Gr3Native for RecordingBackend {
    unsafe fn init(&self, attrib_list: &[i32]) -> i32 {
        self.record("gr3_init", vec![ints(attrib_list)]);
        self.status("gr3_init")
    }

    fn terminate(&self) {
        self.record("gr3_terminate", vec![]);
    }

    fn clear(&self) -> i32 {
        self.record("gr3_clear", vec![]);
        self.status("gr3_clear")
    }

    fn setbackgroundcolor(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record(
            "gr3_setbackgroundcolor",
            vec![Float(red), Float(green), Float(blue), Float(alpha)],
        );
    }

    unsafe fn createmesh(&self, n: i32, vertices: &[f32], normals: &[f32], colors: &[f32]) -> (i32, i32) {
        self.record(
            "gr3_createmesh",
            vec![Int(n), floats(vertices), floats(normals), floats(colors)],
        );
        match self.status("gr3_createmesh") {
            0 => (0, self.next_mesh.fetch_add(1, Ordering::Relaxed)),
            status => (status, 0),
        }
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
        self.record(
            "gr3_drawmesh",
            vec![
                Int(mesh),
                Int(n),
                floats(positions),
                floats(directions),
                floats(ups),
                floats(colors),
                floats(scales),
            ],
        );
    }

    fn deletemesh(&self, mesh: i32) {
        self.record("gr3_deletemesh", vec![Int(mesh)]);
    }

    fn setlightdirection(&self, x: f32, y: f32, z: f32) {
        self.record("gr3_setlightdirection", vec![Float(x), Float(y), Float(z)]);
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
        self.record(
            "gr3_cameralookat",
            vec![
                Float(camera_x),
                Float(camera_y),
                Float(camera_z),
                Float(center_x),
                Float(center_y),
                Float(center_z),
                Float(up_x),
                Float(up_y),
                Float(up_z),
            ],
        );
    }

    fn setcameraprojectionparameters(&self, fovy: f32, znear: f32, zfar: f32) -> i32 {
        self.record(
            "gr3_setcameraprojectionparameters",
            vec![Float(fovy), Float(znear), Float(zfar)],
        );
        self.status("gr3_setcameraprojectionparameters")
    }

    fn renderdirect(&self, width: i32, height: i32) {
        self.record("gr3_renderdirect", vec![Int(width), Int(height)]);
    }

    fn drawscene(&self, xmin: f32, xmax: f32, ymin: f32, ymax: f32, width: i32, height: i32) -> i32 {
        self.record(
            "gr3_drawscene",
            vec![
                Float(xmin),
                Float(xmax),
                Float(ymin),
                Float(ymax),
                Int(width),
                Int(height),
            ],
        );
        self.status("gr3_drawscene")
    }

    fn setquality(&self, quality: i32) -> i32 {
        self.record("gr3_setquality", vec![Int(quality)]);
        self.status("gr3_setquality")
    }

    unsafe fn getimage(&self, width: i32, height: i32, use_alpha: bool, pixels: &mut [u8]) -> i32 {
        self.record(
            "gr3_getimage",
            vec![
                Int(width),
                Int(height),
                Int(i32::from(use_alpha)),
                NativeArg::OutBuffer(pixels.len()),
            ],
        );
        let status = self.status("gr3_getimage");
        if status == 0 {
            pixels.fill(self.replies().image_fill);
        }
        status
    }

    fn export(&self, filename: &CStr, width: i32, height: i32) -> i32 {
        self.record(
            "gr3_export",
            vec![text(filename), Int(width), Int(height)],
        );
        self.status("gr3_export")
    }

    fn setlogcallback(&self, callback: Option<LogCallbackFn>) {
        self.record(
            "gr3_setlogcallback",
            vec![NativeArg::Callback(callback.is_some())],
        );
        *lock(&self.log_callback) = callback;
    }

    fn getrenderpathstring(&self) -> Vec<u8> {
        self.record("gr3_getrenderpathstring", vec![]);
        self.replies().render_path
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
        self.record(
            "gr3_drawcylindermesh",
            vec![
                Int(n),
                floats(positions),
                floats(directions),
                floats(colors),
                floats(radii),
                floats(lengths),
            ],
        );
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
        self.record(
            "gr3_drawconemesh",
            vec![
                Int(n),
                floats(positions),
                floats(directions),
                floats(colors),
                floats(radii),
                floats(lengths),
            ],
        );
    }

    unsafe fn drawspheremesh(&self, n: i32, positions: &[f32], colors: &[f32], radii: &[f32]) {
        self.record(
            "gr3_drawspheremesh",
            vec![Int(n), floats(positions), floats(colors), floats(radii)],
        );
    }
}
