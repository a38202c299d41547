//! Segments, print and graphics output, interactive selection

use super::Gr;
use crate::error::BindingResult;
use crate::marshal::encode_text;

impl Gr {
    pub fn createseg(&self, segment: i32) {
        self.native.createseg(segment);
    }

    pub fn copysegws(&self, segment: i32) {
        self.native.copysegws(segment);
    }

    pub fn redrawsegws(&self) {
        self.native.redrawsegws();
    }

    #[allow(clippy::too_many_arguments)]
    pub fn setsegtran(
        &self,
        segment: i32,
        fx: f64,
        fy: f64,
        transx: f64,
        transy: f64,
        phi: f64,
        scalex: f64,
        scaley: f64,
    ) {
        self.native.setsegtran(
            segment,
            fx as f32,
            fy as f32,
            transx as f32,
            transy as f32,
            phi as f32,
            scalex as f32,
            scaley as f32,
        );
    }

    pub fn closeseg(&self) {
        self.native.closeseg();
    }

    /// Redirects output to `pathname`; the format follows its extension.
    pub fn beginprint(&self, pathname: &str) -> BindingResult<()> {
        let pathname = encode_text(pathname)?;
        self.native.beginprint(&pathname);
        Ok(())
    }

    pub fn beginprintext(
        &self,
        pathname: &str,
        mode: &str,
        format: &str,
        orientation: &str,
    ) -> BindingResult<()> {
        let pathname = encode_text(pathname)?;
        let mode = encode_text(mode)?;
        let format = encode_text(format)?;
        let orientation = encode_text(orientation)?;
        self.native
            .beginprintext(&pathname, &mode, &format, &orientation);
        Ok(())
    }

    pub fn endprint(&self) {
        self.native.endprint();
    }

    pub fn begingraphics(&self, path: &str) -> BindingResult<()> {
        let path = encode_text(path)?;
        self.native.begingraphics(&path);
        Ok(())
    }

    pub fn endgraphics(&self) {
        self.native.endgraphics();
    }

    pub fn beginselection(&self, index: i32, kind: i32) {
        self.native.beginselection(index, kind);
    }

    pub fn endselection(&self) {
        self.native.endselection();
    }

    pub fn moveselection(&self, x: f64, y: f64) {
        self.native.moveselection(x as f32, y as f32);
    }

    pub fn resizeselection(&self, kind: i32, x: f64, y: f64) {
        self.native.resizeselection(kind, x as f32, y as f32);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::ffi::{NativeArg, RecordingBackend};

    #[test]
    fn test_closeseg_is_not_closegks() {
        let backend = Arc::new(RecordingBackend::new());
        let gr = Gr::with_backend(backend.clone());
        gr.createseg(1);
        gr.closeseg();
        assert_eq!(backend.symbols(), vec!["gr_createseg", "gr_closeseg"]);
    }

    #[test]
    fn test_beginprintext_encodes_every_string() {
        let backend = Arc::new(RecordingBackend::new());
        let gr = Gr::with_backend(backend.clone());
        gr.beginprintext("out.ps", "Color", "A4", "Landscape").unwrap();

        let call = backend.last_call().unwrap();
        let texts: Vec<_> = call.args.iter().filter_map(NativeArg::as_text).collect();
        assert_eq!(
            texts,
            vec![&b"out.ps\0"[..], &b"Color\0"[..], &b"A4\0"[..], &b"Landscape\0"[..]]
        );
    }

    #[test]
    fn test_print_path_encoding_error() {
        let backend = Arc::new(RecordingBackend::new());
        let gr = Gr::with_backend(backend.clone());
        assert!(gr.beginprint("\u{1F4C8}.pdf").is_err());
        assert!(backend.calls().is_empty());
    }
}
