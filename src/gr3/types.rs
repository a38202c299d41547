//! GR3 enumerations

native_enum! {
    /// Keys of the `gr3_init` attribute list.
    pub enum Gr3InitAttribute {
        EndOfList = 0 => "GR3_IA_END_OF_LIST",
        FramebufferWidth = 1 => "GR3_IA_FRAMEBUFFER_WIDTH",
        FramebufferHeight = 2 => "GR3_IA_FRAMEBUFFER_HEIGHT",
    }
}

native_enum! {
    /// Status codes returned by GR3 entry points.
    pub enum Gr3ErrorCode {
        None = 0 => "GR3_ERROR_NONE",
        InvalidValue = 1 => "GR3_ERROR_INVALID_VALUE",
        InvalidAttribute = 2 => "GR3_ERROR_INVALID_ATTRIBUTE",
        InitFailed = 3 => "GR3_ERROR_INIT_FAILED",
        OpenGlErr = 4 => "GR3_ERROR_OPENGL_ERR",
        OutOfMem = 5 => "GR3_ERROR_OUT_OF_MEM",
        NotInitialized = 6 => "GR3_ERROR_NOT_INITIALIZED",
        CameraNotInitialized = 7 => "GR3_ERROR_CAMERA_NOT_INITIALIZED",
        UnknownFileExtension = 8 => "GR3_ERROR_UNKNOWN_FILE_EXTENSION",
    }
}

native_enum! {
    /// Renderer and supersampling factor. The low nibble selects the
    /// renderer, the higher nibbles the SSAA factor.
    pub enum Gr3Quality {
        OpenGlNoSsaa = 0x00000 => "GR3_QUALITY_OPENGL_NO_SSAA",
        OpenGl2xSsaa = 0x00010 => "GR3_QUALITY_OPENGL_2X_SSAA",
        OpenGl4xSsaa = 0x00100 => "GR3_QUALITY_OPENGL_4X_SSAA",
        OpenGl8xSsaa = 0x01000 => "GR3_QUALITY_OPENGL_8X_SSAA",
        OpenGl16xSsaa = 0x10000 => "GR3_QUALITY_OPENGL_16X_SSAA",
        PovrayNoSsaa = 0x00001 => "GR3_QUALITY_POVRAY_NO_SSAA",
        Povray2xSsaa = 0x00011 => "GR3_QUALITY_POVRAY_2X_SSAA",
        Povray4xSsaa = 0x00101 => "GR3_QUALITY_POVRAY_4X_SSAA",
        Povray8xSsaa = 0x01001 => "GR3_QUALITY_POVRAY_8X_SSAA",
        Povray16xSsaa = 0x10001 => "GR3_QUALITY_POVRAY_16X_SSAA",
    }
}

/// Id of a mesh created by [`Gr3::createmesh`](super::Gr3::createmesh).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub(crate) i32);

impl MeshHandle {
    pub fn id(self) -> i32 {
        self.0
    }

    /// Wraps a raw mesh id handed back by a script.
    pub fn from_raw(id: i32) -> Self {
        Self(id)
    }
}

/// Flat constant namespace of the GR3 module.
pub fn constants_table() -> Vec<(&'static str, i32)> {
    Gr3InitAttribute::entries()
        .chain(Gr3ErrorCode::entries())
        .chain(Gr3Quality::entries())
        .collect()
}
