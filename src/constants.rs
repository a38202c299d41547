//! GR enumerations
//!
//! Closed enums mirroring the integer enumerations of the GR library, plus
//! the flat `(name, value)` table exported to scripts.

native_enum! {
    /// Attribute source flag: bundled or individual attributes.
    pub enum AsfMode {
        Bundled = 0 => "ASF_BUNDLED",
        Individual = 1 => "ASF_INDIVIDUAL",
    }
}

native_enum! {
    /// Clipping indicator.
    pub enum ClipIndicator {
        NoClip = 0 => "NOCLIP",
        Clip = 1 => "CLIP",
    }
}

native_enum! {
    /// Fill area interior style.
    pub enum FillInteriorStyle {
        Hollow = 0 => "INTSTYLE_HOLLOW",
        Solid = 1 => "INTSTYLE_SOLID",
        Pattern = 2 => "INTSTYLE_PATTERN",
        Hatch = 3 => "INTSTYLE_HATCH",
    }
}

native_enum! {
    pub enum TextHAlign {
        Normal = 0 => "TEXT_HALIGN_NORMAL",
        Left = 1 => "TEXT_HALIGN_LEFT",
        Center = 2 => "TEXT_HALIGN_CENTER",
        Right = 3 => "TEXT_HALIGN_RIGHT",
    }
}

native_enum! {
    pub enum TextVAlign {
        Normal = 0 => "TEXT_VALIGN_NORMAL",
        Top = 1 => "TEXT_VALIGN_TOP",
        Cap = 2 => "TEXT_VALIGN_CAP",
        Half = 3 => "TEXT_VALIGN_HALF",
        Base = 4 => "TEXT_VALIGN_BASE",
        Bottom = 5 => "TEXT_VALIGN_BOTTOM",
    }
}

native_enum! {
    pub enum TextPath {
        Right = 0 => "TEXT_PATH_RIGHT",
        Left = 1 => "TEXT_PATH_LEFT",
        Up = 2 => "TEXT_PATH_UP",
        Down = 3 => "TEXT_PATH_DOWN",
    }
}

native_enum! {
    pub enum TextPrecision {
        String = 0 => "TEXT_PRECISION_STRING",
        Char = 1 => "TEXT_PRECISION_CHAR",
        Stroke = 2 => "TEXT_PRECISION_STROKE",
    }
}

native_enum! {
    /// Line types. Negative codes are GR extensions to the GKS set.
    pub enum LineType {
        Solid = 1 => "LINETYPE_SOLID",
        Dashed = 2 => "LINETYPE_DASHED",
        Dotted = 3 => "LINETYPE_DOTTED",
        DashedDotted = 4 => "LINETYPE_DASHED_DOTTED",
        Dash2Dot = -1 => "LINETYPE_DASH_2_DOT",
        Dash3Dot = -2 => "LINETYPE_DASH_3_DOT",
        LongDash = -3 => "LINETYPE_LONG_DASH",
        LongShortDash = -4 => "LINETYPE_LONG_SHORT_DASH",
        SpacedDash = -5 => "LINETYPE_SPACED_DASH",
        SpacedDot = -6 => "LINETYPE_SPACED_DOT",
        DoubleDot = -7 => "LINETYPE_DOUBLE_DOT",
        TripleDot = -8 => "LINETYPE_TRIPLE_DOT",
    }
}

native_enum! {
    /// Marker types. Negative codes are GR extensions to the GKS set.
    pub enum MarkerType {
        Dot = 1 => "MARKERTYPE_DOT",
        Plus = 2 => "MARKERTYPE_PLUS",
        Asterisk = 3 => "MARKERTYPE_ASTERISK",
        Circle = 4 => "MARKERTYPE_CIRCLE",
        DiagonalCross = 5 => "MARKERTYPE_DIAGONAL_CROSS",
        SolidCircle = -1 => "MARKERTYPE_SOLID_CIRCLE",
        TriangleUp = -2 => "MARKERTYPE_TRIANGLE_UP",
        SolidTriUp = -3 => "MARKERTYPE_SOLID_TRI_UP",
        TriangleDown = -4 => "MARKERTYPE_TRIANGLE_DOWN",
        SolidTriDown = -5 => "MARKERTYPE_SOLID_TRI_DOWN",
        Square = -6 => "MARKERTYPE_SQUARE",
        SolidSquare = -7 => "MARKERTYPE_SOLID_SQUARE",
        Bowtie = -8 => "MARKERTYPE_BOWTIE",
        SolidBowtie = -9 => "MARKERTYPE_SOLID_BOWTIE",
        Hourglass = -10 => "MARKERTYPE_HOURGLASS",
        SolidHglass = -11 => "MARKERTYPE_SOLID_HGLASS",
        Diamond = -12 => "MARKERTYPE_DIAMOND",
        SolidDiamond = -13 => "MARKERTYPE_SOLID_DIAMOND",
        Star = -14 => "MARKERTYPE_STAR",
        SolidStar = -15 => "MARKERTYPE_SOLID_STAR",
        TriUpDown = -16 => "MARKERTYPE_TRI_UP_DOWN",
        SolidTriRight = -17 => "MARKERTYPE_SOLID_TRI_RIGHT",
        SolidTriLeft = -18 => "MARKERTYPE_SOLID_TRI_LEFT",
        HollowPlus = -19 => "MARKERTYPE_HOLLOW_PLUS",
        OMark = -20 => "MARKERTYPE_OMARK",
    }
}

/// Number of flags `gr_setasf` reads.
pub const ASF_FLAG_COUNT: usize = 13;

/// Flat constant namespace of the GR module.
pub fn table() -> Vec<(&'static str, i32)> {
    AsfMode::entries()
        .chain(ClipIndicator::entries())
        .chain(FillInteriorStyle::entries())
        .chain(TextHAlign::entries())
        .chain(TextVAlign::entries())
        .chain(TextPath::entries())
        .chain(TextPrecision::entries())
        .chain(LineType::entries())
        .chain(MarkerType::entries())
        .collect()
}
