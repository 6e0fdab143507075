//! Drawing export formats.

use std::fmt;

/// Drawing format served by the remote drawing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Pdf,
    Dxf,
    Dwg,
}

impl ExportFormat {
    /// All formats in display order.
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Pdf, ExportFormat::Dxf, ExportFormat::Dwg];

    /// Service endpoint path for this format.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "/api/draw-pdf",
            ExportFormat::Dxf => "/api/draw-dxf",
            ExportFormat::Dwg => "/api/draw-dwg",
        }
    }

    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Dxf => "dxf",
            ExportFormat::Dwg => "dwg",
        }
    }

    /// Short uppercase label for buttons and notices.
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Dxf => "DXF",
            ExportFormat::Dwg => "DWG",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
