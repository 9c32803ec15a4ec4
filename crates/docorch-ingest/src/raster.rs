//! Page rasterizers for the OCR tier
//!
//! Both implementations shell out to a renderer and collect the PNG files it
//! writes, ordered by page number.

use crate::error::IngestError;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Renders every page of a PDF file to an image
pub trait Rasterizer {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Render `pdf` into `out_dir`, returning one image path per page in order
    fn rasterize(&self, pdf: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, IngestError>;
}

/// Poppler's `pdftoppm`
#[derive(Debug, Clone)]
pub struct PdftoppmRasterizer {
    binary: String,
    dpi: u32,
}

impl PdftoppmRasterizer {
    /// Create a rasterizer using `binary` at `dpi`
    pub fn new(binary: impl Into<String>, dpi: u32) -> Self {
        Self {
            binary: binary.into(),
            dpi,
        }
    }
}

impl Rasterizer for PdftoppmRasterizer {
    fn name(&self) -> &'static str {
        "pdftoppm"
    }

    fn rasterize(&self, pdf: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
        // pdftoppm appends "-<N>.png" to the root itself
        let root = out_dir.join(PAGE_ROOT);
        let mut command = Command::new(&self.binary);
        command
            .arg("-r")
            .arg(self.dpi.to_string())
            .arg("-png")
            .arg(pdf)
            .arg(&root);
        run_tool(&mut command, &self.binary)?;
        collect_page_images(out_dir, self.name())
    }
}

/// MuPDF's `mutool draw`
#[derive(Debug, Clone)]
pub struct MutoolRasterizer {
    binary: String,
    dpi: u32,
}

impl MutoolRasterizer {
    /// Create a rasterizer using `binary` at `dpi`
    pub fn new(binary: impl Into<String>, dpi: u32) -> Self {
        Self {
            binary: binary.into(),
            dpi,
        }
    }
}

impl Rasterizer for MutoolRasterizer {
    fn name(&self) -> &'static str {
        "mutool"
    }

    fn rasterize(&self, pdf: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
        let pattern = out_dir.join(format!("{}%d.png", PAGE_PREFIX));
        let mut command = Command::new(&self.binary);
        command
            .arg("draw")
            .arg("-q")
            .arg("-r")
            .arg(self.dpi.to_string())
            .arg("-o")
            .arg(&pattern)
            .arg(pdf);
        run_tool(&mut command, &self.binary)?;
        collect_page_images(out_dir, self.name())
    }
}

const PAGE_ROOT: &str = "page";
const PAGE_PREFIX: &str = "page-";

/// Run an external tool, returning its stdout
pub(crate) fn run_tool(command: &mut Command, tool: &str) -> Result<String, IngestError> {
    let output = command.output().map_err(|e| IngestError::Tool {
        tool: tool.to_string(),
        message: e.to_string(),
    })?;

    if !output.status.success() {
        return Err(IngestError::Tool {
            tool: tool.to_string(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Page images in `dir`, sorted by the page number after `page-`
pub(crate) fn collect_page_images(dir: &Path, tool: &str) -> Result<Vec<PathBuf>, IngestError> {
    let mut pages: Vec<(u32, PathBuf)> = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension() != Some(OsStr::new("png")) {
            continue;
        }
        let number = path
            .file_stem()
            .and_then(OsStr::to_str)
            .and_then(|stem| stem.strip_prefix(PAGE_PREFIX))
            .and_then(|digits| digits.parse::<u32>().ok());
        if let Some(number) = number {
            pages.push((number, path));
        }
    }

    if pages.is_empty() {
        return Err(IngestError::NoPages(tool.to_string()));
    }

    pages.sort_by_key(|(number, _)| *number);
    Ok(pages.into_iter().map(|(_, path)| path).collect())
}
