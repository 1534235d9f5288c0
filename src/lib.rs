mod docx;
mod error;
mod model;
mod pdf;
mod style;

pub use error::Error;
pub use model::{
    Description, Education, Experience, KeyValue, PersonalInfo, ResumeData, Section,
    SectionContent, SectionItem, Skills,
};
pub use pdf::PdfEngine;
pub use style::StyleConfig;

use std::path::{Path, PathBuf};

pub fn generate(input: &Path, output: &Path, style: &StyleConfig) -> Result<(), Error> {
    let resume = model::load(input)?;
    let bytes = docx::render(&resume, style)?;
    std::fs::write(output, bytes).map_err(Error::Io)
}

pub fn render(resume: &ResumeData, style: &StyleConfig) -> Result<Vec<u8>, Error> {
    docx::render(resume, style)
}

/// Converts an existing DOCX file to PDF, preferring the containerized
/// converter and falling back to a local LibreOffice install.
pub fn convert_to_pdf(docx: &Path, pdf: &Path) -> Result<PdfEngine, Error> {
    pdf::convert(docx, pdf)
}

/// Appends `.docx` unless the path already carries it. Other extensions
/// are kept, so `resume.doc` becomes `resume.doc.docx`.
pub fn ensure_docx_extension(path: &Path) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some("docx") => path.to_path_buf(),
        _ => {
            let mut with_ext = path.as_os_str().to_os_string();
            with_ext.push(".docx");
            PathBuf::from(with_ext)
        }
    }
}
