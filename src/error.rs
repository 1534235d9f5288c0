use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    InputNotFound(PathBuf),
    MalformedInput(serde_json::Error),
    Docx(docx_rs::DocxError),
    Io(std::io::Error),
    ConversionUnavailable(String),
    ConversionFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputNotFound(path) => {
                write!(f, "resume data file not found: {}", path.display())
            }
            Error::MalformedInput(e) => write!(f, "invalid JSON in resume data: {e}"),
            Error::Docx(e) => write!(f, "DOCX error: {e}"),
            Error::Io(e) => write!(f, "IO error: {e}"),
            Error::ConversionUnavailable(reason) => {
                write!(f, "no PDF converter available: {reason}")
            }
            Error::ConversionFailed(reason) => write!(f, "PDF conversion failed: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// A hint the CLI can print below the error line, where one exists.
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            Error::InputNotFound(_) => Some(
                "Create the file or point --input at an existing resume JSON file.",
            ),
            Error::ConversionUnavailable(_) => Some(
                "To create a PDF you need one of:\n\
                 1. Docker with the converter image: docker pull linuxserver/libreoffice:latest\n\
                 2. A local LibreOffice install with soffice (or libreoffice) on PATH.",
            ),
            Error::ConversionFailed(_) => Some(
                "Check that the Docker daemon is running and the converter image works,\n\
                 or that the local LibreOffice installation can open the document.",
            ),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::MalformedInput(e)
    }
}

impl From<docx_rs::DocxError> for Error {
    fn from(e: docx_rs::DocxError) -> Self {
        Error::Docx(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
