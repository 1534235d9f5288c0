use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use log::warn;

use crate::error::Error;

const DOCKER_IMAGE_VAR: &str = "LIBREOFFICE_DOCKER_IMAGE";
const DEFAULT_DOCKER_IMAGE: &str = "linuxserver/libreoffice:latest";

/// Local converter binaries, probed in order.
const LOCAL_CONVERTERS: [&str; 2] = ["soffice", "libreoffice"];

/// Which converter ended up producing the PDF.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PdfEngine {
    Container,
    Local,
}

impl fmt::Display for PdfEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfEngine::Container => f.write_str("Docker LibreOffice"),
            PdfEngine::Local => f.write_str("local LibreOffice"),
        }
    }
}

enum LocalFailure {
    NotInstalled,
    Runtime(String),
}

/// Conversion progress. Each attempt runs at most once and the machine
/// only moves forward.
enum State {
    NotStarted,
    TriedContainer {
        outcome: Result<(), String>,
    },
    TriedFallback {
        container_gap: String,
        outcome: Result<(), LocalFailure>,
    },
    Succeeded(PdfEngine),
    Failed(Error),
}

pub fn convert(docx: &Path, pdf: &Path) -> Result<PdfEngine, Error> {
    let mut state = State::NotStarted;
    loop {
        state = match state {
            State::NotStarted => State::TriedContainer {
                outcome: convert_in_container(docx, pdf),
            },
            State::TriedContainer { outcome: Ok(()) } => State::Succeeded(PdfEngine::Container),
            State::TriedContainer { outcome: Err(gap) } => {
                warn!("container conversion unavailable ({gap}), trying local LibreOffice");
                State::TriedFallback {
                    container_gap: gap,
                    outcome: convert_with_local_install(docx, pdf),
                }
            }
            State::TriedFallback {
                outcome: Ok(()), ..
            } => State::Succeeded(PdfEngine::Local),
            State::TriedFallback {
                container_gap,
                outcome: Err(LocalFailure::NotInstalled),
            } => State::Failed(Error::ConversionUnavailable(format!(
                "{container_gap}; no local LibreOffice (soffice) on PATH"
            ))),
            State::TriedFallback {
                outcome: Err(LocalFailure::Runtime(reason)),
                ..
            } => State::Failed(Error::ConversionFailed(reason)),
            State::Succeeded(engine) => return Ok(engine),
            State::Failed(error) => return Err(error),
        };
    }
}

fn convert_in_container(docx: &Path, pdf: &Path) -> Result<(), String> {
    if find_executable("docker").is_none() {
        return Err("docker not installed or not on PATH".to_string());
    }

    let docx_abs =
        std::path::absolute(docx).map_err(|e| format!("cannot resolve document path: {e}"))?;
    let (work_dir, docx_name) = split_document_path(&docx_abs)?;
    let image = env::var(DOCKER_IMAGE_VAR).unwrap_or_else(|_| DEFAULT_DOCKER_IMAGE.to_string());

    let output = Command::new("docker")
        .args(["run", "--rm", "-v"])
        .arg(format!("{}:/convert", work_dir.display()))
        .arg(&image)
        .args(["libreoffice", "--headless", "--convert-to", "pdf"])
        .args(["--outdir", "/convert"])
        .arg(format!("/convert/{docx_name}"))
        .output()
        .map_err(|e| format!("failed to run docker: {e}"))?;

    if !output.status.success() {
        return Err(command_failure("docker run", &output));
    }
    relocate_produced_pdf(&docx_abs, pdf)
}

fn convert_with_local_install(docx: &Path, pdf: &Path) -> Result<(), LocalFailure> {
    let Some(converter) = LOCAL_CONVERTERS.iter().find_map(|name| find_executable(name)) else {
        return Err(LocalFailure::NotInstalled);
    };

    let docx_abs = std::path::absolute(docx)
        .map_err(|e| LocalFailure::Runtime(format!("cannot resolve document path: {e}")))?;
    let (work_dir, _) = split_document_path(&docx_abs).map_err(LocalFailure::Runtime)?;

    let output = Command::new(&converter)
        .args(["--headless", "--convert-to", "pdf", "--outdir"])
        .arg(work_dir)
        .arg(&docx_abs)
        .output()
        .map_err(|e| {
            LocalFailure::Runtime(format!("failed to run {}: {e}", converter.display()))
        })?;

    if !output.status.success() {
        return Err(LocalFailure::Runtime(command_failure(
            "libreoffice --convert-to pdf",
            &output,
        )));
    }
    relocate_produced_pdf(&docx_abs, pdf).map_err(LocalFailure::Runtime)
}

/// The converters drop `<stem>.pdf` next to the document; move it to the
/// requested path, replacing any stale file there.
fn relocate_produced_pdf(docx_abs: &Path, target: &Path) -> Result<(), String> {
    let produced = docx_abs.with_extension("pdf");
    if !produced.is_file() {
        return Err(format!(
            "converter exited successfully but produced no PDF at {}",
            produced.display()
        ));
    }
    let target_abs =
        std::path::absolute(target).map_err(|e| format!("cannot resolve output path: {e}"))?;
    if produced == target_abs {
        return Ok(());
    }
    if target_abs.exists() {
        fs::remove_file(&target_abs)
            .map_err(|e| format!("cannot replace {}: {e}", target_abs.display()))?;
    }
    fs::rename(&produced, &target_abs)
        .map_err(|e| format!("cannot move converted PDF into place: {e}"))
}

fn split_document_path(docx_abs: &Path) -> Result<(&Path, &str), String> {
    let dir = docx_abs
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| format!("document path has no parent directory: {}", docx_abs.display()))?;
    let name = docx_abs
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| format!("document path has no usable file name: {}", docx_abs.display()))?;
    Ok((dir, name))
}

fn command_failure(what: &str, output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let detail = if stderr.trim().is_empty() {
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    } else {
        stderr.trim().to_string()
    };
    if detail.is_empty() {
        format!("{what} exited with {}", output.status)
    } else {
        format!("{what}: {detail}")
    }
}

fn find_executable(name: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    for dir in env::split_paths(&path_var) {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        #[cfg(windows)]
        {
            let candidate = candidate.with_extension("exe");
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}
