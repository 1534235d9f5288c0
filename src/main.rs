use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-docx", about = "Generate a styled resume as DOCX from JSON data")]
struct Args {
    /// Input JSON file with resume data
    #[arg(short, long, default_value = "resume_data.json")]
    input: PathBuf,
    /// Output DOCX file (.docx is appended when missing)
    #[arg(short, long, default_value = "resume.docx")]
    output: PathBuf,
    /// Also produce a PDF version next to the DOCX
    #[arg(long)]
    pdf: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let output = resume_docx::ensure_docx_extension(&args.output);
    let style = resume_docx::StyleConfig::default();

    if let Err(e) = resume_docx::generate(&args.input, &output, &style) {
        fail(&e);
    }
    println!("Resume created: {}", output.display());

    if args.pdf {
        let pdf = output.with_extension("pdf");
        match resume_docx::convert_to_pdf(&output, &pdf) {
            Ok(engine) => println!("PDF created: {} (via {engine})", pdf.display()),
            Err(e) => fail(&e),
        }
    }
}

fn fail(e: &resume_docx::Error) -> ! {
    eprintln!("Error: {e}");
    if let Some(hint) = e.remediation() {
        eprintln!("{hint}");
    }
    std::process::exit(1);
}
