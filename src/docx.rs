use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, IndentLevel, Level, LevelJc, LevelText, LineSpacing,
    NumberFormat, Numbering, NumberingId, Paragraph, Run, RunFonts, Start, Style, StyleType,
};

use crate::error::Error;
use crate::model::{
    Description, Education, Experience, PersonalInfo, ResumeData, Section, SectionContent,
    SectionItem, Skills, present,
};
use crate::style::StyleConfig;

const SUMMARY_HEADER: &str = "About";
const EXPERIENCE_HEADER: &str = "Experience";
const EDUCATION_HEADER: &str = "Education";
const SKILLS_HEADER: &str = "Skills";

const DEFAULT_NAME: &str = "Full Name";
const DEFAULT_POSITION: &str = "Position";
const DEFAULT_COMPANY: &str = "Company";
const DEFAULT_DEGREE: &str = "Degree";
const DEFAULT_SCHOOL: &str = "School";
const DEFAULT_SECTION_TITLE: &str = "Section";

const FIELD_SEPARATOR: &str = " | ";

const HEADING_STYLE: &str = "Heading1";

/// Single w:num id shared by every bullet list in the document.
const BULLET_NUMBERING: usize = 1;

fn half_points(points: u32) -> usize {
    (points * 2) as usize
}

fn twips(points: u32) -> u32 {
    points * 20
}

fn hex_color(rgb: [u8; 3]) -> String {
    format!("{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}

fn run_fonts(style: &StyleConfig) -> RunFonts {
    // Word draws non-Latin text from the eastAsia slot, so bind it as well.
    RunFonts::new()
        .ascii(style.font_name.as_str())
        .hi_ansi(style.font_name.as_str())
        .east_asia(style.font_name.as_str())
        .cs(style.font_name.as_str())
}

fn styled_run(text: &str, size: u32, style: &StyleConfig) -> Run {
    Run::new()
        .add_text(text)
        .size(half_points(size))
        .fonts(run_fonts(style))
}

fn body_paragraph(text: &str, style: &StyleConfig) -> Paragraph {
    Paragraph::new().add_run(styled_run(text, style.body_size, style))
}

fn section_header(title: &str, style: &StyleConfig) -> Paragraph {
    Paragraph::new()
        .add_run(
            styled_run(title, style.section_size, style)
                .bold()
                .color(hex_color(style.accent_color)),
        )
        .line_spacing(
            LineSpacing::new()
                .before(twips(style.section_space_before))
                .after(twips(style.section_space_after)),
        )
}

fn bullet_point(text: &str, style: &StyleConfig) -> Paragraph {
    // Paragraph-level w:ind overrides the level def.
    Paragraph::new()
        .numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(0))
        .indent(Some(twips(style.bullet_indent) as i32), None, None, None)
        .add_run(styled_run(text, style.body_size, style))
}

fn entry_line(left: &str, right: &str, style: &StyleConfig) -> Paragraph {
    let text = format!("{left}{FIELD_SEPARATOR}{right}");
    Paragraph::new().add_run(styled_run(&text, style.entry_size, style).bold())
}

fn period_line(period: &str, style: &StyleConfig) -> Paragraph {
    Paragraph::new().add_run(
        styled_run(period, style.contact_size, style)
            .italic()
            .color(hex_color(style.muted_color)),
    )
}

fn key_value_paragraph(key: &str, value: &str, style: &StyleConfig) -> Paragraph {
    Paragraph::new()
        .add_run(styled_run(&format!("{key}: "), style.body_size, style).bold())
        .add_run(styled_run(value, style.body_size, style))
}

fn name_heading(info: &PersonalInfo, style: &StyleConfig) -> Paragraph {
    let name = info.name.as_deref().unwrap_or(DEFAULT_NAME);
    Paragraph::new()
        .style(HEADING_STYLE)
        .align(AlignmentType::Left)
        .add_run(styled_run(name, style.name_size, style).bold())
}

fn contact_line(info: &PersonalInfo, style: &StyleConfig) -> Option<Paragraph> {
    let labeled = [
        ("Email", &info.email),
        ("Phone", &info.phone),
        ("Location", &info.location),
        ("LinkedIn", &info.linkedin),
        ("GitHub", &info.github),
    ];

    let fields: Vec<String> = labeled
        .iter()
        .filter_map(|(label, value)| present(value).map(|v| format!("{label}: {v}")))
        .collect();

    if fields.is_empty() {
        return None;
    }
    Some(
        Paragraph::new().align(AlignmentType::Left).add_run(
            styled_run(&fields.join(FIELD_SEPARATOR), style.contact_size, style)
                .color(hex_color(style.muted_color)),
        ),
    )
}

fn experience_block(mut docx: Docx, entry: &Experience, style: &StyleConfig) -> Docx {
    docx = docx.add_paragraph(entry_line(
        entry.position.as_deref().unwrap_or(DEFAULT_POSITION),
        entry.company.as_deref().unwrap_or(DEFAULT_COMPANY),
        style,
    ));
    if let Some(period) = present(&entry.period) {
        docx = docx.add_paragraph(period_line(period, style));
    }
    match entry.description.as_ref().filter(|d| !d.is_empty()) {
        Some(Description::Bullets(items)) => {
            for item in items {
                docx = docx.add_paragraph(bullet_point(item, style));
            }
        }
        Some(Description::Text(text)) => {
            docx = docx.add_paragraph(body_paragraph(text, style));
        }
        None => {}
    }
    docx.add_paragraph(Paragraph::new())
}

fn education_block(mut docx: Docx, entry: &Education, style: &StyleConfig) -> Docx {
    docx = docx.add_paragraph(entry_line(
        entry.degree.as_deref().unwrap_or(DEFAULT_DEGREE),
        entry.school.as_deref().unwrap_or(DEFAULT_SCHOOL),
        style,
    ));
    if let Some(period) = present(&entry.period) {
        docx = docx.add_paragraph(period_line(period, style));
    }
    docx.add_paragraph(Paragraph::new())
}

fn section_block(mut docx: Docx, section: &Section, style: &StyleConfig) -> Docx {
    let title = section.title.as_deref().unwrap_or(DEFAULT_SECTION_TITLE);
    docx = docx.add_paragraph(section_header(title, style));
    match &section.content {
        Some(SectionContent::Items(items)) => {
            for item in items {
                docx = docx.add_paragraph(match item {
                    SectionItem::Pair(pair) => key_value_paragraph(&pair.key, &pair.value, style),
                    SectionItem::Line(line) => bullet_point(line, style),
                });
            }
        }
        Some(SectionContent::Text(text)) => {
            docx = docx.add_paragraph(body_paragraph(text, style));
        }
        None => {
            docx = docx.add_paragraph(body_paragraph("", style));
        }
    }
    docx.add_paragraph(Paragraph::new())
}

fn base_document(style: &StyleConfig) -> Docx {
    let bullet = AbstractNumbering::new(BULLET_NUMBERING).add_level(Level::new(
        0,
        Start::new(1),
        NumberFormat::new("bullet"),
        LevelText::new("•"),
        LevelJc::new("left"),
    ));
    Docx::new()
        .default_fonts(run_fonts(style))
        .default_size(half_points(style.body_size))
        .add_style(
            Style::new(HEADING_STYLE, StyleType::Paragraph)
                .name("Heading 1")
                .size(half_points(style.name_size))
                .bold(),
        )
        .add_abstract_numbering(bullet)
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING))
}

pub fn render(resume: &ResumeData, style: &StyleConfig) -> Result<Vec<u8>, Error> {
    let mut docx = base_document(style).add_paragraph(name_heading(&resume.personal_info, style));
    if let Some(contact) = contact_line(&resume.personal_info, style) {
        docx = docx.add_paragraph(contact);
    }
    docx = docx.add_paragraph(Paragraph::new());

    if let Some(summary) = present(&resume.summary) {
        docx = docx
            .add_paragraph(section_header(SUMMARY_HEADER, style))
            .add_paragraph(body_paragraph(summary, style))
            .add_paragraph(Paragraph::new());
    }

    if !resume.experience.is_empty() {
        docx = docx.add_paragraph(section_header(EXPERIENCE_HEADER, style));
        for entry in &resume.experience {
            docx = experience_block(docx, entry, style);
        }
    }

    if !resume.education.is_empty() {
        docx = docx.add_paragraph(section_header(EDUCATION_HEADER, style));
        for entry in &resume.education {
            docx = education_block(docx, entry, style);
        }
    }

    if let Some(skills) = resume.skills.as_ref().filter(|s| !s.is_empty()) {
        let text = match skills {
            Skills::Inline(text) => text.clone(),
            Skills::List(items) => items.join(", "),
        };
        docx = docx
            .add_paragraph(section_header(SKILLS_HEADER, style))
            .add_paragraph(body_paragraph(&text, style))
            .add_paragraph(Paragraph::new());
    }

    for section in &resume.additional_sections {
        docx = section_block(docx, section, style);
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| Error::Docx(e.into()))?;
    Ok(buffer.into_inner())
}
