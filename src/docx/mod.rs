// Certificate rendering: placeholder substitution over a DOCX template's
// paragraphs and table cells, plus the localized date stamp.

use chrono::{DateTime, FixedOffset, Utc};
use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild, RunProperty,
    TableCellContent, TableChild, TableRowChild,
};
use std::io::Cursor;
use std::path::Path;

use crate::error::AppError;
use crate::extract::CertificateFields;

// Argentina dropped DST in 2009; civil time is a fixed UTC-3.
pub fn buenos_aires_offset() -> FixedOffset {
    FixedOffset::west_opt(3 * 3600).expect("valid offset")
}

pub fn buenos_aires_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&buenos_aires_offset())
}

const SPANISH_MONTHS: [(&str, &str); 12] = [
    ("January", "enero"),
    ("February", "febrero"),
    ("March", "marzo"),
    ("April", "abril"),
    ("May", "mayo"),
    ("June", "junio"),
    ("July", "julio"),
    ("August", "agosto"),
    ("September", "septiembre"),
    ("October", "octubre"),
    ("November", "noviembre"),
    ("December", "diciembre"),
];

/// Date stamp substituted for `{{FECHA_CERTIFICADO}}`, e.g.
/// "12 días del mes de agosto del año 2026".
///
/// The trailing `replacen` is the historical leading-zero strip: it removes
/// the first literal " 0" in the formatted string. The day sits at the very
/// start, so a single-digit day actually keeps its zero padding ("08 días…"),
/// exactly as the certificates have always been stamped.
pub fn format_certificate_date(date: DateTime<FixedOffset>) -> String {
    let month_en = date.format("%B").to_string();
    let month_es = SPANISH_MONTHS
        .iter()
        .find(|(en, _)| *en == month_en)
        .map(|(_, es)| *es)
        .unwrap_or(month_en.as_str());

    format!(
        "{} días del mes de {} del año {}",
        date.format("%d"),
        month_es,
        date.format("%Y")
    )
    .replacen(" 0", " ", 1)
}

/// Loads the template, replaces every placeholder token in every body
/// paragraph and every table-cell paragraph, and returns the bytes of the
/// finished document. The date is passed in so callers decide the clock.
pub fn render_certificate(
    template_path: &Path,
    fields: &CertificateFields,
    signer: &str,
    date: DateTime<FixedOffset>,
) -> Result<Vec<u8>, AppError> {
    let template = std::fs::read(template_path)?;
    let mut docx = read_docx(&template)
        .map_err(|e| AppError::Render(format!("{}: {}", template_path.display(), e)))?;

    let fecha = format_certificate_date(date);
    let mut replacements: Vec<(&str, &str)> = fields.placeholders().to_vec();
    replacements.push(("{{FECHA_CERTIFICADO}}", fecha.as_str()));
    replacements.push(("{{AUTORIDAD_FIRMANTE}}", signer));

    for child in docx.document.children.iter_mut() {
        match child {
            DocumentChild::Paragraph(paragraph) => {
                substitute_paragraph(paragraph, &replacements);
            }
            DocumentChild::Table(table) => {
                for TableChild::TableRow(row) in table.rows.iter_mut() {
                    for TableRowChild::TableCell(cell) in row.cells.iter_mut() {
                        for content in cell.children.iter_mut() {
                            if let TableCellContent::Paragraph(paragraph) = content {
                                substitute_paragraph(paragraph, &replacements);
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    let mut out = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut out)
        .map_err(|e| AppError::Render(e.to_string()))?;
    Ok(out.into_inner())
}

// Whole-paragraph substitution: a token split across format runs can only
// be matched on the joined text, so a paragraph whose text changes is
// collapsed into a single run carrying the first run's character
// properties. Paragraphs without a token are left untouched.
fn substitute_paragraph(paragraph: &mut Paragraph, replacements: &[(&str, &str)]) {
    let original = paragraph_text(paragraph);
    if original.is_empty() {
        return;
    }

    let mut replaced = original.clone();
    for &(token, value) in replacements {
        replaced = replaced.replace(token, value);
    }
    if replaced == original {
        return;
    }

    let run_property = paragraph
        .children
        .iter()
        .find_map(|child| match child {
            ParagraphChild::Run(run) => Some(run.run_property.clone()),
            _ => None,
        })
        .unwrap_or_else(RunProperty::new);

    let mut run = Run::new().add_text(replaced);
    run.run_property = run_property;
    paragraph.children = vec![ParagraphChild::Run(Box::new(run))];
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

/// Joined text of every body paragraph and table-cell paragraph, one line
/// per paragraph. The inverse view of `render_certificate`, used to inspect
/// finished documents.
pub fn document_text(data: &[u8]) -> Result<String, AppError> {
    let docx = read_docx(data).map_err(|e| AppError::Render(e.to_string()))?;

    let mut parts: Vec<String> = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => parts.push(paragraph_text(paragraph)),
            DocumentChild::Table(table) => {
                for TableChild::TableRow(row) in &table.rows {
                    for TableRowChild::TableCell(cell) in &row.cells {
                        for content in &cell.children {
                            if let TableCellContent::Paragraph(paragraph) = content {
                                parts.push(paragraph_text(paragraph));
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }
    Ok(parts.join("\n"))
}
