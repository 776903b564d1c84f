use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tera::Context;

use crate::catalog::{Signer, TemplateKind};
use crate::error::AppError;
use crate::state::AppState;
use crate::{docx, extract, history, pdf, storage};

#[derive(Serialize)]
struct Choice {
    key: &'static str,
    label: &'static str,
}

pub async fn index() -> impl IntoResponse {
    let plantillas: Vec<Choice> = TemplateKind::ALL
        .iter()
        .map(|t| Choice {
            key: t.key(),
            label: t.label(),
        })
        .collect();
    let firmantes: Vec<Choice> = Signer::ALL
        .iter()
        .map(|s| Choice {
            key: s.key(),
            label: s.label(),
        })
        .collect();

    let mut ctx = Context::new();
    ctx.insert("plantillas", &plantillas);
    ctx.insert("firmantes", &firmantes);
    render_template("index.html", ctx)
}

/// Form POST: template key, signer key and a batch of ticket PDFs in, one
/// zip of generated certificates out. Files are processed strictly in
/// sequence; the first failing file aborts the whole batch.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut template_key = String::new();
    let mut signer_key = String::new();
    let mut uploads: Vec<(String, Vec<u8>)> = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "plantilla" => {
                if let Ok(text) = field.text().await {
                    template_key = text;
                }
            }
            "firmante" => {
                if let Ok(text) = field.text().await {
                    signer_key = text;
                }
            }
            "pdfs" => {
                let filename = field.file_name().unwrap_or("tramite.pdf").to_string();
                if let Ok(data) = field.bytes().await {
                    if !data.is_empty() {
                        uploads.push((filename, data.to_vec()));
                    }
                }
            }
            _ => {}
        }
    }

    let template = TemplateKind::from_key(template_key.trim())?;
    let signer = Signer::from_key(signer_key.trim())?;
    if uploads.is_empty() {
        return Err(AppError::EmptyBatch);
    }

    let now = docx::buenos_aires_now();
    let template_path = state.catalog.template_path(template);
    let mut generated: Vec<(String, Vec<u8>)> = Vec::new();

    for (filename, data) in &uploads {
        let safe_name = Path::new(filename)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("tramite.pdf");
        if !safe_name.to_lowercase().ends_with(".pdf") {
            return Err(AppError::InvalidUpload(safe_name.to_string()));
        }
        std::fs::write(state.config.upload_folder.join(safe_name), data)?;

        let text = pdf::extract_text(data).map_err(|reason| AppError::Extraction {
            name: safe_name.to_string(),
            reason,
        })?;
        let fields = extract::extract(&text);
        tracing::info!(
            "{}: trámite '{}', solicitante '{}'",
            safe_name,
            fields.ticket,
            fields.nombre_solicitante
        );

        let bytes = docx::render_certificate(&template_path, &fields, signer.display(), now)?;
        let output_name = storage::certificate_filename(&fields.ticket);
        std::fs::write(state.config.output_folder.join(&output_name), &bytes)?;
        history::append(&state.config.history_path, now, &fields, template.key())?;

        generated.push((output_name, bytes));
    }

    let mut zip_data = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(std::io::Cursor::new(&mut zip_data));
        let options = zip::write::SimpleFileOptions::default().unix_permissions(0o644);
        for (name, bytes) in &generated {
            zip.start_file(name.as_str(), options)?;
            zip.write_all(bytes)?;
        }
        zip.finish()?;
    }

    tracing::info!(
        "Lote completo: {} certificado(s) con plantilla '{}'",
        generated.len(),
        template.key()
    );

    Ok(Response::builder()
        .header("Content-Type", "application/zip")
        .header(
            "Content-Disposition",
            "attachment; filename=\"certificados.zip\"",
        )
        .body(axum::body::Body::from(zip_data))
        .unwrap()
        .into_response())
}

fn render_template(name: &str, ctx: Context) -> Html<String> {
    let tera = crate::templates::get_tera();
    let rendered = tera
        .render(name, &ctx)
        .unwrap_or_else(|_| format!("Template error: {}", name));
    Html(rendered)
}
