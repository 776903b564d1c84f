use std::path::PathBuf;
use uuid::Uuid;

pub fn ensure_dirs(upload_folder: &PathBuf, output_folder: &PathBuf) -> std::io::Result<()> {
    std::fs::create_dir_all(upload_folder)?;
    std::fs::create_dir_all(output_folder)?;
    Ok(())
}

/// Output file name for one certificate. Tickets name the file directly;
/// a ticket the extractor could not find gets a unique suffix so two such
/// files in one batch cannot overwrite each other.
pub fn certificate_filename(ticket: &str) -> String {
    if ticket.is_empty() {
        format!(
            "certificado_sin_tramite_{}.docx",
            &Uuid::new_v4().to_string()[..8]
        )
    } else {
        format!("certificado_{}.docx", ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_names_the_output() {
        assert_eq!(certificate_filename("77"), "certificado_77.docx");
    }

    #[test]
    fn empty_ticket_gets_a_unique_name() {
        let a = certificate_filename("");
        let b = certificate_filename("");
        assert!(a.starts_with("certificado_sin_tramite_"));
        assert!(a.ends_with(".docx"));
        assert_ne!(a, b);
    }
}
