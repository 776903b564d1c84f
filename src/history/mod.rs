// Append-only audit trail of generated certificates, one comma-joined line
// per document: timestamp, ticket, requester name, template key.

use chrono::{DateTime, FixedOffset};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::extract::CertificateFields;

// Values are written raw; a comma inside a name shifts the columns.
pub fn append(
    path: &Path,
    timestamp: DateTime<FixedOffset>,
    fields: &CertificateFields,
    template_key: &str,
) -> std::io::Result<()> {
    let line = format!(
        "{},{},{},{}\n",
        timestamp.format("%d/%m/%Y %H:%M"),
        fields.ticket,
        fields.nombre_solicitante,
        template_key
    );

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::buenos_aires_offset;
    use chrono::TimeZone;

    fn fields(ticket: &str, nombre: &str) -> CertificateFields {
        CertificateFields {
            ticket: ticket.to_string(),
            nombre_solicitante: nombre.to_string(),
            ..Default::default()
        }
    }

    fn fixed_time() -> DateTime<FixedOffset> {
        buenos_aires_offset()
            .with_ymd_and_hms(2026, 8, 8, 14, 30, 0)
            .unwrap()
    }

    #[test]
    fn record_is_one_comma_joined_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("historial.csv");

        append(&path, fixed_time(), &fields("77", "JUAN PEREZ"), "no_acepta").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "08/08/2026 14:30,77,JUAN PEREZ,no_acepta\n");
    }

    #[test]
    fn appending_preserves_prior_lines_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("historial.csv");
        std::fs::write(&path, "01/01/2026 09:00,1,ANA,no_acepta\n").unwrap();

        append(&path, fixed_time(), &fields("2", "BETO"), "ignorado_domicilio").unwrap();
        append(&path, fixed_time(), &fields("3", "CARLA"), "no_mediable_26485").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "01/01/2026 09:00,1,ANA,no_acepta");
        assert!(lines[1].starts_with("08/08/2026 14:30,2,BETO"));
        assert!(lines[2].ends_with("no_mediable_26485"));
    }

    #[test]
    fn empty_fields_still_produce_a_full_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("historial.csv");

        append(&path, fixed_time(), &CertificateFields::default(), "no_acepta").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "08/08/2026 14:30,,,no_acepta\n");
    }
}
