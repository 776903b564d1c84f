// Field extraction heuristics for the ticket PDFs issued by the provincial
// portal. The layout is not tabular: some fields sit after a label on the
// same line, others on the lines around a label, so extraction mixes
// full-text regex search with line-relative scans.

use regex::Regex;
use std::sync::OnceLock;

/// Fields extracted from one ticket PDF. Every field is always present;
/// a pattern that does not match yields an empty string, never an error.
/// Values are upper-cased as they appear in the final certificates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateFields {
    pub ticket: String,
    pub nombre_solicitante: String,
    pub dni_solicitante: String,
    pub nombre_persona: String,
    pub dni_persona: String,
}

impl CertificateFields {
    /// Placeholder tokens as they appear in the DOCX templates, paired with
    /// the value each one is replaced with.
    pub fn placeholders(&self) -> [(&'static str, &str); 5] {
        [
            ("{{TICKET}}", self.ticket.as_str()),
            ("{{NOMBRE_SOLICITANTE}}", self.nombre_solicitante.as_str()),
            ("{{DNI_SOLICITANTE}}", self.dni_solicitante.as_str()),
            ("{{NOMBRE_PERSONA}}", self.nombre_persona.as_str()),
            ("{{DNI_PERSONA}}", self.dni_persona.as_str()),
        ]
    }
}

fn ticket_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)Trámite:\s*(\d+)").expect("valid regex"))
}

fn nombre_persona_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)NOMBRE Y APELLIDO\s*(.*)").expect("valid regex"))
}

fn dni_persona_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)NRO\. DE DOCUMENTO\s*(\d+)").expect("valid regex"))
}

fn cuil_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{2})-(\d{8})-(\d{1})").expect("valid regex"))
}

fn digit_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d").expect("valid regex"))
}

/// Extracts all certificate fields from the raw text of one PDF.
pub fn extract(text: &str) -> CertificateFields {
    let lines: Vec<&str> = text.split('\n').collect();

    CertificateFields {
        ticket: extract_value(text, ticket_re()).to_uppercase(),
        nombre_solicitante: extract_nombre(&lines).to_uppercase(),
        dni_solicitante: extract_dni(&lines).to_uppercase(),
        nombre_persona: extract_value(text, nombre_persona_re()).to_uppercase(),
        dni_persona: extract_value(text, dni_persona_re()).to_uppercase(),
    }
}

/// First capture group of the first match, trimmed; empty if no match.
fn extract_value(text: &str, re: &Regex) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

// The requester's name is printed above the "Apellido y nombre:" label,
// separated from it by a variable number of lines carrying the CUIL and
// other numbers. The nearest line above the label that contains no digit
// is the name.
fn extract_nombre(lines: &[&str]) -> String {
    for (i, line) in lines.iter().enumerate() {
        if line.contains("Apellido y nombre:") {
            return lines[..i]
                .iter()
                .rev()
                .find(|candidate| !digit_re().is_match(candidate))
                .map(|candidate| candidate.trim().to_string())
                .unwrap_or_default();
        }
    }
    String::new()
}

// The requester's DNI is the middle group of the CUIL printed on the line
// after the "Documento:" label. A label on the last line, or a next line
// that is not CUIL-shaped, yields empty.
fn extract_dni(lines: &[&str]) -> String {
    for (i, line) in lines.iter().enumerate() {
        if line.contains("Documento:") {
            if let Some(next) = lines.get(i + 1) {
                return cuil_re()
                    .captures(next.trim())
                    .and_then(|caps| caps.get(2))
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
            }
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_text_yields_all_empty_fields() {
        let fields = extract("nada que ver\ncon un trámite real\n");
        assert_eq!(fields, CertificateFields::default());
    }

    #[test]
    fn ticket_number_is_extracted() {
        let fields = extract("Expediente\nTrámite: 12345\n");
        assert_eq!(fields.ticket, "12345");
    }

    #[test]
    fn ticket_label_match_is_case_insensitive() {
        let fields = extract("TRÁMITE:   99\n");
        assert_eq!(fields.ticket, "99");
    }

    #[test]
    fn requester_name_is_nearest_digit_free_line_above_label() {
        let fields = extract("Juan Perez\nApellido y nombre: x123\n");
        assert_eq!(fields.nombre_solicitante, "JUAN PEREZ");
    }

    #[test]
    fn requester_name_walk_skips_lines_with_digits() {
        let text = "Maria Lopez\n20-11222333-4\nDNI 11222333\nApellido y nombre:\n";
        let fields = extract(text);
        assert_eq!(fields.nombre_solicitante, "MARIA LOPEZ");
    }

    #[test]
    fn requester_name_empty_when_every_line_above_has_digits() {
        let fields = extract("123\n456\nApellido y nombre:\n");
        assert_eq!(fields.nombre_solicitante, "");
    }

    #[test]
    fn requester_name_empty_when_label_missing() {
        let fields = extract("Juan Perez\nsin etiqueta\n");
        assert_eq!(fields.nombre_solicitante, "");
    }

    #[test]
    fn requester_dni_is_middle_cuil_group() {
        let fields = extract("Documento:\n20-12345678-3\n");
        assert_eq!(fields.dni_solicitante, "12345678");
    }

    #[test]
    fn requester_dni_empty_when_label_is_last_line() {
        let fields = extract("algo\nDocumento:");
        assert_eq!(fields.dni_solicitante, "");
    }

    #[test]
    fn requester_dni_empty_when_next_line_is_not_a_cuil() {
        let fields = extract("Documento:\nDNI 12345678\n");
        assert_eq!(fields.dni_solicitante, "");
    }

    #[test]
    fn subject_name_runs_to_end_of_line() {
        let fields = extract("NOMBRE Y APELLIDO  Ana García\nNRO. DE DOCUMENTO 30123456\n");
        assert_eq!(fields.nombre_persona, "ANA GARCÍA");
        assert_eq!(fields.dni_persona, "30123456");
    }

    #[test]
    fn values_are_upper_cased() {
        let fields = extract("rosa del valle\nApellido y nombre:\nTrámite: 7\n");
        assert_eq!(fields.nombre_solicitante, "ROSA DEL VALLE");
    }

    #[test]
    fn placeholders_cover_all_five_fields() {
        let fields = CertificateFields {
            ticket: "1".into(),
            ..Default::default()
        };
        let tokens: Vec<&str> = fields.placeholders().iter().map(|(t, _)| *t).collect();
        assert_eq!(
            tokens,
            vec![
                "{{TICKET}}",
                "{{NOMBRE_SOLICITANTE}}",
                "{{DNI_SOLICITANTE}}",
                "{{NOMBRE_PERSONA}}",
                "{{DNI_PERSONA}}"
            ]
        );
    }
}
