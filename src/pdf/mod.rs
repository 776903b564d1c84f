// PDF text extraction
// Scanned tickets come through the portal with a text layer, so plain
// extraction is enough; no OCR.

pub fn extract_text(data: &[u8]) -> Result<String, String> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_without_panicking() {
        let result = extract_text(b"esto no es un PDF");
        assert!(result.is_err());
    }
}
