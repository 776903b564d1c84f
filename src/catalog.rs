use std::path::PathBuf;

use crate::error::AppError;

/// The closed set of certificate templates the office issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    NoAcepta,
    NoMediableGenerico,
    NoMediable26485,
    IgnoradoDomicilio,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::NoAcepta,
        TemplateKind::NoMediableGenerico,
        TemplateKind::NoMediable26485,
        TemplateKind::IgnoradoDomicilio,
    ];

    pub fn from_key(key: &str) -> Result<Self, AppError> {
        match key {
            "no_acepta" => Ok(TemplateKind::NoAcepta),
            "no_mediable_generico" => Ok(TemplateKind::NoMediableGenerico),
            "no_mediable_26485" => Ok(TemplateKind::NoMediable26485),
            "ignorado_domicilio" => Ok(TemplateKind::IgnoradoDomicilio),
            _ => Err(AppError::UnknownTemplate(key.to_string())),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            TemplateKind::NoAcepta => "no_acepta",
            TemplateKind::NoMediableGenerico => "no_mediable_generico",
            TemplateKind::NoMediable26485 => "no_mediable_26485",
            TemplateKind::IgnoradoDomicilio => "ignorado_domicilio",
        }
    }

    // File names as stored in the templates folder (the double space in the
    // generic one is part of the actual file name).
    pub fn filename(self) -> &'static str {
        match self {
            TemplateKind::NoAcepta => "CERTIFICADO NO ACEPTA.docx",
            TemplateKind::NoMediableGenerico => "CERTIFICADO NO MEDIABLE  GENERICO.docx",
            TemplateKind::NoMediable26485 => "CERTIFICADO NO MEDIABLE LEY 26485.docx",
            TemplateKind::IgnoradoDomicilio => "CERTIFICADO IGNORADO DOMICILIO.docx",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TemplateKind::NoAcepta => "No acepta",
            TemplateKind::NoMediableGenerico => "No mediable (genérico)",
            TemplateKind::NoMediable26485 => "No mediable (Ley 26.485)",
            TemplateKind::IgnoradoDomicilio => "Ignorado domicilio",
        }
    }
}

/// The closed set of authorities that sign certificates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signer {
    Videla,
    Bloise,
}

impl Signer {
    pub const ALL: [Signer; 2] = [Signer::Videla, Signer::Bloise];

    pub fn from_key(key: &str) -> Result<Self, AppError> {
        match key {
            "videla" => Ok(Signer::Videla),
            "bloise" => Ok(Signer::Bloise),
            _ => Err(AppError::UnknownSigner(key.to_string())),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Signer::Videla => "videla",
            Signer::Bloise => "bloise",
        }
    }

    /// Display string substituted for `{{AUTORIDAD_FIRMANTE}}`.
    pub fn display(self) -> &'static str {
        match self {
            Signer::Videla => "DR. JUAN MARTÍN VIDELA - SECRETARIO - CUERPO DE MEDIADORES",
            Signer::Bloise => "DR. RENZO A. BLOISE - COORDINADOR GENERAL - CUERPO DE MEDIADORES",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Signer::Videla => "Dr. Juan Martín Videla",
            Signer::Bloise => "Dr. Renzo A. Bloise",
        }
    }
}

/// Resolves template kinds to files under the configured templates folder.
/// Built once at startup and carried in the application state.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates_folder: PathBuf,
}

impl Catalog {
    pub fn new(templates_folder: PathBuf) -> Self {
        Self { templates_folder }
    }

    pub fn template_path(&self, kind: TemplateKind) -> PathBuf {
        self.templates_folder.join(kind.filename())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_key_round_trips() {
        for kind in TemplateKind::ALL {
            assert_eq!(TemplateKind::from_key(kind.key()).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_template_key_is_a_lookup_failure() {
        let err = TemplateKind::from_key("apelacion").unwrap_err();
        assert!(matches!(err, AppError::UnknownTemplate(ref k) if k == "apelacion"));
    }

    #[test]
    fn unknown_signer_key_is_a_lookup_failure() {
        let err = Signer::from_key("").unwrap_err();
        assert!(matches!(err, AppError::UnknownSigner(_)));
    }

    #[test]
    fn catalog_resolves_template_paths() {
        let catalog = Catalog::new(PathBuf::from("/srv/plantillas"));
        assert_eq!(
            catalog.template_path(TemplateKind::NoAcepta),
            PathBuf::from("/srv/plantillas/CERTIFICADO NO ACEPTA.docx")
        );
    }
}
