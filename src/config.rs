use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub upload_folder: PathBuf,
    pub output_folder: PathBuf,
    pub templates_folder: PathBuf,
    pub history_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        dotenvy::dotenv().ok();

        let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let upload_folder =
            base_dir.join(std::env::var("UPLOAD_FOLDER").unwrap_or_else(|_| "uploads".to_string()));
        let output_folder =
            base_dir.join(std::env::var("OUTPUT_FOLDER").unwrap_or_else(|_| "outputs".to_string()));
        let templates_folder = base_dir.join(
            std::env::var("TEMPLATES_FOLDER").unwrap_or_else(|_| "plantillas".to_string()),
        );
        let history_path = base_dir
            .join(std::env::var("HISTORY_FILE").unwrap_or_else(|_| "historial.csv".to_string()));

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .unwrap_or(5000);

        Ok(Self {
            upload_folder,
            output_folder,
            templates_folder,
            history_path,
            host,
            port,
        })
    }
}
