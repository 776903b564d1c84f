use std::sync::OnceLock;
use tera::Tera;

static TERA: OnceLock<Tera> = OnceLock::new();

// One page only, embedded in the binary.
pub fn get_tera() -> &'static Tera {
    TERA.get_or_init(|| {
        let mut tera = Tera::default();
        tera.add_raw_template("index.html", include_str!("../templates/index.html"))
            .expect("index template parses");
        tera
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tera::Context;

    #[test]
    fn index_template_renders_choices() {
        let mut ctx = Context::new();
        ctx.insert(
            "plantillas",
            &vec![serde_json::json!({"key": "no_acepta", "label": "No acepta"})],
        );
        ctx.insert(
            "firmantes",
            &vec![serde_json::json!({"key": "videla", "label": "Dr. Videla"})],
        );

        let html = get_tera().render("index.html", &ctx).unwrap();
        assert!(html.contains("no_acepta"));
        assert!(html.contains("videla"));
    }
}
