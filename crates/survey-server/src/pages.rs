//! Server-rendered pages.

use askama::Template;

/// The survey form.
///
/// With `pinned_report` set the report field is a read-only input and
/// `report_names` is `None`; otherwise the report is picked from a list.
#[derive(Template)]
#[template(path = "encuesta.html")]
pub struct SurveyFormPage {
    pub pinned_report: Option<String>,
    pub report_names: Option<Vec<String>>,
    pub processes: Vec<String>,
    pub static_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_report_select() {
        let page = SurveyFormPage {
            pinned_report: None,
            report_names: Some(vec!["SalesDash".into(), "Inventario".into()]),
            processes: vec!["Finance".into()],
            static_version: "2.3.4".into(),
        };
        let html = page.render().unwrap();
        assert!(html.contains(r#"<option value="SalesDash">SalesDash</option>"#));
        assert!(html.contains(r#"<option value="Finance">Finance</option>"#));
        assert!(html.contains("?v=2.3.4"));
        assert!(!html.contains("readonly"));
    }

    #[test]
    fn pinned_report_is_read_only() {
        let page = SurveyFormPage {
            pinned_report: Some("SalesDash".into()),
            report_names: None,
            processes: Vec::new(),
            static_version: "1.0.0".into(),
        };
        let html = page.render().unwrap();
        assert!(html.contains(r#"value="SalesDash" readonly"#));
        assert!(!html.contains(r#"<select name="reporte""#));
    }

    #[test]
    fn report_names_are_escaped() {
        let page = SurveyFormPage {
            pinned_report: Some("<b>x</b>".into()),
            report_names: None,
            processes: Vec::new(),
            static_version: "1.0.0".into(),
        };
        let html = page.render().unwrap();
        assert!(!html.contains("<b>x</b>"));
    }
}
