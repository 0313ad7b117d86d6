use crate::utils::error::Result;

/// Sink the view hands every new result text to.
pub trait ResultRenderer {
    fn render(&mut self, text: &str) -> Result<()>;
}

impl<R: ResultRenderer + ?Sized> ResultRenderer for Box<R> {
    fn render(&mut self, text: &str) -> Result<()> {
        (**self).render(text)
    }
}

/// Settings the presenter and the hosting screen read.
pub trait ConfigProvider {
    fn integer_tolerance(&self) -> f64;
    fn output_format(&self) -> OutputFormat;
    fn prompt(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}
