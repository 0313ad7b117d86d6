use crate::domain::model::Dimensions;

/// Resolves raw field text to a number. Anything that does not parse to a
/// finite `f64` becomes `0.0`.
pub fn parse_dimension(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Length,
    Width,
    Height,
}

impl Field {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "length" | "l" => Some(Field::Length),
            "width" | "w" => Some(Field::Width),
            "height" | "h" => Some(Field::Height),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Length => "length",
            Field::Width => "width",
            Field::Height => "height",
        }
    }
}

/// Raw text of the three input fields, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionInputs {
    pub length: String,
    pub width: String,
    pub height: String,
}

impl DimensionInputs {
    pub fn new(
        length: impl Into<String>,
        width: impl Into<String>,
        height: impl Into<String>,
    ) -> Self {
        Self {
            length: length.into(),
            width: width.into(),
            height: height.into(),
        }
    }

    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        let slot = match field {
            Field::Length => &mut self.length,
            Field::Width => &mut self.width,
            Field::Height => &mut self.height,
        };
        *slot = text.into();
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Length => &self.length,
            Field::Width => &self.width,
            Field::Height => &self.height,
        }
    }

    /// Parses each field on its own; one bad field never affects the others.
    pub fn resolve(&self) -> Dimensions {
        Dimensions::new(
            parse_dimension(&self.length),
            parse_dimension(&self.width),
            parse_dimension(&self.height),
        )
    }
}
