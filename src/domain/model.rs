use serde::Serialize;

/// The three resolved box dimensions handed from the view to the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}

/// Formatted result published by the presenter. Serializes as `{"volume": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeResult {
    #[serde(rename = "volume")]
    pub display_text: String,
}

impl VolumeResult {
    pub fn new(display_text: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
        }
    }
}

/// What the result label currently shows.
///
/// There is no transition back to `Idle` once a result has been shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    ResultShown(String),
}

impl ViewState {
    pub fn displayed_text(&self) -> Option<&str> {
        match self {
            ViewState::Idle => None,
            ViewState::ResultShown(text) => Some(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_volume() {
        assert_eq!(Dimensions::new(2.0, 3.0, 4.0).volume(), 24.0);
        assert_eq!(Dimensions::default().volume(), 0.0);
    }

    #[test]
    fn test_volume_result_serializes_as_volume_field() {
        let json = serde_json::to_string(&VolumeResult::new("1.01")).unwrap();
        assert_eq!(json, r#"{"volume":"1.01"}"#);
    }

    #[test]
    fn test_view_state_text() {
        assert_eq!(ViewState::Idle.displayed_text(), None);
        assert_eq!(
            ViewState::ResultShown("24".to_string()).displayed_text(),
            Some("24")
        );
    }
}
