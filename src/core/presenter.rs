use crate::core::format::{format_volume_with_tolerance, DEFAULT_INTEGER_TOLERANCE};
use crate::core::observable::{Observable, ObservableRef};
use crate::domain::model::{Dimensions, VolumeResult};

/// Holds the formatted volume as observable state.
pub struct VolumePresenter {
    volume: Observable<VolumeResult>,
    integer_tolerance: f64,
}

impl VolumePresenter {
    pub fn new() -> Self {
        Self::with_tolerance(DEFAULT_INTEGER_TOLERANCE)
    }

    pub fn with_tolerance(integer_tolerance: f64) -> Self {
        Self {
            volume: Observable::new(),
            integer_tolerance,
        }
    }

    /// Multiplies the three dimensions and publishes the formatted product.
    /// Inputs are not validated.
    pub fn calculate_volume(&self, length: f64, width: f64, height: f64) {
        let dimensions = Dimensions::new(length, width, height);
        let result = dimensions.volume();
        let display_text = format_volume_with_tolerance(result, self.integer_tolerance);

        if !result.is_finite() {
            tracing::warn!(
                "Volume of {}x{}x{} is not finite, showing '{}'",
                length,
                width,
                height,
                display_text
            );
        } else {
            tracing::debug!(
                "Volume of {}x{}x{} = {} -> '{}'",
                length,
                width,
                height,
                result,
                display_text
            );
        }

        self.volume.publish(VolumeResult::new(display_text));
    }

    pub fn volume(&self) -> ObservableRef<VolumeResult> {
        self.volume.read_only()
    }

    pub(crate) fn release_observers(&self) {
        self.volume.clear_subscribers();
    }

    pub(crate) fn observer_count(&self) -> usize {
        self.volume.subscriber_count()
    }
}

impl Default for VolumePresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn published(length: f64, width: f64, height: f64) -> String {
        let presenter = VolumePresenter::new();
        presenter.calculate_volume(length, width, height);
        presenter
            .volume()
            .get_current()
            .map(|result| result.display_text)
            .unwrap_or_default()
    }

    #[test]
    fn test_nothing_published_before_first_calculation() {
        let presenter = VolumePresenter::new();
        assert_eq!(presenter.volume().get_current(), None);
    }

    #[test]
    fn test_boundary_values() {
        assert_eq!(published(0.0, 0.0, 0.0), "0");
        assert_eq!(published(2.0, 3.0, 4.0), "24");
        assert_eq!(published(1.5, 2.0, 2.0), "6");
        assert_eq!(published(1.0, 1.0, 1.005), "1.01");
        assert_eq!(published(-2.0, 3.0, 4.0), "-24");
    }

    #[test]
    fn test_negative_zero_product() {
        assert_eq!(published(-2.0, 0.0, 3.0), "0");
    }

    #[test]
    fn test_fractional_product() {
        assert_eq!(published(1.1, 2.2, 3.3), "7.99");
        assert_eq!(published(0.5, 0.5, 0.5), "0.13");
    }

    #[test]
    fn test_overflow_renders_infinity() {
        assert_eq!(published(1e200, 1e200, 1e200), "Infinity");
        assert_eq!(published(-1e200, 1e200, 1e200), "-Infinity");
    }

    #[test]
    fn test_same_inputs_publish_same_text() {
        let presenter = VolumePresenter::new();
        presenter.calculate_volume(1.2, 3.4, 5.6);
        let first = presenter.volume().get_current();
        presenter.calculate_volume(1.2, 3.4, 5.6);
        let second = presenter.volume().get_current();

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_each_calculation_overwrites_previous() {
        let presenter = VolumePresenter::new();
        presenter.calculate_volume(2.0, 3.0, 4.0);
        presenter.calculate_volume(1.0, 1.0, 0.1);
        assert_eq!(
            presenter.volume().get_current(),
            Some(VolumeResult::new("0.10"))
        );
    }

    #[test]
    fn test_exact_tolerance() {
        let presenter = VolumePresenter::with_tolerance(0.0);
        presenter.calculate_volume(0.1, 3.0, 10.0);
        assert_eq!(
            presenter.volume().get_current(),
            Some(VolumeResult::new("3.00"))
        );
    }
}
