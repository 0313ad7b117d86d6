use crate::core::observable::Subscription;
use crate::core::presenter::VolumePresenter;
use crate::domain::model::{Dimensions, ViewState, VolumeResult};
use crate::domain::ports::ResultRenderer;
use crate::view::input::{DimensionInputs, Field};
use std::cell::RefCell;
use std::rc::Rc;

struct ResultLabel {
    state: ViewState,
    renderer: Box<dyn ResultRenderer>,
}

impl ResultLabel {
    fn show(&mut self, text: &str) {
        self.state = ViewState::ResultShown(text.to_string());
        if let Err(e) = self.renderer.render(text) {
            tracing::warn!("Failed to render result '{}': {}", text, e);
        }
    }
}

/// Three input fields, a compute trigger and a result label.
///
/// The view never computes anything itself. It resolves the field text,
/// hands the numbers to the presenter and shows whatever the presenter
/// publishes.
pub struct VolumeView {
    inputs: DimensionInputs,
    label: Rc<RefCell<ResultLabel>>,
    presenter: Rc<VolumePresenter>,
    _subscription: Subscription,
}

impl VolumeView {
    pub fn new<R>(presenter: Rc<VolumePresenter>, renderer: R) -> Self
    where
        R: ResultRenderer + 'static,
    {
        let label = Rc::new(RefCell::new(ResultLabel {
            state: ViewState::Idle,
            renderer: Box::new(renderer),
        }));

        let sink = Rc::clone(&label);
        let subscription = presenter
            .volume()
            .subscribe(move |result: &VolumeResult| sink.borrow_mut().show(&result.display_text));

        Self {
            inputs: DimensionInputs::default(),
            label,
            presenter,
            _subscription: subscription,
        }
    }

    pub fn set_input(&mut self, field: Field, text: impl Into<String>) {
        self.inputs.set(field, text);
    }

    pub fn set_inputs(&mut self, inputs: DimensionInputs) {
        self.inputs = inputs;
    }

    pub fn inputs(&self) -> &DimensionInputs {
        &self.inputs
    }

    /// Compute trigger. Returns the dimensions that were handed to the presenter.
    pub fn on_compute(&mut self) -> Dimensions {
        let dimensions = self.inputs.resolve();
        self.presenter
            .calculate_volume(dimensions.length, dimensions.width, dimensions.height);
        dimensions
    }

    pub fn state(&self) -> ViewState {
        self.label.borrow().state.clone()
    }

    pub fn displayed_text(&self) -> Option<String> {
        self.label
            .borrow()
            .state
            .displayed_text()
            .map(str::to_string)
    }
}
