use crate::core::presenter::VolumePresenter;
use crate::domain::ports::ResultRenderer;
use crate::view::VolumeView;
use std::rc::Rc;

/// Owns the presenter for as long as the screen lives.
///
/// Views come and go (a reconfiguration drops the old view and attaches a new
/// one); the presenter and its last published result stay here until
/// `teardown`.
pub struct PresenterScope {
    presenter: Rc<VolumePresenter>,
    views_attached: usize,
}

impl PresenterScope {
    pub fn new(presenter: VolumePresenter) -> Self {
        Self {
            presenter: Rc::new(presenter),
            views_attached: 0,
        }
    }

    /// Creates a view bound to the scoped presenter. A retained result is
    /// rendered immediately.
    pub fn attach_view<R>(&mut self, renderer: R) -> VolumeView
    where
        R: ResultRenderer + 'static,
    {
        self.views_attached += 1;
        tracing::debug!("Attaching view #{}", self.views_attached);
        VolumeView::new(Rc::clone(&self.presenter), renderer)
    }

    pub fn views_attached(&self) -> usize {
        self.views_attached
    }

    pub fn observer_count(&self) -> usize {
        self.presenter.observer_count()
    }

    /// Ends the scope. Any view still alive stops receiving updates.
    pub fn teardown(self) {
        self.presenter.release_observers();
        tracing::debug!(
            "Presenter scope torn down after {} view(s)",
            self.views_attached
        );
    }
}

impl Default for PresenterScope {
    fn default() -> Self {
        Self::new(VolumePresenter::new())
    }
}
