pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod view;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{JsonRenderer, SharedWriter, TextRenderer};
pub use app::{ScreenEvent, Session};
pub use config::{Settings, TomlConfig};
pub use crate::core::{
    format::format_volume, observable::Observable, observable::ObservableRef,
    observable::Subscription, presenter::VolumePresenter, scope::PresenterScope,
};
pub use domain::model::{Dimensions, ViewState, VolumeResult};
pub use domain::ports::{ConfigProvider, OutputFormat, ResultRenderer};
pub use utils::error::{Result, VolumeError};
pub use view::{parse_dimension, DimensionInputs, Field, VolumeView};
