pub mod format;
pub mod observable;
pub mod presenter;
pub mod scope;

pub use crate::domain::model::{Dimensions, ViewState, VolumeResult};
pub use crate::domain::ports::{ConfigProvider, OutputFormat, ResultRenderer};
pub use crate::utils::error::Result;
