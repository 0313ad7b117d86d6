pub mod session;

pub use session::{ScreenEvent, Session};
