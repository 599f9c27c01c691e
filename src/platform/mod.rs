pub mod background;
pub mod logging;
