pub mod logging;
pub mod rotation;
