pub mod ease;
pub mod smoothing;
pub mod spring;
pub mod timeline;
