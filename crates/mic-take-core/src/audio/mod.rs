mod backend;
mod capture;
pub(crate) mod encoder;

pub use {backend::CaptureDevice, backend::RecordedTake, capture::MicCapture};
