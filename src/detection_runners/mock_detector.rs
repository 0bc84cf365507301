pub mod image_ops;
pub mod post_filter;

mod mock_engine;
mod tensor;

pub use mock_engine::{MockEngine, MockYolo, NUM_MOCK_DETECTIONS};
pub use tensor::NormTensor;
