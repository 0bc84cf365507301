pub mod inference_process;
pub mod mock_detector;
