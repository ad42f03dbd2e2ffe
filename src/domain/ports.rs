use crate::domain::model::{Canvas, FormInputs, OutputFormat};
use crate::utils::error::Result;

/// Where rendered drawings and exported tables end up.
pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    /// Human readable location of `path`, for status output.
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider {
    fn form_inputs(&self) -> FormInputs;
    fn canvas(&self) -> Canvas;
    fn output_formats(&self) -> Vec<OutputFormat>;
}
