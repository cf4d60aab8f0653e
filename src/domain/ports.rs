use crate::domain::model::OutputFormat;

/// What both configuration fronts hand to the pipeline.
pub trait ConfigProvider {
    /// Conversion names, in the order they are applied.
    fn steps(&self) -> &[String];
    fn inputs(&self) -> &[String];
    fn output_format(&self) -> OutputFormat;
}
