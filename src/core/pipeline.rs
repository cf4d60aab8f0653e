use crate::core::conversion::Conversion;
use crate::domain::model::{ConvertedRecord, OutputFormat};
use crate::utils::error::Result;

/// Conversions applied one after another, left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionPipeline {
    steps: Vec<Conversion>,
}

impl ConversionPipeline {
    pub fn new(steps: Vec<Conversion>) -> Self {
        Self { steps }
    }

    /// Resolves every name; the first unknown one is the error.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let steps = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<Conversion>>>()?;
        Ok(Self::new(steps))
    }

    pub fn steps(&self) -> &[Conversion] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn apply(&self, input: &str) -> String {
        self.steps
            .iter()
            .fold(input.to_string(), |acc, step| step.apply(&acc))
    }

    pub fn run<I, S>(&self, inputs: I) -> Vec<ConvertedRecord>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<&str> = self.steps.iter().map(Conversion::name).collect();
        tracing::debug!("Running pipeline: [{}]", names.join(" -> "));

        let records: Vec<ConvertedRecord> = inputs
            .into_iter()
            .map(|input| {
                let input = input.into();
                let output = self.apply(&input);
                tracing::trace!("{:?} -> {:?}", input, output);
                ConvertedRecord { input, output }
            })
            .collect();

        tracing::info!(
            "Converted {} records through {} steps",
            records.len(),
            self.steps.len()
        );
        records
    }
}

/// Text puts one output per line; JSON is a pretty array of records.
pub fn render(records: &[ConvertedRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(records
            .iter()
            .map(|record| record.output.as_str())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
    }
}
