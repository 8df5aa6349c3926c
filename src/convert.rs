use std::path::PathBuf;
use tracing::{debug, info};

use crate::files::{ConvertError, read_document, write_atomic};
use crate::splitter::{Section, split_sections};

/// Output path used when none is given
pub const DEFAULT_OUTPUT: &str = "output.json";

/// Where to read the document from and where to write the JSON
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConvertOptions {
    /// Options for `input`, writing to [`DEFAULT_OUTPUT`]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    /// Set the output path
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

/// Outcome of a successful [`convert_file`] run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub section_count: usize,
    /// Input was empty or whitespace-only and the splitter was skipped
    pub empty_input: bool,
    pub bytes_written: usize,
}

/// Split document text, short-circuiting blank documents to no sections
pub fn convert_str(text: &str) -> Vec<Section> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    split_sections(text)
}

/// Serialize sections as pretty JSON (2-space indent, non-ASCII unescaped)
pub fn sections_to_json(sections: &[Section]) -> Result<String, ConvertError> {
    Ok(serde_json::to_string_pretty(sections)?)
}

/// Parse a JSON array previously produced by [`sections_to_json`]
pub fn sections_from_json(json: &str) -> Result<Vec<Section>, ConvertError> {
    Ok(serde_json::from_str(json)?)
}

/// A document that has been read and split, waiting to be written
#[derive(Debug, Clone)]
pub struct Conversion {
    options: ConvertOptions,
    sections: Vec<Section>,
    empty_input: bool,
}

impl Conversion {
    /// Read and split the input document. Nothing is written yet.
    pub fn read(options: &ConvertOptions) -> Result<Self, ConvertError> {
        debug!(input = %options.input.display(), "Reading document");
        let text = read_document(&options.input)?;

        let empty_input = text.trim().is_empty();
        if empty_input {
            info!(input = %options.input.display(), "Input is empty, writing empty array");
        }

        Ok(Self {
            options: options.clone(),
            sections: convert_str(&text),
            empty_input,
        })
    }

    /// Input was empty or whitespace-only and the splitter was skipped
    pub fn empty_input(&self) -> bool {
        self.empty_input
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Serialize the sections and replace the output file atomically
    pub fn write(self) -> Result<ConversionReport, ConvertError> {
        let json = sections_to_json(&self.sections)?;
        write_atomic(&self.options.output, &json)?;

        info!(
            sections = self.sections.len(),
            bytes = json.len(),
            output = %self.options.output.display(),
            "Conversion complete"
        );

        Ok(ConversionReport {
            input: self.options.input,
            output: self.options.output,
            section_count: self.sections.len(),
            empty_input: self.empty_input,
            bytes_written: json.len(),
        })
    }
}

/// Read the input document, split it and write the JSON output
///
/// Nothing is written if reading fails. The output is replaced atomically.
pub fn convert_file(options: &ConvertOptions) -> Result<ConversionReport, ConvertError> {
    Conversion::read(options)?.write()
}
