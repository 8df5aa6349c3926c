// Public API exports
pub mod convert;
pub mod files;
pub mod splitter;

// Re-export main types for convenience
pub use splitter::{HEADER_MARKER, Section, normalize_content, parse_header, split_sections};

pub use files::{ConvertError, read_document, write_atomic};

pub use convert::{
    Conversion, ConversionReport, ConvertOptions, DEFAULT_OUTPUT, convert_file, convert_str,
    sections_from_json, sections_to_json,
};
