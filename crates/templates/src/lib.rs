//! Template library handling
//!
//! Splits a template document into named prompts and loads that document
//! from a local file or a Google Doc.

mod google_docs;
mod parser;
mod source;

pub use google_docs::{extract_google_doc_id, GoogleDocSource, GoogleDocsClient, FETCH_ERROR};
pub use parser::{parse_templates, Template, HEADING_MARKER};
pub use source::{build_source, FileTemplateSource, TemplateSource};
