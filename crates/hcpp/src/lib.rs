//! # hcpp
//!
//! Transcodes semantically tagged HTML documents into C++ source.
//!
//! The `<head>` supplies the output file name (`<title>`), a comment block
//! (`author`/`description` metas), includes (`<link>`) and using directives
//! (`keywords` meta). Every child of `<body>` is then transcoded by tag, and
//! the children of `<main>` become the body of `int main()`.

pub mod attributes;
pub mod construct;
pub mod dom;
pub mod entry;
mod error;
pub mod header;
pub mod tags;
pub mod toolchain;
pub mod transcoder;
pub mod writer;

use std::path::{Path, PathBuf};

use ecow::EcoString;
use log::debug;

pub use error::*;

pub use crate::dom::{Element, Node};
pub use crate::header::DocumentHeader;
use crate::tags::{cpp_tag, head_tag};
use crate::transcoder::NodeTranscoder;
use crate::writer::SourceWriter;

/// The result type for hcpp.
pub type Result<T, Err = Error> = std::result::Result<T, Err>;

/// Features for the conversion.
#[derive(Debug, Clone)]
pub struct HcppFeat {
    /// The unit repeated once per nesting level.
    pub indent: EcoString,
}

impl Default for HcppFeat {
    fn default() -> Self {
        Self {
            indent: "    ".into(),
        }
    }
}

/// The generated C++ source of one document.
#[derive(Debug, Clone)]
pub struct CppSource {
    /// The metadata read from the document head.
    pub header: DocumentHeader,
    /// The complete source text.
    pub text: EcoString,
}

impl CppSource {
    /// The output file name, taken verbatim from the document title.
    pub fn target_name(&self) -> &str {
        &self.header.title
    }

    /// Writes the source to `dir/<title>` and returns that path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.target_name());
        std::fs::write(&path, self.text.as_bytes())?;
        debug!("wrote {}", path.display());
        Ok(path)
    }
}

/// Task builder for converting a tagged HTML document to C++.
#[derive(Debug, Clone, Default)]
pub struct Hcpp {
    /// Features for the conversion.
    feat: HcppFeat,
}

impl Hcpp {
    /// Creates a converter with default features.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets conversion features
    pub fn with_feature(mut self, feat: HcppFeat) -> Self {
        self.feat = feat;
        self
    }

    /// Reads and converts an HTML file.
    pub fn convert_file(&self, path: &Path) -> Result<CppSource> {
        let source = std::fs::read_to_string(path)?;
        self.convert_html(&source)
    }

    /// Parses and converts an HTML string.
    pub fn convert_html(&self, source: &str) -> Result<CppSource> {
        self.convert_document(&dom::parse_html(source))
    }

    /// Converts an already built document tree.
    ///
    /// Emits the preamble, then every child of `<body>` at depth zero, then
    /// the entry routine. Nothing is returned unless all three succeed.
    pub fn convert_document(&self, document: &Node) -> Result<CppSource> {
        let header = DocumentHeader::extract(document)?;
        let body = document
            .find_descendant(head_tag::body)
            .ok_or(ErrorKind::MissingBody)?;

        let mut out = SourceWriter::new(self.feat.indent.clone());
        header::emit_header(&mut out, &header);
        NodeTranscoder::new(&mut out).emit_children(body, 0)?;

        let main = body
            .find_descendant(cpp_tag::main)
            .ok_or(ErrorKind::MissingEntry)?;
        entry::emit_entry(&mut out, main)?;

        debug!("converted {:?}", header.title);
        Ok(CppSource {
            header,
            text: out.into_string(),
        })
    }
}
