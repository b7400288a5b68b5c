//! Document metadata extraction and the file preamble.

use ecow::EcoString;
use log::debug;

use crate::Result;
use crate::attributes::{HcppAttrsParser, LinkAttr, MetaAttr, cpp_attr};
use crate::dom::Node;
use crate::error::ErrorKind;
use crate::tags::head_tag;
use crate::writer::SourceWriter;

/// Whether an include is resolved next to the source or on the system path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locality {
    /// `#include "path"`
    Local,
    /// `#include <path>`
    System,
}

/// An `#include` taken from a `<link>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalRef {
    /// How the target is looked up.
    pub locality: Locality,
    /// The included path.
    pub target: EcoString,
}

/// Metadata of a document, read once from its `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHeader {
    /// The `<title>` text. Also the name of the output file.
    pub title: EcoString,
    /// `<meta name="author" content="..">`
    pub author: Option<EcoString>,
    /// `<meta name="description" content="..">`
    pub description: Option<EcoString>,
    /// Every `<link>`, in document order.
    pub references: Vec<ExternalRef>,
    /// `<meta name="keywords" content="..">`, whitespace separated
    /// namespace names.
    pub imports: Option<EcoString>,
}

impl DocumentHeader {
    /// Creates a header with only a title.
    pub fn new(title: impl Into<EcoString>) -> Self {
        Self {
            title: title.into(),
            author: None,
            description: None,
            references: Vec::new(),
            imports: None,
        }
    }

    /// Reads the header region of a document.
    pub fn extract(document: &Node) -> Result<Self> {
        let head = document
            .find_descendant(head_tag::head)
            .ok_or(ErrorKind::MissingTitle)?;
        let title = head
            .find_descendant(head_tag::title)
            .ok_or(ErrorKind::MissingTitle)?
            .text_content();

        let mut metas = Vec::new();
        head.descendants_with_tag(head_tag::meta, &mut metas);
        let meta_content = |name: &str| -> Result<Option<EcoString>> {
            metas
                .iter()
                .find(|meta| meta.attr(cpp_attr::name).is_some_and(|n| n == name))
                .map(|meta| MetaAttr::parse(meta).map(|attrs| attrs.content))
                .transpose()
        };

        let author = meta_content("author")?;
        let description = meta_content("description")?;
        let imports = meta_content("keywords")?;

        let mut links = Vec::new();
        head.descendants_with_tag(head_tag::link, &mut links);
        let references = links
            .into_iter()
            .map(|link| -> Result<ExternalRef> {
                let attrs = LinkAttr::parse(link)?;
                let locality = if attrs.rel == "local" {
                    Locality::Local
                } else {
                    Locality::System
                };
                Ok(ExternalRef {
                    locality,
                    target: attrs.href,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "header of {title:?}: {} include(s), imports {imports:?}",
            references.len()
        );

        Ok(Self {
            title,
            author,
            description,
            references,
            imports,
        })
    }

    /// The namespaces to import, in order.
    pub fn import_list(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().flat_map(|imports| imports.split_whitespace())
    }
}

/// Writes the file preamble: the comment block, includes and using
/// directives.
pub fn emit_header(out: &mut SourceWriter, header: &DocumentHeader) {
    if header.author.is_some() || header.description.is_some() {
        out.raw_line("/**");
        if let Some(author) = &header.author {
            out.raw_line(author);
        }
        if let Some(description) = &header.description {
            out.raw_line(description);
        }
        out.raw_line("**/");
    }

    for reference in &header.references {
        match reference.locality {
            Locality::Local => out.raw_line(format_args!("#include \"{}\"", reference.target)),
            Locality::System => out.raw_line(format_args!("#include <{}>", reference.target)),
        }
    }

    for name in header.import_list() {
        out.raw_line(format_args!("using namespace {name};"));
    }
}
