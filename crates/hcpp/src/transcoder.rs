//! Recursive node to C++ transcoder.

use std::fmt;

use log::trace;

use crate::Result;
use crate::construct::Construct;
use crate::dom::{Element, Node};
use crate::tags::ControlKind;
use crate::writer::SourceWriter;

/// Emits C++ lines for body nodes.
pub struct NodeTranscoder<'w> {
    out: &'w mut SourceWriter,
}

impl<'w> NodeTranscoder<'w> {
    /// Creates a transcoder writing into `out`.
    pub fn new(out: &'w mut SourceWriter) -> Self {
        Self { out }
    }

    /// Emits `node` and its descendants at nesting level `depth`.
    pub fn emit(&mut self, node: &Node, depth: usize) -> Result<()> {
        match node {
            Node::Document(_) | Node::Comment(_) => Ok(()),
            Node::Text(text) => {
                if !text.trim().is_empty() {
                    self.out.line(depth, text);
                }
                Ok(())
            }
            Node::Element(element) => self.emit_element(element, depth),
        }
    }

    /// Emits each child of `element` at `depth`.
    pub fn emit_children(&mut self, element: &Element, depth: usize) -> Result<()> {
        for child in &element.children {
            self.emit(child, depth)?;
        }
        Ok(())
    }

    fn emit_element(&mut self, element: &Element, depth: usize) -> Result<()> {
        match Construct::classify(element)? {
            Construct::Control { kind, content } => match kind {
                ControlKind::While | ControlKind::For | ControlKind::If | ControlKind::ElseIf => {
                    let open = format!("{} ({content}) {{", kind.keyword());
                    self.emit_block(element, depth, open, "}")
                }
                ControlKind::Do => {
                    let close = format!("}} ({content});");
                    self.emit_block(element, depth, "do {", close)
                }
                ControlKind::Else => self.emit_block(element, depth, "else {", "}"),
            },
            Construct::Namespace(attrs) => {
                let open = format!("namespace {} {{", attrs.name);
                self.emit_block(element, depth, open, "}")
            }
            Construct::Function(attrs) => {
                let open = format!("{} {}({}) {{", attrs.ret, attrs.name, attrs.params);
                self.emit_block(element, depth, open, "}")
            }
            Construct::Class(attrs) => {
                let mut open = format!("class {}", attrs.name);
                for (i, base) in attrs.base_list().enumerate() {
                    open.push_str(if i == 0 { " : " } else { ", " });
                    open.push_str("public ");
                    open.push_str(base);
                }
                open.push_str(" {");
                self.emit_block(element, depth, open, "};")
            }
            Construct::Declaration(attrs) => {
                let (ty, id, init) = (&attrs.ty, &attrs.id, &attrs.init);
                self.out.line(depth, format_args!("{ty} {id} = {init};"));
                Ok(())
            }
            Construct::Parameter(attrs) => {
                self.out.line(
                    depth,
                    format_args!("{}: {} {} = {};", attrs.label, attrs.ty, attrs.id, attrs.value),
                );
                Ok(())
            }
            Construct::Input(attrs) => {
                self.out.line(depth, Chain(attrs.stream.as_str(), ">>", attrs.operand_list()));
                Ok(())
            }
            Construct::Output(attrs) => {
                self.out.line(depth, Chain(attrs.stream.as_str(), "<<", attrs.operand_list()));
                Ok(())
            }
            Construct::Main | Construct::Unrecognized => {
                trace!("dropping <{}> and its subtree", element.tag);
                Ok(())
            }
        }
    }

    /// Opens a block, emits the children one level deeper, then closes it.
    fn emit_block(
        &mut self,
        element: &Element,
        depth: usize,
        open: impl fmt::Display,
        close: impl fmt::Display,
    ) -> Result<()> {
        self.out.line(depth, open);
        self.emit_children(element, depth + 1)?;
        self.out.line(depth, close);
        Ok(())
    }
}

/// `stream op a op b;`
struct Chain<'a, I>(&'a str, &'static str, I);

impl<'a, I> fmt::Display for Chain<'a, I>
where
    I: Iterator<Item = &'a str> + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Chain(stream, op, operands) = self;
        f.write_str(stream)?;
        for operand in operands.clone() {
            write!(f, " {op} {operand}")?;
        }
        f.write_str(";")
    }
}
