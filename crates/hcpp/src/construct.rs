//! Classification of elements into the C++ constructs they produce.

use crate::Result;
use crate::attributes::{
    ClassAttr, ControlAttr, DeclarationAttr, FunctionAttr, HcppAttrsParser, NamespaceAttr,
    ParameterAttr, StreamAttr,
};
use crate::dom::Element;
use crate::tags::{ControlKind, cpp_tag};

/// What an element turns into, together with the attributes its template
/// needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Construct {
    /// A `while`/`for`/`do`/`if`/`else if`/`else` statement.
    Control {
        /// The selected statement kind.
        kind: ControlKind,
        /// The condition or loop header, empty when absent.
        content: ecow::EcoString,
    },
    /// `namespace name { ... }`
    Namespace(NamespaceAttr),
    /// `ret name(params) { ... }`
    Function(FunctionAttr),
    /// `class Name : public Base { ... };`
    Class(ClassAttr),
    /// `type name = init;`
    Declaration(DeclarationAttr),
    /// `label: type name = value;`
    Parameter(ParameterAttr),
    /// `stream >> a >> b;`
    Input(StreamAttr),
    /// `stream << a << b;`
    Output(StreamAttr),
    /// The entry routine container. Only meaningful at its designated use.
    Main,
    /// An unknown tag, or a control block with an unknown selector.
    Unrecognized,
}

impl Construct {
    /// Classifies an element, unwrapping every attribute its template
    /// requires.
    pub fn classify(element: &Element) -> Result<Self> {
        Ok(match element.tag.as_str() {
            cpp_tag::control => {
                let attrs = ControlAttr::parse(element)?;
                match ControlKind::from_selector(&attrs.selector) {
                    Some(kind) => Construct::Control {
                        kind,
                        content: attrs.content,
                    },
                    None => Construct::Unrecognized,
                }
            }
            cpp_tag::namespace => Construct::Namespace(NamespaceAttr::parse(element)?),
            cpp_tag::function => Construct::Function(FunctionAttr::parse(element)?),
            cpp_tag::class => Construct::Class(ClassAttr::parse(element)?),
            cpp_tag::declaration => Construct::Declaration(DeclarationAttr::parse(element)?),
            cpp_tag::parameter => Construct::Parameter(ParameterAttr::parse(element)?),
            cpp_tag::input => Construct::Input(StreamAttr::parse(element)?),
            cpp_tag::output => Construct::Output(StreamAttr::parse(element)?),
            cpp_tag::main => Construct::Main,
            _ => Construct::Unrecognized,
        })
    }
}
