//! Attributes for HTML elements and parsing

use ecow::EcoString;

use crate::Result;
use crate::dom::Element;
use crate::error::Error;

/// Attribute names read by hcpp.
pub mod cpp_attr {
    macro_rules! attrs {
        ($($attr:ident -> $name:literal)*) => {
            $(#[allow(non_upper_case_globals, missing_docs)]
            pub const $attr: &str = $name;)*
        }
    }

    attrs! {
        class -> "class"
        content -> "content"
        action -> "action"
        method -> "method"
        data -> "data"
        ty -> "type"
        id -> "id"
        name -> "name"
        value -> "value"
        rel -> "rel"
        href -> "href"
    }
}

/// Parses the attributes a construct needs out of an element.
pub trait HcppAttrsParser {
    /// Fails with [`crate::ErrorKind::MissingAttr`] on the first absent
    /// required attribute.
    fn parse(element: &Element) -> Result<Self>
    where
        Self: Sized;
}

fn required(element: &Element, attr: &'static str) -> Result<EcoString> {
    element
        .attr(attr)
        .cloned()
        .ok_or_else(|| Error::missing_attr(element.tag.clone(), attr))
}

fn optional(element: &Element, attr: &'static str) -> EcoString {
    element.attr(attr).cloned().unwrap_or_default()
}

macro_rules! hcpp_attrs {
    (@required $el:ident, $attr:expr) => { required($el, $attr)? };
    (@optional $el:ident, $attr:expr) => { optional($el, $attr) };
    ($(
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($(#[$fmeta:meta])* $field:ident: $kind:ident = $attr:ident,)*
        }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Eq)]
            pub struct $name {
                $($(#[$fmeta])* pub $field: EcoString,)*
            }

            impl HcppAttrsParser for $name {
                fn parse(element: &Element) -> Result<Self> {
                    // Fields are checked in declaration order.
                    Ok(Self {
                        $($field: hcpp_attrs!(@$kind element, cpp_attr::$attr),)*
                    })
                }
            }
        )*
    };
}

hcpp_attrs! {
    /// `<div class=".." content="..">`
    pub struct ControlAttr {
        /// The statement selector.
        selector: required = class,
        /// The condition, empty when absent.
        content: optional = content,
    }

    /// `<section class="..">`
    pub struct NamespaceAttr {
        /// The namespace name.
        name: required = class,
    }

    /// `<form content=".." action=".." method="..">`
    pub struct FunctionAttr {
        /// The parameter list.
        params: required = content,
        /// The function name.
        name: required = action,
        /// The return type.
        ret: required = method,
    }

    /// `<object type=".." data="..">`
    pub struct ClassAttr {
        /// Space separated base classes, may be empty.
        bases: required = ty,
        /// The class name.
        name: required = data,
    }

    /// `<param name=".." value=".." class=".." id="..">`
    pub struct ParameterAttr {
        /// The qualifier label.
        label: required = name,
        /// The initializer.
        value: required = value,
        /// The type.
        ty: required = class,
        /// The variable name.
        id: required = id,
    }

    /// `<input name=".." class="..">` and `<output name=".." class="..">`
    pub struct StreamAttr {
        /// The stream.
        stream: required = name,
        /// Space separated operands.
        operands: required = class,
    }

    /// `<meta name=".." content="..">`
    pub struct MetaAttr {
        /// The metadata value.
        content: required = content,
    }

    /// `<link rel=".." href="..">`
    pub struct LinkAttr {
        /// `local` for quoted includes.
        rel: required = rel,
        /// The included path.
        href: required = href,
    }
}

impl ClassAttr {
    /// The base class names, in order.
    pub fn base_list(&self) -> impl Iterator<Item = &str> + Clone {
        self.bases.split_whitespace()
    }
}

impl StreamAttr {
    /// The operand names, in order.
    pub fn operand_list(&self) -> impl Iterator<Item = &str> + Clone {
        self.operands.split_whitespace()
    }
}

/// `<var class=".." id="..">initializer</var>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationAttr {
    /// The variable name.
    pub id: EcoString,
    /// The type.
    pub ty: EcoString,
    /// The trimmed text content of the element.
    pub init: EcoString,
}

impl HcppAttrsParser for DeclarationAttr {
    fn parse(element: &Element) -> Result<Self> {
        Ok(Self {
            id: required(element, cpp_attr::id)?,
            ty: required(element, cpp_attr::class)?,
            init: element.text_content().trim().into(),
        })
    }
}
