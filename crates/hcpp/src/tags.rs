//! HTML tags recognized by hcpp

macro_rules! tags {
    ($($tag:ident -> $name:literal)*) => {
        $(#[allow(non_upper_case_globals, missing_docs)]
        pub const $tag: &str = $name;)*
    }
}

/// Tag names that map onto C++ constructs.
pub mod cpp_tag {
    tags! {
        control -> "div"
        namespace -> "section"
        function -> "form"
        class -> "object"
        declaration -> "var"
        parameter -> "param"
        input -> "input"
        output -> "output"
        main -> "main"
    }
}

/// Tag names read from the document header region.
pub mod head_tag {
    tags! {
        head -> "head"
        body -> "body"
        title -> "title"
        meta -> "meta"
        link -> "link"
    }
}

/// The statement kind selected by the `class` attribute of a control block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// `while (cond) { ... }`
    While,
    /// `for (init; cond; step) { ... }`
    For,
    /// `do { ... } (cond);`
    Do,
    /// `if (cond) { ... }`
    If,
    /// `else if (cond) { ... }`
    ElseIf,
    /// `else { ... }`
    Else,
}

impl ControlKind {
    /// Resolves a selector value, `None` for anything outside the known set.
    pub fn from_selector(selector: &str) -> Option<Self> {
        Some(match selector {
            "while" => Self::While,
            "for" => Self::For,
            "do" => Self::Do,
            "if" => Self::If,
            "else if" => Self::ElseIf,
            "else" => Self::Else,
            _ => return None,
        })
    }

    /// The C++ keyword(s) opening the statement.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::While => "while",
            Self::For => "for",
            Self::Do => "do",
            Self::If => "if",
            Self::ElseIf => "else if",
            Self::Else => "else",
        }
    }
}
