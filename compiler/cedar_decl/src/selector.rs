//! Selectors and dynamically-dispatched method declarations.

use std::fmt;

use crate::attrs::DeclAttrs;

/// An Objective-C-style method selector.
///
/// A selector is either nullary (`description`) or a sequence of keyword
/// pieces each of which binds one argument (`setWidth:height:`). Pieces
/// may be empty: `:` is a valid one-argument selector.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Selector {
    pieces: Vec<String>,
    takes_args: bool,
}

impl Selector {
    /// A selector with no arguments.
    #[must_use]
    pub fn nullary(name: impl Into<String>) -> Self {
        Selector {
            pieces: vec![name.into()],
            takes_args: false,
        }
    }

    /// A keyword selector with one piece per argument.
    #[must_use]
    pub fn keyword<I, S>(pieces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selector {
            pieces: pieces.into_iter().map(Into::into).collect(),
            takes_args: true,
        }
    }

    /// Canonical selector text: nullary selectors print bare, keyword
    /// selectors print every piece followed by `:`.
    pub fn print(&self, out: &mut String) {
        if self.takes_args {
            for piece in &self.pieces {
                out.push_str(piece);
                out.push(':');
            }
        } else if let Some(piece) = self.pieces.first() {
            out.push_str(piece);
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::with_capacity(16);
        self.print(&mut text);
        f.write_str(&text)
    }
}

/// A dynamically-dispatched method declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ObjCMethodDecl {
    /// Name of the receiver class or protocol.
    pub class_name: String,
    /// Category the method lives in, when it is declared in one.
    pub category: Option<String>,
    pub selector: Selector,
    /// Instance method (`-`) vs. class method (`+`).
    pub is_instance: bool,
    pub attrs: DeclAttrs,
}

impl ObjCMethodDecl {
    /// An instance method on the given class.
    #[must_use]
    pub fn instance(class_name: impl Into<String>, selector: Selector) -> Self {
        ObjCMethodDecl {
            class_name: class_name.into(),
            category: None,
            selector,
            is_instance: true,
            attrs: DeclAttrs::none(),
        }
    }

    /// A class method on the given class.
    #[must_use]
    pub fn class_method(class_name: impl Into<String>, selector: Selector) -> Self {
        ObjCMethodDecl {
            class_name: class_name.into(),
            category: None,
            selector,
            is_instance: false,
            attrs: DeclAttrs::none(),
        }
    }

    /// Place the method in a named category of its class.
    #[must_use]
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
