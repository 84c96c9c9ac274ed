//! Selector encoding for dynamically-dispatched methods.

use std::fmt::Write;

use cedar_decl::ObjCMethodDecl;

/// Append the length-prefixed selector encoding of a method.
///
/// The body is `<sign>[<class>[(<category>)] <selector>]`; the emitted
/// output is the body's byte length in decimal followed by the body, so
/// later suffixes concatenate without a delimiter scan.
pub(crate) fn write_method_name(method: &ObjCMethodDecl, out: &mut String) {
    let mut name = String::with_capacity(64);
    name.push(if method.is_instance { '-' } else { '+' });
    name.push('[');
    name.push_str(&method.class_name);
    if let Some(category) = &method.category {
        name.push('(');
        name.push_str(category);
        name.push(')');
    }
    name.push(' ');
    method.selector.print(&mut name);
    name.push(']');

    let _ = write!(out, "{}{name}", name.len());
}
