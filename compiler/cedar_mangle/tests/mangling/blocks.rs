//! Block-invoke names, discriminators, and selector encodings.

use cedar_decl::{Decl, DeclArena, FnDecl, FnKind, FnSig, LangOpts, ObjCMethodDecl, Selector, VarDecl};
use cedar_mangle::{CtorVariant, DtorVariant, MangleContext, MangleError};
use cedar_target::TargetInfo;
use pretty_assertions::assert_eq;

use crate::common::{c_context, FakeItanium};

fn block_name(ctx: &MangleContext<'_>, block: &cedar_decl::BlockDecl) -> String {
    let mut out = String::new();
    ctx.mangle_block(block, &mut out)
        .expect("block mangling should succeed");
    out
}

#[test]
fn first_block_keeps_the_short_form() {
    let mut arena = DeclArena::new();
    let f = arena.alloc(Decl::Fn(FnDecl::free("f", FnSig::prototyped(vec![]))));
    let b0 = arena.alloc_block(Some(f));
    let b1 = arena.alloc_block(Some(f));

    let linux = TargetInfo::linux_x86_64();
    let structural = FakeItanium::passthrough();
    let ctx = c_context(&linux, &arena, &structural);

    assert_eq!(block_name(&ctx, &b0), "__f_block_invoke");
    assert_eq!(block_name(&ctx, &b1), "__f_block_invoke_2");
}

#[test]
fn block_mangling_is_idempotent() {
    let mut arena = DeclArena::new();
    let f = arena.alloc(Decl::Fn(FnDecl::free("f", FnSig::prototyped(vec![]))));
    let b0 = arena.alloc_block(Some(f));
    let b1 = arena.alloc_block(Some(f));

    let linux = TargetInfo::linux_x86_64();
    let structural = FakeItanium::passthrough();
    let ctx = c_context(&linux, &arena, &structural);

    let first = block_name(&ctx, &b0);
    let second = block_name(&ctx, &b1);
    assert_eq!(block_name(&ctx, &b0), first);
    assert_eq!(block_name(&ctx, &b1), second);
}

#[test]
fn discriminators_span_the_session_not_the_function() {
    let mut arena = DeclArena::new();
    let f = arena.alloc(Decl::Fn(FnDecl::free("f", FnSig::prototyped(vec![]))));
    let g = arena.alloc(Decl::Fn(FnDecl::free("g", FnSig::prototyped(vec![]))));
    let in_f = arena.alloc_block(Some(f));
    let in_g = arena.alloc_block(Some(g));

    let linux = TargetInfo::linux_x86_64();
    let structural = FakeItanium::passthrough();
    let ctx = c_context(&linux, &arena, &structural);

    assert_eq!(block_name(&ctx, &in_f), "__f_block_invoke");
    // The table is per session, so g's first block is the session's
    // second.
    assert_eq!(block_name(&ctx, &in_g), "__g_block_invoke_2");
}

#[test]
fn reset_starts_a_new_session() {
    let mut arena = DeclArena::new();
    let f = arena.alloc(Decl::Fn(FnDecl::free("f", FnSig::prototyped(vec![]))));
    let b0 = arena.alloc_block(Some(f));
    let b1 = arena.alloc_block(Some(f));

    let linux = TargetInfo::linux_x86_64();
    let structural = FakeItanium::passthrough();
    let ctx = c_context(&linux, &arena, &structural);

    assert_eq!(block_name(&ctx, &b0), "__f_block_invoke");
    ctx.reset_discriminators();
    assert_eq!(block_name(&ctx, &b1), "__f_block_invoke");
}

#[test]
fn mangled_enclosing_names_flow_into_the_block() {
    let mut arena = DeclArena::new();
    let f = arena.alloc(Decl::Fn(FnDecl::free("foo", FnSig::prototyped(vec![]))));
    let block = arena.alloc_block(Some(f));

    let linux = TargetInfo::linux_x86_64();
    let structural = FakeItanium::mangling_everything();
    let ctx = MangleContext::new(&linux, LangOpts::cxx(), &arena, &structural);

    assert_eq!(block_name(&ctx, &block), "___Z3foo_block_invoke");
}

#[test]
fn objc_method_blocks_use_the_selector_encoding() {
    let mut arena = DeclArena::new();
    let method = arena.alloc(Decl::ObjCMethod(ObjCMethodDecl::instance(
        "Widget",
        Selector::nullary("count"),
    )));
    let b0 = arena.alloc_block(Some(method));
    let b1 = arena.alloc_block(Some(method));

    let darwin = TargetInfo::darwin_x86_64();
    let structural = FakeItanium::passthrough();
    let ctx = c_context(&darwin, &arena, &structural);

    assert_eq!(block_name(&ctx, &b0), "__15-[Widget count]_block_invoke");
    assert_eq!(block_name(&ctx, &b1), "__15-[Widget count]_block_invoke_2");
}

#[test]
fn global_blocks_take_the_bare_form() {
    let mut arena = DeclArena::new();
    let orphan = arena.alloc_block(None);
    let also_orphan = arena.alloc_block(None);

    let linux = TargetInfo::linux_x86_64();
    let structural = FakeItanium::passthrough();
    let ctx = c_context(&linux, &arena, &structural);

    let mut out = String::new();
    ctx.mangle_global_block(&orphan, &mut out).unwrap();
    assert_eq!(out, "_block_invoke");

    out.clear();
    ctx.mangle_global_block(&also_orphan, &mut out).unwrap();
    assert_eq!(out, "_block_invoke_2");
}

#[test]
fn global_blocks_prefix_a_resolvable_initializer() {
    let mut arena = DeclArena::new();
    let g = arena.alloc(Decl::Var(VarDecl::new("g")));
    let block = arena.alloc_block(Some(g));

    let linux = TargetInfo::linux_x86_64();
    let structural = FakeItanium::passthrough();
    let ctx = c_context(&linux, &arena, &structural);

    let mut out = String::new();
    ctx.mangle_global_block(&block, &mut out).unwrap();
    assert_eq!(out, "g_block_invoke");
}

#[test]
fn contextless_blocks_degrade_to_the_global_form() {
    let mut arena = DeclArena::new();
    let orphan = arena.alloc_block(None);

    let linux = TargetInfo::linux_x86_64();
    let structural = FakeItanium::passthrough();
    let ctx = c_context(&linux, &arena, &structural);

    assert_eq!(block_name(&ctx, &orphan), "_block_invoke");
}

#[test]
fn structor_blocks_carry_the_variant_name() {
    let mut arena = DeclArena::new();
    let ctor = FnDecl {
        ident: Some("Foo".to_owned()),
        kind: FnKind::Ctor,
        sig: FnSig::prototyped(vec![]),
        attrs: cedar_decl::DeclAttrs::none(),
    };
    let dtor = FnDecl {
        ident: Some("Foo".to_owned()),
        kind: FnKind::Dtor,
        sig: FnSig::prototyped(vec![]),
        attrs: cedar_decl::DeclAttrs::none(),
    };
    let b0 = arena.alloc_block(None);
    let b1 = arena.alloc_block(None);

    let linux = TargetInfo::linux_x86_64();
    let structural = FakeItanium::mangling_everything();
    let ctx = MangleContext::new(&linux, LangOpts::cxx(), &arena, &structural);

    let mut out = String::new();
    ctx.mangle_ctor_block(&ctor, CtorVariant::Complete, &b0, &mut out);
    assert_eq!(out, "___ZN3FooC1Ev_block_invoke");

    out.clear();
    ctx.mangle_dtor_block(&dtor, DtorVariant::Base, &b1, &mut out);
    assert_eq!(out, "___ZN3FooD2Ev_block_invoke_2");
}

#[test]
fn generic_entry_point_rejects_structor_contexts() {
    let mut arena = DeclArena::new();
    let ctor = arena.alloc(Decl::Fn(FnDecl {
        ident: Some("Foo".to_owned()),
        kind: FnKind::Ctor,
        sig: FnSig::prototyped(vec![]),
        attrs: cedar_decl::DeclAttrs::none(),
    }));
    let block = arena.alloc_block(Some(ctor));

    let linux = TargetInfo::linux_x86_64();
    let structural = FakeItanium::mangling_everything();
    let ctx = MangleContext::new(&linux, LangOpts::cxx(), &arena, &structural);

    let mut out = String::from("prefix");
    assert_eq!(
        ctx.mangle_block(&block, &mut out),
        Err(MangleError::BlockInStructor)
    );
    assert_eq!(out, "prefix", "failed mangle must leave the sink untouched");
}

#[test]
fn selector_encoding_entry_point() {
    let arena = DeclArena::new();
    let darwin = TargetInfo::darwin_x86_64();
    let structural = FakeItanium::passthrough();
    let ctx = c_context(&darwin, &arena, &structural);

    let method = ObjCMethodDecl::class_method("Widget", Selector::keyword(["setWidth", "height"]))
        .in_category("Layout");
    let mut out = String::new();
    ctx.mangle_objc_method_name(&method, &mut out);
    assert_eq!(out, "34+[Widget(Layout) setWidth:height:]");
}
