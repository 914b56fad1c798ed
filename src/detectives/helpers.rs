use swc_ecma_ast::{ArrayLit, CallExpr, Callee, Expr, Lit, MemberExpr, MemberProp};

/// Static string value of a string literal or a template without substitutions.
pub(crate) fn literal_string(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(str::to_string),
        Expr::Tpl(tpl) if tpl.exprs.is_empty() => tpl
            .quasis
            .first()
            .and_then(|quasi| quasi.cooked.as_ref())
            .and_then(|cooked| cooked.as_str())
            .map(str::to_string),
        _ => None,
    }
}

/// String value of the first call argument, ignoring spreads.
pub(crate) fn first_arg_string(call: &CallExpr) -> Option<String> {
    call.args
        .first()
        .filter(|arg| arg.spread.is_none())
        .and_then(|arg| literal_string(&arg.expr))
}

/// String elements of an array literal; holes and non-literals are skipped.
pub(crate) fn array_strings(array: &ArrayLit) -> Vec<String> {
    array
        .elems
        .iter()
        .flatten()
        .filter(|elem| elem.spread.is_none())
        .filter_map(|elem| literal_string(&elem.expr))
        .collect()
}

pub(crate) fn is_ident(expr: &Expr, name: &str) -> bool {
    matches!(expr, Expr::Ident(ident) if ident.sym == name)
}

/// Name of the called identifier, for `name(...)` calls.
pub(crate) fn callee_name(call: &CallExpr) -> Option<&str> {
    match &call.callee {
        Callee::Expr(expr) => match &**expr {
            Expr::Ident(ident) => Some(ident.sym.as_str()),
            _ => None,
        },
        _ => None,
    }
}

pub(crate) fn is_require_call(call: &CallExpr) -> bool {
    callee_name(call) == Some("require")
}

fn member_is(member: &MemberExpr, object: &str, property: &str) -> bool {
    is_ident(&member.obj, object)
        && matches!(&member.prop, MemberProp::Ident(prop) if prop.sym == property)
}

/// `require.main.require(...)`
pub(crate) fn is_main_require_call(call: &CallExpr) -> bool {
    let Callee::Expr(expr) = &call.callee else {
        return false;
    };
    let Expr::Member(outer) = &**expr else {
        return false;
    };
    let MemberProp::Ident(prop) = &outer.prop else {
        return false;
    };
    prop.sym == "require" && matches!(&*outer.obj, Expr::Member(inner) if member_is(inner, "require", "main"))
}

/// `module.exports` or `exports.<name>`.
pub(crate) fn is_exports_member(member: &MemberExpr) -> bool {
    member_is(member, "module", "exports") || is_ident(&member.obj, "exports")
}

/// First array-literal argument of a call.
pub(crate) fn first_array_arg(call: &CallExpr) -> Option<&ArrayLit> {
    call.args.iter().find_map(|arg| match &*arg.expr {
        Expr::Array(array) if arg.spread.is_none() => Some(array),
        _ => None,
    })
}
