//! Helpers shared by the match-site rules

use oxc_ast::ast::{
    CallExpression, Expression, JSXAttribute, JSXAttributeName, JSXAttributeValue, StringLiteral,
};
use oxc_span::Span;
use twmod_core::{js_string_literal, jsx_attribute_literal, Edit};

use crate::matcher::{ClassMatcher, ClassRewrite};

/// Whether the attribute is a plain (non-namespaced) attribute named `name`
pub(crate) fn attribute_named(attribute: &JSXAttribute<'_>, name: &str) -> bool {
    match &attribute.name {
        JSXAttributeName::Identifier(ident) => ident.name.as_str() == name,
        JSXAttributeName::NamespacedName(_) => false,
    }
}

/// The joiner call of a class list attribute, `name={cx(...)}`.
///
/// Parentheses around the call are looked through.
pub(crate) fn class_list_call<'b, 'a>(
    attribute: &'b JSXAttribute<'a>,
    name: &str,
) -> Option<&'b CallExpression<'a>> {
    if !attribute_named(attribute, name) {
        return None;
    }
    let Some(JSXAttributeValue::ExpressionContainer(container)) = &attribute.value else {
        return None;
    };
    match container.expression.as_expression()?.without_parentheses() {
        Expression::CallExpression(call) => Some(call),
        _ => None,
    }
}

/// Rewrite a JavaScript string literal, re-emitted single-quoted
pub(crate) fn rewrite_string_literal(
    literal: &StringLiteral<'_>,
    matcher: &ClassMatcher,
    rule: &'static str,
) -> Option<Edit> {
    let rewrite = rewrite_value(literal.value.as_str(), matcher, rule, literal.span)?;
    Some(Edit::new(
        literal.span,
        js_string_literal(&rewrite.value),
        rewrite.describe(),
    ))
}

/// Rewrite a JSX attribute string.
///
/// JSX attribute strings are taken verbatim from between the quotes, since
/// they have no escape sequences.
pub(crate) fn rewrite_attribute_string(
    literal: &StringLiteral<'_>,
    source: &str,
    matcher: &ClassMatcher,
    rule: &'static str,
) -> Option<Edit> {
    let start = literal.span.start as usize;
    let end = literal.span.end as usize;
    if end < start + 2 {
        return None;
    }
    let raw = source.get(start + 1..end - 1)?;

    let rewrite = rewrite_value(raw, matcher, rule, literal.span)?;
    Some(Edit::new(
        literal.span,
        jsx_attribute_literal(&rewrite.value),
        rewrite.describe(),
    ))
}

/// Run the matcher on one value; a match error leaves the value unchanged.
///
/// The matcher only yields map keys, so the error arm is a guard for a
/// pattern and map that disagree.
fn rewrite_value(
    value: &str,
    matcher: &ClassMatcher,
    rule: &'static str,
    span: Span,
) -> Option<ClassRewrite> {
    match matcher.rewrite_value(value) {
        Ok(rewrite) => rewrite,
        Err(err) => {
            tracing::warn!(rule, offset = span.start, "{}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;
    use twmod_core::RenameMap;

    #[test]
    fn test_match_error_leaves_value() {
        let matcher = ClassMatcher::with_pattern(RenameMap::default(), r"text-\w+");
        assert!(rewrite_value("text-primary-main", &matcher, "test", Span::new(0, 0)).is_none());
    }

    #[test]
    fn test_class_list_call_through_parentheses() {
        let source = r#"const a = <div className={((cx("p-2")))} title={cx("p-2")} />;"#;
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
        assert!(ret.errors.is_empty());

        struct Calls(Vec<bool>);
        impl<'a> oxc_ast_visit::Visit<'a> for Calls {
            fn visit_jsx_attribute(&mut self, it: &JSXAttribute<'a>) {
                self.0.push(class_list_call(it, "className").is_some());
            }
        }
        let mut calls = Calls(Vec::new());
        oxc_ast_visit::Visit::visit_program(&mut calls, &ret.program);
        assert_eq!(calls.0, vec![true, false]);
    }
}
