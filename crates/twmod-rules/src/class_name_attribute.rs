//! Rule: class_name_attribute
//!
//! Renames classes in the element class list attribute (`className` by
//! default), in two shapes:
//!
//! ```tsx
//! // A plain string
//! <div className="text-primary-main font-bold" />
//! <div className='text-red-500 font-bold' />
//!
//! // A class-joining call: string arguments are rewritten, and object
//! // arguments have their keys rewritten, since the keys are the
//! // conditional class names
//! <div className={cx("text-primary-main", { "bg-primary-main": active })} />
//! <div className={cx('text-red-500', { 'bg-red-500': active })} />
//! ```

use oxc_ast::ast::*;
use oxc_ast_visit::{walk, Visit};
use twmod_core::Edit;

use crate::matcher::ClassMatcher;
use crate::registry::Rule;
use crate::site::{
    attribute_named, class_list_call, rewrite_attribute_string, rewrite_string_literal,
};

const NAME: &str = "class_name_attribute";

pub const DEFAULT_ATTRIBUTE: &str = "className";

pub fn check_class_name_attribute<'a>(
    program: &Program<'a>,
    source: &str,
    attribute: &str,
    matcher: &ClassMatcher,
) -> Vec<Edit> {
    let mut visitor = ClassNameVisitor {
        source,
        attribute,
        matcher,
        edits: Vec::new(),
    };
    visitor.visit_program(program);
    visitor.edits
}

struct ClassNameVisitor<'s, 'm> {
    source: &'s str,
    attribute: &'s str,
    matcher: &'m ClassMatcher,
    edits: Vec<Edit>,
}

impl<'a> Visit<'a> for ClassNameVisitor<'_, '_> {
    fn visit_jsx_attribute(&mut self, it: &JSXAttribute<'a>) {
        if let Some(call) = class_list_call(it, self.attribute) {
            self.check_call(call);
        } else if let Some(JSXAttributeValue::StringLiteral(literal)) = &it.value {
            if attribute_named(it, self.attribute) {
                if let Some(edit) = rewrite_attribute_string(literal, self.source, self.matcher, NAME)
                {
                    self.edits.push(edit);
                }
            }
        }

        walk::walk_jsx_attribute(self, it);
    }
}

impl ClassNameVisitor<'_, '_> {
    fn check_call(&mut self, call: &CallExpression<'_>) {
        for argument in call.arguments.iter() {
            match argument {
                Argument::StringLiteral(literal) => {
                    if let Some(edit) = rewrite_string_literal(literal, self.matcher, NAME) {
                        self.edits.push(edit);
                    }
                }
                Argument::ObjectExpression(object) => self.check_keys(object),
                _ => {}
            }
        }
    }

    fn check_keys(&mut self, object: &ObjectExpression<'_>) {
        for property in object.properties.iter() {
            let ObjectPropertyKind::ObjectProperty(property) = property else {
                continue;
            };
            if let PropertyKey::StringLiteral(key) = &property.key {
                if let Some(edit) = rewrite_string_literal(key, self.matcher, NAME) {
                    self.edits.push(edit);
                }
            }
        }
    }
}

pub struct ClassNameAttributeRule {
    attribute: String,
}

impl ClassNameAttributeRule {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }
}

impl Default for ClassNameAttributeRule {
    fn default() -> Self {
        Self::new(DEFAULT_ATTRIBUTE)
    }
}

impl Rule for ClassNameAttributeRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Rename classes in className strings and class-joining call arguments"
    }

    fn check<'a>(&self, program: &Program<'a>, source: &str, matcher: &ClassMatcher) -> Vec<Edit> {
        check_class_name_attribute(program, source, &self.attribute, matcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;
    use twmod_core::apply_edits;

    fn transform(source: &str) -> (usize, String) {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
        assert!(ret.errors.is_empty());
        let matcher = ClassMatcher::new(
            [
                ("text-primary-main", "text-red-500"),
                ("bg-primary-main", "bg-red-500"),
            ]
            .into_iter()
            .collect(),
        )
        .unwrap();
        let edits = check_class_name_attribute(&ret.program, source, DEFAULT_ATTRIBUTE, &matcher);
        (edits.len(), apply_edits(source, &edits).unwrap())
    }

    #[test]
    fn test_string_attribute() {
        let source = r#"const a = <div className="text-primary-main font-bold" />;"#;
        let (count, result) = transform(source);
        assert_eq!(count, 1);
        assert_eq!(result, "const a = <div className='text-red-500 font-bold' />;");
    }

    #[test]
    fn test_single_quoted_attribute() {
        let source = r#"const a = <div className='bg-primary-main' />;"#;
        let (_, result) = transform(source);
        assert_eq!(result, "const a = <div className='bg-red-500' />;");
    }

    #[test]
    fn test_unmatched_attribute_untouched() {
        let source = r#"const a = <div className="flex font-bold" />;"#;
        let (count, result) = transform(source);
        assert_eq!(count, 0);
        assert_eq!(result, source);
    }

    #[test]
    fn test_call_string_arguments() {
        let source = r#"const a = <div className={cx("text-primary-main", "p-2", 'bg-primary-main')} />;"#;
        let (count, result) = transform(source);
        assert_eq!(count, 2);
        assert_eq!(
            result,
            r#"const a = <div className={cx('text-red-500', "p-2", 'bg-red-500')} />;"#
        );
    }

    #[test]
    fn test_call_object_keys_only() {
        let source =
            r#"const a = <div className={cx({ "bg-primary-main": active, p: "text-primary-main" })} />;"#;
        let (count, result) = transform(source);
        assert_eq!(count, 1);
        assert_eq!(
            result,
            r#"const a = <div className={cx({ 'bg-red-500': active, p: "text-primary-main" })} />;"#
        );
    }

    #[test]
    fn test_identifier_keys_skipped() {
        let source = r#"const a = <div className={cx({ active: isActive })} />;"#;
        let (count, _) = transform(source);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_other_expressions_skipped() {
        let source = r#"const a = <div className={active ? "text-primary-main" : "p-2"} />;"#;
        let (count, _) = transform(source);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_other_attribute_ignored() {
        let source = r#"const a = <div title="text-primary-main" />;"#;
        let (count, _) = transform(source);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_nested_children() {
        let source = r#"const a = <ul><li className="text-primary-main">x</li></ul>;"#;
        let (count, result) = transform(source);
        assert_eq!(count, 1);
        assert!(result.contains("<li className='text-red-500'>"));
    }

    #[test]
    fn test_parenthesized_call() {
        let source = r#"const a = <div className={(cx("text-primary-main"))} />;"#;
        let (count, result) = transform(source);
        assert_eq!(count, 1);
        assert_eq!(result, "const a = <div className={(cx('text-red-500'))} />;");
    }
}
