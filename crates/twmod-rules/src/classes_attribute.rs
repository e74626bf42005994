//! Rule: classes_attribute
//!
//! Renames classes in the values of a per-slot class override object passed
//! through a JSX attribute (`classes` by default). Keys are slot names and
//! are never touched.
//!
//! Pattern:
//! ```tsx
//! // Before
//! <Button classes={{ root: "text-primary-main" }} />
//!
//! // After
//! <Button classes={{ root: 'text-red-500' }} />
//! ```

use oxc_ast::ast::*;
use oxc_ast_visit::{walk, Visit};
use twmod_core::Edit;

use crate::matcher::ClassMatcher;
use crate::registry::Rule;
use crate::site::{attribute_named, rewrite_string_literal};

const NAME: &str = "classes_attribute";

pub const DEFAULT_ATTRIBUTE: &str = "classes";

pub fn check_classes_attribute<'a>(
    program: &Program<'a>,
    attribute: &str,
    matcher: &ClassMatcher,
) -> Vec<Edit> {
    let mut visitor = ClassesAttributeVisitor {
        attribute,
        matcher,
        edits: Vec::new(),
    };
    visitor.visit_program(program);
    visitor.edits
}

struct ClassesAttributeVisitor<'s, 'm> {
    attribute: &'s str,
    matcher: &'m ClassMatcher,
    edits: Vec<Edit>,
}

impl<'a> Visit<'a> for ClassesAttributeVisitor<'_, '_> {
    fn visit_jsx_attribute(&mut self, it: &JSXAttribute<'a>) {
        if attribute_named(it, self.attribute) {
            if let Some(JSXAttributeValue::ExpressionContainer(container)) = &it.value {
                if let JSXExpression::ObjectExpression(object) = &container.expression {
                    self.check_values(object);
                }
            }
        }

        walk::walk_jsx_attribute(self, it);
    }
}

impl ClassesAttributeVisitor<'_, '_> {
    fn check_values(&mut self, object: &ObjectExpression<'_>) {
        for property in object.properties.iter() {
            let ObjectPropertyKind::ObjectProperty(property) = property else {
                continue;
            };
            if let Expression::StringLiteral(value) = &property.value {
                if let Some(edit) = rewrite_string_literal(value, self.matcher, NAME) {
                    self.edits.push(edit);
                }
            }
        }
    }
}

pub struct ClassesAttributeRule {
    attribute: String,
}

impl ClassesAttributeRule {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }
}

impl Default for ClassesAttributeRule {
    fn default() -> Self {
        Self::new(DEFAULT_ATTRIBUTE)
    }
}

impl Rule for ClassesAttributeRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Rename classes in the values of a classes={{ ... }} attribute"
    }

    fn check<'a>(&self, program: &Program<'a>, _source: &str, matcher: &ClassMatcher) -> Vec<Edit> {
        check_classes_attribute(program, &self.attribute, matcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;
    use twmod_core::apply_edits;

    fn transform_with_attribute(source: &str, attribute: &str) -> (usize, String) {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
        assert!(ret.errors.is_empty());
        let matcher = ClassMatcher::new(
            [("text-primary-main", "text-red-500")].into_iter().collect(),
        )
        .unwrap();
        let edits = check_classes_attribute(&ret.program, attribute, &matcher);
        (edits.len(), apply_edits(source, &edits).unwrap())
    }

    fn transform(source: &str) -> (usize, String) {
        transform_with_attribute(source, DEFAULT_ATTRIBUTE)
    }

    #[test]
    fn test_classes_value() {
        let source = r#"const a = <Button classes={{ root: "text-primary-main" }} />;"#;
        let (count, result) = transform(source);
        assert_eq!(count, 1);
        assert_eq!(result, "const a = <Button classes={{ root: 'text-red-500' }} />;");
    }

    #[test]
    fn test_classes_keys_untouched() {
        let source = r#"const a = <Button classes={{ "text-primary-main": "p-2" }} />;"#;
        let (count, result) = transform(source);
        assert_eq!(count, 0);
        assert_eq!(result, source);
    }

    #[test]
    fn test_other_attribute_ignored() {
        let source = r#"const a = <Button slots={{ root: "text-primary-main" }} />;"#;
        let (count, _) = transform(source);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_custom_attribute_name() {
        let source = r#"const a = <Button slots={{ root: "text-primary-main" }} />;"#;
        let (count, result) = transform_with_attribute(source, "slots");
        assert_eq!(count, 1);
        assert!(result.contains("slots={{ root: 'text-red-500' }}"));
    }

    #[test]
    fn test_nested_element() {
        let source = r#"const a = <div><Chip classes={{ label: 'text-primary-main', icon: iconCls }} /></div>;"#;
        let (count, result) = transform(source);
        assert_eq!(count, 1);
        assert!(result.contains("label: 'text-red-500', icon: iconCls"));
    }

    #[test]
    fn test_non_object_value_ignored() {
        let source = r#"const a = <Button classes={styles} />;"#;
        let (count, _) = transform(source);
        assert_eq!(count, 0);
    }
}
