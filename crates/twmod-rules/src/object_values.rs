//! Rule: object_values
//!
//! Renames classes held in string values of any object literal, such as a
//! style or variant map.
//!
//! Pattern:
//! ```tsx
//! // Before
//! const CLASSES = { root: "text-primary-main p-2" };
//!
//! // After
//! const CLASSES = { root: 'text-red-500 p-2' };
//! ```
//!
//! Objects passed straight to the class list joiner
//! (`className={cx({ "a": "b" })}`) are skipped: their keys are the class
//! names and their values are conditions.

use oxc_ast::ast::*;
use oxc_ast_visit::{walk, Visit};
use oxc_span::Span;
use twmod_core::Edit;

use crate::matcher::ClassMatcher;
use crate::registry::Rule;
use crate::class_name_attribute;
use crate::site::{class_list_call, rewrite_string_literal};

const NAME: &str = "object_values";

pub fn check_object_values<'a>(
    program: &Program<'a>,
    class_attribute: &str,
    matcher: &ClassMatcher,
) -> Vec<Edit> {
    let mut visitor = ObjectValuesVisitor {
        class_attribute,
        matcher,
        joiner_objects: Vec::new(),
        edits: Vec::new(),
    };
    visitor.visit_program(program);
    visitor.edits
}

struct ObjectValuesVisitor<'s, 'm> {
    class_attribute: &'s str,
    matcher: &'m ClassMatcher,
    joiner_objects: Vec<Span>,
    edits: Vec<Edit>,
}

impl<'a> Visit<'a> for ObjectValuesVisitor<'_, '_> {
    fn visit_jsx_attribute(&mut self, it: &JSXAttribute<'a>) {
        if let Some(call) = class_list_call(it, self.class_attribute) {
            for argument in call.arguments.iter() {
                if let Argument::ObjectExpression(object) = argument {
                    self.joiner_objects.push(object.span);
                }
            }
        }

        walk::walk_jsx_attribute(self, it);
    }

    fn visit_object_expression(&mut self, it: &ObjectExpression<'a>) {
        if self.joiner_objects.contains(&it.span) {
            walk::walk_object_expression(self, it);
            return;
        }

        for property in it.properties.iter() {
            let ObjectPropertyKind::ObjectProperty(property) = property else {
                continue;
            };
            if let Expression::StringLiteral(value) = &property.value {
                if let Some(edit) = rewrite_string_literal(value, self.matcher, NAME) {
                    self.edits.push(edit);
                }
            }
        }

        walk::walk_object_expression(self, it);
    }
}

pub struct ObjectValuesRule {
    class_attribute: String,
}

impl ObjectValuesRule {
    /// `class_attribute` names the class list attribute whose joiner objects
    /// are left to the `class_name_attribute` rule.
    pub fn new(class_attribute: impl Into<String>) -> Self {
        Self {
            class_attribute: class_attribute.into(),
        }
    }
}

impl Default for ObjectValuesRule {
    fn default() -> Self {
        Self::new(class_name_attribute::DEFAULT_ATTRIBUTE)
    }
}

impl Rule for ObjectValuesRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Rename classes in string values of object literals"
    }

    fn check<'a>(&self, program: &Program<'a>, _source: &str, matcher: &ClassMatcher) -> Vec<Edit> {
        check_object_values(program, &self.class_attribute, matcher)
    }
}
