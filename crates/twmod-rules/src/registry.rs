//! Rule trait and registry for twmod match-site rules

use oxc_ast::ast::Program;
use twmod_core::{dedup_edits, Edit};

use crate::class_name_attribute::{self, ClassNameAttributeRule};
use crate::classes_attribute::{self, ClassesAttributeRule};
use crate::matcher::ClassMatcher;
use crate::object_values::ObjectValuesRule;

/// A match-site rule that finds class strings and suggests rewrites
pub trait Rule: Send + Sync {
    /// The unique identifier for this rule (e.g., "object_values")
    fn name(&self) -> &'static str;

    /// A short description of what this rule does
    fn description(&self) -> &'static str;

    /// Check a parsed program and return suggested edits
    fn check<'a>(&self, program: &Program<'a>, source: &str, matcher: &ClassMatcher) -> Vec<Edit>;
}

/// Attribute names the rules look for
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    /// Attribute holding an element's class list
    pub class_attribute: String,
    /// Attribute holding per-slot class overrides
    pub classes_attribute: String,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            class_attribute: class_name_attribute::DEFAULT_ATTRIBUTE.to_string(),
            classes_attribute: classes_attribute::DEFAULT_ATTRIBUTE.to_string(),
        }
    }
}

/// Registry of all match-site rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a registry with the built-in rules and default attribute names
    pub fn new() -> Self {
        Self::with_options(&RewriteOptions::default())
    }

    pub fn with_options(options: &RewriteOptions) -> Self {
        let mut registry = Self { rules: Vec::new() };

        registry.register(Box::new(ObjectValuesRule::new(
            options.class_attribute.as_str(),
        )));
        registry.register(Box::new(ClassesAttributeRule::new(
            options.classes_attribute.as_str(),
        )));
        registry.register(Box::new(ClassNameAttributeRule::new(
            options.class_attribute.as_str(),
        )));

        registry
    }

    /// Register a new rule
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Get all rule names
    pub fn all_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Get all rules with their descriptions
    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules
            .iter()
            .map(|r| (r.name(), r.description()))
            .collect()
    }

    /// Run every rule on the same program.
    ///
    /// Rules run independently against the original text; identical edits
    /// from rules that reach the same literal are merged.
    pub fn check_all<'a>(
        &self,
        program: &Program<'a>,
        source: &str,
        matcher: &ClassMatcher,
    ) -> Vec<Edit> {
        let mut edits = Vec::new();
        for rule in &self.rules {
            edits.extend(rule.check(program, source, matcher));
        }
        dedup_edits(edits)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    #[test]
    fn test_builtin_rules() {
        let registry = RuleRegistry::new();
        assert_eq!(
            registry.all_names(),
            vec!["object_values", "classes_attribute", "class_name_attribute"]
        );
        assert_eq!(registry.list_rules().len(), 3);
    }

    #[test]
    fn test_overlapping_rules_merge() {
        let source = r#"const a = <Button classes={{ root: "text-primary-main" }} />;"#;
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
        let matcher = ClassMatcher::new(
            [("text-primary-main", "text-red-500")].into_iter().collect(),
        )
        .unwrap();

        let edits = RuleRegistry::new().check_all(&ret.program, source, &matcher);
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].replacement, "'text-red-500'");
    }
}
