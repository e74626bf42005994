//! twmod-rules: Class-name match sites for JSX/TSX sources
//!
//! Available rules:
//! - object_values: Rename classes in string values of object literals
//! - classes_attribute: Rename classes in `classes={{ slot: '...' }}` values
//! - class_name_attribute: Rename classes in `className="..."` and in the
//!   arguments of a joiner call, `className={cx('...', { '...': cond })}`

pub mod class_name_attribute;
pub mod classes_attribute;
pub mod matcher;
pub mod object_values;
pub mod registry;
mod site;
pub mod source;

pub use class_name_attribute::check_class_name_attribute;
pub use classes_attribute::check_classes_attribute;
pub use matcher::{ClassMatcher, ClassRewrite, MatchError, MatcherError};
pub use object_values::check_object_values;
pub use registry::{RewriteOptions, Rule, RuleRegistry};
pub use source::{RewriteError, Rewritten, SourceUnit};
