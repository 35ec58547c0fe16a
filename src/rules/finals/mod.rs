pub mod predicates;
pub mod rules;
