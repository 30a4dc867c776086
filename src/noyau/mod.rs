//! Noyau d’évaluation arithmétique (f64)
//!
//! Organisation interne :
//! - validation.rs    : parenthèses équilibrées + alphabet autorisé
//! - jetons.rs        : tokenisation (nombres décimaux fusionnés)
//! - normalisation.rs : multiplication implicite + repli des moins
//! - rpn.rs           : shunting-yard (infixe -> postfixe)
//! - eval.rs          : pile RPN + arrondi + pipeline complet
//! - erreur.rs        : InvalidExpression / DivisionByZero

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod normalisation;
pub mod rpn;
pub mod validation;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::CalcError;
pub use eval::{eval_expression, evaluate, DemarcheNoyau};
