//! Calculatrice RPN — évaluation d’expressions arithmétiques
//!
//! Texte -> nombre, sans état : `+ - * /`, parenthèses (avec multiplication
//! implicite), décimaux, moins unaire. Résultat arrondi à 4 décimales.
//!
//! ```
//! use calculatrice_rpn::{evaluate, CalcError};
//!
//! assert_eq!(evaluate("2(3)+4").unwrap(), 10.0);
//! assert_eq!(evaluate("1/3").unwrap(), 0.3333);
//! assert_eq!(evaluate("5/0"), Err(CalcError::DivisionByZero));
//! ```
//!
//! Les étapes du pipeline restent appelables une à une (tests, démarche) :
//! `validate`, `tokenize`, `fix_parentheses`, `fix_negatives`, `to_rpn`, `eval_rpn`.

pub mod noyau;

pub use noyau::eval::{arrondi, eval_rpn, DIGITS_DEFAUT, DIGITS_MAX};
pub use noyau::jetons::{format_tokens, tokenize, Tok};
pub use noyau::normalisation::{fix_negatives, fix_parentheses};
pub use noyau::rpn::{precedence, to_rpn};
pub use noyau::validation::validate;
pub use noyau::{eval_expression, evaluate, CalcError, DemarcheNoyau};
