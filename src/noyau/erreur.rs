// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau. Deux familles seulement :
/// - expression mal formée (parenthèses, caractères, nombres, pile RPN)
/// - division par zéro
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Expression structurellement invalide (le texte donne le détail).
    #[error("expression invalide : {0}")]
    InvalidExpression(String),

    /// Diviseur nul pendant l’évaluation RPN.
    #[error("division par zéro")]
    DivisionByZero,
}

impl CalcError {
    /// Raccourci : `CalcError::invalide("parenthèse fermante orpheline")`.
    pub fn invalide(detail: impl Into<String>) -> Self {
        Self::InvalidExpression(detail.into())
    }
}
