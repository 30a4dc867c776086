// src/noyau/validation.rs
//
// Validation brute, avant tout découpage :
// - équilibre des parenthèses (compteur unique, jamais négatif)
// - alphabet autorisé : 0-9 . + - * / ( ) (espaces ignorés)

use super::erreur::CalcError;

/// Caractères d’opérateurs / parenthèses reconnus par le noyau.
pub const OPERATEURS: [char; 6] = ['+', '-', '*', '/', '(', ')'];

/// Vrai si `c` est un opérateur ou une parenthèse.
pub fn est_operateur(c: char) -> bool {
    OPERATEURS.contains(&c)
}

/// Vérifie l’entrée brute en une seule passe gauche → droite.
pub fn validate(s: &str) -> Result<(), CalcError> {
    let mut ouvertes: usize = 0;

    for c in s.chars() {
        if c.is_whitespace() {
            continue;
        }

        match c {
            '(' => ouvertes += 1,
            ')' => {
                ouvertes = ouvertes
                    .checked_sub(1)
                    .ok_or_else(|| CalcError::invalide("parenthèse fermante sans ouvrante"))?;
            }
            _ if c.is_ascii_digit() || c == '.' || est_operateur(c) => {}
            _ => return Err(CalcError::invalide(format!("caractère interdit: '{c}'"))),
        }
    }

    if ouvertes != 0 {
        return Err(CalcError::invalide("parenthèses non fermées"));
    }

    Ok(())
}
