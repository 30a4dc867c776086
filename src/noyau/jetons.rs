// src/noyau/jetons.rs

use std::fmt;

use super::erreur::CalcError;
use super::validation::est_operateur;

/// Jeton atomique. Le type (nombre ou opérateur) est décidé une fois
/// pour toutes à la tokenisation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

impl Tok {
    /// Jeton d’opérateur pour un caractère de `OPERATEURS`.
    pub fn depuis_symbole(c: char) -> Option<Tok> {
        match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            _ => None,
        }
    }

    /// Symbole d’un opérateur (None pour un nombre).
    pub fn symbole(&self) -> Option<char> {
        match self {
            Tok::Num(_) => None,
            Tok::Plus => Some('+'),
            Tok::Minus => Some('-'),
            Tok::Star => Some('*'),
            Tok::Slash => Some('/'),
            Tok::LPar => Some('('),
            Tok::RPar => Some(')'),
        }
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Tok::Num(v) = self {
            return write!(f, "{v}");
        }
        match self.symbole() {
            Some(c) => write!(f, "{c}"),
            None => Ok(()),
        }
    }
}

/// Tokenize une chaîne (déjà validée) en jetons.
/// - opérateurs + - * / et parenthèses : un jeton chacun
/// - tout le reste est avalé jusqu’au prochain opérateur => un seul nombre
///   (entiers et décimaux : "12", "12.5", ".5")
/// - deux points décimaux ou point final ("1..5", "12.") : refusé
pub fn tokenize(s: &str) -> Result<Vec<Tok>, CalcError> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if let Some(op) = Tok::depuis_symbole(c) {
            out.push(op);
            i += 1;
            continue;
        }

        // Nombre : on avale jusqu’au prochain opérateur.
        let start = i;
        let mut point = false;
        while i < chars.len() && !est_operateur(chars[i]) {
            match chars[i] {
                '.' if point => {
                    return Err(CalcError::invalide("nombre avec deux points décimaux"));
                }
                '.' => point = true,
                d if d.is_ascii_digit() => {}
                autre => {
                    return Err(CalcError::invalide(format!("caractère inattendu: '{autre}'")));
                }
            }
            i += 1;
        }

        let texte: String = chars[start..i].iter().collect();
        if texte.ends_with('.') {
            return Err(CalcError::invalide(format!("nombre terminé par un point: {texte}")));
        }

        let v: f64 = texte
            .parse()
            .map_err(|_| CalcError::invalide(format!("nombre invalide: {texte}")))?;
        out.push(Tok::Num(v));
    }

    Ok(out)
}

/// Format utilitaire (démarche / traces) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
