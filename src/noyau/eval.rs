//! Noyau — évaluation (pipeline réel)
//!
//! validate -> tokenize -> fix_parentheses -> fix_negatives -> RPN -> pile -> arrondi
//!
//! Aucun état entre deux appels : chaque évaluation repart de zéro.

use tracing::{debug, trace};

use super::erreur::CalcError;
use super::jetons::{format_tokens, tokenize, Tok};
use super::normalisation::{fix_negatives, fix_parentheses};
use super::rpn::to_rpn;
use super::validation::validate;

/// Précision par défaut (décimales conservées).
pub const DIGITS_DEFAUT: usize = 4;

/// Garde-fou : au-delà, f64 n’a plus de décimales significatives à offrir.
pub const DIGITS_MAX: usize = 12;

/// Trace des étapes intermédiaires (texte lisible).
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub normalise: String,
    pub rpn: String,
}

/// API publique : évalue une expression, arrondie à `DIGITS_DEFAUT` décimales.
pub fn evaluate(expr_str: &str) -> Result<f64, CalcError> {
    eval_expression(expr_str, DIGITS_DEFAUT).map(|(v, _d)| v)
}

/// Évalue une expression avec `digits` décimales (borné à `DIGITS_MAX`) et
/// retourne la démarche (jetons, jetons normalisés, RPN).
pub fn eval_expression(expr_str: &str, digits: usize) -> Result<(f64, DemarcheNoyau), CalcError> {
    if expr_str.trim().is_empty() {
        return Err(CalcError::invalide("entrée vide"));
    }

    // 1) Validation brute
    validate(expr_str)?;

    // 2) Jetons
    let jetons = tokenize(expr_str)?;
    let jetons_txt = format_tokens(&jetons);
    trace!(jetons = %jetons_txt, "tokenisation");

    // 3) Normalisation (multiplication implicite, puis signes)
    let normalise = fix_negatives(&fix_parentheses(&jetons));
    let normalise_txt = format_tokens(&normalise);
    trace!(normalise = %normalise_txt, "normalisation");

    // 4) RPN
    let rpn = to_rpn(&normalise)?;
    let rpn_txt = format_tokens(&rpn);

    // 5) Pile + arrondi
    let brut = eval_rpn(&rpn)?;
    let valeur = arrondi(brut, digits.min(DIGITS_MAX));
    debug!(expr = expr_str, brut, valeur, "évaluation terminée");

    let d = DemarcheNoyau {
        jetons: jetons_txt,
        normalise: normalise_txt,
        rpn: rpn_txt,
    };

    Ok((valeur, d))
}

/// Évalue une suite RPN avec une pile de valeurs.
///
/// Le premier dépilé est l’opérande de DROITE (empilé en dernier).
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, CalcError> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        let (droite, gauche) = match tok {
            Tok::Num(v) => {
                st.push(*v);
                continue;
            }
            Tok::LPar | Tok::RPar => {
                return Err(CalcError::invalide("parenthèse inattendue en RPN"));
            }
            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or_else(|| CalcError::invalide("opérande manquant"))?;
                let a = st.pop().ok_or_else(|| CalcError::invalide("opérande manquant"))?;
                (b, a)
            }
        };

        let r = match tok {
            Tok::Plus => gauche + droite,
            Tok::Star => gauche * droite,
            Tok::Slash => {
                if droite == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                gauche / droite
            }
            // fix_negatives ne laisse un '-' que s’il n’a pas d’opérande.
            Tok::Minus => return Err(CalcError::invalide("moins résiduel (opérande manquant)")),
            Tok::Num(_) | Tok::LPar | Tok::RPar => unreachable!("filtré plus haut"),
        };
        st.push(r);
    }

    match st.as_slice() {
        [v] if v.is_finite() => Ok(*v),
        [_] => Err(CalcError::invalide("résultat non fini")),
        _ => Err(CalcError::invalide(format!(
            "{} valeurs restantes sur la pile",
            st.len()
        ))),
    }
}

/// Arrondi à `digits` décimales : ×10^d, entier le plus proche
/// (moitié loin de zéro), ÷10^d. Renvoie 0.0 plutôt que -0.0.
pub fn arrondi(x: f64, digits: usize) -> f64 {
    let echelle = 10f64.powi(digits as i32);
    let scaled = x * echelle;
    if !scaled.is_finite() {
        return x;
    }
    let r = scaled.round() / echelle;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}
