// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
//
// Règles:
// - Num : sortie directe
// - '(' : empilé (précédence sentinelle 1, jamais dépilé par comparaison)
// - ')' : dépile vers la sortie jusqu’au '(' (jeté)
// - opérateur : dépile tant que précédence(sommet) >= précédence(courant)
//   (associativité à gauche : "a / b / c" => "a b / c /")
//
// NOTE:
// - Après fix_negatives, '-' n’arrive ici que sans opérande : il est converti
//   comme les autres, puis refusé par eval_rpn.

use tracing::trace;

use super::erreur::CalcError;
use super::jetons::{format_tokens, Tok};

/// Table de précédence (constante de processus).
pub const fn precedence(t: &Tok) -> u8 {
    match t {
        Tok::LPar => 1,
        Tok::Plus | Tok::Minus => 2,
        Tok::Star | Tok::Slash => 3,
        Tok::Num(_) | Tok::RPar => 0,
    }
}

/// Convertit une suite de jetons normalisée en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, CalcError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => loop {
                match ops.pop() {
                    Some(Tok::LPar) => break,
                    Some(op) => out.push(op),
                    None => return Err(CalcError::invalide("parenthèse fermante orpheline")),
                }
            },

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                while let Some(top) = ops.last() {
                    if precedence(top) >= precedence(&tok) {
                        out.extend(ops.pop());
                    } else {
                        break;
                    }
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if op == Tok::LPar {
            return Err(CalcError::invalide("parenthèses non fermées"));
        }
        out.push(op);
    }

    trace!(rpn = %format_tokens(&out), "shunting-yard terminé");
    Ok(out)
}
