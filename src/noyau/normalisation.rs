// src/noyau/normalisation.rs
//
// Deux passes sur la suite de jetons, avant le shunting-yard.
// Chaque passe construit une NOUVELLE suite (lecture avant + regard sur le
// voisin), jamais de splice en place.
//
// 1) fix_parentheses : multiplication implicite
//      ")("  => ") * ("
//      "n("  => "n * ("
//      ")n"  => ") * n"
// 2) fix_negatives : plus aucun '-' binaire après cette passe
//      "-n"    => Num(-n)
//      "-("    => "-1 * ("
//      "x - y" => "x + -y"    (x nombre ou ')')
//
// Après (2), '-' ne survit que s’il n’a pas d’opérande ("5-*2", "3-") ;
// l’évaluateur le refuse.

use super::jetons::Tok;

/// Insère les '*' implicites autour des parenthèses.
///
/// Une seule passe sur les paires adjacentes d’origine : `(2)(3)(4)` donne
/// `(2)*(3)*(4)`, sans jamais revisiter un '*' inséré.
pub fn fix_parentheses(tokens: &[Tok]) -> Vec<Tok> {
    let mut out = Vec::with_capacity(tokens.len() * 2);

    for (i, tok) in tokens.iter().enumerate() {
        out.push(*tok);

        let Some(suivant) = tokens.get(i + 1) else {
            break;
        };

        let implicite = matches!(
            (tok, suivant),
            (Tok::RPar, Tok::LPar) | (Tok::Num(_), Tok::LPar) | (Tok::RPar, Tok::Num(_))
        );
        if implicite {
            out.push(Tok::Star);
        }
    }

    out
}

/// Replie les moins unaires et réécrit les soustractions en additions.
///
/// Une suite de `k` moins consécutifs est traitée d’un bloc :
/// - elle est binaire si le dernier jeton émis est un nombre ou ')' : on émet '+'
/// - la parité de `k` donne le signe appliqué à l’opérande qui suit
///   (nombre replié, ou `-1 *` devant une parenthèse)
pub fn fix_negatives(tokens: &[Tok]) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len() * 2);
    let mut i: usize = 0;

    while i < tokens.len() {
        if tokens[i] != Tok::Minus {
            out.push(tokens[i]);
            i += 1;
            continue;
        }

        let debut = i;
        while i < tokens.len() && tokens[i] == Tok::Minus {
            i += 1;
        }
        let negatif = (i - debut) % 2 == 1;
        let binaire = matches!(out.last(), Some(Tok::Num(_) | Tok::RPar));

        match tokens.get(i) {
            Some(Tok::Num(v)) => {
                if binaire {
                    out.push(Tok::Plus);
                }
                out.push(Tok::Num(if negatif { -v } else { *v }));
                i += 1;
            }
            Some(Tok::LPar) => {
                if binaire {
                    out.push(Tok::Plus);
                }
                if negatif {
                    out.push(Tok::Num(-1.0));
                    out.push(Tok::Star);
                }
                // '(' sera recopié au tour suivant
            }
            _ => {
                // Pas d’opérande : on rend les '-' tels quels.
                out.extend(std::iter::repeat(Tok::Minus).take(i - debut));
            }
        }
    }

    out
}
