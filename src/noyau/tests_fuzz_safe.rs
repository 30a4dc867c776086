//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte certaines erreurs attendues (division par zéro)
//! - invariant clé : tout résultat est fini et arrondi à DIGITS_DEFAUT décimales

use std::time::{Duration, Instant};

use super::erreur::CalcError;
use super::eval::DIGITS_DEFAUT;
use super::evaluate;
use super::validation::est_operateur;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &CalcError) -> bool {
    // Liste blanche : division par zéro (un sous-terme peut valoir 0),
    // débordement improbable mais légitime.
    match e {
        CalcError::DivisionByZero => true,
        CalcError::InvalidExpression(msg) => msg.contains("non fini"),
    }
}

fn check_arrondi(expr: &str, v: f64) {
    assert!(v.is_finite(), "expr={expr:?} v={v}");
    let scaled = v * 10f64.powi(DIGITS_DEFAUT as i32);
    let ecart = (scaled - scaled.round()).abs();
    assert!(
        ecart <= 1e-6 * scaled.abs().max(1.0),
        "expr={expr:?} v={v} pas arrondi à {DIGITS_DEFAUT} décimales"
    );
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}", 10 + rng.pick(90)),
        3 => format!("{}.5", rng.pick(10)),
        4 => format!("0.{}", 1 + rng.pick(99)),
        _ => format!("{}", 1 + rng.pick(9)),
    }
}

fn gen_op(rng: &mut Rng) -> char {
    match rng.pick(4) {
        0 => '+',
        1 => '-',
        2 => '*',
        _ => '/',
    }
}

fn gen_expr(rng: &mut Rng, profondeur: u32) -> String {
    if profondeur == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(7) {
        0 => gen_nombre(rng),
        1 => format!("({})", gen_expr(rng, profondeur - 1)),
        2 => format!("-{}", gen_atome(rng, profondeur - 1)),
        3 => format!("{}({})", gen_nombre(rng), gen_expr(rng, profondeur - 1)),
        4 => format!(
            "({})({})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        _ => format!(
            "{}{}{}",
            gen_expr(rng, profondeur - 1),
            gen_op(rng),
            gen_expr(rng, profondeur - 1)
        ),
    }
}

/// Opérande d’un moins unaire : nombre ou groupe parenthésé.
fn gen_atome(rng: &mut Rng, profondeur: u32) -> String {
    if rng.pick(2) == 0 {
        gen_nombre(rng)
    } else {
        format!("({})", gen_expr(rng, profondeur))
    }
}

fn espace_les_operateurs(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        if est_operateur(c) {
            out.push(' ');
            out.push(c);
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_expressions_bien_formees() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..2_000 {
        budget(start, max);

        let expr = gen_expr(&mut rng, 4);
        let a = evaluate(&expr);

        match &a {
            Ok(v) => check_arrondi(&expr, *v),
            Err(e) => assert!(is_erreur_attendue(e), "expr={expr:?} erreur inattendue: {e}"),
        }

        // déterminisme : aucun état caché
        assert_eq!(a, evaluate(&expr), "expr={expr:?}");

        // les espaces autour des opérateurs ne changent rien
        assert_eq!(a, evaluate(&espace_les_operateurs(&expr)), "expr={expr:?}");
    }
}

#[test]
fn fuzz_caractere_interdit_toujours_refuse() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);
    let intrus = ['x', '^', '%', ',', 'a', '=', '#', 'é', '√', '_'];

    for _ in 0..1_000 {
        budget(start, max);

        let expr = gen_expr(&mut rng, 3);
        let mut chars: Vec<char> = expr.chars().collect();
        let pos = rng.pick(chars.len() as u32 + 1) as usize;
        let c = intrus[rng.pick(intrus.len() as u32) as usize];
        chars.insert(pos, c);
        let pollue: String = chars.into_iter().collect();

        assert!(
            matches!(evaluate(&pollue), Err(CalcError::InvalidExpression(_))),
            "expr={pollue:?}"
        );
    }
}

#[test]
fn fuzz_parenthese_retiree_toujours_refusee() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(7);

    for _ in 0..1_000 {
        budget(start, max);

        let expr = gen_expr(&mut rng, 3);
        let positions: Vec<usize> = expr
            .char_indices()
            .filter(|(_, c)| *c == '(' || *c == ')')
            .map(|(i, _)| i)
            .collect();
        if positions.is_empty() {
            continue;
        }

        let i = positions[rng.pick(positions.len() as u32) as usize];
        let mut ampute = expr.clone();
        ampute.remove(i);

        assert!(
            matches!(evaluate(&ampute), Err(CalcError::InvalidExpression(_))),
            "expr={ampute:?}"
        );
    }
}
