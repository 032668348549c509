//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte certaines erreurs attendues (division par zéro, etc.)
//! - invariant clé : une expression bien formée n’est jamais refusée comme invalide

use std::time::{Duration, Instant};

use super::erreurs::ErreurCalc;
use super::eval_expression;

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &ErreurCalc) -> bool {
    // Liste blanche : erreurs de domaine, normales pour un fuzz
    matches!(
        e,
        ErreurCalc::DivisionByZero
            | ErreurCalc::ResultTooLarge
            | ErreurCalc::NegativeExponentNotSupported
            | ErreurCalc::UnsupportedOperation
    )
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Expression + valeur de référence (f64) calculée en parallèle.
struct Cas {
    texte: String,
    valeur: f64,
    /// un diviseur proche de zéro a été rencontré : la référence ne tranche pas
    fragile: bool,
}

fn gen_atome(rng: &mut Rng) -> (String, f64) {
    if rng.pick(4) == 0 {
        let decimaux = ["0.5", "1.5", "2.5", "0.25", "0.1"];
        let t = decimaux[rng.pick(decimaux.len() as u32) as usize];
        let v = t.parse::<f64>().unwrap_or(0.0);
        (t.to_string(), v)
    } else {
        let k = rng.pick(10);
        (k.to_string(), f64::from(k))
    }
}

/// Forme entièrement parenthésée : la référence n’a pas à connaître les précédences.
fn gen_expr(rng: &mut Rng, profondeur: u32) -> Cas {
    if profondeur == 0 || rng.pick(4) == 0 {
        let (texte, valeur) = gen_atome(rng);
        if rng.pick(5) == 0 {
            // puissance bornée sur un atome : reste dans la plage exacte des f64
            let k = rng.pick(3);
            return Cas {
                texte: format!("({texte}^{k})"),
                valeur: valeur.powf(f64::from(k)),
                fragile: false,
            };
        }
        return Cas {
            texte,
            valeur,
            fragile: false,
        };
    }

    if rng.pick(6) == 0 {
        let c = gen_expr(rng, profondeur - 1);
        return Cas {
            texte: format!("(-({}))", c.texte),
            valeur: -c.valeur,
            fragile: c.fragile,
        };
    }

    let a = gen_expr(rng, profondeur - 1);
    let b = gen_expr(rng, profondeur - 1);
    let fragile = a.fragile || b.fragile;

    let (op, valeur, fragile) = match rng.pick(4) {
        0 => ("+", a.valeur + b.valeur, fragile),
        1 => ("-", a.valeur - b.valeur, fragile),
        2 => ("×", a.valeur * b.valeur, fragile),
        _ => ("÷", a.valeur / b.valeur, fragile || b.valeur.abs() < 1e-9),
    };

    Cas {
        texte: format!("({}{}{})", a.texte, op, b.texte),
        valeur,
        fragile,
    }
}

/// Bruit : caractères du clavier dans n’importe quel ordre.
fn gen_bruit(rng: &mut Rng) -> String {
    const ALPHABET: [&str; 20] = [
        "0", "1", "2", "9", ".", "+", "-", "×", "÷", "^", "(", ")", "x!", "√x", "ln", " ", "*",
        "/", "a", "=",
    ];
    let n = 1 + rng.pick(12);
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    let mut rng = Rng::new(0xC0FFEE);
    let mut comparees = 0usize;

    for _ in 0..1500 {
        budget(t0, max);

        let cas = gen_expr(&mut rng, 3);
        match eval_expression(&cas.texte) {
            Ok(n) => {
                if !cas.fragile {
                    let v = n.en_f64();
                    let tol = 1e-6 * cas.valeur.abs().max(1.0);
                    assert!(
                        (v - cas.valeur).abs() <= tol,
                        "expr={:?} obtenu={v} attendu={}",
                        cas.texte,
                        cas.valeur
                    );
                    comparees += 1;
                }
            }
            Err(e) => {
                assert!(is_erreur_attendue(&e), "expr={:?} err={e}", cas.texte);
                if e == ErreurCalc::DivisionByZero {
                    assert!(cas.fragile, "division par zéro imprévue: {:?}", cas.texte);
                }
            }
        }
    }

    // la campagne doit réellement comparer quelque chose
    assert!(comparees > 500, "trop peu de cas comparés: {comparees}");
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let mut rng = Rng::new(42);
    for _ in 0..3000 {
        budget(t0, max);

        let s = gen_bruit(&mut rng);
        // toute issue est permise, sauf la panique ; le résultat reste stable
        let a = eval_expression(&s);
        let b = eval_expression(&s);
        assert_eq!(a, b, "entrée={s:?}");
        // hors raccourci (dont les entiers exacts échappent au seuil), jamais au-delà de 1e300
        let raccourci = ["x!", "√x", "ln"].iter().any(|f| s.contains(f));
        if let (Ok(n), false) = (&a, raccourci) {
            assert!(!n.depasse_seuil(), "entrée={s:?} valeur={n}");
        }
    }
}

#[test]
fn fuzz_safe_deterministe() {
    let mut r1 = Rng::new(7);
    let mut r2 = Rng::new(7);

    for _ in 0..200 {
        let bien_formee = r1.coin();
        assert_eq!(bien_formee, r2.coin());

        let (c1, c2) = if bien_formee {
            (gen_expr(&mut r1, 3).texte, gen_expr(&mut r2, 3).texte)
        } else {
            (gen_bruit(&mut r1), gen_bruit(&mut r2))
        };
        assert_eq!(c1, c2);
        assert_eq!(eval_expression(&c1), eval_expression(&c2));
    }
}
