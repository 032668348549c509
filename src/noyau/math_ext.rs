// src/noyau/math_ext.rs
//
// Fonctions étendues : factorielle, puissance, racine carrée, logarithmes.
//
// Choix numériques :
// - racine : Newton (méthode de Héron), départ = n
// - ln     : série de Taylor autour de 1, après réduction dans [1, 1.5]
//            (x > 1.5 : ln(x) = 2·ln(√x) ; x < 1 : ln(x) = -ln(1/x))
// - entiers hors plage f64 : racine entière exacte, ln par décalage binaire
// - logarithme(base, x) = ln(x) / ln(base), sans contrainte x ≥ base

use num_bigint::BigInt;
use num_traits::{One, Pow, Signed, ToPrimitive};

use super::arith::div;
use super::erreurs::{ErreurCalc, Resultat};
use super::nombre::Nombre;

/// Arrêt de Newton : écart relatif entre deux approximations successives.
pub const TOLERANCE_RACINE: f64 = 1e-6;

/// Nombre fixe de termes de la série de ln autour de 1.
pub const TERMES_TAYLOR_LN: u32 = 1000;

/// Garde-fou anti-boucle (valeurs extrêmes).
const ITERATIONS_MAX: usize = 10_000;

/// Borne de réduction du ln : en y = 0.5, 1000 termes sont exacts au niveau de l’ulp.
const BORNE_REDUCTION_LN: f64 = 1.5;

/// Garde-fou de temps de calcul pour n!, pas de représentabilité.
pub const FACTORIELLE_ARG_MAX: u64 = 10_000;

/// Au-delà de ~2^1100 bits, un entier est de toute façon hors plage f64 :
/// on ne le construit pas exactement.
const BITS_EXACTS_MAX: u64 = 1100;

/* ------------------------ Factorielle ------------------------ */

/// n! par produit itératif 1..n (exact, sans limite de représentabilité).
///
/// Seul n > `FACTORIELLE_ARG_MAX` est refusé (`ResultTooLarge`). Le plafond
/// d’affichage (170) appartient à l’appelant.
pub fn factorielle(n: &Nombre) -> Resultat<Nombre> {
    if n.est_negatif() {
        return Err(ErreurCalc::NegativeInput);
    }
    let n = n.en_entier().ok_or(ErreurCalc::NonIntegerInput)?;
    let borne = n
        .to_u64()
        .filter(|&b| b <= FACTORIELLE_ARG_MAX)
        .ok_or(ErreurCalc::ResultTooLarge)?;

    let mut produit = BigInt::one();
    for i in 2..=borne {
        produit *= i;
    }
    Ok(Nombre::Entier(produit))
}

/* ------------------------ Puissance ------------------------ */

/// base^exposant.
///
/// - exposant nul => 1
/// - exposant entier => multiplications répétées (exact si la base est entière),
///   inverse si l’exposant est négatif
/// - exposant fractionnaire => puissance réelle ; refusée si la base est négative
pub fn puissance(base: &Nombre, exposant: &Nombre) -> Resultat<Nombre> {
    if exposant.est_zero() {
        return Ok(Nombre::from(1));
    }

    match exposant.en_entier() {
        Some(e) => puissance_entiere(base, &e),
        None => {
            if base.est_negatif() {
                return Err(ErreurCalc::UnsupportedOperation);
            }
            Ok(Nombre::Reel(base.en_f64().powf(exposant.en_f64())).normalise())
        }
    }
}

fn puissance_entiere(base: &Nombre, e: &BigInt) -> Resultat<Nombre> {
    let k = e.abs().to_u32();

    let valeur = match (base, k) {
        (Nombre::Entier(b), Some(k))
            if b.bits().saturating_sub(1) * u64::from(k) <= BITS_EXACTS_MAX =>
        {
            Nombre::Entier(Pow::pow(b, k))
        }
        (_, Some(k)) => Nombre::Reel(base.en_f64().powf(f64::from(k))).normalise(),
        // exposant hors u32 : seule la plage f64 a un sens
        (_, None) => {
            let k = e.abs().to_f64().unwrap_or(f64::INFINITY);
            Nombre::Reel(base.en_f64().powf(k)).normalise()
        }
    };

    if e.is_negative() {
        div(&Nombre::from(1), &valeur)
    } else {
        Ok(valeur)
    }
}

/* ------------------------ Racine carrée ------------------------ */

/// √n par la méthode de Newton.
pub fn racine_carree(n: &Nombre) -> Resultat<Nombre> {
    if n.est_negatif() {
        return Err(ErreurCalc::NegativeInput);
    }
    let x = n.en_f64();
    match n {
        Nombre::Entier(e) if !x.is_finite() => Ok(racine_entiere(e)),
        _ => Ok(Nombre::Reel(racine_f64(x)).normalise()),
    }
}

/// Entier hors plage f64 : racine entière (Newton sur BigInt), exacte pour un
/// carré parfait, réelle sinon.
fn racine_entiere(n: &BigInt) -> Nombre {
    let r = n.sqrt();
    if &r * &r == *n {
        Nombre::Entier(r)
    } else {
        Nombre::Reel(r.to_f64().unwrap_or(f64::INFINITY))
    }
}

/// Newton sur f64 (x ≥ 0). 0 et les valeurs non finies sont rendues telles quelles.
fn racine_f64(x: f64) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }

    let mut estimation = x;
    for _ in 0..ITERATIONS_MAX {
        let suivante = (estimation + x / estimation) / 2.0;
        if (suivante - estimation).abs() < TOLERANCE_RACINE * suivante {
            // un dernier pas : convergence quadratique => erreur au niveau de l’ulp
            return (suivante + x / suivante) / 2.0;
        }
        estimation = suivante;
    }
    estimation
}

/* ------------------------ Logarithmes ------------------------ */

/// Logarithme népérien.
pub fn ln(x: &Nombre) -> Resultat<Nombre> {
    if !est_strictement_positif(x) {
        return Err(ErreurCalc::NonPositiveInput);
    }
    Ok(Nombre::Reel(ln_nombre(x)).normalise())
}

/// Logarithme de x en base `base` (changement de base sur ln).
pub fn logarithme(base: &Nombre, x: &Nombre) -> Resultat<Nombre> {
    if !est_strictement_positif(base) || !est_strictement_positif(x) {
        return Err(ErreurCalc::NonPositiveInput);
    }
    if base.en_f64() == 1.0 {
        return Err(ErreurCalc::InvalidBase);
    }
    Ok(Nombre::Reel(ln_nombre(x) / ln_nombre(base)).normalise())
}

fn est_strictement_positif(x: &Nombre) -> bool {
    let v = x.en_f64();
    !v.is_nan() && v > 0.0
}

/// ln(x), x > 0. Un entier hors plage f64 s’écrit m·2^d (m sur 64 bits) :
/// ln(x) = ln(m) + d·ln(2).
fn ln_nombre(x: &Nombre) -> f64 {
    let v = x.en_f64();
    match x {
        Nombre::Entier(n) if !v.is_finite() => {
            let d = n.bits().saturating_sub(64);
            let m = (n >> d).to_f64().unwrap_or(f64::INFINITY);
            ln_f64(m) + d as f64 * ln_f64(2.0)
        }
        _ => ln_f64(v),
    }
}

fn ln_f64(x: f64) -> f64 {
    if x.is_infinite() {
        return x;
    }
    if x < 1.0 {
        return -ln_f64(1.0 / x);
    }

    // x > 1.5 : ln(x) = 2·ln(√x)
    let mut reduit = x;
    let mut facteur = 1.0;
    while reduit > BORNE_REDUCTION_LN {
        reduit = racine_f64(reduit);
        facteur *= 2.0;
    }

    facteur * taylor_ln(reduit)
}

/// ln(1 + y) = y - y²/2 + y³/3 - … (y ∈ [0, 0.5])
fn taylor_ln(x: f64) -> f64 {
    let y = x - 1.0;
    let mut somme = 0.0;
    let mut terme = y;
    let mut signe = 1.0;

    for k in 1..=TERMES_TAYLOR_LN {
        somme += signe * terme / f64::from(k);
        terme *= y;
        signe = -signe;
    }
    somme
}
