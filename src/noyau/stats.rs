// src/noyau/stats.rs
//
// Écart type d’un échantillon, composé uniquement des primitives
// (add, sub, div, puissance, racine_carree).

use num_bigint::BigInt;

use super::arith::{add, div, sub};
use super::erreurs::{ErreurCalc, Resultat};
use super::math_ext::{puissance, racine_carree};
use super::nombre::Nombre;

fn taille(donnees: &[f64]) -> Nombre {
    Nombre::Entier(BigInt::from(donnees.len()))
}

/// Moyenne arithmétique. Échantillon vide => `InvalidExpression`.
pub fn moyenne(donnees: &[f64]) -> Resultat<Nombre> {
    let (premier, reste) = donnees
        .split_first()
        .ok_or(ErreurCalc::InvalidExpression)?;

    let somme = reste
        .iter()
        .fold(Nombre::Reel(*premier), |acc, x| add(&acc, &Nombre::Reel(*x)));
    div(&somme, &taille(donnees))
}

/// Variance d’échantillon : Σ (x - moyenne)² / (n - 1).
pub fn variance(donnees: &[f64], moyenne: &Nombre) -> Resultat<Nombre> {
    let deux = Nombre::from(2);
    let mut numerateur = Nombre::from(0);
    for x in donnees {
        let ecart = sub(&Nombre::Reel(*x), moyenne);
        numerateur = add(&numerateur, &puissance(&ecart, &deux)?);
    }
    let denominateur = sub(&taille(donnees), &Nombre::from(1));
    div(&numerateur, &denominateur)
}

/// Écart type d’échantillon.
pub fn ecart_type(donnees: &[f64]) -> Resultat<Nombre> {
    let m = moyenne(donnees)?;
    let v = variance(donnees, &m)?;
    racine_carree(&v)
}
