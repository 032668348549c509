// src/noyau/arith.rs
//
// Arithmétique de base (+ - × ÷).
// Entier ⊕ Entier reste exact ; tout mélange avec un réel passe en f64.

use super::erreurs::{ErreurCalc, Resultat};
use super::nombre::Nombre;

pub fn add(a: &Nombre, b: &Nombre) -> Nombre {
    match (a, b) {
        (Nombre::Entier(x), Nombre::Entier(y)) => Nombre::Entier(x + y),
        _ => Nombre::Reel(a.en_f64() + b.en_f64()).normalise(),
    }
}

pub fn sub(a: &Nombre, b: &Nombre) -> Nombre {
    match (a, b) {
        (Nombre::Entier(x), Nombre::Entier(y)) => Nombre::Entier(x - y),
        _ => Nombre::Reel(a.en_f64() - b.en_f64()).normalise(),
    }
}

pub fn mul(a: &Nombre, b: &Nombre) -> Nombre {
    match (a, b) {
        (Nombre::Entier(x), Nombre::Entier(y)) => Nombre::Entier(x * y),
        _ => Nombre::Reel(a.en_f64() * b.en_f64()).normalise(),
    }
}

/// Division réelle (6 ÷ 4 = 1.5), renormalisée.
pub fn div(a: &Nombre, b: &Nombre) -> Resultat<Nombre> {
    if b.est_zero() {
        return Err(ErreurCalc::DivisionByZero);
    }
    Ok(Nombre::Reel(a.en_f64() / b.en_f64()).normalise())
}
