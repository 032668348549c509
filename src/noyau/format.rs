// src/noyau/format.rs
//
// Affichage d’un résultat : séparateur de milliers sur la partie entière,
// partie décimale recopiée telle quelle, signe conservé (y compris -0.5).

use super::nombre::Nombre;

/// Séparateur de milliers.
pub const SEPARATEUR: char = ',';

/// "1234567.25" -> "1,234,567.25"
pub fn format_milliers(n: &Nombre) -> String {
    let brut = n.to_string();

    let (signe, corps) = match brut.strip_prefix('-') {
        Some(reste) => ("-", reste),
        None => ("", brut.as_str()),
    };

    // inf / NaN : rien à grouper
    if !corps.starts_with(|c: char| c.is_ascii_digit()) {
        return brut;
    }

    let (entier, decimales) = match corps.split_once('.') {
        Some((e, d)) => (e, Some(d)),
        None => (corps, None),
    };

    let mut out = String::with_capacity(brut.len() + entier.len() / 3);
    out.push_str(signe);
    out.push_str(&grouper(entier));
    if let Some(d) = decimales {
        out.push('.');
        out.push_str(d);
    }
    out
}

fn grouper(chiffres: &str) -> String {
    let n = chiffres.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(SEPARATEUR);
        }
        out.push(c);
    }
    out
}
