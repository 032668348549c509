//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - erreurs.rs    : taxonomie des erreurs (message affiché tel quel)
//! - nombre.rs     : Nombre (entier exact | réel) + normalisation
//! - arith.rs      : + - × ÷
//! - math_ext.rs   : factorielle, puissance, racine carrée, ln / logarithme
//! - jetons.rs     : tokenisation
//! - validation.rs : parenthèses + forme générale + raccourci fonction(littéral)
//! - pile.rs       : moteur à deux piles (précédences)
//! - eval.rs       : pipeline complet
//! - format.rs     : affichage avec séparateur de milliers
//! - stats.rs      : écart type (utilitaire en ligne de commande)

pub mod arith;
pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod math_ext;
pub mod nombre;
pub mod pile;
pub mod stats;
pub mod validation;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::{ErreurCalc, Resultat};
pub use eval::eval_expression;
pub use format::format_milliers;
pub use nombre::Nombre;
