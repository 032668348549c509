//! Noyau — évaluation (pipeline réel)
//!
//! parenthèses -> jetons -> validation -> (raccourci fonction | deux piles -> seuil)
//!
//! Le raccourci rend son résultat tel quel s’il est entier exact (x!(170)) :
//! seul un réel non fini ou au-delà du seuil y est refusé.
//!
//! Aucun état partagé entre deux appels : même entrée => même résultat.

use super::erreurs::{ErreurCalc, Resultat};
use super::jetons::{format_tokens, tokenize, Tok};
use super::nombre::Nombre;
use super::pile::evaluer;
use super::validation::{parentheses_equilibrees, valider, Forme};

/// API publique : évalue une expression infixe et retourne un nombre ou une erreur typée.
pub fn eval_expression(expr_str: &str) -> Resultat<Nombre> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurCalc::InvalidExpression);
    }
    log::debug!("évaluation de {s:?}");

    // 1) Parenthèses
    if !parentheses_equilibrees(s) {
        return Err(ErreurCalc::UnbalancedParentheses);
    }

    // 2) Jetons
    let jetons = tokenize(s)?;
    log::trace!("jetons: {}", format_tokens(&jetons));

    // 3) Validation, puis raccourci ou moteur
    let (resultat, garde) = match valider(&jetons)? {
        Forme::Raccourci(f, x) => {
            log::debug!("raccourci {}({x})", f.symbole());
            // décidé avant normalisation : un réel rendu entier reste gardé
            let r = f.appliquer(&x)?;
            let garde = !matches!(r, Nombre::Entier(_));
            (r, garde)
        }
        Forme::Generale => {
            // un '+' de tête est sans effet
            let corps = match jetons.split_first() {
                Some((Tok::Plus, reste)) => reste,
                _ => &jetons[..],
            };
            (evaluer(corps)?, true)
        }
    };

    // 4) Garde-fou
    if garde && resultat.depasse_seuil() {
        return Err(ErreurCalc::ResultTooLarge);
    }

    let resultat = resultat.normalise();
    log::debug!("résultat: {resultat}");
    Ok(resultat)
}
