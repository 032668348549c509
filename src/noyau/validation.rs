// src/noyau/validation.rs
//
// Contrôles structurels avant évaluation (sans effet de bord) :
// - équilibre des parenthèses (pile)
// - forme générale : opérandes (signés / parenthésés) séparés par + - × ÷ ^
// - sinon, raccourci “fonction(littéral)” : x!(5), √x(9), ln(1)

use super::erreurs::{ErreurCalc, Resultat};
use super::jetons::{Fonction, Tok};
use super::nombre::Nombre;

/// Résultat de la validation : où doit aller l’expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Forme {
    /// Expression infixe : moteur à deux piles.
    Generale,
    /// Toute l’entrée est `fonction(littéral)` : application directe.
    Raccourci(Fonction, Nombre),
}

/// Empile sur '(', dépile sur ')'. Valide si la pile finit vide.
pub fn parentheses_equilibrees(s: &str) -> bool {
    let mut pile: Vec<char> = Vec::new();
    for c in s.chars() {
        if c == '(' {
            pile.push(c);
        } else if c == ')' && pile.pop().is_none() {
            return false;
        }
    }
    pile.is_empty()
}

/// Classe une suite de jetons : forme générale, raccourci, ou `InvalidExpression`.
pub fn valider(jetons: &[Tok]) -> Resultat<Forme> {
    if forme_generale(jetons) {
        return Ok(Forme::Generale);
    }
    match raccourci(jetons) {
        Some((f, x)) => Ok(Forme::Raccourci(f, x)),
        None => Err(ErreurCalc::InvalidExpression),
    }
}

/// Automate à deux états : on attend un opérande, ou un opérateur binaire.
/// Les fonctions (x!, √x, ln) n’ont pas leur place ici.
fn forme_generale(jetons: &[Tok]) -> bool {
    if jetons.is_empty() {
        return false;
    }

    let mut attend_operande = true;

    for (i, tok) in jetons.iter().enumerate() {
        let ok = if attend_operande {
            match tok {
                Tok::Num(_) => {
                    attend_operande = false;
                    true
                }
                Tok::LPar | Tok::MoinsUnaire => true,
                // un seul '+' en tête (retiré avant l’évaluation)
                Tok::Plus => i == 0,
                _ => false,
            }
        } else {
            match tok {
                Tok::Plus | Tok::Minus | Tok::Fois | Tok::Divise | Tok::Caret => {
                    attend_operande = true;
                    true
                }
                Tok::RPar => true,
                _ => false,
            }
        };

        if !ok {
            return false;
        }
    }

    !attend_operande
}

/// `f ( n )` ou `f ( - n )`, et rien d’autre.
fn raccourci(jetons: &[Tok]) -> Option<(Fonction, Nombre)> {
    match jetons {
        [Tok::Fonction(f), Tok::LPar, Tok::Num(n), Tok::RPar] => Some((*f, n.clone())),
        [Tok::Fonction(f), Tok::LPar, Tok::MoinsUnaire, Tok::Num(n), Tok::RPar] => {
            Some((*f, -n.clone()))
        }
        _ => None,
    }
}
