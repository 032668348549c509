// src/noyau/pile.rs
//
// Moteur à deux piles (précédence d’opérateurs, sans arbre).
//
// Règles:
// - nombre : si un moins unaire attend au sommet, on l’absorbe (négation) puis on empile
// - '('    : empilée
// - ')'    : on applique jusqu’à la '(' correspondante, puis on la jette
// - binaire: on applique tant que le sommet n’est pas '(' et a une précédence ≥ (gauche à droite)
// - moins unaire : empilé tel quel (précédence maximale)
// - fin    : on applique tout ; il doit rester exactement une valeur
//
// Chaque application renormalise le résultat (entier si partie fractionnaire nulle).

use super::arith::{add, div, mul, sub};
use super::erreurs::{ErreurCalc, Resultat};
use super::jetons::Tok;
use super::math_ext::puissance;
use super::nombre::Nombre;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
    MoinsUnaire,
    ParOuvrante,
}

/// Table des précédences (constante, partagée par tous les appels).
/// La '(' n’est jamais comparée : elle bloque le dépilement.
fn precedence(op: Op) -> u8 {
    match op {
        Op::Plus | Op::Moins => 1,
        Op::Fois | Op::Divise => 2,
        Op::Puissance => 3,
        Op::MoinsUnaire => 4,
        Op::ParOuvrante => 0,
    }
}

fn op_binaire(tok: &Tok) -> Option<Op> {
    match tok {
        Tok::Plus => Some(Op::Plus),
        Tok::Minus => Some(Op::Moins),
        Tok::Fois => Some(Op::Fois),
        Tok::Divise => Some(Op::Divise),
        Tok::Caret => Some(Op::Puissance),
        _ => None,
    }
}

/// Évalue une suite de jetons déjà validée (forme générale).
pub fn evaluer(jetons: &[Tok]) -> Resultat<Nombre> {
    let mut operandes: Vec<Nombre> = Vec::new();
    let mut operateurs: Vec<Op> = Vec::new();

    for tok in jetons {
        match tok {
            Tok::Num(n) => {
                let mut v = n.clone();
                if operateurs.last() == Some(&Op::MoinsUnaire) {
                    operateurs.pop();
                    v = -v;
                }
                operandes.push(v);
            }

            Tok::LPar => operateurs.push(Op::ParOuvrante),

            Tok::RPar => loop {
                match operateurs.last() {
                    Some(Op::ParOuvrante) => {
                        operateurs.pop();
                        break;
                    }
                    Some(_) => applique(&mut operateurs, &mut operandes)?,
                    None => return Err(ErreurCalc::UnbalancedParentheses),
                }
            },

            Tok::MoinsUnaire => operateurs.push(Op::MoinsUnaire),

            Tok::Plus | Tok::Minus | Tok::Fois | Tok::Divise | Tok::Caret => {
                let op = op_binaire(tok).ok_or(ErreurCalc::InvalidExpression)?;
                while let Some(&sommet) = operateurs.last() {
                    if sommet == Op::ParOuvrante || precedence(sommet) < precedence(op) {
                        break;
                    }
                    applique(&mut operateurs, &mut operandes)?;
                }
                operateurs.push(op);
            }

            // les fonctions passent par le raccourci de validation
            Tok::Fonction(_) => return Err(ErreurCalc::InvalidExpression),
        }
    }

    while let Some(&sommet) = operateurs.last() {
        if sommet == Op::ParOuvrante {
            return Err(ErreurCalc::UnbalancedParentheses);
        }
        applique(&mut operateurs, &mut operandes)?;
    }

    match (operandes.pop(), operandes.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurCalc::InvalidExpression),
    }
}

/// Dépile un opérateur et le combine avec ses opérandes.
fn applique(operateurs: &mut Vec<Op>, operandes: &mut Vec<Nombre>) -> Resultat<()> {
    let op = operateurs.pop().ok_or(ErreurCalc::InvalidExpression)?;

    let resultat = if op == Op::MoinsUnaire {
        let v = operandes.pop().ok_or(ErreurCalc::InvalidExpression)?;
        -v
    } else {
        // droite d’abord : c’est la dernière empilée
        let droite = operandes.pop().ok_or(ErreurCalc::InvalidExpression)?;
        let gauche = operandes.pop().ok_or(ErreurCalc::InvalidExpression)?;

        match op {
            Op::Plus => add(&gauche, &droite),
            Op::Moins => sub(&gauche, &droite),
            Op::Fois => mul(&gauche, &droite),
            Op::Divise => div(&gauche, &droite)?,
            Op::Puissance => {
                if droite.est_negatif() {
                    return Err(ErreurCalc::NegativeExponentNotSupported);
                }
                puissance(&gauche, &droite)?
            }
            Op::MoinsUnaire | Op::ParOuvrante => return Err(ErreurCalc::InvalidExpression),
        }
    };

    let resultat = resultat.normalise();
    log::trace!("{op:?} -> {resultat}");
    operandes.push(resultat);
    Ok(())
}
