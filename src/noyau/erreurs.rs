// src/noyau/erreurs.rs
//
// Taxonomie des erreurs du noyau.
// Le message (Display) est affiché tel quel par l’interface.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErreurCalc {
    /// Forme générale refusée (grammaire, jeton inconnu, pile incohérente).
    #[error("expression invalide")]
    InvalidExpression,

    #[error("parenthèses non équilibrées")]
    UnbalancedParentheses,

    #[error("division par zéro")]
    DivisionByZero,

    #[error("exposant négatif non supporté")]
    NegativeExponentNotSupported,

    /// |résultat| > 1e300 (ou non fini).
    #[error("résultat trop grand")]
    ResultTooLarge,

    /// Factorielle ou racine d’un nombre négatif.
    #[error("entrée négative")]
    NegativeInput,

    /// Logarithme de x ≤ 0 (ou base ≤ 0).
    #[error("entrée non positive pour le logarithme")]
    NonPositiveInput,

    #[error("base de logarithme invalide")]
    InvalidBase,

    /// Factorielle d’un nombre non entier.
    #[error("entrée non entière pour x!")]
    NonIntegerInput,

    /// Puissance fractionnaire d’une base négative (résultat complexe).
    #[error("opération non supportée")]
    UnsupportedOperation,
}

pub type Resultat<T> = Result<T, ErreurCalc>;
