// src/noyau/nombre.rs
//
// Valeur numérique du noyau : entier exact OU réel f64.
//
// Règle de normalisation : un réel fini sans partie fractionnaire redevient
// un entier. Appliquée après chaque opérateur (et sur les littéraux décimaux),
// pour que les chaînes de calculs entiers n’accumulent pas de “bruit” d’affichage.

use std::fmt;
use std::ops::Neg;
use std::sync::OnceLock;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed, ToPrimitive, Zero};

use super::erreurs::{ErreurCalc, Resultat};

/// Garde-fou : au-delà, le résultat est refusé.
pub const SEUIL_RESULTAT: f64 = 1e300;

#[derive(Clone, Debug, PartialEq)]
pub enum Nombre {
    Entier(BigInt),
    Reel(f64),
}

/// Valeur exacte du f64 `SEUIL_RESULTAT`, construite une seule fois.
///
/// Un réel égal au seuil devient un entier à la normalisation : la comparaison
/// exacte doit le laisser passer, quel que soit le chemin de calcul.
fn seuil_entier() -> &'static BigInt {
    static SEUIL: OnceLock<BigInt> = OnceLock::new();
    SEUIL.get_or_init(|| {
        BigInt::from_f64(SEUIL_RESULTAT).unwrap_or_else(|| BigInt::from(10u32).pow(300))
    })
}

impl Nombre {
    /// Réel fini à partie fractionnaire nulle => Entier. Sinon inchangé.
    pub fn normalise(self) -> Nombre {
        match self {
            Nombre::Reel(x) if x.is_finite() && x.fract() == 0.0 => match BigInt::from_f64(x) {
                Some(n) => Nombre::Entier(n),
                None => Nombre::Reel(x),
            },
            autre => autre,
        }
    }

    /// Lecture d’un littéral non signé : "12" (entier exact), "1.5", ".5".
    pub fn depuis_litteral(txt: &str) -> Resultat<Nombre> {
        if txt.contains('.') {
            let x: f64 = txt.parse().map_err(|_| ErreurCalc::InvalidExpression)?;
            Ok(Nombre::Reel(x).normalise())
        } else {
            BigInt::parse_bytes(txt.as_bytes(), 10)
                .map(Nombre::Entier)
                .ok_or(ErreurCalc::InvalidExpression)
        }
    }

    /// Conversion f64 (±inf si l’entier dépasse la plage f64).
    pub fn en_f64(&self) -> f64 {
        match self {
            Nombre::Entier(n) => n.to_f64().unwrap_or(if n.is_negative() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }),
            Nombre::Reel(x) => *x,
        }
    }

    pub fn est_zero(&self) -> bool {
        match self {
            Nombre::Entier(n) => n.is_zero(),
            Nombre::Reel(x) => *x == 0.0,
        }
    }

    pub fn est_negatif(&self) -> bool {
        match self {
            Nombre::Entier(n) => n.is_negative(),
            Nombre::Reel(x) => *x < 0.0,
        }
    }

    /// Valeur entière (exacte) si le nombre n’a pas de partie fractionnaire.
    pub fn en_entier(&self) -> Option<BigInt> {
        match self.clone().normalise() {
            Nombre::Entier(n) => Some(n),
            Nombre::Reel(_) => None,
        }
    }

    /// |x| > 1e300, ou réel non fini.
    pub fn depasse_seuil(&self) -> bool {
        match self {
            Nombre::Entier(n) => n.abs() > *seuil_entier(),
            Nombre::Reel(x) => !x.is_finite() || x.abs() > SEUIL_RESULTAT,
        }
    }
}

impl Neg for Nombre {
    type Output = Nombre;

    fn neg(self) -> Nombre {
        match self {
            Nombre::Entier(n) => Nombre::Entier(-n),
            Nombre::Reel(x) => Nombre::Reel(-x),
        }
    }
}

impl From<i64> for Nombre {
    fn from(n: i64) -> Self {
        Nombre::Entier(BigInt::from(n))
    }
}

impl From<f64> for Nombre {
    fn from(x: f64) -> Self {
        Nombre::Reel(x)
    }
}

impl fmt::Display for Nombre {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Nombre::Entier(n) => write!(f, "{n}"),
            Nombre::Reel(x) => write!(f, "{x}"),
        }
    }
}
