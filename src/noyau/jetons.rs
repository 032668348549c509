// src/noyau/jetons.rs

use super::erreurs::{ErreurCalc, Resultat};
use super::math_ext::{factorielle, ln, racine_carree};
use super::nombre::Nombre;

/// Fonctions à un seul opérande (touches x!, √x, ln).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Factorielle,
    Racine,
    Ln,
}

impl Fonction {
    pub fn symbole(self) -> &'static str {
        match self {
            Fonction::Factorielle => "x!",
            Fonction::Racine => "√x",
            Fonction::Ln => "ln",
        }
    }

    pub fn appliquer(self, x: &Nombre) -> Resultat<Nombre> {
        match self {
            Fonction::Factorielle => factorielle(x),
            Fonction::Racine => racine_carree(x),
            Fonction::Ln => ln(x),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(Nombre),

    Plus,
    Minus, // soustraction (binaire)
    Fois,
    Divise,
    Caret, // ^

    // '-' sans opérande avant lui : début, après '(' ou après un opérateur
    MoinsUnaire,

    Fonction(Fonction),

    LPar,
    RPar,
}

impl Tok {
    /// Vrai si un '-' qui suit ce jeton est un moins unaire.
    fn appelle_unaire(&self) -> bool {
        matches!(
            self,
            Tok::Plus
                | Tok::Minus
                | Tok::Fois
                | Tok::Divise
                | Tok::Caret
                | Tok::MoinsUnaire
                | Tok::Fonction(_)
                | Tok::LPar
        )
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux non signés (ex: 12, 3.5, .5)
/// - opérateurs + - × ÷ ^ (et * / comme alias de × ÷)
/// - parenthèses ( )
/// - fonctions x!, √x, ln
/// Les espaces sont ignorés. Le signe d’un nombre passe par `Tok::MoinsUnaire`.
pub fn tokenize(s: &str) -> Resultat<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let suivant = chars.get(i + 1).copied();

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => {
                // unaire si rien ne précède, ou si le jeton précédent n’est pas un opérande
                let unaire = out.last().map_or(true, Tok::appelle_unaire);
                Some(if unaire { Tok::MoinsUnaire } else { Tok::Minus })
            }
            '×' | '*' => Some(Tok::Fois),
            '÷' | '/' => Some(Tok::Divise),
            '^' => Some(Tok::Caret),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Fonctions : marqueurs de deux caractères
        let fonction = match (c, suivant) {
            ('x', Some('!')) => Some(Fonction::Factorielle),
            ('√', Some('x')) => Some(Fonction::Racine),
            ('l', Some('n')) => Some(Fonction::Ln),
            _ => None,
        };
        if let Some(f) = fonction {
            out.push(Tok::Fonction(f));
            i += 2;
            continue;
        }

        // Nombre : \d+(\.\d+)? ou \.\d+
        let debut_decimal = c == '.' && suivant.is_some_and(|d| d.is_ascii_digit());
        if c.is_ascii_digit() || debut_decimal {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let txt: String = chars[start..i].iter().collect();
            out.push(Tok::Num(Nombre::depuis_litteral(&txt)?));
            continue;
        }

        log::debug!("caractère inattendu: {c:?} (position {i})");
        return Err(ErreurCalc::InvalidExpression);
    }

    Ok(out)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(n) => n.to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Fois => "×".to_string(),
            Tok::Divise => "÷".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::MoinsUnaire => "u-".to_string(),

            Tok::Fonction(f) => f.symbole().to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
