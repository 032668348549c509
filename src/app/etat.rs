//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’entrée de la calculatrice, le dernier résultat formaté ou
//! la dernière erreur, et traduire chaque touche (pavé ou clavier) en action.
//!
//! Contrats :
//! - Aucun parsing ici : toute évaluation passe par le noyau.
//! - `entree` reste brute (sans séparateurs) pour pouvoir enchaîner les calculs.
//! - Le message d’erreur du noyau est affiché tel quel.

use calculatrice_ivs::noyau::math_ext::{factorielle, racine_carree};
use calculatrice_ivs::noyau::{eval_expression, format_milliers, Nombre, Resultat};

/// Garde-fou du bouton x! : au-delà, le résultat n’est plus représentable.
pub const FACTORIELLE_MAX: i64 = 170;

/// Touches du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Chiffres, '.', parenthèses, opérateurs.
    Insere(&'static str),
    Egal,
    Efface,
    Retour,
    Factorielle,
    Racine,
    Ln,
    Puissance,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur (brute) ---
    pub entree: String,

    // --- sorties ---
    pub resultat: Option<String>, // résultat formaté (milliers), affiché jusqu’à la touche suivante
    pub erreur: Option<String>,   // message d’erreur du noyau

    // point d’insertion, en caractères depuis la fin (ln() place le curseur entre les parenthèses)
    recul: usize,
}

impl AppCalc {
    /// Texte à afficher : erreur, sinon résultat, sinon entrée.
    pub fn affichage(&self) -> &str {
        if let Some(e) = &self.erreur {
            return e;
        }
        if let Some(r) = &self.resultat {
            return r;
        }
        &self.entree
    }

    pub fn appuie(&mut self, touche: Touche) {
        match touche {
            Touche::Insere(s) => self.inserer(s),
            Touche::Egal => self.egal(),
            Touche::Efface => self.efface(),
            Touche::Retour => self.retour(),
            Touche::Factorielle => self.bouton_factorielle(),
            Touche::Racine => self.bouton_racine(),
            Touche::Ln => self.bouton_ln(),
            Touche::Puissance => self.inserer("^"),
        }
    }

    /// Clavier : caractères imprimables (Enter / Backspace / Échap passent par `appuie`).
    pub fn touche_clavier(&mut self, c: char) {
        match c {
            '0'..='9' | '.' | '+' | '-' | '(' | ')' | '^' | '×' | '÷' => {
                let mut buf = [0u8; 4];
                self.inserer(c.encode_utf8(&mut buf));
            }
            '*' => self.inserer("×"),
            '/' => self.inserer("÷"),
            'c' | 'C' => self.efface(),
            's' | 'S' => self.bouton_racine(),
            'f' | 'F' => self.bouton_factorielle(),
            'l' | 'L' => self.bouton_ln(),
            'p' | 'P' => self.inserer("^"),
            _ => {}
        }
    }

    /* ------------------------ Édition ------------------------ */

    fn oublie_sorties(&mut self) {
        self.resultat = None;
        self.erreur = None;
    }

    /// Position d’insertion en octets.
    fn position(&self) -> usize {
        let n = self.entree.chars().count();
        let idx = n - self.recul.min(n);
        self.entree
            .char_indices()
            .nth(idx)
            .map_or(self.entree.len(), |(b, _)| b)
    }

    fn inserer(&mut self, s: &str) {
        self.oublie_sorties();

        // ')' tapée devant la ')' posée par ln() : on passe par-dessus
        if s == ")" && self.recul > 0 && self.entree[self.position()..].starts_with(')') {
            self.recul -= 1;
            return;
        }

        let pos = self.position();
        self.entree.insert_str(pos, s);
    }

    fn retour(&mut self) {
        self.oublie_sorties();
        let pos = self.position();
        if let Some((b, _)) = self.entree[..pos].char_indices().next_back() {
            self.entree.remove(b);
        }
    }

    fn efface(&mut self) {
        self.entree.clear();
        self.oublie_sorties();
        self.recul = 0;
    }

    /* ------------------------ Calculs ------------------------ */

    fn pose_resultat(&mut self, r: Resultat<Nombre>) {
        self.recul = 0;
        match r {
            Ok(n) => {
                self.resultat = Some(format_milliers(&n));
                self.erreur = None;
                self.entree = n.to_string();
            }
            Err(e) => {
                log::debug!("erreur pour {:?}: {e}", self.entree);
                self.resultat = None;
                self.erreur = Some(e.to_string());
            }
        }
    }

    fn egal(&mut self) {
        let r = eval_expression(&self.entree);
        self.pose_resultat(r);
    }

    fn bouton_factorielle(&mut self) {
        let texte = self.entree.replace("x!", "");
        let texte = texte.trim();
        if texte.is_empty() {
            return;
        }

        match texte.parse::<i64>() {
            Ok(n) if n > FACTORIELLE_MAX => {
                self.resultat = None;
                self.erreur = Some("limite dépassée pour x!".into());
            }
            Ok(n) => {
                let r = factorielle(&Nombre::from(n));
                self.pose_resultat(r);
            }
            Err(_) => {
                self.resultat = None;
                self.erreur = Some("entrée invalide pour x!".into());
            }
        }
    }

    fn bouton_racine(&mut self) {
        let texte = self.entree.replace("√x", "");
        let texte = texte.trim();
        if texte.is_empty() {
            return;
        }

        match texte.parse::<f64>() {
            Ok(x) => {
                let r = racine_carree(&Nombre::Reel(x).normalise());
                self.pose_resultat(r);
            }
            Err(_) => {
                self.resultat = None;
                self.erreur = Some("entrée invalide pour √x".into());
            }
        }
    }

    /// 1er appui : "ln()" (curseur dedans) ; 2e : ferme si besoin ; sinon évalue.
    fn bouton_ln(&mut self) {
        if !self.entree.contains("ln(") {
            self.inserer("ln()");
            self.recul = 1;
        } else if !self.entree.contains(')') {
            self.inserer(")");
        } else {
            self.egal();
        }
    }
}
