// src/bin/ecart_type.rs
//
// Écart type d’échantillon des nombres lus sur l’entrée standard
// (séparés par des blancs, sur une ou plusieurs lignes).
//
//   echo "2 4 4 4 5 5 7 9" | ecart_type

use std::io::{self, Read};
use std::process::ExitCode;

use calculatrice_ivs::noyau::stats::ecart_type;

fn lire_donnees(texte: &str) -> Result<Vec<f64>, String> {
    texte
        .split_whitespace()
        .map(|mot| {
            mot.parse::<f64>()
                .map_err(|_| format!("nombre invalide: {mot:?}"))
        })
        .collect()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut texte = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut texte) {
        eprintln!("lecture impossible: {e}");
        return ExitCode::FAILURE;
    }

    let donnees = match lire_donnees(&texte) {
        Ok(d) => d,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("{} valeurs lues", donnees.len());

    match ecart_type(&donnees) {
        Ok(s) => {
            println!("{s}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
