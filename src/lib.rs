//! Calculatrice IVS — bibliothèque
//!
//! Le noyau (évaluateur + primitives) est partagé entre l’interface eframe
//! et l’utilitaire `ecart_type`.

pub mod noyau;
