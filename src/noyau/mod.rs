//! Noyau numérique de la calculatrice
//!
//! Quatre opérations pures, sans état partagé ni dépendance entre elles :
//! la vue appelle exactement une opération par clic et affiche le résultat
//! ou l'erreur renvoyée. Le noyau ne journalise jamais.
//!
//! Organisation interne :
//! - erreur.rs      : taxonomie des erreurs (messages contractuels)
//! - arrondi.rs     : tolérance partagée + arrondi quasi-entier
//! - arith.rs       : opérations binaires (+ - * / ^)
//! - factorielle.rs : factorielle itérative
//! - bases.rs       : conversion de bases 2 à 16 (signe, Horner)
//! - trigo.rs       : sin/cos/tan/cot en degrés

pub mod arith;
pub mod arrondi;
pub mod bases;
pub mod erreur;
pub mod factorielle;
pub mod trigo;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use arith::appliquer_operation_binaire;
pub use bases::convertir_base;
pub use erreur::ErreurCalcul;
pub use factorielle::factorielle;
pub use trigo::appliquer_operation_trig;
