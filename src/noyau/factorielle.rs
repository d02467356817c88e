// src/noyau/factorielle.rs
//
// Factorielle itérative sur f64.
// Domaine : entiers non négatifs, comparés au floor bit-exact (3.0000001
// est refusé même s'il "ressemble" à 3). Les grands x débordent vers
// l'infini flottant : frontière assumée, pas une erreur.

use super::arrondi::arrondi_si_quasi_entier;
use super::erreur::ErreurCalcul;

const MESSAGE_DOMAINE: &str = "The factorial is defined only for non-negative integers.";

/// Produit 1·2·…·x.
pub fn factorielle(x: f64) -> Result<f64, ErreurCalcul> {
    if !x.is_finite() || x < 0.0 || x.floor() != x {
        return Err(ErreurCalcul::Domaine(MESSAGE_DOMAINE));
    }

    let mut resultat = 1.0_f64;
    let mut facteur = 1.0_f64;
    while facteur <= x {
        resultat *= facteur;
        facteur += 1.0;
    }
    Ok(arrondi_si_quasi_entier(resultat))
}
