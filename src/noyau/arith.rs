// src/noyau/arith.rs
//
// Opérations binaires (+ - * / ^) sur f64.
// - '/' : refusée dès que |b| passe sous la tolérance partagée (absorbe le
//   bruit flottant laissé par les calculs précédents, pas seulement le
//   zéro exact).
// - '^' : sémantique réelle de la plateforme (powf), résultats non finis
//   admis sans erreur.
// - Le résultat repasse par l'arrondi quasi-entier (contrat observable).

use super::arrondi::{arrondi_si_quasi_entier, TOLERANCE_ZERO};
use super::erreur::ErreurCalcul;

/// Applique `a <symbole> b` pour un symbole dans {+, -, *, /, ^}.
pub fn appliquer_operation_binaire(a: f64, symbole: &str, b: f64) -> Result<f64, ErreurCalcul> {
    let resultat = match symbole {
        "+" => a + b,
        "-" => a - b,
        "*" => a * b,
        "/" => {
            if b.abs() < TOLERANCE_ZERO {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
        "^" => a.powf(b),
        _ => return Err(ErreurCalcul::OperateurInvalide("Incorrect operator")),
    };
    Ok(arrondi_si_quasi_entier(resultat))
}
