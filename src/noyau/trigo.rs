// src/noyau/trigo.rs
//
// Trig en DEGRÉS : la conversion degrés -> radians est le premier pas du
// contrat (un évaluateur en radians donnerait d'autres sorties).
// - tan : refusée quand |cos| < tolérance (angle ~ 90° + k·180°).
// - cot : cos/sin, PAS 1/tan (la frontière de domaine est celle du sinus) ;
//   refusée quand |sin| < tolérance (angle ~ 0° + k·180°).

use std::f64::consts::PI;

use super::arrondi::{arrondi_si_quasi_entier, TOLERANCE_ZERO};
use super::erreur::ErreurCalcul;

const MESSAGE_TANGENTE: &str = "Tangent is not defined for this angle.";
const MESSAGE_COTANGENTE: &str = "Cotangent is not defined for this angle.";

/// Applique sin/cos/tan/cot à un angle en degrés.
pub fn appliquer_operation_trig(degres: f64, symbole: &str) -> Result<f64, ErreurCalcul> {
    let rad = degres * PI / 180.0;

    let resultat = match symbole {
        "sin" => rad.sin(),
        "cos" => rad.cos(),
        "tan" => {
            if rad.cos().abs() < TOLERANCE_ZERO {
                return Err(ErreurCalcul::Domaine(MESSAGE_TANGENTE));
            }
            rad.tan()
        }
        "cot" => {
            if rad.sin().abs() < TOLERANCE_ZERO {
                return Err(ErreurCalcul::Domaine(MESSAGE_COTANGENTE));
            }
            rad.cos() / rad.sin()
        }
        _ => {
            return Err(ErreurCalcul::OperateurInvalide(
                "Incorrect trigonometric operation",
            ))
        }
    };
    Ok(arrondi_si_quasi_entier(resultat))
}
