// src/noyau/bases.rs
//
// Conversion de bases (2 à 16), chaîne vers chaîne.
// - Lecture : signe '-' optionnel, puis Horner (acc = acc·base + chiffre)
//   dans un i64 ; le débordement des entrées extrêmes est une frontière
//   assumée (arithmétique wrapping), pas une erreur vérifiée.
// - Écriture : restes successifs via la table "0123456789ABCDEF", chiffres
//   inversés à la fin ; grandeur nulle -> "0" ; signe restauré devant.
// - Sortie toujours en majuscules, entrée insensible à la casse.

use super::erreur::ErreurCalcul;

/// Table des chiffres de sortie (indexée par reste).
const CHIFFRES: &[u8; 16] = b"0123456789ABCDEF";

const MESSAGE_CHIFFRE: &str = "Incorrect digit in number";
const MESSAGE_HORS_BASE: &str = "The number does not correspond to the base of the system";

/// Convertit `chiffres` de `base_source` vers `base_cible`, toutes deux
/// dans [2, 16].
pub fn convertir_base(
    chiffres: &str,
    base_source: u32,
    base_cible: u32,
) -> Result<String, ErreurCalcul> {
    if !(2..=16).contains(&base_source) || !(2..=16).contains(&base_cible) {
        return Err(ErreurCalcul::BaseInvalide);
    }

    let (negatif, corps) = match chiffres.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, chiffres),
    };

    // Un signe nu, comme une chaîne vide, n'encode aucune grandeur.
    if corps.is_empty() {
        return Err(ErreurCalcul::ChiffresInvalides(MESSAGE_CHIFFRE));
    }

    let mut valeur: i64 = 0;
    for c in corps.chars() {
        let chiffre = c
            .to_digit(16)
            .ok_or(ErreurCalcul::ChiffresInvalides(MESSAGE_CHIFFRE))?;
        if chiffre >= base_source {
            return Err(ErreurCalcul::ChiffresInvalides(MESSAGE_HORS_BASE));
        }
        valeur = valeur
            .wrapping_mul(base_source as i64)
            .wrapping_add(chiffre as i64);
    }
    if negatif {
        valeur = valeur.wrapping_neg();
    }

    Ok(encoder(valeur, base_cible))
}

/// Encode une valeur signée : grandeur absolue en `base`, signe restauré.
fn encoder(valeur: i64, base: u32) -> String {
    let negatif = valeur < 0;
    let mut n = valeur.unsigned_abs();

    let mut sortie = String::new();
    if n == 0 {
        sortie.push('0');
    }
    while n > 0 {
        let reste = (n % base as u64) as usize;
        sortie.push(CHIFFRES[reste] as char);
        n /= base as u64;
    }
    if negatif {
        sortie.push('-');
    }
    sortie.chars().rev().collect()
}
