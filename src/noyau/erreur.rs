// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// - Cinq familles, toutes synchrones et levées sur place : le noyau
//   n'absorbe rien, ne réessaie rien, ne renvoie jamais de sentinelle.
// - Les messages sont contractuels : les tests s'appuient sur le texte exact.
// - Clone + PartialEq : deux appels identiques doivent produire la même
//   erreur (famille ET message).

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Symbole d'opérateur ou de fonction hors de l'ensemble supporté.
    #[error("{0}")]
    OperateurInvalide(&'static str),

    /// Division dont le diviseur est sous la tolérance partagée.
    #[error("Division by zero")]
    DivisionParZero,

    /// Entrée hors du domaine mathématique de l'opération.
    #[error("{0}")]
    Domaine(&'static str),

    /// Base hors de [2, 16].
    #[error("The base of the system should be from 2 to 16")]
    BaseInvalide,

    /// Chaîne de chiffres vide, mal formée, ou chiffre ≥ base source.
    #[error("{0}")]
    ChiffresInvalides(&'static str),
}
