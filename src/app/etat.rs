//! src/app/etat.rs
//!
//! État UI : automate de l'affichage.
//!
//! Rôle : transformer les touches en appels au noyau (au plus UN appel par
//! touche) et tenir la chaîne affichée. Aucune dépendance egui ici : les
//! enchaînements de touches se testent sans fenêtre.
//!
//! Contrats :
//! - Quatre modes explicites, pas de booléens libres : aucun mélange
//!   invalide "conversion + opérateur en attente" n'est représentable.
//! - Toute erreur du noyau purge l'opération en attente et revient au repos.

use crate::noyau::{
    appliquer_operation_binaire, appliquer_operation_trig, convertir_base, factorielle,
    ErreurCalcul,
};

/// Invite affichée pendant le choix de la base cible (deux chiffres, 02-16).
const INVITE_BASE: &str = "Base ? (2-16)";

/// Opérande gauche mémorisé avec son opérateur.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OperationEnAttente {
    pub gauche: f64,
    pub symbole: &'static str,
}

/// Modes de l'affichage.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Mode {
    /// "0" ou un résultat figé ; la prochaine saisie remplace l'affichage.
    #[default]
    Repos,
    /// L'opérande affiché se compose chiffre à chiffre.
    Saisie { en_attente: Option<OperationEnAttente> },
    /// Opérateur pressé : la prochaine saisie démarre le second opérande.
    AttenteSecondOperande(OperationEnAttente),
    /// Choix de la base cible ; le nombre à convertir est mis de côté.
    ConversionBase { nombre: String, saisie_base: String },
}

/// Touches logiques de la calculatrice (la vue fait bouton -> Touche).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Touche {
    Chiffre(char),
    Point,
    Operateur(&'static str),
    Egal,
    Fonction(&'static str), // sin, cos, tan, cot
    Factorielle,
    Signe,
    Conversion,
    Suppr,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub affichage: String,
    pub mode: Mode,
    pub erreur: String,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            mode: Mode::Repos,
            erreur: String::new(),
        }
    }
}

impl AppCalc {
    /// Point d'entrée unique de l'automate : une touche, au plus un appel
    /// noyau.
    pub fn appuyer(&mut self, touche: Touche) {
        self.erreur.clear();

        match touche {
            Touche::Chiffre(c) => self.sur_chiffre(c),
            Touche::Point => self.sur_point(),
            Touche::Operateur(symbole) => self.sur_operateur(symbole),
            Touche::Egal => self.sur_egal(),
            Touche::Fonction(symbole) => {
                self.sur_unaire(|v| appliquer_operation_trig(v, symbole))
            }
            Touche::Factorielle => self.sur_unaire(factorielle),
            Touche::Signe => self.sur_signe(),
            Touche::Conversion => self.sur_conversion(),
            Touche::Suppr => self.sur_suppr(),
        }
    }

    /// C : remise à zéro totale (aussi liée à Échap dans app.rs).
    pub fn reset_total(&mut self) {
        self.affichage = "0".to_string();
        self.mode = Mode::Repos;
        self.erreur.clear();
    }

    /* ------------------------ Saisie ------------------------ */

    fn sur_chiffre(&mut self, c: char) {
        if let Mode::ConversionBase { saisie_base, .. } = &mut self.mode {
            saisie_base.push(c);
            let apercu = format!("Base : {saisie_base}");
            let complet = saisie_base.len() >= 2;
            if complet {
                self.terminer_conversion();
            } else {
                self.affichage = apercu;
            }
            return;
        }

        match self.mode.clone() {
            Mode::Repos => {
                self.affichage = c.to_string();
                self.mode = Mode::Saisie { en_attente: None };
            }
            Mode::AttenteSecondOperande(op) => {
                self.affichage = c.to_string();
                self.mode = Mode::Saisie {
                    en_attente: Some(op),
                };
            }
            Mode::Saisie { .. } => {
                if self.affichage == "0" {
                    self.affichage.clear();
                }
                self.affichage.push(c);
            }
            // traité plus haut
            Mode::ConversionBase { .. } => {}
        }
    }

    fn sur_point(&mut self) {
        match self.mode.clone() {
            Mode::ConversionBase { .. } => {}
            Mode::Repos => {
                self.affichage = "0.".to_string();
                self.mode = Mode::Saisie { en_attente: None };
            }
            Mode::AttenteSecondOperande(op) => {
                self.affichage = "0.".to_string();
                self.mode = Mode::Saisie {
                    en_attente: Some(op),
                };
            }
            Mode::Saisie { .. } => {
                if !self.affichage.contains('.') {
                    self.affichage.push('.');
                }
            }
        }
    }

    fn sur_signe(&mut self) {
        if matches!(self.mode, Mode::ConversionBase { .. }) {
            return;
        }
        if let Some(reste) = self.affichage.strip_prefix('-') {
            self.affichage = reste.to_string();
        } else {
            self.affichage.insert(0, '-');
        }
    }

    fn sur_suppr(&mut self) {
        match self.mode.clone() {
            Mode::ConversionBase {
                nombre,
                saisie_base,
            } => {
                if saisie_base.is_empty() {
                    // annule la conversion : le nombre redevient éditable
                    self.affichage = nombre;
                    self.mode = Mode::Saisie { en_attente: None };
                } else {
                    let mut saisie = saisie_base;
                    saisie.pop();
                    self.affichage = if saisie.is_empty() {
                        INVITE_BASE.to_string()
                    } else {
                        format!("Base : {saisie}")
                    };
                    self.mode = Mode::ConversionBase {
                        nombre,
                        saisie_base: saisie,
                    };
                }
            }
            _ => {
                self.affichage.pop();
                if self.affichage.is_empty() || self.affichage == "-" {
                    self.affichage = "0".to_string();
                }
                if matches!(self.mode, Mode::Repos) {
                    // éditer un résultat figé le transforme en saisie
                    self.mode = Mode::Saisie { en_attente: None };
                }
            }
        }
    }

    /* ------------------------ Opérations binaires ------------------------ */

    fn sur_operateur(&mut self, symbole: &'static str) {
        match self.mode.clone() {
            Mode::ConversionBase { .. } => {}
            Mode::AttenteSecondOperande(op) => {
                // deuxième opérateur d'affilée : on remplace l'opérateur,
                // sans évaluer
                self.mode = Mode::AttenteSecondOperande(OperationEnAttente {
                    gauche: op.gauche,
                    symbole,
                });
            }
            Mode::Saisie {
                en_attente: Some(op),
            } => {
                // enchaînement : on évalue d'abord l'opération en cours
                let Some(droite) = self.valeur_affichee() else {
                    return;
                };
                match appliquer_operation_binaire(op.gauche, op.symbole, droite) {
                    Ok(resultat) => {
                        self.affichage = format_valeur(resultat);
                        self.mode = Mode::AttenteSecondOperande(OperationEnAttente {
                            gauche: resultat,
                            symbole,
                        });
                    }
                    Err(e) => self.signaler_erreur(e),
                }
            }
            Mode::Repos | Mode::Saisie { en_attente: None } => {
                let Some(gauche) = self.valeur_affichee() else {
                    return;
                };
                self.mode = Mode::AttenteSecondOperande(OperationEnAttente { gauche, symbole });
            }
        }
    }

    fn sur_egal(&mut self) {
        let op = match self.mode.clone() {
            Mode::Saisie {
                en_attente: Some(op),
            } => op,
            Mode::AttenteSecondOperande(op) => op,
            _ => return,
        };
        let Some(droite) = self.valeur_affichee() else {
            return;
        };
        match appliquer_operation_binaire(op.gauche, op.symbole, droite) {
            Ok(resultat) => {
                self.affichage = format_valeur(resultat);
                self.mode = Mode::Repos;
            }
            Err(e) => self.signaler_erreur(e),
        }
    }

    /* ------------------------ Opérations unaires ------------------------ */

    /// Trig ou factorielle sur la valeur affichée. L'opération en attente
    /// survit : "2 + 30 sin =" évalue 2 + sin(30°).
    fn sur_unaire<F>(&mut self, operation: F)
    where
        F: FnOnce(f64) -> Result<f64, ErreurCalcul>,
    {
        if matches!(self.mode, Mode::ConversionBase { .. }) {
            return;
        }
        let Some(valeur) = self.valeur_affichee() else {
            return;
        };
        match operation(valeur) {
            Ok(resultat) => {
                self.affichage = format_valeur(resultat);
                self.mode = match self.mode.clone() {
                    Mode::Saisie {
                        en_attente: Some(op),
                    } => Mode::AttenteSecondOperande(op),
                    Mode::AttenteSecondOperande(op) => Mode::AttenteSecondOperande(op),
                    _ => Mode::Repos,
                };
            }
            Err(e) => self.signaler_erreur(e),
        }
    }

    /* ------------------------ Conversion de base ------------------------ */

    fn sur_conversion(&mut self) {
        if matches!(self.mode, Mode::ConversionBase { .. }) {
            return;
        }
        self.mode = Mode::ConversionBase {
            nombre: self.affichage.clone(),
            saisie_base: String::new(),
        };
        self.affichage = INVITE_BASE.to_string();
    }

    /// Deux chiffres de base saisis : un appel noyau, depuis le décimal.
    fn terminer_conversion(&mut self) {
        let Mode::ConversionBase {
            nombre,
            saisie_base,
        } = std::mem::take(&mut self.mode)
        else {
            return;
        };
        // chiffres venus des boutons 0-9 : le parse ne peut pas échouer ;
        // une base hors [2, 16] sera refusée par le noyau
        let base = saisie_base.parse::<u32>().unwrap_or(0);
        match convertir_base(&nombre, 10, base) {
            Ok(converti) => {
                self.affichage = converti;
                self.mode = Mode::Repos;
            }
            Err(e) => self.signaler_erreur(e),
        }
    }

    /* ------------------------ Garde-fous ------------------------ */

    /// Valeur numérique de l'affichage. L'automate garantit un nombre
    /// lisible hors conversion ; garde-fou sinon.
    fn valeur_affichee(&mut self) -> Option<f64> {
        match self.affichage.parse::<f64>() {
            Ok(v) => Some(v),
            Err(_) => {
                log::debug!("affichage illisible : {:?}", self.affichage);
                self.erreur = "affichage illisible".to_string();
                self.affichage = "0".to_string();
                self.mode = Mode::Repos;
                None
            }
        }
    }

    /// Toute erreur noyau : message sous l'affichage, retour au repos.
    fn signaler_erreur(&mut self, erreur: ErreurCalcul) {
        log::debug!("erreur noyau : {erreur}");
        self.erreur = erreur.to_string();
        self.affichage = "0".to_string();
        self.mode = Mode::Repos;
    }
}

/// Formatage d'un résultat pour l'affichage : dix décimales au plus, zéros
/// de fin retirés ("120", "0.5", "0.5773502692"). Présentation seulement,
/// l'arrondi contractuel vit dans le noyau.
pub fn format_valeur(valeur: f64) -> String {
    if !valeur.is_finite() {
        return valeur.to_string();
    }
    if valeur == 0.0 {
        return "0".to_string();
    }
    format!("{valeur:.10}")
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
