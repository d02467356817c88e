//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler les quatre opérations sans brûler la machine.
//! - RNG déterministe (graine fixe)
//! - budget temps global
//! - erreurs admises en liste blanche (tout échec doit être l'une des
//!   erreurs contractuelles, jamais une panique)
//! - invariants clés : conversion stable par aller-retour, arrondi
//!   quasi-entier idempotent, appels répétés identiques

use std::time::{Duration, Instant};

use super::arrondi::arrondi_si_quasi_entier;
use super::{appliquer_operation_binaire, appliquer_operation_trig, convertir_base, ErreurCalcul};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    etat: u64,
}
impl Rng {
    fn new(graine: u64) -> Self {
        Self { etat: graine }
    }
    fn suivant_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.etat = self.etat.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.etat >> 32) as u32
    }
    fn tirer(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.suivant_u32() % n
        }
    }
    fn flottant(&mut self) -> f64 {
        // dans [-1000, 1000] : on teste le contrat, pas les subnormaux
        (self.suivant_u32() as f64 / u32::MAX as f64) * 2000.0 - 1000.0
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(depart: Instant, max: Duration) {
    if depart.elapsed() > max {
        panic!("budget temps dépassé: {max:?}");
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_binaire_sans_panique() {
    let depart = Instant::now();
    let mut rng = Rng::new(0xCA1C);
    let symboles = ["+", "-", "*", "/", "^", "?", "%"];

    for _ in 0..20_000 {
        budget(depart, Duration::from_secs(5));
        let a = rng.flottant();
        let b = rng.flottant();
        let s = symboles[rng.tirer(symboles.len() as u32) as usize];

        match appliquer_operation_binaire(a, s, b) {
            Ok(v) => {
                // l'arrondi quasi-entier est idempotent (bits identiques,
                // NaN compris)
                assert_eq!(arrondi_si_quasi_entier(v).to_bits(), v.to_bits());
            }
            Err(e) => assert!(
                matches!(
                    e,
                    ErreurCalcul::DivisionParZero | ErreurCalcul::OperateurInvalide(_)
                ),
                "erreur inattendue: {e}"
            ),
        }
    }
}

#[test]
fn fuzz_trig_deterministe() {
    let depart = Instant::now();
    let mut rng = Rng::new(0x7816);
    let symboles = ["sin", "cos", "tan", "cot", "sec"];

    for _ in 0..20_000 {
        budget(depart, Duration::from_secs(5));
        let degres = rng.flottant();
        let s = symboles[rng.tirer(symboles.len() as u32) as usize];

        let premier = appliquer_operation_trig(degres, s);
        let second = appliquer_operation_trig(degres, s);
        match (premier, second) {
            (Ok(x), Ok(y)) => assert_eq!(x.to_bits(), y.to_bits()),
            (Err(x), Err(y)) => assert_eq!(x, y),
            (x, y) => panic!("non déterministe pour {s}({degres}°): {x:?} vs {y:?}"),
        }
    }
}

#[test]
fn fuzz_bases_aller_retour() {
    let depart = Instant::now();
    let mut rng = Rng::new(0xBA5E);

    for _ in 0..10_000 {
        budget(depart, Duration::from_secs(5));
        let n = rng.suivant_u32() as i64 - (u32::MAX / 2) as i64;
        let base = 2 + rng.tirer(15); // [2, 16]

        let code = convertir_base(&n.to_string(), 10, base)
            .unwrap_or_else(|e| panic!("encodage n={n} base={base}: {e}"));
        let retour = convertir_base(&code, base, 10)
            .unwrap_or_else(|e| panic!("décodage {code:?} base={base}: {e}"));
        assert_eq!(retour, n.to_string(), "n={n} base={base}");
    }
}

#[test]
fn fuzz_bases_chaines_arbitraires_sans_panique() {
    // chaînes de symboles arbitraires : l'erreur est admise, la panique non
    let depart = Instant::now();
    let mut rng = Rng::new(0xF00D);
    let alphabet: Vec<char> = "0123456789ABCDEFGabcdefg-+. /".chars().collect();

    for _ in 0..10_000 {
        budget(depart, Duration::from_secs(5));
        let longueur = rng.tirer(10) as usize;
        let chaine: String = (0..longueur)
            .map(|_| alphabet[rng.tirer(alphabet.len() as u32) as usize])
            .collect();
        let source = rng.tirer(20); // parfois hors [2, 16]
        let cible = rng.tirer(20);

        if let Err(e) = convertir_base(&chaine, source, cible) {
            assert!(
                matches!(
                    e,
                    ErreurCalcul::BaseInvalide | ErreurCalcul::ChiffresInvalides(_)
                ),
                "erreur inattendue: {e}"
            );
        }
    }
}
