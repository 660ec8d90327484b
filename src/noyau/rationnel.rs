// src/noyau/rationnel.rs
//
// Rationnel exact borné (i64), toujours réduit, dénominateur > 0.
// - Construction : réduction par pgcd + signe porté par le numérateur
// - Opérations : arithmétique vérifiée (jamais de débordement silencieux)
// - Comparaison : ordre de Ratio (sans produit croisé, donc sans débordement)
//
// Affichage (format des fichiers) :
//   7     (entier)
//   3/4   (|x| < 1)
//   2’1/3 (nombre mixte, séparateur U+2019)

use std::cmp::Ordering;
use std::fmt;

use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Zero};

use super::erreur::{ErreurNoyau, Resultat};

/// Séparateur entier / fraction d’un nombre mixte.
pub const SEPARATEUR_MIXTE: char = '’';

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rationnel(Ratio<i64>);

impl Rationnel {
    /// n/d réduit. d == 0 => DivisionParZero.
    pub fn new(n: i64, d: i64) -> Resultat<Self> {
        if d == 0 {
            return Err(ErreurNoyau::DivisionParZero);
        }
        // la normalisation du signe négative n et d : i64::MIN n’a pas d’opposé
        if n == i64::MIN || d == i64::MIN {
            return Err(ErreurNoyau::Depassement);
        }
        Ok(Rationnel(Ratio::new(n, d)))
    }

    pub fn entier(n: i64) -> Self {
        Rationnel(Ratio::from_integer(n))
    }

    #[cfg(test)]
    pub fn zero() -> Self {
        Rationnel(Ratio::zero())
    }

    pub fn numer(&self) -> i64 {
        *self.0.numer()
    }

    pub fn denom(&self) -> i64 {
        *self.0.denom()
    }

    pub fn est_nul(&self) -> bool {
        self.0.is_zero()
    }

    pub fn ajouter(&self, autre: &Rationnel) -> Resultat<Rationnel> {
        self.0
            .checked_add(&autre.0)
            .map(Rationnel)
            .ok_or(ErreurNoyau::Depassement)
    }

    pub fn soustraire(&self, autre: &Rationnel) -> Resultat<Rationnel> {
        self.0
            .checked_sub(&autre.0)
            .map(Rationnel)
            .ok_or(ErreurNoyau::Depassement)
    }

    pub fn multiplier(&self, autre: &Rationnel) -> Resultat<Rationnel> {
        self.0
            .checked_mul(&autre.0)
            .map(Rationnel)
            .ok_or(ErreurNoyau::Depassement)
    }

    /// a ÷ b ; b nul => DivisionParZero (avant tout calcul).
    pub fn diviser(&self, autre: &Rationnel) -> Resultat<Rationnel> {
        if autre.est_nul() {
            return Err(ErreurNoyau::DivisionParZero);
        }
        self.0
            .checked_div(&autre.0)
            .map(Rationnel)
            .ok_or(ErreurNoyau::Depassement)
    }

    pub fn comparer(&self, autre: &Rationnel) -> Ordering {
        self.0.cmp(&autre.0)
    }
}

impl fmt::Display for Rationnel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.numer();
        let d = self.denom();

        if d.is_one() {
            return write!(f, "{n}");
        }

        // unsigned_abs : pas de panique sur i64::MIN
        let abs_n = n.unsigned_abs();
        let d_u = d as u64;
        if abs_n < d_u {
            return write!(f, "{n}/{d}");
        }

        let reste = abs_n % d_u;
        let entier = abs_n / d_u;
        let signe = if n < 0 { "-" } else { "" };
        // forme réduite + d > 1 => reste non nul
        write!(f, "{signe}{entier}{SEPARATEUR_MIXTE}{reste}/{d}")
    }
}
