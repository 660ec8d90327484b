// src/noyau/generateur.rs
//
// Génération aléatoire d’expressions.
// - au plus MAX_OPERATEURS opérateurs binaires par arbre
// - à chaque noeud : pile ou face entre feuille et opération (feuille forcée si budget épuisé)
// - feuille : entier de [0, plage] ou fraction propre (dénominateur dans [2, plage]),
//   avec une partie entière tirée une fois sur deux
// - "-" : on retire l’opérande droit tant que gauche < droite (résultat jamais négatif)
// - "÷" : on retire l’opérande droit tant qu’il vaut 0
//
// Les boucles de rejet sont bornées (max_rejets) : plage dégénérée => GenerationEchouee,
// jamais de boucle infinie. Aucun souvenir des exercices précédents (voir serie.rs).

use std::cmp::Ordering;

use rand::Rng;

use super::erreur::{ErreurNoyau, Resultat};
use super::expr::{Expr, Op};
use super::rationnel::Rationnel;

pub const MAX_OPERATEURS: u32 = 3;

/// Tirages maximum de l’opérande droit pour "-" et "÷".
pub const REJETS_DEFAUT: u32 = 1000;

pub struct Generateur<R: Rng> {
    plage: u64,
    rng: R,
    max_rejets: u32,
}

impl<R: Rng> Generateur<R> {
    pub fn new(plage: u32, rng: R) -> Self {
        Self {
            plage: u64::from(plage),
            rng,
            max_rejets: REJETS_DEFAUT,
        }
    }

    pub fn avec_max_rejets(mut self, max_rejets: u32) -> Self {
        self.max_rejets = max_rejets.max(1);
        self
    }

    /// Un arbre complet (budget d’opérateurs neuf).
    pub fn generer(&mut self) -> Resultat<Expr> {
        let mut budget = MAX_OPERATEURS;
        self.generer_noeud(&mut budget)
    }

    fn generer_noeud(&mut self, budget: &mut u32) -> Resultat<Expr> {
        if *budget == 0 || self.rng.random_bool(0.5) {
            return Ok(self.generer_feuille());
        }
        *budget -= 1;

        let op = Op::TOUS[self.rng.random_range(0..Op::TOUS.len())];
        let gauche = self.generer_noeud(budget)?;

        let droite = match op {
            Op::Moins => {
                let vg = gauche.evaluate()?;
                self.droite_acceptable(budget, |vd| vg.comparer(vd) != Ordering::Less)?
            }
            Op::Divise => self.droite_acceptable(budget, |vd| !vd.est_nul())?,
            Op::Plus | Op::Fois => self.generer_noeud(budget)?,
        };

        Ok(Expr::binaire(gauche, op, droite))
    }

    /// Retire l’opérande droit jusqu’à ce que sa valeur soit acceptée.
    /// Le budget consommé par un tirage rejeté est rendu avant le suivant.
    fn droite_acceptable(
        &mut self,
        budget: &mut u32,
        accepte: impl Fn(&Rationnel) -> bool,
    ) -> Resultat<Expr> {
        let sauvegarde = *budget;
        for _ in 0..self.max_rejets {
            *budget = sauvegarde;
            let droite = self.generer_noeud(budget)?;
            if accepte(&droite.evaluate()?) {
                return Ok(droite);
            }
            log::trace!("opérande droit rejeté: {droite}");
        }
        Err(ErreurNoyau::GenerationEchouee {
            tentatives: self.max_rejets,
        })
    }

    fn generer_feuille(&mut self) -> Expr {
        if self.rng.random_bool(0.5) {
            return Expr::Nombre(self.rng.random_range(0..=self.plage));
        }

        // plage < 2 : dénominateur minimal 2
        let denominateur = self.rng.random_range(2..=self.plage.max(2));
        let numerateur = self.rng.random_range(0..denominateur);
        let entier = if self.rng.random_bool(0.5) {
            self.rng.random_range(0..=self.plage)
        } else {
            0
        };
        Expr::fraction(entier, numerateur, denominateur)
    }
}
