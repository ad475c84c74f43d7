//! src/app/etat.rs
//!
//! État UI : le moteur de la calculatrice.
//!
//! Rôle : recevoir les actions des touches et les transmettre au moteur,
//! sans logique d’affichage.
//!
//! Contrats :
//! - Aucun calcul ici (tout passe par `noyau::Moteur`).
//! - Une action = un événement, traité jusqu’au bout avant le suivant.

use tracing::debug;

use crate::noyau::Moteur;

use super::touches::Action;

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    moteur: Moteur,
}

impl AppCalc {
    /// Seul chemin touche -> moteur.
    pub fn declencher(&mut self, action: Action) {
        match action {
            Action::Chiffre(d) => self.moteur.input_digit(d),
            Action::Decimale => self.moteur.input_decimal(),
            Action::Effacer => self.moteur.clear(),
            Action::Signe => self.moteur.toggle_sign(),
            Action::Pourcentage => self.moteur.input_percent(),
            Action::Operateur(op) => self.moteur.apply_operator(op),
            Action::Egal => self.moteur.evaluate(),
        }
        debug!(etat = ?self.moteur.etat(), "après touche");
    }

    /// Texte de l’écran.
    pub fn affichage(&self) -> &str {
        self.moteur.affichage()
    }

    /// Écran en erreur (couleur d’erreur côté vue).
    pub fn est_erreur(&self) -> bool {
        self.moteur.est_erreur()
    }
}
