// src/app/touches.rs
//
// Disposition fixe du pavé : 19 touches, 4 colonnes.
// Chaque touche correspond à exactement une opération du moteur.

use crate::noyau::Operateur;

/// Nombre de colonnes de la grille.
pub const COLONNES: usize = 4;

/// Style visuel d’une touche.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variante {
    Defaut,
    Operateur,
    Controle,
}

/// Ce que déclenche une touche.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Chiffre(char),
    Decimale,
    Effacer,
    Signe,
    Pourcentage,
    Operateur(Operateur),
    Egal,
}

#[derive(Clone, Copy, Debug)]
pub struct Touche {
    pub libelle: &'static str,
    pub variante: Variante,
    /// Nombre de colonnes occupées (le "0" en prend deux).
    pub largeur: usize,
    pub action: Action,
}

impl Touche {
    const fn simple(libelle: &'static str, action: Action) -> Self {
        Self {
            libelle,
            variante: Variante::Defaut,
            largeur: 1,
            action,
        }
    }

    const fn controle(libelle: &'static str, action: Action) -> Self {
        Self {
            variante: Variante::Controle,
            ..Self::simple(libelle, action)
        }
    }

    /// Touche stylée comme un opérateur ("=" compris).
    const fn accent(libelle: &'static str, action: Action) -> Self {
        Self {
            variante: Variante::Operateur,
            ..Self::simple(libelle, action)
        }
    }

    const fn chiffre(libelle: &'static str, d: char) -> Self {
        Self::simple(libelle, Action::Chiffre(d))
    }

    const fn operateur(op: Operateur, libelle: &'static str) -> Self {
        Self::accent(libelle, Action::Operateur(op))
    }

    /// Occupe deux colonnes.
    const fn large(self) -> Self {
        Self { largeur: 2, ..self }
    }

    /// Texte d’aide (survol) : "Opération ÷" pour les opérateurs, sinon le libellé.
    pub fn aide(&self) -> String {
        match self.action {
            Action::Operateur(_) => format!("Opération {}", self.libelle),
            _ => self.libelle.to_string(),
        }
    }
}

pub static DISPOSITION: [Touche; 19] = [
    Touche::controle("AC", Action::Effacer),
    Touche::controle("+/-", Action::Signe),
    Touche::controle("%", Action::Pourcentage),
    Touche::operateur(Operateur::Division, "÷"),
    Touche::chiffre("7", '7'),
    Touche::chiffre("8", '8'),
    Touche::chiffre("9", '9'),
    Touche::operateur(Operateur::Multiplication, "×"),
    Touche::chiffre("4", '4'),
    Touche::chiffre("5", '5'),
    Touche::chiffre("6", '6'),
    Touche::operateur(Operateur::Soustraction, "-"),
    Touche::chiffre("1", '1'),
    Touche::chiffre("2", '2'),
    Touche::chiffre("3", '3'),
    Touche::operateur(Operateur::Addition, "+"),
    Touche::chiffre("0", '0').large(),
    Touche::simple(".", Action::Decimale),
    Touche::accent("=", Action::Egal),
];

/// Découpe la disposition en rangées de `COLONNES` colonnes (selon les largeurs).
pub fn rangees() -> Vec<Vec<&'static Touche>> {
    let mut rangees = Vec::new();
    let mut courante = Vec::new();
    let mut occupees = 0;

    for t in DISPOSITION.iter() {
        if occupees + t.largeur > COLONNES {
            rangees.push(std::mem::take(&mut courante));
            occupees = 0;
        }
        courante.push(t);
        occupees += t.largeur;
    }
    if !courante.is_empty() {
        rangees.push(courante);
    }
    rangees
}
