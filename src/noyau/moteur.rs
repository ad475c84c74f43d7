//! Moteur de la calculatrice : automate fini sur les touches.
//!
//! L’état complet tient dans [`Etat`]. Chaque touche devient un [`Evenement`],
//! `reduire` calcule l’état suivant à partir de l’état courant, et [`Moteur`]
//! remplace l’ancien état d’un bloc (jamais de mise à jour partielle).
//!
//! Évaluation strictement dans l’ordre de saisie : 2 + 3 × 4 = 20.
//!
//! Sortie d’erreur : toute touche qui suit `MARQUEUR_ERREUR` commence par
//! un effacement complet. Chiffre et décimale appliquent ensuite leur effet ;
//! signe, pourcentage, opérateur et égal s’arrêtent là.

use tracing::{debug, warn};

use super::erreur::{ErreurCalcul, MARQUEUR_ERREUR};
use super::format::{formater_nombre, LONGUEUR_MAX_AFFICHAGE};
use super::operateur::Operateur;

/// État complet de la calculatrice.
#[derive(Debug, Clone, PartialEq)]
pub struct Etat {
    /// Texte de l’écran (numéral décimal ou `MARQUEUR_ERREUR`).
    pub affichage: String,
    /// Opérande gauche en attente.
    pub operande: Option<f64>,
    /// Opérateur choisi, pas encore résolu.
    pub operateur: Option<Operateur>,
    /// La prochaine saisie remplace l’écran au lieu de le compléter.
    pub ecraser: bool,
}

impl Default for Etat {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            operande: None,
            operateur: None,
            ecraser: false,
        }
    }
}

impl Etat {
    pub fn est_erreur(&self) -> bool {
        self.affichage == MARQUEUR_ERREUR
    }

    /// Valeur numérique de l’écran (None si illisible).
    fn valeur_courante(&self) -> Option<f64> {
        self.affichage.parse::<f64>().ok()
    }

    fn longueur(&self) -> usize {
        self.affichage.chars().count()
    }

    fn etat_erreur() -> Self {
        Self {
            affichage: MARQUEUR_ERREUR.to_string(),
            operande: None,
            operateur: None,
            ecraser: true,
        }
    }
}

/// Une pression de touche, telle que le moteur la comprend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evenement {
    Chiffre(char),
    Decimale,
    Effacer,
    Signe,
    Pourcentage,
    Operateur(Operateur),
    Egal,
}

/// Réducteur pur : (état, événement) -> état suivant.
pub fn reduire(etat: &Etat, evenement: Evenement) -> Etat {
    if let Evenement::Effacer = evenement {
        return Etat::default();
    }

    if etat.est_erreur() {
        // Sortie d’erreur : effacement d’abord.
        let neuf = Etat::default();
        return match evenement {
            Evenement::Chiffre(d) => chiffre(neuf, d),
            Evenement::Decimale => decimale(neuf),
            _ => neuf,
        };
    }

    let etat = etat.clone();
    match evenement {
        Evenement::Chiffre(d) => chiffre(etat, d),
        Evenement::Decimale => decimale(etat),
        Evenement::Signe => signe(etat),
        Evenement::Pourcentage => pourcentage(etat),
        Evenement::Operateur(op) => operateur(etat, op),
        Evenement::Egal => egal(etat),
        Evenement::Effacer => Etat::default(),
    }
}

/* ------------------------ Transitions ------------------------ */

fn chiffre(mut etat: Etat, d: char) -> Etat {
    if !d.is_ascii_digit() {
        warn!(touche = ?d, "chiffre invalide ignoré");
        return etat;
    }

    if etat.ecraser || etat.affichage == "0" {
        // "0" sur "0" reste "0"
        etat.affichage = d.to_string();
        etat.ecraser = false;
        return etat;
    }

    if etat.longueur() >= LONGUEUR_MAX_AFFICHAGE {
        return etat;
    }

    etat.affichage.push(d);
    etat
}

fn decimale(mut etat: Etat) -> Etat {
    if etat.ecraser {
        etat.affichage = "0.".to_string();
        etat.ecraser = false;
        return etat;
    }

    if etat.affichage.contains('.') || etat.longueur() >= LONGUEUR_MAX_AFFICHAGE {
        return etat;
    }

    etat.affichage.push('.');
    etat
}

fn signe(mut etat: Etat) -> Etat {
    if let Some(reste) = etat.affichage.strip_prefix('-') {
        etat.affichage = reste.to_string();
    } else if etat.affichage != "0" {
        etat.affichage.insert(0, '-');
    }
    etat
}

fn pourcentage(etat: Etat) -> Etat {
    match etat.valeur_courante() {
        Some(v) => deposer_valeur(etat, v / 100.0),
        None => {
            warn!(affichage = %etat.affichage, "écran illisible, pourcentage ignoré");
            etat
        }
    }
}

fn operateur(mut etat: Etat, op: Operateur) -> Etat {
    let Some(courante) = etat.valeur_courante() else {
        warn!(affichage = %etat.affichage, "écran illisible, opérateur ignoré");
        return etat;
    };

    match (etat.operande, etat.operateur) {
        (None, _) => etat.operande = Some(courante),
        (Some(gauche), Some(en_attente)) => {
            let (valeur, texte) = match resoudre(gauche, en_attente, courante) {
                Ok(r) => r,
                Err(e) => return entrer_erreur(e),
            };
            etat.operande = Some(valeur);
            etat.affichage = texte;
        }
        // opérande sans opérateur : inatteignable par les touches, on garde l’opérande
        (Some(_), None) => {}
    }

    etat.operateur = Some(op);
    etat.ecraser = true;
    etat
}

fn egal(mut etat: Etat) -> Etat {
    let (Some(gauche), Some(op)) = (etat.operande, etat.operateur) else {
        etat.ecraser = true;
        return etat;
    };

    let Some(courante) = etat.valeur_courante() else {
        warn!(affichage = %etat.affichage, "écran illisible, égal ignoré");
        return etat;
    };

    match resoudre(gauche, op, courante) {
        Ok((_, texte)) => Etat {
            affichage: texte,
            operande: None,
            operateur: None,
            ecraser: true,
        },
        Err(e) => entrer_erreur(e),
    }
}

/* ------------------------ Utilitaires ------------------------ */

/// Applique l’opération et formate ; renvoie (valeur, texte).
fn resoudre(gauche: f64, op: Operateur, droite: f64) -> Result<(f64, String), ErreurCalcul> {
    let v = op.appliquer(gauche, droite)?;
    let texte = formater_nombre(v)?;
    debug!(gauche, op = op.symbole(), droite, resultat = v, "opération résolue");
    Ok((v, texte))
}

/// Nouvelle valeur calculée hors opérateur (pourcentage).
fn deposer_valeur(mut etat: Etat, v: f64) -> Etat {
    match formater_nombre(v) {
        Ok(texte) => {
            etat.affichage = texte;
            etat.ecraser = true;
            etat
        }
        Err(e) => entrer_erreur(e),
    }
}

fn entrer_erreur(e: ErreurCalcul) -> Etat {
    warn!(erreur = %e, "calcul indéfini");
    Etat::etat_erreur()
}

/* ------------------------ Moteur (API pour la vue) ------------------------ */

/// Instance unique tenue par l’application.
#[derive(Debug, Clone, Default)]
pub struct Moteur {
    etat: Etat,
}

impl Moteur {
    /// Traite un événement jusqu’au bout ; l’état est remplacé d’un bloc.
    pub fn appliquer(&mut self, evenement: Evenement) {
        debug!(?evenement, avant = %self.etat.affichage, "touche");
        self.etat = reduire(&self.etat, evenement);
    }

    pub fn input_digit(&mut self, d: char) {
        self.appliquer(Evenement::Chiffre(d));
    }

    pub fn input_decimal(&mut self) {
        self.appliquer(Evenement::Decimale);
    }

    pub fn clear(&mut self) {
        self.appliquer(Evenement::Effacer);
    }

    pub fn toggle_sign(&mut self) {
        self.appliquer(Evenement::Signe);
    }

    pub fn input_percent(&mut self) {
        self.appliquer(Evenement::Pourcentage);
    }

    pub fn apply_operator(&mut self, op: Operateur) {
        self.appliquer(Evenement::Operateur(op));
    }

    pub fn evaluate(&mut self) {
        self.appliquer(Evenement::Egal);
    }

    pub fn affichage(&self) -> &str {
        &self.etat.affichage
    }

    pub fn est_erreur(&self) -> bool {
        self.etat.est_erreur()
    }

    pub fn etat(&self) -> &Etat {
        &self.etat
    }
}
