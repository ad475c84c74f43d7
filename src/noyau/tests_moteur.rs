//! Tests du moteur : scénarios de touches + état complet avant/après.
//!
//! On pilote le moteur avec les libellés des touches ("5", "+", "÷", "=", …)
//! pour que les scénarios se lisent comme des pressions réelles.

use super::erreur::MARQUEUR_ERREUR;
use super::moteur::{reduire, Etat, Evenement, Moteur};
use super::Operateur;

fn evenement(touche: &str) -> Evenement {
    match touche {
        "AC" => Evenement::Effacer,
        "+/-" => Evenement::Signe,
        "%" => Evenement::Pourcentage,
        "." => Evenement::Decimale,
        "=" => Evenement::Egal,
        "+" => Evenement::Operateur(Operateur::Addition),
        "-" => Evenement::Operateur(Operateur::Soustraction),
        "×" => Evenement::Operateur(Operateur::Multiplication),
        "÷" => Evenement::Operateur(Operateur::Division),
        t => {
            let mut it = t.chars();
            match (it.next(), it.next()) {
                (Some(c), None) if c.is_ascii_digit() => Evenement::Chiffre(c),
                _ => panic!("touche inconnue: {t:?}"),
            }
        }
    }
}

fn presser(touches: &[&str]) -> Moteur {
    let mut m = Moteur::default();
    for t in touches {
        m.appliquer(evenement(t));
    }
    m
}

fn affichage(touches: &[&str]) -> String {
    presser(touches).affichage().to_string()
}

fn etat(
    affichage: &str,
    operande: Option<f64>,
    operateur: Option<Operateur>,
    ecraser: bool,
) -> Etat {
    Etat {
        affichage: affichage.to_string(),
        operande,
        operateur,
        ecraser,
    }
}

fn etat_erreur() -> Etat {
    etat(MARQUEUR_ERREUR, None, None, true)
}

/* ------------------------ Scénarios de base ------------------------ */

#[test]
fn addition_simple() {
    assert_eq!(affichage(&["5", "+", "3", "="]), "8");
}

#[test]
fn division_par_zero_sur_egal() {
    let m = presser(&["1", "÷", "0", "="]);
    assert!(m.est_erreur());
    assert_eq!(*m.etat(), etat_erreur());
}

#[test]
fn division_par_zero_sur_operateur() {
    let m = presser(&["1", "÷", "0", "+"]);
    assert_eq!(*m.etat(), etat_erreur());
}

#[test]
fn pourcentage_simple() {
    let m = presser(&["5", "0", "%"]);
    assert_eq!(*m.etat(), etat("0.5", None, None, true));
}

#[test]
fn changement_de_signe_aller_retour() {
    let mut m = presser(&["9", "+/-"]);
    assert_eq!(m.affichage(), "-9");
    m.toggle_sign();
    assert_eq!(m.affichage(), "9");
}

#[test]
fn evaluation_dans_l_ordre_de_saisie() {
    let m = presser(&["2", "+", "3", "+"]);
    assert_eq!(
        *m.etat(),
        etat("5", Some(5.0), Some(Operateur::Addition), true)
    );
    assert_eq!(affichage(&["2", "+", "3", "+", "4", "="]), "9");
    // pas de priorité : (2 + 3) × 4
    assert_eq!(affichage(&["2", "+", "3", "×", "4", "="]), "20");
}

#[test]
fn resultat_scientifique() {
    let m = presser(&[
        "5", "0", "0", "0", "0", "0", "0", "0", "×", "5", "0", "0", "0", "0", "0", "0", "0", "=",
    ]);
    assert_eq!(m.affichage(), "2.5e15");
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn saisie_concatenee_et_bornee() {
    assert_eq!(affichage(&["1", "2", "3"]), "123");
    let treize: Vec<&str> = "1234567890123".split("").filter(|s| !s.is_empty()).collect();
    assert_eq!(affichage(&treize), "123456789012");
}

#[test]
fn zero_initial_supprime() {
    assert_eq!(affichage(&["0"]), "0");
    assert_eq!(affichage(&["0", "0", "0"]), "0");
    assert_eq!(affichage(&["0", "0", "7"]), "7");
    assert_eq!(*presser(&["0"]).etat(), Etat::default());
}

#[test]
fn chiffre_invalide_ignore() {
    let mut m = presser(&["4"]);
    m.input_digit('a');
    m.input_digit('٣');
    assert_eq!(*m.etat(), etat("4", None, None, false));
}

#[test]
fn decimale() {
    assert_eq!(affichage(&["."]), "0.");
    assert_eq!(affichage(&[".", "5"]), "0.5");
    assert_eq!(affichage(&["1", ".", "2", ".", "3"]), "1.23");
    // après un opérateur : nouvelle saisie
    let m = presser(&["5", "+", "."]);
    assert_eq!(
        *m.etat(),
        etat("0.", Some(5.0), Some(Operateur::Addition), false)
    );
}

#[test]
fn decimale_ignoree_a_longueur_max() {
    let douze = ["1"; 12];
    let mut m = presser(&douze);
    m.input_decimal();
    assert_eq!(m.affichage(), "111111111111");
}

#[test]
fn signe_compte_dans_la_longueur() {
    let mut touches = vec!["1"; 11];
    touches.push("+/-");
    touches.push("2");
    assert_eq!(affichage(&touches), "-11111111111");
}

#[test]
fn signe_sur_zero_inchange() {
    assert_eq!(*presser(&["+/-"]).etat(), Etat::default());
    assert_eq!(affichage(&["0", "+/-"]), "0");
}

/* ------------------------ Égal / opérateurs ------------------------ */

#[test]
fn egal_sans_operation_ne_fait_que_lever_ecraser() {
    let m = presser(&["5", "="]);
    assert_eq!(*m.etat(), etat("5", None, None, true));
    assert_eq!(affichage(&["5", "=", "3"]), "3");
}

#[test]
fn egal_repete_ne_recalcule_pas() {
    let m = presser(&["5", "+", "3", "=", "="]);
    assert_eq!(*m.etat(), etat("8", None, None, true));
}

#[test]
fn operateur_repete_reutilise_l_ecran() {
    // 5 + puis + : 5 + 5
    let m = presser(&["5", "+", "+"]);
    assert_eq!(
        *m.etat(),
        etat("10", Some(10.0), Some(Operateur::Addition), true)
    );
}

#[test]
fn changement_d_operateur_apres_resultat() {
    assert_eq!(affichage(&["8", "-", "3", "=", "÷", "2", "="]), "2.5");
}

#[test]
fn pourcentage_ignore_l_operande_stockee() {
    let mut m = presser(&["2", "0", "0", "+", "5", "0", "%"]);
    assert_eq!(
        *m.etat(),
        etat("0.5", Some(200.0), Some(Operateur::Addition), true)
    );
    m.evaluate();
    assert_eq!(m.affichage(), "200.5");
}

#[test]
fn pourcentage_petit_passe_en_scientifique() {
    // 0.00000001 / 100 = 1e-10, sous le seuil bas
    assert_eq!(
        affichage(&[".", "0", "0", "0", "0", "0", "0", "0", "1", "%"]),
        "1e-10"
    );
}

#[test]
fn pourcentage_dans_la_bande_exposant_court() {
    // 0.000001 / 100 = 1e-8 : au-dessus du seuil bas, mais rendu en exposant court
    let m = presser(&[".", "0", "0", "0", "0", "0", "1", "%"]);
    assert_eq!(*m.etat(), etat("1e-8", None, None, true));
}

#[test]
fn moitie_arrondie_vers_le_haut_sur_douze_chiffres() {
    let m = presser(&[
        "1", "0", "0", "0", "0", "0", "0", "0", "0", "0", "0", "0", "+", ".", "5", "=",
    ]);
    assert_eq!(m.affichage(), "100000000001");
}

#[test]
fn moitie_arrondie_vers_le_haut_en_scientifique() {
    let m = presser(&[
        "1", "0", "0", "0", "0", "0", "0", ".", "5", "×", "1", "0", "0", "0", "0", "0", "0", "=",
    ]);
    assert_eq!(m.affichage(), "1.000001e12");
}

#[test]
fn depassement_devient_erreur() {
    let mut m = presser(&["9"; 12]);
    m.apply_operator(Operateur::Multiplication);
    for _ in 0..10 {
        if m.est_erreur() {
            break;
        }
        m.apply_operator(Operateur::Multiplication);
    }
    assert_eq!(*m.etat(), etat_erreur());
}

/* ------------------------ Sortie d’erreur ------------------------ */

fn en_erreur() -> Moteur {
    let m = presser(&["1", "÷", "0", "="]);
    assert!(m.est_erreur());
    m
}

#[test]
fn effacer_depuis_erreur() {
    let mut m = en_erreur();
    m.clear();
    assert_eq!(*m.etat(), Etat::default());
}

#[test]
fn chiffre_depuis_erreur_efface_puis_saisit() {
    let mut m = en_erreur();
    m.input_digit('7');
    assert_eq!(*m.etat(), etat("7", None, None, false));
}

#[test]
fn decimale_depuis_erreur_efface_puis_saisit() {
    let mut m = en_erreur();
    m.input_decimal();
    assert_eq!(*m.etat(), etat("0.", None, None, false));
}

#[test]
fn autres_touches_depuis_erreur_ne_font_qu_effacer() {
    let evenements = [
        Evenement::Signe,
        Evenement::Pourcentage,
        Evenement::Operateur(Operateur::Addition),
        Evenement::Egal,
    ];
    for ev in evenements {
        let mut m = en_erreur();
        m.appliquer(ev);
        assert_eq!(*m.etat(), Etat::default(), "ev={ev:?}");
    }
}

/* ------------------------ Réducteur ------------------------ */

#[test]
fn reducteur_ne_touche_pas_l_etat_source() {
    let avant = etat("12", Some(3.0), Some(Operateur::Soustraction), false);
    let apres = reduire(&avant, Evenement::Egal);
    assert_eq!(avant, etat("12", Some(3.0), Some(Operateur::Soustraction), false));
    assert_eq!(apres, etat("-9", None, None, true));
}

#[test]
fn ecran_illisible_sans_effet() {
    // Inatteignable par les touches, mais le moteur ne doit pas paniquer.
    let bizarre = etat("1.2.3", Some(1.0), Some(Operateur::Addition), false);
    for ev in [
        Evenement::Pourcentage,
        Evenement::Egal,
        Evenement::Operateur(Operateur::Division),
    ] {
        assert_eq!(reduire(&bizarre, ev), bizarre, "ev={ev:?}");
    }
}
