use super::*;

#[test]
fn step_label_is_one_based() {
    assert_eq!(step_label(0, 4), "Step 1 of 4");
    assert_eq!(step_label(3, 4), "Step 4 of 4");
}

#[test]
fn only_the_final_step_finishes() {
    assert!(!is_last_step(0, 4));
    assert!(!is_last_step(2, 4));
    assert!(is_last_step(3, 4));
}

#[test]
fn position_defaults_to_origin_without_anchor() {
    assert_eq!(position_style(None), "top: 0px; left: 0px");
}

#[test]
fn position_uses_anchor_coordinates() {
    assert_eq!(position_style(Some((120.5, 32.0))), "top: 120.5px; left: 32px");
}
