use super::*;

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

#[test]
fn summary_reports_selection_size() {
    assert_eq!(selection_summary(0), "0 items selected");
    assert_eq!(selection_summary(3), "3 items selected");
}

#[test]
fn group_is_fully_selected_only_when_every_id_is() {
    let group = ids(&["story-1", "story-2"]);
    assert!(group_fully_selected(&group, &ids(&["kpi-2", "story-1", "story-2"])));
    assert!(!group_fully_selected(&group, &ids(&["story-1"])));
    assert!(!group_fully_selected(&group, &[]));
}

#[test]
fn empty_group_is_never_fully_selected() {
    assert!(!group_fully_selected(&[], &ids(&["kpi-2"])));
}
