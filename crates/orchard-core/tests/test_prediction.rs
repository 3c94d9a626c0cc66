use orchard_core::consts::FALLBACK_LABELS;
use orchard_core::labels::{fallback_labels, resolve_labels, ClassLabel};
use orchard_core::prediction::{select_winner, Prediction};

fn preds(values: &[f32]) -> Vec<Prediction> {
    values
        .iter()
        .enumerate()
        .map(|(i, &p)| Prediction::new(format!("L{i}"), p))
        .collect()
}

// ---------------------------------------------------------------------------
// Winner selection
// ---------------------------------------------------------------------------

#[test]
fn test_winner_is_maximum() {
    assert_eq!(select_winner(&preds(&[0.1, 0.7, 0.2])), Some(1));
}

#[test]
fn test_winner_tie_keeps_first() {
    assert_eq!(select_winner(&preds(&[0.2, 0.9, 0.9])), Some(1));
    assert_eq!(select_winner(&preds(&[0.5, 0.5, 0.5])), Some(0));
}

#[test]
fn test_winner_single_prediction() {
    assert_eq!(select_winner(&preds(&[0.0])), Some(0));
}

#[test]
fn test_winner_empty() {
    assert_eq!(select_winner(&[]), None);
}

#[test]
fn test_winner_ignores_nan() {
    assert_eq!(select_winner(&preds(&[f32::NAN, 0.1, 0.3])), Some(2));
    assert_eq!(select_winner(&preds(&[0.4, f32::NAN, 0.3])), Some(0));
}

#[test]
fn test_winner_all_zero() {
    assert_eq!(select_winner(&preds(&[0.0, 0.0, 0.0, 0.0])), Some(0));
}

#[test]
fn test_winner_last_position() {
    assert_eq!(select_winner(&preds(&[0.1, 0.2, 0.3, 0.4])), Some(3));
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

#[test]
fn test_model_labels_kept_in_order() {
    let resolved = resolve_labels(&["Lime".into(), "Kiwi".into()]);
    assert!(!resolved.fallback);
    assert_eq!(
        resolved.labels,
        vec![ClassLabel::from("Lime"), ClassLabel::from("Kiwi")]
    );
}

#[test]
fn test_empty_labels_resolve_to_fallback() {
    let resolved = resolve_labels(&[]);
    assert!(resolved.fallback);
    assert_eq!(resolved.labels.len(), 6);
    assert_eq!(resolved.labels, fallback_labels());
}

#[test]
fn test_fallback_order() {
    let names: Vec<_> = fallback_labels().iter().map(|l| l.to_string()).collect();
    assert_eq!(
        names,
        vec!["Banana", "Orange", "Mango", "Pineapple", "Apple", "Guava"]
    );
    assert_eq!(names, FALLBACK_LABELS.to_vec());
}

#[test]
fn test_label_display_and_as_str() {
    let label = ClassLabel::new("Pineapple");
    assert_eq!(label.as_str(), "Pineapple");
    assert_eq!(format!("{label}"), "Pineapple");
}

#[test]
fn test_prediction_serializes_flat_label() {
    let json = serde_json::to_string(&Prediction::new("Mango", 0.5)).unwrap();
    assert_eq!(json, r#"{"label":"Mango","probability":0.5}"#);
}
