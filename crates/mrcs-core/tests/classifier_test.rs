use mrcs_core::{classify, classify_with_rule, ClassificationRule, Orientation, Vector3};

/// Offset below the tie tolerance that is exact in binary.
const INSIDE: f64 = 9.5367431640625e-7; // 2^-20
/// Offset clearly outside the tie tolerance.
const OUTSIDE: f64 = 1e-5;

fn v(x: f64, y: f64, z: f64) -> Vector3 {
    Vector3::new([x, y, z])
}

fn assert_rule(n: Vector3, orientation: Orientation, rule: ClassificationRule) {
    assert_eq!(
        classify_with_rule(&n),
        (orientation, rule),
        "classification of {:?}",
        n.to_vec()
    );
}

#[test]
fn test_all_tied() {
    assert_rule(v(1.0, 1.0, 1.0), Orientation::Transversal, ClassificationRule::AllTied);
    assert_rule(v(-1.0, 1.0, -1.0), Orientation::Transversal, ClassificationRule::AllTied);
    assert_rule(
        v(0.5, 0.5 + INSIDE, 0.5 - INSIDE),
        Orientation::Transversal,
        ClassificationRule::AllTied,
    );
}

#[test]
fn test_all_tied_boundary() {
    // sag differs from cor and tra by exactly 1e-6 in decimal
    assert_rule(
        v(0.5, 0.500001, 0.499999),
        Orientation::Transversal,
        ClassificationRule::AllTied,
    );
    assert_rule(
        v(0.5, 0.5 + OUTSIDE, 0.5 - OUTSIDE),
        Orientation::Coronal,
        ClassificationRule::Dominant,
    );
    assert_rule(
        v(1.0 + OUTSIDE, 1.0, 1.0 - OUTSIDE),
        Orientation::Sagittal,
        ClassificationRule::Dominant,
    );
}

#[test]
fn test_sagittal_coronal_tied() {
    assert_rule(
        v(1.0, 1.0, 0.0),
        Orientation::Transversal,
        ClassificationRule::SagittalCoronalTied,
    );
    assert_rule(
        v(0.3, 0.3 + INSIDE, 0.9),
        Orientation::Coronal,
        ClassificationRule::SagittalCoronalTied,
    );
    assert_rule(
        v(0.999999, 1.0, 0.5),
        Orientation::Transversal,
        ClassificationRule::SagittalCoronalTied,
    );
}

#[test]
fn test_sagittal_coronal_boundary() {
    // difference of exactly 1e-6 in decimal still ties
    assert_rule(
        v(0.5, 0.500001, 0.1),
        Orientation::Transversal,
        ClassificationRule::SagittalCoronalTied,
    );
    assert_rule(
        v(0.5, 0.5 + OUTSIDE, 0.1),
        Orientation::Coronal,
        ClassificationRule::Dominant,
    );
}

#[test]
fn test_sagittal_transversal_tied() {
    assert_rule(
        v(0.4, 0.8, 0.4),
        Orientation::Coronal,
        ClassificationRule::SagittalTransversalTied,
    );
    assert_rule(
        v(0.6 + INSIDE, 0.2, 0.6),
        Orientation::Transversal,
        ClassificationRule::SagittalTransversalTied,
    );
    assert_rule(
        v(0.6 + OUTSIDE, 0.2, 0.6),
        Orientation::Sagittal,
        ClassificationRule::Dominant,
    );
}

#[test]
fn test_sagittal_transversal_boundary() {
    assert_rule(
        v(0.6, 0.2, 0.600001),
        Orientation::Transversal,
        ClassificationRule::SagittalTransversalTied,
    );
    assert_rule(
        v(0.600001, 0.2, 0.6),
        Orientation::Transversal,
        ClassificationRule::SagittalTransversalTied,
    );
    assert_rule(
        v(0.60001, 0.2, 0.6),
        Orientation::Sagittal,
        ClassificationRule::Dominant,
    );
}

#[test]
fn test_coronal_transversal_tied() {
    assert_rule(
        v(0.8, 0.4, -0.4),
        Orientation::Sagittal,
        ClassificationRule::CoronalTransversalTied,
    );
    assert_rule(
        v(0.2, 0.6 + INSIDE, 0.6),
        Orientation::Transversal,
        ClassificationRule::CoronalTransversalTied,
    );
    assert_rule(
        v(0.2, 0.6 + OUTSIDE, 0.6),
        Orientation::Coronal,
        ClassificationRule::Dominant,
    );
}

#[test]
fn test_coronal_transversal_boundary() {
    assert_rule(
        v(0.2, 0.600001, 0.6),
        Orientation::Transversal,
        ClassificationRule::CoronalTransversalTied,
    );
    assert_rule(
        v(0.2, 0.60001, 0.6),
        Orientation::Coronal,
        ClassificationRule::Dominant,
    );
}

#[test]
fn test_no_ties_is_argmax() {
    assert_eq!(classify(&v(0.7, 0.5, 0.3)), Orientation::Sagittal);
    assert_eq!(classify(&v(0.3, -0.7, 0.5)), Orientation::Coronal);
    assert_eq!(classify(&v(0.3, 0.5, -0.7)), Orientation::Transversal);
}

#[test]
fn test_classification_is_scale_invariant_without_ties() {
    let n = v(0.31, -0.52, 0.79);
    for scale in [0.5, 1.0, 3.0, 100.0] {
        assert_eq!(classify(&(n * scale)), classify(&n));
    }
}
