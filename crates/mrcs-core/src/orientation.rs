//! Slice orientation classification.
//!
//! A slice normal is assigned to the anatomical plane it is closest to.
//! Scanner-reported direction cosines are truncated to a few decimal digits,
//! so magnitudes that agree within [`TIE_TOLERANCE`] are treated as equal and
//! resolved by a fixed rule table instead of an arbitrary argmax.

use serde::{Deserialize, Serialize};

use crate::spatial::Vector3;

/// Absolute difference at or below which two magnitudes are considered tied.
pub const TIE_TOLERANCE: f64 = 1e-6;

/// Absorbs the binary representation error of decimal inputs that differ by
/// exactly [`TIE_TOLERANCE`].
const TIE_SLACK: f64 = 1e-12;

/// Canonical slice orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Sagittal,
    Coronal,
    Transversal,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [
        Orientation::Sagittal,
        Orientation::Coronal,
        Orientation::Transversal,
    ];
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Orientation::Sagittal => "Sagittal",
            Orientation::Coronal => "Coronal",
            Orientation::Transversal => "Transversal",
        };
        f.write_str(name)
    }
}

/// The rule of the classification table that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassificationRule {
    /// All three magnitudes tied.
    AllTied,
    /// Sagittal and coronal magnitudes tied.
    SagittalCoronalTied,
    /// Sagittal and transversal magnitudes tied.
    SagittalTransversalTied,
    /// Coronal and transversal magnitudes tied.
    CoronalTransversalTied,
    /// No tie, largest magnitude wins.
    Dominant,
}

/// Absolute components of a normal in patient axis order.
#[derive(Debug, Clone, Copy)]
struct Magnitudes {
    sag: f64,
    cor: f64,
    tra: f64,
}

impl Magnitudes {
    fn of(normal: &Vector3) -> Self {
        Self {
            sag: normal[0].abs(),
            cor: normal[1].abs(),
            tra: normal[2].abs(),
        }
    }
}

fn tied(a: f64, b: f64) -> bool {
    (a - b).abs() <= TIE_TOLERANCE + TIE_SLACK
}

struct TieRule {
    rule: ClassificationRule,
    applies: fn(&Magnitudes) -> bool,
    decide: fn(&Magnitudes) -> Orientation,
}

/// Tie rules in priority order; the first one that applies decides.
const TIE_RULES: [TieRule; 4] = [
    TieRule {
        rule: ClassificationRule::AllTied,
        applies: |m| tied(m.sag, m.cor) && tied(m.sag, m.tra),
        decide: |_| Orientation::Transversal,
    },
    TieRule {
        rule: ClassificationRule::SagittalCoronalTied,
        applies: |m| tied(m.sag, m.cor) && !tied(m.cor, m.tra),
        decide: |m| {
            if tied(m.sag, m.tra) {
                Orientation::Transversal
            } else if m.sag < m.tra {
                Orientation::Coronal
            } else {
                Orientation::Transversal
            }
        },
    },
    TieRule {
        rule: ClassificationRule::SagittalTransversalTied,
        applies: |m| tied(m.sag, m.tra),
        decide: |m| {
            if m.sag < m.cor {
                Orientation::Coronal
            } else {
                Orientation::Transversal
            }
        },
    },
    TieRule {
        rule: ClassificationRule::CoronalTransversalTied,
        applies: |m| tied(m.cor, m.tra),
        decide: |m| {
            if m.cor < m.sag {
                Orientation::Sagittal
            } else {
                Orientation::Transversal
            }
        },
    },
];

fn dominant(m: &Magnitudes) -> Orientation {
    if m.sag > m.cor && m.sag > m.tra {
        Orientation::Sagittal
    } else if m.cor > m.tra {
        Orientation::Coronal
    } else {
        Orientation::Transversal
    }
}

/// Classify a slice normal and report which rule decided.
///
/// The normal does not need to be normalized; only component magnitudes
/// are compared. The classification is total: every finite input maps to
/// exactly one orientation.
pub fn classify_with_rule(normal: &Vector3) -> (Orientation, ClassificationRule) {
    let m = Magnitudes::of(normal);

    if let Some(tie) = TIE_RULES.iter().find(|tie| (tie.applies)(&m)) {
        let orientation = (tie.decide)(&m);
        tracing::trace!(
            "tie {:?} on ({}, {}, {}) resolved to {}",
            tie.rule,
            m.sag,
            m.cor,
            m.tra,
            orientation
        );
        return (orientation, tie.rule);
    }

    (dominant(&m), ClassificationRule::Dominant)
}

/// Classify a slice normal given in patient (or device) coordinates.
pub fn classify(normal: &Vector3) -> Orientation {
    classify_with_rule(normal).0
}

/// Classify direction cosines by the largest squared component.
///
/// No tie tolerance is applied; exact ties resolve to the first maximal
/// component.
pub fn dominant_axis(direction_cosines: &Vector3) -> Orientation {
    let squared = direction_cosines.0.component_mul(&direction_cosines.0);
    let mut best = 0;
    for i in 1..3 {
        if squared[i] > squared[best] {
            best = i;
        }
    }
    Orientation::ALL[best]
}
