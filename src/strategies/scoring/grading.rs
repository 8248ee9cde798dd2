use super::super::domain::{Grade, GradeThresholds};

/// Evaluation order for the threshold ladder. First match wins, and the
/// order itself is the tie-break for overlapping thresholds.
const LADDER: [Grade; 4] = [Grade::APlus, Grade::A, Grade::B, Grade::C];

/// Map a live score onto the letter ladder.
pub fn grade_for(score: i32, thresholds: &GradeThresholds) -> Grade {
    for grade in LADDER {
        match thresholds.min_for(grade) {
            Some(min) if score >= min => return grade,
            _ => {}
        }
    }
    Grade::NoTrade
}
