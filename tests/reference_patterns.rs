//! Test folding correctness against the reference patterns of each lattice.

use std::path::Path;

use csv::Reader;

use hp_fold::{
    archive::Folding,
    bounds::Bound,
    fold,
    lattice::{Hexagonal, Lattice, Square},
    pattern::Pattern,
    FoldOptions,
};

struct Reference {
    pattern: String,
    max_score: i32,
    solutions: usize,
}

fn load_max_scores(dataset: &str) -> Vec<Reference> {
    // Set up CSV reader for data/<dataset>/max-score.csv.
    let path = Path::new("data").join(dataset).join("max-score.csv");
    let mut reader =
        Reader::from_path(path).expect(&format!("{dataset}/max-score.csv does not exist."));

    let mut references = Vec::new();
    for result in reader.records() {
        let record = result.expect("max-score.csv is malformed.");
        references.push(Reference {
            pattern: record[0].to_string(),
            max_score: record[1].parse().expect("non-integer score"),
            solutions: record[2].parse().expect("non-integer solution count"),
        });
    }
    references
}

/// Every reported folding must be a valid self-avoiding chain whose recounted
/// score is the claimed maximum.
fn check_foldings<L: Lattice>(pattern: &Pattern, max_score: i32, foldings: &[Folding<L>]) {
    for folding in foldings {
        assert_eq!(folding.coords().len(), pattern.len());
        assert!(folding.is_self_avoiding(), "{pattern}: folding overlaps itself");
        assert!(folding.is_connected(), "{pattern}: folding is not a chain");
        assert_eq!(folding.score(), max_score);
        assert_eq!(folding.recompute_score(pattern), max_score);
    }
}

/// Fold every reference pattern of at most `max_len` monomers with `bounds`
/// and compare against the ground truth.
fn test_reference_dataset<L: Lattice>(dataset: &str, bounds: &[Bound], max_len: usize) {
    let options = FoldOptions::new().bounds(bounds);

    let mut incorrect: Vec<(String, i32, usize, i32, usize)> = Vec::new();
    for reference in load_max_scores(dataset) {
        if reference.pattern.len() > max_len {
            continue;
        }
        let pattern: Pattern = reference.pattern.parse().expect("invalid reference pattern");
        let report = fold::<L>(&pattern, &options).expect("fold failed");
        check_foldings(&pattern, report.max_score, &report.solutions);

        if report.max_score != reference.max_score || report.solutions.len() != reference.solutions
        {
            incorrect.push((
                reference.pattern,
                report.max_score,
                report.solutions.len(),
                reference.max_score,
                reference.solutions,
            ));
        }
    }

    // If there are incorrect results, report and fail the test.
    let mut error_details = String::new();
    for (pattern, score, count, true_score, true_count) in &incorrect {
        error_details.push_str(&format!(
            "{pattern}: score {score} with {count} solutions != {true_score} with {true_count} (ground truth)\n"
        ));
    }
    assert!(incorrect.is_empty(), "{}", error_details);
}

#[test]
fn square_naive() {
    test_reference_dataset::<Square>("square", &[], 12);
}

#[test]
fn square_contactbound() {
    test_reference_dataset::<Square>("square", &[Bound::Contact], 12);
}

#[test]
fn square_allbounds() {
    test_reference_dataset::<Square>("square", &Bound::all(), usize::MAX);
}

#[test]
fn hexagonal_naive() {
    test_reference_dataset::<Hexagonal>("hexagonal", &[], 10);
}

#[test]
fn hexagonal_contactbound() {
    test_reference_dataset::<Hexagonal>("hexagonal", &[Bound::Contact], usize::MAX);
}

#[test]
fn hexagonal_allbounds() {
    test_reference_dataset::<Hexagonal>("hexagonal", &Bound::all(), usize::MAX);
}

#[test]
fn mirror_images_are_enumerated_without_symmetry_breaking() {
    let pattern: Pattern = "HPHPPHHPH".parse().unwrap();
    let options = FoldOptions::new().break_mirror_symmetry(false);
    let report = fold::<Square>(&pattern, &options).unwrap();
    assert_eq!(report.max_score, 3);
    assert_eq!(report.solutions.len(), 42);
    check_foldings(&pattern, 3, &report.solutions);
}

#[test]
#[ignore = "expensive test"]
fn square_benchmark_chain() {
    let pattern: Pattern = "PPHPHHPHPPHPHPHPPHPHHPHPPHPHPH".parse().unwrap();
    let options = FoldOptions::new().initial_max_score(15);
    let report = fold::<Square>(&pattern, &options).unwrap();
    assert_eq!(report.max_score, 15);
    assert_eq!(report.solutions.len(), 6);
    check_foldings(&pattern, 15, &report.solutions);
}
