use pbfile::{write_single, PbParser};
use pbknapsack::SingleProblem;

fn sample() -> SingleProblem<String> {
    SingleProblem::new(
        5,
        5,
        100,
        vec![20, 50, 75, 40, 45],
        vec![
            vec![1, 1, 1, 0, 1],
            vec![1, 0, 1, 0, 0],
            vec![0, 0, 0, 1, 1],
            vec![1, 0, 0, 0, 0],
            vec![0, 0, 1, 1, 0],
        ],
        None,
        None,
    )
    .unwrap()
}

fn tempfile_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("pbfile-roundtrip-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn write_then_parse_round_trips_a_single_instance() {
    let original = sample();
    let dir = tempfile_dir();
    let path = dir.join("instance.pb");
    write_single(&original, &path).unwrap();

    let parsed = PbParser::from_path(&path).unwrap().single_problem().unwrap();
    assert_eq!(parsed.num_projects(), original.num_projects());
    assert_eq!(parsed.num_voters(), original.num_voters());
    assert_eq!(parsed.budget(), original.budget());
    assert_eq!(parsed.costs(), original.costs());
    assert_eq!(parsed.projects(), original.projects());
    assert_eq!(parsed.voters(), original.voters());
    assert_eq!(parsed.utilities(), original.utilities());

    std::fs::remove_dir_all(dir).unwrap();
}
