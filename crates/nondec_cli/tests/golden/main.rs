use nondec_cli::{Args, Format};
use nondec_macros::integration_test;
use seq_macro::seq;
use std::path::PathBuf;

seq!(N in 1..=6 {
    integration_test!(N);
});
integration_test!(4, json);
integration_test!(5, json);

fn golden_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap());
    manifest_dir.join("tests").join("golden")
}

fn integration_test(test_index: u32, format: Format, extension: &str) {
    let input_path = golden_dir().join(format!("input_{test_index}.txt"));
    let golden_path = golden_dir().join(format!("golden_{test_index}.{extension}"));
    let input_contents = std::fs::read_to_string(input_path).unwrap();
    let golden_contents = std::fs::read_to_string(golden_path).unwrap();
    let args = Args {
        format,
        ..Default::default()
    };
    let output_contents = nondec_cli::run(&input_contents, &args).unwrap();
    assert_eq!(
        output_contents, golden_contents,
        "Golden test #{} ({:?}) failed",
        test_index, format
    );
}

#[test]
fn rejects_out_of_range_query() {
    let err = nondec_cli::run("3 2\n1 2 1\n2\n1 3\n2 4\n", &Args::default()).unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "query #1 has invalid range [2, 4] for a sequence of length 3"
    );
}

#[test]
fn rejects_oversized_alphabet() {
    let args = Args {
        max_k: 4,
        ..Default::default()
    };
    let input_contents = std::fs::read_to_string(golden_dir().join("input_4.txt")).unwrap();
    let err = nondec_cli::run(&input_contents, &args).unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "alphabet bound is 5, above the limit of 4"
    );
}

#[test]
fn zero_alphabet_rejects_values() {
    let err = nondec_cli::run("1 0\n1\n1\n1 1\n", &Args::default()).unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "value 1 at position 1 is outside [1, 0]"
    );
    assert_eq!(nondec_cli::run("0 0\n0\n", &Args::default()).unwrap(), "");
}
