use std::process::{Command, Output};

use sha2::{Digest, Sha256};

fn compute_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

fn check_output_hash(output: &Output, expected_hash: &str) -> bool {
    let computed_hash = compute_hash(&output.stdout);
    if computed_hash == expected_hash {
        println!("Hash matches the expected value.");
        true
    } else {
        println!(
            "Hash mismatch! Expected: {}, but got: {}",
            expected_hash, computed_hash
        );
        false
    }
}

fn run_drawer(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fractal-drawer"))
        .args(args)
        .output()
        .expect("failed to execute process")
}

/// Writes `content` to a scratch input file under `out/` and returns its path.
fn write_input(name: &str, content: &str) -> String {
    std::fs::create_dir_all("out").expect("Unable to create `out` directory");
    let path = format!("out/{}.csv", name);
    std::fs::write(&path, content).expect("Unable to write input file");
    path
}

#[cfg(test)]
mod tests {
    use crate::{check_output_hash, run_drawer, write_input};

    #[test]
    fn test_base_patterns_render() {
        let output = run_drawer(&["demos/base_patterns.csv"]);
        assert!(output.status.success());
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            "# #\n   \n# #\n\n##\n# \n\n###\n# #\n###\n\n"
        );
    }

    #[test]
    fn test_carpet_ladder_regression() {
        let output = run_drawer(&["demos/carpet_ladder.csv"]);
        assert!(output.status.success());
        assert!(check_output_hash(
            &output,
            "17a9ad79141050a1b7640e270efbd21f65fd18861daa7bf69cbd8b121ce8fd71"
        ));
    }

    #[test]
    fn test_sieve_and_dust_regression() {
        let expected_hash = "00622f2ec1bcf06d69c78fa70a2dddea42b74405629930072640b6a613687c9c";
        let output = run_drawer(&["demos/sieve_and_dust.csv"]);
        assert!(output.status.success());
        assert!(check_output_hash(&output, expected_hash));

        let output = run_drawer(&["--parallel", "demos/sieve_and_dust.csv"]);
        assert!(output.status.success());
        assert!(check_output_hash(&output, expected_hash));
    }

    #[test]
    fn test_largest_regression() {
        let output = run_drawer(&["--parallel", "demos/largest.csv"]);
        assert!(output.status.success());
        assert_eq!(output.stdout.len(), 1068503);
        assert!(check_output_hash(
            &output,
            "b68e31d2f520eec83119d70c6540302a9be784a135157a4a2e86f8d35731c7e5"
        ));
    }

    #[test]
    fn test_empty_input_succeeds() {
        let output = run_drawer(&["demos/empty.csv"]);
        assert!(output.status.success());
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_usage_errors() {
        let output = run_drawer(&[]);
        assert!(!output.status.success());
        assert!(output.stdout.is_empty());

        let output = run_drawer(&["demos/base_patterns.csv", "demos/empty.csv"]);
        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_unreadable_file() {
        let output = run_drawer(&["out/no_such_input_file.csv"]);
        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid input"));
    }

    #[test]
    fn test_malformed_records_produce_no_output() {
        for (name, content) in [
            ("cli_long_record", "1,2\n12,3\n"),
            ("cli_bad_separator", "1,2\n1;3\n"),
            ("cli_type_zero", "0,3\n"),
            ("cli_type_four", "1,1\n4,3\n"),
            ("cli_height_zero", "2,0\n"),
            ("cli_height_seven", "3,7\n"),
            ("cli_blank_line", "1,1\n\n2,2\n"),
        ] {
            let path = write_input(name, content);
            let output = run_drawer(&[path.as_str()]);
            assert!(!output.status.success(), "{} should fail", name);
            assert!(output.stdout.is_empty(), "{} should print nothing", name);
            assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid input"));
        }
    }

    #[test]
    fn test_diagnostics_go_to_stderr() {
        let output = run_drawer(&["--diagnostics", "demos/base_patterns.csv"]);
        assert!(output.status.success());
        assert_eq!(output.stdout.len(), 33);
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("Stopwatch: fractal-drawer: base_patterns"));
        assert!(stderr.contains("\"kind\":\"Dust\""));
        assert!(stderr.contains("\"filled_count\":8"));
    }
}
