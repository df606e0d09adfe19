//! Reader and writer for the semicolon-delimited PB text format (§6).
//!
//! An external collaborator to the `pbknapsack` solver engine: it produces
//! and consumes [`pbknapsack::SingleProblem`]/[`pbknapsack::MultiProblem`]
//! instances but has no say in how they get solved.

mod error;
mod parser;
mod writer;

pub use error::PbFileError;
pub use parser::{PbParser, Predefined};
pub use writer::{write_multi, write_single};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_an_approval_instance_literally() {
        let dir = tempfile_dir();
        let path = dir.join("approval.pb");
        std::fs::write(
            &path,
            "META;\n\
             key;value\n\
             budget;100\n\
             vote_type;approval\n\
             PROJECTS;\n\
             project_id;cost\n\
             a;20\n\
             b;50\n\
             VOTES;\n\
             voter_id;vote\n\
             v1;a,b\n\
             v2;a\n",
        )
        .unwrap();

        let problem = PbParser::from_path(&path).unwrap().single_problem().unwrap();
        assert_eq!(problem.values(), &[2, 1]);

        std::fs::remove_dir_all(dir).unwrap();
    }

    fn tempfile_dir() -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("pbfile-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }
}
