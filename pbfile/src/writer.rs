use std::io::Write;
use std::path::Path;

use pbknapsack::{MultiProblem, SingleProblem};

use crate::error::PbFileError;

/// Writes a single-dimensional instance to a `.pb` file at `path`.
pub fn write_single(problem: &SingleProblem<String>, path: impl AsRef<Path>) -> Result<(), PbFileError> {
    let writer = csv::WriterBuilder::new().delimiter(b';').has_headers(false).from_path(path)?;
    write_rows(
        writer,
        problem.num_projects(),
        problem.num_voters(),
        &problem.budget().to_string(),
        problem.projects(),
        &problem
            .projects()
            .iter()
            .enumerate()
            .map(|(i, _)| problem.costs()[i].to_string())
            .collect::<Vec<_>>(),
        problem.voters(),
        problem.utilities(),
        problem.projects(),
    )
}

/// Writes a multi-dimensional instance to a `.pb` file at `path`.
pub fn write_multi(problem: &MultiProblem<String>, path: impl AsRef<Path>) -> Result<(), PbFileError> {
    let writer = csv::WriterBuilder::new().delimiter(b';').has_headers(false).from_path(path)?;
    let budget = problem.budget().iter().map(i64::to_string).collect::<Vec<_>>().join(",");
    let costs: Vec<String> = (0..problem.num_projects())
        .map(|i| {
            problem
                .costs()
                .iter()
                .map(|dimension| dimension[i].to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect();
    write_rows(
        writer,
        problem.num_projects(),
        problem.num_voters(),
        &budget,
        problem.projects(),
        &costs,
        problem.voters(),
        problem.utilities(),
        problem.projects(),
    )
}

/// Shared section-writing logic: `costs` is already rendered per project
/// (a plain number for a single budget, a comma-joined list per dimension
/// for a multi-budget instance), matching `PBWriter.write`'s "assume
/// scoring in all cases" convention — every vote is re-emitted as a
/// `vote`/`points` pair regardless of its original vote type, keeping the
/// writer independent of how the utilities were produced. Only positive
/// utilities are emitted, so a round trip through [`crate::PbParser`]
/// reconstructs the same utility matrix without ever writing an explicit 0.
#[allow(clippy::too_many_arguments)]
fn write_rows<W: Write>(
    mut writer: csv::Writer<W>,
    num_projects: usize,
    num_voters: usize,
    budget: &str,
    projects: &[String],
    costs: &[String],
    voters: &[String],
    utilities: &[Vec<i64>],
    project_ids: &[String],
) -> Result<(), PbFileError> {
    writer.write_record(["META"])?;
    writer.write_record(["key", "value"])?;
    writer.write_record(["num_projects", &num_projects.to_string()])?;
    writer.write_record(["num_votes", &num_voters.to_string()])?;
    writer.write_record(["budget", budget])?;
    writer.write_record(["vote_type", "scoring"])?;

    writer.write_record(["PROJECTS"])?;
    writer.write_record(["project_id", "cost"])?;
    for (id, cost) in projects.iter().zip(costs) {
        writer.write_record([id.as_str(), cost.as_str()])?;
    }

    writer.write_record(["VOTES"])?;
    writer.write_record(["voter_id", "vote", "points"])?;
    for (id, row) in voters.iter().zip(utilities) {
        let mut votes = Vec::new();
        let mut points = Vec::new();
        for (project_id, &utility) in project_ids.iter().zip(row) {
            if utility > 0 {
                votes.push(project_id.clone());
                points.push(utility.to_string());
            }
        }
        writer.write_record([id.as_str(), votes.join(",").as_str(), points.join(",").as_str()])?;
    }

    writer.flush()?;
    Ok(())
}
