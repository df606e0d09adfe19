use std::collections::HashMap;
use std::fs;
use std::path::Path;

use pbknapsack::{vote_to_utility, MultiProblem, SingleProblem, VoteType};

use crate::error::PbFileError;

/// The allocation (and its value) a `.pb` file records as already decided,
/// via each project's `selected` column. Populated from the file's own
/// votes, not recomputed by a solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predefined {
    pub allocation: Vec<String>,
    pub value: i64,
}

/// Reads a `.pb` file's three semicolon-delimited sections into memory
/// without yet building a problem instance; [`Self::single_problem`] and
/// [`Self::multi_problem`] do that conversion on demand.
///
/// Grounded in `community_knapsack/pbfileservice.py`'s `PBParser`: a bare
/// section-name row (`META`/`PROJECTS`/`VOTES`) switches sections and is
/// always followed by its own header row naming the remaining columns.
#[derive(Debug, Clone, Default)]
pub struct PbParser {
    meta: HashMap<String, String>,
    projects: Vec<(String, HashMap<String, String>)>,
    voters: Vec<(String, HashMap<String, String>)>,
}

impl PbParser {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PbFileError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(input: &str) -> Result<Self, PbFileError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .from_reader(input.as_bytes());

        let mut meta = HashMap::new();
        let mut projects = Vec::new();
        let mut voters = Vec::new();

        let mut section = String::new();
        let mut header: Vec<String> = Vec::new();
        let mut records = reader.records();

        while let Some(record) = records.next() {
            let record = record?;
            let Some(first) = record.get(0) else {
                continue;
            };
            let lowered = first.trim().to_lowercase();
            if matches!(lowered.as_str(), "meta" | "projects" | "votes") {
                section = lowered;
                let header_row = records
                    .next()
                    .ok_or_else(|| PbFileError::MissingHeader { section: section.clone() })??;
                header = header_row.iter().map(|field| field.trim().to_string()).collect();
                continue;
            }

            match section.as_str() {
                "meta" => {
                    let value = record.get(1).unwrap_or("").trim().to_string();
                    meta.insert(first.to_string(), value);
                }
                "projects" => projects.push((first.to_string(), row_fields(&record, &header))),
                "votes" => voters.push((first.to_string(), row_fields(&record, &header))),
                _ => return Err(PbFileError::RowOutsideSection),
            }
        }

        Ok(Self { meta, projects, voters })
    }

    fn meta_value(&self, key: &str) -> Result<&str, PbFileError> {
        self.meta
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| PbFileError::MissingMetaKey(key.to_string()))
    }

    fn vote_type(&self) -> Result<VoteType, PbFileError> {
        Ok(self.meta_value("vote_type")?.parse()?)
    }

    fn budget(&self) -> Result<Vec<i64>, PbFileError> {
        self.meta_value("budget")?
            .split(',')
            .map(|b| b.trim().parse::<i64>().map_err(PbFileError::from))
            .collect()
    }

    fn project_ids(&self) -> Vec<String> {
        self.projects.iter().map(|(id, _)| id.clone()).collect()
    }

    /// Each project row lists its own cost across every dimension
    /// (`cost,...`); this transposes that into the per-dimension cost rows
    /// [`MultiProblem::new`] expects.
    fn project_costs_by_dimension(&self, num_dimensions: usize) -> Result<Vec<Vec<i64>>, PbFileError> {
        let mut by_dimension = vec![Vec::with_capacity(self.projects.len()); num_dimensions];
        for (id, fields) in &self.projects {
            let raw = fields.get("cost").ok_or_else(|| PbFileError::MissingField {
                entity: "project",
                id: id.clone(),
                field: "cost",
            })?;
            let costs: Vec<i64> = raw
                .split(',')
                .map(|c| c.trim().parse::<i64>().map_err(PbFileError::from))
                .collect::<Result<_, _>>()?;
            if costs.len() != num_dimensions {
                return Err(PbFileError::CostDimensionMismatch {
                    project_id: id.clone(),
                    found: costs.len(),
                    expected: num_dimensions,
                });
            }
            for (dimension, cost) in costs.into_iter().enumerate() {
                by_dimension[dimension].push(cost);
            }
        }
        Ok(by_dimension)
    }

    fn utilities(
        &self,
        vote_type: VoteType,
        lookup: &HashMap<&str, usize>,
        num_projects: usize,
    ) -> Result<Vec<Vec<i64>>, PbFileError> {
        self.voters
            .iter()
            .map(|(_, fields)| {
                let raw_votes = fields.get("vote").map(String::as_str).unwrap_or("");
                let votes = raw_votes
                    .split(',')
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
                    .map(|token| {
                        lookup
                            .get(token)
                            .copied()
                            .ok_or_else(|| PbFileError::UnknownProject(token.to_string()))
                    })
                    .collect::<Result<Vec<usize>, PbFileError>>()?;
                let points: Option<Vec<i64>> = match fields.get("points") {
                    Some(raw) if !raw.trim().is_empty() => Some(
                        raw.split(',')
                            .map(|p| p.trim().parse::<i64>().map_err(PbFileError::from))
                            .collect::<Result<_, _>>()?,
                    ),
                    _ => None,
                };
                Ok(vote_to_utility(num_projects, vote_type, &votes, points.as_deref())?)
            })
            .collect()
    }

    fn project_lookup(&self, project_ids: &[String]) -> HashMap<&str, usize> {
        project_ids.iter().map(String::as_str).zip(0..).collect()
    }

    /// Parses this file as a multi-dimensional PB instance.
    pub fn multi_problem(&self) -> Result<MultiProblem<String>, PbFileError> {
        let num_projects = self.projects.len();
        let num_voters = self.voters.len();
        let budget = self.budget()?;
        let vote_type = self.vote_type()?;

        let project_ids = self.project_ids();
        let lookup = self.project_lookup(&project_ids);
        let costs = self.project_costs_by_dimension(budget.len())?;
        let utilities = self.utilities(vote_type, &lookup, num_projects)?;
        let voter_ids: Vec<String> = self.voters.iter().map(|(id, _)| id.clone()).collect();

        Ok(MultiProblem::new(
            num_projects,
            num_voters,
            budget,
            costs,
            utilities,
            Some(project_ids),
            Some(voter_ids),
        )?)
    }

    /// Parses this file as a single-dimensional PB instance, reducing a
    /// parsed multi-dimensional instance to its first budget/cost dimension.
    pub fn single_problem(&self) -> Result<SingleProblem<String>, PbFileError> {
        let multi = self.multi_problem()?;
        Ok(SingleProblem::new(
            multi.num_projects(),
            multi.num_voters(),
            multi.budget()[0],
            multi.costs()[0].clone(),
            multi.utilities().to_vec(),
            Some(multi.projects().to_vec()),
            Some(multi.voters().to_vec()),
        )?)
    }

    /// Obtains the allocation predefined in the file, if any, via each
    /// project's `selected` column.
    pub fn predefined(&self) -> Result<Predefined, PbFileError> {
        let num_projects = self.projects.len();
        let vote_type = self.vote_type()?;
        let project_ids = self.project_ids();
        let lookup = self.project_lookup(&project_ids);
        let utilities = self.utilities(vote_type, &lookup, num_projects)?;
        let values = pbknapsack::aggregate(num_projects, &utilities)?;

        let mut allocation = Vec::new();
        let mut value = 0;
        for (id, fields) in &self.projects {
            let selected = match fields.get("selected").map(|s| s.trim()) {
                None | Some("") => false,
                Some("1") => true,
                Some("0") => false,
                Some(other) => {
                    tracing::warn!(project_id = %id, value = other, "invalid `selected` value, treating as unselected");
                    false
                }
            };
            if selected {
                value += values[lookup[id.as_str()]];
                allocation.push(id.clone());
            }
        }
        Ok(Predefined { allocation, value })
    }
}

fn row_fields(record: &csv::StringRecord, header: &[String]) -> HashMap<String, String> {
    header
        .iter()
        .enumerate()
        .skip(1)
        .map(|(index, key)| (key.clone(), record.get(index).unwrap_or("").trim().to_string()))
        .collect()
}
