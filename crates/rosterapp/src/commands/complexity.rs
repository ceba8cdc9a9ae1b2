use crate::algo::{SearchAlgorithm, SortAlgorithm};
use crate::commands::CmdResult;
use crate::error::{Result, RosterError};

/// Complexity table for one algorithm by name, or every table for `all`.
pub fn run(name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if name.trim().eq_ignore_ascii_case("all") {
        result
            .complexity
            .extend(SortAlgorithm::ALL.iter().map(|a| a.complexity()));
        // linear and exact share one table
        result.complexity.extend(
            SearchAlgorithm::ALL
                .iter()
                .filter(|a| **a != SearchAlgorithm::LinearExact)
                .map(|a| a.complexity()),
        );
        return Ok(result);
    }

    let complexity = match (
        name.parse::<SortAlgorithm>(),
        name.parse::<SearchAlgorithm>(),
    ) {
        (Ok(sort), _) => sort.complexity(),
        (_, Ok(search)) => search.complexity(),
        _ => {
            return Err(RosterError::InvalidArgument(format!(
                "unknown algorithm '{}'",
                name
            )))
        }
    };
    result.complexity.push(complexity);
    Ok(result)
}
