use std::collections::BTreeSet;

use airgraph_core::graph::NodeId;

/// Parses a comma separated list of airport ids, e.g. `3830,3797, 4049`.
pub fn parse_ids(input: &str) -> Result<BTreeSet<NodeId>, String> {
    let ids = input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<NodeId>()
                .map_err(|_| format!("Invalid airport id: {part}"))
        })
        .collect::<Result<BTreeSet<_>, _>>()?;

    if ids.is_empty() {
        return Err(String::from("Expected at least one airport id"));
    }

    Ok(ids)
}
