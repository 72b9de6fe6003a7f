//! Bout sheet rendering.

use kumite_pools::{Bout, Competitor, Field, Pool, SeedAssignment, SubPool};
use serde_json::{Value, json};

const BYE: &str = "BYE";

fn field_text(competitor: &Competitor, field: Field) -> String {
    match field {
        Field::Name => competitor.name.clone(),
        Field::Gender => competitor.gender.to_string(),
        Field::Age => competitor.age.map(|a| a.to_string()).unwrap_or_default(),
        Field::Weight => competitor.weight.map(|w| w.to_string()).unwrap_or_default(),
        Field::Belt => competitor.belt.clone(),
        Field::Affiliation => competitor.affiliation.clone(),
    }
}

fn display_name(competitor: Option<&Competitor>) -> &str {
    competitor.map(|c| c.name.as_str()).unwrap_or(BYE)
}

fn bout_line(bout: &Bout<'_>) -> String {
    match (bout.upper, bout.lower) {
        (None, None) => format!("  Bout {}: -", bout.number),
        _ if bout.is_bye() => format!(
            "  Bout {}: {} advances ({BYE})",
            bout.number,
            display_name(bout.walkover())
        ),
        (upper, lower) => format!(
            "  Bout {}: {} vs {}",
            bout.number,
            display_name(upper),
            display_name(lower)
        ),
    }
}

/// Render one sub-pool as a position table followed by its opening round
pub fn render_sub_pool(sub_pool: &SubPool, fields: &[Field]) -> String {
    let seeds = sub_pool.seed_assignment();

    let mut header = vec!["Position".to_string()];
    header.extend(fields.iter().map(|f| f.label().to_string()));

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(seeds.positions());
    for (position, slot) in seeds.iter() {
        let mut row = vec![position.to_string()];
        match slot {
            Some(competitor) => row.extend(fields.iter().map(|f| field_text(competitor, *f))),
            None => {
                // A bye takes the first field column, or its own column if there is none
                row.push(BYE.to_string());
                row.extend(std::iter::repeat_n(String::new(), fields.len().saturating_sub(1)));
            }
        }
        rows.push(row);
    }

    let columns = rows.iter().map(Vec::len).fold(header.len(), usize::max);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            std::iter::once(&header)
                .chain(rows.iter())
                .filter_map(|r| r.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = vec![format!(
        "Pool {} ({} players, bracket of {})",
        sub_pool.label,
        sub_pool.len(),
        sub_pool.target_size
    )];
    for row in std::iter::once(&header).chain(rows.iter()) {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(col, width)| {
                let cell = row.get(col).map(String::as_str).unwrap_or("");
                format!("{cell:<width$}")
            })
            .collect();
        lines.push(format!("| {} |", cells.join(" | ")));
    }

    lines.push("Opening round:".to_string());
    lines.extend(seeds.first_round().iter().map(bout_line));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render every pool as text
pub fn render_text(pools: &[Pool], fields: &[Field]) -> String {
    pools
        .iter()
        .flat_map(|pool| pool.sub_pools.iter())
        .map(|sub_pool| render_sub_pool(sub_pool, fields))
        .collect::<Vec<_>>()
        .join("\n")
}

fn seeds_json(seeds: &SeedAssignment<'_>) -> Value {
    Value::Array(
        seeds
            .iter()
            .map(|(position, competitor)| json!({ "position": position, "competitor": competitor }))
            .collect(),
    )
}

/// Render every pool, with seed positions, as a JSON document
pub fn render_json(pools: &[Pool]) -> Value {
    let pools: Vec<Value> = pools
        .iter()
        .map(|pool| {
            let sub_pools: Vec<Value> = pool
                .sub_pools
                .iter()
                .map(|sub| {
                    json!({
                        "label": sub.label,
                        "target_size": sub.target_size,
                        "players": sub.len(),
                        "positions": seeds_json(&sub.seed_assignment()),
                        "byes": sub.seed_assignment().byes(),
                    })
                })
                .collect();
            json!({ "label": pool.label, "sub_pools": sub_pools })
        })
        .collect();

    json!({ "pools": pools })
}
