use tracing::warn;

/// Every section the public page knows how to render, in default order.
pub const SECTION_UNIVERSE: [&str; 6] = ["hero", "about", "projects", "timeline", "gallery", "contact"];

/// Index used for `timeline` when the saved order has no `projects` entry.
const TIMELINE_FALLBACK_INDEX: usize = 2;

pub fn default_section_order() -> Vec<String> {
    SECTION_UNIVERSE.iter().map(|s| s.to_string()).collect()
}

/// Reconciles a saved section order with the sections this build knows about.
///
/// Sections the owner already arranged keep their relative order. Newly
/// introduced sections are merged in: `timeline` goes right after `projects`
/// (or at a fixed fallback slot), everything else is appended in universe
/// order. Duplicates and identifiers outside the universe are dropped, so the
/// result is always a permutation of `universe` and a fixed point of this
/// function.
pub fn migrate_section_order(persisted: &[String], universe: &[&str]) -> Vec<String> {
    let mut order: Vec<String> = Vec::with_capacity(universe.len());

    for id in persisted {
        if !universe.contains(&id.as_str()) {
            warn!(section = %id, "Dropping unknown section from saved order");
            continue;
        }
        if order.contains(id) {
            warn!(section = %id, "Dropping duplicate section from saved order");
            continue;
        }
        order.push(id.clone());
    }

    let missing: Vec<&str> = universe
        .iter()
        .copied()
        .filter(|id| !order.iter().any(|kept| kept.as_str() == *id))
        .collect();

    if missing.is_empty() {
        return order;
    }

    if missing.contains(&"timeline") {
        let at = match order.iter().position(|id| id == "projects") {
            Some(projects_index) => projects_index + 1,
            None => TIMELINE_FALLBACK_INDEX.min(order.len()),
        };
        order.insert(at, "timeline".to_string());
    }

    order.extend(
        missing
            .into_iter()
            .filter(|id| *id != "timeline")
            .map(str::to_string),
    );

    order
}
