use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Swaps the element at `index` with its neighbour in `direction`.
///
/// Clamped at both ends (no wraparound). Returns whether anything moved.
pub fn move_adjacent<T>(items: &mut [T], index: usize, direction: Direction) -> bool {
    if index >= items.len() {
        return false;
    }

    match direction {
        Direction::Up if index > 0 => {
            items.swap(index - 1, index);
            true
        }
        Direction::Down if index + 1 < items.len() => {
            items.swap(index, index + 1);
            true
        }
        _ => false,
    }
}

/// Moves the first element matching `is_target` one step; no-op when none matches.
pub fn move_where<T, F>(items: &mut [T], is_target: F, direction: Direction) -> bool
where
    F: Fn(&T) -> bool,
{
    match items.iter().position(is_target) {
        Some(index) => move_adjacent(items, index, direction),
        None => false,
    }
}
