//! Steepest-descent water flow from a single source.

use crate::error::MapError;
use crate::grid::ScalarField;

use super::RiverGrid;

/// Descent state machine: a flowing head either keeps flowing, pools into a
/// lake, or terminates (border, sea, or merge into an existing channel).
enum Flow {
    Flowing { row: usize, col: usize },
    LakeFormed,
    Terminated,
}

/// Trace one river downhill from `source`, marking visited cells in
/// `rivers`.
///
/// Every move goes to a strictly lower cell, so the path can never revisit
/// a cell and must end within one step per grid cell. The explicit bound is
/// a safety net; tripping it surfaces as an error instead of looping
/// forever.
pub fn trace_descent(
    height: &ScalarField,
    rivers: &mut RiverGrid,
    source: (usize, usize),
    height_coast: f32,
) -> Result<(), MapError> {
    let limit = height.width * height.height;
    let mut state = Flow::Flowing { row: source.0, col: source.1 };
    for _ in 0..limit {
        match state {
            Flow::Flowing { row, col } => {
                state = step(height, rivers, row, col, height_coast);
            }
            Flow::LakeFormed | Flow::Terminated => return Ok(()),
        }
    }
    match state {
        Flow::Flowing { .. } => Err(MapError::DescentOverrun { limit }),
        Flow::LakeFormed | Flow::Terminated => Ok(()),
    }
}

/// Advance the flowing head by one cell.
fn step(
    height: &ScalarField,
    rivers: &mut RiverGrid,
    row: usize,
    col: usize,
    height_coast: f32,
) -> Flow {
    // Stop without marking on the 1-cell border, in the sea, or when
    // merging into an already-marked channel.
    if col < 1 || col >= height.width - 1 || row < 1 || row >= height.height - 1 {
        return Flow::Terminated;
    }
    let here = height.get(row, col);
    if here < height_coast || rivers.is_water(row, col) {
        return Flow::Terminated;
    }
    rivers.set(row, col);

    // Fixed priority order: left, right, up, down. The first neighbor
    // achieving the minimum wins ties.
    let neighbors = [
        (row, col - 1),
        (row, col + 1),
        (row - 1, col),
        (row + 1, col),
    ];
    let mut lowest = here;
    let mut next = None;
    for &(nr, nc) in &neighbors {
        let nh = height.get(nr, nc);
        if nh < lowest {
            lowest = nh;
            next = Some((nr, nc));
        }
    }

    match next {
        Some((nr, nc)) => Flow::Flowing { row: nr, col: nc },
        // No strictly lower neighbor: the water pools.
        None => {
            flood_lake(rivers, row, col);
            Flow::LakeFormed
        }
    }
}

/// Mark the 3x3 block centred on `(row, col)` as lake, clipped to the grid.
fn flood_lake(rivers: &mut RiverGrid, row: usize, col: usize) {
    let row_end = (row + 1).min(rivers.height - 1);
    let col_end = (col + 1).min(rivers.width - 1);
    for r in row.saturating_sub(1)..=row_end {
        for c in col.saturating_sub(1)..=col_end {
            rivers.set(r, c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(size: usize) -> ScalarField {
        // Height falls towards the left edge; everything above the coast.
        let mut field = ScalarField::filled(size, size, 0.0);
        for row in 0..size {
            for col in 0..size {
                field.set(row, col, 0.1 + col as f32 * 0.05);
            }
        }
        field
    }

    #[test]
    fn ramp_flows_to_the_border() {
        let field = ramp(16);
        let mut rivers = RiverGrid::empty(16, 16);
        trace_descent(&field, &mut rivers, (8, 12), 0.0).unwrap();
        // Marks run from the source to col 1; col 0 is the border and stays dry.
        for col in 1..=12 {
            assert!(rivers.is_water(8, col), "col {col} should be river");
        }
        assert!(!rivers.is_water(8, 0), "border cell must stay unmarked");
        assert_eq!(rivers.water_cells(), 12);
    }

    #[test]
    fn descent_stops_at_the_sea() {
        let mut field = ramp(16);
        // Columns 0-4 are below the coast.
        for row in 0..16 {
            for col in 0..5 {
                field.set(row, col, -0.2);
            }
        }
        let mut rivers = RiverGrid::empty(16, 16);
        trace_descent(&field, &mut rivers, (8, 10), 0.0).unwrap();
        for col in 0..5 {
            assert!(!rivers.is_water(8, col), "sea cell at col {col} was marked");
        }
        assert!(rivers.is_water(8, 5), "last land cell should be river");
    }

    #[test]
    fn plateau_forms_a_3x3_lake() {
        let field = ScalarField::filled(16, 16, 0.5);
        let mut rivers = RiverGrid::empty(16, 16);
        trace_descent(&field, &mut rivers, (8, 8), 0.0).unwrap();
        assert_eq!(rivers.water_cells(), 9, "lake must fill the full 3x3 block");
        for r in 7..=9 {
            for c in 7..=9 {
                assert!(rivers.is_water(r, c), "lake cell ({r}, {c}) missing");
            }
        }
    }

    #[test]
    fn merging_into_an_existing_channel_terminates() {
        let field = ramp(16);
        let mut rivers = RiverGrid::empty(16, 16);
        rivers.set(8, 6);
        trace_descent(&field, &mut rivers, (8, 10), 0.0).unwrap();
        assert!(rivers.is_water(8, 7), "cell before the junction should be marked");
        assert!(
            !rivers.is_water(8, 5),
            "flow must stop at the junction instead of continuing past it"
        );
    }

    #[test]
    fn equal_height_neighbor_still_pools() {
        // A weak local minimum (one neighbor ties, none lower) pools rather
        // than wandering across the tie.
        let mut field = ScalarField::filled(16, 16, 0.5);
        field.set(8, 8, 0.3);
        field.set(8, 7, 0.3);
        let mut rivers = RiverGrid::empty(16, 16);
        trace_descent(&field, &mut rivers, (8, 8), 0.0).unwrap();
        assert_eq!(rivers.water_cells(), 9, "tie must form a lake, not a walk");
        assert!(rivers.is_water(8, 8));
    }

    #[test]
    fn lake_fill_clips_at_grid_bounds() {
        let mut rivers = RiverGrid::empty(8, 8);
        flood_lake(&mut rivers, 0, 0);
        assert_eq!(rivers.water_cells(), 4, "corner lake must clip to 2x2");
        flood_lake(&mut rivers, 7, 7);
        assert_eq!(rivers.water_cells(), 8, "opposite corner adds another 2x2");
    }

    #[test]
    fn source_on_the_border_is_a_no_op() {
        let field = ramp(16);
        let mut rivers = RiverGrid::empty(16, 16);
        trace_descent(&field, &mut rivers, (0, 5), 0.0).unwrap();
        trace_descent(&field, &mut rivers, (5, 15), 0.0).unwrap();
        assert_eq!(rivers.water_cells(), 0);
    }
}
