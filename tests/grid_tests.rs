//! Grid2D tests - construction, traversal order, regions and nested rows

use tui_blocks::core::{Grid2D, ShapeError};

// ============== Construction ==============

#[test]
fn test_new_has_height_rows_of_width() {
    for (w, h) in [(0, 0), (0, 3), (3, 0), (1, 1), (4, 7), (10, 10)] {
        let grid: Grid2D<u8> = Grid2D::new(w, h);
        assert_eq!(grid.width(), w);
        assert_eq!(grid.height(), h);
        assert_eq!(grid.rows().count(), h, "{}x{}", w, h);
        assert!(grid.rows().all(|row| row.len() == w), "{}x{}", w, h);
        assert_eq!(grid.len(), w * h);
    }
}

#[test]
fn test_from_nested_copies_cells() {
    let grid = Grid2D::from_nested(&[[1, 2], [3, 4]]).unwrap();
    assert_eq!((grid.width(), grid.height()), (2, 2));
    assert_eq!(grid[(0, 0)], 1);
    assert_eq!(grid[(1, 0)], 2);
    assert_eq!(grid[(0, 1)], 3);
    assert_eq!(grid[(1, 1)], 4);
}

#[test]
fn test_from_nested_shape_errors() {
    let empty: Vec<Vec<i32>> = vec![];
    assert_eq!(Grid2D::from_nested(&empty), Err(ShapeError::Empty));

    let ragged = vec![vec![1, 2], vec![3]];
    assert!(matches!(
        Grid2D::from_nested(&ragged),
        Err(ShapeError::RaggedRow { row: 1, .. })
    ));
}

#[test]
fn test_nested_round_trip_through_entries() {
    let rows = vec![
        vec!['a', 'b', 'c'],
        vec!['d', 'e', 'f'],
        vec!['g', 'h', 'i'],
        vec!['j', 'k', 'l'],
    ];
    let grid = Grid2D::from_nested(&rows).unwrap();

    let mut rebuilt: Vec<Vec<char>> = Vec::new();
    for (x, y, &value) in grid.entries() {
        if x == 0 {
            rebuilt.push(Vec::new());
        }
        assert_eq!(rebuilt.len(), y + 1);
        rebuilt[y].push(value);
    }
    assert_eq!(rebuilt, rows);
    assert_eq!(grid.to_nested(), rows);
}

// ============== Traversal ==============

#[test]
fn test_entries_row_major_and_complete() {
    let grid: Grid2D<u8> = Grid2D::new(3, 2);
    let coords: Vec<(usize, usize)> = grid.entries().map(|(x, y, _)| (x, y)).collect();
    assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(grid.entries().len(), 6);
}

#[test]
fn test_values_and_entries_are_fresh_each_call() {
    let grid = Grid2D::from_nested(&[[1, 2, 3]]).unwrap();
    let mut first = grid.values();
    assert_eq!(first.next(), Some(&1));
    // A new call starts over regardless of the first iterator.
    assert_eq!(grid.values().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(first.next(), Some(&2));

    let mut entries = grid.entries();
    entries.next();
    assert_eq!(grid.entries().next(), Some((0, 0, &1)));
}

#[test]
fn test_for_each_cell_visits_full_grid_with_self() {
    let grid = Grid2D::from_nested(&[[1, 2], [3, 4]]).unwrap();
    let mut seen = Vec::new();
    grid.for_each_cell(|&v, x, y, g| {
        assert_eq!(g[(x, y)], v);
        seen.push(v);
    });
    assert_eq!(seen, vec![1, 2, 3, 4]);
}

#[test]
fn test_for_each_cell_in_clamps_and_ignores_inverted() {
    let grid: Grid2D<u8> = Grid2D::new(4, 4);

    let mut count = 0;
    grid.for_each_cell_in((2, 3), (50, 50), |_, _, _, _| count += 1);
    assert_eq!(count, 2);

    count = 0;
    grid.for_each_cell_in((3, 3), (1, 1), |_, _, _, _| count += 1);
    assert_eq!(count, 0);

    count = 0;
    grid.for_each_cell_in((9, 9), (12, 12), |_, _, _, _| count += 1);
    assert_eq!(count, 0);
}

// ============== Map / Fill ==============

#[test]
fn test_map_preserves_dimensions() {
    let grid = Grid2D::filled(5, 3, 2u32);
    let mapped: Grid2D<String> = grid.map(|v, x, y, _| format!("{}:{}:{}", v, x, y));
    assert_eq!((mapped.width(), mapped.height()), (5, 3));
    assert_eq!(mapped[(4, 2)], "2:4:2");
}

#[test]
fn test_map_reads_previously_written_result_cells() {
    // Prefix sums over the whole grid via the in-progress result.
    let grid = Grid2D::filled(3, 2, 1u32);
    let prefix = grid.map(|v, x, y, out| {
        let prev = match (x, y) {
            (0, 0) => 0,
            (0, _) => out[(out.width() - 1, y - 1)],
            _ => out[(x - 1, y)],
        };
        prev + v
    });
    assert_eq!(prefix.to_nested(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
}

#[test]
fn test_map_row_prefix_sums() {
    let grid = Grid2D::from_nested(&[[1u32, 2, 3], [10, 20, 30]]).unwrap();
    let prefix = grid.map(|&v, x, y, out| if x == 0 { v } else { out[(x - 1, y)] + v });
    assert_eq!(prefix.to_nested(), vec![vec![1, 3, 6], vec![10, 30, 60]]);
}

#[test]
fn test_fill_sets_every_cell() {
    let mut grid: Grid2D<i32> = Grid2D::new(6, 4);
    grid.fill(7);
    assert!(grid.all_cells(|&cell, _, _, _| cell == 7));
}

#[test]
fn test_fill_in_region() {
    let mut grid = Grid2D::filled(3, 3, '.');
    grid.fill_in('#', (1, 0), (3, 2)).fill_in('o', (0, 2), (1, 3));
    assert_eq!(
        grid.to_nested(),
        vec![
            vec!['.', '#', '#'],
            vec!['.', '#', '#'],
            vec!['o', '.', '.'],
        ]
    );
}

// ============== Predicates ==============

#[test]
fn test_all_and_any_short_circuit() {
    let grid = Grid2D::from_nested(&[[1, 2, 3], [4, 5, 6]]).unwrap();

    let mut calls = 0;
    assert!(!grid.all_cells(|&v, _, _, _| {
        calls += 1;
        v < 3
    }));
    assert_eq!(calls, 3);

    calls = 0;
    assert!(grid.any_cell(|&v, _, _, _| {
        calls += 1;
        v == 4
    }));
    assert_eq!(calls, 4);
}

#[test]
fn test_predicates_on_empty_ranges() {
    let grid = Grid2D::filled(3, 3, 0);
    assert!(grid.all_cells_in((1, 1), (1, 1), |_, _, _, _| false));
    assert!(!grid.any_cell_in((1, 1), (1, 1), |_, _, _, _| true));

    let empty: Grid2D<i32> = Grid2D::new(0, 0);
    assert!(empty.all_cells(|_, _, _, _| false));
    assert!(!empty.any_cell(|_, _, _, _| true));
}

#[test]
fn test_predicates_in_region_see_coordinates() {
    let grid = Grid2D::from_nested(&[[0, 0, 0], [0, 9, 0], [0, 0, 0]]).unwrap();
    assert!(grid.any_cell_in((1, 1), (2, 2), |&v, x, y, _| v == 9 && (x, y) == (1, 1)));
    assert!(grid.all_cells_in((0, 0), (3, 1), |&v, _, _, _| v == 0));
    assert!(!grid.all_cells_in((0, 0), (3, 3), |&v, _, _, _| v == 0));
}

// ============== Indexing ==============

#[test]
fn test_index_mut_and_checked_access() {
    let mut grid: Grid2D<Option<u8>> = Grid2D::new(2, 3);
    grid[(1, 2)] = Some(4);
    assert_eq!(grid.get(1, 2), Some(&Some(4)));
    assert_eq!(grid.get(2, 1), None);

    if let Some(cell) = grid.get_mut(0, 0) {
        *cell = Some(1);
    }
    assert_eq!(grid.row(0), Some(&[Some(1), None][..]));
    assert_eq!(grid.row(3), None);
}

#[test]
#[should_panic(expected = "cell (0, 3) out of bounds for 2x3 grid")]
fn test_index_out_of_bounds_fails_fast() {
    let grid: Grid2D<u8> = Grid2D::new(2, 3);
    let _cell = grid[(0, 3)];
}

// ============== Serde ==============

#[test]
fn test_serde_json_nested_rows() {
    let grid = Grid2D::from_nested(&[[1u8, 2], [3, 4]]).unwrap();
    assert_eq!(serde_json::to_value(&grid).unwrap(), serde_json::json!([[1, 2], [3, 4]]));

    let back: Grid2D<u8> = serde_json::from_str("[[1,2],[3,4]]").unwrap();
    assert_eq!(back, grid);

    assert!(serde_json::from_str::<Grid2D<u8>>("[]").is_err());
}

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Layout {
    name: String,
    mask: Grid2D<bool>,
}

#[test]
fn test_serde_grid_inside_derived_struct() {
    let json = r#"{"name":"corner","mask":[[true,true],[true,false]]}"#;
    let layout: Layout = serde_json::from_str(json).unwrap();
    assert_eq!(layout.mask.width(), 2);
    assert!(!layout.mask[(1, 1)]);
    assert_eq!(serde_json::to_string(&layout).unwrap(), json);

    let ragged = r#"{"name":"bad","mask":[[true,true],[true]]}"#;
    let err = serde_json::from_str::<Layout>(ragged).unwrap_err();
    assert!(err.to_string().contains("row at index 1 has size 1, not 2"));
}
