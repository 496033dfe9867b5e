use keygauge::error::KeyGaugeError;
use keygauge::geometry::{unshift, KeyCoord, KeyGrid, RowSpec};
use keygauge::layout::Layout;
use keygauge::layouts::{ortho_split_spec, KnownLayout};

fn small_spec() -> Vec<RowSpec> {
    vec![RowSpec::Split { left: 2, right: 2 }]
}

#[test]
fn test_empty_spec_rejected() {
    let err = KeyGrid::new(&[]).unwrap_err();
    assert!(matches!(err, KeyGaugeError::Config(_)), "got {:?}", err);
}

#[test]
fn test_mixed_spec_rejected() {
    let spec = vec![RowSpec::Split { left: 2, right: 2 }, RowSpec::Uniform(4)];
    let err = KeyGrid::new(&spec).unwrap_err();
    assert!(matches!(err, KeyGaugeError::Config(_)), "got {:?}", err);
}

#[test]
fn test_uniform_spec_unsupported() {
    let spec = vec![RowSpec::Uniform(10), RowSpec::Uniform(10)];
    let err = KeyGrid::new(&spec).unwrap_err();
    assert!(matches!(err, KeyGaugeError::Unsupported(_)), "got {:?}", err);
}

#[test]
fn test_split_row_indexing() {
    // One row (2,2), placement "ab cd": columns run left half then right.
    let mut grid = KeyGrid::new(&small_spec()).unwrap();
    grid.fill_with("ab cd").unwrap();

    assert_eq!(grid.at(0, 0), Some('a'));
    assert_eq!(grid.at(0, 1), Some('b'));
    assert_eq!(grid.at(0, 2), Some('c'));
    assert_eq!(grid.at(0, 3), Some('d'));
    assert_eq!(grid.coord_of('c'), Some(KeyCoord::new(0, 2)));
}

#[test]
fn test_out_of_range_lookups_absent() {
    let mut grid = KeyGrid::new(&small_spec()).unwrap();
    grid.fill_with("ab cd").unwrap();

    assert_eq!(grid.at(1, 0), None, "row past the row count");
    assert_eq!(grid.at(0, 4), None, "column past the combined width");
    assert_eq!(grid.at(0, 100), None);
    assert_eq!(grid.coord_of('z'), None, "character never placed");
}

#[test]
fn test_placement_exhaustion_fails() {
    let mut grid = KeyGrid::new(&small_spec()).unwrap();
    let err = grid.fill_with("ab c").unwrap_err();
    assert!(matches!(err, KeyGaugeError::Validation(_)), "got {:?}", err);
}

#[test]
fn test_placement_overflow_fails() {
    let mut grid = KeyGrid::new(&small_spec()).unwrap();
    let err = grid.fill_with("ab cde").unwrap_err();
    assert!(matches!(err, KeyGaugeError::Validation(_)), "got {:?}", err);
}

#[test]
fn test_placement_round_trip() {
    let placement = KnownLayout::Qwerty.placement();
    let layout = Layout::new(&ortho_split_spec(), placement).unwrap();

    let placed: String = placement.chars().filter(|c| *c != ' ').collect();
    let mut read_back = String::new();
    for row in 0..layout.grid().row_count() {
        let mut col = 0;
        while let Some(c) = layout.grid().at(row, col) {
            read_back.push(c);
            col += 1;
        }
    }
    assert_eq!(read_back, placed);
}

#[test]
fn test_bidirectional_lookup() {
    let layout = KnownLayout::Colemak.layout().unwrap();
    for key in KnownLayout::Colemak.placement().chars().filter(|c| *c != ' ') {
        let coord = layout.grid().coord_of(key).expect("placed key must index");
        assert_eq!(layout.grid().at(coord.row, coord.col), Some(key));
    }
}

#[test]
fn test_shift_normalization() {
    let layout = KnownLayout::Qwerty.layout().unwrap();
    let grid = layout.grid();

    assert_eq!(grid.coord_of('A'), grid.coord_of('a'));
    assert_eq!(grid.coord_of('Z'), grid.coord_of('z'));
    assert_eq!(grid.coord_of(':'), grid.coord_of(';'));
    assert_eq!(grid.coord_of('<'), grid.coord_of(','));
    assert_eq!(grid.coord_of('>'), grid.coord_of('.'));
    assert_eq!(grid.coord_of('?'), grid.coord_of('/'));
    assert!(grid.coord_of('A').is_some());
}

#[test]
fn test_unshift_table() {
    assert_eq!(unshift('Q'), Some('q'));
    assert_eq!(unshift('?'), Some('/'));
    assert_eq!(unshift('"'), Some('\''));
    assert_eq!(unshift('a'), None);
    assert_eq!(unshift('\n'), None);
}

#[test]
fn test_slot_count_and_positions() {
    let mut grid = KeyGrid::new(&ortho_split_spec()).unwrap();
    assert_eq!(grid.slot_count(), 31);

    let positions = grid.ordered_positions();
    assert_eq!(positions.len(), 31);
    assert_eq!(positions[0], KeyCoord::new(0, 0));
    assert_eq!(positions[9], KeyCoord::new(0, 9));
    assert_eq!(positions[10], KeyCoord::new(1, 0));
    assert_eq!(positions[20], KeyCoord::new(1, 10));
    assert_eq!(positions[30], KeyCoord::new(2, 9));
}

#[test]
fn test_render_shape() {
    let mut grid = KeyGrid::new(&small_spec()).unwrap();
    grid.fill_with("ab cd").unwrap();
    assert_eq!(grid.to_string(), " a b\t c d\n");
}

#[test]
fn test_layout_retains_spec() {
    let layout = Layout::new(&ortho_split_spec(), KnownLayout::Qwerty.placement()).unwrap();
    assert_eq!(layout.grid_spec(), ortho_split_spec().as_slice());
}
