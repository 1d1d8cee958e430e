use wallkit::objects::{GridLayout, grid_translations, wall::wall_mesh};

#[test]
fn should_center_the_grid_on_the_origin() {
    let layout = GridLayout {
        rows: 2,
        cols: 3,
        spacing_x: 1.0,
        spacing_y: 1.0,
    };
    let translations = grid_translations(&layout);
    assert_eq!(translations.len(), 6);

    let xs: Vec<f32> = translations.iter().map(|t| t.x).collect();
    let ys: Vec<f32> = translations.iter().map(|t| t.y).collect();

    for expected_x in [-1.0, 0.0, 1.0] {
        assert_eq!(xs.iter().filter(|x| **x == expected_x).count(), 2);
    }
    for expected_y in [-0.5, 0.5] {
        assert_eq!(ys.iter().filter(|y| **y == expected_y).count(), 3);
    }
    assert!(translations.iter().all(|t| t.z == 0.0));
}

#[test]
fn should_visit_grid_cells_row_major() {
    let layout = GridLayout {
        rows: 2,
        cols: 2,
        spacing_x: 2.0,
        spacing_y: 2.0,
    };
    let translations = grid_translations(&layout);
    assert_eq!(translations[0].x, -1.0);
    assert_eq!(translations[0].y, -1.0);
    assert_eq!(translations[1].x, 1.0);
    assert_eq!(translations[1].y, -1.0);
    assert_eq!(translations[2].x, -1.0);
    assert_eq!(translations[2].y, 1.0);
    assert_eq!(translations[3].x, 1.0);
    assert_eq!(translations[3].y, 1.0);
}

#[test]
fn should_produce_an_empty_grid_for_non_positive_counts() {
    let no_rows = GridLayout {
        rows: 0,
        cols: 5,
        ..Default::default()
    };
    let no_cols = GridLayout {
        rows: 5,
        cols: 0,
        ..Default::default()
    };
    let negative = GridLayout {
        rows: -3,
        cols: 4,
        ..Default::default()
    };
    assert!(grid_translations(&no_rows).is_empty());
    assert!(grid_translations(&no_cols).is_empty());
    assert!(grid_translations(&negative).is_empty());
}

#[test]
fn should_default_to_an_8_by_8_grid() {
    let layout = GridLayout::default();
    assert_eq!(layout.rows, 8);
    assert_eq!(layout.cols, 8);
    assert_eq!(layout.spacing_x, 1.1);
    assert_eq!(layout.spacing_y, 1.6);
    assert_eq!(grid_translations(&layout).len(), 64);
}

#[test]
fn should_combine_wall_box_and_groove_decal_into_one_mesh() {
    let mesh = wall_mesh(4.0, 10.0, 0.2, 5, 8);
    // 36 box vertices followed by one 6-vertex decal tile
    assert_eq!(mesh.len(), 36 + 6);
    assert_eq!(mesh.len() % 3, 0);
}
