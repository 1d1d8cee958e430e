use wallkit::geometry::{
    FRAME_Z_OFFSET, WindowUnitStyle, box_mesh, door_cap_mesh, door_pair_mesh, door_pane_grid_mesh,
    tile_mesh, window_unit_meshes,
};

fn bounding_box(vertices: &[wallkit::geometry::SceneVertex]) -> ([f32; 3], [f32; 3]) {
    let mut min = [f32::INFINITY; 3];
    let mut max = [f32::NEG_INFINITY; 3];
    for vertex in vertices {
        for axis in 0..3 {
            min[axis] = min[axis].min(vertex.position[axis]);
            max[axis] = max[axis].max(vertex.position[axis]);
        }
    }
    (min, max)
}

#[test]
fn should_emit_36_vertices_for_a_box() {
    let mesh = box_mesh(2.0, 4.0, 6.0);
    assert_eq!(mesh.len(), 36);
    assert_eq!(mesh.triangle_count(), 12);
}

#[test]
fn should_center_the_box_on_the_origin() {
    let mesh = box_mesh(2.0, 4.0, 6.0);
    let (min, max) = bounding_box(mesh.vertices());
    assert_eq!(min, [-1.0, -2.0, -3.0]);
    assert_eq!(max, [1.0, 2.0, 3.0]);
}

#[test]
fn should_give_each_box_triangle_a_constant_axis_normal() {
    let mesh = box_mesh(1.0, 1.0, 1.0);

    for triangle in mesh.vertices().chunks(3) {
        assert_eq!(triangle[0].normal, triangle[1].normal);
        assert_eq!(triangle[0].normal, triangle[2].normal);
    }

    let mut normals: Vec<[f32; 3]> = Vec::new();
    for vertex in mesh.vertices() {
        if !normals.contains(&vertex.normal) {
            normals.push(vertex.normal);
        }
    }
    let expected: [[f32; 3]; 6] = [
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
        [-1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
    ];
    assert_eq!(normals.len(), 6);
    for axis_normal in expected {
        assert!(normals.contains(&axis_normal), "missing {axis_normal:?}");
        // one pair of opposite faces per axis: 6 vertices each
        let count = mesh
            .vertices()
            .iter()
            .filter(|v| v.normal == axis_normal)
            .count();
        assert_eq!(count, 6);
    }
}

#[test]
fn should_not_reject_degenerate_box_dimensions() {
    assert_eq!(box_mesh(0.0, 0.0, 0.0).len(), 36);
    assert_eq!(box_mesh(-1.0, 2.0, 3.0).len(), 36);
}

#[test]
fn should_emit_one_quad_for_a_tile() {
    let mesh = tile_mesh(1.0, 2.0, 4.0, 6.0, 0.5);
    assert_eq!(mesh.len(), 6);

    for vertex in mesh.vertices() {
        assert_eq!(vertex.position[2], 0.5);
        assert_eq!(vertex.normal, [0.0, 0.0, 1.0]);
    }

    let (min, max) = bounding_box(mesh.vertices());
    assert_eq!(min[0], -1.0);
    assert_eq!(max[0], 3.0);
    assert_eq!(min[1], -1.0);
    assert_eq!(max[1], 5.0);
}

#[test]
fn should_map_tile_texture_coordinates_to_the_unit_square() {
    let mesh = tile_mesh(0.0, 0.0, 1.0, 1.0, 0.0);
    let coords: Vec<[f32; 2]> = mesh.vertices().iter().map(|v| v.tex_coords).collect();
    assert_eq!(
        coords,
        vec![
            [0.0, 0.0],
            [1.0, 0.0],
            [1.0, 1.0],
            [0.0, 0.0],
            [1.0, 1.0],
            [0.0, 1.0],
        ]
    );
}

#[test]
fn should_mirror_door_panels_around_the_wall_axis() {
    let mesh = door_pair_mesh(10.0, 2.0, 4.0, 3.0, 0.1);
    assert_eq!(mesh.len(), 12);

    // both panels rest on the floor line: y in [-5, -1]
    for vertex in mesh.vertices() {
        assert!(vertex.position[1] == -5.0 || vertex.position[1] == -1.0);
        assert_eq!(vertex.position[2], 0.1);
    }

    let (left, right) = mesh.vertices().split_at(6);
    let (left_min, left_max) = bounding_box(left);
    let (right_min, right_max) = bounding_box(right);
    assert_eq!(left_min[0], -4.0);
    assert_eq!(left_max[0], -2.0);
    assert_eq!(right_min[0], 2.0);
    assert_eq!(right_max[0], 4.0);
}

#[test]
fn should_leave_door_cap_and_pane_grid_unimplemented() {
    assert!(door_cap_mesh(2.0, 4.0, 10.0, 0.1).is_empty());
    assert!(door_pane_grid_mesh(2.0, 4.0, 10.0, 0.1).is_empty());
}

#[test]
fn should_generate_glass_pane_and_four_frame_rails() {
    let (glass, frame) = window_unit_meshes(&WindowUnitStyle::default());

    assert_eq!(glass.len(), 6);
    assert_eq!(frame.len(), 24);

    for vertex in glass.vertices() {
        assert_eq!(vertex.position[2], 0.0);
    }
    // frame rails sit in front of the glass so they composite over it
    for vertex in frame.vertices() {
        assert_eq!(vertex.position[2], FRAME_Z_OFFSET);
    }
}

#[test]
fn should_keep_every_generated_mesh_a_triangle_list() {
    let meshes = [
        box_mesh(1.0, 2.0, 3.0),
        tile_mesh(0.0, 0.0, 1.0, 1.0, 0.0),
        door_pair_mesh(10.0, 2.0, 4.0, 3.0, 0.1),
        door_cap_mesh(2.0, 4.0, 10.0, 0.1),
        door_pane_grid_mesh(2.0, 4.0, 10.0, 0.1),
        window_unit_meshes(&WindowUnitStyle::default()).0,
        window_unit_meshes(&WindowUnitStyle::default()).1,
    ];
    for mesh in meshes {
        assert_eq!(mesh.len() % 3, 0);
    }
}

#[test]
fn should_generate_identical_meshes_for_identical_inputs() {
    assert_eq!(box_mesh(2.0, 4.0, 6.0), box_mesh(2.0, 4.0, 6.0));
    assert_eq!(
        tile_mesh(1.0, 2.0, 4.0, 6.0, 0.5),
        tile_mesh(1.0, 2.0, 4.0, 6.0, 0.5)
    );
}
