//! Integration tests for vertex deduplication

use labeltools_mapper::LabelMapper;
use labeltools_vertices::remap_duplicates;
use ndarray::{array, Array2};
use rstest::rstest;

#[rstest]
#[case(10)] // case 1
#[case(100)] // case 2
fn repeated_pattern(#[case] rows: usize) {
    let mut vertices = Array2::<f32>::zeros((rows, 3));
    for i in 0..rows {
        vertices[[i, 2]] = (i % 3) as f32;
    }

    let pairs = remap_duplicates(vertices.view());
    let expected: Vec<(usize, usize)> = (3..rows).map(|i| (i, i % 3)).collect();
    assert_eq!(pairs, expected);
}

#[test]
fn faces_refer_to_first_copies() {
    let vertices = array![
        [0.0_f32, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [1.0, 1.0, 0.0],
    ];
    let mut faces = array![[0_u32, 1, 2], [3, 5, 4]];

    let pairs = remap_duplicates(vertices.view());
    let mapper: LabelMapper<u32, u32> = pairs
        .iter()
        .map(|&(duplicate, first)| (duplicate as u32, first as u32))
        .collect();

    // indices that are not duplicates stay as they are
    mapper.apply_inplace(&mut faces, true).unwrap();
    assert_eq!(faces, array![[0, 1, 2], [1, 5, 2]]);
}
