//! Integration tests for majority-vote downsampling

use labeltools_downsample::{downsample_labels, downsample_labels_dyn, DownsampleOptions, Error};
use labeltools_utils::{Dtype, LabelArray};
use ndarray::{array, s, Array2, Array3, ArrayD, Axis, IxDyn};
use rstest::{fixture, rstest};

#[fixture]
fn volume_2d() -> Array2<u64> {
    array![
        [0, 0, 1, 1, 2, 2, 3, 3],
        [0, 0, 1, 0, 2, 0, 3, 0],
        [0, 0, 0, 0, 2, 2, 3, 3],
        [0, 0, 8, 9, 8, 9, 8, 9],
    ]
}

#[fixture]
fn volume_3d() -> Array3<u64> {
    array![[[0, 0, 1, 1], [2, 2, 3, 3]], [[0, 0, 1, 0], [2, 0, 3, 3]]]
}

#[rstest]
#[case(false, array![[0, 1, 2, 3], [0, 0, 2, 3]])] // case 1
#[case(true, array![[0, 1, 2, 3], [0, 8, 2, 3]])] // case 2
fn basic_2d(volume_2d: Array2<u64>, #[case] suppress_zero: bool, #[case] expected: Array2<u64>) {
    let reduced = downsample_labels(&volume_2d, 2, suppress_zero).unwrap();
    assert_eq!(reduced, expected);

    // every width gives the same answer
    let narrow = volume_2d.mapv(|v| v as u8);
    let reduced = downsample_labels(&narrow, 2, suppress_zero).unwrap();
    assert_eq!(reduced, expected.mapv(|v| v as u8));
}

#[rstest]
#[case(false, array![[[0, 3]]])] // case 1
#[case(true, array![[[2, 3]]])] // case 2
fn basic_3d(volume_3d: Array3<u64>, #[case] suppress_zero: bool, #[case] expected: Array3<u64>) {
    let reduced = downsample_labels(&volume_3d, 2, suppress_zero).unwrap();
    assert_eq!(reduced, expected);
}

#[rstest]
#[case(false, array![[1, 0, 0]])] // case 1
#[case(true, array![[1, 3, 1]])] // case 2
fn ties_2d(#[case] suppress_zero: bool, #[case] expected: Array2<u32>) {
    let volume = array![[1_u32, 1, 3, 0, 2, 3], [2, 2, 3, 0, 1, 0]];
    let reduced = downsample_labels(&volume, 2, suppress_zero).unwrap();
    assert_eq!(reduced, expected);
}

#[rstest]
#[case(false, array![[[2, 0, 0, 3]]])] // case 1
#[case(true, array![[[2, 3, 1, 3]]])] // case 2
fn ties_3d(#[case] suppress_zero: bool, #[case] expected: Array3<u16>) {
    let volume = array![
        [[1_u16, 1, 3, 0, 2, 3, 4, 3], [2, 2, 3, 0, 1, 0, 3, 4]],
        [[2, 2, 3, 0, 1, 0, 3, 4], [2, 2, 3, 0, 1, 0, 3, 4]]
    ];
    let reduced = downsample_labels(&volume, 2, suppress_zero).unwrap();
    assert_eq!(reduced, expected);
}

#[test]
fn rank_1() {
    let volume = array![5_u8, 5, 0, 7, 0, 0, 1, 2, 0];
    assert_eq!(downsample_labels(&volume, 3, false).unwrap(), array![5, 0, 0]);
    assert_eq!(downsample_labels(&volume, 3, true).unwrap(), array![5, 7, 1]);
}

#[test]
fn non_contiguous_view() {
    let full = Array3::<u32>::from_shape_fn((100, 100, 100), |(z, y, x)| {
        ((z / 2 + y / 2 + x / 2) % 7) as u32
    });
    let before = full.clone();

    let view = full.slice(s![40..60, 40..60, 40..60]);
    let reduced = downsample_labels(&view, 2, false).unwrap();

    assert_eq!(reduced.shape(), &[10, 10, 10]);
    // blocks of the view line up with the uniform 2x2x2 blocks of the source
    assert_eq!(reduced, view.slice(s![..;2, ..;2, ..;2]));
    assert_eq!(full, before);
}

#[test]
fn reversed_view_is_read_in_view_order() {
    let volume = array![[1_u8, 1, 2, 2], [1, 3, 2, 0]];
    let reversed = volume.slice(s![.., ..;-1]);
    let reduced = downsample_labels(&reversed, 2, true).unwrap();
    assert_eq!(reduced, array![[2, 1]]);
}

#[rstest]
#[case(0, array![[8, 3], [1, 2]])] // case 1
#[case(1, array![[2, 1], [3, 8]])] // case 2
fn inverted_axis(#[case] axis: usize, #[case] expected: Array2<u32>) {
    let volume = array![
        [1_u32, 1, 2, 2],
        [1, 3, 2, 0],
        [8, 8, 3, 0],
        [8, 0, 3, 3],
    ];
    let mut view = volume.view();
    view.invert_axis(Axis(axis));

    let reduced = downsample_labels(&view, 2, false).unwrap();
    assert_eq!(reduced, expected);
    assert_eq!(volume[[0, 0]], 1);
}

#[test]
fn reversed_rows_of_a_3d_volume() {
    let volume = Array3::<u16>::from_shape_fn((4, 4, 4), |(z, y, x)| {
        (z / 2 * 4 + y / 2 * 2 + x / 2) as u16
    });
    let reversed = volume.slice(s![..;-1, .., ..;-1]);

    let reduced = downsample_labels(&reversed, 2, false).unwrap();
    let expected = downsample_labels(&volume, 2, false).unwrap();
    assert_eq!(reduced, expected.slice(s![..;-1, .., ..;-1]));
}

#[test]
fn zeros_stay_zero() {
    let volume = Array3::<u64>::zeros((8, 8, 8));
    let reduced = downsample_labels(&volume, 4, true).unwrap();
    assert_eq!(reduced, Array3::zeros((2, 2, 2)));
}

#[test]
fn factor_larger_than_any_run() {
    // one block covering the whole volume
    let volume = Array2::<u32>::from_shape_fn((6, 6), |(y, x)| (y * 6 + x) as u32 % 5);
    let reduced = downsample_labels(&volume, 6, false).unwrap();
    // 36 values over 5 labels: 0 appears 8 times, everything else 7
    assert_eq!(reduced, array![[0]]);
    let reduced = downsample_labels(&volume, 6, true).unwrap();
    assert_eq!(reduced, array![[1]]);
}

#[rstest]
#[case(&[20, 0], 2)] // case 1
#[case(&[20, 0, 10], 2)] // case 2
#[case(&[0], 1)] // case 3
#[case(&[4, 0], 0)] // case 4
fn zero_size_axis(#[case] shape: &[usize], #[case] factor: usize) {
    let volume = ArrayD::<u8>::zeros(IxDyn(shape));
    let err = downsample_labels(&volume, factor, false).unwrap_err();
    assert!(matches!(err, Error::EmptyAxis { .. }));
    assert!(err.is_invalid_shape());
}

#[rstest]
#[case(&[4, 6], 4, 1)] // case 1
#[case(&[9, 9, 10], 3, 2)] // case 2
#[case(&[7], 2, 0)] // case 3
fn indivisible_axis(#[case] shape: &[usize], #[case] factor: usize, #[case] axis: usize) {
    let volume = ArrayD::<u32>::zeros(IxDyn(shape));
    let err = downsample_labels(&volume, factor, false).unwrap_err();
    assert_eq!(
        err,
        Error::IndivisibleAxis {
            axis,
            length: shape[axis],
            factor
        }
    );
    assert!(err.is_invalid_shape());
}

#[test]
fn zero_factor() {
    let volume = Array2::<u16>::ones((4, 4));
    let err = downsample_labels(&volume, 0, false).unwrap_err();
    assert_eq!(err, Error::InvalidFactor { factor: 0 });
    assert!(err.is_invalid_shape());
}

#[test]
fn rank_4_is_unsupported() {
    let volume = ArrayD::<u8>::zeros(IxDyn(&[2, 2, 2, 2]));
    let err = downsample_labels(&volume, 2, false).unwrap_err();
    assert_eq!(err, Error::UnsupportedRank { ndim: 4 });
    assert!(!err.is_invalid_shape());
}

#[rstest]
#[case(Dtype::U8)] // case 1
#[case(Dtype::U16)] // case 2
#[case(Dtype::U32)] // case 3
#[case(Dtype::U64)] // case 4
fn dynamic_keeps_width(volume_3d: Array3<u64>, #[case] dtype: Dtype) {
    let volume = volume_3d.into_dyn();
    let labels = match dtype {
        Dtype::U8 => LabelArray::from(volume.mapv(|v| v as u8)),
        Dtype::U16 => LabelArray::from(volume.mapv(|v| v as u16)),
        Dtype::U32 => LabelArray::from(volume.mapv(|v| v as u32)),
        Dtype::U64 => LabelArray::from(volume.clone()),
    };

    let reduced = downsample_labels_dyn(&labels.view(), 2, true).unwrap();
    assert_eq!(reduced.dtype(), dtype);
    assert_eq!(reduced.shape(), &[1, 1, 2]);

    let options = DownsampleOptions::new(2).with_suppress_zero(true);
    assert_eq!(options.apply_dyn(&labels.view()).unwrap(), reduced);
    assert_eq!(
        options.apply(&volume).unwrap(),
        array![[[2_u64, 3]]].into_dyn()
    );
}

#[test]
fn runs_inside_a_bounded_pool() {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(2).build().unwrap();
    let volume = Array3::<u32>::from_shape_fn((16, 16, 16), |(z, y, x)| ((z ^ y ^ x) % 3) as u32);

    let pooled = pool.install(|| downsample_labels(&volume, 4, false).unwrap());
    let global = downsample_labels(&volume, 4, false).unwrap();
    assert_eq!(pooled, global);
}
