mod common;

mod tests {
    use buzzer_board::color::{BLACK, from_grb};
    use buzzer_board::matrix::{HEIGHT, WIDTH};
    use buzzer_board::{CellGrid, Matrix, OutOfBounds, Region, Rgb};

    use crate::common::RecordingOutput;

    const BASE: Rgb = Rgb::new(1, 2, 3);
    const PAINT: Rgb = Rgb::new(9, 8, 7);

    #[test]
    fn test_fill_region_fails_iff_out_of_bounds() {
        for x in 0..=9u8 {
            for y in 0..=9u8 {
                for width in 0..=9u8 {
                    for height in 0..=9u8 {
                        let mut matrix = Matrix::new(RecordingOutput::default(), BASE);
                        let result = matrix.fill_region(PAINT, x, y, width, height);
                        let outside = x + width > 8 || y + height > 8;

                        if outside {
                            assert_eq!(result, Err(OutOfBounds));
                            assert!(matrix.grid().as_slice().iter().all(|c| *c == BASE));
                            continue;
                        }
                        assert_eq!(result, Ok(()));
                        let region = Region::new(x, y, width, height).unwrap();
                        for cy in 0..HEIGHT {
                            for cx in 0..WIDTH {
                                let expected = if region.contains(cx, cy) { PAINT } else { BASE };
                                assert_eq!(matrix.grid().cell(cx, cy), Some(expected));
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_region_rejects_wrapping_sizes() {
        assert_eq!(Region::new(255, 0, 2, 1), Err(OutOfBounds));
        assert_eq!(Region::new(0, 1, 1, 255), Err(OutOfBounds));
        assert_eq!(Region::new(6, 6, 2, 2).map(Region::count), Ok(4));
    }

    #[test]
    fn test_oversized_region_cannot_be_built() {
        assert_eq!(Region::new(7, 0, 4, 1), Err(OutOfBounds));

        let region = Region::new(7, 0, 1, 1).unwrap();
        assert_eq!(
            (region.x(), region.y(), region.width(), region.height()),
            (7, 0, 1, 1)
        );
        let mut grid = CellGrid::new();
        grid.fill_rect(PAINT, region);
        assert_eq!(grid.cell(7, 0), Some(PAINT));
        assert_eq!(grid.cell(6, 0), Some(BLACK));
        assert_eq!(grid.as_slice().iter().filter(|c| **c == PAINT).count(), 1);
    }

    #[test]
    fn test_fill_all_and_uniform() {
        let mut matrix = Matrix::new(RecordingOutput::default(), BLACK);
        matrix.fill_all(PAINT);
        assert!(matrix.grid().as_slice().iter().all(|c| *c == PAINT));

        matrix.fill_uniform(30, 10, 20);
        let expected = Rgb::new(10, 30, 20);
        assert_eq!(from_grb(30, 10, 20), expected);
        assert_eq!(matrix.grid().cell(7, 7), Some(expected));
        assert_eq!(matrix.grid().as_slice().len(), 64);
    }

    #[test]
    fn test_transmit_sends_full_grid_row_major() {
        let mut matrix = Matrix::new(RecordingOutput::default(), BLACK);
        matrix.fill_region(PAINT, 7, 0, 1, 1).unwrap();
        matrix.fill_region(BASE, 0, 1, 1, 1).unwrap();
        matrix.transmit();
        matrix.transmit();

        let frames = &matrix.output().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].len(), 64);
        assert_eq!(frames[0][7], PAINT);
        assert_eq!(frames[0][8], BASE);
        assert_eq!(frames[0], frames[1]);
    }
}
