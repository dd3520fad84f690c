use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;

/// Single-threaded row-major generation; the reference ordering the parallel
/// generator must reproduce.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    grid_size: GridSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    (0..grid_size.height())
        .flat_map(|y| (0..grid_size.width()).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubIndexAlgorithm {
        grid_size: GridSize,
    }

    impl FractalAlgorithm for StubIndexAlgorithm {
        type Success = u32;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if pixel.x == 2 && pixel.y == 2 {
                return Err(StubError {});
            }
            Ok(pixel.y * 10 + pixel.x)
        }

        fn grid_size(&self) -> GridSize {
            self.grid_size
        }
    }

    #[test]
    fn test_serial_is_row_major() {
        let grid_size = GridSize::new(3, 2).unwrap();
        let algorithm = StubIndexAlgorithm { grid_size };

        let results = generate_fractal_serial(grid_size, &algorithm).unwrap();

        assert_eq!(results, vec![0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn test_serial_propagates_algorithm_failure() {
        let grid_size = GridSize::new(3, 3).unwrap();
        let algorithm = StubIndexAlgorithm { grid_size };

        let result = generate_fractal_serial(grid_size, &algorithm);

        assert_eq!(result, Err(StubError {}));
    }
}
