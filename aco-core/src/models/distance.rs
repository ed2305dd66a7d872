#[cfg(test)]
#[path = "../../tests/unit/models/distance_test.rs"]
mod distance_test;

use crate::utils::{ColonyError, ColonyResult};

/// A value used on the main diagonal of a distance matrix. It is never read as a real distance.
pub const DIAGONAL_SENTINEL: f64 = -1.;

/// Wraps an immutable symmetric distance matrix and keeps heuristic desirability of each
/// pair of cities, which is inverse distance raised to `beta` power.
#[derive(Clone, Debug)]
pub struct DistanceModel {
    size: usize,
    distances: Vec<f64>,
    heuristics: Vec<f64>,
}

impl DistanceModel {
    /// Creates a new instance of `DistanceModel` from a square matrix.
    /// Off-diagonal entries must be finite, positive and symmetric, diagonal entries are ignored.
    pub fn new(matrix: Vec<Vec<f64>>, beta: f64) -> ColonyResult<Self> {
        let size = matrix.len();

        if size == 0 {
            return Err(ColonyError::configuration("distance matrix should have at least one city"));
        }

        if !beta.is_finite() {
            return Err(ColonyError::configuration(format!("beta should be finite, got: '{beta}'")));
        }

        if let Some((idx, row)) = matrix.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(ColonyError::configuration(format!(
                "distance matrix should be square: row {idx} has {} entries, expected {size}",
                row.len()
            )));
        }

        for i in 0..size {
            for j in (i + 1)..size {
                let (forward, backward) = (matrix[i][j], matrix[j][i]);

                if !forward.is_finite() || forward <= 0. {
                    return Err(ColonyError::configuration(format!(
                        "distance between {i} and {j} should be finite and positive, got: '{forward}'"
                    )));
                }

                if forward != backward {
                    return Err(ColonyError::configuration(format!(
                        "distance matrix is asymmetric: [{i}][{j}]={forward}, [{j}][{i}]={backward}"
                    )));
                }
            }
        }

        let distances = matrix
            .into_iter()
            .enumerate()
            .flat_map(|(i, row)| {
                row.into_iter().enumerate().map(move |(j, d)| if i == j { DIAGONAL_SENTINEL } else { d })
            })
            .collect::<Vec<_>>();

        let heuristics = distances
            .iter()
            .enumerate()
            .map(|(idx, &distance)| if idx / size == idx % size { 0. } else { distance.powf(-beta) })
            .collect();

        Ok(Self { size, distances, heuristics })
    }

    /// Returns amount of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns distance between two different cities.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances[from * self.size + to]
    }

    /// Returns heuristic desirability to move between two different cities.
    pub fn heuristic(&self, from: usize, to: usize) -> f64 {
        self.heuristics[from * self.size + to]
    }

    /// Returns length of a closed tour which visits cities in the given order.
    pub fn tour_length(&self, route: &[usize]) -> f64 {
        if route.len() < 2 {
            return 0.;
        }

        route.iter().zip(route.iter().cycle().skip(1)).map(|(&from, &to)| self.distance(from, to)).sum()
    }
}

/// Creates a symmetric euclidean distance matrix from city coordinates.
/// The main diagonal is filled with `DIAGONAL_SENTINEL`.
pub fn create_euclidean_matrix(coordinates: &[(f64, f64)]) -> Vec<Vec<f64>> {
    coordinates
        .iter()
        .enumerate()
        .map(|(i, &(x1, y1))| {
            coordinates
                .iter()
                .enumerate()
                .map(|(j, &(x2, y2))| if i == j { DIAGONAL_SENTINEL } else { (x1 - x2).hypot(y1 - y2) })
                .collect()
        })
        .collect()
}
