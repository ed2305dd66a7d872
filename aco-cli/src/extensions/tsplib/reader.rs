#[cfg(test)]
#[path = "../../../tests/unit/extensions/tsplib/reader_test.rs"]
mod reader_test;

use aco_core::models::create_euclidean_matrix;
use aco_core::utils::{GenericError, GenericResult};
use std::io::{BufRead, BufReader, Read};

/// A trait to read a symmetric TSP problem in TSPLIB format. Only `NODE_COORD_SECTION` with
/// `EUC_2D` coordinates is supported, distances are not rounded.
pub trait TsplibProblem {
    /// Reads a problem and returns its distance matrix with `-1` on the diagonal.
    fn read_tsplib(self) -> GenericResult<Vec<Vec<f64>>>;
}

impl<R: Read> TsplibProblem for BufReader<R> {
    fn read_tsplib(self) -> GenericResult<Vec<Vec<f64>>> {
        TsplibReader::new(self).read_problem()
    }
}

impl TsplibProblem for String {
    fn read_tsplib(self) -> GenericResult<Vec<Vec<f64>>> {
        TsplibReader::new(BufReader::new(self.as_bytes())).read_problem()
    }
}

struct TsplibReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    dimension: Option<usize>,
}

impl<R: Read> TsplibReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { buffer: String::new(), reader, dimension: None }
    }

    fn read_problem(&mut self) -> GenericResult<Vec<Vec<f64>>> {
        self.read_meta()?;
        let coordinates = self.read_coordinates()?;

        Ok(create_euclidean_matrix(coordinates.as_slice()))
    }

    fn read_meta(&mut self) -> GenericResult<()> {
        loop {
            let line = match self.read_line()? {
                Some(line) => line.trim().to_string(),
                None => return Err("unexpected end of input, expecting NODE_COORD_SECTION".into()),
            };

            if line.is_empty() {
                continue;
            }

            if line == "NODE_COORD_SECTION" {
                break;
            }

            let (key, value) = line
                .split_once(':')
                .map(|(key, value)| (key.trim(), value.trim()))
                .ok_or_else(|| GenericError::from(format!("expected colon separated string, got: '{line}'")))?;

            match key {
                "DIMENSION" => self.dimension = Some(parse_dimension(value)?),
                "EDGE_WEIGHT_TYPE" if value != "EUC_2D" => {
                    return Err(format!("expecting 'EUC_2D' as EDGE_WEIGHT_TYPE, got '{value}'").into());
                }
                _ => {}
            }
        }

        if self.dimension.is_none() {
            return Err("DIMENSION is not specified".into());
        }

        Ok(())
    }

    fn read_coordinates(&mut self) -> GenericResult<Vec<(f64, f64)>> {
        let dimension = self.dimension.ok_or_else(|| GenericError::from("DIMENSION is not specified"))?;
        let mut coordinates = Vec::with_capacity(dimension);

        while let Some(line) = self.read_line()? {
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            if line == "EOF" {
                break;
            }

            let data = line.split_whitespace().collect::<Vec<_>>();
            if data.len() != 3 {
                return Err(format!("unexpected coord data: '{line}'").into());
            }

            let coord = (parse_float(data[1], "cannot parse coord.0")?, parse_float(data[2], "cannot parse coord.1")?);
            coordinates.push(coord);
        }

        if coordinates.len() != dimension {
            return Err(format!("expecting {dimension} coordinates, got {}", coordinates.len()).into());
        }

        Ok(coordinates)
    }

    /// Reads the next line into the buffer, returns `None` at the end of input.
    fn read_line(&mut self) -> GenericResult<Option<&String>> {
        self.buffer.clear();
        let bytes = self.reader.read_line(&mut self.buffer)?;

        Ok(if bytes == 0 { None } else { Some(&self.buffer) })
    }
}

fn parse_dimension(value: &str) -> GenericResult<usize> {
    match value.parse::<usize>() {
        Ok(0) => Err("DIMENSION should be positive".into()),
        Ok(dimension) => Ok(dimension),
        Err(err) => Err(format!("cannot parse DIMENSION: '{err}'").into()),
    }
}

fn parse_float(data: &str, err_msg: &str) -> GenericResult<f64> {
    data.parse::<f64>().map_err(|err| format!("{err_msg}: '{err}'").into())
}
