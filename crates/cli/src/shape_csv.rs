//! Shape CSV: one header line, then one triangle per row as `x1,y1,x2,y2,x3,y3`.

use anyhow::{anyhow, Context, Result};
use immersion::geom2::{Shape, Triangle};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Column names written by `write_shape`.
const COLUMNS: [&str; 6] = [
    "point_1_x",
    "point_1_y",
    "point_2_x",
    "point_2_y",
    "point_3_x",
    "point_3_y",
];

/// Read and validate a shape. Missing or non-numeric cells and rows without
/// exactly three points are rejected.
pub fn read_shape(path: &Path) -> Result<Shape> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading shape csv {}", path.display()))?;
    let cols: Vec<Series> = df
        .get_columns()
        .iter()
        .map(|s| s.cast(&DataType::Float64))
        .collect::<PolarsResult<_>>()?;
    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(df.height());
    for r in 0..df.height() {
        let mut row = Vec::with_capacity(cols.len());
        for (c, s) in cols.iter().enumerate() {
            let v = s
                .f64()?
                .get(r)
                .ok_or_else(|| anyhow!("row {}: missing or non-numeric value in column {}", r + 1, c + 1))?;
            row.push(v);
        }
        rows.push(row);
    }
    tracing::debug!(rows = rows.len(), cols = cols.len(), "shape_csv");
    let triangles = rows
        .iter()
        .enumerate()
        .map(|(r, row)| Triangle::from_coords(row).with_context(|| format!("row {}", r + 1)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Shape::new(triangles)?)
}

/// Write a shape in the format `read_shape` accepts.
pub fn write_shape(shape: &Shape, path: &Path) -> Result<()> {
    let mut cols: [Vec<f64>; 6] = Default::default();
    for t in shape.triangles() {
        for (k, v) in t.vertices().iter().enumerate() {
            cols[2 * k].push(v.x);
            cols[2 * k + 1].push(v.y);
        }
    }
    let series: Vec<Series> = COLUMNS
        .iter()
        .zip(cols)
        .map(|(name, vals)| Series::new((*name).into(), vals))
        .collect();
    let mut df = DataFrame::new(series)?;
    crate::ensure_parent(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use immersion::geom2::circle_fan;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn circle_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("circle.csv");
        let shape = circle_fan(0.2, 12).unwrap();
        write_shape(&shape, &path).unwrap();
        let back = read_shape(&path).unwrap();
        assert_eq!(back.triangles().len(), 12);
        let (a, b) = (shape.bounding_box(), back.bounding_box());
        assert!((a.max_y - b.max_y).abs() < 1e-12 && (a.min_x - b.min_x).abs() < 1e-12);
    }

    #[test]
    fn reads_spaced_header_and_integer_cells() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("square.csv");
        fs::write(
            &path,
            "point_1_x, point_1_y, point_2_x, point_2_y, point_3_x, point_3_y\n\
             0,0,1,0,1,1\n\
             0,0,1,1,0,1\n",
        )
        .unwrap();
        let shape = read_shape(&path).unwrap();
        assert_eq!(shape.triangles().len(), 2);
        assert_eq!(shape.bounding_box().max_x, 1.0);
    }

    #[test]
    fn rejects_short_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "a,b,c,d\n0,0,1,0\n").unwrap();
        let err = read_shape(&path).unwrap_err();
        assert!(format!("{err:#}").contains("exactly 3 points"));
    }
}
