//! A(h) as JSON: `{ "<height>": cumulative_area, ... }` in increasing height.
//!
//! Heights are written like Python's `str(float)` (`0.0`, `0.5`, `1.0`, ...)
//! so existing consumers keyed on those strings keep working.

use anyhow::{bail, Context, Result};
use immersion::AreaFunction;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::path::Path;

/// Relative tolerance for the height grid when loading.
const GRID_EPS: f64 = 1e-9;

/// Python switches to exponent form outside `1e-4 <= |h| < 1e16`.
fn height_key(h: f64) -> String {
    let mag = h.abs();
    if h != 0.0 && !(1e-4..1e16).contains(&mag) {
        // Rust's `{:e}` gives the shortest mantissa but a bare exponent (`1.5e-5`);
        // Python writes a sign and at least two digits (`1.5e-05`).
        let sci = format!("{h:e}");
        return match sci.split_once('e') {
            Some((mantissa, exp)) => {
                let exp: i32 = exp.parse().unwrap_or(0);
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            None => sci,
        };
    }
    if h.fract() == 0.0 {
        format!("{h:.1}")
    } else {
        format!("{h}")
    }
}

/// Serializes entries in height order (not key order).
pub struct AreaJson<'a>(pub &'a AreaFunction);

impl Serialize for AreaJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (h, a) in self.0.points() {
            map.serialize_entry(&height_key(h), &a)?;
        }
        map.end()
    }
}

pub fn write_area_function(af: &AreaFunction, path: &Path) -> Result<()> {
    crate::ensure_parent(path)?;
    std::fs::write(path, serde_json::to_vec_pretty(&AreaJson(af))?)
        .with_context(|| format!("writing {}", path.display()))
}

/// Load A(h) written by `write_area_function` (or any uniformly spaced map
/// starting at height 0).
pub fn read_area_function(path: &Path) -> Result<AreaFunction> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: BTreeMap<String, f64> =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    let mut pts = raw
        .into_iter()
        .map(|(k, v)| {
            k.trim()
                .parse::<f64>()
                .map(|h| (h, v))
                .with_context(|| format!("height key {k:?} is not a number"))
        })
        .collect::<Result<Vec<_>>>()?;
    pts.sort_by(|a, b| a.0.total_cmp(&b.0));
    let step = match pts.as_slice() {
        [] => bail!("{}: empty area function", path.display()),
        [_] => 1.0,
        [a, b, ..] => b.0 - a.0,
    };
    for (i, (h, _)) in pts.iter().enumerate() {
        let want = i as f64 * step;
        if (h - want).abs() > GRID_EPS * want.abs().max(1.0) {
            bail!("{}: heights are not a uniform grid from 0 (got {h} at index {i})", path.display());
        }
    }
    let cumulative = pts.into_iter().map(|(_, a)| a).collect();
    AreaFunction::from_cumulative(step, cumulative)
        .with_context(|| format!("{}: area function must start with A(0) = 0", path.display()))
}
