//! Scene-file validation.
//!
//! Consumes the JSON grammar (top-level `vertex`, `scene`, optional `radius`,
//! `pstyle`, `lstyle`) and emits a [`SceneStore`]. Validation stops at the
//! first violation; the returned error's display string is the message
//! surfaced to the user.

use glam::Vec3;
use serde_json::Value;

use super::{
    unpack_edges, LineStyle, PointShape, PointStyle, SceneError, SceneObject, SceneStore,
    NONE_WORD, WORD15_MAX,
};

/// Most entries any table may hold.
const TABLE_LIMIT: usize = 65_535;

/// Parse and validate a scene file.
pub fn parse_scene(text: &str) -> Result<SceneStore, SceneError> {
    let root: Value = serde_json::from_str(text).map_err(|_| SceneError::NotJson)?;
    let root = root.as_object().ok_or(SceneError::RootNotObject)?;

    let vertices = parse_vertices(root.get("vertex").ok_or(SceneError::MissingVertices)?)?;
    let radii = match root.get("radius") {
        Some(value) => parse_radii(value)?,
        None => Vec::new(),
    };
    let point_styles = match root.get("pstyle") {
        Some(value) => parse_point_styles(value)?,
        None => Vec::new(),
    };
    let line_styles = match root.get("lstyle") {
        Some(value) => parse_line_styles(value)?,
        None => Vec::new(),
    };
    let objects = parse_objects(
        root.get("scene").ok_or(SceneError::MissingScene)?,
        &Tables {
            vertices: vertices.len(),
            radii: radii.len(),
            point_styles: point_styles.len(),
            line_styles: line_styles.len(),
        },
    )?;

    Ok(SceneStore {
        vertices,
        radii,
        objects,
        point_styles,
        line_styles,
    })
}

/// Table lengths the scene objects are validated against.
struct Tables {
    vertices: usize,
    radii: usize,
    point_styles: usize,
    line_styles: usize,
}

fn parse_vertices(value: &Value) -> Result<Vec<Vec3>, SceneError> {
    let entries = value.as_array().ok_or(SceneError::VertexNotNumber)?;
    if entries.is_empty() || entries.len() % 3 != 0 {
        return Err(SceneError::BadVertexCount);
    }
    if entries.len() / 3 > TABLE_LIMIT {
        return Err(SceneError::TooManyVertices);
    }
    let mut coords = Vec::with_capacity(entries.len());
    for entry in entries {
        let c = entry.as_f64().ok_or(SceneError::VertexNotNumber)? as f32;
        if !c.is_finite() {
            return Err(SceneError::VertexNotFinite);
        }
        coords.push(c);
    }
    Ok(coords
        .chunks_exact(3)
        .map(|v| Vec3::new(v[0], v[1], v[2]))
        .collect())
}

fn parse_radii(value: &Value) -> Result<Vec<f32>, SceneError> {
    let entries = value.as_array().ok_or(SceneError::RadiusNotNumber)?;
    if entries.len() > TABLE_LIMIT {
        return Err(SceneError::TooManyRadii);
    }
    let mut radii = Vec::with_capacity(entries.len());
    for entry in entries {
        let r = entry.as_f64().ok_or(SceneError::RadiusNotNumber)? as f32;
        if !r.is_finite() || r <= 0.0 {
            return Err(SceneError::BadRadius);
        }
        radii.push(r);
    }
    Ok(radii)
}

fn parse_point_styles(value: &Value) -> Result<Vec<PointStyle>, SceneError> {
    let entries = value.as_array().ok_or(SceneError::PointStyleNotObject)?;
    if entries.len() > TABLE_LIMIT {
        return Err(SceneError::TooManyPointStyles);
    }
    entries.iter().map(parse_point_style).collect()
}

fn parse_point_style(value: &Value) -> Result<PointStyle, SceneError> {
    let style = value.as_object().ok_or(SceneError::PointStyleNotObject)?;

    let shape = style
        .get("shape")
        .and_then(Value::as_str)
        .and_then(PointShape::from_code)
        .ok_or(SceneError::BadPointShape)?;

    let size = style
        .get("size")
        .and_then(Value::as_f64)
        .ok_or(SceneError::BadPointSize)? as f32;
    if !size.is_finite() || size <= 0.0 {
        return Err(SceneError::BadPointSize);
    }

    let stroke = style
        .get("stroke")
        .and_then(Value::as_f64)
        .ok_or(SceneError::BadPointStroke)? as f32;
    if !stroke.is_finite() || stroke < 0.0 {
        return Err(SceneError::BadPointStroke);
    }

    // Strict presence: fill exists exactly for fillable shapes.
    let fill = match (style.get("fill"), shape.fillable()) {
        (Some(_), false) => return Err(SceneError::FillOnUnfilledShape),
        (None, true) => return Err(SceneError::MissingFill),
        (None, false) => None,
        (Some(value), true) => {
            let word = value.as_u64().ok_or(SceneError::BadPointFill)?;
            if word == u64::from(NONE_WORD) {
                None
            } else if word <= u64::from(WORD15_MAX) {
                Some(word as u16)
            } else {
                return Err(SceneError::BadPointFill);
            }
        }
    };

    // Strict presence: ink exists exactly when the stroke width is positive.
    let ink = match (style.get("ink"), stroke > 0.0) {
        (Some(_), false) => return Err(SceneError::InkWithoutStroke),
        (None, true) => return Err(SceneError::MissingInk),
        (None, false) => None,
        (Some(value), true) => {
            let word = value.as_u64().ok_or(SceneError::BadPointInk)?;
            if word > u64::from(WORD15_MAX) {
                return Err(SceneError::BadPointInk);
            }
            Some(word as u16)
        }
    };

    Ok(PointStyle {
        shape,
        size,
        stroke,
        fill,
        ink,
    })
}

fn parse_line_styles(value: &Value) -> Result<Vec<LineStyle>, SceneError> {
    let entries = value.as_array().ok_or(SceneError::LineStyleNotObject)?;
    if entries.len() > TABLE_LIMIT {
        return Err(SceneError::TooManyLineStyles);
    }
    entries
        .iter()
        .map(|entry| {
            let style = entry.as_object().ok_or(SceneError::LineStyleNotObject)?;
            let width = style
                .get("width")
                .and_then(Value::as_f64)
                .ok_or(SceneError::BadLineWidth)? as f32;
            if !width.is_finite() || width <= 0.0 {
                return Err(SceneError::BadLineWidth);
            }
            let color = style
                .get("color")
                .and_then(Value::as_u64)
                .ok_or(SceneError::BadLineColor)?;
            if color > u64::from(WORD15_MAX) {
                return Err(SceneError::BadLineColor);
            }
            Ok(LineStyle {
                width,
                color: color as u16,
            })
        })
        .collect()
}

fn parse_objects(value: &Value, tables: &Tables) -> Result<Vec<SceneObject>, SceneError> {
    let entries = value.as_array().ok_or(SceneError::SceneNotArray)?;
    if entries.is_empty() || entries.len() % 5 != 0 {
        return Err(SceneError::BadSceneCount);
    }
    if entries.len() / 5 > TABLE_LIMIT {
        return Err(SceneError::TooManyObjects);
    }
    let mut words = Vec::with_capacity(entries.len());
    for entry in entries {
        let word = entry.as_u64().ok_or(SceneError::SceneEntryRange)?;
        if word > u64::from(u16::MAX) {
            return Err(SceneError::SceneEntryRange);
        }
        words.push(word as u16);
    }
    words
        .chunks_exact(5)
        .map(|record| classify([record[0], record[1], record[2], record[3], record[4]], tables))
        .collect()
}

/// Classify a wire 5-tuple by its (b, c) sentinel pattern and validate every
/// reference against the loaded tables.
fn classify(record: [u16; 5], tables: &Tables) -> Result<SceneObject, SceneError> {
    let [a, b, c, d, e] = record;
    match (b == NONE_WORD, c == NONE_WORD) {
        // Point: single vertex plus a point style.
        (true, true) => {
            check_vertex(a, tables)?;
            if usize::from(e) >= tables.point_styles {
                return Err(SceneError::PointStyleIndexRange);
            }
            Ok(SceneObject::Point { vertex: a, style: e })
        }
        // Line: two vertices plus a line style.
        (false, true) => {
            check_vertex(a, tables)?;
            check_vertex(b, tables)?;
            check_line_style(e, tables)?;
            Ok(SceneObject::Line {
                start: a,
                end: b,
                style: e,
            })
        }
        // Sphere: vertex, radius, optional fill, optional outline.
        (true, false) => {
            check_vertex(a, tables)?;
            if usize::from(c) >= tables.radii {
                return Err(SceneError::RadiusIndexRange);
            }
            let fill = if d == NONE_WORD {
                None
            } else if d <= WORD15_MAX {
                Some(d)
            } else {
                return Err(SceneError::BadSphereFill);
            };
            let stroke = if e == NONE_WORD {
                None
            } else {
                check_line_style(e, tables)?;
                Some(e)
            };
            if fill.is_none() && stroke.is_none() {
                return Err(SceneError::SphereFullyTransparent);
            }
            Ok(SceneObject::Sphere {
                center: a,
                radius: c,
                fill,
                stroke,
            })
        }
        // Triangle: three vertices, a fill, three edge selectors.
        (false, false) => {
            check_vertex(a, tables)?;
            check_vertex(b, tables)?;
            check_vertex(c, tables)?;
            if d > WORD15_MAX {
                return Err(SceneError::TriangleFillRange);
            }
            if e > WORD15_MAX {
                return Err(SceneError::TriangleEdgeRange);
            }
            let edges = unpack_edges(e);
            for &selector in &edges {
                if selector > 0 && usize::from(selector - 1) >= tables.line_styles {
                    return Err(SceneError::TriangleEdgeStyleRange);
                }
            }
            Ok(SceneObject::Triangle {
                a,
                b,
                c,
                fill: d,
                edges,
            })
        }
    }
}

fn check_vertex(index: u16, tables: &Tables) -> Result<(), SceneError> {
    if usize::from(index) >= tables.vertices {
        return Err(SceneError::VertexIndexRange);
    }
    Ok(())
}

fn check_line_style(index: u16, tables: &Tables) -> Result<(), SceneError> {
    if usize::from(index) >= tables.line_styles {
        return Err(SceneError::LineStyleIndexRange);
    }
    Ok(())
}
