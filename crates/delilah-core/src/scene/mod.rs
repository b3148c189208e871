//! Scene model: vertex, radius, and style tables plus the scene-object list.
//!
//! Scene objects reference vertices, radii, and styles by index, never by
//! pointer; the tables are immutable once loaded. On the wire each object is
//! a 5-tuple of 16-bit words with 0xFFFF as the "no value" sentinel; in
//! memory the tuple is lifted into [`SceneObject`] and the sentinels into
//! `Option` fields.

pub mod default_scene;
pub mod error;
pub mod parser;

pub use error::SceneError;

use glam::Vec3;
use serde_json::{Map, Value};

/// Wire sentinel meaning "no value" in object and style words.
pub(crate) const NONE_WORD: u16 = 0xFFFF;
/// Largest value that fits the 15-bit color and edge-selector fields.
pub(crate) const WORD15_MAX: u16 = 0x7FFF;

/// Glyph drawn for a point primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointShape {
    Circle,
    Square,
    Diamond,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
    Plus,
    Cross,
}

impl PointShape {
    /// Decode the one-letter wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "c" => Some(Self::Circle),
            "s" => Some(Self::Square),
            "m" => Some(Self::Diamond),
            "u" => Some(Self::TriangleUp),
            "d" => Some(Self::TriangleDown),
            "l" => Some(Self::TriangleLeft),
            "r" => Some(Self::TriangleRight),
            "p" => Some(Self::Plus),
            "x" => Some(Self::Cross),
            _ => None,
        }
    }

    /// The one-letter wire code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Circle => "c",
            Self::Square => "s",
            Self::Diamond => "m",
            Self::TriangleUp => "u",
            Self::TriangleDown => "d",
            Self::TriangleLeft => "l",
            Self::TriangleRight => "r",
            Self::Plus => "p",
            Self::Cross => "x",
        }
    }

    /// Whether the glyph encloses an area that can be filled. Plus and cross
    /// are bare line segments.
    pub fn fillable(self) -> bool {
        !matches!(self, Self::Plus | Self::Cross)
    }
}

/// Presentation of a point primitive.
///
/// `fill` is `Some` only for fillable shapes with a non-transparent fill, and
/// `ink` is `Some` exactly when `stroke` is positive; the parser enforces
/// both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointStyle {
    pub shape: PointShape,
    /// Bounding-box size in screen pixels; does not depth-attenuate.
    pub size: f32,
    /// Outline width in pixels; zero means no outline.
    pub stroke: f32,
    pub fill: Option<u16>,
    pub ink: Option<u16>,
}

/// Presentation of a line primitive or triangle edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub width: f32,
    pub color: u16,
}

/// One scene object, lifted from the 5-tuple wire format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneObject {
    Point {
        vertex: u16,
        style: u16,
    },
    Line {
        start: u16,
        end: u16,
        style: u16,
    },
    Sphere {
        center: u16,
        radius: u16,
        /// `None` renders the interior transparent.
        fill: Option<u16>,
        /// Line-style index for the outline; `None` leaves it unstroked.
        stroke: Option<u16>,
    },
    Triangle {
        a: u16,
        b: u16,
        c: u16,
        fill: u16,
        /// 5-bit selectors for edges a-b, b-c, c-a. Zero means no stroke;
        /// selector s strokes with line style s-1.
        edges: [u8; 3],
    },
}

impl SceneObject {
    /// Encode back to the wire 5-tuple.
    pub fn to_words(self) -> [u16; 5] {
        match self {
            Self::Point { vertex, style } => [vertex, NONE_WORD, NONE_WORD, 0, style],
            Self::Line { start, end, style } => [start, end, NONE_WORD, 0, style],
            Self::Sphere {
                center,
                radius,
                fill,
                stroke,
            } => [
                center,
                NONE_WORD,
                radius,
                fill.unwrap_or(NONE_WORD),
                stroke.unwrap_or(NONE_WORD),
            ],
            Self::Triangle {
                a,
                b,
                c,
                fill,
                edges,
            } => [a, b, c, fill, pack_edges(edges)],
        }
    }
}

/// Split a 15-bit edge word into its three 5-bit selectors, highest first.
pub(crate) fn unpack_edges(word: u16) -> [u8; 3] {
    [
        ((word >> 10) & 0x1F) as u8,
        ((word >> 5) & 0x1F) as u8,
        (word & 0x1F) as u8,
    ]
}

pub(crate) fn pack_edges(edges: [u8; 3]) -> u16 {
    (u16::from(edges[0]) << 10) | (u16::from(edges[1]) << 5) | u16::from(edges[2])
}

/// Validated scene tables. Immutable after load.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneStore {
    pub vertices: Vec<Vec3>,
    pub radii: Vec<f32>,
    pub objects: Vec<SceneObject>,
    pub point_styles: Vec<PointStyle>,
    pub line_styles: Vec<LineStyle>,
}

impl SceneStore {
    /// Serialize back to the scene-file JSON grammar. Optional tables are
    /// omitted when empty, matching what the parser accepts.
    pub fn to_json(&self) -> String {
        let mut root = Map::new();
        root.insert(
            "vertex".to_owned(),
            Value::Array(
                self.vertices
                    .iter()
                    .flat_map(|v| [v.x, v.y, v.z])
                    .map(|c| Value::from(f64::from(c)))
                    .collect(),
            ),
        );
        if !self.radii.is_empty() {
            root.insert(
                "radius".to_owned(),
                Value::Array(
                    self.radii
                        .iter()
                        .map(|&r| Value::from(f64::from(r)))
                        .collect(),
                ),
            );
        }
        root.insert(
            "scene".to_owned(),
            Value::Array(
                self.objects
                    .iter()
                    .flat_map(|o| o.to_words())
                    .map(Value::from)
                    .collect(),
            ),
        );
        if !self.point_styles.is_empty() {
            root.insert(
                "pstyle".to_owned(),
                Value::Array(self.point_styles.iter().map(point_style_json).collect()),
            );
        }
        if !self.line_styles.is_empty() {
            root.insert(
                "lstyle".to_owned(),
                Value::Array(self.line_styles.iter().map(line_style_json).collect()),
            );
        }
        Value::Object(root).to_string()
    }
}

fn point_style_json(style: &PointStyle) -> Value {
    let mut map = Map::new();
    map.insert("shape".to_owned(), Value::from(style.shape.code()));
    map.insert("size".to_owned(), Value::from(f64::from(style.size)));
    map.insert("stroke".to_owned(), Value::from(f64::from(style.stroke)));
    if style.shape.fillable() {
        map.insert(
            "fill".to_owned(),
            Value::from(style.fill.unwrap_or(NONE_WORD)),
        );
    }
    if let Some(ink) = style.ink {
        map.insert("ink".to_owned(), Value::from(ink));
    }
    Value::Object(map)
}

fn line_style_json(style: &LineStyle) -> Value {
    let mut map = Map::new();
    map.insert("width".to_owned(), Value::from(f64::from(style.width)));
    map.insert("color".to_owned(), Value::from(style.color));
    Value::Object(map)
}
