//! Scene-file rejection reasons.
//!
//! Each variant carries the single human-readable message reported through
//! `Engine::last_error`. Messages are capitalized with no trailing
//! punctuation. A rejected load never mutates the current scene.

/// Why a scene file was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("Not a valid JSON file")]
    NotJson,

    #[error("Scene file must be a JSON object")]
    RootNotObject,

    #[error("Scene file requires a vertex array")]
    MissingVertices,
    #[error("Vertex table must be an array of numbers")]
    VertexNotNumber,
    #[error("Vertex coordinates must be finite")]
    VertexNotFinite,
    #[error("Vertex array length must be a positive multiple of three")]
    BadVertexCount,
    #[error("Too many vertices")]
    TooManyVertices,

    #[error("Radius table must be an array of numbers")]
    RadiusNotNumber,
    #[error("Radius values must be finite and positive")]
    BadRadius,
    #[error("Too many radii")]
    TooManyRadii,

    #[error("Scene file requires a scene array")]
    MissingScene,
    #[error("Scene table must be an array of integers")]
    SceneNotArray,
    #[error("Scene entries must be integers between 0 and 65535")]
    SceneEntryRange,
    #[error("Scene array length must be a positive multiple of five")]
    BadSceneCount,
    #[error("Too many scene objects")]
    TooManyObjects,

    #[error("Point styles must be JSON objects")]
    PointStyleNotObject,
    #[error("Too many point styles")]
    TooManyPointStyles,
    #[error("Point style shape must be one of c s m u d l r p x")]
    BadPointShape,
    #[error("Point style size must be a positive finite number")]
    BadPointSize,
    #[error("Point style stroke must be a non-negative finite number")]
    BadPointStroke,
    #[error("Point style may not have fill for unfilled shapes")]
    FillOnUnfilledShape,
    #[error("Point style requires fill for filled shapes")]
    MissingFill,
    #[error("Point style fill must be a 15-bit color or transparent")]
    BadPointFill,
    #[error("Point style may not have ink without a stroke")]
    InkWithoutStroke,
    #[error("Point style requires ink when stroke is positive")]
    MissingInk,
    #[error("Point style ink must be a 15-bit color")]
    BadPointInk,

    #[error("Line styles must be JSON objects")]
    LineStyleNotObject,
    #[error("Too many line styles")]
    TooManyLineStyles,
    #[error("Line style width must be a positive finite number")]
    BadLineWidth,
    #[error("Line style color must be a 15-bit color")]
    BadLineColor,

    #[error("Scene object references a vertex that does not exist")]
    VertexIndexRange,
    #[error("Scene object references a radius that does not exist")]
    RadiusIndexRange,
    #[error("Scene object references a point style that does not exist")]
    PointStyleIndexRange,
    #[error("Scene object references a line style that does not exist")]
    LineStyleIndexRange,

    #[error("Triangle fill color must fit in fifteen bits")]
    TriangleFillRange,
    #[error("Triangle edge selectors must fit in fifteen bits")]
    TriangleEdgeRange,
    #[error("Triangle edge references a line style that does not exist")]
    TriangleEdgeStyleRange,

    #[error("Sphere fill must be a 15-bit color or transparent")]
    BadSphereFill,
    #[error("Spheres may not be fully transparent")]
    SphereFullyTransparent,
}
