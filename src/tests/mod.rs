//! Crate-level tests exercising the full render path against the raw
//! BMP bytes rather than the canvas API.
