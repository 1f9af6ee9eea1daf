//! WGSL source for the rain pipeline.

/// Vertex + fragment shader for droplet sprites.
///
/// Entry points: `vs_main` (instance = droplet, 6 vertices) and `fs_main`.
pub const RAIN_WGSL: &str = include_str!("rain.wgsl");

/// Vertex entry point name.
pub const VERTEX_ENTRY: &str = "vs_main";
/// Fragment entry point name.
pub const FRAGMENT_ENTRY: &str = "fs_main";
/// Vertices drawn per droplet (two triangles).
pub const VERTICES_PER_DROPLET: u32 = 6;
