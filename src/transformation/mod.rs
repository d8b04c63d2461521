//! Generation of triangle meshes.

pub use self::cuboid_to_trimesh::cuboid;
pub use self::sweep_surface::sweep_surface;

mod ball_to_trimesh;
mod cuboid_to_trimesh;
mod sweep_surface;
