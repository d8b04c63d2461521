use crate::mass_properties::MassProperties;
use crate::math::{AngularInertia, Matrix, Point, Real, Vector};
use num::Zero;

/// The covariance matrix of the canonical tetrahedron `(0, x, y, z)` with unit density.
pub fn canonical_tetrahedron_covariance() -> Matrix {
    Matrix::new(2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0) / 120.0
}

impl MassProperties {
    /// Computes the mass properties of a closed triangle mesh.
    ///
    /// Each face forms, together with the local origin, a signed tetrahedron. The canonical
    /// tetrahedron covariance is mapped through each face's linear map `[a|b|c]` and
    /// accumulated, weighted by the map's determinant.
    ///
    /// The mesh must be closed and its faces wound counter-clockwise when seen from outside.
    /// Otherwise the result is meaningless (possibly with a negative volume).
    pub fn from_trimesh(vertices: &[Point], indices: impl IntoIterator<Item = [u32; 3]>) -> Self {
        let canonical = canonical_tetrahedron_covariance();

        let mut six_volume: Real = 0.0;
        let mut weighted_com = Vector::zeros();
        let mut covariance = Matrix::zeros();

        for idx in indices {
            let a = vertices[idx[0] as usize].coords;
            let b = vertices[idx[1] as usize].coords;
            let c = vertices[idx[2] as usize].coords;

            let map = Matrix::from_columns(&[a, b, c]);
            let det = map.determinant();

            six_volume += det;
            weighted_com += (a + b + c) * det;
            covariance += map * canonical * map.transpose() * det;
        }

        if six_volume.is_zero() {
            log::warn!("Computing the mass properties of a mesh with zero volume.");
            return MassProperties::zero();
        }

        if six_volume < 0.0 {
            log::warn!(
                "Computing the mass properties of a mesh with a negative volume ({}).",
                six_volume / 6.0
            );
        }

        let local_com = Point::from(weighted_com / (4.0 * six_volume));
        let inertia = AngularInertia::identity() * covariance.trace() - covariance;

        MassProperties::new(six_volume / 6.0, local_com, inertia)
    }
}

#[cfg(test)]
mod test {
    use crate::mass_properties::MassProperties;
    use crate::math::{AngularInertia, Point, Real, Vector};
    use crate::transformation;

    #[test]
    fn unit_cube_mass_properties() {
        let (vertices, indices) = transformation::cuboid(&Vector::repeat(0.5));
        let props = MassProperties::from_trimesh(&vertices, indices);

        assert_relative_eq!(props.volume, 1.0, epsilon = 1.0e-6);
        assert_relative_eq!(props.local_com, Point::origin(), epsilon = 1.0e-6);
        assert_relative_eq!(
            props.inertia,
            AngularInertia::identity() / 6.0,
            epsilon = 1.0e-6
        );
    }

    #[test]
    fn offset_cube_center_of_mass() {
        let (mut vertices, indices) = transformation::cuboid(&Vector::new(1.0, 0.5, 0.25));
        let shift = Vector::new(3.0, -2.0, 1.0);
        vertices.iter_mut().for_each(|pt| *pt += shift);

        let props = MassProperties::from_trimesh(&vertices, indices);
        assert_relative_eq!(props.volume, 1.0, epsilon = 1.0e-5);
        assert_relative_eq!(props.local_com, Point::from(shift), epsilon = 1.0e-5);
    }

    #[test]
    fn inverted_cube_has_negative_volume() {
        let (vertices, indices) = transformation::cuboid(&Vector::repeat(0.5));
        let flipped = indices.into_iter().map(|[a, b, c]| [a, c, b]);
        let props = MassProperties::from_trimesh(&vertices, flipped);
        assert_relative_eq!(props.volume, -1.0 as Real, epsilon = 1.0e-6);
    }
}
