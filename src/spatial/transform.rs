use crate::math::{inverse_safe, ElementWise, Matrix3, Matrix4, One, Quaternion, SquareMatrix, Vector3};

/// `Transform` is used to store and manipulate the postiion, rotation and scale
/// of the object, relative to its parent. The rotation is expected to be a unit
/// quaternion; it is never renormalized here.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub scale: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Quaternion::one(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Transforms point from local space to parent's space, aka. scale, then
    /// rotate, then translate.
    #[inline]
    pub fn transform_point<T>(&self, v: T) -> Vector3<f32>
    where
        T: Into<Vector3<f32>>,
    {
        let v: Vector3<f32> = v.into();
        self.rotation * v.mul_element_wise(self.scale) + self.position
    }

    /// Transforms point from parent's space into local space. This is the
    /// inverse of `transform_point`, except that scale components below
    /// `epsilon` collapse the axis to zero.
    #[inline]
    pub fn inverse_transform_point<T>(&self, v: T, epsilon: f32) -> Vector3<f32>
    where
        T: Into<Vector3<f32>>,
    {
        let v: Vector3<f32> = v.into();
        let v = self.rotation.conjugate() * (v - self.position);
        v.mul_element_wise(inverse_safe(self.scale, epsilon))
    }

    /// Returns the rotation and scale part, `R * S`.
    #[inline]
    pub fn rotation_scale_matrix(&self) -> Matrix3<f32> {
        Matrix3::from(self.rotation) * Matrix3::from_diagonal(self.scale)
    }

    /// Returns the matrix representation, `T * R * S`.
    #[inline]
    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from(self.rotation)
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    /// Returns the matrix representation without scale, `T * R`.
    #[inline]
    pub fn rt_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position) * Matrix4::from(self.rotation)
    }
}
