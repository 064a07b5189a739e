// src/vector.rs

use crate::error::PhysicsError;
use nalgebra::Vector3;

pub type Vec3 = Vector3<f64>;

/// Checked operations on [`Vec3`] that the physics core relies on.
///
/// nalgebra already covers the total operations (addition, subtraction,
/// `dot`, scalar multiplication, `norm`). The ones here can fail and return
/// [`PhysicsError`] instead of producing NaN or infinity.
pub trait VectorOps {
    /// Component-wise quotient by a scalar.
    fn try_div(&self, s: f64) -> Result<Vec3, PhysicsError>;

    /// Unit vector in the direction of `self`.
    fn try_unit(&self) -> Result<Vec3, PhysicsError>;

    /// Component access by index 0, 1 or 2.
    fn component(&self, index: usize) -> Result<f64, PhysicsError>;
}

impl VectorOps for Vec3 {
    fn try_div(&self, s: f64) -> Result<Vec3, PhysicsError> {
        if s == 0.0 {
            return Err(PhysicsError::DivisionByZero);
        }
        Ok(self / s)
    }

    fn try_unit(&self) -> Result<Vec3, PhysicsError> {
        let magnitude = self.norm();
        if magnitude == 0.0 {
            return Err(PhysicsError::DegenerateVector);
        }
        Ok(self / magnitude)
    }

    fn component(&self, index: usize) -> Result<f64, PhysicsError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(PhysicsError::IndexOutOfRange { index }),
        }
    }
}
