// plane.rs — plane classification for BSP spatial partitioning

use crate::math::{dot, Vec3};

// Plane axis classification: 0-2 are axial, 3-5 pick the dominant axis of a
// non-axial normal.
pub const PLANE_X: u8 = 0;
pub const PLANE_Y: u8 = 1;
pub const PLANE_Z: u8 = 2;
pub const PLANE_ANY_X: u8 = 3;
pub const PLANE_ANY_Y: u8 = 4;
pub const PLANE_ANY_Z: u8 = 5;

bitflags::bitflags! {
    /// Which side(s) of a plane a box touches.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PlaneSides: u8 {
        const FRONT = 1;
        const BACK = 2;
        const CROSSING = Self::FRONT.bits() | Self::BACK.bits();
    }
}

/// A splitting plane, as stored in BSP nodes.
///
/// `signbits` carries one bit per negative normal component, precomputed at
/// load time so the box test can select corners without inspecting the
/// normal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plane {
    pub normal: Vec3,
    pub dist: f32,
    pub kind: u8,
    pub signbits: u8,
}

/// One bit per negative normal component, the corner-selection index used
/// by [`Plane::box_side`].
pub fn signbits_for_normal(normal: &Vec3) -> u8 {
    let mut bits = 0;
    for i in 0..3 {
        if normal[i] < 0.0 {
            bits |= 1 << i;
        }
    }
    bits
}

/// Axis classification for a normal: exact unit axes map to the axial
/// kinds, anything else to the dominant-axis kinds.
pub fn kind_for_normal(normal: &Vec3) -> u8 {
    if normal[0] == 1.0 {
        PLANE_X
    } else if normal[1] == 1.0 {
        PLANE_Y
    } else if normal[2] == 1.0 {
        PLANE_Z
    } else {
        let ax = normal[0].abs();
        let ay = normal[1].abs();
        let az = normal[2].abs();
        if ax >= ay && ax >= az {
            PLANE_ANY_X
        } else if ay >= az {
            PLANE_ANY_Y
        } else {
            PLANE_ANY_Z
        }
    }
}

#[inline]
fn dot3(n: &Vec3, x: f32, y: f32, z: f32) -> f32 {
    n[0] * x + n[1] * y + n[2] * z
}

impl Plane {
    /// Build a plane from a normal and distance, classifying the axis and
    /// precomputing the sign bits.
    pub fn new(normal: Vec3, dist: f32) -> Self {
        Self {
            normal,
            dist,
            kind: kind_for_normal(&normal),
            signbits: signbits_for_normal(&normal),
        }
    }

    /// Classify an axis-aligned box against this plane.
    ///
    /// Axial planes compare `dist` directly against the box extent on that
    /// axis. Non-axial planes use `signbits` to pick the box corner
    /// farthest along the normal (dist1) and the one nearest (dist2); the
    /// two corner distances against `dist` decide front, back or both.
    pub fn box_side(&self, emins: &Vec3, emaxs: &Vec3) -> PlaneSides {
        // fast axial cases
        if self.kind < 3 {
            let t = self.kind as usize;
            if self.dist <= emins[t] {
                return PlaneSides::FRONT;
            }
            if self.dist >= emaxs[t] {
                return PlaneSides::BACK;
            }
            return PlaneSides::CROSSING;
        }

        // general case: a set bit means the normal component is negative,
        // so mins is the far corner on that axis
        let n = &self.normal;
        let (dist1, dist2) = match self.signbits {
            0 => (
                dot3(n, emaxs[0], emaxs[1], emaxs[2]),
                dot3(n, emins[0], emins[1], emins[2]),
            ),
            1 => (
                dot3(n, emins[0], emaxs[1], emaxs[2]),
                dot3(n, emaxs[0], emins[1], emins[2]),
            ),
            2 => (
                dot3(n, emaxs[0], emins[1], emaxs[2]),
                dot3(n, emins[0], emaxs[1], emins[2]),
            ),
            3 => (
                dot3(n, emins[0], emins[1], emaxs[2]),
                dot3(n, emaxs[0], emaxs[1], emins[2]),
            ),
            4 => (
                dot3(n, emaxs[0], emaxs[1], emins[2]),
                dot3(n, emins[0], emins[1], emaxs[2]),
            ),
            5 => (
                dot3(n, emins[0], emaxs[1], emins[2]),
                dot3(n, emaxs[0], emins[1], emaxs[2]),
            ),
            6 => (
                dot3(n, emaxs[0], emins[1], emins[2]),
                dot3(n, emins[0], emaxs[1], emaxs[2]),
            ),
            7 => (
                dot3(n, emins[0], emins[1], emins[2]),
                dot3(n, emaxs[0], emaxs[1], emaxs[2]),
            ),
            _ => (0.0, 0.0),
        };

        let mut sides = PlaneSides::empty();
        if dist1 >= self.dist {
            sides |= PlaneSides::FRONT;
        }
        if dist2 < self.dist {
            sides |= PlaneSides::BACK;
        }
        sides
    }

    /// The general corner-selection form the fast test was derived from.
    /// Inspects the normal directly instead of `signbits`.
    pub fn box_side_slow(&self, emins: &Vec3, emaxs: &Vec3) -> PlaneSides {
        let mut far = [0.0f32; 3];
        let mut near = [0.0f32; 3];
        for i in 0..3 {
            if self.normal[i] < 0.0 {
                far[i] = emins[i];
                near[i] = emaxs[i];
            } else {
                far[i] = emaxs[i];
                near[i] = emins[i];
            }
        }

        let dist1 = dot(&self.normal, &far) - self.dist;
        let dist2 = dot(&self.normal, &near) - self.dist;

        let mut sides = PlaneSides::empty();
        if dist1 >= 0.0 {
            sides |= PlaneSides::FRONT;
        }
        if dist2 < 0.0 {
            sides |= PlaneSides::BACK;
        }
        sides
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::normalize;

    const UNIT_MINS: Vec3 = [-1.0, -1.0, -1.0];
    const UNIT_MAXS: Vec3 = [1.0, 1.0, 1.0];

    #[test]
    fn signbits_match_negative_components() {
        assert_eq!(signbits_for_normal(&[1.0, 1.0, 1.0]), 0);
        assert_eq!(signbits_for_normal(&[-1.0, 1.0, 1.0]), 1);
        assert_eq!(signbits_for_normal(&[1.0, -1.0, 1.0]), 2);
        assert_eq!(signbits_for_normal(&[-1.0, 0.5, -0.5]), 5);
        assert_eq!(signbits_for_normal(&[-1.0, -1.0, -1.0]), 7);
    }

    #[test]
    fn kind_classifies_axial_and_dominant() {
        assert_eq!(kind_for_normal(&[1.0, 0.0, 0.0]), PLANE_X);
        assert_eq!(kind_for_normal(&[0.0, 1.0, 0.0]), PLANE_Y);
        assert_eq!(kind_for_normal(&[0.0, 0.0, 1.0]), PLANE_Z);
        // a negated axis is not axial for the fast path
        assert_eq!(kind_for_normal(&[-1.0, 0.0, 0.0]), PLANE_ANY_X);
        assert_eq!(kind_for_normal(&[0.1, 0.9, 0.2]), PLANE_ANY_Y);
        assert_eq!(kind_for_normal(&[0.1, 0.2, -0.9]), PLANE_ANY_Z);
    }

    #[test]
    fn axial_box_side() {
        let behind = Plane::new([1.0, 0.0, 0.0], 5.0);
        assert_eq!(behind.box_side(&UNIT_MINS, &UNIT_MAXS), PlaneSides::BACK);

        let ahead = Plane::new([1.0, 0.0, 0.0], -5.0);
        assert_eq!(ahead.box_side(&UNIT_MINS, &UNIT_MAXS), PlaneSides::FRONT);

        let through = Plane::new([1.0, 0.0, 0.0], 0.0);
        assert_eq!(
            through.box_side(&UNIT_MINS, &UNIT_MAXS),
            PlaneSides::CROSSING
        );
    }

    #[test]
    fn axial_box_side_touching_face_counts_as_one_side() {
        let p = Plane::new([0.0, 0.0, 1.0], 1.0);
        // dist == maxs[2], not strictly inside
        assert_eq!(p.box_side(&UNIT_MINS, &UNIT_MAXS), PlaneSides::BACK);

        let p = Plane::new([0.0, 0.0, 1.0], -1.0);
        assert_eq!(p.box_side(&UNIT_MINS, &UNIT_MAXS), PlaneSides::FRONT);
    }

    #[test]
    fn diagonal_box_side() {
        let mut n = [1.0, 1.0, 0.0];
        normalize(&mut n);

        let behind = Plane::new(n, 10.0);
        assert_eq!(behind.box_side(&UNIT_MINS, &UNIT_MAXS), PlaneSides::BACK);

        let ahead = Plane::new(n, -10.0);
        assert_eq!(ahead.box_side(&UNIT_MINS, &UNIT_MAXS), PlaneSides::FRONT);

        let through = Plane::new(n, 0.0);
        assert_eq!(
            through.box_side(&UNIT_MINS, &UNIT_MAXS),
            PlaneSides::CROSSING
        );
    }

    #[test]
    fn negative_normal_uses_signbits() {
        // plane x = 5 facing -x
        let p = Plane::new([-1.0, 0.0, 0.0], -5.0);
        assert_eq!(p.signbits, 1);
        assert_eq!(p.box_side(&[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0]), PlaneSides::FRONT);
        assert_eq!(p.box_side(&[8.0, 0.0, 0.0], &[9.0, 1.0, 1.0]), PlaneSides::BACK);
    }

    #[test]
    fn fast_and_slow_agree() {
        let normals = [
            [0.6, 0.8, 0.0],
            [-0.6, 0.8, 0.0],
            [0.6, -0.8, 0.0],
            [-0.267, -0.535, 0.802],
            [0.577, 0.577, -0.577],
            [-0.577, -0.577, -0.577],
        ];
        let boxes = [
            ([-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]),
            ([4.0, 4.0, 4.0], [6.0, 8.0, 6.0]),
            ([-10.0, -2.0, 3.0], [-6.0, 2.0, 5.0]),
        ];
        for n in normals {
            for dist in [-4.0, 0.0, 3.5] {
                let p = Plane::new(n, dist);
                for (mins, maxs) in boxes {
                    assert_eq!(
                        p.box_side(&mins, &maxs),
                        p.box_side_slow(&mins, &maxs),
                        "plane {:?} dist {} box {:?}..{:?}",
                        n,
                        dist,
                        mins,
                        maxs
                    );
                }
            }
        }
    }

    #[test]
    fn result_is_never_empty() {
        let p = Plane::new([0.707, -0.707, 0.0], 2.0);
        for (mins, maxs) in [
            ([-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]),
            ([100.0, 100.0, 100.0], [101.0, 101.0, 101.0]),
            ([-101.0, -101.0, -101.0], [-100.0, -100.0, -100.0]),
        ] {
            assert!(!p.box_side(&mins, &maxs).is_empty());
        }
    }

    #[test]
    fn out_of_range_signbits_still_pick_a_side() {
        // corrupt sign bits hit the dist1 = dist2 = 0 fallback, which must
        // still classify against dist rather than return nothing
        let p = Plane {
            normal: [0.6, 0.8, 0.0],
            dist: -1.0,
            kind: PLANE_ANY_X,
            signbits: 8,
        };
        assert_eq!(p.box_side(&UNIT_MINS, &UNIT_MAXS), PlaneSides::FRONT);

        let p = Plane { dist: 1.0, ..p };
        assert_eq!(p.box_side(&UNIT_MINS, &UNIT_MAXS), PlaneSides::BACK);
        assert!(!p.box_side(&UNIT_MINS, &UNIT_MAXS).is_empty());
    }
}
