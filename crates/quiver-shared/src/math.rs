// math.rs — 3-D vector, matrix and angle math used by every subsystem

pub type Vec3 = [f32; 3];

/// Row-major 3x3 rotation matrix.
pub type Mat3 = [[f32; 3]; 3];

/// Row-major 3x4 transform: rotation in the left 3x3, translation in the
/// fourth column.
pub type Mat3x4 = [[f32; 4]; 3];

pub const VEC3_ORIGIN: Vec3 = [0.0, 0.0, 0.0];

// Angle indexes
pub const PITCH: usize = 0; // up / down
pub const YAW: usize = 1; // left / right
pub const ROLL: usize = 2; // fall over

// ============================================================
// Vector operations
// ============================================================

#[inline]
pub fn dot(a: &Vec3, b: &Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn add(a: &Vec3, b: &Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn subtract(a: &Vec3, b: &Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn scale(v: &Vec3, s: f32) -> Vec3 {
    [v[0] * s, v[1] * s, v[2] * s]
}

/// a + s * b
#[inline]
pub fn multiply_add(a: &Vec3, s: f32, b: &Vec3) -> Vec3 {
    [a[0] + s * b[0], a[1] + s * b[1], a[2] + s * b[2]]
}

#[inline]
pub fn inverse(v: &Vec3) -> Vec3 {
    [-v[0], -v[1], -v[2]]
}

pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn length(v: &Vec3) -> f32 {
    dot(v, v).sqrt()
}

/// Exact component-wise equality, no epsilon.
pub fn exactly_equal(a: &Vec3, b: &Vec3) -> bool {
    a[0] == b[0] && a[1] == b[1] && a[2] == b[2]
}

/// Normalize in place, returning the length before normalization.
/// A zero vector is left untouched and reports length 0.
pub fn normalize(v: &mut Vec3) -> f32 {
    let len = length(v);
    if len != 0.0 {
        let inv = 1.0 / len;
        v[0] *= inv;
        v[1] *= inv;
        v[2] *= inv;
    }
    len
}

/// Copying variant of [`normalize`].
pub fn normalized(v: &Vec3) -> (Vec3, f32) {
    let mut out = *v;
    let len = normalize(&mut out);
    (out, len)
}

// ============================================================
// Bounds
// ============================================================

/// Seed a bounding box with inverted sentinels so any point expands it.
pub fn clear_bounds(mins: &mut Vec3, maxs: &mut Vec3) {
    *mins = [99999.0; 3];
    *maxs = [-99999.0; 3];
}

pub fn add_point_to_bounds(v: &Vec3, mins: &mut Vec3, maxs: &mut Vec3) {
    for i in 0..3 {
        if v[i] < mins[i] {
            mins[i] = v[i];
        }
        if v[i] > maxs[i] {
            maxs[i] = v[i];
        }
    }
}

/// Per-axis clamp of `p` into the box; a point inside comes back unchanged.
pub fn closest_point_on_bounds(p: &Vec3, mins: &Vec3, maxs: &Vec3) -> Vec3 {
    let mut out = *p;
    for i in 0..3 {
        if mins[i] > p[i] {
            out[i] = mins[i];
        } else if maxs[i] < p[i] {
            out[i] = maxs[i];
        }
    }
    out
}

// ============================================================
// Matrix operations
// ============================================================

pub fn concat_rotations(in1: &Mat3, in2: &Mat3) -> Mat3 {
    let mut out = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            out[i][j] = in1[i][0] * in2[0][j] + in1[i][1] * in2[1][j] + in1[i][2] * in2[2][j];
        }
    }
    out
}

pub fn concat_transforms(in1: &Mat3x4, in2: &Mat3x4) -> Mat3x4 {
    let mut out = [[0.0; 4]; 3];
    for i in 0..3 {
        for j in 0..4 {
            out[i][j] = in1[i][0] * in2[0][j] + in1[i][1] * in2[1][j] + in1[i][2] * in2[2][j];
        }
        // translation column picks up this transform's own offset
        out[i][3] += in1[i][3];
    }
    out
}

// ============================================================
// Euler angles
// ============================================================

/// Build the forward/right/up basis for a set of Euler angles in degrees.
pub fn angle_vectors(angles: &Vec3) -> (Vec3, Vec3, Vec3) {
    let (sy, cy) = angles[YAW].to_radians().sin_cos();
    let (sp, cp) = angles[PITCH].to_radians().sin_cos();
    let (sr, cr) = angles[ROLL].to_radians().sin_cos();

    let forward = [cp * cy, cp * sy, -sp];
    let right = [
        -sr * sp * cy + -cr * -sy,
        -sr * sp * sy + -cr * cy,
        -sr * cp,
    ];
    let up = [
        cr * sp * cy + -sr * -sy,
        cr * sp * sy + -sr * cy,
        cr * cp,
    ];
    (forward, right, up)
}

/// Convert a direction vector to Euler angles. Roll is always 0; straight
/// up is pitch -90 and straight down (or the zero vector) pitch -270.
pub fn vec_to_angles(dir: &Vec3) -> Vec3 {
    let mut yaw;
    let mut pitch;

    if dir[0] == 0.0 && dir[1] == 0.0 {
        yaw = 0.0;
        pitch = if dir[2] > 0.0 { 90.0 } else { 270.0 };
    } else {
        yaw = if dir[0] != 0.0 {
            dir[1].atan2(dir[0]).to_degrees()
        } else if dir[1] > 0.0 {
            90.0
        } else {
            270.0
        };
        if yaw < 0.0 {
            yaw += 360.0;
        }

        let forward = (dir[0] * dir[0] + dir[1] * dir[1]).sqrt();
        pitch = dir[2].atan2(forward).to_degrees();
        if pitch < 0.0 {
            pitch += 360.0;
        }
    }

    [-pitch, yaw, 0.0]
}

/// Interpolate between two angles along the shortest arc.
pub fn lerp_angle(a2: f32, a1: f32, frac: f32) -> f32 {
    let mut a1 = a1;
    if a1 - a2 > 180.0 {
        a1 -= 360.0;
    }
    if a1 - a2 < -180.0 {
        a1 += 360.0;
    }
    a2 + frac * (a1 - a2)
}

/// Wrap an angle into [0, 360) on the 16-bit network quantization grid.
pub fn anglemod(a: f32) -> f32 {
    (360.0 / 65536.0) * (((a * (65536.0 / 360.0)) as i32) & 65535) as f32
}

#[inline]
pub fn angle_to_short(x: f32) -> i16 {
    (((x * 65536.0 / 360.0) as i32) & 65535) as i16
}

#[inline]
pub fn short_to_angle(x: i16) -> f32 {
    (x as f32) * (360.0 / 65536.0)
}

// ============================================================
// Axis/angle rotation and projection
// ============================================================

pub fn project_point_on_plane(p: &Vec3, normal: &Vec3) -> Vec3 {
    let inv_denom = 1.0 / dot(normal, normal);
    let d = dot(normal, p) * inv_denom;
    [
        p[0] - d * normal[0] * inv_denom,
        p[1] - d * normal[1] * inv_denom,
        p[2] - d * normal[2] * inv_denom,
    ]
}

/// A unit vector perpendicular to `src`. Assumes `src` is normalized.
pub fn perpendicular_vector(src: &Vec3) -> Vec3 {
    // find the smallest magnitude axially aligned vector
    let mut pos = 0;
    let mut min_elem = 1.0f32;
    for i in 0..3 {
        if src[i].abs() < min_elem {
            pos = i;
            min_elem = src[i].abs();
        }
    }
    let mut axis = VEC3_ORIGIN;
    axis[pos] = 1.0;

    // project it onto the plane defined by src and renormalize
    let mut dst = project_point_on_plane(&axis, src);
    normalize(&mut dst);
    dst
}

/// Rotate `point` around the axis `dir` (assumed normalized) by `degrees`.
pub fn rotate_point_around_vector(dir: &Vec3, point: &Vec3, degrees: f32) -> Vec3 {
    let vf = *dir;
    let vr = perpendicular_vector(dir);
    let vup = cross(&vr, &vf);

    // basis change into (vr, vup, vf) space
    let m: Mat3 = [
        [vr[0], vup[0], vf[0]],
        [vr[1], vup[1], vf[1]],
        [vr[2], vup[2], vf[2]],
    ];
    // the transpose is the inverse for an orthonormal basis
    let im: Mat3 = [
        [m[0][0], m[1][0], m[2][0]],
        [m[0][1], m[1][1], m[2][1]],
        [m[0][2], m[1][2], m[2][2]],
    ];

    let (sin, cos) = degrees.to_radians().sin_cos();
    let zrot: Mat3 = [[cos, sin, 0.0], [-sin, cos, 0.0], [0.0, 0.0, 1.0]];

    let rot = concat_rotations(&concat_rotations(&m, &zrot), &im);

    [
        rot[0][0] * point[0] + rot[0][1] * point[1] + rot[0][2] * point[2],
        rot[1][0] * point[0] + rot[1][1] * point[1] + rot[1][2] * point[2],
        rot[2][0] * point[0] + rot[2][1] * point[1] + rot[2][2] * point[2],
    ]
}

// ============================================================
// Integer helpers
// ============================================================

/// Floor of log2; 0 for any non-positive input.
pub fn log2_floor(val: i32) -> i32 {
    if val <= 0 {
        0
    } else {
        31 - val.leading_zeros() as i32
    }
}

// ============================================================
// Tests
// ============================================================
