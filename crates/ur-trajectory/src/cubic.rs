//! 三次 Hermite 段插值
//!
//! 每个关节独立使用三次多项式：
//!
//! ```text
//! f(t) = a + b·t + c·t² + d·t³
//!
//! a = p0
//! b = v0
//! c = (-3·p0 + 3·p1 - 2·T·v0 - T·v1) / T²
//! d = ( 2·p0 - 2·p1 +   T·v0 + T·v1) / T³
//! ```
//!
//! 边界条件：`f(0) = p0`、`f(T) = p1`、`f'(0) = v0`、`f'(T) = v1`。
//! 相邻段在路点处位置和速度均连续，避免速度 / 力矩突变。
//!
//! 与归一化时间的形式不同，这里直接使用物理时间 `t ∈ [0, T]`，
//! 速度单位为 rad/s，无需再做时间缩放。

use crate::trajectory::JointVector;

/// 单关节三次多项式系数
#[derive(Debug, Clone, Copy, PartialEq)]
struct CubicCoeffs {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl CubicCoeffs {
    /// 由边界条件计算系数
    fn hermite(duration: f64, p0: f64, p1: f64, v0: f64, v1: f64) -> Self {
        let t = duration;
        Self {
            a: p0,
            b: v0,
            c: (-3.0 * p0 + 3.0 * p1 - 2.0 * t * v0 - t * v1) / t.powi(2),
            d: (2.0 * p0 - 2.0 * p1 + t * v0 + t * v1) / t.powi(3),
        }
    }

    fn position(&self, t: f64) -> f64 {
        self.a + self.b * t + self.c * t * t + self.d * t * t * t
    }

    fn velocity(&self, t: f64) -> f64 {
        self.b + 2.0 * self.c * t + 3.0 * self.d * t * t
    }
}

/// 前置条件检查
///
/// 段时长非正或向量长度不一致属于调用方的编程错误（重采样器在校验后的
/// 轨迹上永远不会触发），直接 panic，避免静默产生 NaN / inf。
fn assert_segment(duration: f64, p0: &[f64], p1: &[f64], v0: &[f64], v1: &[f64]) {
    assert!(
        duration > 0.0 && duration.is_finite(),
        "segment duration must be finite and positive, got: {}",
        duration
    );
    assert!(
        p1.len() == p0.len() && v0.len() == p0.len() && v1.len() == p0.len(),
        "joint vector length mismatch: p0={}, p1={}, v0={}, v1={}",
        p0.len(),
        p1.len(),
        v0.len(),
        v1.len()
    );
}

fn per_joint<F>(
    duration: f64,
    p0: &[f64],
    p1: &[f64],
    v0: &[f64],
    v1: &[f64],
    eval: F,
) -> JointVector
where
    F: Fn(&CubicCoeffs) -> f64,
{
    assert_segment(duration, p0, p1, v0, v1);

    p0.iter()
        .zip(p1)
        .zip(v0.iter().zip(v1))
        .map(|((&p0, &p1), (&v0, &v1))| eval(&CubicCoeffs::hermite(duration, p0, p1, v0, v1)))
        .collect()
}

/// 计算段内局部时间 `t` 处的关节位置
///
/// # 参数
///
/// - `t`: 段内局部时间，`t ∈ [0, duration]`
/// - `duration`: 段时长 `T`（秒），必须为正
/// - `p0` / `v0`: 段起点的位置 / 速度
/// - `p1` / `v1`: 段终点的位置 / 速度
///
/// # Panics
///
/// `duration <= 0`、非有限，或四个向量长度不一致时 panic。
///
/// # 示例
///
/// ```rust
/// use ur_trajectory::interpolate;
///
/// let p = interpolate(0.5, 1.0, &[0.0], &[1.0], &[0.0], &[0.0]);
/// assert_eq!(p[0], 0.5);
/// ```
pub fn interpolate(
    t: f64,
    duration: f64,
    p0: &[f64],
    p1: &[f64],
    v0: &[f64],
    v1: &[f64],
) -> JointVector {
    per_joint(duration, p0, p1, v0, v1, |coeffs| coeffs.position(t))
}

/// 计算段内局部时间 `t` 处的关节速度（`interpolate` 的解析导数）
///
/// 前置条件与 [`interpolate`] 相同。
pub fn interpolate_velocity(
    t: f64,
    duration: f64,
    p0: &[f64],
    p1: &[f64],
    v0: &[f64],
    v1: &[f64],
) -> JointVector {
    per_joint(duration, p0, p1, v0, v1, |coeffs| coeffs.velocity(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hermite_coeffs_unit_segment() {
        let coeffs = CubicCoeffs::hermite(1.0, 0.0, 1.0, 0.0, 0.0);
        assert_eq!(
            coeffs,
            CubicCoeffs {
                a: 0.0,
                b: 0.0,
                c: 3.0,
                d: -2.0,
            }
        );
    }

    #[test]
    fn test_midpoint_zero_velocity() {
        // f(0.5) = 0 + 0 + 3·0.25 - 2·0.125 = 0.5
        let p = interpolate(0.5, 1.0, &[0.0; 6], &[1.0; 6], &[0.0; 6], &[0.0; 6]);
        assert_eq!(p.len(), 6);
        for value in p {
            assert_eq!(value, 0.5);
        }
    }

    #[test]
    fn test_constant_segment() {
        let p0 = [0.3, -1.2, 2.0, 0.0, 1.0, -0.7];
        for i in 0..=20 {
            let t = 2.0 * i as f64 / 20.0;
            let p = interpolate(t, 2.0, &p0, &p0, &[0.0; 6], &[0.0; 6]);
            for (joint, value) in p.iter().enumerate() {
                assert!((value - p0[joint]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_boundary_conditions_nonzero_velocity() {
        let p0 = [0.0, 1.0];
        let p1 = [2.0, -1.0];
        let v0 = [0.5, -0.3];
        let v1 = [-1.0, 0.8];
        let duration = 0.75;

        let start = interpolate(0.0, duration, &p0, &p1, &v0, &v1);
        let end = interpolate(duration, duration, &p0, &p1, &v0, &v1);
        let start_vel = interpolate_velocity(0.0, duration, &p0, &p1, &v0, &v1);
        let end_vel = interpolate_velocity(duration, duration, &p0, &p1, &v0, &v1);

        for joint in 0..2 {
            assert!((start[joint] - p0[joint]).abs() < 1e-12);
            assert!((end[joint] - p1[joint]).abs() < 1e-12);
            assert!((start_vel[joint] - v0[joint]).abs() < 1e-12);
            assert!((end_vel[joint] - v1[joint]).abs() < 1e-12);
        }
    }

    #[test]
    #[should_panic(expected = "segment duration must be finite and positive")]
    fn test_zero_duration_panics() {
        interpolate(0.0, 0.0, &[0.0], &[1.0], &[0.0], &[0.0]);
    }

    #[test]
    #[should_panic(expected = "segment duration must be finite and positive")]
    fn test_negative_duration_panics() {
        interpolate(0.0, -1.0, &[0.0], &[1.0], &[0.0], &[0.0]);
    }

    #[test]
    #[should_panic(expected = "joint vector length mismatch")]
    fn test_length_mismatch_panics() {
        interpolate(0.0, 1.0, &[0.0, 0.0], &[1.0], &[0.0], &[0.0]);
    }
}
