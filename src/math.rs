use bevy::math::Vec2;

/// Scalar used by the force model. Pressures reach 10^8 Pa, so the model
/// stays in double precision and only drops to `f32` for drawing.
pub type Real = f64;

pub type Point = Vec2;

pub const PA_PER_MPA: Real = 1_000_000.0;
pub const N_PER_KN: Real = 1_000.0;
pub const CM2_PER_M2: Real = 10_000.0;

#[inline(always)]
pub fn mpa_to_pa(mpa: Real) -> Real {
    mpa * PA_PER_MPA
}

#[inline(always)]
pub fn pa_to_mpa(pa: Real) -> Real {
    pa / PA_PER_MPA
}

#[inline(always)]
pub fn newtons_to_kn(newtons: Real) -> Real {
    newtons / N_PER_KN
}

#[inline(always)]
pub fn m2_to_cm2(area: Real) -> Real {
    area * CM2_PER_M2
}

/// Ratio that treats a zero denominator as "no load" instead of NaN.
#[inline(always)]
pub fn safe_ratio(numerator: Real, denominator: Real) -> Real {
    if denominator == 0.0 { 0.0 } else { numerator / denominator }
}

