//! Length conversions to English Metric Units.
//!
//! DrawingML stores every offset and extent in EMU; font sizes are written
//! in hundredths of a point and paragraph spacing in hundredths of a point
//! as well.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64).round() as i64
}

#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

/// Point size as `a:rPr/@sz` or `a:spcPts/@val` (hundredths of a point).
#[inline]
pub fn pt_to_centipoints(pt: f64) -> i32 {
    (pt * 100.0).round() as i32
}
