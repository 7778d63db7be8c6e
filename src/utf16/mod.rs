// Copyright 2025 Gabriel Bjørnager Jensen.

mod test;

pub(crate) const LEAD_SURROGATE_MIN:  u16 = 0xD800;
pub(crate) const LEAD_SURROGATE_MAX:  u16 = 0xDBFF;
pub(crate) const TRAIL_SURROGATE_MIN: u16 = 0xDC00;
pub(crate) const TRAIL_SURROGATE_MAX: u16 = 0xDFFF;

#[inline(always)]
#[must_use]
pub(crate) const fn is_surrogate(c: u32) -> bool {
	c >= LEAD_SURROGATE_MIN as u32 && c <= TRAIL_SURROGATE_MAX as u32
}

#[inline(always)]
#[must_use]
pub(crate) const fn is_lead_surrogate(unit: u16) -> bool {
	unit >= LEAD_SURROGATE_MIN && unit <= LEAD_SURROGATE_MAX
}

#[inline(always)]
#[must_use]
pub(crate) const fn is_trail_surrogate(unit: u16) -> bool {
	unit >= TRAIL_SURROGATE_MIN && unit <= TRAIL_SURROGATE_MAX
}

/// Combines a surrogate pair into a single code point.
///
/// The units are not tested to actually be a lead and a trail surrogate.
#[inline]
#[must_use]
pub(crate) const fn combine_surrogates(lead: u16, trail: u16) -> u32 {
	let lead  = (lead  as u32).wrapping_sub(LEAD_SURROGATE_MIN  as u32);
	let trail = (trail as u32).wrapping_sub(TRAIL_SURROGATE_MIN as u32);

	(lead << 0xA).wrapping_add(trail).wrapping_add(0x10000)
}

/// Encodes `c` as one or two UTF-16 units.
///
/// The amount of written units is returned.
/// `c` is not tested to be a valid code point.
#[inline]
pub(crate) const fn encode_utf16(c: u32, buf: &mut [u16; 0x2]) -> usize {
	if c <= 0xFFFF {
		buf[0x0] = c as u16;

		0x1
	} else {
		let c = c.wrapping_sub(0x10000);

		buf[0x0] = (c >> 0xA)    as u16 | LEAD_SURROGATE_MIN;
		buf[0x1] = (c &  0x3FF)  as u16 | TRAIL_SURROGATE_MIN;

		0x2
	}
}
