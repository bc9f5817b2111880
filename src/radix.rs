use crate::error::{Error, assert};
use crate::wide::Limb;

/// Conversion parameters for one base.
///
/// Digits are grouped `digits_per_limb` at a time so the conversion loops
/// run one multi-digit step per limb instead of one step per digit.
#[derive(Copy, Clone, Debug)]
pub struct RadixInfo {
	pub base: Limb,
	/// Largest `k` such that `base ** k` fits a limb.
	pub digits_per_limb: usize,
	/// `base ** digits_per_limb`
	pub big_base: Limb,
}

impl RadixInfo {
	/// min_base() and up are valid base values.
	pub const fn min_base() -> usize {
		2
	}

	/// Returns the conversion parameters for the given base.
	pub fn get(base: usize) -> Result<RadixInfo, Error> {
		assert(base >= Self::min_base(), || {
			Error::new_invalid_base("RadixInfo::get: base must be at least 2")
		})?;
		Ok(Self::from_base(base as Limb))
	}

	/// Preconditions:
	/// - `base >= 2`
	pub(crate) fn from_base(base: Limb) -> RadixInfo {
		debug_assert!(base >= 2);
		let mut big_base = base;
		let mut digits_per_limb = 1;
		while let Some(m) = big_base.checked_mul(base) {
			big_base = m;
			digits_per_limb += 1;
		}
		RadixInfo { base, digits_per_limb, big_base }
	}

	/// Folds a run of digits (most significant first) into a single limb.
	/// Out-of-range digits (possible after a permissive `set`/`set_base`)
	/// fold in arithmetically rather than being rejected.
	///
	/// Preconditions:
	/// - `segment.len() <= digits_per_limb`
	pub(crate) fn parse_segment(&self, segment: &[u8]) -> Limb {
		debug_assert!(segment.len() <= self.digits_per_limb);
		let mut val: Limb = 0;
		for digit in segment {
			val = val.wrapping_mul(self.base).wrapping_add(*digit as Limb);
		}
		val
	}
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ErrorKind;

	#[test]
	fn test_get() {
		let info = RadixInfo::get(10).unwrap();
		assert_eq!(info.base, 10);
		assert_eq!(info.digits_per_limb, 19);
		assert_eq!(info.big_base, 10_000_000_000_000_000_000);

		let info = RadixInfo::get(2).unwrap();
		assert_eq!(info.digits_per_limb, 63);
		assert_eq!(info.big_base, 1 << 63);

		let info = RadixInfo::get(3).unwrap();
		assert_eq!(info.digits_per_limb, 40);
		assert_eq!(info.big_base, 3u64.pow(40));

		// 256**8 overflows a limb, so only 7 digits fit
		let info = RadixInfo::get(256).unwrap();
		assert_eq!(info.digits_per_limb, 7);
		assert_eq!(info.big_base, 1 << 56);
	}

	#[test]
	fn test_invalid_base() {
		assert_eq!(RadixInfo::get(0).unwrap_err().kind, ErrorKind::InvalidBase);
		assert_eq!(RadixInfo::get(1).unwrap_err().kind, ErrorKind::InvalidBase);
	}

	#[test]
	fn test_parse_segment() {
		let info = RadixInfo::get(10).unwrap();
		assert_eq!(info.parse_segment(&[]), 0);
		assert_eq!(info.parse_segment(&[7]), 7);
		assert_eq!(info.parse_segment(&[1, 3]), 13);
		assert_eq!(info.parse_segment(&[9, 0, 0]), 900);

		let info = RadixInfo::get(2).unwrap();
		assert_eq!(info.parse_segment(&[1, 1, 0, 1]), 13);
	}
}
