use smallvec::SmallVec;

use crate::error::{Error, assert};
use crate::radix::RadixInfo;

pub type Limb = u64;
type Double = u128;

const LIMB_BITS: u32 = Limb::BITS;

/// 10**19, the largest power of ten that fits a limb.
const DEC_BIG_BASE: Limb = 10_000_000_000_000_000_000;
const DEC_DIGITS_PER_LIMB: usize = 19;

/// Non-negative arbitrary-precision magnitude.
///
/// Limbs are stored little-endian. The highest limb is non-zero;
/// zero is the empty vector.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Wide {
	limbs: SmallVec<[Limb; 4]>,
}

impl Wide {
	pub fn zero() -> Self {
		Self { limbs: SmallVec::new() }
	}

	pub fn from_u64(value: Limb) -> Self {
		let mut limbs = SmallVec::new();
		if value != 0 {
			limbs.push(value);
		}
		Self { limbs }
	}

	pub fn is_zero(&self) -> bool {
		self.limbs.is_empty()
	}

	/// `self = self * m + a`
	pub fn mul_add(&mut self, m: Limb, a: Limb) {
		let mut carry = a as Double;
		for limb in self.limbs.iter_mut() {
			let t = (*limb as Double) * (m as Double) + carry;
			*limb = t as Limb;
			carry = t >> LIMB_BITS;
		}
		if carry != 0 {
			self.limbs.push(carry as Limb);
		}
	}

	/// `self = self / d`, returns `self % d`.
	///
	/// Preconditions:
	/// - `d != 0`
	pub fn div_mod(&mut self, d: Limb) -> Limb {
		debug_assert!(d != 0);
		let mut rem: Double = 0;
		for limb in self.limbs.iter_mut().rev() {
			let t = (rem << LIMB_BITS) | (*limb as Double);
			*limb = (t / (d as Double)) as Limb;
			rem = t % (d as Double);
		}
		while let Some(&0) = self.limbs.last() {
			self.limbs.pop();
		}
		rem as Limb
	}

	/// Limb-wise OR. Never truncates: the result is as wide as the wider
	/// of the two operands.
	pub fn bit_or(a: &Wide, b: &Wide) -> Wide {
		let (long, short) = if a.limbs.len() >= b.limbs.len() { (a, b) } else { (b, a) };
		let mut limbs = long.limbs.clone();
		for (r, s) in limbs.iter_mut().zip(short.limbs.iter()) {
			*r |= *s;
		}
		Wide { limbs }
	}

	/// Parses a non-negative decimal integer. An optional leading `+` is
	/// accepted; anything else outside `0-9` is a parse error.
	pub fn from_decimal_str(text: &str) -> Result<Wide, Error> {
		let mut bytes = text.as_bytes();
		if bytes.is_empty() {
			return Err(Error::new_parse_error("Wide::from_decimal_str: empty string"));
		}
		if bytes[0] == b'+' {
			bytes = &bytes[1..];
		}
		if bytes.is_empty() {
			return Err(Error::new_parse_error("Wide::from_decimal_str: no digits found"));
		}
		for c in bytes {
			if !c.is_ascii_digit() {
				return Err(Error::new_parse_error("Wide::from_decimal_str: invalid digit"));
			}
		}

		// The first segment takes the leftover length so every following
		// segment is exactly one big-base step.
		let head_len = if bytes.len() > DEC_DIGITS_PER_LIMB {
			bytes.len() % DEC_DIGITS_PER_LIMB
		} else {
			bytes.len()
		};
		let (head, tail) = bytes.split_at(head_len);

		let mut r = Wide::zero();
		r.mul_add(DEC_BIG_BASE, dec_segment(head));
		for segment in tail.chunks_exact(DEC_DIGITS_PER_LIMB) {
			r.mul_add(DEC_BIG_BASE, dec_segment(segment));
		}
		Ok(r)
	}

	pub fn to_decimal_string(&self) -> String {
		if self.is_zero() {
			return "0".to_string();
		}

		let mut tmp = self.clone();
		let mut segments: SmallVec<[Limb; 4]> = SmallVec::new();
		while !tmp.is_zero() {
			segments.push(tmp.div_mod(DEC_BIG_BASE));
		}

		let mut out = String::new();
		let mut iter = segments.iter().rev();
		if let Some(top) = iter.next() {
			out.push_str(&top.to_string());
		}
		for segment in iter {
			out.push_str(&format!("{:019}", segment));
		}
		out
	}

	/// Folds a run of digits (most significant first) into a magnitude,
	/// grouped `digits_per_limb` at a time.
	///
	/// Digits are assumed to be below `info.base`; that is the list's
	/// range invariant, not re-checked here.
	pub fn from_digit_run(info: &RadixInfo, digits: &[u8]) -> Wide {
		let dpl = info.digits_per_limb;
		let head_len = if digits.len() > dpl { digits.len() % dpl } else { digits.len() };
		let (head, tail) = digits.split_at(head_len);

		let mut r = Wide::zero();
		r.mul_add(info.big_base, info.parse_segment(head));
		for segment in tail.chunks_exact(dpl) {
			r.mul_add(info.big_base, info.parse_segment(segment));
		}
		r
	}

	/// Expands the magnitude into digits of `info.base`, most significant
	/// first. Zero expands to a single `0` digit.
	pub fn to_digit_run(&self, info: &RadixInfo) -> Result<Vec<u8>, Error> {
		assert(info.base <= u8::MAX as Limb + 1, || {
			Error::new_invalid_base("Wide::to_digit_run: digits of this base do not fit u8")
		})?;

		if self.is_zero() {
			return Ok(vec![0]);
		}

		let mut tmp = self.clone();
		let mut out: Vec<u8> = Vec::new();
		while !tmp.is_zero() {
			let mut seg = tmp.div_mod(info.big_base);
			if tmp.is_zero() {
				// top segment, no zero padding
				while seg != 0 {
					out.push((seg % info.base) as u8);
					seg /= info.base;
				}
			} else {
				for _ in 0..info.digits_per_limb {
					out.push((seg % info.base) as u8);
					seg /= info.base;
				}
			}
		}
		out.reverse();
		Ok(out)
	}
}

fn dec_segment(segment: &[u8]) -> Limb {
	debug_assert!(segment.len() <= DEC_DIGITS_PER_LIMB);
	let mut val: Limb = 0;
	for c in segment {
		val = val * 10 + (*c - b'0') as Limb;
	}
	val
}

//--------------------------------------------------------------------------------------------------
