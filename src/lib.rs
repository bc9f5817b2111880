//! A fixed-radix digit list.
//!
//! `DigitList` stores an arbitrary-precision non-negative integer as a
//! circular doubly-linked sequence of digits in a configurable base, most
//! significant digit first. The ring lives in an owning arena and all links
//! are stable integer handles, so no node ever holds a reference into
//! another node.
//!
//! Range policy: a digit is checked against the current base at the point
//! where it enters the list (positional insert, cursor insert, digit-run
//! construction). `set`, the cursor's `set` and `set_base` deliberately do
//! not re-validate, so a base change never touches stored digits.

use log::debug;

mod arena;
pub mod cursor;
pub mod error;
pub mod io;
pub mod radix;
pub mod wide;

use arena::{Arena, NodeId};
pub use cursor::Cursor;
pub use error::{Error, ErrorKind};
use error::assert;
pub use radix::RadixInfo;
pub use wide::Wide;

/// Base of a freshly constructed list.
pub const DEFAULT_BASE: usize = 2;

#[macro_export]
macro_rules! testlist {
	($base:expr; $($x:expr),* $(,)?) => {
		$crate::DigitList::from_digits($base, &[$($x),*]).unwrap()
	};
}

/// Circular doubly-linked sequence of digits in `[0, base)`.
///
/// Index 0 is the most significant digit (the node `head` names); index
/// `size - 1` is the least significant. When non-empty, following `next`
/// handles from any node exactly `size` times returns to that node and
/// `prev` is the exact inverse; the sole node of a one-element list links
/// to itself both ways.
#[derive(Clone)]
pub struct DigitList {
	arena: Arena,
	head: NodeId,
	size: usize,
	base: usize,
}

impl DigitList {
	/// Empty list in the default base.
	pub fn new() -> Self {
		Self {
			arena: Arena::new(),
			head: NodeId::NIL,
			size: 0,
			base: DEFAULT_BASE,
		}
	}

	/// Empty list in the given base.
	pub fn new_in_base(base: usize) -> Result<Self, Error> {
		let mut list = Self::new();
		list.set_base(base)?;
		Ok(list)
	}

	/// Builds a list by appending `digits` in order. Every digit must be
	/// below `base`.
	pub fn from_digits(base: usize, digits: &[u8]) -> Result<Self, Error> {
		let mut list = Self::new_in_base(base)?;
		for digit in digits {
			list.push(*digit)?;
		}
		Ok(list)
	}

	/// Parses `text` as a decimal integer and populates the list with its
	/// digits in `base`, most significant first. The value zero becomes a
	/// single `0` digit.
	pub fn from_decimal_str(text: &str, base: usize) -> Result<Self, Error> {
		let info = RadixInfo::get(base)?;
		let value = Wide::from_decimal_str(text)?;
		let digits = value.to_digit_run(&info)?;
		debug!("from_decimal_str: {} chars -> {} digits in base {}", text.len(), digits.len(), base);
		Self::from_digits(base, &digits)
	}

	pub fn len(&self) -> usize {
		self.size
	}

	pub fn is_empty(&self) -> bool {
		self.size == 0
	}

	pub fn base(&self) -> usize {
		self.base
	}

	/// Changes the base. Stored digits are deliberately left as they are,
	/// even when the new base makes some of them out of range.
	pub fn set_base(&mut self, base: usize) -> Result<(), Error> {
		assert(base > 1, || Error::new_invalid_base("DigitList::set_base: base must be at least 2"))?;
		self.base = base;
		Ok(())
	}

	fn check_digit(&self, value: u8) -> Result<(), Error> {
		assert((value as usize) < self.base, || {
			Error::new_digit_out_of_range("digit not below the current base")
		})
	}

	/// Walks the ring to the node at `index`.
	///
	/// Preconditions:
	/// - `index < size`
	fn node_at(&self, index: usize) -> NodeId {
		debug_assert!(index < self.size);
		let mut cur = self.head;
		for _ in 0..index {
			cur = self.arena.node(cur).next;
		}
		cur
	}

	pub fn get(&self, index: usize) -> Result<u8, Error> {
		assert(index < self.size, || Error::new_index_out_of_bounds("DigitList::get"))?;
		Ok(self.arena.node(self.node_at(index)).value)
	}

	/// Overwrites the digit at `index` and returns the previous one.
	/// `value` is not validated against the base; see the range policy.
	pub fn set(&mut self, index: usize, value: u8) -> Result<u8, Error> {
		assert(index < self.size, || Error::new_index_out_of_bounds("DigitList::set"))?;
		let id = self.node_at(index);
		let node = self.arena.node_mut(id);
		let old = node.value;
		node.value = value;
		Ok(old)
	}

	/// Splices a new node for `value` in front of the node at `index`;
	/// `index == size` appends. No checks.
	fn insert_raw(&mut self, index: usize, value: u8) {
		debug_assert!(index <= self.size);
		let n = self.arena.alloc(value);
		if self.head.is_nil() {
			let node = self.arena.node_mut(n);
			node.next = n;
			node.prev = n;
			self.head = n;
		} else {
			// appending splices in front of head, the tail position
			let at = if index == self.size { self.head } else { self.node_at(index) };
			self.splice_before(at, n);
			if index == 0 {
				self.head = n;
			}
		}
		self.size += 1;
	}

	/// Links `n` into the ring directly before `at`.
	fn splice_before(&mut self, at: NodeId, n: NodeId) {
		let prev = self.arena.node(at).prev;
		self.arena.node_mut(prev).next = n;
		self.arena.node_mut(at).prev = n;
		let node = self.arena.node_mut(n);
		node.prev = prev;
		node.next = at;
	}

	/// Inserts `value` so that it ends up at `index`; `index == size`
	/// appends.
	pub fn insert(&mut self, index: usize, value: u8) -> Result<(), Error> {
		assert(index <= self.size, || Error::new_index_out_of_bounds("DigitList::insert"))?;
		self.check_digit(value)?;
		self.insert_raw(index, value);
		Ok(())
	}

	/// Appends at the least-significant end.
	pub fn push(&mut self, value: u8) -> Result<(), Error> {
		self.insert(self.size, value)
	}

	/// Unlinks a node from the ring, maintaining `head`, and frees its
	/// slot. Returns the digit it held.
	fn unlink(&mut self, id: NodeId) -> u8 {
		let value = self.arena.node(id).value;
		if self.size == 1 {
			self.head = NodeId::NIL;
		} else {
			let node = self.arena.node(id);
			let (prev, next) = (node.prev, node.next);
			self.arena.node_mut(prev).next = next;
			self.arena.node_mut(next).prev = prev;
			if id == self.head {
				self.head = next;
			}
		}
		self.size -= 1;
		self.arena.free(id);
		value
	}

	/// Removes and returns the digit at `index`. Removing the head node
	/// advances `head` to its successor.
	pub fn remove_at(&mut self, index: usize) -> Result<u8, Error> {
		assert(index < self.size, || Error::new_index_out_of_bounds("DigitList::remove_at"))?;
		let id = self.node_at(index);
		Ok(self.unlink(id))
	}

	/// Index of the first occurrence of `value`.
	pub fn index_of(&self, value: u8) -> Option<usize> {
		let mut cur = self.head;
		for i in 0..self.size {
			let node = self.arena.node(cur);
			if node.value == value {
				return Some(i);
			}
			cur = node.next;
		}
		None
	}

	/// Index of the last occurrence of `value`, scanning backward.
	pub fn last_index_of(&self, value: u8) -> Option<usize> {
		if self.head.is_nil() {
			return None;
		}
		let mut cur = self.arena.node(self.head).prev;
		for i in (0..self.size).rev() {
			let node = self.arena.node(cur);
			if node.value == value {
				return Some(i);
			}
			cur = node.prev;
		}
		None
	}

	pub fn contains(&self, value: u8) -> bool {
		self.index_of(value).is_some()
	}

	/// Removes the first occurrence of `value`. Returns whether anything
	/// was removed.
	pub fn remove_value(&mut self, value: u8) -> bool {
		if let Some(index) = self.index_of(value) {
			let id = self.node_at(index);
			self.unlink(id);
			true
		} else {
			false
		}
	}

	pub fn clear(&mut self) {
		self.arena.clear();
		self.head = NodeId::NIL;
		self.size = 0;
	}

	/// Exchanges the digits at two positions.
	pub fn swap(&mut self, i: usize, j: usize) -> Result<(), Error> {
		assert(i < self.size, || Error::new_index_out_of_bounds("DigitList::swap"))?;
		assert(j < self.size, || Error::new_index_out_of_bounds("DigitList::swap"))?;
		let a = self.node_at(i);
		let b = self.node_at(j);
		let av = self.arena.node(a).value;
		let bv = self.arena.node(b).value;
		self.arena.node_mut(a).value = bv;
		self.arena.node_mut(b).value = av;
		Ok(())
	}

	/// Pairwise compare-and-swap over all index pairs, O(size**2).
	/// Equal digits may trade places, so the sort is not stable.
	fn sort_pairwise(&mut self, descending: bool) {
		let mut a_id = self.head;
		for i in 0..self.size {
			let mut b_id = self.arena.node(a_id).next;
			for _ in i + 1..self.size {
				let a = self.arena.node(a_id).value;
				let b = self.arena.node(b_id).value;
				let out_of_order = if descending { a < b } else { a > b };
				if out_of_order {
					self.arena.node_mut(a_id).value = b;
					self.arena.node_mut(b_id).value = a;
				}
				b_id = self.arena.node(b_id).next;
			}
			a_id = self.arena.node(a_id).next;
		}
	}

	pub fn sort_ascending(&mut self) {
		self.sort_pairwise(false);
	}

	pub fn sort_descending(&mut self) {
		self.sort_pairwise(true);
	}

	/// Rotates left by one: the first digit becomes the last. On a
	/// circular ring this is just advancing `head`. No-op when empty.
	pub fn shift_left(&mut self) {
		if !self.head.is_nil() {
			self.head = self.arena.node(self.head).next;
		}
	}

	/// Rotates right by one: the last digit becomes the first.
	pub fn shift_right(&mut self) {
		if !self.head.is_nil() {
			self.head = self.arena.node(self.head).prev;
		}
	}

	/// Structural copy of `[from, to)` into a new independent list in the
	/// default base. The copied digits keep their values as they are; with
	/// the default base they may be out of range until the caller sets a
	/// fitting base (the same permissive stance `set_base` takes).
	pub fn sub_list(&self, from: usize, to: usize) -> Result<DigitList, Error> {
		assert(from <= to && to <= self.size, || {
			Error::new_index_out_of_bounds("DigitList::sub_list")
		})?;
		let mut out = DigitList::new();
		if from == to {
			return Ok(out);
		}
		let mut cur = self.node_at(from);
		for _ in from..to {
			let node = self.arena.node(cur);
			out.insert_raw(out.size, node.value);
			cur = node.next;
		}
		Ok(out)
	}

	pub fn iter(&self) -> Digits<'_> {
		Digits { list: self, cur: self.head, remaining: self.size }
	}

	pub fn to_vec(&self) -> Vec<u8> {
		self.iter().collect()
	}

	/// Opens a cursor positioned so that the first `next()` returns the
	/// digit at `index`; `index == size` starts past the end.
	pub fn cursor(&mut self, index: usize) -> Result<Cursor<'_>, Error> {
		Cursor::new(self, index)
	}

	/// The represented value: digits read most-significant-first under the
	/// current base.
	fn magnitude(&self) -> Wide {
		// base > 1 is an invariant kept by every constructor and set_base
		let info = RadixInfo::from_base(self.base as wide::Limb);
		Wide::from_digit_run(&info, &self.to_vec())
	}

	/// Renders the represented value in decimal. An empty list renders as
	/// `"0"`.
	pub fn to_decimal_string(&self) -> String {
		self.magnitude().to_decimal_string()
	}

	/// Re-expands the represented value into `target`, returning a new
	/// independent list configured to that base.
	pub fn to_base(&self, target: usize) -> Result<DigitList, Error> {
		let info = RadixInfo::get(target)?;
		let digits = self.magnitude().to_digit_run(&info)?;
		debug!("to_base: {} digits in base {} -> {} digits in base {}", self.size, self.base, digits.len(), target);
		Self::from_digits(target, &digits)
	}

	/// Bitwise OR of the two represented values, rebuilt from the decimal
	/// form in the default base.
	///
	/// Both operands are read under the receiver's base; the lists are
	/// assumed to share it. The OR itself is performed on the full
	/// magnitudes, so it never truncates.
	pub fn combine_or(&self, other: &DigitList) -> Result<DigitList, Error> {
		let info = RadixInfo::from_base(self.base as wide::Limb);
		let a = self.magnitude();
		let b = Wide::from_digit_run(&info, &other.to_vec());
		let r = Wide::bit_or(&a, &b);
		Self::from_decimal_str(&r.to_decimal_string(), DEFAULT_BASE)
	}
}

impl Default for DigitList {
	fn default() -> Self {
		Self::new()
	}
}

impl PartialEq for DigitList {
	fn eq(&self, other: &Self) -> bool {
		if self.size != other.size || self.base != other.base {
			return false;
		}
		let mut a = self.head;
		let mut b = other.head;
		for _ in 0..self.size {
			let an = self.arena.node(a);
			let bn = other.arena.node(b);
			if an.value != bn.value {
				return false;
			}
			a = an.next;
			b = bn.next;
		}
		true
	}
}

impl Eq for DigitList {}

impl std::fmt::Display for DigitList {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for digit in self.iter() {
			write!(f, "{}", digit)?;
		}
		Ok(())
	}
}

impl std::fmt::Debug for DigitList {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DigitList")
			.field("base", &self.base)
			.field("digits", &self.to_vec())
			.finish()
	}
}

/// Forward iterator over the digits, most significant first.
pub struct Digits<'a> {
	list: &'a DigitList,
	cur: NodeId,
	remaining: usize,
}

impl<'a> Iterator for Digits<'a> {
	type Item = u8;

	fn next(&mut self) -> Option<u8> {
		if self.remaining == 0 {
			return None;
		}
		let node = self.list.arena.node(self.cur);
		self.cur = node.next;
		self.remaining -= 1;
		Some(node.value)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl<'a> ExactSizeIterator for Digits<'a> {}

impl<'a> IntoIterator for &'a DigitList {
	type Item = u8;
	type IntoIter = Digits<'a>;

	fn into_iter(self) -> Digits<'a> {
		self.iter()
	}
}

//--------------------------------------------------------------------------------------------------
