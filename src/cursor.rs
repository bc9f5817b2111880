use crate::DigitList;
use crate::arena::NodeId;
use crate::error::{Error, assert};

/// Bidirectional cursor over a [`DigitList`], supporting structural
/// mutation mid-traversal.
///
/// The cursor borrows the list mutably for its whole lifetime, so the
/// list cannot be mutated through any other path while a cursor is alive;
/// the handles held here can never go stale.
pub struct Cursor<'a> {
	list: &'a mut DigitList,
	/// Node to be returned by the next forward step. `next_index == size`
	/// marks the past-the-end position; there `next` is NIL when the cursor
	/// was constructed at the end (or the list emptied through it), but
	/// wraps onto `head` when a forward step walked off the tail.
	next: NodeId,
	/// Logical index of `next`.
	next_index: usize,
	/// Last node returned by `next()`/`previous()`; NIL until a step is
	/// taken and after every structural mutation through the cursor.
	last: NodeId,
}

impl<'a> Cursor<'a> {
	pub(crate) fn new(list: &'a mut DigitList, index: usize) -> Result<Self, Error> {
		assert(index <= list.size, || Error::new_index_out_of_bounds("Cursor::new"))?;
		let next = if index == list.size { NodeId::NIL } else { list.node_at(index) };
		Ok(Self { list, next, next_index: index, last: NodeId::NIL })
	}

	pub fn has_next(&self) -> bool {
		self.next_index < self.list.size
	}

	pub fn has_previous(&self) -> bool {
		self.next_index > 0
	}

	/// Index of the digit the next forward step would return.
	pub fn next_index(&self) -> usize {
		self.next_index
	}

	/// Index of the digit the next backward step would return, or `None`
	/// at the front.
	pub fn previous_index(&self) -> Option<usize> {
		self.next_index.checked_sub(1)
	}

	/// Steps forward and returns the digit stepped over.
	pub fn next(&mut self) -> Result<u8, Error> {
		assert(self.has_next(), || Error::new_no_such_element("Cursor::next"))?;
		let node = self.list.arena.node(self.next);
		let (value, after) = (node.value, node.next);
		self.last = self.next;
		self.next = after;
		self.next_index += 1;
		Ok(value)
	}

	/// Steps backward and returns the digit stepped over.
	pub fn previous(&mut self) -> Result<u8, Error> {
		assert(self.has_previous(), || Error::new_no_such_element("Cursor::previous"))?;
		let prev = if self.next.is_nil() {
			// past the end; the last logical element is head.prev
			self.list.arena.node(self.list.head).prev
		} else {
			self.list.arena.node(self.next).prev
		};
		self.next = prev;
		self.last = prev;
		self.next_index -= 1;
		Ok(self.list.arena.node(prev).value)
	}

	/// Removes the node last returned by `next()`/`previous()`.
	pub fn remove(&mut self) -> Result<(), Error> {
		assert(!self.last.is_nil(), || {
			Error::new_illegal_state("Cursor::remove: no element returned")
		})?;
		let last = self.last;
		let after = self.list.arena.node(last).next;
		self.list.unlink(last);
		if self.list.size == 0 {
			// on a one-node ring `next` wraps onto the removed node no
			// matter which direction reached it, so reset outright
			self.next = NodeId::NIL;
			self.next_index = 0;
		} else if self.next == last {
			// removed the node about to be returned; step over it
			self.next = after;
		} else {
			self.next_index -= 1;
		}
		self.last = NodeId::NIL;
		Ok(())
	}

	/// Overwrites the digit last returned by `next()`/`previous()`.
	/// `value` is not validated against the base; see the range policy.
	pub fn set(&mut self, value: u8) -> Result<(), Error> {
		assert(!self.last.is_nil(), || {
			Error::new_illegal_state("Cursor::set: no element returned")
		})?;
		self.list.arena.node_mut(self.last).value = value;
		Ok(())
	}

	/// Inserts `value` directly before the cursor position (as the sole
	/// node if the list was empty; appended when positioned past the end)
	/// and steps over it.
	pub fn insert(&mut self, value: u8) -> Result<(), Error> {
		self.list.check_digit(value)?;
		if self.next.is_nil() {
			self.list.insert_raw(self.list.size, value);
		} else {
			let n = self.list.arena.alloc(value);
			self.list.splice_before(self.next, n);
			if self.next_index == 0 {
				self.list.head = n;
			}
			self.list.size += 1;
		}
		self.next_index += 1;
		self.last = NodeId::NIL;
		Ok(())
	}
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ErrorKind;
	use crate::testlist;

	#[test]
	fn test_forward_traversal() {
		let mut list = testlist![2; 1, 1, 0, 1];
		let mut cur = list.cursor(0).unwrap();

		assert!(cur.has_next());
		assert!(!cur.has_previous());
		assert_eq!(cur.next_index(), 0);
		assert_eq!(cur.previous_index(), None);

		assert_eq!(cur.next(), Ok(1));
		assert_eq!(cur.next(), Ok(1));
		assert_eq!(cur.next(), Ok(0));
		assert_eq!(cur.next(), Ok(1));
		assert!(!cur.has_next());
		assert_eq!(cur.next_index(), 4);
		assert_eq!(cur.previous_index(), Some(3));
		assert_eq!(cur.next().unwrap_err().kind, ErrorKind::NoSuchElement);
	}

	#[test]
	fn test_backward_traversal() {
		let mut list = testlist![2; 1, 1, 0, 1];
		let mut cur = list.cursor(4).unwrap();

		assert!(!cur.has_next());
		assert_eq!(cur.previous(), Ok(1));
		assert_eq!(cur.previous(), Ok(0));
		assert_eq!(cur.previous(), Ok(1));
		assert_eq!(cur.previous(), Ok(1));
		assert!(!cur.has_previous());
		assert_eq!(cur.previous().unwrap_err().kind, ErrorKind::NoSuchElement);

		// forward again from the front
		assert_eq!(cur.next(), Ok(1));
	}

	#[test]
	fn test_new_bounds() {
		let mut list = testlist![2; 1, 0];
		assert!(list.cursor(2).is_ok());
		let err = list.cursor(3).map(|_| ()).unwrap_err();
		assert_eq!(err.kind, ErrorKind::IndexOutOfBounds);
	}

	#[test]
	fn test_remove_after_next() {
		let mut list = testlist![10; 3, 1, 4, 1, 5];
		let mut cur = list.cursor(0).unwrap();
		assert_eq!(cur.next(), Ok(3));
		assert_eq!(cur.next(), Ok(1));
		cur.remove().unwrap();

		// cursor position is unchanged relative to the remaining digits
		assert_eq!(cur.next_index(), 1);
		assert_eq!(cur.next(), Ok(4));
		assert_eq!(list.to_vec(), vec![3, 4, 1, 5]);
	}

	#[test]
	fn test_remove_after_previous() {
		let mut list = testlist![10; 3, 1, 4, 1, 5];
		let mut cur = list.cursor(5).unwrap();
		assert_eq!(cur.previous(), Ok(5));
		assert_eq!(cur.previous(), Ok(1));

		// the removed node is the one about to be returned by next()
		cur.remove().unwrap();
		assert_eq!(cur.next_index(), 3);
		assert_eq!(cur.next(), Ok(5));
		assert_eq!(list.to_vec(), vec![3, 1, 4, 5]);
	}

	#[test]
	fn test_remove_head_and_sole_node() {
		let mut list = testlist![2; 1, 0, 1];
		let mut cur = list.cursor(0).unwrap();
		assert_eq!(cur.next(), Ok(1));
		cur.remove().unwrap();
		assert_eq!(cur.next(), Ok(0));
		assert_eq!(list.to_vec(), vec![0, 1]);

		let mut list = testlist![2; 1];
		let mut cur = list.cursor(0).unwrap();
		assert_eq!(cur.next(), Ok(1));
		cur.remove().unwrap();
		assert!(!cur.has_next());
		assert!(!cur.has_previous());
		assert!(list.is_empty());
	}

	#[test]
	fn test_remove_tail_then_traverse() {
		// walk forward off the tail, remove it, then step back
		let mut list = testlist![10; 3, 1, 4];
		let mut cur = list.cursor(0).unwrap();
		assert_eq!(cur.next(), Ok(3));
		assert_eq!(cur.next(), Ok(1));
		assert_eq!(cur.next(), Ok(4));
		cur.remove().unwrap();
		assert!(!cur.has_next());
		assert_eq!(cur.next_index(), 2);
		assert_eq!(cur.previous(), Ok(1));
		assert_eq!(list.to_vec(), vec![3, 1]);

		// one previous() from an end cursor, remove the tail, insert appends
		let mut list = testlist![10; 3, 1, 4];
		let mut cur = list.cursor(3).unwrap();
		assert_eq!(cur.previous(), Ok(4));
		cur.remove().unwrap();
		assert_eq!(cur.next_index(), 2);
		assert!(!cur.has_next());
		cur.insert(5).unwrap();
		assert_eq!(cur.next_index(), 3);
		assert!(!cur.has_next());
		assert_eq!(list.to_vec(), vec![3, 1, 5]);
	}

	#[test]
	fn test_remove_illegal_state() {
		let mut list = testlist![2; 1, 0];
		let mut cur = list.cursor(0).unwrap();
		assert_eq!(cur.remove().unwrap_err().kind, ErrorKind::IllegalState);

		cur.next().unwrap();
		cur.remove().unwrap();
		// no intervening step: a second remove must fail
		assert_eq!(cur.remove().unwrap_err().kind, ErrorKind::IllegalState);
	}

	#[test]
	fn test_set() {
		let mut list = testlist![2; 1, 0, 1];
		let mut cur = list.cursor(0).unwrap();
		assert_eq!(cur.set(0).unwrap_err().kind, ErrorKind::IllegalState);

		cur.next().unwrap();
		cur.set(0).unwrap();
		cur.next().unwrap();
		cur.next().unwrap();
		cur.set(0).unwrap();
		assert_eq!(list.to_vec(), vec![0, 0, 0]);

		// set after previous() targets the node stepped back over
		let mut cur = list.cursor(3).unwrap();
		cur.previous().unwrap();
		// range is deliberately not enforced here
		cur.set(7).unwrap();
		assert_eq!(list.to_vec(), vec![0, 0, 7]);
	}

	#[test]
	fn test_insert() {
		let mut list = testlist![2; 1, 1];
		let mut cur = list.cursor(1).unwrap();
		cur.insert(0).unwrap();
		assert_eq!(cur.next_index(), 2);
		assert_eq!(list.to_vec(), vec![1, 0, 1]);

		// insert at the front moves the head
		let mut cur = list.cursor(0).unwrap();
		cur.insert(1).unwrap();
		assert_eq!(list.to_vec(), vec![1, 1, 0, 1]);

		// insert past the end appends
		let mut cur = list.cursor(4).unwrap();
		cur.insert(0).unwrap();
		assert_eq!(list.to_vec(), vec![1, 1, 0, 1, 0]);

		// insert into an empty list creates the sole node
		let mut empty = DigitList::new();
		let mut cur = empty.cursor(0).unwrap();
		cur.insert(1).unwrap();
		assert_eq!(cur.next_index(), 1);
		assert!(!cur.has_next());
		assert_eq!(empty.to_vec(), vec![1]);

		let mut list = testlist![2; 1];
		let mut cur = list.cursor(0).unwrap();
		assert_eq!(cur.insert(2).unwrap_err().kind, ErrorKind::DigitOutOfRange);
	}

	#[test]
	fn test_insert_clears_last_returned() {
		let mut list = testlist![2; 1, 0];
		let mut cur = list.cursor(0).unwrap();
		cur.next().unwrap();
		cur.insert(1).unwrap();
		// the insert cleared the last-returned node
		assert_eq!(cur.remove().unwrap_err().kind, ErrorKind::IllegalState);
		assert_eq!(cur.set(0).unwrap_err().kind, ErrorKind::IllegalState);
		assert_eq!(list.to_vec(), vec![1, 1, 0]);
	}

	#[test]
	fn test_mixed_traversal_and_mutation() {
		// strip all zeros while walking forward
		let mut list = testlist![10; 1, 0, 2, 0, 0, 3];
		let mut cur = list.cursor(0).unwrap();
		while cur.has_next() {
			if cur.next().unwrap() == 0 {
				cur.remove().unwrap();
			}
		}
		assert_eq!(list.to_vec(), vec![1, 2, 3]);
	}
}
