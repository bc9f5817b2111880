/// Handle to a slot in the arena.
///
/// We use a sentinel instead of `Option<NodeId>` so the handle stays a plain
/// word and link fields can be compared and copied without unwrapping.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct NodeId(u32);

impl NodeId {
	pub const NIL: NodeId = NodeId(u32::MAX);

	#[inline]
	pub fn is_nil(self) -> bool {
		self == Self::NIL
	}
}

/// One node of the circular list.
///
/// `next` and `prev` are handles, never references. A dead slot keeps its
/// storage and its handle stays stable; `next` is reused to thread the
/// free list while the slot is dead.
#[derive(Clone)]
pub(crate) struct Node {
	pub value: u8,
	pub next: NodeId,
	pub prev: NodeId,
	live: bool,
}

/// Owning store for all nodes of a list.
///
/// Removal marks a slot dead instead of deallocating, so handles held
/// elsewhere never dangle; they can only name a slot that `is_live()`
/// reports as dead. Dead slots are recycled in LIFO order.
#[derive(Clone)]
pub(crate) struct Arena {
	slots: Vec<Node>,
	free: NodeId,
}

impl Arena {
	pub fn new() -> Self {
		Self { slots: Vec::new(), free: NodeId::NIL }
	}

	/// Allocates a slot for `value` with NIL links. The caller is
	/// responsible for splicing the node into the ring.
	pub fn alloc(&mut self, value: u8) -> NodeId {
		if self.free.is_nil() {
			debug_assert!(self.slots.len() < u32::MAX as usize);
			let id = NodeId(self.slots.len() as u32);
			self.slots.push(Node {
				value,
				next: NodeId::NIL,
				prev: NodeId::NIL,
				live: true,
			});
			id
		} else {
			let id = self.free;
			let slot = &mut self.slots[id.0 as usize];
			self.free = slot.next;
			slot.value = value;
			slot.next = NodeId::NIL;
			slot.prev = NodeId::NIL;
			slot.live = true;
			id
		}
	}

	/// Marks the slot dead and pushes it onto the free list.
	pub fn free(&mut self, id: NodeId) {
		debug_assert!(self.is_live(id));
		let free = self.free;
		let slot = &mut self.slots[id.0 as usize];
		slot.live = false;
		slot.next = free;
		slot.prev = NodeId::NIL;
		self.free = id;
	}

	/// Drops all slots at once. Handles into this arena become invalid.
	pub fn clear(&mut self) {
		self.slots.clear();
		self.free = NodeId::NIL;
	}

	pub fn is_live(&self, id: NodeId) -> bool {
		!id.is_nil() && self.slots[id.0 as usize].live
	}

	#[inline]
	pub fn node(&self, id: NodeId) -> &Node {
		debug_assert!(self.is_live(id));
		&self.slots[id.0 as usize]
	}

	#[inline]
	pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
		debug_assert!(self.is_live(id));
		&mut self.slots[id.0 as usize]
	}
}

//--------------------------------------------------------------------------------------------------
