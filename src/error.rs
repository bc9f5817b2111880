#[derive(PartialEq)]
pub struct Error {
	pub kind: ErrorKind,
	pub message: &'static str,
}

#[derive(PartialEq, Debug)]
pub enum ErrorKind {
	IndexOutOfBounds,
	DigitOutOfRange,
	InvalidBase,
	NoSuchElement,
	IllegalState,
	ParseError,
	IoFailed,
}

impl std::fmt::Debug for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Error").field("kind", &self.kind).field("message", &self.message).finish()
	}
}

impl Error {
	pub fn new(kind: ErrorKind, msg: &'static str) -> Self {
		Self { kind, message: msg }
	}

	pub fn new_index_out_of_bounds(msg: &'static str) -> Self {
		Self::new(ErrorKind::IndexOutOfBounds, msg)
	}

	pub fn new_digit_out_of_range(msg: &'static str) -> Self {
		Self::new(ErrorKind::DigitOutOfRange, msg)
	}

	pub fn new_invalid_base(msg: &'static str) -> Self {
		Self::new(ErrorKind::InvalidBase, msg)
	}

	pub fn new_no_such_element(msg: &'static str) -> Self {
		Self::new(ErrorKind::NoSuchElement, msg)
	}

	pub fn new_illegal_state(msg: &'static str) -> Self {
		Self::new(ErrorKind::IllegalState, msg)
	}

	pub fn new_parse_error(msg: &'static str) -> Self {
		Self::new(ErrorKind::ParseError, msg)
	}

	pub fn new_io_failed(msg: &'static str) -> Self {
		Self::new(ErrorKind::IoFailed, msg)
	}
}

#[inline(always)]
#[must_use]
pub fn assert(what: bool, err: fn() -> Error) -> Result<(), Error> {
	if what {
		Ok(())
	} else {
		Err(err())
	}
}
