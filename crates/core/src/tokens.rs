//! Request sequencing so only the newest response of each kind is applied.

/// The four request families the controller issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
	Status,
	Suggestions,
	Search,
	Document,
}

const KIND_COUNT: usize = 4;

impl RequestKind {
	const fn slot(self) -> usize {
		match self {
			Self::Status => 0,
			Self::Suggestions => 1,
			Self::Search => 2,
			Self::Document => 3,
		}
	}
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
	pub kind: RequestKind,
	pub seq: u64,
}

/// Monotonic per-kind sequence counters.
#[derive(Debug, Clone, Default)]
pub struct RequestTokens {
	latest: [u64; KIND_COUNT],
}

impl RequestTokens {
	/// Issue a fresh token, superseding every earlier one of the same kind.
	pub fn issue(&mut self, kind: RequestKind) -> Token {
		let slot = &mut self.latest[kind.slot()];
		*slot = slot.wrapping_add(1);
		Token { kind, seq: *slot }
	}

	/// Supersede all outstanding requests of `kind` without issuing a new one.
	pub fn invalidate(&mut self, kind: RequestKind) {
		let slot = &mut self.latest[kind.slot()];
		*slot = slot.wrapping_add(1);
	}

	#[must_use]
	pub fn is_latest(&self, token: Token) -> bool {
		self.latest[token.kind.slot()] == token.seq
	}
}
