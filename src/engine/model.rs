//! Core data types shared by the matcher, layout, and both widgets.

/// Fixed set of stakeholder categories, each with a display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
	Government,
	Business,
	Community,
	Individual,
	Ngo,
}

impl Category {
	/// Every category, in the order the UI lists them.
	pub const ALL: &'static [Category] = &[
		Category::Government,
		Category::Business,
		Category::Community,
		Category::Individual,
		Category::Ngo,
	];

	pub fn label(self) -> &'static str {
		match self {
			Category::Government => "Government",
			Category::Business => "Business",
			Category::Community => "Community",
			Category::Individual => "Individual",
			Category::Ngo => "NGO",
		}
	}

	pub fn color(self) -> &'static str {
		match self {
			Category::Government => "#3b82f6",
			Category::Business => "#f59e0b",
			Category::Community => "#10b981",
			Category::Individual => "#8b5cf6",
			Category::Ngo => "#f43f5e",
		}
	}

	/// Parse a UI select value. Unknown labels fall back to `None`.
	pub fn parse(label: &str) -> Option<Category> {
		Category::ALL.iter().copied().find(|c| c.label() == label)
	}
}

/// One live stakeholder on the map surface.
#[derive(Clone, Debug)]
pub struct Stakeholder {
	/// Unique, monotonically assigned, never reused.
	pub id: u32,
	pub name: String,
	pub category: Category,
	/// Free text, comma-separated by convention.
	pub concerns: String,
	/// Free text, comma-separated by convention.
	pub values: String,
	/// Center position on the layout surface.
	pub x: f64,
	pub y: f64,
}

impl Stakeholder {
	/// The combined text the matcher tokenizes for this stakeholder.
	pub fn combined_text(&self) -> String {
		format!("{}, {}", self.concerns, self.values)
	}
}

/// A derived pairwise relation: two stakeholders sharing tokens.
///
/// Recomputed from scratch after every mutation; never stored across edits.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
	pub a: u32,
	pub b: u32,
	/// Deduplicated shared tokens, in first-side token order.
	pub shared: Vec<String>,
	/// Equal to `shared.len()`.
	pub weight: usize,
}
