pub const PDF_MIME: &str = "application/pdf";

/// The PDF picked for upload. Only metadata is kept; contents never leave the input.
#[derive(Clone, Debug, PartialEq)]
pub struct PdfFile {
	pub name: String,
	pub size_bytes: f64,
}

impl PdfFile {
	/// Returns `None` for anything that is not a PDF.
	pub fn accept(name: &str, mime: &str, size_bytes: f64) -> Option<Self> {
		(mime == PDF_MIME).then(|| Self {
			name: name.into(),
			size_bytes,
		})
	}

	pub fn size_label(&self) -> String {
		format!("{:.2} MB", self.size_bytes / 1024.0 / 1024.0)
	}
}

/// Ordered, duplicate-free tags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagList(Vec<String>);

impl TagList {
	/// Adds the trimmed tag. Returns false if it was blank or already present.
	pub fn add(&mut self, input: &str) -> bool {
		let tag = input.trim();
		if tag.is_empty() || self.0.iter().any(|t| t == tag) {
			return false;
		}
		self.0.push(tag.into());
		true
	}

	pub fn remove(&mut self, tag: &str) {
		self.0.retain(|t| t != tag);
	}

	pub fn as_slice(&self) -> &[String] {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// Everything entered on the inherit form before submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Draft {
	pub successor: String,
	pub file: Option<PdfFile>,
	pub tags: TagList,
}

impl Draft {
	pub fn can_submit(&self) -> bool {
		!self.successor.is_empty() && self.file.is_some()
	}
}
