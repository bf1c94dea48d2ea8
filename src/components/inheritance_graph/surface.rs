use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

/// The handful of drawing primitives the graph needs.
pub trait Surface {
	fn clear(&self, width: f64, height: f64);
	fn line(&self, from: (f64, f64), to: (f64, f64), color: &str, width: f64);
	fn circle(&self, center: (f64, f64), radius: f64, fill: &str, border: &str, border_width: f64);
	fn centered_text(&self, text: &str, at: (f64, f64), color: &str, font: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn line(&self, (x1, y1): (f64, f64), (x2, y2): (f64, f64), color: &str, width: f64) {
		self.begin_path();
		self.move_to(x1, y1);
		self.line_to(x2, y2);
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.stroke();
	}

	fn circle(&self, (x, y): (f64, f64), radius: f64, fill: &str, border: &str, border_width: f64) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, 2.0 * PI);
		self.set_fill_style_str(fill);
		self.fill();
		self.set_stroke_style_str(border);
		self.set_line_width(border_width);
		self.stroke();
	}

	fn centered_text(&self, text: &str, (x, y): (f64, f64), color: &str, font: &str) {
		self.set_fill_style_str(color);
		self.set_font(font);
		self.set_text_align("center");
		self.set_text_baseline("middle");
		let _ = self.fill_text(text, x, y);
	}
}
