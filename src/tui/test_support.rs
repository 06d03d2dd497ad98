use ratatui::buffer::Buffer;

pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line.trim_end().to_string());
	}
	lines.join("\n")
}
