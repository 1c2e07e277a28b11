pub mod stakeholder_map;
pub mod theme_explorer;

/// `[hh:mm:ss]` wall-clock stamp for the widget activity logs.
pub(crate) fn timestamp() -> String {
	let now = js_sys::Date::new_0();
	format!(
		"{:02}:{:02}:{:02}",
		now.get_hours(),
		now.get_minutes(),
		now.get_seconds()
	)
}
